//! # Ordenación No Dominada y Crowding
//!
//! Particiona una población en frentes de Pareto (algoritmo rápido de
//! conteo de dominación, O(N²·M)) y asigna la distancia de crowding
//! que se usa como desempate de diversidad dentro de cada frente.

use std::cmp::Ordering;

use crate::optimizer::design::{BuildingDesign, N_OBJECTIVES};

/// Ordena la población en frentes. Devuelve los frentes como listas de
/// índices (frente 0 primero) y escribe el rank en cada individuo.
/// Cada individuo acaba en exactamente un frente.
pub fn fast_non_dominated_sort(population: &mut [BuildingDesign]) -> Vec<Vec<usize>> {
    let n = population.len();
    if n == 0 {
        return Vec::new();
    }

    // dominated_by[i]: índices dominados por i
    // domination_count[i]: cuántos dominan a i
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut domination_count = vec![0usize; n];
    let mut fronts: Vec<Vec<usize>> = vec![Vec::new()];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if population[i].dominates(&population[j]) {
                dominated_by[i].push(j);
            } else if population[j].dominates(&population[i]) {
                domination_count[i] += 1;
            }
        }
        if domination_count[i] == 0 {
            population[i].rank = 0;
            fronts[0].push(i);
        }
    }

    let mut current = 0;
    while !fronts[current].is_empty() {
        let mut next = Vec::new();
        for &i in &fronts[current] {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    population[j].rank = current + 1;
                    next.push(j);
                }
            }
        }
        current += 1;
        fronts.push(next);
    }

    fronts.pop(); // el último frente siempre queda vacío
    fronts
}

/// Asigna la distancia de crowding dentro de un frente. Los extremos de
/// cada objetivo reciben distancia infinita; los frentes con menos de 3
/// miembros son todo extremos. Un objetivo sin rango en el frente no
/// aporta nada (evita la división por cero).
pub fn assign_crowding_distance(population: &mut [BuildingDesign], front: &[usize]) {
    let size = front.len();
    if size == 0 {
        return;
    }
    if size < 3 {
        for &i in front {
            population[i].crowding_distance = f64::INFINITY;
        }
        return;
    }

    for &i in front {
        population[i].crowding_distance = 0.0;
    }

    let mut order: Vec<usize> = front.to_vec();
    for m in 0..N_OBJECTIVES {
        order.sort_by(|&a, &b| {
            population[a].objectives.values[m]
                .partial_cmp(&population[b].objectives.values[m])
                .unwrap_or(Ordering::Equal)
        });

        let min = population[order[0]].objectives.values[m];
        let max = population[order[size - 1]].objectives.values[m];
        population[order[0]].crowding_distance = f64::INFINITY;
        population[order[size - 1]].crowding_distance = f64::INFINITY;

        let range = max - min;
        if range <= 0.0 {
            continue;
        }
        for k in 1..size - 1 {
            let prev = population[order[k - 1]].objectives.values[m];
            let next = population[order[k + 1]].objectives.values[m];
            population[order[k]].crowding_distance += (next - prev) / range;
        }
    }
}
