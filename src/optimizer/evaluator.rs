//! # Contrato del Evaluador de Diseños
//!
//! El motor evolutivo no conoce las fórmulas de energía, coste o
//! confort: consume una capacidad `evaluate` pura y sin efectos, apta
//! para llamarse concurrentemente desde varios workers. Un fallo de
//! evaluación no aborta la ejecución: el individuo queda marcado como
//! infactible con valores centinela y pierde toda comparación.

use std::collections::{HashMap, VecDeque};

use rayon::prelude::*;
use tracing::warn;

use crate::error::OptimizerError;
use crate::optimizer::climate::ClimateContext;
use crate::optimizer::constraints::SiteConstraints;
use crate::optimizer::design::{
    BuildingDesign, ConstraintVector, DesignVector, ObjectiveVector, N_CONSTRAINTS, N_GENES,
    N_OBJECTIVES,
};

/// Centinela para evaluaciones fallidas o no finitas. Finito a
/// propósito: la aritmética de ordenación y crowding nunca debe ver
/// NaN ni infinitos procedentes del evaluador.
pub const SENTINEL: f64 = 1e12;

/// Fallo del modelo de evaluación para un diseño concreto
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("evaluation model failure: {0}")]
    Model(String),
}

/// Capacidad externa que calcula objetivos y restricciones de un
/// diseño. Debe ser pura: llamadas repetidas con entradas idénticas
/// devuelven salidas idénticas (requisito de reproducibilidad y de la
/// evaluación paralela).
pub trait DesignEvaluator: Sync {
    fn evaluate(
        &self,
        design: &DesignVector,
        climate: &ClimateContext,
        site: &SiteConstraints,
    ) -> Result<(ObjectiveVector, ConstraintVector), EvaluationError>;
}

/// Cualquier función pura sirve como evaluador
impl<F> DesignEvaluator for F
where
    F: Fn(
            &DesignVector,
            &ClimateContext,
            &SiteConstraints,
        ) -> Result<(ObjectiveVector, ConstraintVector), EvaluationError>
        + Sync,
{
    fn evaluate(
        &self,
        design: &DesignVector,
        climate: &ClimateContext,
        site: &SiteConstraints,
    ) -> Result<(ObjectiveVector, ConstraintVector), EvaluationError> {
        self(design, climate, site)
    }
}

/// Par centinela: objetivos pésimos y violación máxima
pub fn sentinel_pair() -> (ObjectiveVector, ConstraintVector) {
    (
        ObjectiveVector {
            values: [SENTINEL; N_OBJECTIVES],
        },
        ConstraintVector {
            values: [SENTINEL; N_CONSTRAINTS],
        },
    )
}

/// Caché LRU acotada de evaluaciones, indexada por el vector de diseño
/// cuantizado. Capacidad 0 la desactiva. Sólo se cachean éxitos.
#[derive(Debug)]
pub struct EvaluationCache {
    capacity: usize,
    map: HashMap<[i64; N_GENES], (ObjectiveVector, ConstraintVector)>,
    order: VecDeque<[i64; N_GENES]>,
    hits: u64,
    misses: u64,
}

impl EvaluationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Busca una evaluación cacheada y la marca como usada recientemente
    pub fn get(&mut self, key: &[i64; N_GENES]) -> Option<(ObjectiveVector, ConstraintVector)> {
        if self.capacity == 0 {
            return None;
        }
        match self.map.get(key) {
            Some(&value) => {
                self.hits += 1;
                if let Some(pos) = self.order.iter().position(|k| k == key) {
                    self.order.remove(pos);
                }
                self.order.push_back(*key);
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Inserta una evaluación, expulsando la entrada menos reciente si
    /// la caché está llena
    pub fn insert(&mut self, key: [i64; N_GENES], value: (ObjectiveVector, ConstraintVector)) {
        if self.capacity == 0 {
            return;
        }
        if self.map.contains_key(&key) {
            self.map.insert(key, value);
            return;
        }
        while self.map.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.map.remove(&oldest);
                }
                None => break,
            }
        }
        self.map.insert(key, value);
        self.order.push_back(key);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Evalúa un lote de vectores y devuelve los individuos en el mismo
/// orden. Los aciertos de caché se resuelven secuencialmente; los
/// fallos se evalúan en paralelo con rayon (el evaluador es puro y el
/// collect preserva el orden, así que el resultado es determinista).
///
/// Falla sólo si TODAS las evaluaciones de la generación fallan.
pub fn evaluate_generation<E>(
    evaluator: &E,
    vectors: &[DesignVector],
    climate: &ClimateContext,
    site: &SiteConstraints,
    cache: &mut EvaluationCache,
    generation: usize,
) -> Result<Vec<BuildingDesign>, OptimizerError>
where
    E: DesignEvaluator + ?Sized,
{
    // 1. Resolver aciertos de caché
    let mut resolved: Vec<Option<(ObjectiveVector, ConstraintVector)>> = vectors
        .iter()
        .map(|v| cache.get(&v.quantized_key()))
        .collect();

    // 2. Evaluar el resto en paralelo
    let pending: Vec<usize> = resolved
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_none())
        .map(|(i, _)| i)
        .collect();

    let fresh: Vec<Result<(ObjectiveVector, ConstraintVector), EvaluationError>> = pending
        .par_iter()
        .map(|&i| evaluator.evaluate(&vectors[i], climate, site))
        .collect();

    // 3. Integrar, sustituyendo fallos y valores no finitos por centinelas
    let mut failures = 0usize;
    for (&i, result) in pending.iter().zip(fresh) {
        let pair = match result {
            Ok((objectives, constraints))
                if objectives.is_finite() && constraints.is_finite() =>
            {
                cache.insert(vectors[i].quantized_key(), (objectives, constraints));
                (objectives, constraints)
            }
            _ => {
                failures += 1;
                sentinel_pair()
            }
        };
        resolved[i] = Some(pair);
    }

    if !vectors.is_empty() && failures == vectors.len() {
        return Err(OptimizerError::GenerationFailed { generation });
    }
    if failures > 0 {
        warn!(
            generation,
            failures,
            total = vectors.len(),
            "evaluaciones sustituidas por centinela"
        );
    }

    Ok(resolved
        .into_iter()
        .zip(vectors)
        .map(|(pair, &vector)| {
            let (objectives, constraints) = pair.unwrap_or_else(sentinel_pair);
            BuildingDesign::new(vector, objectives, constraints, generation)
        })
        .collect())
}
