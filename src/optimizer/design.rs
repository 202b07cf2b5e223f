//! # Diseño de Envolvente
//!
//! Estructuras que representan un candidato de diseño: el vector de
//! genes, sus vectores de objetivos y restricciones cacheados, y los
//! metadatos de ranking que usa el algoritmo evolutivo.

use serde::{Deserialize, Serialize};

/// Número de genes del vector de diseño
pub const N_GENES: usize = 5;
/// Número de objetivos (energía, coste, confort negado)
pub const N_OBJECTIVES: usize = 3;
/// Número de restricciones (área de parcela, altura de zonificación)
pub const N_CONSTRAINTS: usize = 2;

/// Índices de los genes
pub const GENE_ORIENTATION: usize = 0;
pub const GENE_WWR: usize = 1;
pub const GENE_HEIGHT: usize = 2;
pub const GENE_LENGTH: usize = 3;
pub const GENE_WIDTH: usize = 4;

/// Resolución de cuantización para la clave de caché (1e-6 en unidades
/// del gen: por debajo de la sensibilidad de cualquier modelo térmico)
const QUANT_SCALE: f64 = 1e6;

/// Vector de diseño: orientación, WWR, altura, longitud, anchura
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignVector {
    pub genes: [f64; N_GENES],
}

impl DesignVector {
    pub fn new(orientation: f64, wwr: f64, height: f64, length: f64, width: f64) -> Self {
        Self {
            genes: [orientation, wwr, height, length, width],
        }
    }

    /// Orientación de fachada principal (grados desde el norte)
    pub fn orientation(&self) -> f64 {
        self.genes[GENE_ORIENTATION]
    }

    /// Ratio ventana-muro
    pub fn window_wall_ratio(&self) -> f64 {
        self.genes[GENE_WWR]
    }

    /// Altura total (m)
    pub fn height(&self) -> f64 {
        self.genes[GENE_HEIGHT]
    }

    /// Longitud de la huella (m)
    pub fn length(&self) -> f64 {
        self.genes[GENE_LENGTH]
    }

    /// Anchura de la huella (m)
    pub fn width(&self) -> f64 {
        self.genes[GENE_WIDTH]
    }

    /// Área de huella L×W (m²)
    pub fn footprint_area(&self) -> f64 {
        self.length() * self.width()
    }

    /// Volumen del edificio (m³)
    pub fn volume(&self) -> f64 {
        self.footprint_area() * self.height()
    }

    /// Área de fachada: perímetro × altura (m²)
    pub fn facade_area(&self) -> f64 {
        2.0 * (self.length() + self.width()) * self.height()
    }

    /// Área acristalada (m²)
    pub fn glazing_area(&self) -> f64 {
        self.facade_area() * self.window_wall_ratio()
    }

    /// Clave de caché: genes cuantizados a resolución fija
    pub fn quantized_key(&self) -> [i64; N_GENES] {
        self.genes.map(|g| (g * QUANT_SCALE).round() as i64)
    }
}

/// Vector de objetivos. Los tres se minimizan: el confort se almacena
/// negado para que la dominancia sea uniforme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveVector {
    pub values: [f64; N_OBJECTIVES],
}

impl ObjectiveVector {
    /// Construye desde las magnitudes físicas (confort positivo)
    pub fn new(energy: f64, cost: f64, comfort: f64) -> Self {
        Self {
            values: [energy, cost, -comfort],
        }
    }

    /// Consumo energético (kWh/m²/año)
    pub fn energy(&self) -> f64 {
        self.values[0]
    }

    /// Coste de construcción (unidades monetarias)
    pub fn cost(&self) -> f64 {
        self.values[1]
    }

    /// Confort térmico en su escala original (mayor es mejor)
    pub fn comfort(&self) -> f64 {
        -self.values[2]
    }

    /// ¿Todos los componentes son finitos?
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

/// Vector de restricciones: valores ≤ 0 satisfechos, > 0 violados
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintVector {
    pub values: [f64; N_CONSTRAINTS],
}

impl ConstraintVector {
    pub fn new(area_excess: f64, height_excess: f64) -> Self {
        Self {
            values: [area_excess, height_excess],
        }
    }

    /// Exceso de área de parcela (m²)
    pub fn area_excess(&self) -> f64 {
        self.values[0]
    }

    /// Exceso de altura de zonificación (m)
    pub fn height_excess(&self) -> f64 {
        self.values[1]
    }

    /// ¿Todas las restricciones satisfechas?
    pub fn is_feasible(&self) -> bool {
        self.values.iter().all(|&v| v <= 0.0)
    }

    /// Suma de las partes positivas (magnitud total de violación)
    pub fn total_violation(&self) -> f64 {
        self.values.iter().map(|v| v.max(0.0)).sum()
    }

    /// ¿Todos los componentes son finitos?
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

/// Un candidato de la población: vector de diseño más sus resultados
/// cacheados y metadatos de ranking. Los vectores de objetivos y
/// restricciones se calculan una sola vez; la variación produce
/// individuos nuevos, nunca muta uno ya evaluado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingDesign {
    /// Vector de diseño
    pub vector: DesignVector,
    /// Objetivos evaluados (cacheados)
    pub objectives: ObjectiveVector,
    /// Restricciones evaluadas (cacheadas)
    pub constraints: ConstraintVector,
    /// Rank de frente de Pareto (0 = mejor)
    pub rank: usize,
    /// Distancia de crowding (infinita en los extremos del frente)
    pub crowding_distance: f64,
    /// Generación en la que se creó
    pub generation: usize,
}

impl BuildingDesign {
    /// Crea un individuo ya evaluado
    pub fn new(
        vector: DesignVector,
        objectives: ObjectiveVector,
        constraints: ConstraintVector,
        generation: usize,
    ) -> Self {
        Self {
            vector,
            objectives,
            constraints,
            rank: usize::MAX,
            crowding_distance: 0.0,
            generation,
        }
    }

    /// ¿Satisface todas las restricciones?
    pub fn is_feasible(&self) -> bool {
        self.constraints.is_feasible()
    }

    /// Dominancia con conocimiento de restricciones:
    ///
    /// 1. Un factible domina a un infactible.
    /// 2. Entre infactibles domina el de menor violación total.
    /// 3. Entre factibles aplica la dominancia de Pareto estándar.
    ///
    /// Es un orden parcial: "no domina" NO implica "es dominado".
    pub fn dominates(&self, other: &Self) -> bool {
        let self_feasible = self.is_feasible();
        let other_feasible = other.is_feasible();

        // 1. Factibilidad primero
        if self_feasible != other_feasible {
            return self_feasible;
        }

        // 2. Ambos infactibles: menor violación total gana; con violación
        //    igual son mutuamente no dominados
        if !self_feasible {
            return self.constraints.total_violation() < other.constraints.total_violation();
        }

        // 3. Pareto estándar sobre los objetivos
        let mut strictly_better = false;
        for (a, b) in self.objectives.values.iter().zip(other.objectives.values.iter()) {
            if a > b {
                return false;
            }
            if a < b {
                strictly_better = true;
            }
        }
        strictly_better
    }
}
