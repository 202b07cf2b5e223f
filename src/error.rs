//! Errores fatales del optimizador.
//!
//! Los errores de configuración se reportan antes de ejecutar la primera
//! generación. Un fallo del evaluador para un diseño individual NO es
//! fatal (ver `optimizer::evaluator`); sólo lo es cuando una generación
//! completa falla.

/// Errores del motor de optimización
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    /// Límite inferior mayor que el superior para un parámetro
    #[error("invalid bounds for parameter '{name}': min {min} > max {max}")]
    InvalidBounds { name: String, min: f64, max: f64 },

    /// Tamaño de población no positivo
    #[error("population size must be positive")]
    ZeroPopulation,

    /// Presupuesto de generaciones no positivo
    #[error("generation budget must be positive")]
    ZeroGenerations,

    /// Probabilidad fuera de [0, 1]
    #[error("probability '{name}' out of range [0, 1]: {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Todas las evaluaciones de una generación fallaron
    #[error("every evaluation in generation {generation} failed")]
    GenerationFailed { generation: usize },

    /// Frente de Pareto vacío: defecto interno del comparador o del sorter
    #[error("internal invariant violated: first front is empty")]
    EmptyFront,
}
