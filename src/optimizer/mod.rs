//! # Motor de Optimización Multi-Objetivo de Envolvente
//!
//! Busca configuraciones de envolvente (orientación, acristalamiento,
//! altura, huella) que minimizan energía y coste y maximizan confort,
//! bajo límites de parcela y zonificación.
//!
//! ## Componentes
//!
//! - `parameters`: espacio de diseño con límites duros
//! - `design`: vectores de diseño/objetivos/restricciones y dominancia
//! - `climate`: contexto climático y tipologías (inmutable por ejecución)
//! - `constraints`: restricciones de parcela y zonificación
//! - `evaluator`: contrato externo de evaluación, caché y lote paralelo
//! - `objectives`: modelo heurístico de referencia
//! - `sorting`: ordenación no dominada y crowding
//! - `algorithms`: NSGA-II (torneo, SBX, mutación polinómica, elitismo)
//! - `results`: frente de Pareto final y punto rodilla
//! - `reports`: informes de texto y recomendaciones

pub mod algorithms;
pub mod climate;
pub mod constraints;
pub mod design;
pub mod evaluator;
pub mod objectives;
pub mod parameters;
pub mod reports;
pub mod results;
pub mod sorting;

// Re-exports principales
pub use algorithms::{optimize, Nsga2Optimizer, OptimizationConfig};
pub use climate::{BuildingType, ClimateContext, ClimateZone, Strategy, ThermalMass};
pub use constraints::{ConstraintReport, SiteConstraints, Violation};
pub use design::{
    BuildingDesign, ConstraintVector, DesignVector, ObjectiveVector, N_CONSTRAINTS, N_GENES,
    N_OBJECTIVES,
};
pub use evaluator::{DesignEvaluator, EvaluationCache, EvaluationError, SENTINEL};
pub use objectives::{CostCoefficients, HeuristicEnvelopeModel};
pub use parameters::{EnvelopeParameterSpace, ParameterDef};
pub use reports::ReportGenerator;
pub use results::{knee_point_index, OptimizationResult, Termination};
