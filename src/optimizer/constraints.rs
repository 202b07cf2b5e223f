//! # Restricciones de Parcela y Zonificación
//!
//! Evalúa los límites normativos de un diseño: superficie máxima de
//! ocupación y altura máxima permitida. Un valor ≤ 0 significa
//! restricción satisfecha; > 0 es la magnitud de la violación.

use serde::{Deserialize, Serialize};

use crate::optimizer::design::{ConstraintVector, DesignVector};

/// Límites de parcela y zonificación de una ejecución (inmutables)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConstraints {
    /// Superficie máxima de ocupación L×W (m²)
    pub max_area: f64,
    /// Altura máxima de zonificación (m)
    pub max_height: f64,
}

impl SiteConstraints {
    pub fn new(max_area: f64, max_height: f64) -> Self {
        Self {
            max_area,
            max_height,
        }
    }

    /// Vector de restricciones de un diseño:
    /// g₁ = L×W − max_area, g₂ = H − max_height
    pub fn evaluate(&self, design: &DesignVector) -> ConstraintVector {
        ConstraintVector::new(
            design.footprint_area() - self.max_area,
            design.height() - self.max_height,
        )
    }

    /// Informe detallado con violaciones y márgenes nombrados
    pub fn check(&self, design: &DesignVector) -> ConstraintReport {
        let vector = self.evaluate(design);
        let mut violations = Vec::new();

        if vector.area_excess() > 0.0 {
            violations.push(Violation::SiteArea {
                actual: design.footprint_area(),
                limit: self.max_area,
            });
        }
        if vector.height_excess() > 0.0 {
            violations.push(Violation::ZoningHeight {
                actual: design.height(),
                limit: self.max_height,
            });
        }

        ConstraintReport {
            feasible: violations.is_empty(),
            area_margin: self.max_area - design.footprint_area(),
            height_margin: self.max_height - design.height(),
            violations,
            vector,
        }
    }
}

impl Default for SiteConstraints {
    fn default() -> Self {
        // Parcela urbana genérica
        Self {
            max_area: 1000.0,
            max_height: 20.0,
        }
    }
}

/// Violación de restricción con sus magnitudes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    /// Huella excede la superficie máxima de ocupación
    SiteArea { actual: f64, limit: f64 },
    /// Altura excede el límite de zonificación
    ZoningHeight { actual: f64, limit: f64 },
}

/// Resultado detallado de la comprobación de restricciones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintReport {
    /// ¿Es factible el diseño?
    pub feasible: bool,
    /// Violaciones encontradas
    pub violations: Vec<Violation>,
    /// Margen de superficie restante (m²; negativo si se excede)
    pub area_margin: f64,
    /// Margen de altura restante (m; negativo si se excede)
    pub height_margin: f64,
    /// Vector numérico g₁, g₂
    pub vector: ConstraintVector,
}
