//! # Espacio de Parámetros de la Envolvente
//!
//! Define los genes optimizables de un edificio y sus rangos válidos.
//! Cada parámetro tiene límites duros; ningún operador genético puede
//! producir valores fuera de rango (se clampan siempre).

use serde::{Deserialize, Serialize};

use crate::error::OptimizerError;
use crate::optimizer::design::{DesignVector, N_GENES};

/// Definición de un parámetro optimizable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDef {
    /// Nombre descriptivo
    pub name: String,
    /// Símbolo corto
    pub symbol: String,
    /// Unidad
    pub unit: String,
    /// Valor mínimo permitido
    pub min: f64,
    /// Valor máximo permitido
    pub max: f64,
    /// Valor por defecto
    pub default: f64,
    /// Parámetro cíclico: max se identifica con min (ej. orientación 360° ≡ 0°)
    pub periodic: bool,
}

impl ParameterDef {
    /// Crea un nuevo parámetro
    pub fn new(name: &str, symbol: &str, unit: &str, min: f64, max: f64, default: f64) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            unit: unit.to_string(),
            min,
            max,
            default,
            periodic: false,
        }
    }

    /// Marca como cíclico (rango semiabierto [min, max))
    pub fn periodic(mut self) -> Self {
        self.periodic = true;
        self
    }

    /// Valida que un valor esté en rango
    pub fn validate(&self, value: f64) -> bool {
        if self.periodic {
            value >= self.min && value < self.max
        } else {
            value >= self.min && value <= self.max
        }
    }

    /// Clampea un valor al rango válido. Los parámetros cíclicos se
    /// envuelven (400° → 40°) en lugar de saturarse.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.periodic {
            // rem_euclid puede redondear al propio max con negativos
            // minúsculos; el rango es semiabierto, así que max ≡ min
            let wrapped = self.min + (value - self.min).rem_euclid(self.range());
            if wrapped >= self.max {
                self.min
            } else {
                wrapped
            }
        } else {
            value.max(self.min).min(self.max)
        }
    }

    /// Normaliza valor a [0, 1]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            0.5
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }

    /// Desnormaliza de [0, 1] a rango real
    pub fn denormalize(&self, normalized: f64) -> f64 {
        self.min + normalized * (self.max - self.min)
    }

    /// Anchura del rango
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Espacio de diseño de la envolvente: los 5 genes del vector de diseño
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeParameterSpace {
    /// Orientación de la fachada principal (grados desde el norte)
    pub orientation: ParameterDef,
    /// Ratio ventana-muro (fracción acristalada de fachada)
    pub window_wall_ratio: ParameterDef,
    /// Altura total (m)
    pub height: ParameterDef,
    /// Longitud de la huella (m)
    pub length: ParameterDef,
    /// Anchura de la huella (m)
    pub width: ParameterDef,
}

impl EnvelopeParameterSpace {
    /// Espacio estándar de un estudio de envolvente
    pub fn standard() -> Self {
        Self {
            orientation: ParameterDef::new("Orientación", "θ", "°", 0.0, 360.0, 180.0).periodic(),
            window_wall_ratio: ParameterDef::new("Ratio ventana-muro", "WWR", "", 0.1, 0.8, 0.3),
            height: ParameterDef::new("Altura", "H", "m", 3.0, 20.0, 9.0),
            length: ParameterDef::new("Longitud", "L", "m", 10.0, 50.0, 25.0),
            width: ParameterDef::new("Anchura", "W", "m", 10.0, 50.0, 20.0),
        }
    }

    /// Parámetros en el orden del vector de diseño
    pub fn parameters(&self) -> [&ParameterDef; N_GENES] {
        [
            &self.orientation,
            &self.window_wall_ratio,
            &self.height,
            &self.length,
            &self.width,
        ]
    }

    /// Vector de límites inferiores
    pub fn lower_bounds(&self) -> [f64; N_GENES] {
        self.parameters().map(|p| p.min)
    }

    /// Vector de límites superiores
    pub fn upper_bounds(&self) -> [f64; N_GENES] {
        self.parameters().map(|p| p.max)
    }

    /// Falla si algún límite inferior supera al superior
    pub fn validate(&self) -> Result<(), OptimizerError> {
        for p in self.parameters() {
            if p.min > p.max {
                return Err(OptimizerError::InvalidBounds {
                    name: p.name.clone(),
                    min: p.min,
                    max: p.max,
                });
            }
        }
        Ok(())
    }

    /// Muestrea un vector uniforme dentro de los límites
    pub fn sample<R: rand::Rng>(&self, rng: &mut R) -> DesignVector {
        let mut genes = [0.0; N_GENES];
        for (gene, p) in genes.iter_mut().zip(self.parameters()) {
            *gene = if p.periodic {
                rng.gen_range(p.min..p.max)
            } else {
                rng.gen_range(p.min..=p.max)
            };
        }
        DesignVector { genes }
    }

    /// Proyecta un vector fuera de rango de vuelta a los límites
    pub fn clamp(&self, vector: &mut DesignVector) {
        for (gene, p) in vector.genes.iter_mut().zip(self.parameters()) {
            *gene = p.clamp(*gene);
        }
    }

    /// Vector con los valores por defecto de cada parámetro
    pub fn default_vector(&self) -> DesignVector {
        let mut genes = [0.0; N_GENES];
        for (gene, p) in genes.iter_mut().zip(self.parameters()) {
            *gene = p.default;
        }
        DesignVector { genes }
    }
}

impl Default for EnvelopeParameterSpace {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parameter_clamp() {
        let p = ParameterDef::new("Altura", "H", "m", 3.0, 20.0, 9.0);
        assert_eq!(p.clamp(2.0), 3.0);
        assert_eq!(p.clamp(25.0), 20.0);
        assert_eq!(p.clamp(10.0), 10.0);
    }

    #[test]
    fn test_parameter_normalize_roundtrip() {
        let p = ParameterDef::new("Longitud", "L", "m", 10.0, 50.0, 25.0);
        let v = 32.0;
        let n = p.normalize(v);
        assert!((p.denormalize(n) - v).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_range_normalizes_to_half() {
        let p = ParameterDef::new("Fijo", "x", "", 5.0, 5.0, 5.0);
        assert_eq!(p.normalize(5.0), 0.5);
    }

    #[test]
    fn test_sample_within_bounds() {
        let space = EnvelopeParameterSpace::standard();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let v = space.sample(&mut rng);
            for (gene, p) in v.genes.iter().zip(space.parameters()) {
                assert!(p.validate(*gene), "{} = {} fuera de rango", p.name, gene);
            }
        }
    }

    #[test]
    fn test_clamp_vector() {
        let space = EnvelopeParameterSpace::standard();
        let mut v = DesignVector {
            genes: [400.0, 0.05, 30.0, 5.0, 60.0],
        };
        space.clamp(&mut v);
        // La orientación se envuelve, el resto satura
        assert_eq!(v.genes, [40.0, 0.1, 20.0, 10.0, 50.0]);
    }

    #[test]
    fn test_periodic_wrap() {
        let p = ParameterDef::new("Orientación", "θ", "°", 0.0, 360.0, 180.0).periodic();
        assert!((p.clamp(360.0) - 0.0).abs() < 1e-12);
        assert!((p.clamp(-10.0) - 350.0).abs() < 1e-12);
        assert!((p.clamp(725.0) - 5.0).abs() < 1e-12);
        assert!(!p.validate(360.0));
        assert!(p.validate(0.0));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let mut space = EnvelopeParameterSpace::standard();
        space.height.min = 25.0; // min > max
        assert!(space.validate().is_err());
    }

    #[test]
    fn test_standard_space_is_valid() {
        assert!(EnvelopeParameterSpace::standard().validate().is_ok());
    }
}
