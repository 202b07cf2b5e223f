//! # Modelo Heurístico de Envolvente
//!
//! Implementación de referencia del contrato `DesignEvaluator`: estima
//! energía, coste y confort con heurísticas de grados-día y geometría.
//! Es deliberadamente simple y sustituible; el motor evolutivo no
//! depende de sus fórmulas, sólo del contrato.

use serde::{Deserialize, Serialize};

use crate::optimizer::climate::{ClimateContext, BuildingType, Strategy};
use crate::optimizer::constraints::SiteConstraints;
use crate::optimizer::design::{ConstraintVector, DesignVector, ObjectiveVector};
use crate::optimizer::evaluator::{DesignEvaluator, EvaluationError};

/// Altura de planta asumida (m)
const FLOOR_HEIGHT: f64 = 3.0;
/// Consumo base (kWh/m²/año)
const BASE_CONSUMPTION: f64 = 100.0;
/// Suelo físico del consumo (kWh/m²/año)
const MIN_CONSUMPTION: f64 = 20.0;

/// Coeficientes de coste de construcción
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostCoefficients {
    /// Estructura y acabados por m² construido
    pub structure_per_m2: f64,
    /// Muro opaco de fachada por m²
    pub facade_per_m2: f64,
    /// Acristalamiento por m²
    pub glazing_per_m2: f64,
    /// Recargo relativo por planta por encima de la segunda
    pub high_rise_factor: f64,
}

impl Default for CostCoefficients {
    fn default() -> Self {
        Self {
            structure_per_m2: 1200.0,
            facade_per_m2: 220.0,
            glazing_per_m2: 600.0,
            high_rise_factor: 0.02,
        }
    }
}

/// Evaluador heurístico de envolvente
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicEnvelopeModel {
    /// Tipología del edificio
    pub building_type: BuildingType,
    /// Coeficientes de coste
    pub costs: CostCoefficients,
}

impl HeuristicEnvelopeModel {
    pub fn new(building_type: BuildingType) -> Self {
        Self {
            building_type,
            costs: CostCoefficients::default(),
        }
    }

    /// Número de plantas completas (mínimo 1)
    fn storeys(design: &DesignVector) -> f64 {
        (design.height() / FLOOR_HEIGHT).floor().max(1.0)
    }

    /// Superficie construida total (m²)
    fn gross_floor_area(design: &DesignVector) -> f64 {
        design.footprint_area() * Self::storeys(design)
    }

    /// Orientación preferida según la estrategia pasiva de la zona
    fn preferred_orientation(&self, climate: &ClimateContext) -> f64 {
        match climate.strategy() {
            // Clima muy cálido: fachada principal al norte
            Strategy::MinimizeSolarGain => 0.0,
            // Climas fríos: captación solar al sur
            Strategy::MaximizeSolarGain | Strategy::MaximumInsulation => 180.0,
            // Templado: sur-sureste
            Strategy::BalancedDesign => 165.0,
            // Cálido moderado: lo que pida la tipología
            Strategy::ModerateSolarControl => self.building_type.optimal_orientation(),
        }
    }

    /// Consumo energético estimado (kWh/m²/año)
    pub fn energy_consumption(&self, design: &DesignVector, climate: &ClimateContext) -> f64 {
        let hdd = climate.heating_degree_days;
        let cdd = climate.cooling_degree_days;

        let heating_load = if hdd > 2000.0 { hdd * 0.05 } else { 0.0 };
        let cooling_load = if cdd > 500.0 { cdd * 0.08 } else { 0.0 };

        // Desviación respecto al WWR de referencia
        let wwr_impact = (design.window_wall_ratio() - 0.3) * 50.0;

        // Desalineación solar: 0 alineado, 1 opuesto
        let preferred = self.preferred_orientation(climate);
        let misalignment =
            0.5 * (1.0 - (design.orientation() - preferred).to_radians().cos());
        let orientation_impact = misalignment * climate.solar_potential * 0.2;

        // Penalización de compacidad: mucha fachada por m² construido
        let form_factor = design.facade_area() / Self::gross_floor_area(design);
        let envelope_impact = (form_factor - 1.0).max(0.0) * 15.0;

        (BASE_CONSUMPTION + heating_load + cooling_load + wwr_impact + orientation_impact
            + envelope_impact)
            .max(MIN_CONSUMPTION)
    }

    /// Coste de construcción estimado (unidades monetarias)
    pub fn construction_cost(&self, design: &DesignVector) -> f64 {
        let glazing = design.glazing_area();
        let opaque = design.facade_area() - glazing;
        let storeys = Self::storeys(design);
        let high_rise = 1.0 + self.costs.high_rise_factor * (storeys - 2.0).max(0.0);

        Self::gross_floor_area(design) * self.costs.structure_per_m2 * high_rise
            + opaque * self.costs.facade_per_m2
            + glazing * self.costs.glazing_per_m2
    }

    /// Confort térmico estimado, escala 0–100 (mayor es mejor)
    pub fn thermal_comfort(&self, design: &DesignVector, climate: &ClimateContext) -> f64 {
        let wwr = design.window_wall_ratio();

        // Iluminación natural: óptimo alrededor de WWR 0.35
        let daylight = 15.0 * (1.0 - ((wwr - 0.35) / 0.45).powi(2)).max(0.0);

        // Sobrecalentamiento por acristalamiento en clima cálido
        let overheating = climate.cooling_degree_days / 1000.0 * wwr * 20.0;

        // Superficie fría y asimetría radiante en clima frío
        let cold_draft = climate.heating_degree_days / 1000.0 * wwr * 5.0;

        let mass_bonus = self.building_type.thermal_mass().comfort_bonus();

        (70.0 + daylight + mass_bonus - overheating - cold_draft).clamp(0.0, 100.0)
    }
}

impl DesignEvaluator for HeuristicEnvelopeModel {
    fn evaluate(
        &self,
        design: &DesignVector,
        climate: &ClimateContext,
        site: &SiteConstraints,
    ) -> Result<(ObjectiveVector, ConstraintVector), EvaluationError> {
        let objectives = ObjectiveVector::new(
            self.energy_consumption(design, climate),
            self.construction_cost(design),
            self.thermal_comfort(design, climate),
        );
        Ok((objectives, site.evaluate(design)))
    }
}
