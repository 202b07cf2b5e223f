//! # Contexto Climático
//!
//! Clasificación climática y tipologías de edificio que el evaluador
//! recibe como contexto inmutable. El contexto se construye una vez por
//! ejecución y el optimizador nunca lo muta.

use serde::{Deserialize, Serialize};

/// Zona climática según temperatura media anual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateZone {
    /// Muy cálida (25–45 °C)
    VeryHot,
    /// Cálida (20–30 °C)
    Hot,
    /// Templada (10–25 °C)
    Temperate,
    /// Fría (−5–15 °C)
    Cold,
    /// Muy fría (−20–5 °C)
    VeryCold,
}

impl ClimateZone {
    /// Rango de temperatura media (°C) que define la zona
    pub fn temp_range(&self) -> (f64, f64) {
        match self {
            ClimateZone::VeryHot => (25.0, 45.0),
            ClimateZone::Hot => (20.0, 30.0),
            ClimateZone::Temperate => (10.0, 25.0),
            ClimateZone::Cold => (-5.0, 15.0),
            ClimateZone::VeryCold => (-20.0, 5.0),
        }
    }

    /// Estrategia pasiva de diseño asociada a la zona
    pub fn strategy(&self) -> Strategy {
        match self {
            ClimateZone::VeryHot => Strategy::MinimizeSolarGain,
            ClimateZone::Hot => Strategy::ModerateSolarControl,
            ClimateZone::Temperate => Strategy::BalancedDesign,
            ClimateZone::Cold => Strategy::MaximizeSolarGain,
            ClimateZone::VeryCold => Strategy::MaximumInsulation,
        }
    }

    /// Clasifica una temperatura media anual. Las zonas se prueban de
    /// más cálida a más fría y gana la primera cuyo rango contiene la
    /// temperatura; fuera de todo rango se asume templada.
    pub fn classify(avg_temperature: f64) -> Self {
        const ORDER: [ClimateZone; 5] = [
            ClimateZone::VeryHot,
            ClimateZone::Hot,
            ClimateZone::Temperate,
            ClimateZone::Cold,
            ClimateZone::VeryCold,
        ];
        for zone in ORDER {
            let (lo, hi) = zone.temp_range();
            if avg_temperature >= lo && avg_temperature <= hi {
                return zone;
            }
        }
        ClimateZone::Temperate
    }
}

/// Estrategia pasiva de diseño
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    MinimizeSolarGain,
    ModerateSolarControl,
    BalancedDesign,
    MaximizeSolarGain,
    MaximumInsulation,
}

/// Nivel de masa térmica de la tipología
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThermalMass {
    Low,
    Medium,
    High,
}

impl ThermalMass {
    /// Bonificación de confort por amortiguación térmica (puntos)
    pub fn comfort_bonus(&self) -> f64 {
        match self {
            ThermalMass::Low => 0.0,
            ThermalMass::Medium => 2.0,
            ThermalMass::High => 5.0,
        }
    }
}

/// Tipología de edificio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Residential,
    Office,
    Retail,
}

impl BuildingType {
    /// WWR típico de la tipología
    pub fn typical_wwr(&self) -> f64 {
        match self {
            BuildingType::Residential => 0.3,
            BuildingType::Office => 0.4,
            BuildingType::Retail => 0.2,
        }
    }

    /// Orientación óptima de referencia (grados desde el norte)
    pub fn optimal_orientation(&self) -> f64 {
        match self {
            BuildingType::Residential => 180.0, // sur
            BuildingType::Office => 165.0,      // sur-sureste
            BuildingType::Retail => 90.0,       // este
        }
    }

    /// Masa térmica típica
    pub fn thermal_mass(&self) -> ThermalMass {
        match self {
            BuildingType::Residential => ThermalMass::Medium,
            BuildingType::Office => ThermalMass::High,
            BuildingType::Retail => ThermalMass::Low,
        }
    }
}

/// Contexto climático inmutable de una ejecución
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateContext {
    /// Zona climática
    pub zone: ClimateZone,
    /// Temperatura media anual (°C)
    pub avg_temperature: f64,
    /// Grados-día de calefacción (base 18 °C)
    pub heating_degree_days: f64,
    /// Grados-día de refrigeración (base 24 °C)
    pub cooling_degree_days: f64,
    /// Potencial solar relativo (0–100)
    pub solar_potential: f64,
}

impl ClimateContext {
    /// Estimación heurística desde coordenadas. La temperatura media se
    /// aproxima por latitud; la longitud queda reservada para cuando el
    /// servicio climático externo sustituya a esta heurística.
    pub fn from_location(lat: f64, _lng: f64) -> Self {
        let avg_temperature = 20.0 - lat.abs() * 0.5;
        let solar_potential = (100.0 - lat.abs()).max(0.0);

        let heating_degree_days = if avg_temperature < 18.0 {
            (18.0 - avg_temperature) * 365.0
        } else {
            0.0
        };
        let cooling_degree_days = if avg_temperature > 24.0 {
            (avg_temperature - 24.0) * 365.0
        } else {
            0.0
        };

        Self {
            zone: ClimateZone::classify(avg_temperature),
            avg_temperature,
            heating_degree_days,
            cooling_degree_days,
            solar_potential,
        }
    }

    /// Estrategia pasiva de la zona
    pub fn strategy(&self) -> Strategy {
        self.zone.strategy()
    }
}
