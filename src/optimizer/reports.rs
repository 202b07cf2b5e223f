//! # Generador de Informes
//!
//! Informes de texto plano para una ejecución de optimización:
//! configuración, estadísticas del frente, diseño de compromiso y
//! recomendaciones pasivas según clima y acristalamiento. Sólo
//! construye cadenas; la capa de presentación decide qué hacer con
//! ellas.

use crate::optimizer::climate::{ClimateContext, ClimateZone};
use crate::optimizer::constraints::SiteConstraints;
use crate::optimizer::design::DesignVector;
use crate::optimizer::results::{OptimizationResult, Termination};

/// Generador de informes
pub struct ReportGenerator;

impl ReportGenerator {
    /// Informe completo de una ejecución
    pub fn full_report(
        result: &OptimizationResult,
        climate: &ClimateContext,
        site: &SiteConstraints,
    ) -> String {
        let mut report = String::new();

        report.push_str(&Self::header(result));
        report.push_str(&Self::front_summary(result));
        report.push_str(&Self::best_design_section(result, site));
        report.push_str(&Self::recommendations_section(climate, &result.best_design));

        report
    }

    fn header(result: &OptimizationResult) -> String {
        let termination = match result.termination {
            Termination::Exhausted => "generation budget exhausted",
            Termination::Converged => "front converged early",
        };
        format!(
            r#"
================================================================================
                    BUILDING ENVELOPE OPTIMIZATION REPORT
================================================================================
Generations run:   {}
Termination:       {}
Pareto front size: {}
================================================================================

"#,
            result.generations_run,
            termination,
            result.front_size()
        )
    }

    fn front_summary(result: &OptimizationResult) -> String {
        let stat = |extract: fn(&crate::optimizer::design::ObjectiveVector) -> f64| {
            let values: Vec<f64> = result.pareto_front.iter().map(extract).collect();
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            (min, max)
        };
        let (e_min, e_max) = stat(|o| o.energy());
        let (c_min, c_max) = stat(|o| o.cost());
        let (f_min, f_max) = stat(|o| o.comfort());

        format!(
            r#"PARETO FRONT
------------
  Energy:   {:.1} - {:.1} kWh/m²/yr
  Cost:     {:.0} - {:.0}
  Comfort:  {:.1} - {:.1} / 100

"#,
            e_min, e_max, c_min, c_max, f_min, f_max
        )
    }

    fn best_design_section(result: &OptimizationResult, site: &SiteConstraints) -> String {
        let d = &result.best_design;
        let p = &result.best_performance;
        let check = site.check(d);

        format!(
            r#"BEST COMPROMISE DESIGN (knee point)
-----------------------------------
  Orientation:       {:.1}°
  Window-wall ratio: {:.2}
  Height:            {:.1} m
  Footprint:         {:.1} m × {:.1} m  ({:.0} m²)

  Energy:            {:.1} kWh/m²/yr
  Cost:              {:.0}
  Comfort:           {:.1} / 100

  Site area margin:  {:.0} m²
  Height margin:     {:.1} m
  Feasible:          {}

"#,
            d.orientation(),
            d.window_wall_ratio(),
            d.height(),
            d.length(),
            d.width(),
            d.footprint_area(),
            p.energy(),
            p.cost(),
            p.comfort(),
            check.area_margin,
            check.height_margin,
            if check.feasible { "YES" } else { "NO" }
        )
    }

    fn recommendations_section(climate: &ClimateContext, design: &DesignVector) -> String {
        let mut section = String::from("RECOMMENDATIONS\n---------------\n");
        for r in Self::recommendations(climate, design) {
            section.push_str("  - ");
            section.push_str(&r);
            section.push('\n');
        }
        section.push('\n');
        section
    }

    /// Recomendaciones pasivas según zona climática y acristalamiento
    pub fn recommendations(climate: &ClimateContext, design: &DesignVector) -> Vec<String> {
        let mut recommendations = Vec::new();

        match climate.zone {
            ClimateZone::VeryHot => {
                recommendations.push(
                    "Use light-colored exterior materials to reflect heat".to_string(),
                );
                recommendations.push(
                    "Install horizontal shading devices on south-facing windows".to_string(),
                );
                recommendations
                    .push("Consider double-height spaces for natural ventilation".to_string());
                recommendations.push("Use thermal mass for night cooling".to_string());
            }
            ClimateZone::Cold | ClimateZone::VeryCold => {
                recommendations.push(
                    "Maximize south-facing glazing for passive solar heating".to_string(),
                );
                recommendations
                    .push("Use high-performance insulation (R-value > 30)".to_string());
                recommendations.push("Consider thermal mass to store solar heat".to_string());
                recommendations.push("Install triple-glazed windows".to_string());
            }
            _ => {}
        }

        let wwr = design.window_wall_ratio();
        if wwr > 0.4 {
            recommendations.push(format!(
                "High window ratio ({:.0}%) may increase energy consumption",
                wwr * 100.0
            ));
        } else if wwr < 0.2 {
            recommendations.push(format!(
                "Low window ratio ({:.0}%) may require more artificial lighting",
                wwr * 100.0
            ));
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::design::ObjectiveVector;

    fn result() -> OptimizationResult {
        let designs = vec![
            DesignVector::new(180.0, 0.35, 9.0, 20.0, 18.0),
            DesignVector::new(170.0, 0.25, 12.0, 22.0, 16.0),
        ];
        let front = vec![
            ObjectiveVector::new(85.0, 1.2e6, 72.0),
            ObjectiveVector::new(92.0, 1.0e6, 68.0),
        ];
        OptimizationResult {
            best_design: designs[0],
            best_performance: front[0],
            pareto_designs: designs,
            pareto_front: front,
            knee_index: 0,
            generations_run: 50,
            termination: Termination::Exhausted,
        }
    }

    #[test]
    fn test_full_report_sections() {
        let climate = ClimateContext::from_location(40.0, -3.7);
        let site = SiteConstraints::new(400.0, 15.0);
        let report = ReportGenerator::full_report(&result(), &climate, &site);

        assert!(report.contains("BUILDING ENVELOPE OPTIMIZATION REPORT"));
        assert!(report.contains("PARETO FRONT"));
        assert!(report.contains("BEST COMPROMISE DESIGN"));
        assert!(report.contains("RECOMMENDATIONS"));
        assert!(report.contains("Feasible:          YES"));
    }

    #[test]
    fn test_cold_climate_recommendations() {
        let climate = ClimateContext::from_location(60.0, 10.0);
        let d = DesignVector::new(180.0, 0.3, 9.0, 25.0, 20.0);
        let recs = ReportGenerator::recommendations(&climate, &d);
        assert!(recs.iter().any(|r| r.contains("insulation")));
    }

    #[test]
    fn test_wwr_recommendations() {
        // Zona templada: sin recomendaciones de zona, sólo de WWR
        let climate = ClimateContext::from_location(10.0, 0.0);

        let glazed = DesignVector::new(180.0, 0.6, 9.0, 25.0, 20.0);
        let recs = ReportGenerator::recommendations(&climate, &glazed);
        assert!(recs.iter().any(|r| r.contains("High window ratio")));

        let closed = DesignVector::new(180.0, 0.15, 9.0, 25.0, 20.0);
        let recs = ReportGenerator::recommendations(&climate, &closed);
        assert!(recs.iter().any(|r| r.contains("artificial lighting")));

        let balanced = DesignVector::new(180.0, 0.3, 9.0, 25.0, 20.0);
        assert!(ReportGenerator::recommendations(&climate, &balanced).is_empty());
    }
}
