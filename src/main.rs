//! # EDIFICA-RS
//!
//! Demo: optimiza la envolvente de un edificio residencial en una
//! parcela urbana e imprime el informe y el resultado en JSON.

use edifica_rs::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("EDIFICA-RS v{} - Building Envelope Optimizer", VERSION);
    println!();

    // Escenario: residencial en Madrid, parcela de 400 m², altura máx. 15 m
    let space = EnvelopeParameterSpace::standard();
    let model = HeuristicEnvelopeModel::new(BuildingType::Residential);
    let climate = ClimateContext::from_location(40.4, -3.7);
    let site = SiteConstraints::new(400.0, 15.0);

    let config = OptimizationConfig {
        population_size: 120,
        generations: 60,
        seed: 42,
        stagnation_window: 10,
        ..OptimizationConfig::default()
    };

    println!("Climate zone: {:?} ({:.1} °C avg)", climate.zone, climate.avg_temperature);
    println!("  HDD: {:.0}  CDD: {:.0}", climate.heating_degree_days, climate.cooling_degree_days);
    println!("Site: {:.0} m² max footprint, {:.0} m max height", site.max_area, site.max_height);
    println!();

    println!("Running optimization...");
    let start = std::time::Instant::now();

    let result = match Nsga2Optimizer::new(config) {
        Ok(optimizer) => match optimizer.optimize(&space, &model, &climate, &site) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("optimization failed: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let elapsed = start.elapsed();

    println!("{}", ReportGenerator::full_report(&result, &climate, &site));
    println!("Wall-clock time: {:.3} s", elapsed.as_secs_f64());
    println!();

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not serialize result: {e}"),
    }
}
