//! # EDIFICA-RS
//!
//! Building Envelope Design Optimizer
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         EDIFICA-RS                              │
//! │          Multi-Objective Building Envelope Optimizer            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  DESIGN SPACE   orientation · WWR · height · length · width     │
//! │  OBJECTIVES     energy ↓ · cost ↓ · comfort ↑                   │
//! │  CONSTRAINTS    site area · zoning height                       │
//! │  ENGINE         NSGA-II (constrained dominance + crowding)      │
//! │  OUTPUT         Pareto front + knee-point compromise design     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is a batch search: it runs to a generation (or wall-clock)
//! budget and returns a fixed-size Pareto sample. Evaluation of a
//! generation is embarrassingly parallel; all randomness comes from a
//! single seeded generator, so identical inputs and seed reproduce the
//! result bit for bit.
//!
//! ```no_run
//! use edifica_rs::*;
//!
//! let space = EnvelopeParameterSpace::standard();
//! let model = HeuristicEnvelopeModel::new(BuildingType::Residential);
//! let climate = ClimateContext::from_location(40.4, -3.7);
//! let site = SiteConstraints::new(400.0, 15.0);
//!
//! let result = optimize(&space, &model, &climate, &site, 100, 50, 42)
//!     .expect("optimization run");
//! println!("{}", ReportGenerator::full_report(&result, &climate, &site));
//! ```

pub mod error;
pub mod optimizer;

// Re-exports
pub use error::OptimizerError;
pub use optimizer::*;

/// EDIFICA version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
