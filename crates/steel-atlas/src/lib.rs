//! Knife steel reference data: a browsable catalog, questionnaire-driven
//! recommendations and a tempering curve simulator.

pub mod catalog;
pub mod config;
pub mod error;
pub mod heat_treat;
pub mod recommend;
pub mod router;
pub mod service;
pub mod telemetry;

pub use router::catalog_router;
pub use service::SteelAtlasService;
