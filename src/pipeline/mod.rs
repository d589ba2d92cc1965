//! SSP solve pipeline.
//!
//! Wires the components together in one linear call:
//! incidence preprocessing → model construction → solver backend →
//! solution extraction (and optional verification).

mod config;
mod runner;

pub use config::SspConfig;
pub use runner::SspRunner;
