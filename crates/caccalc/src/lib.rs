//! CacCalc library — application logic for the CAC calculator.

pub mod app;
pub mod config;
pub mod errors;
