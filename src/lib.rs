pub mod calculator;
pub mod cli;
pub mod config;
pub mod logging;

pub use calculator::{CalcError, CalcResult, Calculator, Operation, UnknownOperation};
pub use config::{LoggingConfig, Settings};
