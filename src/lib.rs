pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use adapters::notifier::{ConsoleNotifier, RecordingNotifier};
pub use crate::core::{
    arithmetic::{evaluate, format_for_display, square, Operator},
    calculator::{CalculatorSession, Key},
    registration::{RegistrationForm, SubmitOutcome},
};
pub use utils::error::{AppError, Result};
