pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::RobotConfig;

pub use crate::adapters::{Antenna, RecordingSender};
pub use crate::core::demo::{run_demo, Wiring};
pub use crate::domain::{model::RobotIdentity, ports::MessageSender};
pub use crate::utils::error::{Result, RobotError};
