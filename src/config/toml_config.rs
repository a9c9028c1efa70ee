use crate::core::demo::Wiring;
use crate::utils::error::{Result, RobotError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub robot: RobotSection,
    pub antenna: AntennaSection,
    pub wiring: WiringSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotSection {
    pub model: String,
    pub serial: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntennaSection {
    pub length_in_meters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringSection {
    pub mode: Wiring,
    pub repeat: usize,
}

impl Default for RobotSection {
    fn default() -> Self {
        Self {
            model: "R2".to_string(),
            serial: "0001".to_string(),
        }
    }
}

impl Default for AntennaSection {
    fn default() -> Self {
        Self {
            length_in_meters: 1.0,
        }
    }
}

impl Default for WiringSection {
    fn default() -> Self {
        Self {
            mode: Wiring::Owned,
            repeat: 1,
        }
    }
}

impl RobotConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RobotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RobotError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the value of the environment variable. Unset
    /// variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }
}
