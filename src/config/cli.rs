use crate::config::toml_config::RobotConfig;
use crate::core::demo::Wiring;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "robot-wiring")]
#[command(about = "Sends robot information through an owned or an injected antenna")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Robot model, overrides the configuration file
    #[arg(long)]
    pub model: Option<String>,

    /// Robot serial, overrides the configuration file
    #[arg(long)]
    pub serial: Option<String>,

    /// Antenna length in meters, overrides the configuration file
    #[arg(long, allow_hyphen_values = true)]
    pub antenna_length: Option<f64>,

    /// How the antenna is wired to the robot
    #[arg(long, value_enum)]
    pub wiring: Option<Wiring>,

    /// How many times the robot sends its information
    #[arg(long)]
    pub repeat: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the configuration file, if any, then applies command line overrides.
    pub fn resolve(&self) -> Result<RobotConfig> {
        let mut config = match &self.config {
            Some(path) => RobotConfig::from_file(path)?,
            None => RobotConfig::default(),
        };

        if let Some(model) = &self.model {
            config.robot.model = model.clone();
        }
        if let Some(serial) = &self.serial {
            config.robot.serial = serial.clone();
        }
        if let Some(length) = self.antenna_length {
            config.antenna.length_in_meters = length;
        }
        if let Some(wiring) = self.wiring {
            config.wiring.mode = wiring;
        }
        if let Some(repeat) = self.repeat {
            config.wiring.repeat = repeat;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_arguments() {
        let cli = CliConfig::parse_from(["robot-wiring"]);
        assert_eq!(cli.resolve().unwrap(), RobotConfig::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let contents = r#"
[robot]
model = "FromFile"
serial = "S-1"

[wiring]
mode = "owned"
"#;
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "robot-wiring",
            "--config",
            path.as_str(),
            "--serial",
            "S-2",
            "--antenna-length",
            "-4",
            "--wiring",
            "injected",
            "--repeat",
            "2",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.robot.model, "FromFile");
        assert_eq!(config.robot.serial, "S-2");
        assert_eq!(config.antenna.length_in_meters, -4.0);
        assert_eq!(config.wiring.mode, Wiring::Injected);
        assert_eq!(config.wiring.repeat, 2);
    }

    #[test]
    fn test_rejects_unknown_wiring() {
        assert!(CliConfig::try_parse_from(["robot-wiring", "--wiring", "wireless"]).is_err());
    }
}
