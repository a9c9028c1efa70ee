//! Robot that builds and owns its own antenna. The sender cannot be swapped
//! without changing this type.

use crate::adapters::antenna::Antenna;
use crate::domain::model::RobotIdentity;
use crate::domain::ports::MessageSender;
use crate::utils::error::Result;
use std::io::{self, Write};

#[derive(Debug)]
pub struct Robot {
    identity: RobotIdentity,
    antenna: Antenna,
}

impl Robot {
    pub fn new(
        model: impl Into<String>,
        serial: impl Into<String>,
        antenna_length_in_meters: f64,
    ) -> Self {
        Self::with_output(model, serial, antenna_length_in_meters, io::stdout())
    }

    /// Same as `new`, but the antenna the robot builds transmits to `output`
    /// instead of stdout. Crate-internal: outside callers only get `new`.
    pub(crate) fn with_output<W: Write + Send + 'static>(
        model: impl Into<String>,
        serial: impl Into<String>,
        antenna_length_in_meters: f64,
        output: W,
    ) -> Self {
        Self {
            identity: RobotIdentity::new(model, serial),
            antenna: Antenna::with_sink(antenna_length_in_meters, output),
        }
    }

    pub fn model(&self) -> &str {
        self.identity.model()
    }

    pub fn serial(&self) -> &str {
        self.identity.serial()
    }

    pub fn antenna(&self) -> &Antenna {
        &self.antenna
    }

    pub fn robot_information(&self) -> String {
        self.identity.information()
    }

    pub fn send_robot_information(&self) -> Result<()> {
        let robot_info = self.robot_information();
        tracing::debug!(
            "🤖 Robot {} sending information over its own antenna",
            self.serial()
        );
        self.antenna.send_information(&robot_info)
    }
}
