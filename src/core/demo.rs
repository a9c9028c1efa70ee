use crate::adapters::antenna::Antenna;
use crate::config::toml_config::RobotConfig;
use crate::core::{with_di, without_di};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Which robot wiring to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Wiring {
    /// The robot builds and owns its antenna
    #[default]
    Owned,
    /// The antenna is built by the caller and lent to the robot
    Injected,
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wiring::Owned => write!(f, "owned"),
            Wiring::Injected => write!(f, "injected"),
        }
    }
}

/// Builds the configured robot, with its antenna writing to `sink`, and sends
/// its information `repeat` times. Returns how many payloads went out.
pub fn run_demo<W: Write + Send + 'static>(config: &RobotConfig, sink: W) -> Result<usize> {
    let length = config.antenna.length_in_meters;
    let repeat = config.wiring.repeat;

    tracing::info!(
        "🔧 Wiring {} robot {} / {} ({} send(s))",
        config.wiring.mode,
        config.robot.model,
        config.robot.serial,
        repeat
    );

    match config.wiring.mode {
        Wiring::Owned => {
            let robot = without_di::Robot::with_output(
                config.robot.model.as_str(),
                config.robot.serial.as_str(),
                length,
                sink,
            );
            for _ in 0..repeat {
                robot.send_robot_information()?;
            }
        }
        Wiring::Injected => {
            // The antenna outlives the robot that borrows it.
            let antenna = Antenna::with_sink(length, sink);
            let robot = with_di::Robot::new(
                config.robot.model.as_str(),
                config.robot.serial.as_str(),
                &antenna,
            );
            for _ in 0..repeat {
                robot.send_robot_information()?;
            }
        }
    }

    Ok(repeat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_both_wirings_emit_same_output() {
        let mut config = RobotConfig::default();
        config.robot.model = "X100".to_string();
        config.robot.serial = "SN-42".to_string();
        config.wiring.repeat = 2;

        let mut outputs = Vec::new();
        for mode in [Wiring::Owned, Wiring::Injected] {
            config.wiring.mode = mode;
            let buffer = SharedBuffer::default();
            let sent = run_demo(&config, buffer.clone()).unwrap();
            assert_eq!(sent, 2);
            outputs.push(String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap());
        }

        assert_eq!(outputs[0], "Model: X100\nSerial: SN-42\n".repeat(2));
        assert_eq!(outputs[0], outputs[1]);
    }

    #[test]
    fn test_zero_repeat_sends_nothing() {
        let mut config = RobotConfig::default();
        config.wiring.repeat = 0;
        let buffer = SharedBuffer::default();

        assert_eq!(run_demo(&config, buffer.clone()).unwrap(), 0);
        assert!(buffer.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_wiring_display() {
        assert_eq!(Wiring::Owned.to_string(), "owned");
        assert_eq!(Wiring::Injected.to_string(), "injected");
    }
}
