use crate::domain::ports::MessageSender;
use crate::utils::error::{Result, RobotError};
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Physical transmission device. Transmitting means writing the payload,
/// newline terminated, to the antenna's sink (stdout unless told otherwise).
pub struct Antenna {
    length_in_meters: f64,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Antenna {
    /// Any length is accepted, including zero, negative and non-finite values.
    pub fn new(length_in_meters: f64) -> Self {
        Self::with_sink(length_in_meters, io::stdout())
    }

    pub fn with_sink<W: Write + Send + 'static>(length_in_meters: f64, sink: W) -> Self {
        Self {
            length_in_meters,
            sink: Mutex::new(Box::new(sink)),
        }
    }

    pub fn length_in_meters(&self) -> f64 {
        self.length_in_meters
    }
}

impl MessageSender for Antenna {
    fn send_information(&self, information: &str) -> Result<()> {
        tracing::debug!(
            "📡 Antenna ({} m) transmitting {} bytes",
            self.length_in_meters,
            information.len()
        );

        // A panic mid-write cannot leave the sink in a state worth refusing.
        let mut sink = self
            .sink
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(sink, "{}", information).map_err(RobotError::Transmission)?;
        sink.flush().map_err(RobotError::Transmission)?;
        Ok(())
    }
}

impl fmt::Debug for Antenna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Antenna")
            .field("length_in_meters", &self.length_in_meters)
            .finish_non_exhaustive()
    }
}
