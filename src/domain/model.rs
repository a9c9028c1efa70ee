/// Model and serial of a robot. Fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotIdentity {
    model: String,
    serial: String,
}

impl RobotIdentity {
    pub fn new(model: impl Into<String>, serial: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            serial: serial.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Payload handed to a sender: `Model: <model>\nSerial: <serial>`.
    pub fn information(&self) -> String {
        format!("Model: {}\nSerial: {}", self.model, self.serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_format() {
        let identity = RobotIdentity::new("X100", "SN-42");
        assert_eq!(identity.information(), "Model: X100\nSerial: SN-42");
    }

    #[test]
    fn test_information_with_empty_fields() {
        let identity = RobotIdentity::new("", "");
        assert_eq!(identity.information(), "Model: \nSerial: ");
    }

    #[test]
    fn test_information_keeps_text_verbatim() {
        let identity = RobotIdentity::new("  T-800 ", "a\nb");
        assert_eq!(identity.information(), "Model:   T-800 \nSerial: a\nb");
    }
}
