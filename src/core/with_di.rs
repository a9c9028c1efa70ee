//! Robot that is handed its sender. It borrows the sender for its whole
//! lifetime and never creates or drops one itself.

use crate::domain::model::RobotIdentity;
use crate::domain::ports::MessageSender;
use crate::utils::error::Result;

#[derive(Debug)]
pub struct Robot<'a, S: MessageSender + ?Sized> {
    identity: RobotIdentity,
    message_sender: &'a S,
}

impl<'a, S: MessageSender + ?Sized> Robot<'a, S> {
    pub fn new(
        model: impl Into<String>,
        serial: impl Into<String>,
        message_sender: &'a S,
    ) -> Self {
        Self {
            identity: RobotIdentity::new(model, serial),
            message_sender,
        }
    }

    pub fn model(&self) -> &str {
        self.identity.model()
    }

    pub fn serial(&self) -> &str {
        self.identity.serial()
    }

    pub fn robot_information(&self) -> String {
        self.identity.information()
    }

    pub fn send_robot_information(&self) -> Result<()> {
        let robot_info = self.robot_information();
        tracing::debug!(
            "🤖 Robot {} sending information through injected sender",
            self.serial()
        );
        self.message_sender.send_information(&robot_info)
    }
}
