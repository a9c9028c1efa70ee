use crate::domain::ports::MessageSender;
use crate::utils::error::Result;
use std::sync::Mutex;

/// In-memory sender that keeps every payload it is given, in order.
#[derive(Debug, Default)]
pub struct RecordingSender {
    messages: Mutex<Vec<String>>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn last_message(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MessageSender for RecordingSender {
    fn send_information(&self, information: &str) -> Result<()> {
        self.lock().push(information.to_string());
        Ok(())
    }
}
