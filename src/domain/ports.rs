use crate::utils::error::Result;

/// Accepts a text payload and delivers it somewhere.
pub trait MessageSender: Send + Sync {
    fn send_information(&self, information: &str) -> Result<()>;
}

impl<S: MessageSender + ?Sized> MessageSender for &S {
    fn send_information(&self, information: &str) -> Result<()> {
        (**self).send_information(information)
    }
}

impl<S: MessageSender + ?Sized> MessageSender for Box<S> {
    fn send_information(&self, information: &str) -> Result<()> {
        (**self).send_information(information)
    }
}
