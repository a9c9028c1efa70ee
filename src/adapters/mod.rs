pub mod antenna;
pub mod recording;

pub use antenna::Antenna;
pub use recording::RecordingSender;
