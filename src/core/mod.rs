pub mod demo;
pub mod with_di;
pub mod without_di;
