pub mod calendar;
pub mod composer;
pub mod engine;
pub mod selector;
pub mod types;
