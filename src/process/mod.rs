//! Process name -> pid resolution for attach targets.

pub mod resolver;

pub use resolver::{ProcessRef, ProcessResolver};
