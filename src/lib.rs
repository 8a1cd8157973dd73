#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod types;

pub use error::*;
pub use types::*;
