//! Dynamic fee integration tests.
#![allow(missing_docs, unused)]

mod environment;

pub use constants::*;
pub use environment::*;
