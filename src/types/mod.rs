//! Shared primitive types.
mod fee_handler;
pub use fee_handler::*;

mod quote;
pub use quote::*;

mod request;
pub use request::*;

mod result;
pub use result::*;
