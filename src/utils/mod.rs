mod base64;
pub use base64::*;

mod case;
pub use case::*;

mod serde;
pub use serde::*;

#[cfg(test)]
pub mod mocks;
