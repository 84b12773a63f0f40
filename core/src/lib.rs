//! A two-variant optional value, [`Opt`], with a combinator algebra that reports absence through typed errors
//! instead of panics.

pub mod error;
pub mod opt;
#[cfg(feature = "serde")]
pub mod encoded;

pub mod app;

pub use error::{EmptyValueError, OptError, TypeMismatchError};
pub use opt::Opt;
