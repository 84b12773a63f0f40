use std::borrow::Cow;
use std::fmt::Display;

use thiserror::Error;

/// An operation required a value, but the option was [`Non`](crate::Opt::Non), or a mapper failed while producing
/// one.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{message}")]
pub struct EmptyValueError {
  message: Cow<'static, str>,
}
impl EmptyValueError {
  pub const DEFAULT_MESSAGE: &'static str = "Option::Non does not have a value";

  #[inline]
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
    Self { message: message.into() }
  }

  /// Normalizes a mapper failure into an empty value error carrying the failure's message.
  pub fn from_mapper_failure(cause: impl Display) -> Self {
    tracing::debug!(%cause, "normalizing mapper failure into an empty value error");
    Self::new(cause.to_string())
  }

  #[inline]
  pub fn message(&self) -> &str { &self.message }
}
impl Default for EmptyValueError {
  #[inline]
  fn default() -> Self { Self::new(Self::DEFAULT_MESSAGE) }
}


/// An operation received something that is not a genuine option, or a callback returned a value outside its
/// contract.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("Type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatchError {
  pub expected: &'static str,
  pub found: String,
}
impl TypeMismatchError {
  #[inline]
  pub fn new(expected: &'static str, found: impl Into<String>) -> Self {
    Self { expected, found: found.into() }
  }
}


/// Either kind of option error.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptError {
  #[error(transparent)]
  EmptyValue(#[from] EmptyValueError),
  #[error(transparent)]
  TypeMismatch(#[from] TypeMismatchError),
}
impl OptError {
  #[inline]
  pub fn is_empty_value(&self) -> bool { matches!(self, Self::EmptyValue(_)) }
  #[inline]
  pub fn is_type_mismatch(&self) -> bool { matches!(self, Self::TypeMismatch(_)) }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_value_default_message() {
    let error = EmptyValueError::default();
    assert_eq!(error.to_string(), "Option::Non does not have a value");
  }

  #[test]
  fn mapper_failure_keeps_message() {
    let cause = "abc".parse::<i32>().unwrap_err();
    let error = EmptyValueError::from_mapper_failure(&cause);
    assert_eq!(error.message(), cause.to_string());
  }

  #[test]
  fn opt_error_is_transparent() {
    let error: OptError = TypeMismatchError::new("an encoded option", "number").into();
    assert!(error.is_type_mismatch());
    assert!(!error.is_empty_value());
    assert_eq!(error.to_string(), "Type mismatch: expected an encoded option, found number");

    let error: OptError = EmptyValueError::new("nothing here").into();
    assert!(error.is_empty_value());
    assert_eq!(error.to_string(), "nothing here");
  }
}
