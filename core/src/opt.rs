use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::{self, Display};

use crate::error::EmptyValueError;

/// An optional value: either [`Some`](Opt::Some) value is present, or [`Non`](Opt::Non) is.
///
/// Options are immutable. Every combinator consumes the receiver and returns a new option, so `Opt<T>` is as
/// thread-safe as `T` itself. `Opt::Some(Opt::Non)` is a legal value and is distinct from `Opt::Non`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Opt<T> {
  Some(T),
  Non,
}

impl<T> Default for Opt<T> {
  #[inline]
  fn default() -> Self { Self::Non }
}


// Construction

impl<T> Opt<T> {
  /// Creates an option from `value`, where the std `None` is the absence marker: `Opt::new(123)` is `Some(123)`, and
  /// `Opt::<i32>::new(None)` is `Non`.
  ///
  /// Use [`some`](Self::some) to wrap a value unconditionally.
  #[inline]
  pub fn new(value: impl Into<Option<T>>) -> Self {
    let value: Option<T> = value.into();
    value.into()
  }

  /// Creates an option holding no value.
  #[inline]
  pub const fn non() -> Self { Self::Non }

  /// Creates an option holding `value`, even when `value` itself is an absence marker such as `None`.
  #[inline]
  pub const fn some(value: T) -> Self { Self::Some(value) }
}


// Inspection

impl<T> Opt<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }

  #[inline]
  pub const fn is_non(&self) -> bool { matches!(self, Self::Non) }

  /// Returns `true` if this holds a value for which `predicate` holds. `predicate` is not called on `Non`.
  #[inline]
  pub fn is_some_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Self::Some(value) => predicate(value),
      Self::Non => false,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Opt<&T> {
    match self {
      Self::Some(value) => Opt::Some(value),
      Self::Non => Opt::Non,
    }
  }
}


// Extraction

impl<T> Opt<T> {
  /// Returns the contained value, or an [`EmptyValueError`] with the default message if this is `Non`.
  #[inline]
  pub fn unwrap(self) -> Result<T, EmptyValueError> {
    match self {
      Self::Some(value) => Ok(value),
      Self::Non => Err(EmptyValueError::default()),
    }
  }

  /// Returns the contained value, or an [`EmptyValueError`] carrying `message` if this is `Non`.
  #[inline]
  pub fn expect(self, message: impl Into<Cow<'static, str>>) -> Result<T, EmptyValueError> {
    match self {
      Self::Some(value) => Ok(value),
      Self::Non => Err(EmptyValueError::new(message)),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::Non => default,
    }
  }

  /// Returns the contained value, or the result of `f` if this is `Non`. `f` is only called when needed.
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Self::Some(value) => value,
      Self::Non => f(),
    }
  }
}


// Transformation

impl<T> Opt<T> {
  /// Maps the contained value with `f`.
  ///
  /// Mapping opts into failure: mapping `Non` is an [`EmptyValueError`]. Use [`and_then`](Self::and_then) to chain
  /// without failing, or [`map_or`](Self::map_or) to supply a default.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<Opt<U>, EmptyValueError> {
    self.try_map(|value| Ok::<_, Infallible>(f(value)))
  }

  /// Maps the contained value with fallible `f`. A failure of `f` is normalized into an [`EmptyValueError`] carrying
  /// the failure's message, as is mapping `Non`.
  pub fn try_map<U, E: Display>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Opt<U>, EmptyValueError> {
    let value = self.unwrap()?;
    let mapped = f(value).map_err(EmptyValueError::from_mapper_failure)?;
    Ok(Opt::Some(mapped))
  }

  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Some(value) => f(value),
      Self::Non => default,
    }
  }

  pub fn try_map_or<U, E: Display>(self, default: U, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, EmptyValueError> {
    match self {
      Self::Some(value) => f(value).map_err(EmptyValueError::from_mapper_failure),
      Self::Non => Ok(default),
    }
  }

  /// Maps the contained value with `f`, or returns the result of `default_f` if this is `Non`.
  #[inline]
  pub fn map_or_else<U>(self, default_f: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Some(value) => f(value),
      Self::Non => default_f(),
    }
  }

  pub fn try_map_or_else<U, E: Display>(
    self,
    default_f: impl FnOnce() -> U,
    f: impl FnOnce(T) -> Result<U, E>,
  ) -> Result<U, EmptyValueError> {
    match self {
      Self::Some(value) => f(value).map_err(EmptyValueError::from_mapper_failure),
      Self::Non => Ok(default_f()),
    }
  }

  /// Keeps the contained value only if `predicate` holds for it.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if let Self::Some(value) = self {
      if predicate(&value) {
        return Self::Some(value);
      }
    }
    Self::Non
  }

  /// Chains `f` onto the contained value: `Some(v)` becomes `Some(f(v))` and `Non` stays `Non`.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
    match self {
      Self::Some(value) => Opt::Some(f(value)),
      Self::Non => Opt::Non,
    }
  }

  /// Chains fallible `f` onto the contained value. `Non` stays `Non`; a failure of `f` is normalized into an
  /// [`EmptyValueError`].
  pub fn try_and_then<U, E: Display>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Opt<U>, EmptyValueError> {
    match self {
      Self::Some(value) => f(value).map(Opt::Some).map_err(EmptyValueError::from_mapper_failure),
      Self::Non => Ok(Opt::Non),
    }
  }
}

impl<T> Opt<Opt<T>> {
  /// Removes exactly one level of nesting: `Some(Some(v))` becomes `Some(v)`, while `Some(Non)` and `Non` become
  /// `Non`.
  #[inline]
  pub fn flatten(self) -> Opt<T> {
    match self {
      Self::Some(inner) => inner,
      Self::Non => Opt::Non,
    }
  }
}


// Combination

impl<T> Opt<T> {
  /// Returns `other` if this holds a value, `Non` otherwise. `other` is not examined when this is `Non`.
  #[inline]
  pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
    match self {
      Self::Some(_) => other,
      Self::Non => Opt::Non,
    }
  }

  /// Returns this if it holds a value, `other` otherwise.
  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      Self::Some(_) => self,
      Self::Non => other,
    }
  }

  /// Pairs the values of this and `other` if both hold one, `Non` otherwise.
  #[inline]
  pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
    match (self, other) {
      (Self::Some(value), Opt::Some(other_value)) => Opt::Some((value, other_value)),
      _ => Opt::Non,
    }
  }
}


// Conversion

impl<T> Opt<T> {
  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Some(value) => Some(value),
      Self::Non => None,
    }
  }
}

impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Some(value),
      None => Self::Non,
    }
  }
}

impl<T: Display> Display for Opt<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Some(value) => write!(f, "Option::Some({})", value),
      Self::Non => f.write_str("Option::Non"),
    }
  }
}
