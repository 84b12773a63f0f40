//! Options encoded as JSON values, and operations on values that may not be options at all.
//!
//! An option is encoded as a tagged array: `["Some", value]` or `["Non"]`. The functions in this module accept any
//! [`Value`] and reject values of another shape with a [`TypeMismatchError`], except for the inspection functions,
//! which report foreign values as neither `Some` nor `Non`.

use std::any::type_name;
use std::fmt::{self, Display};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{self, DeserializeOwned, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde_json::{json, Value};

use crate::error::{EmptyValueError, OptError, TypeMismatchError};
use crate::opt::Opt;

const SOME_TAG: &str = "Some";
const NON_TAG: &str = "Non";
const ENCODED_OPTION: &str = "an encoded option";
const BOOLEAN: &str = "a boolean";


// Wire format

impl<T: Serialize> Serialize for Opt<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Opt::Some(value) => {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(SOME_TAG)?;
        tuple.serialize_element(value)?;
        tuple.end()
      }
      Opt::Non => {
        let mut tuple = serializer.serialize_tuple(1)?;
        tuple.serialize_element(NON_TAG)?;
        tuple.end()
      }
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_seq(OptVisitor(PhantomData))
  }
}

struct OptVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OptVisitor<T> {
  type Value = Opt<T>;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str(r#"["Some", value] or ["Non"]"#)
  }

  fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
    let tag: String = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
    let opt = match tag.as_str() {
      SOME_TAG => {
        let value = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Opt::Some(value)
      }
      NON_TAG => Opt::Non,
      other => return Err(de::Error::unknown_variant(other, &[SOME_TAG, NON_TAG])),
    };
    let len = if opt.is_some() { 2 } else { 1 };
    if seq.next_element::<IgnoredAny>()?.is_some() {
      return Err(de::Error::invalid_length(len + 1, &self));
    }
    Ok(opt)
  }
}


// Encoding and decoding

/// Encodes `opt` into its tagged array form.
pub fn encode<T: Serialize>(opt: &Opt<T>) -> Result<Value, serde_json::Error> {
  serde_json::to_value(opt)
}

/// Decodes `value` into an option of `T`. A value that is not an encoded option, or whose payload is not a `T`, is a
/// [`TypeMismatchError`].
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<Opt<T>, OptError> {
  let opt = match decode_value(value)? {
    Opt::Some(payload) => {
      let payload = T::deserialize(payload)
        .map_err(|cause| TypeMismatchError::new(type_name::<T>(), cause.to_string()))?;
      Opt::Some(payload)
    }
    Opt::Non => Opt::Non,
  };
  Ok(opt)
}

fn decode_value(value: &Value) -> Result<Opt<Value>, TypeMismatchError> {
  Opt::<Value>::deserialize(value).map_err(|cause| {
    tracing::trace!(%value, %cause, "rejecting value that is not an encoded option");
    TypeMismatchError::new(ENCODED_OPTION, value.to_string())
  })
}

fn encode_value(opt: Opt<Value>) -> Value {
  match opt {
    Opt::Some(value) => json!([SOME_TAG, value]),
    Opt::Non => json!([NON_TAG]),
  }
}


// Inspection

/// Returns `true` if `value` is an encoded `Some`. Foreign values are not.
pub fn is_some(value: &Value) -> bool {
  decode_value(value).is_ok_and(|opt| opt.is_some())
}

/// Returns `true` if `value` is an encoded `Non`. Foreign values are not.
pub fn is_non(value: &Value) -> bool {
  decode_value(value).is_ok_and(|opt| opt.is_non())
}


// Extraction

pub fn unwrap(value: &Value) -> Result<Value, OptError> {
  Ok(decode_value(value)?.unwrap()?)
}

pub fn expect(value: &Value, message: impl Display) -> Result<Value, OptError> {
  Ok(decode_value(value)?.expect(message.to_string())?)
}

/// Returns the payload of `value`, or `default` if `value` is `Non`.
pub fn unwrap_or(value: &Value, default: Value) -> Result<Value, OptError> {
  Ok(decode_value(value)?.unwrap_or(default))
}

/// Returns the payload of `value`, or the result of `f` if `value` is `Non`.
pub fn unwrap_or_else(value: &Value, f: impl FnOnce() -> Value) -> Result<Value, OptError> {
  Ok(decode_value(value)?.unwrap_or_else(f))
}


// Transformation

/// Maps the payload of `value` with `f` into a new encoded `Some`.
///
/// Mapping `Non`, or a `Some` whose payload is itself an encoded `Non`, is an [`EmptyValueError`], as is a failure of
/// `f`.
pub fn map<E: Display>(value: &Value, f: impl FnOnce(Value) -> Result<Value, E>) -> Result<Value, OptError> {
  let opt = decode_value(value)?;
  if opt.is_some_and(is_non) {
    return Err(EmptyValueError::default().into());
  }
  Ok(encode_value(opt.try_map(f)?))
}

/// Returns `f` applied to the payload of `value`, or `default` if `value` is `Non` or a `Some` of an encoded `Non`. A
/// failure of `f` is an [`EmptyValueError`].
pub fn map_or<E: Display>(
  value: &Value,
  default: Value,
  f: impl FnOnce(Value) -> Result<Value, E>,
) -> Result<Value, OptError> {
  Ok(present_payload(value)?.try_map_or(default, f)?)
}

/// Returns `f` applied to the payload of `value`, or the result of `default_f` if `value` is `Non` or a `Some` of an
/// encoded `Non`. A failure of `f` is an [`EmptyValueError`].
pub fn map_or_else<E: Display>(
  value: &Value,
  default_f: impl FnOnce() -> Value,
  f: impl FnOnce(Value) -> Result<Value, E>,
) -> Result<Value, OptError> {
  Ok(present_payload(value)?.try_map_or_else(default_f, f)?)
}

fn present_payload(value: &Value) -> Result<Opt<Value>, TypeMismatchError> {
  Ok(decode_value(value)?.filter(|payload| !is_non(payload)))
}

/// Keeps `value` only if `predicate` returns `true` for its payload. A `predicate` result other than a JSON boolean is
/// a [`TypeMismatchError`].
pub fn filter(value: &Value, predicate: impl FnOnce(&Value) -> Value) -> Result<Value, OptError> {
  let opt = match decode_value(value)? {
    Opt::Some(payload) => match predicate(&payload) {
      Value::Bool(true) => Opt::Some(payload),
      Value::Bool(false) => Opt::Non,
      verdict => {
        tracing::trace!(%verdict, "rejecting non-boolean predicate result");
        return Err(TypeMismatchError::new(BOOLEAN, verdict.to_string()).into());
      }
    },
    Opt::Non => Opt::Non,
  };
  Ok(encode_value(opt))
}

/// Removes one level of nesting from `value`. When the payload of `value` is not itself an encoded option, `value` is
/// returned unchanged.
pub fn flatten(value: &Value) -> Result<Value, OptError> {
  let flattened = match decode_value(value)? {
    Opt::Some(payload) if decode_value(&payload).is_ok() => payload,
    Opt::Some(_) => value.clone(),
    Opt::Non => encode_value(Opt::Non),
  };
  Ok(flattened)
}

/// Chains `f` onto the payload of `value` like [`map`], except that `Non` stays `Non`.
pub fn and_then<E: Display>(value: &Value, f: impl FnOnce(Value) -> Result<Value, E>) -> Result<Value, OptError> {
  if decode_value(value)?.is_non() {
    return Ok(encode_value(Opt::Non));
  }
  map(value, f)
}


// Combination

/// Returns `other` if `value` is `Some`, `Non` otherwise. `other` is only checked when it is returned.
pub fn and(value: &Value, other: &Value) -> Result<Value, OptError> {
  let opt = decode_value(value)?;
  let result = match opt {
    Opt::Some(_) => decode_value(other)?,
    Opt::Non => Opt::Non,
  };
  Ok(encode_value(result))
}

/// Returns `value` if it is `Some`, `other` otherwise. `other` is only checked when it is returned.
pub fn or(value: &Value, other: &Value) -> Result<Value, OptError> {
  let opt = decode_value(value)?;
  let result = match opt {
    Opt::Some(_) => opt,
    Opt::Non => decode_value(other)?,
  };
  Ok(encode_value(result))
}

/// Pairs the payloads of `value` and `other` into an encoded `Some([payload, other_payload])` if both are `Some`.
/// `other` is not checked when `value` is `Non`.
pub fn zip(value: &Value, other: &Value) -> Result<Value, OptError> {
  let opt = decode_value(value)?;
  if opt.is_non() {
    return Ok(encode_value(Opt::Non));
  }
  let zipped = opt.zip(decode_value(other)?).and_then(|(payload, other_payload)| json!([payload, other_payload]));
  Ok(encode_value(zipped))
}


#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn wire_format() {
    assert_eq!(encode(&Opt::new(123)).unwrap(), json!(["Some", 123]));
    assert_eq!(encode(&Opt::<i32>::non()).unwrap(), json!(["Non"]));
    assert_eq!(encode(&Opt::new(Opt::<i32>::non())).unwrap(), json!(["Some", ["Non"]]));
    assert_eq!(serde_json::to_string(&Opt::new("a")).unwrap(), r#"["Some","a"]"#);
  }

  #[test]
  fn deserialize_rejects_other_shapes() {
    assert_eq!(serde_json::from_str::<Opt<i32>>(r#"["Some",1]"#).unwrap(), Opt::new(1));
    assert_eq!(serde_json::from_str::<Opt<i32>>(r#"["Non"]"#).unwrap(), Opt::non());
    assert!(serde_json::from_str::<Opt<i32>>(r#"["Maybe",1]"#).is_err());
    assert!(serde_json::from_str::<Opt<i32>>(r#"["Some"]"#).is_err());
    assert!(serde_json::from_str::<Opt<i32>>(r#"["Non",1]"#).is_err());
    assert!(serde_json::from_str::<Opt<i32>>(r#"["Some",1,2]"#).is_err());
    assert!(serde_json::from_str::<Opt<i32>>("1").is_err());
  }

  #[test]
  fn decode_checks_shape_and_payload() {
    assert_eq!(decode::<i32>(&json!(["Some", 1])), Ok(Opt::new(1)));
    assert_eq!(decode::<Opt<i32>>(&json!(["Some", ["Non"]])), Ok(Opt::new(Opt::non())));
    assert!(decode::<i32>(&json!([1, 2, 3])).unwrap_err().is_type_mismatch());
    assert!(decode::<i32>(&json!(["Some", "one"])).unwrap_err().is_type_mismatch());
  }

  #[test]
  fn foreign_values_are_neither_some_nor_non() {
    for foreign in [json!(123), json!(null), json!([1, 2, 3]), json!({"Some": 1})] {
      assert!(!is_some(&foreign));
      assert!(!is_non(&foreign));
    }
  }

  #[test]
  fn fallbacks_reject_foreign_values() {
    let foreign = json!(123);
    let add_one = |v: Value| Ok::<_, String>(json!(v.as_i64().unwrap_or_default() + 1));
    assert!(unwrap_or(&foreign, json!(0)).unwrap_err().is_type_mismatch());
    assert!(unwrap_or_else(&foreign, || json!(0)).unwrap_err().is_type_mismatch());
    assert!(map_or(&foreign, json!(0), add_one).unwrap_err().is_type_mismatch());
    assert!(map_or_else(&foreign, || json!(0), add_one).unwrap_err().is_type_mismatch());
    assert_eq!(map_or(&json!(["Some", ["Non"]]), json!(0), add_one), Ok(json!(0)));
  }

  #[test]
  fn filter_requires_boolean_verdict() {
    let some = json!(["Some", 1]);
    assert_eq!(filter(&some, |v| json!(v.as_i64() > Some(0))), Ok(some.clone()));
    assert_eq!(filter(&some, |v| json!(v.as_i64() < Some(0))), Ok(json!(["Non"])));
    let error = filter(&some, |v| json!(v.as_i64().unwrap_or_default() + 2)).unwrap_err();
    assert_eq!(error, OptError::TypeMismatch(TypeMismatchError::new(BOOLEAN, "3")));
  }

  #[test]
  fn zip_pairs_payloads() {
    assert_eq!(zip(&json!(["Some", 123]), &json!(["Some", "Hello"])), Ok(json!(["Some", [123, "Hello"]])));
    assert_eq!(zip(&json!(["Non"]), &json!("world")), Ok(json!(["Non"])));
  }
}
