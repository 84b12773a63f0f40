use pretty_assertions::assert_eq;

use opt_core::{EmptyValueError, Opt};

mod common;

#[test]
fn unwrap_some() {
  common::init_tracing();
  assert_eq!(Opt::new(123).unwrap(), Ok(123));
}

#[test]
fn unwrap_non_fails() {
  common::init_tracing();
  assert_eq!(Opt::<i32>::non().unwrap(), Err(EmptyValueError::default()));
}

#[test]
fn unwrap_or_default() {
  common::init_tracing();
  assert_eq!(Opt::new(123).unwrap_or(0), 123);
  assert_eq!(Opt::non().unwrap_or(0), 0);
}

#[test]
fn filter_by_parity() {
  common::init_tracing();
  assert_eq!(Opt::new(123).filter(|x| x % 2 == 0), Opt::non());
  assert_eq!(Opt::new(123).filter(|x| x % 2 == 1), Opt::new(123));
}

#[test]
fn flatten_nested() {
  common::init_tracing();
  assert_eq!(Opt::new(Opt::new(123)).flatten(), Opt::new(123));
  assert_eq!(Opt::new(Opt::<i32>::non()).flatten(), Opt::non());
}

#[test]
fn and_then_chains() {
  common::init_tracing();
  assert_eq!(Opt::new(123).and_then(|x| x + 321), Opt::new(444));
  assert_eq!(Opt::<i32>::non().and_then(|x| x + 321), Opt::non());
}

#[test]
fn equality_is_variant_aware() {
  common::init_tracing();
  let s = Opt::new(123);
  let n = Opt::<i32>::non();
  assert_eq!(s, s);
  assert_eq!(n, n);
  assert_ne!(s, n);
  assert_ne!(n, s);
  assert_ne!(Opt::new(Opt::<i32>::non()), Opt::non());
}

#[test]
fn or_keeps_nested_non() {
  common::init_tracing();
  let sn = Opt::new(Opt::<i32>::non());
  assert_eq!(sn.or(Opt::non()), Opt::new(Opt::non()));
  assert_eq!(sn.flatten().or(Opt::non()), Opt::non());
}

#[test]
fn expect_carries_message() {
  common::init_tracing();
  assert_eq!(Opt::new(123).expect("Not Some"), Ok(123));
  assert_eq!(Opt::<i32>::non().expect("This is Non").unwrap_err().to_string(), "This is Non");
}

#[test]
fn mapper_failure_is_an_empty_value_error() {
  common::init_tracing();
  let error = Opt::new("Hello").try_and_then(|s| s.parse::<u8>()).unwrap_err();
  assert_eq!(error.message(), "invalid digit found in string");
}
