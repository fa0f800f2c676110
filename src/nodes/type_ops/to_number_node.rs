//! # Numeric Coercions
//!
//! Range-checked conversions through [`num_traits::ToPrimitive`]. A value that
//! does not fit the target type is a coercion error rather than a truncated or
//! saturated result:
//!
//! - integer targets reject floats with a fractional part (`3.7` is an error,
//!   `3.0` converts)
//! - `f32` rejects finite inputs whose magnitude overflows to infinity;
//!   infinities and NaN pass through unchanged

use crate::error::NodeError;
use num_traits::ToPrimitive;

fn whole<T: ToPrimitive, S>(value: &T) -> Result<(), NodeError> {
  match value.to_f64() {
    Some(float) if float.is_finite() && float.fract() != 0.0 => {
      Err(NodeError::coercion::<T, S>("fractional part would be lost"))
    }
    _ => Ok(()),
  }
}

macro_rules! integer_coercion {
  ($($name:ident => $target:ty),+ $(,)?) => {
    $(
      #[doc = concat!("Converts a whole numeric value into `", stringify!($target), "`.")]
      pub fn $name<T: ToPrimitive>(value: &T) -> Result<$target, NodeError> {
        whole::<T, $target>(value)?;
        value
          .$name()
          .ok_or_else(|| NodeError::coercion::<T, $target>("value out of range"))
      }
    )+
  };
}

integer_coercion! {
  to_i8 => i8,
  to_i16 => i16,
  to_i32 => i32,
  to_i64 => i64,
}

/// Converts a numeric value into `f32`.
pub fn to_f32<T: ToPrimitive>(value: &T) -> Result<f32, NodeError> {
  let narrowed = value
    .to_f32()
    .ok_or_else(|| NodeError::coercion::<T, f32>("value out of range"))?;
  if !narrowed.is_finite() && value.to_f64().is_some_and(f64::is_finite) {
    return Err(NodeError::coercion::<T, f32>("magnitude exceeds f32"));
  }
  Ok(narrowed)
}

/// Converts a numeric value into `f64`.
pub fn to_f64<T: ToPrimitive>(value: &T) -> Result<f64, NodeError> {
  value
    .to_f64()
    .ok_or_else(|| NodeError::coercion::<T, f64>("value out of range"))
}
