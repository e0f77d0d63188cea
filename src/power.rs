//! Self-exponentiation of validated numeric values.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::value::{Number, Value};

/// Raise a numeric value to the power of itself.
///
/// Integer and float inputs are accepted; every other category fails with
/// [`Error::TypeMismatch`] naming the offending value. Integer inputs stay
/// in integer space while `n^n` is representable in `i64`; negative
/// self-exponents and overflowing results fall back to the float
/// computation. Float inputs follow IEEE-754 conventions unhandled, so
/// `0.0^0.0 == 1.0` and negative non-integral self-exponents yield NaN.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when the input is not an integer or a
/// float.
///
/// # Examples
///
/// ```
/// use calc_square::{calc_square, Number, Value};
///
/// assert_eq!(calc_square(Value::from(3))?, Number::Int(27));
/// assert_eq!(calc_square(Value::from(2.0))?, Number::Float(4.0));
/// # Ok::<(), calc_square::Error>(())
/// ```
pub fn calc_square(num: Value) -> Result<Number> {
    let result = match num {
        Value::Int(n) => int_self_power(n),
        Value::Float(x) => Number::Float(x.powf(x)),
        other => {
            debug!(kind = %other.kind(), "rejecting non-numeric input");
            return Err(Error::type_mismatch(other));
        }
    };
    trace!(%result, "computed self-exponentiation");
    Ok(result)
}

/// `n^n` in integer space, widening to double precision where `i64` cannot
/// carry the result.
fn int_self_power(n: i64) -> Number {
    u32::try_from(n)
        .ok()
        .and_then(|exp| n.checked_pow(exp))
        .map_or_else(|| Number::Float((n as f64).powf(n as f64)), Number::Int)
}
