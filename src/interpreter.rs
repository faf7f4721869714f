//! Transform interpreter
//!
//! Applies named transforms directly to JSON values. The input to every
//! transform is a JSON array; number transforms accept any JSON number
//! elements, string transforms require string elements. Shape violations
//! error; numeric parse failures inside `strings_to_integers` and
//! `remove_dollars` still degrade to 0 per the transform contract.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::ops::TransformOp;
use crate::{numbers, strings};

/// Apply a sequence of transforms left to right.
///
/// A transform that produces a scalar (`make_math`, `count_short_words`,
/// `all_rgb`) only makes sense at the end of a pipeline; feeding its
/// output into a further transform errors.
pub fn apply_all(input: &Value, ops: &[TransformOp]) -> Result<Value> {
    let mut current = input.clone();
    for op in ops {
        current = apply(&current, *op)?;
    }
    Ok(current)
}

/// Apply a single transform to a JSON array.
pub fn apply(input: &Value, op: TransformOp) -> Result<Value> {
    tracing::debug!(op = op.name(), "applying transform");
    let output = match op {
        TransformOp::BookEndList => numbers_to_json(numbers::book_end_list(&as_numbers(input, op)?)),
        TransformOp::TripleNumbers => {
            numbers_to_json(numbers::triple_numbers(&as_numbers(input, op)?))
        }
        TransformOp::MakeMath => to_json(numbers::make_math(&as_numbers(input, op)?))?,
        TransformOp::InjectPositive => {
            numbers_to_json(numbers::inject_positive(&as_numbers(input, op)?))
        }
        TransformOp::StringsToIntegers => {
            numbers_to_json(strings::strings_to_integers(&as_strings(input, op)?))
        }
        TransformOp::RemoveDollars => {
            numbers_to_json(strings::remove_dollars(&as_strings(input, op)?))
        }
        TransformOp::ShoutIfExclaiming => {
            to_json(strings::shout_if_exclaiming(&as_strings(input, op)?))?
        }
        TransformOp::CountShortWords => {
            to_json(strings::count_short_words(&as_strings(input, op)?))?
        }
        TransformOp::AllRgb => to_json(strings::all_rgb(&as_strings(input, op)?))?,
    };
    Ok(output)
}

fn to_json<T: serde::Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn numbers_to_json(values: Vec<f64>) -> Value {
    Value::Array(values.into_iter().map(number_value).collect())
}

// Integral results render as JSON integers, fractional ones as floats.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

fn as_array<'a>(input: &'a Value, op: TransformOp) -> Result<&'a [Value]> {
    input
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::Transform {
            transform: op.name().to_string(),
            message: "input is not a JSON array".to_string(),
        })
}

fn as_numbers(input: &Value, op: TransformOp) -> Result<Vec<f64>> {
    as_array(input, op)?
        .iter()
        .map(|v| {
            v.as_f64().ok_or_else(|| Error::Transform {
                transform: op.name().to_string(),
                message: format!("element {v} is not a number"),
            })
        })
        .collect()
}

fn as_strings(input: &Value, op: TransformOp) -> Result<Vec<String>> {
    as_array(input, op)?
        .iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| Error::Transform {
                transform: op.name().to_string(),
                message: format!("element {v} is not a string"),
            })
        })
        .collect()
}
