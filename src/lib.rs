//! Seqweave Core Library
//!
//! Pure, stateless transforms over ordered sequences of numbers or strings.
//! Every transform borrows its input and returns a freshly constructed
//! value; callers' data is never mutated and no transform panics.
//!
//! Two layers are provided:
//! - Typed functions over slices ([`numbers`], [`strings`])
//! - A dynamic layer that applies named transforms to JSON arrays
//!   ([`ops`], [`interpreter`])
//!
//! # Example
//!
//! ```rust
//! use seqweave::{apply_all, TransformOp};
//! use serde_json::json;
//!
//! let ops = [TransformOp::TripleNumbers, TransformOp::MakeMath];
//! let out = apply_all(&json!([1, 2, 3]), &ops)?;
//! assert_eq!(out, json!("18=3+6+9"));
//! # Ok::<(), seqweave::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod interpreter;
pub mod numbers;
pub mod ops;
pub mod strings;

pub use error::{Error, Result};
pub use interpreter::{apply, apply_all};
pub use numbers::{book_end_list, inject_positive, make_math, triple_numbers};
pub use ops::TransformOp;
pub use strings::{
    all_rgb, count_short_words, remove_dollars, shout_if_exclaiming, strings_to_integers,
};
