//! Transform vocabulary
//!
//! Every transform in the crate has a wire name here, so pipelines can be
//! described in data (JSON or YAML) and executed by the interpreter.

use serde::{Deserialize, Serialize};

/// A named transform, applied to a JSON array by [`crate::interpreter`].
///
/// Wire names are `snake_case`, e.g. `book_end_list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    /// Keep just the first and last number
    BookEndList,
    /// Multiply every number by 3
    TripleNumbers,
    /// Parse strings as integers, 0 on failure
    StringsToIntegers,
    /// Strip a leading `$` and parse as integers, 0 on failure
    RemoveDollars,
    /// Drop questions, uppercase exclamations
    ShoutIfExclaiming,
    /// Count strings shorter than 4 characters
    CountShortWords,
    /// True if every string is red, blue, or green
    AllRgb,
    /// Render the sum and the addends, e.g. `"6=1+2+3"`
    MakeMath,
    /// Insert the running sum after the first negative, or append the total
    InjectPositive,
}

impl TransformOp {
    /// Every operation, in declaration order.
    pub const ALL: [TransformOp; 9] = [
        TransformOp::BookEndList,
        TransformOp::TripleNumbers,
        TransformOp::StringsToIntegers,
        TransformOp::RemoveDollars,
        TransformOp::ShoutIfExclaiming,
        TransformOp::CountShortWords,
        TransformOp::AllRgb,
        TransformOp::MakeMath,
        TransformOp::InjectPositive,
    ];

    /// The operation's wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BookEndList => "book_end_list",
            Self::TripleNumbers => "triple_numbers",
            Self::StringsToIntegers => "strings_to_integers",
            Self::RemoveDollars => "remove_dollars",
            Self::ShoutIfExclaiming => "shout_if_exclaiming",
            Self::CountShortWords => "count_short_words",
            Self::AllRgb => "all_rgb",
            Self::MakeMath => "make_math",
            Self::InjectPositive => "inject_positive",
        }
    }
}
