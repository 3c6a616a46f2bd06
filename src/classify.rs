//! Range classification for signed integers.
//!
//! `classify` maps an integer onto one of five fixed labels using ordered,
//! mutually exclusive range checks. The function is total over `i64`: every
//! input matches exactly one branch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label for a numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// x < 0
    Neg,
    /// x == 0
    Zero,
    /// 0 < x < 10
    Small,
    /// 10 <= x < 100
    Mid,
    /// x >= 100
    Big,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Neg => "neg",
            Label::Zero => "zero",
            Label::Small => "small",
            Label::Mid => "mid",
            Label::Big => "big",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an integer by range. First matching rule wins.
pub fn classify(x: i64) -> Label {
    if x < 0 {
        Label::Neg
    } else if x == 0 {
        Label::Zero
    } else if x < 10 {
        Label::Small
    } else if x < 100 {
        Label::Mid
    } else {
        Label::Big
    }
}
