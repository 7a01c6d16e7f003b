//! Named text transforms.
//!
//! The `fx pipe` command builds a pipeline out of transform names given on the
//! command line or in the configuration file. Each name maps to a plain
//! `String -> String` function, so a list of names becomes a list of stages
//! for [`pipe`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::pipeline::pipe;

/// A text transformation selectable by name.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Strip leading and trailing whitespace
    Trim,

    /// Convert to uppercase
    Upper,

    /// Convert to lowercase
    Lower,

    /// Reverse the order of characters
    Reverse,

    /// Collapse runs of whitespace into a single space
    Squash,

    /// Lowercase and join whitespace-separated words with `_`
    Snake,
}

impl Transform {
    /// The function implementing this transform.
    #[must_use]
    pub fn as_fn(self) -> fn(String) -> String {
        match self {
            Self::Trim => |s: String| s.trim().to_string(),
            Self::Upper => |s: String| s.to_uppercase(),
            Self::Lower => |s: String| s.to_lowercase(),
            Self::Reverse => |s: String| s.chars().rev().collect::<String>(),
            Self::Squash => squash,
            Self::Snake => {
                |s: String| s.split_whitespace().collect::<Vec<_>>().join("_").to_lowercase()
            }
        }
    }
}

fn squash(text: String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }

    out
}

/// Run `text` through `transforms` in order.
#[must_use]
pub fn apply_transforms(text: String, transforms: &[Transform]) -> String {
    pipe(text, transforms.iter().map(|transform| transform.as_fn()))
}
