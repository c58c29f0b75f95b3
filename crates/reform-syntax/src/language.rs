//! Source language tags.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The language a tree was parsed from.
///
/// Rules declare which languages they apply to; the engine skips rules that
/// do not support the tree's language.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[display("C#")]
    #[serde(rename = "C#", alias = "csharp")]
    CSharp,
    #[display("Visual Basic")]
    #[serde(rename = "Visual Basic", alias = "vb")]
    VisualBasic,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::CSharp, Language::VisualBasic];
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display("unknown language `{name}` (expected C# or Visual Basic)")]
pub struct ParseLanguageError {
    #[error(not(source))]
    pub name: String,
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c#" | "cs" | "csharp" => Ok(Language::CSharp),
            "vb" | "visualbasic" | "visual basic" => Ok(Language::VisualBasic),
            _ => Err(ParseLanguageError {
                name: s.to_string(),
            }),
        }
    }
}
