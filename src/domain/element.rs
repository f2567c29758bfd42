// src/domain/element.rs
use std::collections::BTreeMap;
use std::fmt;

/// Serializable information about an element found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedElement {
    pub tag: String,
    /// Attributes as written in the source HTML.
    pub attributes: BTreeMap<String, String>,
    /// Concatenated visible text with each segment stripped of whitespace.
    pub text: String,
}

/// How an element was identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    Id,
    Name,
    Class,
    TextExact,
    TextContains,
    NotFound,
}

impl MatchMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Class => "class",
            Self::TextExact => "text_exact",
            Self::TextContains => "text_contains",
            Self::NotFound => "not found",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved element together with the criterion that identified it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMatch {
    pub element: MatchedElement,
    pub method: MatchMethod,
}
