// src/application/dto.rs
use crate::domain::element::MatchedElement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchedElementDto {
    /// Tag name of the matched element.
    pub tag: String,
    /// Attributes of the matched element, as written in the source HTML.
    pub attributes: BTreeMap<String, String>,
    /// Visible text of the element, whitespace-stripped.
    pub text: String,
}

impl From<MatchedElement> for MatchedElementDto {
    fn from(element: MatchedElement) -> Self {
        Self {
            tag: element.tag,
            attributes: element.attributes,
            text: element.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ElementMatchDto {
    /// Index of the corresponding test step.
    pub step_index: usize,
    /// Original test step description.
    pub step_description: String,
    /// Info about the matched HTML element, absent when nothing matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_element: Option<MatchedElementDto>,
    /// How the element was identified (id, name, class, text, etc.).
    pub match_method: String,
}
