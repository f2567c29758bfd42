// src/application/steps.rs
use std::sync::Arc;

use crate::application::ApplicationResult;
use crate::application::dto::ElementMatchDto;
use crate::domain::element::MatchMethod;
use crate::domain::finder::DocumentParser;
use crate::domain::step::extract_reference;

pub struct MatchStepsQuery {
    pub html: String,
    pub steps: Vec<String>,
}

pub struct StepMatchService {
    parser: Arc<dyn DocumentParser>,
}

impl StepMatchService {
    pub fn new(parser: Arc<dyn DocumentParser>) -> Self {
        Self { parser }
    }

    /// Match each test step against the parsed document. The document is
    /// parsed once and reused for every step. Steps that reference nothing
    /// recognizable, or whose reference resolves to no element, are reported
    /// with the `not found` method and no element info.
    pub fn match_steps(&self, query: MatchStepsQuery) -> ApplicationResult<Vec<ElementMatchDto>> {
        let document = self.parser.parse(&query.html);

        let elements = query
            .steps
            .into_iter()
            .enumerate()
            .map(|(step_index, step_description)| {
                let outcome = extract_reference(&step_description)
                    .and_then(|reference| document.find(&reference));

                match outcome {
                    Some(found) => ElementMatchDto {
                        step_index,
                        step_description,
                        matched_element: Some(found.element.into()),
                        match_method: found.method.to_string(),
                    },
                    None => ElementMatchDto {
                        step_index,
                        step_description,
                        matched_element: None,
                        match_method: MatchMethod::NotFound.to_string(),
                    },
                }
            })
            .collect();

        Ok(elements)
    }
}
