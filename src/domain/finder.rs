// src/domain/finder.rs
use crate::domain::element::ElementMatch;
use crate::domain::step::ElementReference;

/// Parses HTML source into a queryable document.
pub trait DocumentParser: Send + Sync {
    fn parse(&self, html: &str) -> Box<dyn ParsedDocument>;
}

/// A parsed document that resolves element references to concrete elements.
pub trait ParsedDocument {
    /// Returns the first element matching the reference, in document order,
    /// or `None` when the document contains no such element.
    fn find(&self, reference: &ElementReference) -> Option<ElementMatch>;
}
