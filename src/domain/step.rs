// src/domain/step.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// What a test step description points at in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementReference {
    Id(String),
    Name(String),
    /// One or more space-separated class names; an element must carry all of
    /// them to match.
    Class(String),
    Text(String),
    XPath(String),
}

#[derive(Clone, Copy)]
enum ReferenceKind {
    Id,
    Name,
    Class,
    Text,
    XPath,
}

static REFERENCE_PATTERNS: Lazy<Vec<(Regex, ReferenceKind)>> = Lazy::new(|| {
    [
        (r#"(?i)\bwith\s+id\s+['"]?([\w\-:]+)['"]?"#, ReferenceKind::Id),
        (
            r#"(?i)\bwith\s+name\s+['"]?([\w\-:]+)['"]?"#,
            ReferenceKind::Name,
        ),
        (
            r#"(?i)\bwith\s+class\s+['"]?([\w\-: ]+)['"]?"#,
            ReferenceKind::Class,
        ),
        (r#"(?i)\btext\s*['"]([^'"]+)['"]"#, ReferenceKind::Text),
        (
            r#"(?i)\bwhere\s+text\s+is\s+['"]([^'"]+)['"]"#,
            ReferenceKind::Text,
        ),
        (r#"(?i)\bxpath\s+['"]([^'"]+)['"]"#, ReferenceKind::XPath),
    ]
    .into_iter()
    .map(|(pattern, kind)| (Regex::new(pattern).expect("valid regex"), kind))
    .collect()
});

static TAGGED_FALLBACK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(button|input|element)\s+["']?([\w\-\s]+)["']?"#).expect("valid regex")
});

/// Extract the likely element reference from an English step description.
///
/// Patterns are tried in order and the first hit wins. Supports common
/// phrasings such as:
/// - "Click the button with id submitBtn"
/// - "Type 'foo' in the input with name searchBox"
/// - "Verify the text 'Welcome' is visible"
/// - "Click on the element with class btn-primary"
pub fn extract_reference(description: &str) -> Option<ElementReference> {
    for (pattern, kind) in REFERENCE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(description) {
            let value = captures[1].trim().to_string();
            return Some(match kind {
                ReferenceKind::Id => ElementReference::Id(value),
                ReferenceKind::Name => ElementReference::Name(value),
                ReferenceKind::Class => ElementReference::Class(value),
                ReferenceKind::Text => ElementReference::Text(value),
                ReferenceKind::XPath => ElementReference::XPath(value),
            });
        }
    }

    // 'the button "Save"' style descriptions carry no locator; the tag word
    // is discarded and the quoted value is matched as visible text.
    TAGGED_FALLBACK
        .captures(description)
        .map(|captures| ElementReference::Text(captures[2].trim().to_string()))
}
