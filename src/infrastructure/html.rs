// src/infrastructure/html.rs
use crate::domain::element::{ElementMatch, MatchMethod, MatchedElement};
use crate::domain::finder::{DocumentParser, ParsedDocument};
use crate::domain::step::ElementReference;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static ANY_ELEMENT: Lazy<Selector> = Lazy::new(|| Selector::parse("*").expect("valid selector"));

/// `DocumentParser` backed by the `scraper` crate. Parsing is error-tolerant;
/// malformed HTML yields a best-effort tree rather than a failure.
#[derive(Debug, Default, Clone)]
pub struct ScraperDocumentParser;

impl DocumentParser for ScraperDocumentParser {
    fn parse(&self, html: &str) -> Box<dyn ParsedDocument> {
        Box::new(ScraperDocument {
            html: Html::parse_document(html),
        })
    }
}

struct ScraperDocument {
    html: Html,
}

impl ParsedDocument for ScraperDocument {
    fn find(&self, reference: &ElementReference) -> Option<ElementMatch> {
        match reference {
            ElementReference::Id(value) => self.find_by_attr("id", value, MatchMethod::Id),
            ElementReference::Name(value) => self.find_by_attr("name", value, MatchMethod::Name),
            ElementReference::Class(value) => self.find_by_classes(value),
            ElementReference::Text(value) => self.find_by_text(value),
            // XPath navigation is not supported by the CSS-based finder.
            ElementReference::XPath(_) => None,
        }
    }
}

impl ScraperDocument {
    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(&ANY_ELEMENT)
    }

    fn find_by_attr(&self, attr: &str, value: &str, method: MatchMethod) -> Option<ElementMatch> {
        self.elements()
            .find(|el| el.value().attr(attr) == Some(value))
            .map(|el| ElementMatch {
                element: describe(el),
                method,
            })
    }

    /// Space-separated class lists require an element carrying all of them.
    fn find_by_classes(&self, value: &str) -> Option<ElementMatch> {
        let wanted: Vec<&str> = value.split_whitespace().collect();
        if wanted.is_empty() {
            return None;
        }

        self.elements()
            .find(|el| {
                wanted
                    .iter()
                    .all(|class| el.value().classes().any(|have| have == *class))
            })
            .map(|el| ElementMatch {
                element: describe(el),
                method: MatchMethod::Class,
            })
    }

    /// Exact match on stripped visible text first, substring match second.
    /// Both passes walk in document order, so ancestors whose concatenated
    /// text satisfies the predicate win over their descendants.
    fn find_by_text(&self, value: &str) -> Option<ElementMatch> {
        if let Some(el) = self.elements().find(|el| visible_text(*el) == value) {
            return Some(ElementMatch {
                element: describe(el),
                method: MatchMethod::TextExact,
            });
        }

        self.elements()
            .find(|el| visible_text(*el).contains(value))
            .map(|el| ElementMatch {
                element: describe(el),
                method: MatchMethod::TextContains,
            })
    }
}

fn visible_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("")
}

fn describe(el: ElementRef<'_>) -> MatchedElement {
    MatchedElement {
        tag: el.value().name().to_string(),
        attributes: el
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        text: visible_text(el),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head><title>Demo</title></head>
        <body>
          <h1>Checkout</h1>
          <form>
            <input name="searchBox" type="text">
            <button id="submitBtn" class="btn btn-primary">Submit</button>
            <button id="cancelBtn" class="btn">Cancel</button>
          </form>
        </body></html>
    "#;

    fn find(reference: &ElementReference) -> Option<ElementMatch> {
        ScraperDocumentParser.parse(PAGE).find(reference)
    }

    #[test]
    fn finds_element_by_id() {
        let found = find(&ElementReference::Id("submitBtn".into())).expect("match");
        assert_eq!(found.method, MatchMethod::Id);
        assert_eq!(found.element.tag, "button");
        assert_eq!(found.element.text, "Submit");
        assert_eq!(
            found.element.attributes.get("class").map(String::as_str),
            Some("btn btn-primary")
        );
    }

    #[test]
    fn finds_element_by_name() {
        let found = find(&ElementReference::Name("searchBox".into())).expect("match");
        assert_eq!(found.method, MatchMethod::Name);
        assert_eq!(found.element.tag, "input");
        assert_eq!(found.element.text, "");
    }

    #[test]
    fn finds_first_element_carrying_all_classes() {
        let found = find(&ElementReference::Class("btn btn-primary".into())).expect("match");
        assert_eq!(found.method, MatchMethod::Class);
        assert_eq!(
            found.element.attributes.get("id").map(String::as_str),
            Some("submitBtn")
        );

        // A single shared class resolves to the first carrier in document order.
        let first = find(&ElementReference::Class("btn".into())).expect("match");
        assert_eq!(
            first.element.attributes.get("id").map(String::as_str),
            Some("submitBtn")
        );
    }

    #[test]
    fn finds_element_by_exact_text() {
        let found = find(&ElementReference::Text("Cancel".into())).expect("match");
        assert_eq!(found.method, MatchMethod::TextExact);
        assert_eq!(
            found.element.attributes.get("id").map(String::as_str),
            Some("cancelBtn")
        );
    }

    #[test]
    fn substring_text_match_walks_in_document_order() {
        // No element's text equals the needle, so the substring pass runs;
        // the <html> element's concatenated text contains it and comes first.
        let found = find(&ElementReference::Text("ncel".into())).expect("match");
        assert_eq!(found.method, MatchMethod::TextContains);
        assert_eq!(found.element.tag, "html");
    }

    #[test]
    fn xpath_references_never_match() {
        assert!(find(&ElementReference::XPath("//button".into())).is_none());
    }

    #[test]
    fn missing_elements_yield_none() {
        assert!(find(&ElementReference::Id("nope".into())).is_none());
        assert!(find(&ElementReference::Class("btn missing".into())).is_none());
        assert!(find(&ElementReference::Text("Nowhere".into())).is_none());
    }
}
