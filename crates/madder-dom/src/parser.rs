//! Event-driven parser building a [`Document`] from markup text.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ParseError;
use crate::node::{Document, Element, Node};

pub(crate) fn parse_document(text: &str) -> Result<Document, ParseError> {
    let mut reader = Reader::from_str(text);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(syntax)?;
        match event {
            Event::Start(start) => {
                open.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                attach(&mut open, &mut root, Node::Element(element))?;
            }
            Event::End(end) => {
                let name = decode(end.name().as_ref());
                let element = open.pop().ok_or_else(|| ParseError::UnexpectedClose(name.clone()))?;
                if element.name() != name {
                    return Err(ParseError::UnexpectedClose(name));
                }
                attach(&mut open, &mut root, Node::Element(element))?;
            }
            Event::Text(content) => {
                let value = content.unescape().map_err(syntax)?;
                // Whitespace runs between elements carry no content.
                if !value.trim().is_empty() {
                    attach(&mut open, &mut root, Node::Text(value.into_owned()))?;
                }
            }
            Event::CData(data) => {
                attach(&mut open, &mut root, Node::CData(decode(&data)))?;
            }
            Event::Comment(comment) => {
                attach(&mut open, &mut root, Node::Comment(decode(&comment)))?;
            }
            Event::Eof => break,
            // Declarations, doctypes, and processing instructions are not
            // retained; serialization emits its own declaration.
            _ => {}
        }
    }

    if let Some(element) = open.pop() {
        return Err(ParseError::Unclosed(element.name().to_string()));
    }
    root.map(Document::new).ok_or(ParseError::NoRoot)
}

/// Hand a completed node to the innermost open element, or install it as
/// the document root when nothing is open.
fn attach(open: &mut [Element], root: &mut Option<Element>, node: Node) -> Result<(), ParseError> {
    if let Some(parent) = open.last_mut() {
        parent.push_child(node);
        return Ok(());
    }
    match node {
        Node::Element(element) => {
            if root.is_some() {
                return Err(ParseError::MultipleRoots);
            }
            *root = Some(element);
            Ok(())
        }
        // Prolog text and comments outside the root are dropped.
        _ => Ok(()),
    }
}

fn element_from_start(start: &BytesStart) -> Result<Element, ParseError> {
    let mut element = Element::new(decode(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(syntax)?;
        let name = decode(attribute.key.as_ref());
        let value = attribute.unescape_value().map_err(syntax)?;
        element.set_attribute(&name, &value);
    }
    Ok(element)
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn syntax(err: impl std::fmt::Display) -> ParseError {
    ParseError::Syntax(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_in_order() {
        let doc = Document::parse(
            r#"<svg width="16"><g><path d="M0 0"/><polygon points="0,0 1,1"/></g><g/></svg>"#,
        )
        .expect("well-formed input should parse");

        let root = doc.root();
        assert_eq!(root.name(), "svg");
        assert_eq!(root.attribute("width"), Some("16"));

        let groups: Vec<_> = root.child_elements("g").collect();
        assert_eq!(groups.len(), 2);

        let first = groups[0];
        assert_eq!(first.children().len(), 2);
        assert_eq!(first.children()[0].as_element().unwrap().name(), "path");
        assert_eq!(first.children()[1].as_element().unwrap().name(), "polygon");
        assert!(groups[1].children().is_empty());
    }

    #[test]
    fn decodes_entities_in_attributes_and_text() {
        let doc = Document::parse(r#"<svg><title id="a&amp;b">x &lt; y</title></svg>"#).unwrap();
        let title = doc.root().child_elements("title").next().unwrap();
        assert_eq!(title.attribute("id"), Some("a&b"));
        assert_eq!(title.children(), &[Node::Text("x < y".to_string())]);
    }

    #[test]
    fn keeps_comments_and_cdata() {
        let doc = Document::parse("<svg><!-- keep me --><script><![CDATA[1 < 2]]></script></svg>")
            .unwrap();
        assert_eq!(doc.root().children()[0], Node::Comment(" keep me ".to_string()));
        let script = doc.root().child_elements("script").next().unwrap();
        assert_eq!(script.children(), &[Node::CData("1 < 2".to_string())]);
    }

    #[test]
    fn skips_declaration_and_whitespace() {
        let doc = Document::parse("<?xml version=\"1.0\"?>\n<svg>\n  <g/>\n</svg>\n").unwrap();
        assert_eq!(doc.root().children().len(), 1);
    }

    #[test]
    fn rejects_mismatched_tags() {
        let err = Document::parse("<svg><g></svg></g>").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax(_) | ParseError::UnexpectedClose(_)
        ));
    }

    #[test]
    fn rejects_unclosed_elements() {
        let err = Document::parse("<svg><g>").unwrap_err();
        assert!(matches!(err, ParseError::Unclosed(_) | ParseError::Syntax(_)));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(Document::parse(""), Err(ParseError::NoRoot)));
        assert!(matches!(Document::parse("   \n"), Err(ParseError::NoRoot)));
    }

    #[test]
    fn rejects_multiple_roots() {
        let err = Document::parse("<svg/><svg/>").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MultipleRoots | ParseError::Syntax(_)
        ));
    }
}
