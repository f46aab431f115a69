//! Serialization of a [`Document`] back to markup text.

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::node::{Document, Element, Node};

const INFALLIBLE: &str = "writing XML to an in-memory buffer cannot fail";

impl Document {
    /// Serialize the document to markup text.
    ///
    /// Output carries a standard XML declaration and two-space
    /// indentation. Attribute and child order is emitted exactly as
    /// stored; childless elements are written self-closed. The result is
    /// structurally faithful to the tree, not byte-identical to whatever
    /// text the tree was parsed from.
    pub fn to_xml(&self) -> String {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .expect(INFALLIBLE);
        write_element(&mut writer, self.root());

        let mut output = String::from_utf8(writer.into_inner()).expect("serialized XML is UTF-8");
        output.push('\n');
        output
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children().is_empty() {
        writer.write_event(Event::Empty(start)).expect(INFALLIBLE);
        return;
    }

    writer.write_event(Event::Start(start)).expect(INFALLIBLE);
    for child in element.children() {
        match child {
            Node::Element(child) => write_element(writer, child),
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .expect(INFALLIBLE),
            Node::CData(data) => writer
                .write_event(Event::CData(BytesCData::new(data.as_str())))
                .expect(INFALLIBLE),
            Node::Comment(comment) => writer
                .write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))
                .expect(INFALLIBLE),
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .expect(INFALLIBLE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_declaration_and_self_closing_elements() {
        let doc = Document::new(Element::new("svg"));
        assert_eq!(doc.to_xml(), "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg/>\n");
    }

    #[test]
    fn preserves_attribute_order() {
        let mut path = Element::new("path");
        path.set_attribute("d", "M0 0h4");
        path.set_attribute("id", "x");
        path.set_attribute("fill", "#ff0000");
        let mut svg = Element::new("svg");
        svg.push_child(Node::Element(path));

        let xml = Document::new(svg).to_xml();
        assert!(xml.contains(r##"<path d="M0 0h4" id="x" fill="#ff0000"/>"##));
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let mut title = Element::new("title");
        title.set_attribute("id", "a&b");
        title.push_child(Node::Text("x < y".to_string()));
        let mut svg = Element::new("svg");
        svg.push_child(Node::Element(title));

        let xml = Document::new(svg).to_xml();
        assert!(xml.contains(r#"id="a&amp;b""#));
        assert!(xml.contains("x &lt; y"));
    }

    #[test]
    fn output_reparses_to_an_equal_tree() {
        let source = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">"#,
            r#"<!-- icon --><g id="base"><path d="M2 2h12v12H2z" stroke="none"/>"#,
            r#"<polygon points="4,4 12,4 8,12"/></g><g/></svg>"#,
        );
        let doc = Document::parse(source).unwrap();
        let round_tripped = Document::parse(&doc.to_xml()).unwrap();
        assert_eq!(doc, round_tripped);
    }
}
