//! HTML loader.
//!
//! Parses markup with html5ever into an `RcDom` and converts it into the
//! arena. Whitespace-only text is kept: the indexer needs it to tell
//! abutting elements from separated ones.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::document::{Document, NodeId};

impl Document {
    /// Parse an HTML document. html5ever recovers from any malformed input,
    /// so parsing cannot fail.
    pub fn parse_html(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut document = Document::new();
        let root = document.root();
        convert_children(&dom.document, &mut document, root);

        tracing::debug!(nodes = document.len(), "parsed html document");
        document
    }
}

fn convert_children(handle: &Handle, document: &mut Document, parent: NodeId) {
    for child in handle.children.borrow().iter() {
        convert_node(child, document, parent);
    }
}

fn convert_node(handle: &Handle, document: &mut Document, parent: NodeId) {
    match &handle.data {
        RcNodeData::Document => convert_children(handle, document, parent),
        RcNodeData::Doctype { name, .. } => {
            let id = document.create_doctype(name);
            document.append_child(parent, id);
        }
        RcNodeData::Text { contents } => {
            let text = contents.borrow();
            if !text.is_empty() {
                document.append_text(parent, &text);
            }
        }
        RcNodeData::Comment { contents } => {
            let id = document.create_comment(contents);
            document.append_child(parent, id);
        }
        RcNodeData::Element { name, attrs, .. } => {
            let attributes: Vec<(String, String)> = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            let id = document.append_element(parent, &name.local, attributes);
            convert_children(handle, document, id);
        }
        RcNodeData::ProcessingInstruction { .. } => {}
    }
}
