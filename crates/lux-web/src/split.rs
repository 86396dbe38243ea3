use lux_engine::ui::{split_nodes, CharCell, SourceNode, SplitPart};
use lux_engine::{ElementId, ElementIds};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use crate::dom::Elements;

const TEXT_NODE: u16 = 3;
const ELEMENT_NODE: u16 = 1;

fn cell_span(document: &Document, cell: &CharCell) -> Result<HtmlElement, JsValue> {
    let span = document.create_element("span")?.dyn_into::<HtmlElement>()?;
    span.set_text_content(Some(&cell.text));
    span.style().set_property("display", "inline-block")?;
    Ok(span)
}

/// Split a title element into per-character spans in place. The spans are
/// registered in `elements`; their ids are returned in animation order.
pub fn split_title(
    document: &Document,
    title: &Element,
    ids: &mut ElementIds,
    elements: &mut Elements,
) -> Result<Vec<ElementId>, JsValue> {
    let children = title.child_nodes();
    let nodes: Vec<Node> = (0..children.length()).filter_map(|i| children.item(i)).collect();

    let sources: Vec<SourceNode> = nodes
        .iter()
        .map(|node| match node.node_type() {
            TEXT_NODE => SourceNode::Text(node.text_content().unwrap_or_default()),
            ELEMENT_NODE => match node.dyn_ref::<HtmlElement>() {
                Some(el) if el.tag_name().eq_ignore_ascii_case("br") => SourceNode::LineBreak,
                Some(el) => SourceNode::Element(el.inner_text()),
                None => SourceNode::Element(node.text_content().unwrap_or_default()),
            },
            // Comments and the like carry no visible text.
            _ => SourceNode::Text(String::new()),
        })
        .collect();

    let split = split_nodes(&sources, ids);
    for part in &split.parts {
        match part {
            SplitPart::Text { source, cells } => {
                let node = &nodes[*source];
                for cell in cells {
                    let span = cell_span(document, cell)?;
                    title.insert_before(&span, Some(node))?;
                    elements.insert(cell.id, span);
                }
                title.remove_child(node)?;
            }
            SplitPart::Wrapped { source, cells } => {
                let node = &nodes[*source];
                node.set_text_content(None);
                for cell in cells {
                    let span = cell_span(document, cell)?;
                    node.append_child(&span)?;
                    elements.insert(cell.id, span);
                }
            }
            SplitPart::Break { .. } => {}
        }
    }
    Ok(split.ids())
}
