// ui/text_split.rs
//
// Splits title markup into one animated cell per character.
// The host describes the title's child nodes, the engine decides the cells
// and hands out ids; the host then rebuilds the DOM from the result.

use crate::api::types::{ElementId, ElementIds};

const NBSP: char = '\u{00A0}';

/// A child node of the element being split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode {
    Text(String),
    /// Inline element; its text is split inside it so the wrapper keeps its styling.
    Element(String),
    LineBreak,
}

/// One character cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCell {
    pub id: ElementId,
    pub text: String,
}

/// How the host should rebuild one source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitPart {
    /// Replace the text node at `source` with these cells.
    Text { source: usize, cells: Vec<CharCell> },
    /// Empty the element at `source` and fill it with these cells.
    Wrapped { source: usize, cells: Vec<CharCell> },
    /// Leave the line break at `source` in place.
    Break { source: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitText {
    pub parts: Vec<SplitPart>,
}

impl SplitText {
    /// Cell ids in document order, the order they animate in.
    pub fn ids(&self) -> Vec<ElementId> {
        self.parts
            .iter()
            .flat_map(|part| match part {
                SplitPart::Text { cells, .. } | SplitPart::Wrapped { cells, .. } => cells.as_slice(),
                SplitPart::Break { .. } => &[],
            })
            .map(|cell| cell.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn cells(text: &str, ids: &mut ElementIds) -> Vec<CharCell> {
    text.chars()
        .map(|c| CharCell {
            id: ids.next_id(),
            text: if c == ' ' { NBSP.to_string() } else { c.to_string() },
        })
        .collect()
}

/// Split plain text into cells.
pub fn split_chars(text: &str, ids: &mut ElementIds) -> Vec<CharCell> {
    cells(text, ids)
}

/// Split mixed title content.
///
/// Whitespace-only text nodes are dropped unless they contain a literal
/// space, which still separates words between inline elements.
pub fn split_nodes(nodes: &[SourceNode], ids: &mut ElementIds) -> SplitText {
    let parts = nodes
        .iter()
        .enumerate()
        .filter_map(|(source, node)| match node {
            SourceNode::Text(text) => {
                if text.trim().is_empty() && !text.contains(' ') {
                    return None;
                }
                Some(SplitPart::Text {
                    source,
                    cells: cells(text, ids),
                })
            }
            SourceNode::Element(text) => Some(SplitPart::Wrapped {
                source,
                cells: cells(text, ids),
            }),
            SourceNode::LineBreak => Some(SplitPart::Break { source }),
        })
        .collect();
    SplitText { parts }
}
