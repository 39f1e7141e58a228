//! Block extraction from a month calendar page
//!
//! Releases are not wrapped in any per-record element. A date's records are
//! whatever text follows its bold marker up to the next stop node, with
//! `<br>` separating one record from the next.

use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::consts::{END_OF_MONTH, TBA_MARKER};
use crate::core::types::RawBlock;

/// Where the walk after a date marker ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopRule {
    /// Any following bold element (the next date marker)
    NextMarker,
    /// The bold "TBA" heading or the next `<div>`, whichever the walk meets
    /// first. Other bold elements are walked over.
    EndOfMonth,
}

impl StopRule {
    /// The last day of a month has no following date marker on its page.
    pub(crate) fn for_anchor(anchor: &str) -> Self {
        if is_end_of_month(anchor) {
            StopRule::EndOfMonth
        } else {
            StopRule::NextMarker
        }
    }

    pub(crate) fn matches(self, node: NodeRef<'_, Node>) -> bool {
        match self {
            StopRule::NextMarker => is_element(node, "b"),
            StopRule::EndOfMonth => is_element(node, "div") || is_bold_with_text(node, TBA_MARKER),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            StopRule::NextMarker => "next marker",
            StopRule::EndOfMonth => "TBA marker or divider",
        }
    }
}

pub(crate) fn is_end_of_month(anchor: &str) -> bool {
    END_OF_MONTH.contains(&anchor)
}

/// Pre-order walk over every node after a starting point, in the order the
/// nodes appear in the source. Finite: ends after the last node.
#[derive(Clone)]
pub(crate) struct ForwardWalk<'a> {
    next: Option<NodeRef<'a, Node>>,
}

impl<'a> ForwardWalk<'a> {
    pub(crate) fn starting_at(start: Option<NodeRef<'a, Node>>) -> Self {
        ForwardWalk { next: start }
    }
}

impl<'a> Iterator for ForwardWalk<'a> {
    type Item = NodeRef<'a, Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = successor(current);
        Some(current)
    }
}

fn successor(node: NodeRef<'_, Node>) -> Option<NodeRef<'_, Node>> {
    if let Some(child) = node.first_child() {
        return Some(child);
    }
    let mut cursor = Some(node);
    while let Some(current) = cursor {
        if let Some(sibling) = current.next_sibling() {
            return Some(sibling);
        }
        cursor = current.parent();
    }
    None
}

fn is_element(node: NodeRef<'_, Node>, name: &str) -> bool {
    node.value()
        .as_element()
        .is_some_and(|element| element.name() == name)
}

fn node_text(node: NodeRef<'_, Node>) -> String {
    node.descendants()
        .filter_map(|n| n.value().as_text().map(|text| &**text))
        .collect()
}

fn is_bold_with_text(node: NodeRef<'_, Node>, text: &str) -> bool {
    is_element(node, "b") && node_text(node).trim() == text
}

fn find_marker<'a>(document: &'a Html, text: &str) -> Option<NodeRef<'a, Node>> {
    document
        .tree
        .root()
        .descendants()
        .find(|node| is_bold_with_text(*node, text))
}

/// Collect the text following `anchor`'s bold marker until `stop` matches.
/// A missing marker yields an empty block.
pub(crate) fn extract_block(document: &Html, anchor: &str, stop: StopRule) -> RawBlock {
    let mut block = RawBlock::new(anchor);
    let Some(marker) = find_marker(document, anchor) else {
        return block;
    };

    let walk = ForwardWalk::starting_at(marker.next_sibling());
    for node in walk.take_while(|n| !stop.matches(*n)) {
        match node.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    block.push_text(trimmed);
                }
            }
            Node::Element(element) if element.name() == "br" => block.push_break(),
            _ => {}
        }
    }

    block
}
