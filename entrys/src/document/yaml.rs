//! YAML documents via the `yaml-rust2` event parser.

use std::collections::HashMap;

use yaml_rust2::parser::{Event, EventReceiver, Parser};
use yaml_rust2::scanner::TScalarStyle;

use super::{DocumentLoader, DocumentNode, Mapping};
use crate::error::{EntryError, Result};

/// Parses YAML text.
///
/// Scalars keep the text written in the document: `1.10`, `0x1F` and `+12`
/// are never reinterpreted as numbers. Plain `~`, `null` and empty values
/// are [`DocumentNode::Null`]. Block scalars keep their YAML semantics:
/// literal (`|`) blocks preserve embedded newlines and folded (`>`) blocks
/// join lines. Tags are dropped and the tagged value is kept. Only the first
/// document of a stream is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YamlLoader;

impl DocumentLoader for YamlLoader {
    fn parse(&self, text: &str) -> Result<DocumentNode> {
        let mut builder = TreeBuilder::default();
        Parser::new(text.chars()).load(&mut builder, false)?;
        log::trace!("parsed YAML document ({} bytes)", text.len());
        builder.finish()
    }
}

enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<DocumentNode>,
    },
    Mapping {
        anchor: usize,
        entries: Mapping,
        key: Option<String>,
    },
}

/// Assembles parser events into a [`DocumentNode`] tree.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, DocumentNode>,
    root: Option<DocumentNode>,
    error: Option<EntryError>,
}

impl TreeBuilder {
    fn finish(self) -> Result<DocumentNode> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.root.unwrap_or(DocumentNode::Null)),
        }
    }

    fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Scalar(text, style, anchor, tag) => {
                let explicit_string = tag.is_some_and(|tag| tag.suffix == "str");
                self.push(scalar_node(text, style, explicit_string), anchor)
            }
            Event::Alias(anchor) => {
                let node = self.anchors.get(&anchor).cloned().ok_or_else(|| {
                    EntryError::malformed(format!("unknown YAML alias (anchor id {anchor})"))
                })?;
                self.push(node, 0)
            }
            Event::SequenceStart(anchor, _) => {
                self.stack.push(Frame::Sequence {
                    anchor,
                    items: Vec::new(),
                });
                Ok(())
            }
            Event::MappingStart(anchor, _) => {
                self.stack.push(Frame::Mapping {
                    anchor,
                    entries: Mapping::new(),
                    key: None,
                });
                Ok(())
            }
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence { anchor, items }) => {
                    self.push(DocumentNode::Sequence(items), anchor)
                }
                Some(Frame::Mapping { anchor, entries, .. }) => {
                    self.push(DocumentNode::Mapping(entries), anchor)
                }
                None => Err(EntryError::malformed("unbalanced YAML collection end")),
            },
            _ => Ok(()),
        }
    }

    fn push(&mut self, node: DocumentNode, anchor: usize) -> Result<()> {
        if anchor != 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.stack.last_mut() {
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { entries, key, .. }) => match key.take() {
                None => *key = Some(key_text(node)?),
                Some(name) => {
                    if entries.get(&name).is_some() {
                        return Err(EntryError::malformed(format!(
                            "duplicate YAML mapping key '{name}'"
                        )));
                    }
                    entries.insert(name, node);
                }
            },
        }
        Ok(())
    }
}

impl EventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.handle(event) {
            self.error = Some(err);
        }
    }
}

fn scalar_node(text: String, style: TScalarStyle, explicit_string: bool) -> DocumentNode {
    let null_text = matches!(text.as_str(), "" | "~" | "null" | "Null" | "NULL");
    if matches!(style, TScalarStyle::Plain) && null_text && !explicit_string {
        DocumentNode::Null
    } else {
        DocumentNode::Scalar(text)
    }
}

fn key_text(node: DocumentNode) -> Result<String> {
    match node {
        DocumentNode::Null => Ok("null".to_string()),
        DocumentNode::Scalar(text) => Ok(text),
        other => Err(EntryError::malformed(format!(
            "unsupported YAML mapping key: {}",
            other.kind()
        ))),
    }
}
