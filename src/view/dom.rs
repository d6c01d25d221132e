//! Minimal document model for mounting widgets.
//!
//! A widget takes its input element out of the document and leaves a mount
//! point in its place; unmounting puts the element back in the same slot.

use crate::error_handling::WidgetError;

/// A text input the widget wraps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputElement {
    pub id: String,
    pub value: String,
    pub placeholder: Option<String>,
    /// Browser `autocomplete` attribute
    pub autocomplete: Option<String>,
}

impl InputElement {
    pub fn new(id: &str) -> Self {
        InputElement {
            id: id.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Input(InputElement),
    /// Any other element, identified by id and tag name
    Element { id: String, tag: String },
    /// Slot held by a mounted widget for the input with this id
    Mount { input_id: String },
}

impl Node {
    fn id(&self) -> &str {
        match self {
            Node::Input(input) => &input.id,
            Node::Element { id, .. } => id,
            Node::Mount { input_id } => input_id,
        }
    }
}

/// Flat, ordered list of top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Position of the node with `id`, mounted or not.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }

    pub fn input(&self, id: &str) -> Option<&InputElement> {
        self.nodes.iter().find_map(|n| match n {
            Node::Input(input) if input.id == id => Some(input),
            _ => None,
        })
    }

    /// Takes the input selected by `#id` out of the document, leaving a mount point.
    ///
    /// # Errors
    ///
    /// - `InvalidSelector` if `selector` is not `#id`
    /// - `ElementNotFound` if no node has that id
    /// - `NotAnInput` if the node is not an input
    /// - `AlreadyMounted` if another widget holds the input
    pub fn mount(&mut self, selector: &str) -> Result<InputElement, WidgetError> {
        let id = parse_id_selector(selector)?;
        let index = self
            .position(id)
            .ok_or_else(|| WidgetError::ElementNotFound(selector.to_string()))?;

        match &self.nodes[index] {
            Node::Input(_) => {}
            Node::Element { .. } => return Err(WidgetError::NotAnInput(selector.to_string())),
            Node::Mount { .. } => return Err(WidgetError::AlreadyMounted(selector.to_string())),
        }

        let mount = Node::Mount {
            input_id: id.to_string(),
        };
        match std::mem::replace(&mut self.nodes[index], mount) {
            Node::Input(input) => Ok(input),
            other => {
                self.nodes[index] = other;
                Err(WidgetError::NotAnInput(selector.to_string()))
            }
        }
    }

    /// Puts `input` back at its mount point.
    ///
    /// # Errors
    ///
    /// Returns `MountPointMissing` if the document no longer holds the slot.
    pub fn unmount(&mut self, input: InputElement) -> Result<(), WidgetError> {
        let index = self
            .nodes
            .iter()
            .position(|n| matches!(n, Node::Mount { input_id } if *input_id == input.id))
            .ok_or_else(|| WidgetError::MountPointMissing(input.id.clone()))?;
        self.nodes[index] = Node::Input(input);
        Ok(())
    }
}

fn parse_id_selector(selector: &str) -> Result<&str, WidgetError> {
    match selector.trim().strip_prefix('#') {
        Some(id)
            if !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
        {
            Ok(id)
        }
        _ => Err(WidgetError::InvalidSelector(selector.to_string())),
    }
}
