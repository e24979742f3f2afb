//! Hierarchical configuration tree
//!
//! The host configuration is a tree of named nodes. A node carries optional
//! text contents and an ordered list of children; repeated children with the
//! same name are how list-like sections (license keys, watch paths) are
//! declared. Trees are built programmatically or mapped from a parsed
//! `toml::Value` / `serde_json::Value`: tables become children, arrays fan
//! out into repeated siblings under the key's name, scalars become text.

/// A node in the host configuration tree
///
/// Nodes are immutable once the host hands the tree to plugins: the plugin
/// layer only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
    name: String,
    text: Option<String>,
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create an empty node with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set the node's text contents
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child node
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child node in place
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Node name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text contents, if any
    ///
    /// A node without text (a pure container, or a null value in a JSON
    /// source) returns `None`.
    #[must_use]
    pub fn text_contents(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Direct children in document order
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Direct children with the given name, in document order
    pub fn children_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Find the first descendant with the given name, depth-first in
    /// document order
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Self> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// Map a parsed TOML value into a node tree
    ///
    /// Tables become children, arrays become repeated siblings under their
    /// key's name, scalars become text contents.
    #[must_use]
    pub fn from_toml(name: impl Into<String>, value: &toml::Value) -> Self {
        let mut node = Self::new(name);
        node.append_toml(value);
        node
    }

    /// Map a parsed JSON value into a node tree
    ///
    /// Same mapping as [`ConfigNode::from_toml`]; a JSON `null` yields a
    /// node without text contents.
    #[must_use]
    pub fn from_json(name: impl Into<String>, value: &serde_json::Value) -> Self {
        let mut node = Self::new(name);
        node.append_json(value);
        node
    }

    fn append_toml(&mut self, value: &toml::Value) {
        match value {
            toml::Value::Table(table) => {
                for (key, child) in table {
                    push_toml(self, key, child);
                }
            }
            toml::Value::Array(items) => {
                for item in items {
                    self.append_toml(item);
                }
            }
            toml::Value::String(text) => self.text = Some(text.clone()),
            scalar => self.text = Some(scalar.to_string()),
        }
    }

    fn append_json(&mut self, value: &serde_json::Value) {
        match value {
            serde_json::Value::Object(object) => {
                for (key, child) in object {
                    push_json(self, key, child);
                }
            }
            serde_json::Value::Array(items) => {
                for item in items {
                    self.append_json(item);
                }
            }
            serde_json::Value::String(text) => self.text = Some(text.clone()),
            serde_json::Value::Null => {}
            scalar => self.text = Some(scalar.to_string()),
        }
    }
}

// Arrays are flattened into repeated siblings, so `license = ["a", "b"]`
// reads the same as two consecutive `license` nodes.
fn push_toml(parent: &mut ConfigNode, name: &str, value: &toml::Value) {
    if let toml::Value::Array(items) = value {
        for item in items {
            push_toml(parent, name, item);
        }
    } else {
        parent.push_child(ConfigNode::from_toml(name, value));
    }
}

fn push_json(parent: &mut ConfigNode, name: &str, value: &serde_json::Value) {
    if let serde_json::Value::Array(items) = value {
        for item in items {
            push_json(parent, name, item);
        }
    } else {
        parent.push_child(ConfigNode::from_json(name, value));
    }
}
