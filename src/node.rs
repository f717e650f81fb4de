//! Game record tree nodes.
//!
//! A record is a forest: each root owns its children in order, and the chain
//! formed by always taking the first child is the main line. Properties keep
//! the order in which they first appeared in the source text.

/// One node of a game record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Property key and its raw values, in order of first appearance.
    pub properties: Vec<(String, Vec<String>)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value of `key`, or `""` if the key is absent or has no values.
    pub fn get(&self, key: &str) -> &str {
        self.values(key)
            .and_then(|v| v.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All values recorded for `key`.
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn has(&self, key: &str) -> bool {
        self.values(key).is_some()
    }

    /// Record `values` under `key`. A key seen again replaces the earlier
    /// values but keeps its original position.
    pub fn set(&mut self, key: String, values: Vec<String>) {
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.properties.push((key, values)),
        }
    }

    /// Nodes following this one along the main line (first child each step).
    /// The node itself is not included.
    pub fn main_line(&self) -> MainLine<'_> {
        MainLine { node: self }
    }
}

/// Iterator over the first-child chain below a node.
pub struct MainLine<'a> {
    node: &'a Node,
}

impl<'a> Iterator for MainLine<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.node.children.first()?;
        self.node = next;
        Some(next)
    }
}
