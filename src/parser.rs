//! Tolerant single-pass parser for game records.
//!
//! The input is a forest of parenthesized blocks, each holding a sequence of
//! `;`-separated nodes with `KEY[value][value]...` properties. Parsing never
//! backtracks and never rejects malformed text: unknown characters are
//! skipped, an unterminated value runs to the end of input, and unbalanced
//! parentheses are simply left open. The only failure is input that is empty
//! after trimming.
//!
//! Nodes are first collected in an arena indexed by creation order and then
//! assembled into owned trees. A child is always created after its parent, so
//! assembling from the highest index down finishes every child before the
//! parent that takes it.

use thiserror::Error;
use tracing::debug;

use crate::node::Node;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty sgf content")]
    EmptyInput,
}

/// Parse `content` into its root nodes, in order of appearance.
pub fn parse(content: &str) -> Result<Vec<Node>, ParseError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let roots = Parser::new(content).run();
    debug!(roots = roots.len(), bytes = content.len(), "parsed game record");
    Ok(roots)
}

#[derive(Default)]
struct ArenaNode {
    node: Node,
    children: Vec<usize>,
}

/// Per-call parser state.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
    arena: Vec<ArenaNode>,
    roots: Vec<usize>,
    /// Nodes to return to when the matching `)` is reached.
    stack: Vec<usize>,
    current: Option<usize>,
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            arena: Vec::new(),
            roots: Vec::new(),
            stack: Vec::new(),
            current: None,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    fn run(mut self) -> Vec<Node> {
        while let Some(b) = self.peek() {
            match b {
                b'(' => {
                    if let Some(current) = self.current {
                        self.stack.push(current);
                    }
                    self.pos += 1;
                }
                b')' => {
                    // An empty stack closes a root-level block so a following
                    // block starts a new root.
                    self.current = self.stack.pop();
                    self.pos += 1;
                }
                b';' => {
                    self.pos += 1;
                    self.start_node();
                    self.parse_properties();
                }
                _ => self.pos += 1,
            }
        }
        if !self.stack.is_empty() {
            debug!(open = self.stack.len(), "unclosed blocks at end of input");
        }
        self.assemble()
    }

    fn start_node(&mut self) {
        let idx = self.arena.len();
        self.arena.push(ArenaNode::default());
        match self.current {
            Some(parent) => self.arena[parent].children.push(idx),
            None => self.roots.push(idx),
        }
        self.current = Some(idx);
    }

    /// Read properties into the current node until the next structural
    /// character or end of input.
    fn parse_properties(&mut self) {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(b';' | b'(' | b')') => return,
                _ => {}
            }

            let start = self.pos;
            while self.peek().is_some_and(|b| b.is_ascii_uppercase()) {
                self.pos += 1;
            }
            let key = &self.src[start..self.pos];

            let mut values = Vec::new();
            loop {
                self.skip_whitespace();
                if self.peek() != Some(b'[') {
                    break;
                }
                values.push(self.parse_value());
            }

            if !key.is_empty() {
                if let Some(current) = self.current {
                    self.arena[current].node.set(key.to_string(), values);
                }
            } else if values.is_empty() {
                // Neither a key nor a value: step over the stray character.
                self.pos += self.src[self.pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    /// Read one bracketed value starting at `[`, honoring `\` escapes.
    fn parse_value(&mut self) -> String {
        self.pos += 1;
        let start = self.pos;
        let mut escaped = false;
        while let Some(b) = self.peek() {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b']' {
                break;
            }
            self.pos += 1;
        }
        let raw = &self.src[start..self.pos];
        if self.peek() == Some(b']') {
            self.pos += 1;
        }
        unescape(raw)
    }

    fn assemble(self) -> Vec<Node> {
        let mut built: Vec<Option<Node>> = Vec::with_capacity(self.arena.len());
        built.resize_with(self.arena.len(), || None);
        for (idx, entry) in self.arena.into_iter().enumerate().rev() {
            let mut node = entry.node;
            node.children = entry
                .children
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[idx] = Some(node);
        }
        self.roots
            .iter()
            .filter_map(|&root| built[root].take())
            .collect()
    }
}

/// Decode `\]` to `]` and `\\` to `\`. Other backslashes are kept as-is.
fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next @ (']' | '\\')) = chars.peek() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}
