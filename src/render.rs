//! ASCII rendering of a Huffman tree.
//!
//! A branch prints its weight followed by ` -+- `, then its right subtree on
//! the same line, a connector line, and its left subtree below:
//!
//! ```text
//!    5 -+-  ['B':3]
//!       |
//!       `-  ['A':2]
//! ```
//!
//! The left margin of every line is built from [`Indent`] tokens collected on
//! the way down from the root. Each pending subtree carries its own copy of
//! that path, so siblings never see each other's tokens.

use std::io::Write;
use std::iter::FusedIterator;

use log::debug;

use crate::error::{Error, Result};
use crate::huffman::Node;

const BRANCH_SEPARATOR: &str = " -+- ";

/// One unit of the left margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    SingleSpace,
    /// Only ever the first token of a path, pushed by the root branch.
    SixSpaces,
    EightSpaces,
    VerticalBar,
    DownRight,
}

impl Indent {
    pub fn as_str(self) -> &'static str {
        match self {
            Indent::SingleSpace => " ",
            Indent::SixSpaces => "      ",
            Indent::EightSpaces => "        ",
            Indent::VerticalBar => "|",
            Indent::DownRight => "`- ",
        }
    }
}

fn margin(path: &[Indent], last: Indent) -> String {
    path.iter()
        .chain(Some(&last))
        .map(|indent| indent.as_str())
        .collect()
}

fn extended(path: &[Indent], last: Indent) -> Vec<Indent> {
    let mut path = path.to_vec();
    path.push(last);
    path
}

enum Step<'a> {
    Visit(&'a Node, Vec<Indent>),
    Emit(String),
}

/// Lazy sequence of text fragments that together form the rendered tree.
///
/// Produced by [`render`]. Fragments are yielded in output order; lines end
/// with `\n` on every platform.
pub struct Rendering<'a> {
    stack: Vec<Step<'a>>,
}

impl<'a> Iterator for Rendering<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (node, mut path) = match self.stack.pop()? {
            Step::Emit(text) => return Some(text),
            Step::Visit(node, path) => (node, path),
        };

        match node {
            Node::Leaf { .. } => Some(format!("{}\n", node)),
            Node::Branch { left, right, .. } => {
                path.push(if path.is_empty() {
                    Indent::SixSpaces
                } else {
                    Indent::EightSpaces
                });

                // Pushed in reverse: the right subtree is rendered first.
                self.stack.push(Step::Visit(
                    left.as_ref(),
                    extended(&path, Indent::SingleSpace),
                ));
                self.stack.push(Step::Emit(margin(&path, Indent::DownRight)));
                self.stack
                    .push(Step::Emit(margin(&path, Indent::VerticalBar) + "\n"));
                path.push(Indent::VerticalBar);
                self.stack.push(Step::Visit(right.as_ref(), path));

                Some(format!("{}{}", node, BRANCH_SEPARATOR))
            }
        }
    }
}

impl FusedIterator for Rendering<'_> {}

/// Starts rendering the tree rooted at `root`.
pub fn render(root: &Node) -> Rendering<'_> {
    Rendering {
        stack: vec![Step::Visit(root, Vec::new())],
    }
}

pub fn render_to_string(root: &Node) -> String {
    render(root).collect()
}

/// Streams the rendering of `root` into `sink` and flushes it.
///
/// The first failing write aborts the rendering; whatever was written before
/// it stays written.
pub fn write_tree<W: Write>(root: &Node, mut sink: W) -> Result<()> {
    let mut written = 0usize;
    for fragment in render(root) {
        sink.write_all(fragment.as_bytes())
            .map_err(Error::SinkWriteFailure)?;
        written += fragment.len();
    }
    sink.flush().map_err(Error::SinkWriteFailure)?;

    debug!("Rendered tree: {} bytes", written);
    Ok(())
}
