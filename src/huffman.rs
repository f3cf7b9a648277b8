use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};

pub type CodeTable = HashMap<u8, String>;
pub type FreqTable = HashMap<u8, u64>;

/// Width the weight of a branch label is right-justified to.
const BRANCH_LABEL_WIDTH: usize = 4;

/// A node of the Huffman tree. Branches own both children.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Branch {
        weight: u64,
        /// Creation order among all branches of the tree, starting at 0.
        order: u32,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node::Leaf { symbol, weight }
    }

    /// Joins two subtrees; the weight is always the sum of the children.
    pub fn merge(left: Box<Node>, right: Box<Node>, order: u32) -> Node {
        Node::Branch {
            weight: left.weight() + right.weight(),
            order,
            left,
            right,
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Branch { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Branch { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Branch { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Merge priority: lighter first; on equal weight leaves before branches,
    /// leaves by symbol and branches by creation order.
    pub fn merge_order(&self, other: &Node) -> Ordering {
        self.weight()
            .cmp(&other.weight())
            .then_with(|| match (self, other) {
                (Node::Leaf { symbol: a, .. }, Node::Leaf { symbol: b, .. }) => a.cmp(b),
                (Node::Leaf { .. }, Node::Branch { .. }) => Ordering::Less,
                (Node::Branch { .. }, Node::Leaf { .. }) => Ordering::Greater,
                (Node::Branch { order: a, .. }, Node::Branch { order: b, .. }) => a.cmp(b),
            })
    }
}

/// The label of a single node as it appears in the rendered tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { symbol, weight } if is_printable(*symbol) => {
                write!(f, " ['{}':{}]", *symbol as char, weight)
            }
            Node::Leaf { symbol, weight } => write!(f, " [{}:{}]", symbol, weight),
            Node::Branch { weight, .. } => {
                write!(f, "{:>width$}", weight, width = BRANCH_LABEL_WIDTH)
            }
        }
    }
}

fn is_printable(symbol: u8) -> bool {
    (32..=126).contains(&symbol)
}

struct HeapNode(Box<Node>);

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap pops its greatest element first.
        other.0.merge_order(&self.0)
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapNode {}

/// Builds the tree by repeatedly merging the two lightest nodes.
///
/// The first node taken from the heap becomes the left child and the next one
/// the right child. Because [`Node::merge_order`] is a strict total order the
/// resulting tree does not depend on the iteration order of `frequencies`.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<Box<Node>> {
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut heap: BinaryHeap<HeapNode> = frequencies
        .iter()
        .filter(|&(_, &freq)| freq > 0)
        .map(|(&symbol, &freq)| HeapNode(Box::new(Node::leaf(symbol, freq))))
        .collect();
    debug!("Initial heap size: {}", heap.len());

    let mut order = 0u32;
    loop {
        let Some(HeapNode(left)) = heap.pop() else {
            return Err(Error::EmptyInput);
        };
        let Some(HeapNode(right)) = heap.pop() else {
            debug!("Tree construction complete after {} merges", order);
            return Ok(left);
        };

        trace!(
            "Merge #{}: weights {} + {}",
            order,
            left.weight(),
            right.weight()
        );
        heap.push(HeapNode(Box::new(Node::merge(left, right, order))));
        order += 1;
    }
}

/// Derives the prefix code of every leaf: `0` for a left edge, `1` for a right
/// edge. A tree that is a single leaf gets the one-bit code `0`.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    match root {
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, String::from("0"));
        }
        Node::Branch { .. } => collect_codes(root, String::new(), &mut table),
    }
    table
}

fn collect_codes(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to byte {:#04x}: '{}'", symbol, prefix);
            table.insert(*symbol, prefix);
        }
        Node::Branch { left, right, .. } => {
            collect_codes(left, format!("{}0", prefix), table);
            collect_codes(right, format!("{}1", prefix), table);
        }
    }
}

/// Shannon entropy of the table in bits per symbol.
pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    freq.values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum()
}

/// Frequency-weighted mean length of the codes in `codes`, in bits per symbol.
pub fn average_code_length(freq: &FreqTable, codes: &CodeTable) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }

    let weighted_bits: u64 = freq
        .iter()
        .filter_map(|(symbol, &count)| codes.get(symbol).map(|code| count * code.len() as u64))
        .sum();
    weighted_bits as f64 / total as f64
}
