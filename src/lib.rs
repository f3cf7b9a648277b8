//! Builds a deterministic Huffman tree from byte frequencies and draws it as
//! ASCII art.
//!
//! ```
//! use huffman_tree::{build_huffman_tree, count_frequencies, render_to_string};
//!
//! let freq = count_frequencies(&b"AABBB"[..])?;
//! let root = build_huffman_tree(&freq)?;
//! assert_eq!(
//!     render_to_string(&root),
//!     "   5 -+-  ['B':3]\n      |\n      `-  ['A':2]\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod frequency;
pub mod huffman;
pub mod render;

pub use error::{Error, Result};
pub use frequency::{count_file_frequencies, count_frequencies};
pub use huffman::{
    CodeTable, FreqTable, Node, average_code_length, build_code_table, build_huffman_tree,
    entropy_from_freq,
};
pub use render::{Indent, Rendering, render, render_to_string, write_tree};
