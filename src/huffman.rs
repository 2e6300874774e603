//! Huffman coding implementation
//!
//! Classic greedy minimum-weighted-path-length construction over a byte
//! alphabet. Nodes live in an arena indexed by [`NodeId`] handles, so the tree
//! is a flat `Vec` rather than a web of boxed pointers, and code derivation
//! walks it with an explicit stack instead of recursion.
//!
//! Construction is fully deterministic: leaves are inserted in ascending
//! symbol order and ties on weight break on insertion sequence. Two trees
//! built from the same frequency table therefore always assign the same code
//! to every leaf, which is what lets the decoder rebuild the code assignment
//! from the serialized table alone.

use crate::error::{HuffzipError, Result};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

/// Handle to a node in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
enum NodeKind {
    Leaf { symbol: u8 },
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone)]
struct Node {
    weight: u64,
    kind: NodeKind,
}

/// Min-heap entry: weight first, insertion sequence as deterministic tiebreak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    weight: u64,
    seq: u32,
    id: NodeId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Count byte occurrences in ascending symbol order
///
/// Symbols absent from the input never appear in the table. Fails with
/// [`HuffzipError::NotSupported`] if any single symbol occurs more often than
/// the container's 32-bit frequency field can record.
pub fn count_frequencies(data: &[u8]) -> Result<BTreeMap<u8, u32>> {
    let mut counts = [0u64; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    let mut frequencies = BTreeMap::new();
    for (symbol, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let count = u32::try_from(count).map_err(|_| {
            HuffzipError::not_supported(format!(
                "symbol 0x{symbol:02x} occurs {count} times, beyond the 32-bit frequency limit"
            ))
        })?;
        frequencies.insert(symbol as u8, count);
    }
    Ok(frequencies)
}

/// Huffman tree for encoding and decoding
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    codes: HashMap<u8, Vec<bool>>,
    max_code_length: usize,
}

impl HuffmanTree {
    /// Build a Huffman tree from symbol frequencies
    ///
    /// An empty table yields a tree with no root and no codes; callers must
    /// not feed such a tree to the encoder. Over any non-empty table the
    /// construction is total.
    pub fn from_frequencies(frequencies: &BTreeMap<u8, u32>) -> Result<Self> {
        let mut nodes = Vec::with_capacity(frequencies.len().saturating_mul(2));
        let mut heap = BinaryHeap::with_capacity(frequencies.len());

        // Ascending symbol order fixes the insertion sequence, and with it
        // the tiebreak, on both the compress and decompress side.
        for (&symbol, &frequency) in frequencies {
            let id = NodeId(nodes.len() as u32);
            nodes.push(Node {
                weight: frequency as u64,
                kind: NodeKind::Leaf { symbol },
            });
            heap.push(Reverse(HeapEntry {
                weight: frequency as u64,
                seq: id.0,
                id,
            }));
        }

        if heap.is_empty() {
            return Ok(Self {
                nodes,
                root: None,
                codes: HashMap::new(),
                max_code_length: 0,
            });
        }

        // Single-symbol alphabet: the root is itself a leaf. The traversal
        // below would assign it a zero-length code, which cannot be
        // distinguished on decode, so it gets the fixed one-bit code 0.
        if heap.len() == 1 {
            let entry = heap.pop().unwrap().0;
            let mut codes = HashMap::new();
            if let NodeKind::Leaf { symbol } = nodes[entry.id.index()].kind {
                codes.insert(symbol, vec![false]);
            }
            return Ok(Self {
                nodes,
                root: Some(entry.id),
                codes,
                max_code_length: 1,
            });
        }

        let mut seq = nodes.len() as u32;
        while heap.len() > 1 {
            let left = heap.pop().unwrap().0;
            let right = heap.pop().unwrap().0;

            let id = NodeId(nodes.len() as u32);
            let weight = left.weight + right.weight;
            nodes.push(Node {
                weight,
                kind: NodeKind::Internal {
                    left: left.id,
                    right: right.id,
                },
            });
            heap.push(Reverse(HeapEntry { weight, seq, id }));
            seq += 1;
        }

        let root = heap.pop().unwrap().0.id;

        // Derive codes with an explicit stack: 0 for a left edge, 1 for a
        // right edge. A 256-symbol alphabet can still produce a deeply
        // skewed tree, so no recursion.
        let mut codes = HashMap::new();
        let mut max_code_length = 0;
        let mut stack = vec![(root, Vec::new())];
        while let Some((id, code)) = stack.pop() {
            match &nodes[id.index()].kind {
                NodeKind::Leaf { symbol } => {
                    max_code_length = max_code_length.max(code.len());
                    codes.insert(*symbol, code);
                }
                NodeKind::Internal { left, right } => {
                    let mut left_code = code.clone();
                    left_code.push(false);
                    let mut right_code = code;
                    right_code.push(true);
                    stack.push((*right, right_code));
                    stack.push((*left, left_code));
                }
            }
        }

        Ok(Self {
            nodes,
            root: Some(root),
            codes,
            max_code_length,
        })
    }

    /// Build a Huffman tree directly from data
    pub fn from_data(data: &[u8]) -> Result<Self> {
        let frequencies = count_frequencies(data)?;
        Self::from_frequencies(&frequencies)
    }

    /// Get the code for a symbol
    pub fn get_code(&self, symbol: u8) -> Option<&Vec<bool>> {
        self.codes.get(&symbol)
    }

    /// Get maximum code length in bits
    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }

    /// Number of distinct symbols in the tree
    pub fn symbol_count(&self) -> usize {
        self.codes.len()
    }

    /// Whether the tree was built from an empty table
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Estimate the payload compression ratio for `data` (output/input)
    pub fn estimate_compression_ratio(&self, data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        let mut total_bits = 0;
        for &symbol in data {
            if let Some(code) = self.get_code(symbol) {
                total_bits += code.len();
            }
        }
        let compressed_bytes = (total_bits + 7) / 8;
        compressed_bytes as f64 / data.len() as f64
    }

    /// Create a bit-by-bit decoder over this tree, or `None` if it is empty
    pub fn walker(&self) -> Option<TreeWalker<'_>> {
        self.root.map(|root| TreeWalker {
            tree: self,
            root,
            current: root,
        })
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

/// Bit-by-bit decoding walk over a [`HuffmanTree`]
///
/// Feed one bit at a time; whenever a leaf is reached its symbol is emitted
/// and the walk resets to the root.
#[derive(Debug)]
pub struct TreeWalker<'a> {
    tree: &'a HuffmanTree,
    root: NodeId,
    current: NodeId,
}

impl TreeWalker<'_> {
    /// Consume one bit, returning a decoded symbol if it completes a code
    pub fn step(&mut self, bit: bool) -> Option<u8> {
        let next = match self.tree.node(self.current).kind {
            // Root-is-leaf tree: every symbol was encoded as one bit, so
            // each consumed bit emits the symbol directly.
            NodeKind::Leaf { symbol } => return Some(symbol),
            NodeKind::Internal { left, right } => {
                if bit {
                    right
                } else {
                    left
                }
            }
        };

        match self.tree.node(next).kind {
            NodeKind::Leaf { symbol } => {
                self.current = self.root;
                Some(symbol)
            }
            NodeKind::Internal { .. } => {
                self.current = next;
                None
            }
        }
    }

    /// Whether the walk currently sits at the root (no partial code pending)
    pub fn at_root(&self) -> bool {
        self.current == self.root
    }
}
