//! Prefix codes and the code table built from a Huffman tree.
//!
//! Grounded in `original_source/huffman.go`'s `Code`/`createCodeTable`:
//! walk the tree from the root, appending a `0` bit on every left branch
//! and a `1` bit on every right branch, recording one `Code` per leaf.

use std::collections::HashMap;
use super::node::HuffmanNode;

/// A prefix code: the low `length` bits of `bits` hold the code, MSB-first.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub struct Code {
    pub bits: u64,
    pub length: u8
}

impl Code {
    const ROOT: Code = Code { bits: 0, length: 0 };

    fn push(self, bit: bool) -> Code {
        Code { bits: (self.bits << 1) | bit as u64, length: self.length + 1 }
    }
}

pub type CodeTable = HashMap<u8,Code>;

/// Assign a prefix code to every symbol in the tree. A lone leaf (only one
/// distinct symbol in the whole coding) is assigned the 1-bit code `0`
/// rather than an empty code — spec.md §4.5/§9 require a nonzero-length
/// code even in this edge case.
pub fn build_code_table(root: &HuffmanNode) -> CodeTable {
    let mut table = CodeTable::new();
    match root {
        HuffmanNode::Leaf { symbol, .. } => {
            table.insert(*symbol,Code { bits: 0, length: 1 });
        },
        HuffmanNode::Internal { .. } => walk(root,Code::ROOT,&mut table)
    }
    table
}

fn walk(node: &HuffmanNode, prefix: Code, table: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            table.insert(*symbol,prefix);
        },
        HuffmanNode::Internal { left, right, .. } => {
            walk(left,prefix.push(false),table);
            walk(right,prefix.push(true),table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::tree::build;

    #[test]
    fn single_symbol_gets_one_bit_code() {
        let mut freq = [0u64;256];
        freq[b'a' as usize] = 5;
        let root = build(&freq).unwrap();
        let table = build_code_table(&root);
        assert_eq!(table.len(),1);
        assert_eq!(table[&b'a'],Code { bits: 0, length: 1 });
    }

    #[test]
    fn codes_are_prefix_free() {
        let mut freq = [0u64;256];
        for (i,f) in [(b'a',5u64),(b'b',9),(b'c',12),(b'd',13),(b'e',16),(b'f',45)] {
            freq[i as usize] = f;
        }
        let root = build(&freq).unwrap();
        let table = build_code_table(&root);
        let codes: Vec<Code> = table.values().copied().collect();
        for i in 0..codes.len() {
            for j in 0..codes.len() {
                if i == j { continue; }
                assert!(!is_prefix(&codes[i],&codes[j]),"{:?} is a prefix of {:?}",codes[i],codes[j]);
            }
        }
    }

    fn is_prefix(a: &Code, b: &Code) -> bool {
        if a.length >= b.length {
            return false;
        }
        let shift = b.length - a.length;
        (b.bits >> shift) == a.bits
    }
}
