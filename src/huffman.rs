use std::collections::HashMap;
use std::fmt;

use crate::bitreader::BitReader;
use crate::{Error, Result};

// Index tables are laid out for 13-bit lookups
pub const INDEX_TABLE_BITS: usize = 13;

// The index tables leave the escape codeword out, it decodes to 0
const ESCAPE_CODE: u32 = 0b0000011;
const ESCAPE_CODE_SIZE: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Codeword {
    pub code: u32,
    pub size: usize,
}

#[derive(Clone, Copy, Default)]
struct Node {
    children: [Option<usize>; 2],
    value: Option<u16>,
}

impl Node {
    fn is_branch(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

/// MSB-first prefix code trie.
#[derive(Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    max_code_size: usize,
    codewords: HashMap<u16, Codeword>,
}

impl HuffmanTree {
    pub fn new(max_code_size: usize) -> Self {
        Self {
            nodes: vec![Node::default()],
            max_code_size,
            codewords: HashMap::new(),
        }
    }

    /// Builds a tree from a flat lookup table where slot `i` holds
    /// `(value << 4) | code_size` and the codeword is the top `code_size`
    /// bits of `i`.
    pub fn from_index_table(table: &[u16], max_code_size: usize) -> Result<Self> {
        let mut tree = Self::new(max_code_size);
        for (i, &item) in table.iter().enumerate() {
            let code_size = (item & 0xF) as usize;
            let value = item >> 4;
            // Padding
            if code_size <= 1 {
                continue;
            }
            if code_size > max_code_size {
                return Err(Error::FormatError(format!(
                    "Index table slot {} has a {} bit code, max is {}",
                    i, code_size, max_code_size
                )));
            }
            let code = (i >> (max_code_size - code_size)) as u32;
            tree.insert(code, code_size, value)?;
        }
        tree.insert(ESCAPE_CODE, ESCAPE_CODE_SIZE, 0)?;
        Ok(tree)
    }

    /// Builds a tree from a symbol list of power-of-two length where slot `i`
    /// gives the canonical codeword `i >> (max_bits - code_sizes[symbol])`.
    pub fn from_symbols(symbols: &[u8], code_sizes: &[u8]) -> Result<Self> {
        if !symbols.len().is_power_of_two() {
            return Err(Error::FormatError(format!(
                "Symbol list length {} is not a power of two", symbols.len()
            )));
        }
        let max_code_size = symbols.len().trailing_zeros() as usize;
        let mut tree = Self::new(max_code_size);
        for (i, &symbol) in symbols.iter().enumerate() {
            let code_size = code_sizes.get(symbol as usize).copied()
                .ok_or_else(|| Error::FormatError(format!("Symbol {} has no code size", symbol)))?
                as usize;
            if code_size == 0 || code_size > max_code_size {
                return Err(Error::FormatError(format!(
                    "Symbol {} has invalid code size {}", symbol, code_size
                )));
            }
            let code = (i >> (max_code_size - code_size)) as u32;
            tree.insert(code, code_size, symbol as u16)?;
        }
        Ok(tree)
    }

    pub fn insert(&mut self, code: u32, code_size: usize, value: u16) -> Result<()> {
        if code_size == 0 || code_size > self.max_code_size {
            return Err(Error::FormatError(format!(
                "Code size {} outside 1..={}", code_size, self.max_code_size
            )));
        }

        let mut current = 0;
        for bit_pos in (0..code_size).rev() {
            if self.nodes[current].value.is_some() {
                return Err(Error::FormatError(format!(
                    "Code {:0width$b} passes through a leaf", code, width = code_size
                )));
            }
            let branch = ((code >> bit_pos) & 1) as usize;
            current = match self.nodes[current].children[branch] {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children[branch] = Some(next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.is_branch() {
            return Err(Error::FormatError(format!(
                "Code {:0width$b} is a prefix of other codes", code, width = code_size
            )));
        }
        match node.value {
            Some(existing) if existing != value => {
                return Err(Error::FormatError(format!(
                    "Code {:0width$b} already maps to {}, not {}",
                    code, existing, value, width = code_size
                )));
            }
            Some(_) => {}
            None => {
                node.value = Some(value);
                self.codewords.entry(value).or_insert(Codeword { code, size: code_size });
            }
        }
        Ok(())
    }

    pub fn decode(&self, reader: &mut BitReader) -> Result<u16> {
        let mut current = 0;
        for _ in 0..self.max_code_size {
            let branch = reader.read(1)? as usize;
            current = self.nodes[current].children[branch]
                .ok_or_else(|| Error::FormatError("Invalid Huffman code".into()))?;
            if let Some(value) = self.nodes[current].value {
                return Ok(value);
            }
        }
        Err(Error::FormatError(format!(
            "No Huffman code found within {} bits", self.max_code_size
        )))
    }

    /// Codeword for `value`, the first one inserted if there are several.
    pub fn codeword(&self, value: u16) -> Option<Codeword> {
        self.codewords.get(&value).copied()
    }

    pub fn max_code_size(&self) -> usize {
        self.max_code_size
    }
}

impl fmt::Debug for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.codewords.iter().collect();
        entries.sort_by_key(|(&value, _)| value);
        let mut debug = f.debug_list();
        for (value, codeword) in entries {
            debug.entry(&format_args!(
                "{:4}:{:pad_width$}{:0code_width$b}",
                value, "", codeword.code,
                pad_width = self.max_code_size + 1 - codeword.size,
                code_width = codeword.size
            ));
        }
        debug.finish()
    }
}
