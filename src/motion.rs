use std::collections::HashMap;

use crate::bitreader::BitReader;
use crate::block::Block;
use crate::frame::{Frame, MacroblockView, Plane};
use crate::huffman::HuffmanTree;
use crate::tables::{MotionModeCode, MOTION_MODE_CODES, STEREO_MOTION_MODE_CODES};
use crate::{Error, Result};

/// Motion vector in half pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionVector {
    pub x: i32,
    pub y: i32,
}

impl MotionVector {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise median.
    pub fn median(a: Self, b: Self, c: Self) -> Self {
        Self::new(median3(a.x, b.x, c.x), median3(a.y, b.y, c.y))
    }

    fn offset(self, dx: i32, dy: i32) -> Result<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Ok(Self::new(x, y)),
            _ => Err(Error::FormatError(format!("Motion vector {:?} + ({}, {}) overflows", self, dx, dy))),
        }
    }

    fn half(self) -> Self {
        Self::new(self.x >> 1, self.y >> 1)
    }
}

fn median3(a: i32, b: i32, c: i32) -> i32 {
    a.min(b).max(a.max(b).min(c))
}

/// Vectors of the last decoded block of each macroblock column, with a
/// zero slot on both sides.
pub struct MotionVectorCache {
    vectors: Vec<MotionVector>,
}

impl MotionVectorCache {
    pub fn new(columns: usize) -> Self {
        Self { vectors: vec![MotionVector::default(); columns + 2] }
    }

    pub fn reset(&mut self) {
        self.vectors.fill(MotionVector::default());
    }

    /// Median of the left, above and above right neighbors of `column`.
    pub fn predict(&self, column: usize) -> MotionVector {
        MotionVector::median(self.vectors[column], self.vectors[column + 1], self.vectors[column + 2])
    }

    pub fn get(&self, column: usize) -> MotionVector {
        self.vectors[column + 1]
    }

    pub fn set(&mut self, column: usize, vector: MotionVector) {
        self.vectors[column + 1] = vector;
    }
}

/// Block mode codes keyed by block size.
pub struct MotionModeTables {
    trees: HashMap<(usize, usize), HuffmanTree>,
}

impl MotionModeTables {
    pub fn new(stereo: bool) -> Result<Self> {
        let codes: &[MotionModeCode] = if stereo { &STEREO_MOTION_MODE_CODES } else { &MOTION_MODE_CODES };
        let mut trees = HashMap::with_capacity(codes.len());
        for code in codes {
            trees.insert((code.width, code.height), HuffmanTree::from_symbols(code.symbols, code.code_sizes)?);
        }
        Ok(Self { trees })
    }

    pub fn tree(&self, width: usize, height: usize) -> Result<&HuffmanTree> {
        self.trees.get(&(width, height))
            .ok_or_else(|| Error::FormatError(format!("No motion mode code for {}x{} blocks", width, height)))
    }

    pub fn decode(&self, reader: &mut BitReader, width: usize, height: usize) -> Result<u32> {
        Ok(self.tree(width, height)?.decode(reader)? as u32)
    }
}

/// Predicts macroblocks from earlier frames.
pub struct MotionCompensator<'a> {
    tables: &'a MotionModeTables,
    references: &'a [Frame],
}

impl<'a> MotionCompensator<'a> {
    /// `references[n - 1]` is the frame decoded `n` frames back.
    pub fn new(tables: &'a MotionModeTables, references: &'a [Frame]) -> Self {
        Self { tables, references }
    }

    /// Decodes the vectors of a macroblock coded with `mode` and copies its
    /// prediction. Returns the vector of the last block.
    pub fn decode(
        &self,
        reader: &mut BitReader,
        macroblock: &mut MacroblockView,
        mode: u32,
        predicted: MotionVector,
    ) -> Result<MotionVector> {
        let mut last = predicted;
        let block = macroblock.macroblock.luma_block();
        self.decode_block(reader, macroblock, block, mode, predicted, &mut last)?;
        Ok(last)
    }

    fn decode_block(
        &self,
        reader: &mut BitReader,
        macroblock: &mut MacroblockView,
        block: Block,
        mode: u32,
        predicted: MotionVector,
        last: &mut MotionVector,
    ) -> Result<()> {
        match mode {
            0..=5 => {
                let vector = if mode > 0 {
                    let dx = reader.read_exp_golomb_signed()?;
                    let dy = reader.read_exp_golomb_signed()?;
                    predicted.offset(dx, dy)?
                } else {
                    predicted
                };
                let back = mode.max(1) as usize;
                let reference = self.references.get(back - 1).ok_or_else(|| {
                    Error::FormatError(format!("No reference frame {} frames back", back))
                })?;
                self.copy(macroblock, block, vector, reference)?;
                *last = vector;
                Ok(())
            }
            8 | 9 => {
                let (width, height) = if mode == 8 {
                    (block.width, block.height / 2)
                } else {
                    (block.width / 2, block.height)
                };
                for half in block.partition(width, height)? {
                    let mode = self.tables.decode(reader, width, height)?;
                    self.decode_block(reader, macroblock, half, mode, predicted, last)?;
                }
                Ok(())
            }
            _ => Err(Error::UnsupportedMode(format!("Motion mode {} on a {}x{} block", mode, block.width, block.height))),
        }
    }

    /// Copies `block`, in luma pixels, and its chroma from `reference`
    /// displaced by `vector`.
    fn copy(&self, macroblock: &mut MacroblockView, block: Block, vector: MotionVector, reference: &Frame) -> Result<()> {
        for plane in Plane::ALL {
            let (block, vector) = match plane {
                Plane::Luma => (block, vector),
                _ => (Block::new(block.x / 2, block.y / 2, block.width / 2, block.height / 2), vector.half()),
            };
            let source = reference.plane(plane);
            let stride = reference.plane_width(plane);
            let rows = reference.plane_height(plane);

            let left = block.x as i64 + (vector.x >> 1) as i64;
            let top = block.y as i64 + (vector.y >> 1) as i64;
            let right = (block.x + block.width) as i64 + ((vector.x as i64 + 1) >> 1);
            let bottom = (block.y + block.height) as i64 + ((vector.y as i64 + 1) >> 1);
            if left < 0 || top < 0 || right > stride as i64 || bottom > rows as i64 {
                return Err(Error::FormatError(format!(
                    "Motion vector ({}, {}) points {:?} outside of the {}x{} plane",
                    vector.x, vector.y, block, stride, rows
                )));
            }

            let mut view = macroblock.plane(plane).sub_view(block)?;
            let at = |x: usize, y: usize| source[(top as usize + y) * stride + left as usize + x] >> 1;
            for y in 0..block.height {
                for x in 0..block.width {
                    let value = match (vector.x & 1, vector.y & 1) {
                        (0, 0) => source[(top as usize + y) * stride + left as usize + x],
                        (1, 0) => at(x, y) + at(x + 1, y),
                        (0, _) => at(x, y) + at(x, y + 1),
                        _ => ((at(x, y) + at(x + 1, y)) >> 1) + ((at(x, y + 1) + at(x + 1, y + 1)) >> 1),
                    };
                    view.set(x, y, value);
                }
            }
        }
        Ok(())
    }
}
