use crate::bitreader::BitReader;
use crate::block::PixelView;
use crate::huffman::{HuffmanTree, INDEX_TABLE_BITS};
use crate::idct::inverse_transform;
use crate::quant::Quantizer;
use crate::tables::{
    residual_index_table, RESIDUAL_CODES_INTER, RESIDUAL_CODES_INTRA, RESIDUE_INTER,
    RESIDUE_INTRA, SCAN_4X4, SCAN_8X8,
};
use crate::{Error, Result};

pub const RESIDUAL_TABLES: usize = 2;

const LAST_BIT: u16 = 0x800;

// Offsets into the residue tables
const LAST_OFFSET: usize = 64;
const RUN_OFFSET: usize = 128;

/// Builds the coefficient code tree for VLC table `table` (0 inter, 1 intra).
pub fn residual_tree(table: usize) -> Result<HuffmanTree> {
    let codes = match table {
        0 => &RESIDUAL_CODES_INTER[..],
        1 => &RESIDUAL_CODES_INTRA[..],
        _ => return Err(Error::FormatError(format!("Unknown residual table {}", table))),
    };
    HuffmanTree::from_index_table(&residual_index_table(codes), INDEX_TABLE_BITS)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RunLevel {
    last: bool,
    run: usize,
    level: i32,
}

impl RunLevel {
    fn from_symbol(symbol: u16) -> Self {
        Self {
            last: symbol & LAST_BIT != 0,
            run: ((symbol >> 5) & 0x3F) as usize,
            level: (symbol & 0x1F) as i32,
        }
    }

    fn last_offset(&self) -> usize {
        if self.last { LAST_OFFSET } else { 0 }
    }
}

/// Run-length decoder for one coefficient block.
#[derive(Clone, Copy)]
pub struct ResidualDecoder<'a> {
    tree: &'a HuffmanTree,
    residue: &'static [u8; 256],
}

impl<'a> ResidualDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree, table: usize) -> Self {
        let residue = if table == 0 { &RESIDUE_INTER } else { &RESIDUE_INTRA };
        Self { tree, residue }
    }

    /// Decodes 16 or 64 dequantized coefficients into `coeffs`, row-major.
    /// `coeffs` must be zeroed by the caller.
    pub fn decode(&self, reader: &mut BitReader, quantizer: &Quantizer, coeffs: &mut [i32]) -> Result<()> {
        let len = coeffs.len();
        let scan: &[usize] = match len {
            16 => &SCAN_4X4,
            64 => &SCAN_8X8,
            _ => return Err(Error::InvalidGeometry(format!("No residual for {} coefficient blocks", len))),
        };

        let mut pos = 0;
        loop {
            let rl = self.read_run_level(reader)?;
            pos += rl.run;
            if pos >= len {
                return Err(Error::FormatError(format!(
                    "Coefficient run reaches position {} of a {} coefficient block", pos, len
                )));
            }
            coeffs[scan[pos]] = quantizer.dequantize(len, pos, rl.level);
            if rl.last {
                return Ok(());
            }
            pos += 1;
        }
    }

    /// Decodes the residual of a 4x4 or 8x8 block and adds it to the pixels.
    pub fn decode_into(&self, reader: &mut BitReader, quantizer: &Quantizer, view: &mut PixelView) -> Result<()> {
        let mut coeffs = [0; 64];
        let coeffs = &mut coeffs[..view.width() * view.height()];
        self.decode(reader, quantizer, coeffs)?;
        inverse_transform(coeffs);
        view.add_residual(coeffs);
        Ok(())
    }

    fn read_run_level(&self, reader: &mut BitReader) -> Result<RunLevel> {
        let mut rl = RunLevel::from_symbol(self.tree.decode(reader)?);
        if rl.level != 0 {
            self.read_sign(reader, &mut rl)?;
        } else if !reader.read_bool()? {
            rl = RunLevel::from_symbol(self.tree.decode(reader)?);
            rl.level += self.residue[rl.run + rl.last_offset()] as i32;
            self.read_sign(reader, &mut rl)?;
        } else if !reader.read_bool()? {
            rl = RunLevel::from_symbol(self.tree.decode(reader)?);
            rl.run += self.residue[RUN_OFFSET + rl.last_offset() + rl.level as usize] as usize;
            self.read_sign(reader, &mut rl)?;
        } else {
            rl.last = reader.read_bool()?;
            rl.run = reader.read(6)? as usize;
            rl.level = reader.read_signed(12)?;
        }
        Ok(rl)
    }

    fn read_sign(&self, reader: &mut BitReader, rl: &mut RunLevel) -> Result<()> {
        if reader.read_bool()? {
            rl.level = -rl.level;
        }
        Ok(())
    }
}
