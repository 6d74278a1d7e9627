use log::trace;

use crate::bitreader::BitReader;
use crate::block::PixelView;
use crate::frame::{Frame, MacroblockView, MACROBLOCK_SIZE};
use crate::intra::IntraMacroblockDecoder;
use crate::motion::{MotionCompensator, MotionModeTables, MotionVectorCache};
use crate::quant::Quantizer;
use crate::residual::ResidualDecoder;
use crate::tables::{INTER_CBP, INTER_PARTITION};
use crate::{Error, Result};

// Macroblock modes that fall back to intra coding
const INTRA_MODE: u32 = 6;
const INTRA_PER_BLOCK_MODE: u32 = 7;

/// Reconstructs the macroblocks of a predicted frame.
pub struct InterMacroblockDecoder<'a> {
    residual: ResidualDecoder<'a>,
    quantizer: &'a Quantizer,
    modes: &'a MotionModeTables,
    compensator: MotionCompensator<'a>,
    intra: IntraMacroblockDecoder<'a>,
    vectors: &'a mut MotionVectorCache,
}

impl<'a> InterMacroblockDecoder<'a> {
    pub fn new(
        residual: ResidualDecoder<'a>,
        quantizer: &'a Quantizer,
        modes: &'a MotionModeTables,
        references: &'a [Frame],
        vectors: &'a mut MotionVectorCache,
    ) -> Self {
        Self {
            residual,
            quantizer,
            modes,
            compensator: MotionCompensator::new(modes, references),
            intra: IntraMacroblockDecoder::new(residual, quantizer),
            vectors,
        }
    }

    pub fn decode(&mut self, reader: &mut BitReader, macroblock: &mut MacroblockView) -> Result<()> {
        let column = macroblock.macroblock.column();
        let mode = self.modes.decode(reader, MACROBLOCK_SIZE, MACROBLOCK_SIZE)?;
        if mode == INTRA_MODE || mode == INTRA_PER_BLOCK_MODE {
            trace!("Inter macroblock {}: intra coded", macroblock.macroblock.index);
            return self.intra.decode(reader, macroblock, mode == INTRA_PER_BLOCK_MODE);
        }

        let predicted = self.vectors.predict(column);
        let vector = self.compensator.decode(reader, macroblock, mode, predicted)?;
        self.vectors.set(column, vector);

        let index = reader.read_exp_golomb()? as usize;
        let cbp = *INTER_CBP.get(index).ok_or_else(|| {
            Error::FormatError(format!("Inter coded block pattern {} out of range", index))
        })?;
        trace!("Inter macroblock {}: mode {}, vector {:?}, cbp {:#04X}", macroblock.macroblock.index, mode, vector, cbp);

        for block in macroblock.luma.partition(8, 8)? {
            if cbp >> block.index & 1 != 0 {
                let mut view = macroblock.luma.sub_view(block)?;
                self.decode_residual(reader, &mut view)?;
            }
        }
        if cbp & 0x10 != 0 {
            self.decode_residual(reader, &mut macroblock.chroma_u)?;
        }
        if cbp & 0x20 != 0 {
            self.decode_residual(reader, &mut macroblock.chroma_v)?;
        }
        Ok(())
    }

    /// Adds the residual of an 8x8 block, whole or as some of its 4x4 blocks.
    fn decode_residual(&self, reader: &mut BitReader, view: &mut PixelView) -> Result<()> {
        let partition = reader.read_exp_golomb()? as usize;
        if partition == 0 {
            return self.residual.decode_into(reader, self.quantizer, view);
        }

        let mask = *INTER_PARTITION.get(partition).ok_or_else(|| {
            Error::FormatError(format!("Inter residual partition {} out of range", partition))
        })?;
        for block in view.partition(4, 4)? {
            if mask >> block.index & 1 != 0 {
                let mut sub = view.sub_view(block)?;
                self.residual.decode_into(reader, self.quantizer, &mut sub)?;
            }
        }
        Ok(())
    }
}
