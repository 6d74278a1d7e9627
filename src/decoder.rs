use std::sync::Arc;

use log::{debug, warn};

use crate::bitreader::{BitOrder, BitReader, BlockSize};
use crate::frame::{ColorSpace, Frame, FrameRing, MACROBLOCK_SIZE};
use crate::huffman::HuffmanTree;
use crate::inter::InterMacroblockDecoder;
use crate::intra::IntraMacroblockDecoder;
use crate::motion::{MotionModeTables, MotionVectorCache};
use crate::quant::Quantizer;
use crate::residual::{residual_tree, ResidualDecoder, RESIDUAL_TABLES};
use crate::{Error, Result};

/// Frames kept for motion compensation, the current one included.
pub const FRAME_RING_SIZE: usize = 6;

// Residual table used by predicted frames
const INTER_RESIDUAL_TABLE: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub width: usize,
    pub height: usize,
    pub stereo: bool,
    pub block_size: BlockSize,
    pub bit_order: BitOrder,
}

impl DecoderConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stereo: false,
            block_size: BlockSize::Bits16,
            bit_order: BitOrder::LittleEndian,
        }
    }

    pub fn with_stereo(self, stereo: bool) -> Self {
        Self { stereo, ..self }
    }

    pub fn with_block_size(self, block_size: BlockSize) -> Self {
        Self { block_size, ..self }
    }

    pub fn with_bit_order(self, bit_order: BitOrder) -> Self {
        Self { bit_order, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |size: usize| size > 0 && size % MACROBLOCK_SIZE == 0;
        if !valid(self.width) || !valid(self.height) {
            return Err(Error::InvalidGeometry(format!(
                "Frame size {}x{} is not a non-zero multiple of {}",
                self.width, self.height, MACROBLOCK_SIZE
            )));
        }
        Ok(())
    }
}

/// Code trees, read-only once built. One set can be shared by any number
/// of decoders.
pub struct CodecTables {
    residual: Vec<HuffmanTree>,
    motion: MotionModeTables,
    stereo_motion: MotionModeTables,
}

impl CodecTables {
    pub fn new() -> Result<Self> {
        Ok(Self {
            residual: (0..RESIDUAL_TABLES).map(residual_tree).collect::<Result<_>>()?,
            motion: MotionModeTables::new(false)?,
            stereo_motion: MotionModeTables::new(true)?,
        })
    }

    pub fn residual(&self, table: usize) -> Result<&HuffmanTree> {
        self.residual.get(table)
            .ok_or_else(|| Error::FormatError(format!("Unknown residual table {}", table)))
    }

    pub fn motion(&self, stereo: bool) -> &MotionModeTables {
        if stereo { &self.stereo_motion } else { &self.motion }
    }
}

/// Decodes a video stream one frame at a time.
pub struct Decoder {
    config: DecoderConfig,
    tables: Arc<CodecTables>,
    frames: FrameRing,
    vectors: MotionVectorCache,
    qp: i32,
    color_space: ColorSpace,
    has_key_frame: bool,
    consumed: usize,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Self::with_tables(config, Arc::new(CodecTables::new()?))
    }

    /// Decoder using tables built earlier, possibly by another decoder.
    pub fn with_tables(config: DecoderConfig, tables: Arc<CodecTables>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tables,
            frames: FrameRing::new(FRAME_RING_SIZE, config.width, config.height),
            vectors: MotionVectorCache::new(config.width / MACROBLOCK_SIZE),
            qp: 0,
            color_space: ColorSpace::default(),
            has_key_frame: false,
            consumed: 0,
        })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn tables(&self) -> &Arc<CodecTables> {
        &self.tables
    }

    /// The last decoded frame.
    pub fn current_frame(&self) -> &Frame {
        self.frames.current()
    }

    pub fn frames(&self) -> &FrameRing {
        &self.frames
    }

    /// Quantizer index carried from the last frame.
    pub fn quantizer_index(&self) -> i32 {
        self.qp
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Bytes the last call to `decode_frame` read from its input.
    pub fn consumed_bytes(&self) -> usize {
        self.consumed
    }

    /// Decodes one frame. The frame stays valid until the next call.
    pub fn decode_frame(&mut self, data: &[u8]) -> Result<&Frame> {
        let mut reader = BitReader::with_config(data, self.config.block_size, self.config.bit_order);
        let is_intra = reader.read_bool()?;

        self.frames.rotate();
        self.frames.current_mut().clear();
        if is_intra {
            self.decode_intra(&mut reader)?;
        } else {
            self.decode_inter(&mut reader)?;
        }
        self.consumed = reader.byte_position();

        let frame = self.frames.current_mut();
        frame.set_color_space(self.color_space);
        Ok(&*frame)
    }

    fn decode_intra(&mut self, reader: &mut BitReader) -> Result<()> {
        let color_space = ColorSpace::from_bit(reader.read_bool()?);
        let table = reader.read(1)? as usize;
        let qp = reader.read(6)? as i32;
        let quantizer = Quantizer::new(qp)?;
        debug!("I-frame: qp {}, {:?}, residual table {}", qp, color_space, table);

        self.qp = qp;
        self.color_space = color_space;
        self.has_key_frame = true;

        let residual = ResidualDecoder::new(self.tables.residual(table)?, table);
        let mut intra = IntraMacroblockDecoder::new(residual, &quantizer);
        let frame = self.frames.current_mut();
        for macroblock in frame.macroblocks() {
            let per_block = reader.read_bool()?;
            let mut view = frame.macroblock_view(macroblock)?;
            intra.decode(reader, &mut view, per_block)?;
        }
        Ok(())
    }

    fn decode_inter(&mut self, reader: &mut BitReader) -> Result<()> {
        if !self.has_key_frame {
            warn!("P-frame before any I-frame, predicting from blank frames");
        }
        let delta = reader.read_exp_golomb_signed()?;
        let qp = self.qp.checked_add(delta)
            .ok_or_else(|| Error::FormatError(format!("QP delta {} overflows", delta)))?;
        let quantizer = Quantizer::new(qp)?;
        debug!("P-frame: qp {} ({:+}), {:?}", qp, delta, self.color_space);
        self.qp = qp;

        self.vectors.reset();
        let residual = ResidualDecoder::new(self.tables.residual(INTER_RESIDUAL_TABLE)?, INTER_RESIDUAL_TABLE);
        let (frame, references) = self.frames.split_current();
        let mut inter = InterMacroblockDecoder::new(
            residual,
            &quantizer,
            self.tables.motion(self.config.stereo),
            references,
            &mut self.vectors,
        );
        for macroblock in frame.macroblocks() {
            let mut view = frame.macroblock_view(macroblock)?;
            inter.decode(reader, &mut view)?;
        }
        Ok(())
    }
}
