use log::trace;

use crate::bitreader::BitReader;
use crate::block::{Block, PixelView};
use crate::frame::MacroblockView;
use crate::quant::Quantizer;
use crate::residual::ResidualDecoder;
use crate::tables::{INTRA_CBP, INTRA_PARTITION};
use crate::{Error, Result};

// Largest magnitude of the delta plane correction, larger ones overflow
const DELTA_LIMIT: i32 = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntraMode {
    Vertical,
    Horizontal,
    DeltaPlane,
    DC,
    HorizontalUp,
    HorizontalDown,
    VerticalRight,
    DiagonalDownRight,
    VerticalLeft,
    /// The block was predicted as part of a larger one.
    Nothing,
    /// The mode is coded relative to the neighbor modes.
    Predicted,
}

impl IntraMode {
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0 => IntraMode::Vertical,
            1 => IntraMode::Horizontal,
            2 => IntraMode::DeltaPlane,
            3 => IntraMode::DC,
            4 => IntraMode::HorizontalUp,
            5 => IntraMode::HorizontalDown,
            6 => IntraMode::VerticalRight,
            7 => IntraMode::DiagonalDownRight,
            8 => IntraMode::VerticalLeft,
            9 => IntraMode::Nothing,
            _ => return Err(Error::UnsupportedMode(format!("Unknown intra prediction mode {}", code))),
        })
    }
}

const NO_MODE: u8 = 9;
const DEFAULT_MODE: u8 = 3;

/// Most probable mode decoding over the 4x4 cells of one macroblock.
#[derive(Clone, Debug)]
pub struct ModePredictor {
    modes: [u8; 16],
}

impl Default for ModePredictor {
    fn default() -> Self {
        Self { modes: [NO_MODE; 16] }
    }
}

impl ModePredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.modes = [NO_MODE; 16];
    }

    /// Reads the mode of a 4x4 or 8x8 luma block.
    pub fn decode(&mut self, reader: &mut BitReader, block: &Block) -> Result<IntraMode> {
        let cell = (block.y & 0xC) | ((block.x / 4) % 4);
        let above = if cell >= 4 { self.modes[cell - 4] } else { NO_MODE };
        let left = if cell % 4 > 0 { self.modes[cell - 1] } else { NO_MODE };

        let mut mode = above.min(left);
        if mode == NO_MODE {
            mode = DEFAULT_MODE;
        }
        if !reader.read_bool()? {
            let remaining = reader.read(3)? as u8;
            mode = if remaining >= mode { remaining + 1 } else { remaining };
        }

        self.modes[cell] = mode;
        if block.width == 8 {
            for covered in [cell + 1, cell + 4, cell + 5] {
                if let Some(slot) = self.modes.get_mut(covered) {
                    *slot = mode;
                }
            }
        }
        IntraMode::from_code(mode as u32)
    }
}

/// Spatial prediction of one block.
pub trait BlockPredictor {
    /// Called before the first block of each intra macroblock.
    fn start_macroblock(&mut self);

    fn predict(&mut self, reader: &mut BitReader, view: &mut PixelView, mode: IntraMode) -> Result<()>;
}

#[derive(Default)]
pub struct IntraPredictor {
    modes: ModePredictor,
}

impl IntraPredictor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlockPredictor for IntraPredictor {
    fn start_macroblock(&mut self) {
        self.modes.reset();
    }

    fn predict(&mut self, reader: &mut BitReader, view: &mut PixelView, mode: IntraMode) -> Result<()> {
        match mode {
            IntraMode::Vertical => fill_with(view, |v, x, _| pget(v, x, -1)),
            IntraMode::Horizontal => fill_with(view, |v, _, y| pget(v, -1, y)),
            IntraMode::DeltaPlane => predict_delta_plane(reader, view),
            IntraMode::DC => predict_dc(view),
            IntraMode::HorizontalUp => fill_with(view, pick_horizontal_up),
            IntraMode::HorizontalDown => fill_with(view, pick_horizontal_down),
            IntraMode::VerticalRight => fill_with(view, pick_vertical_right),
            IntraMode::DiagonalDownRight => fill_with(view, pick_diagonal_down_right),
            IntraMode::VerticalLeft => fill_with(view, pick_vertical_left),
            IntraMode::Nothing => Ok(()),
            IntraMode::Predicted => {
                let mode = self.modes.decode(reader, &view.block())?;
                self.predict(reader, view, mode)
            }
        }
    }
}

/// Writes the block in raster order, so picks may read pixels already
/// predicted.
fn fill_with<F>(view: &mut PixelView, pick: F) -> Result<()>
where
    F: Fn(&PixelView, isize, isize) -> Result<u8>,
{
    for y in 0..view.height() {
        for x in 0..view.width() {
            let value = pick(view, x as isize, y as isize)?;
            view.set(x, y, value);
        }
    }
    Ok(())
}

/// Reads a neighbor, folding the taps that fall outside the border back
/// onto it.
fn pget(view: &PixelView, x: isize, y: isize) -> Result<u8> {
    let size = view.height() as isize;
    let (x, y) = match (x, y) {
        (-1, y) if y >= size => (-1, size - 1),
        (-1, -2) => (0, -1),
        (-2, -1) => (-1, 0),
        _ => (x, y),
    };
    view.get(x, y)
}

fn half(a: u8, b: u8) -> u8 {
    ((a as u32 + b as u32 + 1) / 2) as u8
}

fn half3(a: u8, b: u8, c: u8) -> u8 {
    (((a as u32 + 2 * b as u32 + c as u32) * 2 / 4 + 1) / 2) as u8
}

fn half_horz(view: &PixelView, x: isize, y: isize) -> Result<u8> {
    Ok(half3(pget(view, x - 1, y)?, pget(view, x, y)?, pget(view, x + 1, y)?))
}

fn half_vert(view: &PixelView, x: isize, y: isize) -> Result<u8> {
    Ok(half3(pget(view, x, y - 1)?, pget(view, x, y)?, pget(view, x, y + 1)?))
}

fn pick_horizontal_up(view: &PixelView, x: isize, y: isize) -> Result<u8> {
    let row = y + x / 2;
    if x % 2 == 0 {
        Ok(half(pget(view, -1, row)?, pget(view, -1, row + 1)?))
    } else {
        half_vert(view, -1, row + 1)
    }
}

fn pick_horizontal_down(view: &PixelView, x: isize, y: isize) -> Result<u8> {
    if x == 0 {
        Ok(half(pget(view, -1, y - 1)?, pget(view, -1, y)?))
    } else if y == 0 {
        half_horz(view, x - 2, y - 1)
    } else if x == 1 {
        half_vert(view, x - 2, y - 1)
    } else {
        pget(view, x - 2, y - 1)
    }
}

fn pick_vertical_right(view: &PixelView, x: isize, y: isize) -> Result<u8> {
    if y == 0 {
        Ok(half(pget(view, x - 1, -1)?, pget(view, x, -1)?))
    } else if x == 0 {
        half_vert(view, x - 1, y - 2)
    } else if y == 1 {
        half_horz(view, x - 1, y - 2)
    } else {
        pget(view, x - 1, y - 2)
    }
}

fn pick_diagonal_down_right(view: &PixelView, x: isize, y: isize) -> Result<u8> {
    let corner = pget(view, x - 1, y - 1)?;
    if x != 0 && y != 0 {
        return Ok(corner);
    }
    let first = if x == 0 { pget(view, -1, y)? } else { pget(view, x - 2, -1)? };
    let second = if y == 0 { pget(view, x, -1)? } else { pget(view, -1, y - 2)? };
    Ok(half3(first, corner, second))
}

fn pick_vertical_left(view: &PixelView, x: isize, y: isize) -> Result<u8> {
    let size = view.width() as isize;
    if y == 0 {
        Ok(half(pget(view, x, -1)?, pget(view, x + 1, -1)?))
    } else if y == 1 {
        half_horz(view, x + 1, y - 2)
    } else if x < size - 1 {
        pget(view, x + 1, y - 2)
    } else if y % 2 == 0 {
        Ok(half(pget(view, y / 2 + size - 1, -1)?, pget(view, y / 2 + size, -1)?))
    } else {
        half_horz(view, y / 2 + size, -1)
    }
}

fn predict_dc(view: &mut PixelView) -> Result<()> {
    let mut sum = 0u32;
    let mut count = 0u32;
    if view.x() > 0 {
        for y in 0..view.height() {
            sum += view.get(-1, y as isize)? as u32;
        }
        count += view.height() as u32;
    }
    if view.y() > 0 {
        for x in 0..view.width() {
            sum += view.get(x as isize, -1)? as u32;
        }
        count += view.width() as u32;
    }

    let value = if count == 0 { 128 } else { (sum + count / 2) / count };
    view.fill(value as u8);
    Ok(())
}

fn predict_delta_plane(reader: &mut BitReader, view: &mut PixelView) -> Result<()> {
    let size = view.width();
    let scaled = |v: i32| if size == 16 { (v + 1) >> 1 } else { v };

    // At the plane edges the block's own first row or column stands in
    let left_x = if view.x() > 0 { -1 } else { 0 };
    let top_y = if view.y() > 0 { -1 } else { 0 };
    let mut top = [0i32; 16];
    let mut left = [0i32; 16];
    for i in 0..size {
        top[i] = view.get(i as isize, top_y)? as i32;
        left[i] = view.get(left_x, i as isize)? as i32;
    }
    let bottom = left[size - 1];
    let right = top[size - 1];

    let delta = reader.read_exp_golomb_signed()?;
    if !(-DELTA_LIMIT..=DELTA_LIMIT).contains(&delta) {
        return Err(Error::FormatError(format!("Delta plane correction {} out of range", delta)));
    }
    let average = (bottom + right + 1) / 2 + 2 * delta;
    let bottom_slope = scaled(average - bottom);
    let right_slope = scaled(average - right);
    let shift = if scaled(size as i32) == 8 { 3 } else { 2 };

    let mut columns = [0i32; 16];
    let mut rows = [0i32; 16];
    for i in 0..size {
        let step = i as i32 + 1;
        columns[i] = scaled(((bottom - top[i]) << shift) + bottom_slope * step);
        rows[i] = scaled(((right - left[i]) << shift) + right_slope * step);
    }

    for y in 0..size {
        for x in 0..size {
            let gradient = (columns[x] * (y as i32 + 1) + rows[y] * (x as i32 + 1)) >> (2 * shift);
            let value = (top[x] + left[y] + gradient + 1) / 2;
            view.set(x, y, (value & 0xFF) as u8);
        }
    }
    Ok(())
}

/// Reconstructs intra coded macroblocks.
pub struct IntraMacroblockDecoder<'a, P = IntraPredictor> {
    residual: ResidualDecoder<'a>,
    quantizer: &'a Quantizer,
    predictor: P,
}

impl<'a> IntraMacroblockDecoder<'a, IntraPredictor> {
    pub fn new(residual: ResidualDecoder<'a>, quantizer: &'a Quantizer) -> Self {
        Self::with_predictor(residual, quantizer, IntraPredictor::new())
    }
}

impl<'a, P: BlockPredictor> IntraMacroblockDecoder<'a, P> {
    pub fn with_predictor(residual: ResidualDecoder<'a>, quantizer: &'a Quantizer, predictor: P) -> Self {
        Self { residual, quantizer, predictor }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn decode(&mut self, reader: &mut BitReader, macroblock: &mut MacroblockView, per_block: bool) -> Result<()> {
        self.predictor.start_macroblock();

        let index = reader.read_exp_golomb()? as usize;
        let cbp = *INTRA_CBP.get(index).ok_or_else(|| {
            Error::FormatError(format!("Intra coded block pattern {} out of range", index))
        })?;
        trace!("Intra macroblock {}: cbp {:#04X}, per block modes {}", macroblock.macroblock.index, cbp, per_block);

        let luma_mode = if per_block {
            IntraMode::Predicted
        } else {
            match IntraMode::from_code(reader.read(3)?)? {
                IntraMode::DeltaPlane => {
                    self.predictor.predict(reader, &mut macroblock.luma, IntraMode::DeltaPlane)?;
                    IntraMode::Nothing
                }
                mode => mode,
            }
        };
        for block in macroblock.luma.partition(8, 8)? {
            let mut view = macroblock.luma.sub_view(block)?;
            self.decode_block(reader, &mut view, luma_mode, cbp >> block.index & 1 != 0)?;
        }

        let chroma_mode = match IntraMode::from_code(reader.read(3)?)? {
            IntraMode::DeltaPlane => {
                self.predictor.predict(reader, &mut macroblock.chroma_u, IntraMode::DeltaPlane)?;
                self.predictor.predict(reader, &mut macroblock.chroma_v, IntraMode::DeltaPlane)?;
                IntraMode::Nothing
            }
            mode => mode,
        };
        self.decode_block(reader, &mut macroblock.chroma_u, chroma_mode, cbp & 0x10 != 0)?;
        self.decode_block(reader, &mut macroblock.chroma_v, chroma_mode, cbp & 0x20 != 0)
    }

    /// Predicts an 8x8 block, split into 4x4 blocks when its residual is.
    fn decode_block(&mut self, reader: &mut BitReader, view: &mut PixelView, mode: IntraMode, has_residual: bool) -> Result<()> {
        if !has_residual {
            return self.predictor.predict(reader, view, mode);
        }

        let partition = reader.read_exp_golomb()? as usize;
        if partition == 0 {
            self.predictor.predict(reader, view, mode)?;
            return self.residual.decode_into(reader, self.quantizer, view);
        }

        let mask = *INTRA_PARTITION.get(partition - 1).ok_or_else(|| {
            Error::FormatError(format!("Intra residual partition {} out of range", partition))
        })?;
        for block in view.partition(4, 4)? {
            let mut sub = view.sub_view(block)?;
            self.predictor.predict(reader, &mut sub, mode)?;
            if mask >> block.index & 1 != 0 {
                self.residual.decode_into(reader, self.quantizer, &mut sub)?;
            }
        }
        Ok(())
    }
}
