use crate::block::{Block, PixelView};
use crate::color;
use crate::Result;

pub const MACROBLOCK_SIZE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorSpace {
    #[default]
    YCoCg,
    YCbCr,
}

impl ColorSpace {
    pub fn from_bit(bit: bool) -> Self {
        if bit { ColorSpace::YCbCr } else { ColorSpace::YCoCg }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    Luma,
    ChromaU,
    ChromaV,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::Luma, Plane::ChromaU, Plane::ChromaV];
}

/// Planar 4:2:0 picture: the luma plane followed by the two quarter-size
/// chroma planes, each row-major with no padding.
#[derive(Clone)]
pub struct Frame {
    width: usize,
    height: usize,
    color_space: ColorSpace,
    data: Vec<u8>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_space: ColorSpace::default(),
            data: vec![0; Self::packed_len(width, height)],
        }
    }

    pub fn packed_len(width: usize, height: usize) -> usize {
        width * height + 2 * ((width / 2) * (height / 2))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub fn set_color_space(&mut self, color_space: ColorSpace) {
        self.color_space = color_space;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn luma(&self) -> &[u8] {
        self.plane(Plane::Luma)
    }

    pub fn chroma_u(&self) -> &[u8] {
        self.plane(Plane::ChromaU)
    }

    pub fn chroma_v(&self) -> &[u8] {
        self.plane(Plane::ChromaV)
    }

    pub fn plane(&self, plane: Plane) -> &[u8] {
        let luma_len = self.width * self.height;
        let chroma_len = self.plane_width(Plane::ChromaU) * self.plane_height(Plane::ChromaU);
        match plane {
            Plane::Luma => &self.data[..luma_len],
            Plane::ChromaU => &self.data[luma_len..luma_len + chroma_len],
            Plane::ChromaV => &self.data[luma_len + chroma_len..],
        }
    }

    pub fn plane_width(&self, plane: Plane) -> usize {
        match plane {
            Plane::Luma => self.width,
            _ => self.width / 2,
        }
    }

    pub fn plane_height(&self, plane: Plane) -> usize {
        match plane {
            Plane::Luma => self.height,
            _ => self.height / 2,
        }
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn to_rgba(&self) -> Vec<u8> {
        match self.color_space {
            ColorSpace::YCoCg => color::ycocg_to_rgba(self),
            ColorSpace::YCbCr => color::ycbcr_to_rgba(self),
        }
    }

    /// Macroblocks of the frame in raster order.
    pub fn macroblocks(&self) -> impl Iterator<Item = Macroblock> {
        let columns = self.width / MACROBLOCK_SIZE;
        let rows = self.height / MACROBLOCK_SIZE;
        (0..columns * rows).map(move |index| Macroblock {
            index,
            x: (index % columns) * MACROBLOCK_SIZE,
            y: (index / columns) * MACROBLOCK_SIZE,
        })
    }

    pub fn macroblock_view(&mut self, macroblock: Macroblock) -> Result<MacroblockView<'_>> {
        let luma_len = self.width * self.height;
        let chroma_width = self.width / 2;
        let chroma_len = chroma_width * (self.height / 2);

        let (luma, chroma) = self.data.split_at_mut(luma_len);
        let (chroma_u, chroma_v) = chroma.split_at_mut(chroma_len);
        Ok(MacroblockView {
            macroblock,
            luma: PixelView::new(luma, self.width, macroblock.luma_block())?,
            chroma_u: PixelView::new(chroma_u, chroma_width, macroblock.chroma_block())?,
            chroma_v: PixelView::new(chroma_v, chroma_width, macroblock.chroma_block())?,
        })
    }
}

/// Position of a 16x16 macroblock, in luma pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Macroblock {
    pub index: usize,
    pub x: usize,
    pub y: usize,
}

impl Macroblock {
    pub fn column(&self) -> usize {
        self.x / MACROBLOCK_SIZE
    }

    pub fn luma_block(&self) -> Block {
        Block::new(self.x, self.y, MACROBLOCK_SIZE, MACROBLOCK_SIZE).with_index(self.index)
    }

    pub fn chroma_block(&self) -> Block {
        let size = MACROBLOCK_SIZE / 2;
        Block::new(self.x / 2, self.y / 2, size, size).with_index(self.index)
    }
}

pub struct MacroblockView<'a> {
    pub macroblock: Macroblock,
    pub luma: PixelView<'a>,
    pub chroma_u: PixelView<'a>,
    pub chroma_v: PixelView<'a>,
}

impl<'a> MacroblockView<'a> {
    pub fn plane(&mut self, plane: Plane) -> &mut PixelView<'a> {
        match plane {
            Plane::Luma => &mut self.luma,
            Plane::ChromaU => &mut self.chroma_u,
            Plane::ChromaV => &mut self.chroma_v,
        }
    }
}

/// Fixed set of frames, the current one at position 0 followed by the
/// previous ones from newest to oldest.
pub struct FrameRing {
    frames: Vec<Frame>,
}

impl FrameRing {
    pub fn new(capacity: usize, width: usize, height: usize) -> Self {
        Self {
            frames: (0..capacity.max(1)).map(|_| Frame::new(width, height)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Makes the oldest frame the current one. Buffers are moved, never
    /// reallocated.
    pub fn rotate(&mut self) {
        self.frames.rotate_right(1);
    }

    pub fn current(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn current_mut(&mut self) -> &mut Frame {
        &mut self.frames[0]
    }

    /// Frame decoded `position` frames before the current one.
    pub fn get(&self, position: usize) -> Option<&Frame> {
        self.frames.get(position)
    }

    /// The current frame along with the reference frames, where
    /// `references[n - 1]` is `n` frames back.
    pub fn split_current(&mut self) -> (&mut Frame, &[Frame]) {
        let (current, references) = self.frames.split_at_mut(1);
        (&mut current[0], references)
    }
}
