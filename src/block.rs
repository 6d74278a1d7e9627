use crate::{Error, Result};

/// Rectangle inside a plane. `index` is the position of the block inside
/// the partition it came from, in raster order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub index: usize,
}

impl Block {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height, index: 0 }
    }

    pub fn with_index(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// Splits the block into `width`x`height` sub-blocks in raster order.
    pub fn partition(&self, width: usize, height: usize) -> Result<Partition> {
        if width == 0 || height == 0 || self.width % width != 0 || self.height % height != 0 {
            return Err(Error::InvalidGeometry(format!(
                "Cannot partition {}x{} block into {}x{} blocks",
                self.width, self.height, width, height
            )));
        }
        Ok(Partition {
            parent: *self,
            width,
            height,
            columns: self.width / width,
            count: (self.width / width) * (self.height / height),
            next: 0,
        })
    }

    pub fn contains(&self, other: &Block) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

pub struct Partition {
    parent: Block,
    width: usize,
    height: usize,
    columns: usize,
    count: usize,
    next: usize,
}

impl Iterator for Partition {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Block {
            x: self.parent.x + (index % self.columns) * self.width,
            y: self.parent.y + (index / self.columns) * self.height,
            width: self.width,
            height: self.height,
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Partition {}

/// Mutable view of one block of a plane.
///
/// Pixels inside the block are addressed with `0..width` and `0..height`.
/// Reads may also reach one pixel outside of it: the column at `x = -1`
/// and the row at `y = -1`, which extends to `x < 2 * width` for the
/// diagonal predictors. The border is only there when the block is not at
/// the plane edge on that axis. Top row reads past the plane's right edge
/// continue linearly into the next row of the plane.
pub struct PixelView<'a> {
    pixels: &'a mut [u8],
    stride: usize,
    block: Block,
}

impl<'a> PixelView<'a> {
    /// View over `block` of a plane of `pixels.len() / stride` rows.
    pub fn new(pixels: &'a mut [u8], stride: usize, block: Block) -> Result<Self> {
        if stride == 0 || pixels.len() % stride != 0 {
            return Err(Error::InvalidGeometry(format!(
                "Plane of {} bytes does not have a stride of {}", pixels.len(), stride
            )));
        }
        let plane = Block::new(0, 0, stride, pixels.len() / stride);
        if block.width == 0 || block.height == 0 || !plane.contains(&block) {
            return Err(Error::InvalidGeometry(format!(
                "{:?} is outside of the {}x{} plane", block, plane.width, plane.height
            )));
        }
        Ok(Self { pixels, stride, block })
    }

    pub fn block(&self) -> Block {
        self.block
    }

    pub fn x(&self) -> usize {
        self.block.x
    }

    pub fn y(&self) -> usize {
        self.block.y
    }

    pub fn width(&self) -> usize {
        self.block.width
    }

    pub fn height(&self) -> usize {
        self.block.height
    }

    pub fn index(&self) -> usize {
        self.block.index
    }

    /// Reads a pixel of the block or of its neighbor border.
    pub fn get(&self, x: isize, y: isize) -> Result<u8> {
        let w = self.block.width as isize;
        let h = self.block.height as isize;
        let in_border = if y == -1 {
            self.block.y > 0 && x >= -1 && x < 2 * w && (x >= 0 || self.block.x > 0)
        } else {
            y >= 0 && y < h && x < w && (x >= 0 || (x == -1 && self.block.x > 0))
        };
        if !in_border {
            return Err(Error::InvalidGeometry(format!(
                "Pixel ({}, {}) is outside of {:?} and its border", x, y, self.block
            )));
        }

        let ax = (self.block.x as isize + x) as usize;
        let ay = (self.block.y as isize + y) as usize;
        self.pixels.get(ay * self.stride + ax).copied().ok_or_else(|| {
            Error::InvalidGeometry(format!("Pixel ({}, {}) is outside of the plane", ax, ay))
        })
    }

    /// Writes a pixel inside the block.
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        debug_assert!(x < self.block.width && y < self.block.height);
        let offset = self.offset(x, y);
        self.pixels[offset] = value;
    }

    pub fn fill(&mut self, value: u8) {
        for y in 0..self.block.height {
            let offset = self.offset(0, y);
            self.pixels[offset..offset + self.block.width].fill(value);
        }
    }

    /// Adds a row-major residual to the block, saturating to `0..=255`.
    pub fn add_residual(&mut self, residual: &[i32]) {
        debug_assert_eq!(residual.len(), self.block.width * self.block.height);
        for (y, row) in residual.chunks_exact(self.block.width).enumerate() {
            let offset = self.offset(0, y);
            for (pixel, &delta) in self.pixels[offset..offset + self.block.width].iter_mut().zip(row) {
                *pixel = (*pixel as i32).wrapping_add(delta).clamp(0, 255) as u8;
            }
        }
    }

    pub fn partition(&self, width: usize, height: usize) -> Result<Partition> {
        self.block.partition(width, height)
    }

    /// View over a block of the same plane that lies inside this one.
    pub fn sub_view(&mut self, block: Block) -> Result<PixelView<'_>> {
        if !self.block.contains(&block) {
            return Err(Error::InvalidGeometry(format!(
                "{:?} is not inside {:?}", block, self.block
            )));
        }
        PixelView::new(&mut *self.pixels, self.stride, block)
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (self.block.y + y) * self.stride + self.block.x + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(size: usize) -> Vec<u8> {
        (0..size * size).map(|i| i as u8).collect()
    }

    #[test]
    fn test_partition_raster_order() {
        let blocks: Vec<_> = Block::new(16, 32, 8, 8).partition(4, 4).unwrap().collect();
        assert_eq!(blocks, vec![
            Block { x: 16, y: 32, width: 4, height: 4, index: 0 },
            Block { x: 20, y: 32, width: 4, height: 4, index: 1 },
            Block { x: 16, y: 36, width: 4, height: 4, index: 2 },
            Block { x: 20, y: 36, width: 4, height: 4, index: 3 },
        ]);

        // Index is local to the parent
        let inner: Vec<_> = blocks[3].partition(2, 2).unwrap().collect();
        assert_eq!(inner[3], Block { x: 22, y: 38, width: 2, height: 2, index: 3 });

        let halves: Vec<_> = Block::new(0, 0, 16, 16).partition(16, 8).unwrap().collect();
        assert_eq!(halves.len(), 2);
        assert_eq!(halves[1], Block { x: 0, y: 8, width: 16, height: 8, index: 1 });
    }

    #[test]
    fn test_partition_invalid_size() {
        let block = Block::new(0, 0, 4, 4);
        assert!(matches!(block.partition(2, 3), Err(Error::InvalidGeometry(_))));
        assert!(matches!(block.partition(0, 4), Err(Error::InvalidGeometry(_))));
        assert!(matches!(block.partition(8, 4), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_view_read_write() {
        let mut pixels = ramp(4);
        let mut view = PixelView::new(&mut pixels, 4, Block::new(0, 0, 4, 4)).unwrap();
        assert_eq!(view.get(1, 2).unwrap(), 9);
        view.set(1, 2, 42);
        assert_eq!(view.get(1, 2).unwrap(), 42);
        assert_eq!(pixels[9], 42);
    }

    #[test]
    fn test_view_neighbors() {
        let mut pixels = ramp(4);
        let view = PixelView::new(&mut pixels, 4, Block::new(1, 1, 2, 2)).unwrap();

        assert_eq!(view.get(-1, 0).unwrap(), 4);
        assert_eq!(view.get(-1, 1).unwrap(), 8);
        assert_eq!(view.get(1, -1).unwrap(), 2);
        assert_eq!(view.get(0, -1).unwrap(), 1);
        assert_eq!(view.get(-1, -1).unwrap(), 0);
        assert_eq!(view.get(2, -1).unwrap(), 3);
        // Past the plane edge, wraps into the next row
        assert_eq!(view.get(3, -1).unwrap(), 4);

        for &(x, y) in &[(-1, 2), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (4, -1), (-2, 0), (0, -2)] {
            assert!(matches!(view.get(x, y), Err(Error::InvalidGeometry(_))), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_view_above_right_at_right_edge() {
        let mut pixels = ramp(4);
        let view = PixelView::new(&mut pixels, 4, Block::new(2, 2, 2, 2)).unwrap();
        assert_eq!(view.get(-1, -1).unwrap(), 5);
        assert_eq!(view.get(1, -1).unwrap(), 7);
        assert_eq!(view.get(2, -1).unwrap(), 8);
        assert_eq!(view.get(3, -1).unwrap(), 9);
        assert!(view.get(4, -1).is_err());
    }

    #[test]
    fn test_view_no_border_at_plane_edge() {
        let mut pixels = ramp(4);
        let view = PixelView::new(&mut pixels, 4, Block::new(0, 2, 2, 2)).unwrap();
        assert!(view.get(-1, 0).is_err());
        assert!(view.get(-1, -1).is_err());
        assert_eq!(view.get(0, -1).unwrap(), 4);

        let view = PixelView::new(&mut pixels, 4, Block::new(2, 0, 2, 2)).unwrap();
        assert!(view.get(0, -1).is_err());
        assert_eq!(view.get(-1, 1).unwrap(), 5);
    }

    #[test]
    fn test_view_outside_plane() {
        let mut pixels = ramp(4);
        assert!(PixelView::new(&mut pixels, 4, Block::new(2, 2, 4, 2)).is_err());
        assert!(PixelView::new(&mut pixels, 4, Block::new(0, 3, 2, 2)).is_err());
        assert!(PixelView::new(&mut pixels, 3, Block::new(0, 0, 2, 2)).is_err());
    }

    #[test]
    fn test_sub_views() {
        let mut pixels = ramp(8);
        let mut view = PixelView::new(&mut pixels, 8, Block::new(0, 0, 8, 8)).unwrap();
        let blocks: Vec<_> = view.partition(4, 4).unwrap().collect();
        assert_eq!(blocks.len(), 4);

        let mut sub = view.sub_view(blocks[3]).unwrap();
        assert_eq!((sub.x(), sub.y(), sub.index()), (4, 4, 3));
        assert_eq!(sub.get(1, 1).unwrap(), 45);
        assert_eq!(sub.get(-1, -1).unwrap(), 27);

        let mut inner = sub.sub_view(Block::new(6, 6, 2, 2)).unwrap();
        inner.fill(7);
        assert!(view.sub_view(Block::new(6, 6, 4, 4)).is_err());
        assert_eq!(view.get(7, 7).unwrap(), 7);
        assert_eq!(view.get(5, 5).unwrap(), 45);
    }

    #[test]
    fn test_add_residual_saturates() {
        let mut pixels = vec![100; 16];
        let mut view = PixelView::new(&mut pixels, 4, Block::new(0, 0, 2, 2)).unwrap();
        view.add_residual(&[-200, 200, 5, -5]);
        assert_eq!(&pixels[..6], &[0, 255, 100, 100, 105, 95]);
    }
}
