use std::fmt;
use std::ops::{Index, IndexMut};

use crate::frame::Frame;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Color32(pub [u8; 4]);

impl Color32 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn from_ycocg(y: u8, co: u8, cg: u8) -> Self {
        let y = y as i32;
        let co = co as i32 - 128;
        let cg = cg as i32 - 128;
        let tmp = y - cg;
        Self::new(clamp(tmp + co), clamp(y + cg), clamp(tmp - co), 0xFF)
    }

    /// Full range BT.601.
    pub fn from_ycbcr(y: u8, cb: u8, cr: u8) -> Self {
        let y = y as i32;
        let cb = cb as i32 - 128;
        let cr = cr as i32 - 128;
        Self::new(
            clamp(y + ((359 * cr) >> 8)),
            clamp(y - ((88 * cb + 183 * cr) >> 8)),
            clamp(y + ((454 * cb) >> 8)),
            0xFF,
        )
    }

    pub fn into_rgba_bytes(data: Vec<Self>) -> Vec<u8> {
        let mut result = vec![0u8; data.len() * 4];

        for (chunk, color) in result.chunks_exact_mut(4).zip(data.into_iter()) {
            chunk.copy_from_slice(&color.0);
        }

        result
    }

    pub fn to_rgba_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }
}

impl fmt::Debug for Color32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:08X}", self.to_rgba_u32())
    }
}

impl Index<usize> for Color32 {
    type Output = u8;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Color32 {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

fn clamp(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Packed RGBA pixels of a YCoCg frame.
pub fn ycocg_to_rgba(frame: &Frame) -> Vec<u8> {
    convert(frame, Color32::from_ycocg)
}

/// Packed RGBA pixels of a YCbCr frame.
pub fn ycbcr_to_rgba(frame: &Frame) -> Vec<u8> {
    convert(frame, Color32::from_ycbcr)
}

fn convert(frame: &Frame, pixel: impl Fn(u8, u8, u8) -> Color32) -> Vec<u8> {
    let width = frame.width();
    let chroma_width = width / 2;
    let (luma, u, v) = (frame.luma(), frame.chroma_u(), frame.chroma_v());

    let mut colors = Vec::with_capacity(width * frame.height());
    for y in 0..frame.height() {
        for x in 0..width {
            let chroma = (y / 2) * chroma_width + x / 2;
            colors.push(pixel(luma[y * width + x], u[chroma], v[chroma]));
        }
    }
    Color32::into_rgba_bytes(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ColorSpace;

    #[test]
    fn test_ycocg() {
        assert_eq!(Color32::from_ycocg(0, 128, 128), Color32::new(0, 0, 0, 255));
        assert_eq!(Color32::from_ycocg(100, 128, 128), Color32::new(100, 100, 100, 255));
        // tmp = 90, G = 110, B = 70, R = 110
        assert_eq!(Color32::from_ycocg(100, 148, 138), Color32::new(110, 110, 70, 255));
        assert_eq!(Color32::from_ycocg(250, 255, 0), Color32::new(255, 122, 251, 255));
    }

    #[test]
    fn test_ycbcr() {
        assert_eq!(Color32::from_ycbcr(128, 128, 128), Color32::new(128, 128, 128, 255));
        assert_eq!(Color32::from_ycbcr(255, 128, 255), Color32::new(255, 165, 255, 255));
        assert_eq!(Color32::from_ycbcr(0, 0, 0), Color32::new(0, 136, 0, 255));
    }

    #[test]
    fn test_frame_to_rgba() {
        let mut frame = Frame::new(4, 2);
        frame.data_mut().copy_from_slice(&[10, 20, 30, 40, 50, 60, 70, 80, 128, 148, 128, 138]);

        let rgba = frame.to_rgba();
        assert_eq!(rgba.len(), 4 * 2 * 4);
        assert_eq!(&rgba[..8], &[10, 10, 10, 255, 20, 20, 20, 255]);
        // Second chroma sample covers columns 2 and 3 of both rows
        assert_eq!(&rgba[8..12], &[40, 40, 0, 255]);
        assert_eq!(&rgba[28..32], &[90, 90, 50, 255]);

        frame.set_color_space(ColorSpace::YCbCr);
        assert_eq!(&frame.to_rgba()[..4], &[10, 10, 10, 255]);
        assert_eq!(&frame.to_rgba()[8..12], &[44, 16, 65, 255]);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Color32::new(0x11, 0x22, 0x33, 0x44)), "#44332211");
    }
}
