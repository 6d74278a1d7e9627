use crate::tables::{QUANT_4X4, QUANT_8X8};
use crate::{Error, Result};

pub const MIN_QP: i32 = 12;
pub const MAX_QP: i32 = 161;

/// Dequantization scales for one quantizer index, in scan order.
#[derive(Clone)]
pub struct Quantizer {
    qp: i32,
    scale_4x4: [i32; 16],
    scale_8x8: [i32; 64],
}

impl Quantizer {
    pub fn new(qp: i32) -> Result<Self> {
        if !(MIN_QP..=MAX_QP).contains(&qp) {
            return Err(Error::FormatError(format!(
                "Quantizer index {} outside {}..={}", qp, MIN_QP, MAX_QP
            )));
        }

        let row = (qp % 6) as usize;
        let shift = (qp / 6) as u32;

        let mut scale_4x4 = [0; 16];
        for (scale, &q) in scale_4x4.iter_mut().zip(QUANT_4X4[row].iter()) {
            *scale = q << shift;
        }
        // 8x8 scales are normalized two bits lower
        let mut scale_8x8 = [0; 64];
        for (scale, &q) in scale_8x8.iter_mut().zip(QUANT_8X8[row].iter()) {
            *scale = q << (shift - 2);
        }

        Ok(Self { qp, scale_4x4, scale_8x8 })
    }

    pub fn qp(&self) -> i32 {
        self.qp
    }

    /// Scales for a block of `len` coefficients (16 or 64).
    pub fn scales(&self, len: usize) -> &[i32] {
        if len == 16 {
            &self.scale_4x4
        } else {
            &self.scale_8x8
        }
    }

    pub fn dequantize(&self, len: usize, pos: usize, level: i32) -> i32 {
        self.scales(len)[pos].wrapping_mul(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales() {
        let q = Quantizer::new(24).unwrap();
        assert_eq!(q.qp(), 24);
        // 24 = 4 * 6, row 0
        assert_eq!(q.scales(16)[..4], [160, 208, 208, 160]);
        assert_eq!(q.scales(64)[..4], [80, 76, 76, 100]);

        let q = Quantizer::new(29).unwrap();
        assert_eq!(q.scales(16)[0], 18 << 4);
        assert_eq!(q.scales(64)[0], 36 << 2);
    }

    #[test]
    fn test_dequantize() {
        let q = Quantizer::new(12).unwrap();
        assert_eq!(q.dequantize(16, 0, 3), 120);
        assert_eq!(q.dequantize(16, 4, -1), -64);
        assert_eq!(q.dequantize(64, 3, 2), 50);
    }

    #[test]
    fn test_range() {
        assert!(Quantizer::new(MIN_QP).is_ok());
        assert!(Quantizer::new(MAX_QP).is_ok());
        assert!(matches!(Quantizer::new(11), Err(Error::FormatError(_))));
        assert!(matches!(Quantizer::new(162), Err(Error::FormatError(_))));
        assert!(Quantizer::new(-3).is_err());
    }
}
