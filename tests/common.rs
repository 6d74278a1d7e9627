/// Key frame of a 256x192 video, YCoCg, residual table 1, qp 24. Decodes
/// to a near black picture with neutral chroma.
#[rustfmt::skip]
pub const INTRA_FRAME: [u8; 224] = [
    0x07, 0xAC, 0x3E, 0x38, 0xCD, 0x07, 0x7B, 0x5F, 0xFE, 0xFC, 0x3F, 0x7F,
    0xCF, 0x9F, 0xF3, 0xE7, 0xFC, 0xF9, 0x7F, 0xFE, 0x9F, 0x3F, 0xE7, 0xCF,
    0xF8, 0xF3, 0x7E, 0xFC, 0x1F, 0x3F, 0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8,
    0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7, 0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F,
    0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8, 0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7,
    0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F, 0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8,
    0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7, 0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F,
    0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8, 0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7,
    0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F, 0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8,
    0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7, 0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F,
    0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8, 0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7,
    0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F, 0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8,
    0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7, 0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F,
    0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8, 0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7,
    0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F, 0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8,
    0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7, 0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F,
    0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8, 0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7,
    0xF8, 0xF1, 0x7E, 0xFC, 0x1F, 0x3F, 0xC7, 0x8F, 0xF1, 0xE3, 0xFC, 0xF8,
    0x3F, 0x7E, 0x8F, 0x1F, 0xE3, 0xC7, 0x00, 0xF0,
];

pub const WIDTH: usize = 256;
pub const HEIGHT: usize = 192;

/// Packs bits MSB-first into 16-bit little-endian words, the way video
/// packets are laid out.
#[derive(Default)]
pub struct BitPacker {
    bytes: Vec<u8>,
    word: u16,
    len: usize,
}

impl BitPacker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: u32, count: usize) -> &mut Self {
        for i in (0..count).rev() {
            self.word = self.word << 1 | ((value >> i) & 1) as u16;
            self.len += 1;
            if self.len == 16 {
                self.flush();
            }
        }
        self
    }

    /// Writes `value` as an Exp-Golomb code.
    pub fn push_exp_golomb(&mut self, value: u32) -> &mut Self {
        let code = value + 1;
        let bits = 32 - code.leading_zeros() as usize;
        self.push(0, bits - 1).push(code, bits)
    }

    pub fn finish(&mut self) -> Vec<u8> {
        if self.len > 0 {
            self.word <<= 16 - self.len;
            self.flush();
        }
        std::mem::take(&mut self.bytes)
    }

    fn flush(&mut self) {
        self.bytes.extend_from_slice(&self.word.to_le_bytes());
        self.word = 0;
        self.len = 0;
    }
}
