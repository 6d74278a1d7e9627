//! Static tables of the Mobiclip video codec.

use crate::huffman::INDEX_TABLE_BITS;

// (size, code, last, run, level), inter coefficient codes
#[rustfmt::skip]
pub static RESIDUAL_CODES_INTER: [(u8, u16, u8, u8, u8); 102] = [
    (2, 0x02, 0, 0, 1), (4, 0x0F, 0, 0, 2), (6, 0x15, 0, 0, 3), (7, 0x17, 0, 0, 4),
    (8, 0x1F, 0, 0, 5), (9, 0x25, 0, 0, 6), (9, 0x24, 0, 0, 7), (10, 0x21, 0, 0, 8),
    (10, 0x20, 0, 0, 9), (11, 0x07, 0, 0, 10), (11, 0x06, 0, 0, 11), (11, 0x20, 0, 0, 12),
    (3, 0x06, 0, 1, 1), (6, 0x14, 0, 1, 2), (8, 0x1E, 0, 1, 3), (10, 0x0F, 0, 1, 4),
    (11, 0x21, 0, 1, 5), (12, 0x50, 0, 1, 6),
    (4, 0x0E, 0, 2, 1), (8, 0x1D, 0, 2, 2), (10, 0x0E, 0, 2, 3), (12, 0x51, 0, 2, 4),
    (5, 0x0D, 0, 3, 1), (9, 0x23, 0, 3, 2), (10, 0x0D, 0, 3, 3),
    (5, 0x0C, 0, 4, 1), (9, 0x22, 0, 4, 2), (12, 0x52, 0, 4, 3),
    (5, 0x0B, 0, 5, 1), (10, 0x0C, 0, 5, 2), (12, 0x53, 0, 5, 3),
    (6, 0x13, 0, 6, 1), (10, 0x0B, 0, 6, 2), (12, 0x54, 0, 6, 3),
    (6, 0x12, 0, 7, 1), (10, 0x0A, 0, 7, 2),
    (6, 0x11, 0, 8, 1), (10, 0x09, 0, 8, 2),
    (6, 0x10, 0, 9, 1), (10, 0x08, 0, 9, 2),
    (7, 0x16, 0, 10, 1), (12, 0x55, 0, 10, 2),
    (7, 0x15, 0, 11, 1),
    (7, 0x14, 0, 12, 1),
    (8, 0x1C, 0, 13, 1),
    (8, 0x1B, 0, 14, 1),
    (9, 0x21, 0, 15, 1),
    (9, 0x20, 0, 16, 1),
    (9, 0x1F, 0, 17, 1),
    (9, 0x1E, 0, 18, 1),
    (9, 0x1D, 0, 19, 1),
    (9, 0x1C, 0, 20, 1),
    (9, 0x1B, 0, 21, 1),
    (9, 0x1A, 0, 22, 1),
    (11, 0x22, 0, 23, 1),
    (11, 0x23, 0, 24, 1),
    (12, 0x56, 0, 25, 1),
    (12, 0x57, 0, 26, 1),
    (4, 0x07, 1, 0, 1), (9, 0x19, 1, 0, 2), (11, 0x05, 1, 0, 3),
    (6, 0x0F, 1, 1, 1), (11, 0x04, 1, 1, 2),
    (6, 0x0E, 1, 2, 1),
    (6, 0x0D, 1, 3, 1),
    (6, 0x0C, 1, 4, 1),
    (7, 0x13, 1, 5, 1),
    (7, 0x12, 1, 6, 1),
    (7, 0x11, 1, 7, 1),
    (7, 0x10, 1, 8, 1),
    (8, 0x1A, 1, 9, 1),
    (8, 0x19, 1, 10, 1),
    (8, 0x18, 1, 11, 1),
    (8, 0x17, 1, 12, 1),
    (8, 0x16, 1, 13, 1),
    (8, 0x15, 1, 14, 1),
    (8, 0x14, 1, 15, 1),
    (8, 0x13, 1, 16, 1),
    (9, 0x18, 1, 17, 1),
    (9, 0x17, 1, 18, 1),
    (9, 0x16, 1, 19, 1),
    (9, 0x15, 1, 20, 1),
    (9, 0x14, 1, 21, 1),
    (9, 0x13, 1, 22, 1),
    (9, 0x12, 1, 23, 1),
    (9, 0x11, 1, 24, 1),
    (10, 0x07, 1, 25, 1),
    (10, 0x06, 1, 26, 1),
    (10, 0x05, 1, 27, 1),
    (10, 0x04, 1, 28, 1),
    (11, 0x24, 1, 29, 1),
    (11, 0x25, 1, 30, 1),
    (11, 0x26, 1, 31, 1),
    (11, 0x27, 1, 32, 1),
    (12, 0x58, 1, 33, 1),
    (12, 0x59, 1, 34, 1),
    (12, 0x5A, 1, 35, 1),
    (12, 0x5B, 1, 36, 1),
    (12, 0x5C, 1, 37, 1),
    (12, 0x5D, 1, 38, 1),
    (12, 0x5E, 1, 39, 1),
    (12, 0x5F, 1, 40, 1),
];

// (size, code, last, run, level), intra coefficient codes
#[rustfmt::skip]
pub static RESIDUAL_CODES_INTRA: [(u8, u16, u8, u8, u8); 102] = [
    (2, 0x02, 0, 0, 1), (3, 0x06, 0, 0, 2), (4, 0x0F, 0, 0, 3), (5, 0x0D, 0, 0, 4),
    (5, 0x0C, 0, 0, 5), (6, 0x15, 0, 0, 6), (6, 0x13, 0, 0, 7), (6, 0x12, 0, 0, 8),
    (7, 0x17, 0, 0, 9), (8, 0x1F, 0, 0, 10), (8, 0x1E, 0, 0, 11), (8, 0x1D, 0, 0, 12),
    (9, 0x25, 0, 0, 13), (9, 0x24, 0, 0, 14), (9, 0x23, 0, 0, 15), (9, 0x21, 0, 0, 16),
    (10, 0x21, 0, 0, 17), (10, 0x20, 0, 0, 18), (10, 0x0F, 0, 0, 19), (10, 0x0E, 0, 0, 20),
    (11, 0x07, 0, 0, 21), (11, 0x06, 0, 0, 22), (11, 0x20, 0, 0, 23), (11, 0x21, 0, 0, 24),
    (12, 0x50, 0, 0, 25), (12, 0x51, 0, 0, 26), (12, 0x52, 0, 0, 27),
    (4, 0x0E, 0, 1, 1), (6, 0x14, 0, 1, 2), (7, 0x16, 0, 1, 3), (8, 0x1C, 0, 1, 4),
    (9, 0x20, 0, 1, 5), (9, 0x1F, 0, 1, 6), (10, 0x0D, 0, 1, 7), (11, 0x22, 0, 1, 8),
    (12, 0x53, 0, 1, 9), (12, 0x55, 0, 1, 10),
    (5, 0x0B, 0, 2, 1), (7, 0x15, 0, 2, 2), (9, 0x1E, 0, 2, 3), (10, 0x0C, 0, 2, 4),
    (12, 0x56, 0, 2, 5),
    (6, 0x11, 0, 3, 1), (8, 0x1B, 0, 3, 2), (9, 0x1D, 0, 3, 3), (10, 0x0B, 0, 3, 4),
    (6, 0x10, 0, 4, 1), (9, 0x22, 0, 4, 2), (10, 0x0A, 0, 4, 3),
    (6, 0x0D, 0, 5, 1), (9, 0x1C, 0, 5, 2), (10, 0x08, 0, 5, 3),
    (7, 0x12, 0, 6, 1), (9, 0x1B, 0, 6, 2), (12, 0x54, 0, 6, 3),
    (7, 0x14, 0, 7, 1), (9, 0x1A, 0, 7, 2), (12, 0x57, 0, 7, 3),
    (8, 0x19, 0, 8, 1), (10, 0x09, 0, 8, 2),
    (8, 0x18, 0, 9, 1), (11, 0x23, 0, 9, 2),
    (8, 0x17, 0, 10, 1),
    (9, 0x19, 0, 11, 1),
    (9, 0x18, 0, 12, 1),
    (10, 0x07, 0, 13, 1),
    (12, 0x58, 0, 14, 1),
    (4, 0x07, 1, 0, 1), (6, 0x0C, 1, 0, 2), (8, 0x16, 1, 0, 3), (9, 0x17, 1, 0, 4),
    (10, 0x06, 1, 0, 5), (11, 0x05, 1, 0, 6), (11, 0x04, 1, 0, 7), (12, 0x59, 1, 0, 8),
    (6, 0x0F, 1, 1, 1), (9, 0x16, 1, 1, 2), (10, 0x05, 1, 1, 3),
    (6, 0x0E, 1, 2, 1), (10, 0x04, 1, 2, 2),
    (7, 0x11, 1, 3, 1), (11, 0x24, 1, 3, 2),
    (7, 0x10, 1, 4, 1), (11, 0x25, 1, 4, 2),
    (7, 0x13, 1, 5, 1), (12, 0x5A, 1, 5, 2),
    (8, 0x15, 1, 6, 1), (12, 0x5B, 1, 6, 2),
    (8, 0x14, 1, 7, 1),
    (8, 0x13, 1, 8, 1),
    (8, 0x1A, 1, 9, 1),
    (9, 0x15, 1, 10, 1),
    (9, 0x14, 1, 11, 1),
    (9, 0x13, 1, 12, 1),
    (9, 0x12, 1, 13, 1),
    (9, 0x11, 1, 14, 1),
    (11, 0x26, 1, 15, 1),
    (11, 0x27, 1, 16, 1),
    (12, 0x5C, 1, 17, 1),
    (12, 0x5D, 1, 18, 1),
    (12, 0x5E, 1, 19, 1),
    (12, 0x5F, 1, 20, 1),
];
/// Expands a coefficient code list into the flat 13-bit lookup layout,
/// `(value << 4) | size` repeated over every slot the code prefixes.
/// Unassigned slots hold the 1-bit padding marker.
pub fn residual_index_table(codes: &[(u8, u16, u8, u8, u8)]) -> Vec<u16> {
    let mut table = vec![0x0001; 1 << INDEX_TABLE_BITS];
    for &(size, code, last, run, level) in codes {
        let value = ((last as u16) << 11) | ((run as u16) << 5) | level as u16;
        let free_bits = INDEX_TABLE_BITS - size as usize;
        let start = (code as usize) << free_bits;
        for slot in &mut table[start..start + (1 << free_bits)] {
            *slot = (value << 4) | size as u16;
        }
    }
    table
}

// Escape increments, four 64 entry sections:
// level by run (last = 0), level by run (last = 1),
// run by level (last = 0), run by level (last = 1)
#[rustfmt::skip]
pub static RESIDUE_INTER: [u8; 256] = [
    12, 6, 4, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 27, 11, 7, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 41, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

#[rustfmt::skip]
pub static RESIDUE_INTRA: [u8; 256] = [
    27, 10, 5, 4, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    8, 3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 15, 10, 8, 4, 3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 21, 7, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

#[rustfmt::skip]
pub static QUANT_4X4: [[i32; 16]; 6] = [
    [10, 13, 13, 10, 16, 10, 13, 13, 13, 13, 16, 10, 16, 13, 13, 16],
    [11, 14, 14, 11, 18, 11, 14, 14, 14, 14, 18, 11, 18, 14, 14, 18],
    [13, 16, 16, 13, 20, 13, 16, 16, 16, 16, 20, 13, 20, 16, 16, 20],
    [14, 18, 18, 14, 23, 14, 18, 18, 18, 18, 23, 14, 23, 18, 18, 23],
    [16, 20, 20, 16, 25, 16, 20, 20, 20, 20, 25, 16, 25, 20, 20, 25],
    [18, 23, 23, 18, 29, 18, 23, 23, 23, 23, 29, 18, 29, 23, 23, 29],
];

#[rustfmt::skip]
pub static QUANT_8X8: [[i32; 64]; 6] = [
    [
        20, 19, 19, 25, 18, 25, 19, 24, 24, 19, 20, 18, 32, 18, 20, 19,
        19, 24, 24, 19, 19, 25, 18, 25, 18, 25, 18, 25, 19, 24, 24, 19,
        19, 24, 24, 19, 18, 32, 18, 20, 18, 32, 18, 24, 24, 19, 19, 24,
        24, 18, 25, 18, 25, 18, 19, 24, 24, 19, 18, 32, 18, 24, 24, 18,
    ],
    [
        22, 21, 21, 28, 19, 28, 21, 26, 26, 21, 22, 19, 35, 19, 22, 21,
        21, 26, 26, 21, 21, 28, 19, 28, 19, 28, 19, 28, 21, 26, 26, 21,
        21, 26, 26, 21, 19, 35, 19, 22, 19, 35, 19, 26, 26, 21, 21, 26,
        26, 19, 28, 19, 28, 19, 21, 26, 26, 21, 19, 35, 19, 26, 26, 19,
    ],
    [
        26, 24, 24, 33, 23, 33, 24, 31, 31, 24, 26, 23, 42, 23, 26, 24,
        24, 31, 31, 24, 24, 33, 23, 33, 23, 33, 23, 33, 24, 31, 31, 24,
        24, 31, 31, 24, 23, 42, 23, 26, 23, 42, 23, 31, 31, 24, 24, 31,
        31, 23, 33, 23, 33, 23, 24, 31, 31, 24, 23, 42, 23, 31, 31, 23,
    ],
    [
        28, 26, 26, 35, 25, 35, 26, 33, 33, 26, 28, 25, 45, 25, 28, 26,
        26, 33, 33, 26, 26, 35, 25, 35, 25, 35, 25, 35, 26, 33, 33, 26,
        26, 33, 33, 26, 25, 45, 25, 28, 25, 45, 25, 33, 33, 26, 26, 33,
        33, 25, 35, 25, 35, 25, 26, 33, 33, 26, 25, 45, 25, 33, 33, 25,
    ],
    [
        32, 30, 30, 40, 28, 40, 30, 38, 38, 30, 32, 28, 51, 28, 32, 30,
        30, 38, 38, 30, 30, 40, 28, 40, 28, 40, 28, 40, 30, 38, 38, 30,
        30, 38, 38, 30, 28, 51, 28, 32, 28, 51, 28, 38, 38, 30, 30, 38,
        38, 28, 40, 28, 40, 28, 30, 38, 38, 30, 28, 51, 28, 38, 38, 28,
    ],
    [
        36, 34, 34, 46, 32, 46, 34, 43, 43, 34, 36, 32, 58, 32, 36, 34,
        34, 43, 43, 34, 34, 46, 32, 46, 32, 46, 32, 46, 34, 43, 43, 34,
        34, 43, 43, 34, 32, 58, 32, 36, 32, 58, 32, 43, 43, 34, 34, 43,
        43, 32, 46, 32, 46, 32, 34, 43, 43, 34, 32, 58, 32, 43, 43, 32,
    ],
];
#[rustfmt::skip]
pub static SCAN_4X4: [usize; 16] = [
    0, 4, 1, 2, 5, 8, 12, 9, 6, 3, 7, 10, 13, 14, 11, 15,
];

#[rustfmt::skip]
pub static SCAN_8X8: [usize; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10, 17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34, 27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36, 29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46, 53, 60, 61, 54, 47, 55, 62, 63,
];

// Coded block patterns: bits 0-3 luma 8x8 quadrants in raster order,
// bit 4 chroma U, bit 5 chroma V
#[rustfmt::skip]
pub static INTRA_CBP: [u8; 64] = [
    0x00, 0x1F, 0x3F, 0x0F, 0x08, 0x04, 0x02, 0x01, 0x0B, 0x0E, 0x1B, 0x0D, 0x03, 0x07, 0x0C, 0x17,
    0x1D, 0x0A, 0x1E, 0x05, 0x10, 0x2F, 0x37, 0x3B, 0x13, 0x3D, 0x3E, 0x09, 0x1C, 0x06, 0x15, 0x1A,
    0x33, 0x11, 0x12, 0x14, 0x18, 0x20, 0x3C, 0x35, 0x19, 0x16, 0x3A, 0x30, 0x31, 0x32, 0x27, 0x34,
    0x2B, 0x2D, 0x39, 0x38, 0x23, 0x36, 0x2E, 0x21, 0x25, 0x22, 0x24, 0x2C, 0x2A, 0x28, 0x29, 0x26,
];

#[rustfmt::skip]
pub static INTER_CBP: [u8; 64] = [
    0x00, 0x0F, 0x04, 0x01, 0x08, 0x02, 0x0C, 0x03, 0x05, 0x0A, 0x0D, 0x07, 0x0E, 0x0B, 0x1F, 0x09,
    0x06, 0x10, 0x3F, 0x1E, 0x17, 0x1D, 0x1B, 0x1C, 0x13, 0x18, 0x1A, 0x12, 0x11, 0x14, 0x15, 0x20,
    0x2F, 0x16, 0x19, 0x37, 0x3D, 0x3E, 0x3B, 0x3C, 0x33, 0x35, 0x21, 0x24, 0x22, 0x28, 0x23, 0x2C,
    0x30, 0x27, 0x2D, 0x25, 0x3A, 0x2B, 0x2E, 0x2A, 0x31, 0x34, 0x38, 0x32, 0x29, 0x26, 0x39, 0x36,
];

// 4x4 residual masks of a split 8x8, one bit per 4x4 in raster order.
// Intra partition flags index this with `flag - 1`.
pub static INTRA_PARTITION: [u8; 16] = [15, 0, 2, 1, 4, 8, 12, 3, 11, 13, 14, 7, 10, 5, 9, 6];

// Inter partition flags index this directly, 0 means no split
pub static INTER_PARTITION: [u8; 16] = [0, 4, 1, 8, 2, 12, 3, 5, 10, 15, 7, 13, 14, 11, 9, 6];

/// Canonical motion mode code for one block size, see `HuffmanTree::from_symbols`.
pub struct MotionModeCode {
    pub width: usize,
    pub height: usize,
    pub symbols: &'static [u8],
    pub code_sizes: &'static [u8],
}

#[rustfmt::skip]
pub static MOTION_MODE_CODES: [MotionModeCode; 16] = [
    MotionModeCode {
        width: 16, height: 16,
        symbols: &[
            1, 1, 1, 1, 1, 1, 1, 1, 8, 8, 8, 8, 9, 9, 9, 9,
            4, 3, 2, 2, 7, 7, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0,
        ],
        code_sizes: &[2, 2, 4, 5, 5, 5, 5, 4, 3, 3],
    },
    MotionModeCode {
        width: 8, height: 16,
        symbols: &[0, 0, 0, 0, 9, 9, 5, 4, 2, 2, 3, 8, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 4, 4, 4, 0, 0, 4, 3],
    },
    MotionModeCode {
        width: 4, height: 16,
        symbols: &[3, 3, 9, 5, 0, 0, 0, 0, 4, 8, 2, 2, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 4, 4, 0, 0, 4, 4],
    },
    MotionModeCode {
        width: 2, height: 16,
        symbols: &[
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            3, 3, 3, 3, 4, 4, 8, 5, 2, 2, 2, 2, 0, 0, 0, 0,
        ],
        code_sizes: &[3, 1, 3, 3, 4, 5, 0, 0, 5],
    },
    MotionModeCode {
        width: 16, height: 8,
        symbols: &[0, 0, 0, 0, 5, 4, 8, 8, 2, 2, 3, 9, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 4, 4, 4, 0, 0, 3, 4],
    },
    MotionModeCode {
        width: 16, height: 4,
        symbols: &[0, 0, 0, 0, 3, 3, 8, 4, 2, 2, 5, 9, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 4, 4, 0, 0, 4, 4],
    },
    MotionModeCode {
        width: 16, height: 2,
        symbols: &[1, 1, 1, 1, 1, 1, 1, 1, 9, 4, 2, 2, 0, 0, 5, 3],
        code_sizes: &[3, 1, 3, 4, 4, 4, 0, 0, 0, 4],
    },
    MotionModeCode {
        width: 8, height: 8,
        symbols: &[0, 0, 0, 0, 3, 3, 5, 9, 4, 8, 2, 2, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 4, 4, 0, 0, 4, 4],
    },
    MotionModeCode {
        width: 8, height: 4,
        symbols: &[2, 2, 2, 2, 8, 9, 3, 3, 5, 4, 0, 0, 1, 1, 1, 1],
        code_sizes: &[3, 2, 2, 3, 4, 4, 0, 0, 4, 4],
    },
    MotionModeCode {
        width: 8, height: 2,
        symbols: &[2, 2, 2, 2, 4, 4, 9, 5, 3, 3, 0, 0, 1, 1, 1, 1],
        code_sizes: &[3, 2, 2, 3, 3, 4, 0, 0, 0, 4],
    },
    MotionModeCode {
        width: 4, height: 8,
        symbols: &[0, 0, 0, 0, 3, 3, 9, 5, 8, 4, 2, 2, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 4, 4, 0, 0, 4, 4],
    },
    MotionModeCode {
        width: 2, height: 8,
        symbols: &[
            0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2,
            3, 3, 3, 3, 4, 4, 8, 5, 1, 1, 1, 1, 1, 1, 1, 1,
        ],
        code_sizes: &[2, 2, 2, 3, 4, 5, 0, 0, 5],
    },
    MotionModeCode {
        width: 4, height: 4,
        symbols: &[
            0, 0, 0, 0, 0, 0, 0, 0, 4, 4, 4, 4, 3, 3, 3, 3,
            8, 9, 5, 5, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1,
        ],
        code_sizes: &[2, 2, 3, 3, 3, 4, 0, 0, 5, 5],
    },
    MotionModeCode {
        width: 4, height: 2,
        symbols: &[0, 0, 0, 0, 4, 4, 9, 5, 3, 3, 2, 2, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 3, 4, 0, 0, 0, 4],
    },
    MotionModeCode {
        width: 2, height: 4,
        symbols: &[0, 0, 0, 0, 4, 4, 8, 5, 3, 3, 2, 2, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 3, 4, 0, 0, 4],
    },
    MotionModeCode {
        width: 2, height: 2,
        symbols: &[5, 4, 1, 1, 0, 0, 3, 2],
        code_sizes: &[2, 2, 3, 3, 3, 3],
    },
];

#[rustfmt::skip]
pub static STEREO_MOTION_MODE_CODES: [MotionModeCode; 16] = [
    MotionModeCode {
        width: 16, height: 16,
        symbols: &[
            8, 8, 8, 8, 8, 8, 8, 8, 2, 2, 2, 2, 3, 3, 6, 6,
            1, 1, 1, 1, 1, 1, 1, 1, 7, 7, 5, 4, 9, 9, 9, 9,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ],
        code_sizes: &[1, 3, 4, 5, 6, 6, 5, 5, 3, 4],
    },
    MotionModeCode {
        width: 8, height: 16,
        symbols: &[
            9, 9, 9, 9, 9, 9, 9, 9, 2, 2, 2, 2, 3, 3, 5, 4,
            1, 1, 1, 1, 1, 1, 1, 1, 8, 8, 8, 8, 0, 0, 0, 0,
        ],
        code_sizes: &[3, 2, 3, 4, 5, 5, 0, 0, 3, 2],
    },
    MotionModeCode {
        width: 4, height: 16,
        symbols: &[0, 0, 0, 0, 5, 4, 2, 2, 9, 9, 3, 8, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 4, 4, 4, 0, 0, 4, 3],
    },
    MotionModeCode {
        width: 2, height: 16,
        symbols: &[1, 1, 1, 1, 1, 1, 1, 1, 5, 4, 2, 2, 8, 3, 0, 0],
        code_sizes: &[3, 1, 3, 4, 4, 4, 0, 0, 4],
    },
    MotionModeCode {
        width: 16, height: 8,
        symbols: &[
            2, 2, 2, 2, 9, 9, 9, 9, 8, 8, 8, 8, 8, 8, 8, 8,
            3, 3, 5, 4, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1,
        ],
        code_sizes: &[3, 2, 3, 4, 5, 5, 0, 0, 2, 3, 0, 0],
    },
    MotionModeCode {
        width: 16, height: 4,
        symbols: &[0, 0, 0, 0, 5, 4, 2, 2, 8, 8, 3, 9, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 4, 4, 4, 0, 0, 3, 4],
    },
    MotionModeCode {
        width: 16, height: 2,
        symbols: &[1, 1, 1, 1, 1, 1, 1, 1, 5, 4, 2, 2, 0, 0, 9, 3],
        code_sizes: &[3, 1, 3, 4, 4, 4, 0, 0, 0, 4],
    },
    MotionModeCode {
        width: 8, height: 8,
        symbols: &[3, 3, 5, 4, 2, 2, 9, 9, 8, 8, 0, 0, 1, 1, 1, 1],
        code_sizes: &[3, 2, 3, 3, 4, 4, 0, 0, 3, 3],
    },
    MotionModeCode {
        width: 8, height: 4,
        symbols: &[
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            2, 2, 2, 2, 0, 0, 0, 0, 9, 9, 8, 8, 3, 3, 5, 4,
        ],
        code_sizes: &[3, 1, 3, 4, 5, 5, 0, 0, 4, 4],
    },
    MotionModeCode {
        width: 8, height: 2,
        symbols: &[1, 1, 1, 1, 1, 1, 1, 1, 9, 5, 2, 2, 0, 0, 4, 3],
        code_sizes: &[3, 1, 3, 4, 4, 4, 0, 0, 0, 4],
    },
    MotionModeCode {
        width: 4, height: 8,
        symbols: &[
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            2, 2, 2, 2, 0, 0, 0, 0, 9, 9, 8, 8, 3, 3, 5, 4,
        ],
        code_sizes: &[3, 1, 3, 4, 5, 5, 0, 0, 4, 4],
    },
    MotionModeCode {
        width: 2, height: 8,
        symbols: &[1, 1, 1, 1, 1, 1, 1, 1, 8, 5, 2, 2, 0, 0, 4, 3],
        code_sizes: &[3, 1, 3, 4, 4, 4, 0, 0, 4],
    },
    MotionModeCode {
        width: 4, height: 4,
        symbols: &[0, 0, 0, 0, 3, 3, 9, 8, 5, 4, 2, 2, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 4, 4, 0, 0, 4, 4],
    },
    MotionModeCode {
        width: 4, height: 2,
        symbols: &[0, 0, 0, 0, 5, 5, 3, 3, 9, 4, 2, 2, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 4, 3, 0, 0, 0, 4],
    },
    MotionModeCode {
        width: 2, height: 4,
        symbols: &[0, 0, 0, 0, 4, 4, 3, 3, 8, 5, 2, 2, 1, 1, 1, 1],
        code_sizes: &[2, 2, 3, 3, 3, 4, 0, 0, 4, 0],
    },
    MotionModeCode {
        width: 2, height: 2,
        symbols: &[0, 0, 4, 5, 3, 2, 1, 1],
        code_sizes: &[2, 2, 3, 3, 3, 3],
    },
];
