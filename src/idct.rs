//! Integer inverse transform for 4x4 and 8x8 coefficient blocks.

const DC_BIAS: i32 = 32;
const OUTPUT_SHIFT: u32 = 6;

fn butterfly4(r0: i32, r1: i32, r2: i32, r3: i32) -> [i32; 4] {
    let a = r0.wrapping_add(r2);
    let b = r0.wrapping_sub(r2);
    let c = r1.wrapping_add(r3 >> 1);
    let d = (r1 >> 1).wrapping_sub(r3);
    [a.wrapping_add(c), b.wrapping_add(d), b.wrapping_sub(d), a.wrapping_sub(c)]
}

fn transform_row4(row: &mut [i32]) {
    let out = butterfly4(row[0], row[1], row[2], row[3]);
    row.copy_from_slice(&out);
}

fn transform_row8(row: &mut [i32]) {
    let even = butterfly4(row[0], row[2], row[4], row[6]);
    let (r1, r3, r5, r7) = (row[1], row[3], row[5], row[7]);

    let e = r7.wrapping_add(r1).wrapping_sub(r3).wrapping_sub(r3 >> 1);
    let f = r7.wrapping_sub(r1).wrapping_add(r5).wrapping_add(r5 >> 1);
    let g = r5.wrapping_sub(r3).wrapping_sub(r7).wrapping_sub(r7 >> 1);
    let h = r5.wrapping_add(r3).wrapping_add(r1).wrapping_add(r1 >> 1);

    let odd = [
        h.wrapping_sub(g >> 2),
        (e >> 2).wrapping_sub(f),
        e.wrapping_add(f >> 2),
        g.wrapping_add(h >> 2),
    ];

    for i in 0..4 {
        row[i] = even[i].wrapping_add(odd[i]);
        row[7 - i] = even[i].wrapping_sub(odd[i]);
    }
}

fn transpose(block: &mut [i32], size: usize) {
    for y in 0..size {
        for x in y + 1..size {
            block.swap(y * size + x, x * size + y);
        }
    }
}

/// Inverse transform in place. `block` holds 16 or 64 coefficients and
/// receives the de-scaled residual, row-major.
pub fn inverse_transform(block: &mut [i32]) {
    let size = if block.len() == 16 { 4 } else { 8 };
    let transform_row = if size == 4 { transform_row4 } else { transform_row8 };

    block[0] = block[0].wrapping_add(DC_BIAS);
    for row in block.chunks_exact_mut(size) {
        transform_row(row);
    }
    transpose(block, size);
    for row in block.chunks_exact_mut(size) {
        transform_row(row);
        for v in row.iter_mut() {
            *v >>= OUTPUT_SHIFT;
        }
    }
}
