#![warn(clippy::all)]

mod common;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use png::{BitDepth, ColorType, Encoder};

use mobiclip::{ColorSpace, Decoder, DecoderConfig, Error, Frame};

use common::{BitPacker, HEIGHT, INTRA_FRAME, WIDTH};

fn decoder() -> Decoder {
    Decoder::new(DecoderConfig::new(WIDTH, HEIGHT)).unwrap()
}

/// P-frame where every macroblock copies the previous frame.
fn copy_frame() -> Vec<u8> {
    let mut packer = BitPacker::new();
    packer.push(0, 1).push_exp_golomb(0);
    for _ in 0..(WIDTH / 16) * (HEIGHT / 16) {
        // Mode 0, pattern 0
        packer.push(0b11, 2).push_exp_golomb(0);
    }
    packer.finish()
}

#[test]
fn test_decode_intra_frame() {
    let mut decoder = decoder();
    let frame = decoder.decode_frame(&INTRA_FRAME).unwrap();

    assert_eq!(frame.data().len(), 0x12000);
    assert_eq!(frame.color_space(), ColorSpace::YCoCg);
    assert!(frame.luma().iter().all(|&y| y <= 1));
    assert!(frame.chroma_u().iter().all(|&u| u == 0x80));
    assert!(frame.chroma_v().iter().all(|&v| v == 0x7F || v == 0x80));

    assert_eq!(decoder.quantizer_index(), 24);
    assert_eq!(decoder.consumed_bytes(), INTRA_FRAME.len());
}

#[test]
fn test_decode_is_deterministic() {
    let mut first = decoder();
    let mut second = Decoder::with_tables(*first.config(), first.tables().clone()).unwrap();

    let expected = first.decode_frame(&INTRA_FRAME).unwrap().data().to_vec();
    assert_eq!(second.decode_frame(&INTRA_FRAME).unwrap().data(), &expected[..]);
    // Same input again lands in another ring slot
    assert_eq!(first.decode_frame(&INTRA_FRAME).unwrap().data(), &expected[..]);
    assert_eq!(first.frames().get(1).unwrap().data(), &expected[..]);
}

#[test]
fn test_decode_copy_frame() {
    let mut decoder = decoder();
    let key_frame = decoder.decode_frame(&INTRA_FRAME).unwrap().data().to_vec();

    let data = copy_frame();
    let frame = decoder.decode_frame(&data).unwrap();
    assert_eq!(frame.data(), &key_frame[..]);
    assert_eq!(frame.color_space(), ColorSpace::YCoCg);
    assert_eq!(decoder.quantizer_index(), 24);
    assert_eq!(decoder.consumed_bytes(), data.len());
}

#[test]
fn test_vector_outside_frame() {
    let mut decoder = decoder();
    decoder.decode_frame(&INTRA_FRAME).unwrap();

    // Mode 1 with a vector of (-2, 0) in the top left macroblock
    let mut packer = BitPacker::new();
    packer.push(0, 1).push_exp_golomb(0);
    packer.push(0b00, 2).push_exp_golomb(4).push_exp_golomb(0).push_exp_golomb(0);
    let data = packer.finish();
    assert!(matches!(decoder.decode_frame(&data), Err(Error::FormatError(_))));
}

#[test]
fn test_truncated_frame() {
    let mut decoder = decoder();
    assert!(matches!(decoder.decode_frame(&INTRA_FRAME[..100]), Err(Error::EndOfStream)));
    assert!(matches!(decoder.decode_frame(&[]), Err(Error::EndOfStream)));
}

#[test]
fn test_decoders_on_threads() {
    let tables = decoder().tables().clone();
    let handles: Vec<_> = (0..2)
        .map(|_| {
            let tables = Arc::clone(&tables);
            thread::spawn(move || {
                let mut decoder = Decoder::with_tables(DecoderConfig::new(WIDTH, HEIGHT), tables).unwrap();
                decoder.decode_frame(&INTRA_FRAME).unwrap().data().to_vec()
            })
        })
        .collect();
    let frames: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(frames[0], frames[1]);
}

#[test]
#[ignore]
fn test_dump_intra_frame() {
    let mut decoder = decoder();
    let frame = decoder.decode_frame(&INTRA_FRAME).unwrap();

    let out_dir = Path::new("target").join("frames");
    std::fs::create_dir_all(&out_dir).unwrap();
    save_luma(out_dir.join("intra_frame.png"), frame).unwrap();
}

fn save_luma<P: AsRef<Path>>(path: P, frame: &Frame) -> Result<(), png::EncodingError> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = Encoder::new(w, frame.width() as u32, frame.height() as u32);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(frame.luma())
}
