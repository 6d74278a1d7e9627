#![warn(clippy::all)]

//! Decoder for Mobiclip video, the codec of Nintendo DS `.mods` and
//! 3DS `.moflex` movies.
//!
//! Frames are fed one at a time to a [`Decoder`], which returns planar
//! 4:2:0 [`Frame`]s in their native color space:
//!
//! ```no_run
//! # fn packets() -> Vec<Vec<u8>> { Vec::new() }
//! use mobiclip::{Decoder, DecoderConfig};
//!
//! let mut decoder = Decoder::new(DecoderConfig::new(256, 192))?;
//! for packet in packets() {
//!     let frame = decoder.decode_frame(&packet)?;
//!     let _rgba = frame.to_rgba();
//! }
//! # Ok::<(), mobiclip::Error>(())
//! ```

mod error;

pub mod bitreader;
pub mod block;
pub mod color;
pub mod decoder;
pub mod frame;
pub mod huffman;
pub mod idct;
pub mod inter;
pub mod intra;
pub mod motion;
pub mod quant;
pub mod residual;
pub mod tables;

pub use bitreader::{BitOrder, BitReader, BlockSize};
pub use block::{Block, PixelView};
pub use color::Color32;
pub use decoder::{CodecTables, Decoder, DecoderConfig, FRAME_RING_SIZE};
pub use error::{Error, Result};
pub use frame::{ColorSpace, Frame, FrameRing, Macroblock, Plane};
pub use intra::{BlockPredictor, IntraMode};
pub use motion::MotionVector;
