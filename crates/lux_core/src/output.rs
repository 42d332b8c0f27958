//! PPM image output.
//!
//! Writes a dense, row-major buffer of 8-bit RGB triples as a portable
//! pixmap, either plain text (`P3`) or binary (`P6`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageEncoder};
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGB")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Sample encoding of the written pixmap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PpmEncoding {
    /// `P3`, one decimal number per channel
    Ascii,
    /// `P6`, one byte per channel
    #[default]
    Binary,
}

impl From<PpmEncoding> for SampleEncoding {
    fn from(encoding: PpmEncoding) -> Self {
        match encoding {
            PpmEncoding::Ascii => SampleEncoding::Ascii,
            PpmEncoding::Binary => SampleEncoding::Binary,
        }
    }
}

/// Encode an RGB8 buffer as PPM into any writer.
pub fn encode_ppm<W: Write>(
    writer: W,
    width: u32,
    height: u32,
    pixels: &[u8],
    encoding: PpmEncoding,
) -> OutputResult<()> {
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(OutputError::BufferSize {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let encoder =
        PnmEncoder::new(writer).with_subtype(PnmSubtype::Pixmap(encoding.into()));
    encoder.write_image(pixels, width, height, ColorType::Rgb8)?;
    Ok(())
}

/// Write an RGB8 buffer to a PPM file.
pub fn write_ppm<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    pixels: &[u8],
    encoding: PpmEncoding,
) -> OutputResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    encode_ppm(&mut writer, width, height, pixels, encoding)?;
    writer.flush()?;

    log::info!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}
