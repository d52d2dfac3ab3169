//! Raw (binary, `P5`) portable graymap decoder.
//!
//! Header parsing is delegated to `image`'s PNM decoder. Samples are taken
//! from the payload as stored: `image` would rescale them to the full 8 or
//! 16-bit range whenever maxval is not 255 or 65535, and thresholds apply to
//! raw intensities.

use std::io::Cursor;
use std::path::Path;

use image::codecs::pnm::PnmDecoder;
use image::{ColorType, ImageDecoder, ImageError};
use log::debug;

use crate::grid::{Grid2d, RasterImage};
use crate::types::GraphError;

const MAGIC: &[u8] = b"P5";

/// Read and decode a PGM file.
pub fn read_pgm(path: impl AsRef<Path>) -> Result<RasterImage, GraphError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    decode_pgm(&bytes).map_err(|err| match err {
        GraphError::Format(msg) => GraphError::Format(format!("{}: {msg}", path.display())),
        other => other,
    })
}

pub fn decode_pgm(bytes: &[u8]) -> Result<RasterImage, GraphError> {
    expect_magic(bytes)?;

    let decoder = PnmDecoder::new(Cursor::new(bytes)).map_err(header_error)?;
    let (width, height) = decoder.dimensions();
    let max_value = decoder.header().maximal_sample();
    let sample_size = match decoder.color_type() {
        ColorType::L8 => 1,
        ColorType::L16 => 2,
        other => {
            return Err(GraphError::Format(format!(
                "expected a single-channel graymap, got {other:?}"
            )));
        }
    };
    let expected = usize::try_from(decoder.total_bytes())
        .map_err(|_| GraphError::Format(format!("raster {width}x{height} is too large")))?;

    // The decoder stops right after the single whitespace byte that ends maxval.
    let (reader, _) = decoder.into_inner();
    let offset = usize::try_from(reader.position()).unwrap_or(bytes.len());
    let payload = bytes.get(offset..).unwrap_or_default();
    if payload.len() < expected {
        return Err(GraphError::TruncatedData {
            expected,
            found: payload.len(),
        });
    }

    let samples: Vec<u16> = match sample_size {
        1 => payload[..expected].iter().map(|&b| u16::from(b)).collect(),
        _ => payload[..expected]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect(),
    };

    debug!(
        "decoded {width}x{height} PGM raster (maxval {max_value}, {sample_size} byte samples)"
    );

    let grid = Grid2d::new(width, height, samples)?;
    // The color type is L8 or L16, so maxval fits.
    Ok(RasterImage::new(grid, max_value as u16))
}

/// `image` accepts every PNM flavour and tolerates a token glued to the magic.
fn expect_magic(bytes: &[u8]) -> Result<(), GraphError> {
    let separated = bytes
        .get(MAGIC.len())
        .is_some_and(|&b| b == b'#' || b.is_ascii_whitespace() || b == 0x0b);
    if !bytes.starts_with(MAGIC) || !separated {
        return Err(GraphError::Format("missing P5 magic number".to_string()));
    }
    Ok(())
}

fn header_error(err: ImageError) -> GraphError {
    GraphError::Format(format!("bad PGM header: {err}"))
}
