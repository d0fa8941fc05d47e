use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageFormat};

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::format::FileKind;
use crate::io::{output_path, read_file, write_file};

/// What happened to a file that was handled without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted {
        output: PathBuf,
        width: u32,
        height: u32,
        input_size: u64,
        output_size: u64,
    },
    /// Already a JPEG, left alone.
    Skipped,
}

/// Convert a single file. PNGs are re-encoded as `<stem>.jpeg` next to the
/// source, JPEGs are skipped and anything else is rejected.
pub fn convert_file(path: &Path, config: &ConvertConfig) -> Result<Outcome, ConvertError> {
    match FileKind::from_path(path) {
        FileKind::Png => convert_png(path, config),
        FileKind::Jpeg => {
            log::debug!("Skipping JPEG {}", path.display());
            Ok(Outcome::Skipped)
        }
        FileKind::Unsupported => Err(ConvertError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn convert_png(path: &Path, config: &ConvertConfig) -> Result<Outcome, ConvertError> {
    let data = read_file(path)?;
    let input_size = data.len() as u64;

    let img = image::load_from_memory_with_format(&data, ImageFormat::Png).map_err(|e| {
        ConvertError::Decode {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    drop(data);

    let (width, height) = img.dimensions();
    log::debug!(
        "Decoded {}: {}x{} pixels ({:?})",
        path.display(),
        width,
        height,
        img.color()
    );

    let encoded = encode_jpeg(&img, config.quality).map_err(|e| ConvertError::Encode {
        path: path.to_path_buf(),
        source: e,
    })?;
    drop(img);

    let output = output_path(path);
    write_file(&output, &encoded)?;

    log::debug!(
        "Wrote {} ({} bytes, quality {})",
        output.display(),
        encoded.len(),
        config.quality
    );

    Ok(Outcome::Converted {
        output,
        width,
        height,
        input_size,
        output_size: encoded.len() as u64,
    })
}

/// Encode to baseline JPEG in memory. Grayscale sources stay single
/// channel; everything else goes through 8-bit RGB with alpha dropped.
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, image::ImageError> {
    let mut output = Vec::new();
    let mut cursor = Cursor::new(&mut output);
    let mut encoder = JpegEncoder::new_with_quality(&mut cursor, quality);

    if img.color().has_color() {
        let rgb = img.to_rgb8();
        encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;
    } else {
        let luma = img.to_luma8();
        encoder.encode(luma.as_raw(), luma.width(), luma.height(), ExtendedColorType::L8)?;
    }

    Ok(output)
}
