use std::path::PathBuf;

use clap::{ArgAction, Parser};

use png_to_jpeg_core::config::{ConvertConfig, DEFAULT_QUALITY};

/// Convert PNG images to JPEG, next to the source file
#[derive(Debug, Parser)]
#[command(
    name = "png-to-jpeg",
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    about,
    disable_version_flag = true
)]
pub struct Cli {
    /// JPEG output quality 0–100, values outside the range are clamped
    #[arg(short, long, default_value_t = i64::from(DEFAULT_QUALITY), allow_negative_numbers = true)]
    pub quality: i64,

    /// If the input is a directory, descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Print the version and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Input PNG file or directory
    pub input: Option<PathBuf>,
}

impl Cli {
    pub fn to_config(&self) -> ConvertConfig {
        ConvertConfig {
            quality: self.quality.clamp(0, 100) as u8,
            recursive: self.recursive,
        }
    }
}
