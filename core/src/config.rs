/// JPEG quality used when none is given on the command line.
pub const DEFAULT_QUALITY: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    /// JPEG quality 0-100 (lower = smaller file, worse quality).
    /// Out-of-range values are clamped by the encoder.
    pub quality: u8,
    /// Descend into subdirectories when the input is a directory
    pub recursive: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            recursive: false,
        }
    }
}
