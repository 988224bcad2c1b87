//! QR code encoder

use crate::error::Result;
use image::{GrayImage, Luma};
use qrcode::QrCode;

/// Quiet zone width in modules applied by the renderer.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// QR code encoder with a fixed rendering configuration
pub struct QrEncoder {
    /// Error correction level
    ecc_level: qrcode::EcLevel,
    /// Pixel width of each QR module
    module_size: u32,
    /// Whether to surround the symbol with a 4-module quiet zone
    quiet_zone: bool,
}

impl QrEncoder {
    /// Create a new QR encoder with print defaults (High ECC, 10px modules,
    /// 4-module quiet zone)
    pub fn new() -> Self {
        Self {
            ecc_level: qrcode::EcLevel::H,
            module_size: 10,
            quiet_zone: true,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ecc_level(ecc_level: qrcode::EcLevel) -> Self {
        Self {
            ecc_level,
            ..Self::new()
        }
    }

    /// Override the rendered module size in pixels
    pub fn module_size(mut self, pixels: u32) -> Self {
        self.module_size = pixels.max(1);
        self
    }

    /// Enable or disable the quiet zone border
    pub fn quiet_zone(mut self, enabled: bool) -> Self {
        self.quiet_zone = enabled;
        self
    }

    /// Encode a string into a rendered QR image (black modules on white).
    ///
    /// The symbol version is chosen automatically: the smallest version able
    /// to hold `value` at the configured error correction level.
    pub fn encode(&self, value: &str) -> Result<GrayImage> {
        let code = QrCode::with_error_correction_level(value.as_bytes(), self.ecc_level)?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(self.quiet_zone)
            .module_dimensions(self.module_size, self.module_size)
            .build();

        Ok(image)
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
