//! Batch generation of QR tag images
//!
//! The batch loop mirrors how the tags are printed: values are rendered in
//! the order given, one PNG per value, named `<value>.png` inside the output
//! directory. A failing value aborts the rest of the batch; files already
//! written stay on disk.

use crate::config::GeneratorOptions;
use crate::encoder::QrEncoder;
use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Outcome of a completed batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of QR images written
    pub generated: usize,
    /// Directory the images were written to
    pub output_dir: PathBuf,
}

/// Generate a fleet tag value for a vehicle: `VEH-<id>-<8 hex chars>`.
///
/// The suffix is drawn from a fresh v4 UUID, so repeated calls for the same
/// vehicle produce distinct tags.
pub fn vehicle_tag(vehicle_id: u64) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("VEH-{vehicle_id}-{}", uuid[..8].to_uppercase())
}

/// Check that a value is usable verbatim as a filename stem.
///
/// Path separators and NUL would redirect the write outside the output
/// directory, so they are rejected instead of written through.
fn validate_value(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidValue("value is empty".to_string()));
    }
    if value == "." || value == ".." {
        return Err(Error::InvalidValue(format!(
            "'{value}' is not a usable filename"
        )));
    }
    if value.contains(['/', '\\', '\0']) {
        return Err(Error::InvalidValue(format!(
            "'{value}' contains a path separator or NUL"
        )));
    }
    Ok(())
}

/// Encode every value to `<output_dir>/<value>.png`, in order.
///
/// The output directory is created (with intermediate directories) if
/// missing; existing files of the same name are overwritten. One progress
/// line is printed per file, followed by a summary line with the total.
pub fn generate_batch(values: &[String], options: &GeneratorOptions) -> Result<BatchReport> {
    fs::create_dir_all(&options.output_dir)?;

    let encoder = QrEncoder::new()
        .module_size(options.module_size)
        .quiet_zone(options.quiet_zone);

    for value in values {
        validate_value(value)?;

        let image = encoder.encode(value)?;
        let filename = options.output_dir.join(format!("{value}.png"));
        image.save(&filename)?;

        tracing::debug!(value = %value, file = %filename.display(), "Wrote QR image");
        println!("Generated: {}", filename.display());
    }

    println!(
        "\n✅ Generated {} QR codes in {}",
        values.len(),
        options.output_dir.display()
    );
    tracing::info!(
        count = values.len(),
        output_dir = %options.output_dir.display(),
        "Batch complete"
    );

    Ok(BatchReport {
        generated: values.len(),
        output_dir: options.output_dir.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_tag_format() {
        let tag = vehicle_tag(42);
        let suffix = tag.strip_prefix("VEH-42-").unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(suffix, suffix.to_uppercase());
    }

    #[test]
    fn test_vehicle_tags_are_distinct() {
        assert_ne!(vehicle_tag(7), vehicle_tag(7));
    }

    #[test]
    fn test_validate_accepts_plain_values() {
        assert!(validate_value("VEH-1-AB12CD34").is_ok());
        assert!(validate_value("order #9 (rush)").is_ok());
    }

    #[test]
    fn test_validate_rejects_path_escapes() {
        assert!(matches!(
            validate_value("../../etc/passwd"),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(
            validate_value("a/b"),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(
            validate_value("a\\b"),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(validate_value(""), Err(Error::InvalidValue(_))));
        assert!(matches!(validate_value(".."), Err(Error::InvalidValue(_))));
    }
}
