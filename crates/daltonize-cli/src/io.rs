//! Image loading and saving for the CLI.
//!
//! Decodes JPEG/PNG files into the core's `PixelBuffer`, reads the EXIF
//! orientation tag from the raw bytes, and writes PNG output. All file I/O
//! lives here; the core never touches the filesystem.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use daltonize_core::PixelBuffer;
use image::DynamicImage;

/// Supported image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// A decoded image plus the EXIF orientation tag, when one is present.
pub struct LoadedImage {
    pub buffer: PixelBuffer,
    pub orientation: Option<u16>,
}

/// Decode a JPEG or PNG file and read its EXIF orientation tag.
///
/// RGBA sources keep their alpha channel here; the core's channel adapter
/// drops it on the way into the transform.
pub fn load_image(path: &Path) -> Result<LoadedImage, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    // Read the tag before decoding; the decoder does not expose EXIF
    let orientation = read_orientation(&bytes);

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;

    let buffer = match decoded {
        DynamicImage::ImageRgba8(img) => {
            let (width, height) = (img.width(), img.height());
            PixelBuffer::new(width, height, 4, img.into_raw())
        }
        other => {
            let img = other.to_rgb8();
            let (width, height) = (img.width(), img.height());
            PixelBuffer::new(width, height, 3, img.into_raw())
        }
    }
    .map_err(|e| format!("Decoded {} has an invalid shape: {}", path.display(), e))?;

    Ok(LoadedImage {
        buffer,
        orientation,
    })
}

/// Read the EXIF orientation tag (1-8) from raw file bytes.
///
/// Missing or unreadable metadata yields `None`; both are routine (PNG files
/// and stripped JPEGs carry no EXIF), so no error is reported.
pub fn read_orientation(bytes: &[u8]) -> Option<u16> {
    let mut cursor = Cursor::new(bytes);
    let reader = exif::Reader::new().read_from_container(&mut cursor).ok()?;

    reader
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|f| f.value.get_uint(0))
        .map(|v| v as u16)
}

/// Write a 3-channel buffer as PNG.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    if buffer.channels != 3 {
        return Err(format!(
            "PNG export only supports 3-channel RGB, got {} channels",
            buffer.channels
        ));
    }

    let img = image::RgbImage::from_raw(buffer.width, buffer.height, buffer.data.clone())
        .ok_or_else(|| "Buffer dimensions do not match data length".to_string())?;

    img.save(path)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Build the output path for one processing stage:
/// `<out dir or input dir>/<stem>_<type>_<stage>.png`.
pub fn output_path(
    input: &Path,
    out: &Option<PathBuf>,
    type_id: &str,
    stage: &str,
) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let filename = format!("{}_{}_{}.png", stem, type_id.to_lowercase(), stage);

    match out {
        Some(dir) => dir.join(filename),
        None => {
            let parent = input.parent().unwrap_or(Path::new("."));
            parent.join(filename)
        }
    }
}

/// Expand a list of inputs (files and directories) into a list of image
/// files. Directories are scanned one level deep for supported extensions.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let entries = fs::read_dir(input)
                .map_err(|e| format!("Failed to read directory {}: {}", input.display(), e))?;

            for entry in entries {
                let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
                let path = entry.path();

                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    if path.is_file() && SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str())
                    {
                        files.push(path);
                    }
                }
            }
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_input() {
        let path = output_path(
            Path::new("/photos/beach.jpg"),
            &None,
            "Protanopia",
            "simulated",
        );

        assert_eq!(
            path,
            PathBuf::from("/photos/beach_protanopia_simulated.png")
        );
    }

    #[test]
    fn test_output_path_under_out_dir() {
        let path = output_path(
            Path::new("/photos/beach.jpg"),
            &Some(PathBuf::from("/tmp/out")),
            "Deuteranopia",
            "corrected",
        );

        assert_eq!(
            path,
            PathBuf::from("/tmp/out/beach_deuteranopia_corrected.png")
        );
    }

    #[test]
    fn test_read_orientation_without_exif() {
        // A PNG header carries no EXIF container
        let bytes = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(read_orientation(&bytes), None);
    }
}
