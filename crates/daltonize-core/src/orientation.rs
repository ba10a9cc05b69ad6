//! EXIF orientation normalization.
//!
//! Cameras record physical rotation in the EXIF orientation tag rather than
//! rotating pixel data at capture time. This module rotates the pixels so
//! stored "up" matches visual "up" before any color processing. It runs on
//! the raw buffer, ahead of the channel adapter, so both RGB and RGBA
//! layouts pass through it.

use crate::buffer::PixelBuffer;

/// Rotate a buffer upright according to its EXIF orientation tag.
///
/// Tags 3, 6, and 8 rotate by 180, 90, and 270 degrees clockwise
/// respectively. Any other value, including a missing tag, returns the
/// buffer unchanged -- absent or unreadable metadata is the normal case for
/// screenshots and re-encoded files, not an error. Re-running on an image
/// whose tag has been consumed is therefore a no-op.
pub fn normalize_orientation(buffer: PixelBuffer, tag: Option<u16>) -> PixelBuffer {
    match tag {
        Some(3) => rotate180(&buffer),
        Some(6) => rotate90(&buffer),
        Some(8) => rotate270(&buffer),
        _ => buffer,
    }
}

/// Rotate 90 degrees clockwise. Width and height swap.
fn rotate90(buffer: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (buffer.width as usize, buffer.height as usize);
    let c = buffer.channels as usize;
    let mut data = vec![0u8; buffer.data.len()];

    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * c;
            // (x, y) lands at column h-1-y of row x in the rotated image
            let dst = (x * h + (h - 1 - y)) * c;
            data[dst..dst + c].copy_from_slice(&buffer.data[src..src + c]);
        }
    }

    PixelBuffer {
        width: buffer.height,
        height: buffer.width,
        channels: buffer.channels,
        data,
    }
}

/// Rotate 180 degrees. Dimensions are preserved.
fn rotate180(buffer: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (buffer.width as usize, buffer.height as usize);
    let c = buffer.channels as usize;
    let mut data = vec![0u8; buffer.data.len()];

    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * c;
            let dst = ((h - 1 - y) * w + (w - 1 - x)) * c;
            data[dst..dst + c].copy_from_slice(&buffer.data[src..src + c]);
        }
    }

    PixelBuffer {
        width: buffer.width,
        height: buffer.height,
        channels: buffer.channels,
        data,
    }
}

/// Rotate 270 degrees clockwise. Width and height swap.
fn rotate270(buffer: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (buffer.width as usize, buffer.height as usize);
    let c = buffer.channels as usize;
    let mut data = vec![0u8; buffer.data.len()];

    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * c;
            let dst = ((w - 1 - x) * h + y) * c;
            data[dst..dst + c].copy_from_slice(&buffer.data[src..src + c]);
        }
    }

    PixelBuffer {
        width: buffer.height,
        height: buffer.width,
        channels: buffer.channels,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x1 RGB strip: red pixel on the left, blue pixel on the right.
    fn strip() -> PixelBuffer {
        PixelBuffer::new(2, 1, 3, vec![255, 0, 0, 0, 0, 255]).unwrap()
    }

    fn pixel(buffer: &PixelBuffer, x: u32, y: u32) -> &[u8] {
        let c = buffer.channels as usize;
        let idx = (y as usize * buffer.width as usize + x as usize) * c;
        &buffer.data[idx..idx + c]
    }

    #[test]
    fn test_missing_tag_is_identity() {
        let buffer = strip();
        let original = buffer.clone();
        let result = normalize_orientation(buffer, None);

        assert_eq!(result, original);
    }

    #[test]
    fn test_unhandled_tags_are_identity() {
        // Tag 1 means already upright; mirrored variants are passed through
        for tag in [1, 2, 4, 5, 7, 9, 0] {
            let buffer = strip();
            let original = buffer.clone();
            assert_eq!(normalize_orientation(buffer, Some(tag)), original, "tag {}", tag);
        }
    }

    #[test]
    fn test_tag_6_rotates_clockwise() {
        let rotated = normalize_orientation(strip(), Some(6));

        // Horizontal strip becomes a vertical one; the left (red) end is on top
        assert_eq!(rotated.width, 1);
        assert_eq!(rotated.height, 2);
        assert_eq!(pixel(&rotated, 0, 0), &[255, 0, 0]);
        assert_eq!(pixel(&rotated, 0, 1), &[0, 0, 255]);
    }

    #[test]
    fn test_tag_8_rotates_counterclockwise() {
        let rotated = normalize_orientation(strip(), Some(8));

        assert_eq!(rotated.width, 1);
        assert_eq!(rotated.height, 2);
        // Counterclockwise: the right (blue) end comes up
        assert_eq!(pixel(&rotated, 0, 0), &[0, 0, 255]);
        assert_eq!(pixel(&rotated, 0, 1), &[255, 0, 0]);
    }

    #[test]
    fn test_tag_3_reverses_strip() {
        let rotated = normalize_orientation(strip(), Some(3));

        assert_eq!(rotated.width, 2);
        assert_eq!(rotated.height, 1);
        assert_eq!(pixel(&rotated, 0, 0), &[0, 0, 255]);
        assert_eq!(pixel(&rotated, 1, 0), &[255, 0, 0]);
    }

    #[test]
    fn test_rotating_180_twice_is_identity() {
        let buffer = PixelBuffer::new(3, 2, 3, (0u8..18).collect()).unwrap();
        let original = buffer.clone();

        let once = normalize_orientation(buffer, Some(3));
        let twice = normalize_orientation(once, Some(3));

        assert_eq!(twice, original);
    }

    #[test]
    fn test_rotation_preserves_rgba_pixels() {
        // 1x2 RGBA column; rotation must move whole 4-sample pixels
        let buffer = PixelBuffer::new(1, 2, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let rotated = normalize_orientation(buffer, Some(6));

        assert_eq!(rotated.width, 2);
        assert_eq!(rotated.height, 1);
        // Clockwise: bottom pixel comes to the left
        assert_eq!(pixel(&rotated, 0, 0), &[5, 6, 7, 8]);
        assert_eq!(pixel(&rotated, 1, 0), &[1, 2, 3, 4]);
    }
}
