//! Pixel buffers and the integer/float channel adapter.
//!
//! `PixelBuffer` is the interchange type at the pipeline boundary:
//! interleaved 8-bit samples with 3 (RGB) or 4 (RGBA) channels. `Frame` is
//! the engine's working form: exactly 3 channels of f32 in the 0.0-1.0
//! range. Conversion in either direction allocates a fresh buffer; the
//! source is never mutated.

use crate::error::Error;

/// Interleaved 8-bit image data.
///
/// The channel count is fixed for the buffer's lifetime. Ownership moves
/// through the pipeline one stage at a time; no stage mutates its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Samples per pixel (3 for RGB, 4 for RGBA)
    pub channels: u8,

    /// Interleaved sample data, row-major
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, validating that both dimensions are nonzero and the
    /// data length matches `width * height * channels`.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, Error> {
        let expected = width as usize * height as usize * channels as usize;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(Error::BufferShape {
                width,
                height,
                channels,
                len: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// 3-channel floating-point image, values in the 0.0-1.0 range.
///
/// Produced by [`to_frame`], consumed by the transform engine, and discarded
/// after conversion back through [`from_frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// RGB data (f32, 0.0-1.0 range)
    pub data: Vec<f32>,
}

/// Convert an 8-bit buffer into the engine's float form.
///
/// A 4th (alpha) channel is dropped before the transform: alpha is not color
/// data, and it is never reattached afterwards, so transform output is
/// always opaque RGB. Channel counts other than 3 or 4 are rejected.
pub fn to_frame(buffer: &PixelBuffer) -> Result<Frame, Error> {
    let data = match buffer.channels {
        3 => buffer.data.iter().map(|&v| v as f32 / 255.0).collect(),
        4 => {
            // Drop alpha, keep RGB
            let mut rgb = Vec::with_capacity(buffer.pixel_count() * 3);
            for px in buffer.data.chunks_exact(4) {
                rgb.push(px[0] as f32 / 255.0);
                rgb.push(px[1] as f32 / 255.0);
                rgb.push(px[2] as f32 / 255.0);
            }
            rgb
        }
        other => return Err(Error::ChannelCount(other)),
    };

    Ok(Frame {
        width: buffer.width,
        height: buffer.height,
        data,
    })
}

/// Convert a float frame back to an 8-bit RGB buffer.
///
/// Values outside 0.0-1.0 are saturated, not wrapped, then rounded to u8.
pub fn from_frame(frame: &Frame) -> PixelBuffer {
    let data = frame
        .data
        .iter()
        .map(|&v| (v * 255.0).clamp(0.0, 255.0).round() as u8)
        .collect();

    PixelBuffer {
        width: frame.width,
        height: frame.height,
        channels: 3,
        data,
    }
}
