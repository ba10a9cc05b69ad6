//! The color-vision transform engine.
//!
//! A strict two-stage pipeline over float frames: [`simulate_frame`] applies
//! a model's matrix to map true color to the perceived-equivalent color for
//! that deficiency, and [`correct_frame`] re-maps the *simulated* frame
//! through the matrix's Moore-Penrose pseudo-inverse. The buffer-level
//! [`simulate`] and [`correct`] entry points compose the channel adapter
//! with a registry lookup.
//!
//! Every operation here is pure and deterministic: no hidden state, no
//! randomness, identical inputs always produce identical outputs.

mod matrix;


pub use matrix::{apply_matrix, pseudo_inverse};

use crate::buffer::{from_frame, to_frame, Frame, PixelBuffer};
use crate::error::Error;
use crate::models::{self, ColorModel};

/// Simulate deficient color perception on a float frame.
///
/// Per pixel: `clip(M * p, 0, 1)` over the three color channels.
pub fn simulate_frame(frame: &Frame, model: &ColorModel) -> Frame {
    let mut out = frame.clone();
    apply_matrix(&mut out.data, &model.matrix);
    out
}

/// Re-map a *simulated* frame through the model's pseudo-inverse.
///
/// Per pixel: `clip(pinv(M) * p, 0, 1)`. Note the input choice: the
/// pseudo-inverse is applied to the already-simulated image, not solved
/// against the original color space the way full daltonization would be.
/// This is a best-effort linear re-mapping, kept bit-for-bit compatible
/// with the behavior this tool reproduces.
pub fn correct_frame(frame: &Frame, model: &ColorModel) -> Frame {
    let inverse = pseudo_inverse(&model.matrix);
    let mut out = frame.clone();
    apply_matrix(&mut out.data, &inverse);
    out
}

/// Simulate deficient perception of `buffer` for the named deficiency type.
///
/// Composes registry lookup, the channel adapter, and the frame transform.
/// On error (unknown type, unsupported channel count) the input buffer is
/// untouched.
pub fn simulate(buffer: &PixelBuffer, type_id: &str) -> Result<PixelBuffer, Error> {
    let model = models::lookup(type_id)?;
    let frame = to_frame(buffer)?;

    Ok(from_frame(&simulate_frame(&frame, &model)))
}

/// Apply the pseudo-inverse correction to an already-simulated buffer.
///
/// The caller is expected to pass the output of [`simulate`] for the same
/// deficiency type.
pub fn correct(simulated: &PixelBuffer, type_id: &str) -> Result<PixelBuffer, Error> {
    let model = models::lookup(type_id)?;
    let frame = to_frame(simulated)?;

    Ok(from_frame(&correct_frame(&frame, &model)))
}
