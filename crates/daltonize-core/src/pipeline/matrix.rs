//! 3x3 matrix application and pseudo-inversion.

use nalgebra::Matrix3;
use rayon::prelude::*;

/// Pixel count above which matrix application is parallelized.
const PARALLEL_THRESHOLD: usize = 100_000;

/// Singular values at or below this are treated as zero when inverting.
const SINGULAR_TOLERANCE: f32 = 1e-6;

/// Apply a 3x3 matrix to every RGB pixel in place, clipping each result to
/// the 0.0-1.0 range.
///
/// Sequential for small frames; chunked parallel for large ones. Chunks of
/// 256 pixels keep the working set cache-resident.
pub fn apply_matrix(data: &mut [f32], matrix: &[[f32; 3]; 3]) {
    let num_pixels = data.len() / 3;

    if num_pixels >= PARALLEL_THRESHOLD {
        const CHUNK_SIZE: usize = 256 * 3;
        data.par_chunks_mut(CHUNK_SIZE).for_each(|chunk| {
            for pixel in chunk.chunks_exact_mut(3) {
                apply_matrix_to_pixel(pixel, matrix);
            }
        });
    } else {
        for pixel in data.chunks_exact_mut(3) {
            apply_matrix_to_pixel(pixel, matrix);
        }
    }
}

/// Apply the matrix to a single pixel: output = matrix * input, clipped.
#[inline(always)]
fn apply_matrix_to_pixel(pixel: &mut [f32], matrix: &[[f32; 3]; 3]) {
    let r = pixel[0];
    let g = pixel[1];
    let b = pixel[2];

    pixel[0] = (matrix[0][0] * r + matrix[0][1] * g + matrix[0][2] * b).clamp(0.0, 1.0);
    pixel[1] = (matrix[1][0] * r + matrix[1][1] * g + matrix[1][2] * b).clamp(0.0, 1.0);
    pixel[2] = (matrix[2][0] * r + matrix[2][1] * g + matrix[2][2] * b).clamp(0.0, 1.0);
}

/// Moore-Penrose pseudo-inverse of a 3x3 matrix.
///
/// Computed by singular value decomposition, so it is defined for any real
/// matrix: singular models (the rank-1 achromatopsia matrix) yield a finite
/// inverse instead of an error.
pub fn pseudo_inverse(matrix: &[[f32; 3]; 3]) -> [[f32; 3]; 3] {
    let m = Matrix3::from_fn(|i, j| matrix[i][j]);

    // pseudo_inverse only fails for a negative tolerance
    let inv = m
        .pseudo_inverse(SINGULAR_TOLERANCE)
        .unwrap_or_else(|_| Matrix3::zeros());

    let mut out = [[0.0f32; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value = inv[(i, j)];
        }
    }
    out
}
