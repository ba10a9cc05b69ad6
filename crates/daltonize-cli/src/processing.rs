//! Single-image processing shared by the `process` and `batch` commands.

use std::path::{Path, PathBuf};

use daltonize_core::{correct, normalize_orientation, simulate};

use crate::io::{load_image, output_path, save_png};

/// Output files written for one input image.
pub struct ProcessedPaths {
    /// The simulated (deficient-perception) rendering
    pub simulated: PathBuf,

    /// The pseudo-inverse corrected rendering, unless skipped
    pub corrected: Option<PathBuf>,
}

/// Decode, orientation-normalize, simulate, correct, and write PNG outputs
/// for a single input file.
///
/// A failure at any step aborts this file only; callers decide whether to
/// stop (single processing) or carry on (batch).
pub fn process_single_image(
    input: &Path,
    deficiency: &str,
    out: &Option<PathBuf>,
    simulated_only: bool,
) -> Result<ProcessedPaths, String> {
    let loaded = load_image(input)?;
    let upright = normalize_orientation(loaded.buffer, loaded.orientation);

    let simulated = simulate(&upright, deficiency).map_err(|e| e.to_string())?;
    let simulated_path = output_path(input, out, deficiency, "simulated");
    save_png(&simulated, &simulated_path)?;

    let corrected_path = if simulated_only {
        None
    } else {
        let corrected = correct(&simulated, deficiency).map_err(|e| e.to_string())?;
        let path = output_path(input, out, deficiency, "corrected");
        save_png(&corrected, &path)?;
        Some(path)
    };

    Ok(ProcessedPaths {
        simulated: simulated_path,
        corrected: corrected_path,
    })
}
