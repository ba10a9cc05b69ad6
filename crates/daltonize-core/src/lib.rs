//! Daltonize Core Library
//!
//! Color-vision deficiency simulation and pseudo-inverse correction.
//!
//! The pipeline is two pure stages over float frames: `simulate` maps an
//! image to the colors a viewer with a given deficiency perceives, and
//! `correct` re-maps the simulated image through the model matrix's
//! Moore-Penrose pseudo-inverse. EXIF orientation normalization runs ahead
//! of both as a preprocessing step.

pub mod buffer;
pub mod error;
pub mod models;
pub mod orientation;
pub mod pipeline;

// Re-export commonly used types
pub use buffer::{from_frame, to_frame, Frame, PixelBuffer};
pub use error::Error;
pub use models::{list_types, lookup, ColorModel, Deficiency, DEFICIENCY_TYPES};
pub use orientation::normalize_orientation;
pub use pipeline::{correct, correct_frame, simulate, simulate_frame};
