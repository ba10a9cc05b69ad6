//! Deficiency model registry.
//!
//! A fixed table mapping color-vision deficiency types to 3x3 transform
//! matrices over normalized RGB. The table is built from constants at
//! compile time and exposed only through read accessors, so concurrent
//! lookups from any number of threads need no locking.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Color-vision deficiency types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deficiency {
    /// Red-blind
    Protanopia,

    /// Green-blind
    Deuteranopia,

    /// Blue-blind
    Tritanopia,

    /// Red-weak
    Protanomaly,

    /// Green-weak
    Deuteranomaly,

    /// Blue-weak
    Tritanomaly,

    /// Total color blindness
    Achromatopsia,

    /// Partial color blindness
    Achromatomaly,
}

/// All registered deficiency types, in the order [`list_types`] reports them.
pub const DEFICIENCY_TYPES: [Deficiency; 8] = [
    Deficiency::Protanopia,
    Deficiency::Deuteranopia,
    Deficiency::Tritanopia,
    Deficiency::Protanomaly,
    Deficiency::Deuteranomaly,
    Deficiency::Tritanomaly,
    Deficiency::Achromatopsia,
    Deficiency::Achromatomaly,
];

impl Deficiency {
    /// Registry identifier for this type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
            Self::Protanomaly => "Protanomaly",
            Self::Deuteranomaly => "Deuteranomaly",
            Self::Tritanomaly => "Tritanomaly",
            Self::Achromatopsia => "Achromatopsia",
            Self::Achromatomaly => "Achromatomaly",
        }
    }

    /// Parse a registry identifier (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        DEFICIENCY_TYPES
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// Simulation matrix for this type.
    ///
    /// Each row is a convex weighting of the input channels (rows sum to
    /// 1.0), so the overall luminance scale is preserved. Achromatopsia
    /// collapses every channel to BT.601 luma; its matrix is rank 1.
    pub fn matrix(&self) -> [[f32; 3]; 3] {
        match self {
            Self::Protanopia => [
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.0, 0.242, 0.758],
            ],
            Self::Deuteranopia => [
                [0.625, 0.375, 0.0],
                [0.7, 0.3, 0.0],
                [0.0, 0.3, 0.7],
            ],
            Self::Tritanopia => [
                [0.95, 0.05, 0.0],
                [0.0, 0.433, 0.567],
                [0.0, 0.475, 0.525],
            ],
            Self::Protanomaly => [
                [0.817, 0.183, 0.0],
                [0.333, 0.667, 0.0],
                [0.0, 0.125, 0.875],
            ],
            Self::Deuteranomaly => [
                [0.8, 0.2, 0.0],
                [0.258, 0.742, 0.0],
                [0.0, 0.142, 0.858],
            ],
            Self::Tritanomaly => [
                [0.967, 0.033, 0.0],
                [0.0, 0.733, 0.267],
                [0.0, 0.183, 0.817],
            ],
            Self::Achromatopsia => [
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
            ],
            Self::Achromatomaly => [
                [0.618, 0.320, 0.062],
                [0.163, 0.775, 0.062],
                [0.163, 0.320, 0.516],
            ],
        }
    }
}

/// A deficiency identifier paired with its simulation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorModel {
    /// Display identifier
    pub name: String,

    /// 3x3 transform over normalized RGB
    pub matrix: [[f32; 3]; 3],
}

impl ColorModel {
    /// Build a model from runtime-supplied rows, validating the 3x3 shape.
    ///
    /// The registry itself is constant; this exists for embedders that carry
    /// matrices as data (JSON, test fixtures) and need shape validation at
    /// the boundary.
    pub fn from_rows(name: impl Into<String>, rows: &[Vec<f32>]) -> Result<Self, Error> {
        if rows.len() != 3 || rows.iter().any(|r| r.len() != 3) {
            return Err(Error::InvalidMatrix {
                rows: rows.len(),
                cols: rows.first().map(|r| r.len()).unwrap_or(0),
            });
        }

        let mut matrix = [[0.0f32; 3]; 3];
        for (i, row) in rows.iter().enumerate() {
            matrix[i].copy_from_slice(row);
        }

        Ok(Self {
            name: name.into(),
            matrix,
        })
    }
}

/// Look up a deficiency type by identifier.
///
/// Unknown identifiers are an error; the registry never falls back to a
/// default matrix.
pub fn lookup(type_id: &str) -> Result<ColorModel, Error> {
    let deficiency = Deficiency::from_name(type_id)
        .ok_or_else(|| Error::UnknownDeficiency(type_id.to_string()))?;

    Ok(ColorModel {
        name: deficiency.name().to_string(),
        matrix: deficiency.matrix(),
    })
}

/// Registered type identifiers, in display order.
pub fn list_types() -> Vec<&'static str> {
    DEFICIENCY_TYPES.iter().map(|d| d.name()).collect()
}
