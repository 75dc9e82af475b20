//! Colormaps used for the profile plots.
//!
//! The maps are piecewise linear between anchor colors. `seismic` and `gist_stern` follow their
//! classic segment definitions, the oceanographic maps (`thermal`, `haline`, `phase`, `balance`)
//! are approximated by a handful of anchors sampled along the published maps.

use crate::error::{AnalysisError, Result};
use plotters::style::RGBColor;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// A named colormap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Colormap {
    /// Diverging dark blue, white, dark red.
    #[strum(serialize = "seismic")]
    Seismic,
    /// Black through red and blue to yellow.
    #[strum(serialize = "gist_stern")]
    GistStern,
    /// `GistStern` running from yellow to black, for wind speed.
    #[strum(serialize = "gist_stern_r")]
    GistSternR,
    /// Cyclic, for directions.
    #[strum(serialize = "phase")]
    Phase,
    /// Sequential dark blue to yellow, for temperatures and spreads.
    #[strum(serialize = "thermal")]
    Thermal,
    /// Sequential dark blue to pale yellow.
    #[strum(serialize = "haline")]
    Haline,
    /// `Haline` running from pale yellow to dark blue, for moisture.
    #[strum(serialize = "haline_r")]
    HalineR,
    /// Diverging blue, off-white, red, for correlations.
    #[strum(serialize = "balance")]
    Balance,
}

// Evenly spaced anchors.
const SEISMIC: &[(f64, f64, f64)] = &[
    (0.0, 0.0, 0.3),
    (0.0, 0.0, 1.0),
    (1.0, 1.0, 1.0),
    (1.0, 0.0, 0.0),
    (0.5, 0.0, 0.0),
];

const THERMAL: &[(f64, f64, f64)] = &[
    (0.016, 0.137, 0.200),
    (0.090, 0.188, 0.435),
    (0.251, 0.224, 0.592),
    (0.408, 0.275, 0.561),
    (0.565, 0.325, 0.525),
    (0.733, 0.373, 0.447),
    (0.878, 0.439, 0.337),
    (0.965, 0.553, 0.247),
    (0.984, 0.710, 0.247),
    (0.910, 0.980, 0.357),
];

const HALINE: &[(f64, f64, f64)] = &[
    (0.161, 0.094, 0.424),
    (0.122, 0.192, 0.612),
    (0.059, 0.333, 0.561),
    (0.129, 0.435, 0.541),
    (0.180, 0.533, 0.537),
    (0.216, 0.627, 0.525),
    (0.314, 0.722, 0.482),
    (0.510, 0.800, 0.420),
    (0.765, 0.863, 0.439),
    (0.992, 0.933, 0.600),
];

// Cyclic, first and last anchors are the same color.
const PHASE: &[(f64, f64, f64)] = &[
    (0.659, 0.471, 0.051),
    (0.808, 0.294, 0.290),
    (0.792, 0.200, 0.624),
    (0.592, 0.322, 0.882),
    (0.282, 0.467, 0.871),
    (0.055, 0.553, 0.600),
    (0.290, 0.576, 0.196),
    (0.659, 0.471, 0.051),
];

const BALANCE: &[(f64, f64, f64)] = &[
    (0.094, 0.110, 0.263),
    (0.157, 0.267, 0.643),
    (0.275, 0.490, 0.773),
    (0.592, 0.714, 0.827),
    (0.945, 0.929, 0.925),
    (0.847, 0.627, 0.569),
    (0.753, 0.337, 0.243),
    (0.596, 0.082, 0.141),
    (0.235, 0.035, 0.071),
];

// gist_stern has independent (x, value) segments for each channel.
const STERN_RED: &[(f64, f64)] = &[(0.0, 0.0), (0.0547, 1.0), (0.250, 0.027), (1.0, 1.0)];
const STERN_GREEN: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 1.0)];
const STERN_BLUE: &[(f64, f64)] = &[(0.0, 0.0), (0.5, 1.0), (0.735, 0.0), (1.0, 0.0)];

impl Colormap {
    /// Look up a colormap by name.
    pub fn from_name(name: &str) -> Result<Self> {
        Colormap::from_str(name).map_err(|_| AnalysisError::UnknownColormap(name.to_owned()))
    }

    /// Evaluate the colormap at `frac`, which is clamped to `[0, 1]`. NaN maps to the low end.
    pub fn color(self, frac: f64) -> RGBColor {
        use Colormap::*;

        let frac = if frac.is_nan() {
            0.0
        } else {
            frac.max(0.0).min(1.0)
        };

        let (r, g, b) = match self {
            Seismic => even_anchors(SEISMIC, frac),
            Thermal => even_anchors(THERMAL, frac),
            Haline => even_anchors(HALINE, frac),
            HalineR => even_anchors(HALINE, 1.0 - frac),
            Phase => even_anchors(PHASE, frac),
            Balance => even_anchors(BALANCE, frac),
            GistStern => stern(frac),
            GistSternR => stern(1.0 - frac),
        };

        RGBColor(to_byte(r), to_byte(g), to_byte(b))
    }
}

fn to_byte(val: f64) -> u8 {
    (val * 255.0).round().max(0.0).min(255.0) as u8
}

fn even_anchors(anchors: &[(f64, f64, f64)], frac: f64) -> (f64, f64, f64) {
    debug_assert!(anchors.len() > 1);

    let pos = frac * (anchors.len() - 1) as f64;
    let lo = (pos.floor() as usize).min(anchors.len() - 2);
    let weight = pos - lo as f64;

    let (r0, g0, b0) = anchors[lo];
    let (r1, g1, b1) = anchors[lo + 1];

    (
        r0 + (r1 - r0) * weight,
        g0 + (g1 - g0) * weight,
        b0 + (b1 - b0) * weight,
    )
}

fn segment(segments: &[(f64, f64)], frac: f64) -> f64 {
    use itertools::Itertools;

    segments
        .iter()
        .tuple_windows::<(_, _)>()
        .find(|((x0, _), (x1, _))| frac >= *x0 && frac <= *x1)
        .map(|((x0, v0), (x1, v1))| {
            if (x1 - x0).abs() < std::f64::EPSILON {
                *v1
            } else {
                v0 + (v1 - v0) * (frac - x0) / (x1 - x0)
            }
        })
        .unwrap_or(0.0)
}

fn stern(frac: f64) -> (f64, f64, f64) {
    (
        segment(STERN_RED, frac),
        segment(STERN_GREEN, frac),
        segment(STERN_BLUE, frac),
    )
}
