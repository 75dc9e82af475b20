//! Apply a retrieval averaging kernel to a sounding.
//!
//! To compare an in-situ sounding (e.g. a radiosonde) with a retrieved profile fairly, the sounding
//! is first degraded to the vertical resolution of the retrieval. With averaging kernel `A` and
//! prior state `Xa` the smoothed state is
//!
//! ```text
//! X_smooth = A (X_sonde - Xa) + Xa
//! ```
//!
//! where the state vectors are the temperature profile followed by the water vapor profile.

use crate::error::{AnalysisError, Result};
use ndarray::{s, Array1, Array2};

/// Number of vertical levels in the standard retrieval grid.
pub const DEFAULT_NLEVELS: usize = 55;

/// Temperature and moisture profiles after smoothing with an averaging kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedProfiles {
    /// Smoothed temperature, the first `nlevels` entries of the smoothed state.
    pub temperature: Array1<f64>,
    /// Smoothed water vapor mixing ratio, the next `nlevels` entries of the smoothed state.
    pub moisture: Array1<f64>,
}

/// Smooth a temperature and water vapor profile with a retrieval averaging kernel.
///
/// The prior state and the averaging kernel are truncated to the first `2 * nlevels` entries (or
/// rows and columns), retrievals often append trace gas and cloud properties to the state vector
/// and those are dropped here.
///
/// Returns `AnalysisError::ShapeMismatch` if the concatenated profiles do not have the same length
/// as the truncated prior, or if the kernel is too small to cover the profiles.
pub fn convolve_akern(
    akern: &Array2<f64>,
    prior: &Array1<f64>,
    t: &[f64],
    wv: &[f64],
    nlevels: usize,
) -> Result<SmoothedProfiles> {
    let state_len = 2 * nlevels;

    let observed: Array1<f64> = t.iter().chain(wv.iter()).copied().collect();

    let prior = prior.slice(s![..state_len.min(prior.len())]);
    if observed.len() != prior.len() {
        return Err(AnalysisError::shape_mismatch(
            format!("prior with {} entries", observed.len()),
            format!("{} entries after truncation", prior.len()),
        ));
    }

    let (rows, cols) = akern.dim();
    if rows < state_len || cols < state_len {
        return Err(AnalysisError::shape_mismatch(
            format!("averaging kernel at least {} x {}", state_len, state_len),
            format!("{} x {}", rows, cols),
        ));
    }
    let akern = akern.slice(s![..state_len, ..state_len]);

    let smoothed = akern.dot(&(&observed - &prior)) + prior;

    Ok(SmoothedProfiles {
        temperature: smoothed.slice(s![..nlevels]).to_owned(),
        moisture: smoothed.slice(s![nlevels..state_len]).to_owned(),
    })
}

/// Same as [`convolve_akern`] with [`DEFAULT_NLEVELS`] levels.
pub fn convolve_akern_default(
    akern: &Array2<f64>,
    prior: &Array1<f64>,
    t: &[f64],
    wv: &[f64],
) -> Result<SmoothedProfiles> {
    convolve_akern(akern, prior, t, wv, DEFAULT_NLEVELS)
}
