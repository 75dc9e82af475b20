#![warn(missing_docs)]
//! Functions and data types for working with retrieved atmospheric profiles.
//!
//! Retrievals of temperature and water vapor from remote sensors (e.g. infrared spectrometers or
//! microwave radiometers) come with an averaging kernel, a prior state, and an error covariance.
//! This crate has the small numerical helpers needed to compare retrievals against in-situ
//! soundings, plus plotting helpers for the usual time-height and correlation plots.
//!
//! # Numerical transforms
//!  - [`convolve_akern`] smooths a sounding with a retrieval's averaging kernel.
//!  - [`cov2corr`] and [`cov2corr_strict`] turn a covariance matrix into a correlation matrix.
//!
//! # Plotting
//!  - [`time_height`] draws a field as a function of time and height with a color bar.
//!  - [`corr_plot`] draws the temperature and moisture correlation blocks side by side.
//!  - [`Field`] is the registry of quantities that can be plotted, with their colormaps and labels.
//!

//
// API
//
pub use crate::{
    colormap::Colormap,
    correlation::{cov2corr, cov2corr_strict, CorrelationBlocks},
    error::{AnalysisError, Result},
    field::{lookup, Field, Presentation},
    plot::{
        corr_plot, corr_plot_on, correlation_levels, svg_figure, time_axis, time_height, Grid,
        TimeHeightOptions,
    },
    smoothing::{convolve_akern, convolve_akern_default, SmoothedProfiles, DEFAULT_NLEVELS},
};

//
// Internal use only
//
mod colormap;
mod correlation;
mod error;
mod field;
mod plot;
mod smoothing;
mod utility;
