//! Plots of retrieved profiles: time-height cross sections and correlation matrices.
//!
//! The renderers draw onto a `plotters` drawing area supplied by the caller, so they work with any
//! backend. [`svg_figure`] is a convenience for rendering into an in-memory SVG document.

use crate::error::{AnalysisError, Result};
use chrono::NaiveDateTime;
use itertools::Itertools;
use metfor::Meters;
use ndarray::{Array2, ArrayView1};
use optional::Optioned;
use plotters::{coord::Shift, prelude::*};

pub use self::{
    corr_plot::{corr_plot, corr_plot_on, correlation_levels},
    time_height::time_height,
};
use crate::colormap::Colormap;

mod colorbar;
mod corr_plot;
pub mod time_axis;
mod time_height;

/// Paired time and height coordinates for every point of a time-height field.
///
/// Both arrays have shape `(number of heights, number of times)`, the same as the data. Times are
/// date numbers (see [`time_axis::date2num`]) and heights are in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    time: Array2<f64>,
    height: Array2<f64>,
}

impl Grid {
    /// Build a grid from 1-D time and height axes by broadcasting them against each other. Each
    /// row of the grid is a single height, each column a single time.
    pub fn from_axes(times: &[NaiveDateTime], heights: &[f64]) -> Self {
        let times: Vec<f64> = times.iter().map(|&t| time_axis::date2num(t)).collect();
        let shape = (heights.len(), times.len());

        Grid {
            time: Array2::from_shape_fn(shape, |(_, j)| times[j]),
            height: Array2::from_shape_fn(shape, |(i, _)| heights[i]),
        }
    }

    /// Build a grid from 2-D time (as date numbers) and height arrays, which must have the same
    /// shape.
    pub fn from_mesh(time: Array2<f64>, height: Array2<f64>) -> Result<Self> {
        if time.dim() != height.dim() {
            return Err(AnalysisError::shape_mismatch(
                format!("height array of shape {:?}", time.dim()),
                format!("{:?}", height.dim()),
            ));
        }

        Ok(Grid { time, height })
    }

    /// The shape of the grid, `(number of heights, number of times)`.
    pub fn dim(&self) -> (usize, usize) {
        self.time.dim()
    }

    /// The time coordinate (date numbers) of every point.
    pub fn time(&self) -> &Array2<f64> {
        &self.time
    }

    /// The height coordinate (meters) of every point.
    pub fn height(&self) -> &Array2<f64> {
        &self.height
    }
}

/// Optional settings for [`time_height`]. The default applies no limits and uses the field's
/// registered colormap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeHeightOptions {
    /// Time axis limits, default is the extent of the data.
    pub date_limits: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Height axis limits, default is the extent of the data.
    pub height_limits: Option<(Meters, Meters)>,
    /// Lower end of the color scale, default is the data minimum.
    pub data_min: Optioned<f64>,
    /// Upper end of the color scale, default is the data maximum.
    pub data_max: Optioned<f64>,
    /// Replace the field's colormap. The color bar label still comes from the field.
    pub colormap: Option<Colormap>,
}

impl TimeHeightOptions {
    /// Create options with no limits and no overrides.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the time axis to `[start, end]`.
    #[inline]
    pub fn with_date_limits(self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            date_limits: Some((start, end)),
            ..self
        }
    }

    /// Restrict the height axis to `[bottom, top]`.
    #[inline]
    pub fn with_height_limits(self, bottom: Meters, top: Meters) -> Self {
        Self {
            height_limits: Some((bottom, top)),
            ..self
        }
    }

    /// Set the ends of the color scale. Either end may be left to the data.
    #[inline]
    pub fn with_data_limits<T, U>(self, min: T, max: U) -> Self
    where
        T: Into<Optioned<f64>>,
        U: Into<Optioned<f64>>,
    {
        Self {
            data_min: min.into(),
            data_max: max.into(),
            ..self
        }
    }

    /// Override the colormap.
    #[inline]
    pub fn with_colormap(self, colormap: Colormap) -> Self {
        Self {
            colormap: Some(colormap),
            ..self
        }
    }
}

/// Render into a fresh in-memory SVG document of `size` pixels with a white background.
///
/// Returns the SVG text.
pub fn svg_figure<F>(size: (u32, u32), draw: F) -> Result<String>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<()>,
{
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }
    Ok(buf)
}

/// The extent of each cell along one line of coordinates, assuming every value sits at the center
/// of its cell. Cell boundaries are the midpoints between neighbors, the outer cells are made
/// symmetric about their value. A lone value gets `half_width` on either side.
pub(crate) fn cell_edges(vals: ArrayView1<f64>, half_width: f64) -> Vec<(f64, f64)> {
    if vals.len() == 1 {
        return vec![(vals[0] - half_width, vals[0] + half_width)];
    }

    let mids: Vec<f64> = vals
        .iter()
        .tuple_windows::<(_, _)>()
        .map(|(a, b)| (a + b) / 2.0)
        .collect();

    (0..vals.len())
        .map(|k| {
            let lower = if k == 0 {
                2.0 * vals[0] - mids[0]
            } else {
                mids[k - 1]
            };
            let upper = if k == vals.len() - 1 {
                2.0 * vals[k] - mids[k - 1]
            } else {
                mids[k]
            };
            (lower, upper)
        })
        .collect()
}

/// Restrict a cell extent to the visible range, `None` if nothing of it is visible.
pub(crate) fn clip(edges: (f64, f64), range: (f64, f64)) -> Option<(f64, f64)> {
    let lo = edges.0.min(edges.1).max(range.0);
    let hi = edges.0.max(edges.1).min(range.1);

    if lo < hi {
        Some((lo, hi))
    } else {
        None
    }
}
