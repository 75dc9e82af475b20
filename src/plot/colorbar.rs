//! Vertical color bar drawn beside a plot.

use crate::{colormap::Colormap, error::Result, utility::normalize};
use itertools::Itertools;
use plotters::{coord::Shift, prelude::*};

// Number of color steps in a continuous color bar.
const CONTINUOUS_STEPS: usize = 256;

/// Draw a labeled color bar for `cmap` spanning `[lo, hi]` onto `area`.
///
/// With `levels` the bar is drawn as discrete bands between consecutive levels, each band colored
/// by its center value, otherwise it is a continuous gradient.
pub(crate) fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    cmap: Colormap,
    lo: f64,
    hi: f64,
    label: &str,
    levels: Option<&[f64]>,
) -> Result<()> {
    let (lo, hi) = if (hi - lo).abs() < std::f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    };

    let mut chart = ChartBuilder::on(area)
        .margin_top(10)
        .margin_bottom(70)
        .margin_left(5)
        .set_label_area_size(LabelAreaPosition::Right, 65)
        .build_cartesian_2d(0.0..1.0, lo..hi)?;

    chart
        .configure_mesh()
        .disable_x_axis()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_desc(label)
        .label_style(("sans-serif", 12))
        .axis_desc_style(("sans-serif", 14))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()?;

    let bands: Vec<(f64, f64)> = match levels {
        Some(levels) => levels.iter().copied().tuple_windows::<(_, _)>().collect(),
        None => {
            let delta = (hi - lo) / CONTINUOUS_STEPS as f64;
            (0..CONTINUOUS_STEPS)
                .map(|step| {
                    let v0 = lo + delta * step as f64;
                    (v0, v0 + delta)
                })
                .collect()
        }
    };

    chart.draw_series(bands.into_iter().map(|(v0, v1)| {
        let color = cmap.color(normalize((v0 + v1) / 2.0, lo, hi));
        Rectangle::new([(0.0, v0), (1.0, v1)], color.filled())
    }))?;

    Ok(())
}
