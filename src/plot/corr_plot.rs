use super::{cell_edges, clip, colorbar::draw_colorbar, svg_figure};
use crate::{
    colormap::Colormap,
    correlation::CorrelationBlocks,
    error::{AnalysisError, Result},
    utility::{finite_range, normalize},
};
use ndarray::{Array2, ArrayView2};
use plotters::{coord::Shift, prelude::*};

const FIGURE_SIZE: (u32, u32) = (1000, 500);
const COLORBAR_WIDTH: u32 = 100;
const LEVEL_STEP: f64 = 0.05;
// Values this far past +/-1 still count as inside the color scale.
const LEVEL_EPS: f64 = 1.0e-9;

/// The contour levels for correlation plots, -1 to 1 every 0.05.
pub fn correlation_levels() -> Vec<f64> {
    let num_steps = (2.0 / LEVEL_STEP).round() as usize;
    (0..=num_steps)
        .map(|k| -1.0 + LEVEL_STEP * k as f64)
        .collect()
}

/// Plot the temperature and moisture correlations from a combined correlation matrix side by side
/// in a new figure.
///
/// `heights` are the levels of each profile, so the matrix must be at least
/// `2 * heights.len()` square. Returns the figure as an SVG document.
pub fn corr_plot(corr: &Array2<f64>, heights: &[f64]) -> Result<String> {
    svg_figure(FIGURE_SIZE, |root| corr_plot_on(root, corr, heights))
}

/// Same as [`corr_plot`], but draws onto `area` instead of making a new figure.
///
/// The area is split into two panels, temperature correlation on the left and moisture
/// correlation on the right. Each block is filled in bands 0.05 wide on a fixed -1 to 1 scale and
/// gets its own color bar.
pub fn corr_plot_on<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    corr: &Array2<f64>,
    heights: &[f64],
) -> Result<()> {
    let blocks = CorrelationBlocks::split(corr, heights.len())?;

    if let Some((_, max_val)) = finite_range(blocks.temperature.iter()) {
        log::debug!("maximum temperature correlation: {}", max_val);
    }

    let (width, _) = area.dim_in_pixel();
    let (left, right) = area.split_horizontally(width / 2);

    draw_panel(&left, blocks.temperature, heights, "Temperature Correlation")?;
    draw_panel(&right, blocks.moisture, heights, "Moisture Correlation")?;

    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    block: ArrayView2<f64>,
    heights: &[f64],
    title: &str,
) -> Result<()> {
    let (lo, hi) = finite_range(heights).ok_or(AnalysisError::NotEnoughData)?;
    let (lo, hi) = if hi - lo < std::f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    };

    let levels = correlation_levels();
    let edges = cell_edges(ndarray::aview1(heights), 0.5);

    let (width, _) = area.dim_in_pixel();
    let (plot_area, colorbar_area) = area.split_horizontally(width.saturating_sub(COLORBAR_WIDTH));

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(lo..hi, lo..hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .label_style(("sans-serif", 12))
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    // Row i of the block is at height[i] on the y axis, column j at height[j] on the x axis.
    let cells = block.indexed_iter().filter_map(|((i, j), &val)| {
        let band = band_index(val, levels.len() - 1)?;
        let (x0, x1) = clip(edges[j], (lo, hi))?;
        let (y0, y1) = clip(edges[i], (lo, hi))?;

        let center = (levels[band] + levels[band + 1]) / 2.0;
        let color = Colormap::Balance.color(normalize(center, -1.0, 1.0));
        Some(Rectangle::new([(x0, y0), (x1, y1)], color.filled()))
    });
    chart.draw_series(cells)?;

    let (_, pixel_height) = colorbar_area.dim_in_pixel();
    let top = 30.min(pixel_height / 4) as i32;
    let colorbar_area = colorbar_area.margin(top, 0, 0, 0);
    draw_colorbar(
        &colorbar_area,
        Colormap::Balance,
        -1.0,
        1.0,
        "",
        Some(&levels),
    )?;

    Ok(())
}

// Which band between consecutive levels a value falls in, `None` outside the levels.
fn band_index(val: f64, num_bands: usize) -> Option<usize> {
    if !val.is_finite() || val < -1.0 - LEVEL_EPS || val > 1.0 + LEVEL_EPS {
        return None;
    }

    let band = ((val + 1.0) / LEVEL_STEP).floor().max(0.0) as usize;
    Some(band.min(num_bands - 1))
}
