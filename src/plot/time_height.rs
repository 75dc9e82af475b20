use super::{
    cell_edges, clip, colorbar::draw_colorbar, time_axis, time_axis::HourlyAxis, Grid,
    TimeHeightOptions,
};
use crate::{
    error::{AnalysisError, Result},
    field::Field,
    utility::{finite_range, normalize},
};
use metfor::Quantity;
use ndarray::Array2;
use plotters::{coord::Shift, prelude::*, style::FontTransform};

// Width in pixels reserved for the color bar.
const COLORBAR_WIDTH: u32 = 110;

// Cell half widths used when a grid has only a single time or a single height.
const LONE_TIME_HALF_WIDTH: f64 = 1.0 / 48.0; // half an hour, in days
const LONE_HEIGHT_HALF_WIDTH: f64 = 5.0; // meters

/// Draw a time-height cross section of `data` on `area`.
///
/// Every sample of `data` is colored according to `field`'s colormap (or the override in
/// `options`) and fills the cell halfway to its neighbors in time and height. Non-finite samples
/// are left blank. A color bar labeled for `field` is drawn to the right, the time axis gets a tick
/// every hour labeled `HHMM`.
///
/// `data` must have the same shape as `grid`. Returns `area` so the caller can keep drawing on it.
pub fn time_height<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    grid: &Grid,
    data: &Array2<f64>,
    field: Field,
    options: &TimeHeightOptions,
) -> Result<&'a DrawingArea<DB, Shift>> {
    let (nz, nt) = grid.dim();
    if data.dim() != (nz, nt) {
        return Err(AnalysisError::shape_mismatch(
            format!("data of shape {:?}", (nz, nt)),
            format!("{:?}", data.dim()),
        ));
    }
    if nz == 0 || nt == 0 {
        return Err(AnalysisError::NotEnoughData);
    }

    let presentation = field.presentation();
    let cmap = options.colormap.unwrap_or(presentation.colormap);

    let (data_lo, data_hi) = finite_range(data.iter()).unwrap_or((0.0, 1.0));
    let vmin = options.data_min.into_option().unwrap_or(data_lo);
    let vmax = options.data_max.into_option().unwrap_or(data_hi);

    log::debug!(
        "time-height plot of {} on a {} x {} grid, color range {} to {}",
        field,
        nz,
        nt,
        vmin,
        vmax
    );

    let edges = GridEdges::new(grid);

    let (x_lo, x_hi) = match options.date_limits {
        Some((start, end)) => (time_axis::date2num(start), time_axis::date2num(end)),
        None => edge_extent(edges.time.iter().flatten()),
    };
    let (y_lo, y_hi) = match options.height_limits {
        Some((bottom, top)) => (bottom.unpack(), top.unpack()),
        None => edge_extent(edges.height.iter().flatten()),
    };

    let (area_width, _) = area.dim_in_pixel();
    let (plot_area, colorbar_area) =
        area.split_horizontally(area_width.saturating_sub(COLORBAR_WIDTH));

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(HourlyAxis::new(x_lo..x_hi), y_lo..y_hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Time [UTC]")
        .y_desc("Height [m]")
        .label_style(("sans-serif", 12))
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_label_formatter(&|x| time_axis::format_hhmm(*x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .axis_desc_style(("sans-serif", 14))
        .draw()?;

    let clip_x = (x_lo.min(x_hi), x_lo.max(x_hi));
    let clip_y = (y_lo.min(y_hi), y_lo.max(y_hi));

    let cells = edges
        .visible_cells(data, clip_x, clip_y)
        .map(|Cell { time, height, value }| {
            let color = cmap.color(normalize(value, vmin, vmax));
            Rectangle::new([(time.0, height.0), (time.1, height.1)], color.filled())
        });
    chart.draw_series(cells)?;

    draw_colorbar(
        &colorbar_area,
        cmap,
        vmin,
        vmax,
        presentation.label,
        None,
    )?;

    Ok(area)
}

// Cell extents of a grid, time along each row and height along each column.
struct GridEdges {
    time: Vec<Vec<(f64, f64)>>,
    height: Vec<Vec<(f64, f64)>>,
}

// A finite sample clipped to the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    time: (f64, f64),
    height: (f64, f64),
    value: f64,
}

impl GridEdges {
    fn new(grid: &Grid) -> Self {
        let time = grid
            .time()
            .rows()
            .into_iter()
            .map(|row| cell_edges(row, LONE_TIME_HALF_WIDTH))
            .collect();
        let height = grid
            .height()
            .columns()
            .into_iter()
            .map(|col| cell_edges(col, LONE_HEIGHT_HALF_WIDTH))
            .collect();

        GridEdges { time, height }
    }

    // Cells with a finite value and some part inside `x_range` by `y_range`.
    fn visible_cells<'a>(
        &'a self,
        data: &'a Array2<f64>,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> impl Iterator<Item = Cell> + 'a {
        data.indexed_iter().filter_map(move |((i, j), &value)| {
            if !value.is_finite() {
                return None;
            }

            let time = clip(self.time[i][j], x_range)?;
            let height = clip(self.height[j][i], y_range)?;

            Some(Cell {
                time,
                height,
                value,
            })
        })
    }
}

fn edge_extent<'a, I>(edges: I) -> (f64, f64)
where
    I: Iterator<Item = &'a (f64, f64)>,
{
    let (lo, hi) = edges.fold(
        (std::f64::INFINITY, std::f64::NEG_INFINITY),
        |(lo, hi), &(e0, e1)| (lo.min(e0).min(e1), hi.max(e0).max(e1)),
    );

    if !(lo.is_finite() && hi.is_finite()) {
        (0.0, 1.0)
    } else if hi - lo < std::f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}
