//! Static line plots for predprey experiments.
//!
//! A [`Figure`] collects named series of `[x, y]` points and renders them to a
//! PNG file on a single set of axes.
//!
//! ```ignore
//! Figure::new()
//!     .title("Phase plane")
//!     .x_label("x")
//!     .y_label("y")
//!     .legend()
//!     .add_series("delay = 0.1", &points)
//!     .save("results1.png")?;
//! ```

use std::{fmt::Display, ops::Range, path::Path};

use plotters::prelude::*;
use thiserror::Error;

/// Line colors, cycled by series index.
const PALETTE: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Fraction of the data span added on each side of an axis.
const PADDING: f64 = 0.05;

/// Errors that can occur when rendering a [`Figure`].
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("figure has no series to draw")]
    Empty,

    #[error("failed to render figure: {0}")]
    Render(String),
}

fn render_error<E: Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// A named line series.
#[derive(Debug, Clone, PartialEq)]
struct Series {
    name: String,
    points: Vec<(f64, f64)>,
}

/// A single-panel line plot.
///
/// Construct with [`Figure::new`] and chain builder methods. Non-finite points
/// are dropped when a series is added, and axis ranges are fitted to the
/// remaining data.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: Option<String>,
    x_label: String,
    y_label: String,
    size: (u32, u32),
    legend: bool,
    series: Vec<Series>,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Creates an empty 600×400 figure with no title, labels, or legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: String::new(),
            y_label: String::new(),
            size: (600, 400),
            legend: false,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Sets the image size in pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Enables a legend labeling each series by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Adds a named series.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points
                .iter()
                .filter(|[x, y]| x.is_finite() && y.is_finite())
                .map(|&[x, y]| (x, y))
                .collect(),
        });

        self
    }

    /// Returns the title, if one was set.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the number of series added so far.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Returns the x and y axis ranges covering every series.
    fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let points = || self.series.iter().flat_map(|s| s.points.iter());
        (
            axis_range(points().map(|p| p.0)),
            axis_range(points().map(|p| p.1)),
        )
    }

    /// Renders the figure to a PNG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Empty`] if no series were added, or
    /// [`PlotError::Render`] if drawing or writing the file fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlotError> {
        if self.series.is_empty() {
            return Err(PlotError::Empty);
        }

        let path = path.as_ref();
        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let (x_range, y_range) = self.ranges();

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 20));
        }
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .draw()
            .map_err(render_error)?;

        for (index, series) in self.series.iter().enumerate() {
            let style = PALETTE[index % PALETTE.len()].stroke_width(2);
            chart
                .draw_series(LineSeries::new(series.points.iter().copied(), style))
                .map_err(render_error)?
                .label(series.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        if self.legend {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)
    }
}

/// Reports whether the sans-serif font used for titles and labels can be
/// loaded.
///
/// Without it, [`Figure::save`] fails with [`PlotError::Render`] as soon as it
/// draws text.
#[must_use]
pub fn text_font_available() -> bool {
    ("sans-serif", 20).into_font().box_size("Ag").is_ok()
}

/// Fits an axis range to `values`, padded by [`PADDING`] on each side.
///
/// A single distinct value is widened to a unit span centred on it, and no
/// values at all yields `0..1`.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if lo > hi {
        return 0.0..1.0;
    }

    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 0.5)..(hi + 0.5);
    }

    let pad = span * PADDING;
    (lo - pad)..(hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use approx::assert_relative_eq;

    /// Returns an empty directory private to one test in this process.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("predprey-plot-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn two_lines() -> Figure {
        Figure::new()
            .title("lines")
            .x_label("x")
            .y_label("y")
            .legend()
            .add_series("up", &[[0.0, 0.0], [1.0, 1.0]])
            .add_series("down", &[[0.0, 1.0], [1.0, 0.0]])
    }

    #[test]
    fn axis_range_pads_data_span() {
        let range = axis_range([1.0, 3.0, 2.0].into_iter());
        assert_relative_eq!(range.start, 0.9);
        assert_relative_eq!(range.end, 3.1);
    }

    #[test]
    fn axis_range_widens_degenerate_span() {
        let range = axis_range(std::iter::once(4.0));
        assert_relative_eq!(range.start, 3.5);
        assert_relative_eq!(range.end, 4.5);
    }

    #[test]
    fn axis_range_without_values_is_unit() {
        assert_eq!(axis_range(std::iter::empty()), 0.0..1.0);
    }

    #[test]
    fn add_series_drops_non_finite_points() {
        let figure = Figure::new().add_series(
            "a",
            &[[0.0, 1.0], [f64::NAN, 2.0], [1.0, f64::INFINITY], [2.0, 3.0]],
        );

        assert_eq!(figure.series_count(), 1);
        assert_eq!(figure.series[0].points, vec![(0.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn ranges_cover_all_series() {
        let figure = Figure::new()
            .add_series("a", &[[0.0, 0.0], [1.0, 10.0]])
            .add_series("b", &[[-1.0, 5.0], [3.0, 20.0]]);

        let (x, y) = figure.ranges();
        assert_relative_eq!(x.start, -1.2);
        assert_relative_eq!(x.end, 3.2);
        assert_relative_eq!(y.start, -1.0);
        assert_relative_eq!(y.end, 21.0);
    }

    #[test]
    fn builder_sets_fields() {
        let figure = Figure::new()
            .title("t")
            .x_label("x")
            .y_label("y")
            .size(800, 300)
            .legend();

        assert_eq!(figure.caption(), Some("t"));
        assert_eq!(figure.x_label, "x");
        assert_eq!(figure.y_label, "y");
        assert_eq!(figure.size, (800, 300));
        assert!(figure.legend);
        assert_eq!(figure.series_count(), 0);
    }

    #[test]
    fn saving_empty_figure_fails_without_writing() {
        let path = scratch_dir("empty").join("empty.png");

        let result = Figure::new().title("empty").save(&path);

        assert!(matches!(result, Err(PlotError::Empty)));
        assert!(!path.exists());
    }

    #[test]
    fn saving_into_missing_directory_is_a_render_error() {
        let path = scratch_dir("missing").join("absent").join("lines.png");

        let result = two_lines().save(&path);

        assert!(matches!(result, Err(PlotError::Render(_))));
        assert!(!path.exists());
    }

    #[test]
    fn saves_png_file() {
        let path = scratch_dir("lines").join("lines.png");

        let result = two_lines().save(&path);

        if text_font_available() {
            result.expect("should render");
            let bytes = std::fs::read(&path).expect("file should exist");
            assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        } else {
            assert!(matches!(result, Err(PlotError::Render(_))));
        }
    }
}
