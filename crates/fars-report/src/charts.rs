//! Bar, pie and line charts.
//!
//! Each chart is plain data plus a `to_svg` renderer. Layout is fixed to an
//! 800x480 canvas; axes scale to the largest count.

use std::f64::consts::PI;

use anyhow::Result;

use crate::svg::{Anchor, SvgWriter, TextStyle};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 480;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 90.0;
const MARGIN_LEFT: f64 = 80.0;
/// Left margin for horizontal bars, which carry their labels on the left.
const LABEL_MARGIN: f64 = 200.0;

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#d1d5db";

/// Pie slice colors, cycled.
pub const PALETTE: [&str; 12] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

/// Line series colors, cycled.
pub const SERIES_COLORS: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

/// A chart that renders to a standalone SVG document.
pub trait Chart {
    fn title(&self) -> &str;
    fn to_svg(&self) -> Result<String>;
}

/// Vertical bars, one per category.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: &'static str,
    pub opacity: f64,
    /// Rotates category labels to fit long names.
    pub rotate_labels: bool,
    pub bars: Vec<(String, usize)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, color: &'static str) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: "Number of Accidents".to_string(),
            color,
            opacity: 0.8,
            rotate_labels: false,
            bars: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn rotate_labels(mut self) -> Self {
        self.rotate_labels = true;
        self
    }

    pub fn bars<I, L>(mut self, bars: I) -> Self
    where
        I: IntoIterator<Item = (L, usize)>,
        L: ToString,
    {
        self.bars = bars
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect();
        self
    }
}

impl Chart for BarChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn to_svg(&self) -> Result<String> {
        let plot = PlotArea::new(MARGIN_LEFT);
        let scale = CountScale::new(self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0));
        let mut svg = SvgWriter::new(WIDTH, HEIGHT)?;
        write_title(&mut svg, &self.title)?;

        for tick in scale.ticks() {
            let y = plot.bottom() - scale.fraction(tick) * plot.height;
            svg.line((plot.left, y), (plot.right(), y), GRID_COLOR, true)?;
            svg.text(plot.left - 8.0, y + 4.0, TextStyle::new(11, Anchor::End), &tick.to_string())?;
        }

        let slot = plot.width / self.bars.len().max(1) as f64;
        for (index, (label, count)) in self.bars.iter().enumerate() {
            let height = scale.fraction(*count) * plot.height;
            let x = plot.left + index as f64 * slot;
            svg.rect(
                x + slot * 0.1,
                plot.bottom() - height,
                slot * 0.8,
                height,
                self.color,
                self.opacity,
            )?;
            let center = x + slot / 2.0;
            let label_y = plot.bottom() + 16.0;
            let style = if self.rotate_labels {
                TextStyle::new(11, Anchor::End).rotated(-45.0)
            } else {
                TextStyle::new(11, Anchor::Middle)
            };
            svg.text(center, label_y, style, label)?;
        }

        write_axes(&mut svg, &plot)?;
        write_axis_labels(&mut svg, &plot, &self.x_label, &self.y_label)?;
        svg.finish()
    }
}

/// Horizontal bars, first category at the top.
#[derive(Debug, Clone)]
pub struct HorizontalBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: &'static str,
    pub opacity: f64,
    pub bars: Vec<(String, usize)>,
}

impl HorizontalBarChart {
    pub fn new(title: impl Into<String>, color: &'static str) -> Self {
        Self {
            title: title.into(),
            x_label: "Number of Accidents".to_string(),
            y_label: String::new(),
            color,
            opacity: 0.8,
            bars: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn bars<I, L>(mut self, bars: I) -> Self
    where
        I: IntoIterator<Item = (L, usize)>,
        L: ToString,
    {
        self.bars = bars
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect();
        self
    }
}

impl Chart for HorizontalBarChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn to_svg(&self) -> Result<String> {
        let plot = PlotArea::new(LABEL_MARGIN);
        let scale = CountScale::new(self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0));
        let mut svg = SvgWriter::new(WIDTH, HEIGHT)?;
        write_title(&mut svg, &self.title)?;

        for tick in scale.ticks() {
            let x = plot.left + scale.fraction(tick) * plot.width;
            svg.line((x, plot.top), (x, plot.bottom()), GRID_COLOR, true)?;
            svg.text(x, plot.bottom() + 16.0, TextStyle::new(11, Anchor::Middle), &tick.to_string())?;
        }

        let slot = plot.height / self.bars.len().max(1) as f64;
        for (index, (label, count)) in self.bars.iter().enumerate() {
            let y = plot.top + index as f64 * slot;
            let width = scale.fraction(*count) * plot.width;
            svg.rect(plot.left, y + slot * 0.1, width, slot * 0.8, self.color, self.opacity)?;
            svg.text(
                plot.left - 8.0,
                y + slot / 2.0 + 4.0,
                TextStyle::new(11, Anchor::End),
                label,
            )?;
        }

        write_axes(&mut svg, &plot)?;
        svg.text(
            plot.left + plot.width / 2.0,
            f64::from(HEIGHT) - 40.0,
            TextStyle::new(12, Anchor::Middle),
            &self.x_label,
        )?;
        if !self.y_label.is_empty() {
            svg.text(20.0, plot.top - 12.0, TextStyle::new(12, Anchor::Start), &self.y_label)?;
        }
        svg.finish()
    }
}

/// Pie with percentage labels and a legend on the right.
///
/// Slices start at twelve o'clock and run counter-clockwise.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub legend_title: Option<String>,
    pub colors: Vec<&'static str>,
    pub slices: Vec<(String, usize)>,
}

impl PieChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            legend_title: None,
            colors: PALETTE.to_vec(),
            slices: Vec::new(),
        }
    }

    pub fn legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = Some(title.into());
        self
    }

    pub fn colors(mut self, colors: &[&'static str]) -> Self {
        self.colors = colors.to_vec();
        self
    }

    pub fn slices<I, L>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = (L, usize)>,
        L: ToString,
    {
        self.slices = slices
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect();
        self
    }

    fn color(&self, index: usize) -> &'static str {
        if self.colors.is_empty() {
            return PALETTE[index % PALETTE.len()];
        }
        self.colors[index % self.colors.len()]
    }

    /// Percentage of the whole for each slice.
    pub fn percentages(&self) -> Vec<f64> {
        let total: usize = self.slices.iter().map(|(_, count)| *count).sum();
        self.slices
            .iter()
            .map(|(_, count)| {
                if total == 0 {
                    0.0
                } else {
                    *count as f64 * 100.0 / total as f64
                }
            })
            .collect()
    }
}

impl Chart for PieChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn to_svg(&self) -> Result<String> {
        let center = (260.0, 260.0);
        let radius = 170.0;
        let mut svg = SvgWriter::new(WIDTH, HEIGHT)?;
        write_title(&mut svg, &self.title)?;

        let percentages = self.percentages();
        let mut start = 90.0_f64;
        for (index, pct) in percentages.iter().enumerate() {
            if *pct <= 0.0 {
                continue;
            }
            let sweep = pct * 3.6;
            let color = self.color(index);
            if sweep >= 359.999 {
                svg.circle(center, radius, color)?;
            } else {
                svg.path(&slice_path(center, radius, start, sweep), color)?;
            }
            let (x, y) = polar(center, radius * 0.65, start + sweep / 2.0);
            svg.text(x, y + 4.0, TextStyle::new(11, Anchor::Middle), &format!("{pct:.1}%"))?;
            start += sweep;
        }

        let legend_x = 500.0;
        let mut legend_y = 120.0;
        if let Some(title) = &self.legend_title {
            svg.text(legend_x, legend_y, TextStyle::new(12, Anchor::Start).bold(), title)?;
            legend_y += 22.0;
        }
        for (index, (label, _)) in self.slices.iter().enumerate() {
            svg.rect(legend_x, legend_y - 11.0, 14.0, 14.0, self.color(index), 1.0)?;
            svg.text(legend_x + 22.0, legend_y, TextStyle::new(11, Anchor::Start), label)?;
            legend_y += 20.0;
        }
        svg.finish()
    }
}

/// One named line of a [`LineChart`].
#[derive(Debug, Clone)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<(i64, usize)>,
}

/// Multi-series line chart over an integer x axis.
#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeries>,
}

impl LineChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: "Number of Accidents".to_string(),
            series: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn series(mut self, label: impl Into<String>, points: Vec<(i64, usize)>) -> Self {
        self.series.push(LineSeries {
            label: label.into(),
            points,
        });
        self
    }

    fn x_range(&self) -> (i64, i64) {
        let xs = self.series.iter().flat_map(|s| s.points.iter().map(|(x, _)| *x));
        let min = xs.clone().min().unwrap_or(0);
        let max = xs.max().unwrap_or(0);
        (min, max.max(min + 1))
    }
}

impl Chart for LineChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn to_svg(&self) -> Result<String> {
        let plot = PlotArea::new(MARGIN_LEFT);
        let max_count = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, count)| *count))
            .max()
            .unwrap_or(0);
        let scale = CountScale::new(max_count);
        let (x_min, x_max) = self.x_range();
        let x_span = (x_max - x_min) as f64;
        let to_x = |x: i64| plot.left + (x - x_min) as f64 / x_span * plot.width;
        let to_y = |count: usize| plot.bottom() - scale.fraction(count) * plot.height;

        let mut svg = SvgWriter::new(WIDTH, HEIGHT)?;
        write_title(&mut svg, &self.title)?;

        for tick in scale.ticks() {
            let y = to_y(tick);
            svg.line((plot.left, y), (plot.right(), y), GRID_COLOR, true)?;
            svg.text(plot.left - 8.0, y + 4.0, TextStyle::new(11, Anchor::End), &tick.to_string())?;
        }
        let x_step = if x_max - x_min > 12 { 2 } else { 1 };
        for x in (x_min..=x_max).step_by(x_step) {
            svg.text(to_x(x), plot.bottom() + 16.0, TextStyle::new(11, Anchor::Middle), &x.to_string())?;
        }

        for (index, series) in self.series.iter().enumerate() {
            let color = SERIES_COLORS[index % SERIES_COLORS.len()];
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .map(|(x, count)| (to_x(*x), to_y(*count)))
                .collect();
            svg.polyline(&points, color)?;
            for point in &points {
                svg.circle(*point, 3.0, color)?;
            }

            let legend_y = plot.top + 10.0 + index as f64 * 18.0;
            let legend_x = plot.right() - 130.0;
            svg.line((legend_x, legend_y - 4.0), (legend_x + 20.0, legend_y - 4.0), color, false)?;
            svg.text(legend_x + 26.0, legend_y, TextStyle::new(11, Anchor::Start), &series.label)?;
        }

        write_axes(&mut svg, &plot)?;
        write_axis_labels(&mut svg, &plot, &self.x_label, &self.y_label)?;
        svg.finish()
    }
}

#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn new(left: f64) -> Self {
        Self {
            left,
            top: MARGIN_TOP,
            width: f64::from(WIDTH) - left - MARGIN_RIGHT,
            height: f64::from(HEIGHT) - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Count axis rounded up to a whole number of 1/2/5 steps.
#[derive(Debug, Clone, Copy)]
struct CountScale {
    step: usize,
    max: usize,
}

impl CountScale {
    fn new(max_count: usize) -> Self {
        let step = tick_step(max_count);
        let max = max_count.div_ceil(step).max(1) * step;
        Self { step, max }
    }

    fn fraction(&self, count: usize) -> f64 {
        count as f64 / self.max as f64
    }

    fn ticks(&self) -> impl Iterator<Item = usize> {
        (0..=self.max).step_by(self.step)
    }
}

fn tick_step(max_count: usize) -> usize {
    if max_count <= 5 {
        return 1;
    }
    let raw = max_count as f64 / 5.0;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|factor| factor * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude);
    (step as usize).max(1)
}

/// Point at `degrees` (counter-clockwise from three o'clock) on a circle.
fn polar(center: (f64, f64), radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees * PI / 180.0;
    (center.0 + radius * radians.cos(), center.1 - radius * radians.sin())
}

fn slice_path(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> String {
    let (x0, y0) = polar(center, radius, start);
    let (x1, y1) = polar(center, radius, start + sweep);
    let large_arc = u8::from(sweep > 180.0);
    format!(
        "M {:.1} {:.1} L {x0:.1} {y0:.1} A {radius:.1} {radius:.1} 0 {large_arc} 0 {x1:.1} {y1:.1} Z",
        center.0, center.1
    )
}

fn write_title(svg: &mut SvgWriter, title: &str) -> Result<()> {
    svg.text(
        f64::from(WIDTH) / 2.0,
        32.0,
        TextStyle::new(16, Anchor::Middle).bold(),
        title,
    )
}

fn write_axes(svg: &mut SvgWriter, plot: &PlotArea) -> Result<()> {
    svg.line((plot.left, plot.bottom()), (plot.right(), plot.bottom()), AXIS_COLOR, false)?;
    svg.line((plot.left, plot.top), (plot.left, plot.bottom()), AXIS_COLOR, false)
}

fn write_axis_labels(svg: &mut SvgWriter, plot: &PlotArea, x_label: &str, y_label: &str) -> Result<()> {
    if !x_label.is_empty() {
        svg.text(
            plot.left + plot.width / 2.0,
            f64::from(HEIGHT) - 16.0,
            TextStyle::new(12, Anchor::Middle),
            x_label,
        )?;
    }
    if !y_label.is_empty() {
        let y = plot.top + plot.height / 2.0;
        svg.text(20.0, y, TextStyle::new(12, Anchor::Middle).rotated(-90.0), y_label)?;
    }
    Ok(())
}
