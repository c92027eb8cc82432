use tracing::debug;

use crate::core::line::{LineDataset, LineModel};
use crate::core::types::Viewport;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, LineStrokeStyle, PolylinePrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::snapshot::LineChartSnapshot;
use super::style::LineStyle;

/// Daily-spend drill-down chart for one category.
///
/// Like [`super::PieChart`], this is a plain owned object driven entirely by
/// host calls; geometry is rebuilt whenever the dataset or the measured
/// viewport changes.
pub struct LineChart {
    style: LineStyle,
    viewport: Viewport,
    model: Option<LineModel>,
    needs_redraw: bool,
}

impl LineChart {
    #[must_use]
    pub fn new(style: LineStyle) -> Self {
        Self {
            style,
            viewport: Viewport::new(0, 0),
            model: None,
            needs_redraw: false,
        }
    }

    /// Replaces the dataset and derives grid and point geometry for the
    /// current viewport. Cannot fail; an empty dataset yields a neutral chart.
    pub fn set_dataset(&mut self, dataset: LineDataset) {
        debug!(
            category = %dataset.category,
            points = dataset.points.len(),
            "line dataset set"
        );
        self.model = Some(LineModel::build(dataset, self.viewport));
        self.needs_redraw = true;
    }

    /// Accepts the full given rect and reprojects geometry when it changed.
    pub fn measure(&mut self, constraints: Viewport) -> Viewport {
        if constraints != self.viewport {
            self.viewport = constraints;
            if let Some(model) = self.model.take() {
                self.model = Some(LineModel::build(model.into_dataset(), constraints));
                self.needs_redraw = true;
            }
        }
        self.viewport
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn model(&self) -> Option<&LineModel> {
        self.model.as_ref()
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consumes the pending redraw request, if any.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Materializes the draw list for the current state.
    ///
    /// Draw order: smoothed spend path with vertex markers, dashed horizontal
    /// grid with amount labels, dashed per-point vertical lines with date
    /// labels, and the zero baseline. A neutral model draws only the baseline.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        let Some(model) = &self.model else {
            return frame;
        };

        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        let dash = LineStrokeStyle::Dashed {
            on_px: self.style.dash_on_px,
            off_px: self.style.dash_off_px,
        };

        if !model.points().is_empty() {
            let mut vertices = Vec::with_capacity(model.points().len() + 1);
            vertices.push((0.0, height));
            for point in model.points() {
                vertices.push((point.x, point.y));
                frame = frame.with_circle(CirclePrimitive::new(
                    point.x,
                    point.y,
                    self.style.dot_radius,
                    self.style.stroke,
                ));
            }
            frame = frame.with_polyline(PolylinePrimitive::new(
                vertices,
                self.style.stroke_width,
                self.style.corner_radius,
                self.style.stroke,
            ));
        }

        let grid = model.grid();
        for (index, label) in grid.labels.iter().enumerate() {
            let y = f64::from(grid.step_px) * index as f64;
            frame = frame.with_text(TextPrimitive::new(
                label.clone(),
                0.0,
                y,
                self.style.legend_font_px,
                self.style.legend_color,
                TextHAlign::Left,
            ));
            frame = frame.with_line(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                self.style.legend_stroke_width,
                dash,
                self.style.legend_color,
            ));
        }

        frame = frame.with_text(TextPrimitive::new(
            "0",
            0.0,
            height,
            self.style.legend_font_px,
            self.style.legend_color,
            TextHAlign::Left,
        ));
        frame = frame.with_line(LinePrimitive::new(
            0.0,
            height,
            width,
            height,
            self.style.legend_stroke_width,
            dash,
            self.style.legend_color,
        ));

        for (index, point) in model.points().iter().enumerate() {
            let x = model.point_width() * (index as f64 + 1.0);
            frame = frame.with_line(LinePrimitive::new(
                x,
                0.0,
                x,
                height,
                self.style.legend_stroke_width,
                dash,
                self.style.legend_color,
            ));
            frame = frame.with_text(TextPrimitive::new(
                point.label.clone(),
                x - model.point_width() / 2.0,
                height,
                self.style.legend_font_px,
                self.style.legend_color,
                TextHAlign::Left,
            ));
        }

        frame
    }

    /// Builds the current frame and hands it to `renderer`, consuming any
    /// pending redraw request.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_frame();
        renderer.render(&frame)?;
        self.needs_redraw = false;
        Ok(())
    }

    /// Captures dataset and derived geometry for later restore.
    #[must_use]
    pub fn capture(&self) -> LineChartSnapshot {
        LineChartSnapshot {
            viewport: self.viewport,
            model: self.model.clone(),
        }
    }

    /// Replays a captured state verbatim, without recomputing geometry, and
    /// requests a redraw.
    pub fn restore(&mut self, snapshot: LineChartSnapshot) {
        self.viewport = snapshot.viewport;
        self.model = snapshot.model;
        self.needs_redraw = true;
    }
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(LineStyle::default())
    }
}
