use tracing::debug;

use crate::core::pie::{PieDataset, PieModel};
use crate::core::types::{CategoryTotal, Viewport};
use crate::error::ChartResult;
use crate::interaction::SelectionMachine;
use crate::render::{
    ArcPrimitive, CirclePrimitive, FillStyle, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::snapshot::PieChartSnapshot;
use super::style::{Palette, PieStyle, month_name};

/// Listener invoked synchronously after each selection transition, carrying
/// the newly selected value or `None` when the selection was cleared.
pub type SelectionListener = Box<dyn FnMut(Option<&CategoryTotal>)>;

/// Interactive donut chart of per-category spending totals.
///
/// The component is a plain owned object: the host forwards measure, pointer,
/// and draw events and reads back the redraw request. All calls are
/// synchronous; the chart never schedules work of its own.
pub struct PieChart {
    style: PieStyle,
    palette: Palette,
    viewport: Viewport,
    model: Option<PieModel>,
    selection: SelectionMachine,
    listener: Option<SelectionListener>,
    needs_redraw: bool,
}

impl PieChart {
    #[must_use]
    pub fn new(style: PieStyle, palette: Palette) -> Self {
        Self {
            style,
            palette,
            viewport: Viewport::new(0, 0),
            model: None,
            selection: SelectionMachine::default(),
            listener: None,
            needs_redraw: false,
        }
    }

    /// Replaces the dataset, failing without any state change when it carries
    /// more than the supported number of categories.
    ///
    /// On success the selection is reset and a redraw is requested.
    pub fn set_dataset(&mut self, dataset: PieDataset) -> ChartResult<()> {
        let model = PieModel::build(dataset)?;
        debug!(
            categories = model.dataset().values.len(),
            total = model.total(),
            "pie dataset set"
        );
        self.model = Some(model);
        self.selection.clear();
        self.needs_redraw = true;
        Ok(())
    }

    /// Registers the selection listener. Snapshots never carry it; the host
    /// re-registers after `restore`.
    pub fn set_selection_listener(&mut self, listener: impl FnMut(Option<&CategoryTotal>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Resolves the layout constraints to the largest centered square.
    pub fn measure(&mut self, constraints: Viewport) -> Viewport {
        let side = constraints.width.min(constraints.height);
        self.viewport = Viewport::new(side, side);
        self.viewport
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    #[must_use]
    pub fn selected_value(&self) -> Option<&CategoryTotal> {
        self.model
            .as_ref()
            .zip(self.selection.selected())
            .and_then(|(model, index)| model.value(index))
    }

    /// Processes a tap, toggling the selection and notifying the listener
    /// before returning. Taps that resolve to no sector are ignored.
    pub fn handle_pointer(&mut self, x: f64, y: f64) {
        let Some(model) = &self.model else {
            return;
        };
        let Some(transition) = self.selection.tap_at(x, y, self.viewport, model.sectors()) else {
            return;
        };

        let value = transition.current.and_then(|index| model.value(index));
        if let Some(listener) = &mut self.listener {
            listener(value);
        }
        self.needs_redraw = true;
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
    /// Draw order: sector arcs, selection highlight, center hole, header
    /// (total + currency symbol), month subtitle. A degenerate model skips
    /// arcs and highlight.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        let Some(model) = &self.model else {
            return frame;
        };

        let size =
            f64::from(self.viewport.width.min(self.viewport.height)) - 2.0 * self.style.padding_px;
        if size <= 0.0 {
            return frame;
        }
        let center_x = f64::from(self.viewport.width) / 2.0;
        let center_y = f64::from(self.viewport.height) / 2.0;
        let radius = size / 2.0;

        if !model.is_degenerate() {
            for (position, sector) in model.sectors().iter().enumerate() {
                let slot = self.palette.slot(position);
                frame = frame.with_arc(ArcPrimitive::new(
                    center_x,
                    center_y,
                    radius,
                    sector.start_deg,
                    sector.span_deg(),
                    FillStyle::LinearGradient {
                        from: slot.from,
                        to: slot.to,
                    },
                ));
            }
            if let Some(selected) = self.selection.selected() {
                if let Some(sector) = model.sectors().get(selected) {
                    frame = frame.with_arc(ArcPrimitive::new(
                        center_x,
                        center_y,
                        radius,
                        sector.start_deg,
                        sector.span_deg(),
                        FillStyle::Solid(self.style.highlight),
                    ));
                }
            }
        }

        frame = frame.with_circle(CirclePrimitive::new(
            center_x,
            center_y,
            size / self.style.hole_divisor,
            self.style.background,
        ));

        let header_px = size / 8.0;
        let subtitle_px = size / 17.0;
        frame = frame.with_text(TextPrimitive::new(
            format!("{} {}", model.total(), model.dataset().currency_symbol),
            center_x,
            center_y,
            header_px,
            self.style.header_color,
            TextHAlign::Center,
        ));
        frame.with_text(TextPrimitive::new(
            format!(
                "{} {}",
                self.style.subtitle_label,
                month_name(model.dataset().month)
            ),
            center_x,
            center_y + header_px / 2.0 + size / 20.0,
            subtitle_px,
            self.style.subtitle_color,
            TextHAlign::Center,
        ))
    }

    /// Builds the current frame and hands it to `renderer`, consuming any
    /// pending redraw request.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_frame();
        renderer.render(&frame)?;
        self.needs_redraw = false;
        Ok(())
    }

    /// Captures dataset, derived geometry, and selection for later restore.
    #[must_use]
    pub fn capture(&self) -> PieChartSnapshot {
        PieChartSnapshot {
            viewport: self.viewport,
            model: self.model.clone(),
            selected: self.selection.selected(),
        }
    }

    /// Replays a captured state verbatim, without recomputing geometry, and
    /// requests a redraw. The listener registration is left as-is.
    pub fn restore(&mut self, snapshot: PieChartSnapshot) {
        self.viewport = snapshot.viewport;
        self.model = snapshot.model;
        self.selection.set_selected(snapshot.selected);
        self.needs_redraw = true;
    }
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new(PieStyle::default(), Palette::default())
    }
}
