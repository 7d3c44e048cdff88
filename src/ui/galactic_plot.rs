//! Galactic map: planets as points, trade routes as lines between them

use crate::model::{Planet, TradeRoute};
use crate::theme;
use eframe::egui;

const PLANET_RADIUS: f32 = 5.0;
const MIN_ZOOM: f32 = 0.2;
const MAX_ZOOM: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
struct PlotPoint {
    name: String,
    pos: egui::Pos2,
}

/// Plot region of the main window. The presenter decides what is on it.
#[derive(Debug, Clone)]
pub struct GalacticPlot {
    points: Vec<PlotPoint>,
    lines: Vec<(usize, usize)>,
    zoom: f32,
    offset: egui::Vec2,
    needs_fit: bool,
}

impl Default for GalacticPlot {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            zoom: 1.0,
            offset: egui::Vec2::ZERO,
            needs_fit: true,
        }
    }
}

impl GalacticPlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the plot contents. Routes whose endpoints are not among
    /// `planets` are skipped. Pan and zoom are kept unless the plot was empty.
    pub fn plot(&mut self, planets: &[Planet], routes: &[TradeRoute]) {
        if self.points.is_empty() {
            self.needs_fit = true;
        }
        self.points = planets
            .iter()
            .map(|p| PlotPoint { name: p.name.clone(), pos: egui::pos2(p.x, p.y) })
            .collect();
        let index_of = |name: &str| self.points.iter().position(|p| p.name == name);
        self.lines = routes
            .iter()
            .filter_map(|r| Some((index_of(&r.start)?, index_of(&r.end)?)))
            .collect();
    }

    #[cfg(test)]
    pub fn planet_count(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn route_count(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn planet_names(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.name.as_str())
    }

    fn bounds(&self) -> Option<egui::Rect> {
        let first = self.points.first()?;
        let mut rect = egui::Rect::from_min_max(first.pos, first.pos);
        for p in &self.points {
            rect.extend_with(p.pos);
        }
        Some(rect)
    }

    /// Pick zoom/offset so every planet is visible inside `view`
    fn fit_to(&mut self, view: egui::Rect) {
        self.offset = egui::Vec2::ZERO;
        self.zoom = 1.0;
        let Some(bounds) = self.bounds() else {
            return;
        };
        let margin = 40.0;
        let avail = (view.size() - egui::vec2(margin, margin) * 2.0).max(egui::vec2(1.0, 1.0));
        let size = bounds.size().max(egui::vec2(1.0, 1.0));
        self.zoom = (avail.x / size.x).min(avail.y / size.y).clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset = -bounds.center().to_vec2() * self.zoom;
    }

    fn to_screen(&self, view: egui::Rect, pos: egui::Pos2) -> egui::Pos2 {
        // Map y grows upward, screen y grows downward
        let p = egui::vec2(pos.x, -pos.y) * self.zoom;
        view.center() + p + egui::vec2(self.offset.x, -self.offset.y)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let view = response.rect;

        if self.needs_fit {
            self.needs_fit = false;
            self.fit_to(view);
        }

        // Pan with drag, zoom with scroll, double click to refit
        if response.dragged() {
            let delta = response.drag_delta();
            self.offset += egui::vec2(delta.x, -delta.y);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.zoom = (self.zoom * (1.0 + scroll * 0.002)).clamp(MIN_ZOOM, MAX_ZOOM);
            }
        }
        if response.double_clicked() {
            self.fit_to(view);
        }

        painter.rect_filled(view, 0.0, theme::BG_ELEVATED);

        if self.points.is_empty() {
            painter.text(
                view.center(),
                egui::Align2::CENTER_CENTER,
                "Check planets to show them on the map",
                egui::FontId::proportional(theme::FONT_BODY),
                theme::TEXT_DIM,
            );
            return;
        }

        for &(a, b) in &self.lines {
            painter.line_segment(
                [
                    self.to_screen(view, self.points[a].pos),
                    self.to_screen(view, self.points[b].pos),
                ],
                egui::Stroke::new(theme::STROKE_MEDIUM, theme::ACCENT_MUTED),
            );
        }

        let hover = response.hover_pos();
        for point in &self.points {
            let screen = self.to_screen(view, point.pos);
            let hovered = hover.is_some_and(|h| h.distance(screen) <= PLANET_RADIUS * 2.0);
            let color = if hovered { theme::ACCENT_LIGHT } else { theme::ACCENT };
            painter.circle_filled(screen, PLANET_RADIUS, color);
            painter.text(
                screen + egui::vec2(PLANET_RADIUS + 3.0, -PLANET_RADIUS - 3.0),
                egui::Align2::LEFT_BOTTOM,
                &point.name,
                egui::FontId::proportional(theme::FONT_SMALL),
                theme::TEXT_SECONDARY,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planets() -> Vec<Planet> {
        vec![Planet::new("A", 0.0, 0.0), Planet::new("B", 100.0, 50.0)]
    }

    #[test]
    fn routes_need_both_endpoints_plotted() {
        let mut plot = GalacticPlot::new();
        plot.plot(
            &planets(),
            &[TradeRoute::new("a_b", "A", "B"), TradeRoute::new("a_c", "A", "C")],
        );
        assert_eq!(plot.planet_count(), 2);
        assert_eq!(plot.route_count(), 1);
        assert_eq!(plot.planet_names().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn fit_keeps_planets_inside_view() {
        let mut plot = GalacticPlot::new();
        plot.plot(&planets(), &[]);
        let view = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 300.0));
        plot.fit_to(view);
        for p in &plot.points {
            assert!(view.contains(plot.to_screen(view, p.pos)));
        }
    }

    #[test]
    fn replotting_replaces_contents() {
        let mut plot = GalacticPlot::new();
        plot.plot(&planets(), &[TradeRoute::new("a_b", "A", "B")]);
        plot.plot(&planets()[..1], &[TradeRoute::new("a_b", "A", "B")]);
        assert_eq!(plot.planet_count(), 1);
        assert_eq!(plot.route_count(), 0);
    }

    fn render(plot: &mut GalacticPlot) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| plot.show(ui));
        });
    }

    #[test]
    fn replotting_keeps_pan_and_zoom() {
        let mut plot = GalacticPlot::new();
        plot.plot(&planets()[..1], &[]);
        render(&mut plot);
        assert!(!plot.needs_fit);

        plot.offset += egui::vec2(30.0, -10.0);
        plot.zoom = 2.5;
        let (offset, zoom) = (plot.offset, plot.zoom);
        plot.plot(&planets(), &[TradeRoute::new("a_b", "A", "B")]);
        render(&mut plot);
        assert_eq!((plot.offset, plot.zoom), (offset, zoom));
    }

    #[test]
    fn first_planets_after_empty_plot_are_fitted() {
        let mut plot = GalacticPlot::new();
        plot.plot(&[], &[]);
        render(&mut plot);
        assert!(!plot.needs_fit);

        plot.plot(&planets(), &[]);
        assert!(plot.needs_fit);
    }
}
