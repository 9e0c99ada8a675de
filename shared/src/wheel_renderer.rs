use std::f64::consts::TAU;

use crate::{
    angle::slice_angle,
    palette::{swatch_for, Color},
    shared_wheel::WheelOption,
};

pub const EMPTY_WHEEL_MESSAGE: &str = "Add options to spin!";
const ELLIPSIS: char = '…';

const FACE_RATIO: f64 = 0.94;
const GRADIENT_INNER_RATIO: f64 = 0.2;
const GRADIENT_OUTER_RATIO: f64 = 0.9;
const HIGHLIGHT_FRACTION: f64 = 0.35;
const LABEL_RIGHT_RATIO: f64 = 0.86;
const LABEL_MAX_WIDTH_RATIO: f64 = 0.6;
const LABEL_SHADOW_OFFSET: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `distance` away from `self` in direction `angle`.
    pub fn polar(self, angle: f64, distance: f64) -> Point {
        Point::new(self.x + angle.cos() * distance, self.y + angle.sin() * distance)
    }
}

/// Drawing area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear {
        from: Point,
        to: Point,
        stops: Vec<(f64, Color)>,
    },
    Radial {
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        stops: Vec<(f64, Color)>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub align: TextAlign,
    pub color: Color,
}

/// Text anchored at `origin`, rotated by `angle`, then drawn at `(dx, dy)` in the rotated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    pub origin: Point,
    pub angle: f64,
    pub dx: f64,
    pub dy: f64,
}

/// The drawing primitives the wheel needs. Text is vertically centered on its anchor.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn fill_disk(&mut self, center: Point, radius: f64, paint: &Paint);
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, line_width: f64);
    /// Pie slice from the center, `start..end` radians clockwise in screen space.
    fn fill_sector(&mut self, center: Point, radius: f64, start: f64, end: f64, paint: &Paint);
    fn stroke_sector(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        color: Color,
        line_width: f64,
    );
    fn measure_text(&mut self, text: &str, font: &str) -> f64;
    fn fill_text(&mut self, text: &str, placement: TextPlacement, style: &TextStyle);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub mid: f64,
}

/// Where everything sits for a given option count, rotation and viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
    pub face_radius: f64,
    pub slice: f64,
    pub segments: Vec<Segment>,
}

impl WheelGeometry {
    pub fn compute(count: usize, rotation: f64, viewport: Viewport) -> Self {
        let radius = (viewport.width.min(viewport.height) / 2.0 - 2.0).max(0.0);
        let slice = if count == 0 { TAU } else { slice_angle(count) };
        let segments = (0..count)
            .map(|index| {
                let start = rotation + index as f64 * slice;
                Segment {
                    index,
                    start,
                    end: start + slice,
                    mid: start + slice / 2.0,
                }
            })
            .collect();

        Self {
            center: viewport.center(),
            radius,
            face_radius: radius * FACE_RATIO,
            slice,
            segments,
        }
    }
}

/// Cuts `text` from the end until it fits `max_width`, marking the cut with an ellipsis.
pub fn truncate_label<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    font: &str,
    max_width: f64,
) -> String {
    if surface.measure_text(text, font) <= max_width {
        return text.to_string();
    }

    let mut kept: Vec<char> = text.chars().collect();
    while !kept.is_empty() {
        let candidate: String = kept.iter().chain(std::iter::once(&ELLIPSIS)).collect();
        if surface.measure_text(&candidate, font) <= max_width {
            return candidate;
        }
        kept.pop();
    }
    ELLIPSIS.to_string()
}

#[derive(Debug, Clone)]
pub struct WheelRenderer {
    pub label_font: &'static str,
    pub placeholder_font: &'static str,
}

impl Default for WheelRenderer {
    fn default() -> Self {
        Self {
            label_font: "600 14px Inter, system-ui, sans-serif",
            placeholder_font: "500 16px Inter, system-ui, sans-serif",
        }
    }
}

impl WheelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one full frame. Reads nothing but its arguments.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        options: &[WheelOption],
        rotation: f64,
        viewport: Viewport,
    ) -> WheelGeometry {
        let geometry = WheelGeometry::compute(options.len(), rotation, viewport);
        let center = geometry.center;
        let radius = geometry.radius;
        let face = geometry.face_radius;

        surface.clear(viewport);
        surface.fill_disk(
            center,
            radius,
            &Paint::Radial {
                center,
                inner_radius: 0.0,
                outer_radius: radius,
                stops: vec![
                    (0.0, Color::hex(0x1e293b)),
                    (0.5, Color::hex(0x0f172a)),
                    (1.0, Color::hex(0x030712)),
                ],
            },
        );

        if options.is_empty() {
            surface.fill_disk(center, face, &Paint::Solid(Color::Rgba(30, 64, 175, 0.15)));
            surface.fill_text(
                EMPTY_WHEEL_MESSAGE,
                TextPlacement {
                    origin: center,
                    angle: 0.0,
                    dx: 0.0,
                    dy: 0.0,
                },
                &TextStyle {
                    font: self.placeholder_font,
                    align: TextAlign::Center,
                    color: Color::Rgba(148, 163, 184, 0.4),
                },
            );
            return geometry;
        }

        for (segment, option) in geometry.segments.iter().zip(options) {
            let swatch = swatch_for(option.color_index);

            surface.fill_sector(
                center,
                face,
                segment.start,
                segment.end,
                &Paint::Linear {
                    from: center.polar(segment.mid, radius * GRADIENT_INNER_RATIO),
                    to: center.polar(segment.mid, radius * GRADIENT_OUTER_RATIO),
                    stops: vec![(0.0, swatch.gradient_start), (1.0, swatch.gradient_end)],
                },
            );
            surface.stroke_sector(
                center,
                face,
                segment.start,
                segment.end,
                Color::Rgba(0, 0, 0, 0.3),
                2.0,
            );
            surface.fill_sector(
                center,
                face,
                segment.start,
                segment.start + geometry.slice * HIGHLIGHT_FRACTION,
                &Paint::Solid(Color::WHITE.with_alpha(0.12)),
            );

            let max_width = radius * LABEL_MAX_WIDTH_RATIO;
            let text = truncate_label(surface, &option.label, self.label_font, max_width);
            let mut placement = TextPlacement {
                origin: center,
                angle: segment.mid,
                dx: radius * LABEL_RIGHT_RATIO,
                dy: LABEL_SHADOW_OFFSET,
            };
            let mut style = TextStyle {
                font: self.label_font,
                align: TextAlign::Right,
                color: Color::Rgba(0, 0, 0, 0.6),
            };
            surface.fill_text(&text, placement, &style);

            placement.dy = 0.0;
            style.color = Color::WHITE;
            surface.fill_text(&text, placement, &style);
        }

        surface.stroke_circle(center, face, Color::WHITE.with_alpha(0.08), 2.0);
        geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::normalize_angle;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawOp {
        Clear(Viewport),
        Disk(Point, f64, Paint),
        Ring(Point, f64, Color),
        Sector(f64, f64, Paint),
        SectorBorder(f64, f64),
        Text(String, TextPlacement, TextStyle),
    }

    /// Every glyph is 8px wide.
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<DrawOp>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, viewport: Viewport) {
            self.ops.push(DrawOp::Clear(viewport));
        }

        fn fill_disk(&mut self, center: Point, radius: f64, paint: &Paint) {
            self.ops.push(DrawOp::Disk(center, radius, paint.clone()));
        }

        fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, _line_width: f64) {
            self.ops.push(DrawOp::Ring(center, radius, color));
        }

        fn fill_sector(&mut self, _: Point, _: f64, start: f64, end: f64, paint: &Paint) {
            self.ops.push(DrawOp::Sector(start, end, paint.clone()));
        }

        fn stroke_sector(&mut self, _: Point, _: f64, start: f64, end: f64, _: Color, _: f64) {
            self.ops.push(DrawOp::SectorBorder(start, end));
        }

        fn measure_text(&mut self, text: &str, _font: &str) -> f64 {
            text.chars().count() as f64 * 8.0
        }

        fn fill_text(&mut self, text: &str, placement: TextPlacement, style: &TextStyle) {
            self.ops.push(DrawOp::Text(text.to_string(), placement, style.clone()));
        }
    }

    fn options(labels: &[&str]) -> Vec<WheelOption> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| WheelOption {
                id: format!("opt-{i}"),
                label: label.to_string(),
                color_index: i,
            })
            .collect()
    }

    fn texts(surface: &RecordingSurface) -> Vec<String> {
        surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text, ..) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_geometry_segments_cover_the_circle() {
        let geometry = WheelGeometry::compute(4, 0.5, Viewport::new(400.0, 300.0));
        assert_eq!(geometry.center, Point::new(200.0, 150.0));
        assert_eq!(geometry.radius, 148.0);
        assert!((geometry.face_radius - 148.0 * 0.94).abs() < 1e-12);
        assert_eq!(geometry.segments.len(), 4);
        assert_eq!(geometry.segments[0].start, 0.5);
        for pair in geometry.segments.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-12);
        }
        assert!((geometry.segments[3].end - (0.5 + TAU)).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_viewport_never_has_negative_radius() {
        let geometry = WheelGeometry::compute(3, 0.0, Viewport::new(2.0, 2.0));
        assert_eq!(geometry.radius, 0.0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = WheelRenderer::new();
        let opts = options(&["Pizza", "Tacos", "A very long option label that cannot fit"]);
        let viewport = Viewport::new(320.0, 320.0);

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        let a = renderer.render(&mut first, &opts, 1.234, viewport);
        let b = renderer.render(&mut second, &opts, 1.234, viewport);

        assert_eq!(a, b);
        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn test_empty_wheel_draws_placeholder() {
        let renderer = WheelRenderer::new();
        let mut surface = RecordingSurface::default();
        let geometry = renderer.render(&mut surface, &[], 0.0, Viewport::new(200.0, 200.0));

        assert!(geometry.segments.is_empty());
        assert_eq!(texts(&surface), vec![EMPTY_WHEEL_MESSAGE.to_string()]);
        assert!(!surface.ops.iter().any(|op| matches!(op, DrawOp::Sector(..))));
        assert!(matches!(surface.ops[0], DrawOp::Clear(_)));
        assert!(matches!(surface.ops[1], DrawOp::Disk(_, _, Paint::Radial { .. })));
    }

    #[test]
    fn test_single_option_is_a_full_circle() {
        let renderer = WheelRenderer::new();
        let mut surface = RecordingSurface::default();
        renderer.render(&mut surface, &options(&["Only"]), 0.25, Viewport::new(200.0, 200.0));

        let sectors: Vec<(f64, f64)> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Sector(start, end, Paint::Linear { .. }) => Some((*start, *end)),
                _ => None,
            })
            .collect();
        assert_eq!(sectors.len(), 1);
        assert!((sectors[0].1 - sectors[0].0 - TAU).abs() < 1e-12);
        assert_eq!(texts(&surface), vec!["Only".to_string(), "Only".to_string()]);
    }

    #[test]
    fn test_labels_drawn_shadow_then_white() {
        let renderer = WheelRenderer::new();
        let mut surface = RecordingSurface::default();
        let viewport = Viewport::new(300.0, 300.0);
        let geometry = renderer.render(&mut surface, &options(&["A", "B"]), 0.0, viewport);

        let labels: Vec<(TextPlacement, TextStyle)> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(_, placement, style) => Some((*placement, style.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0].0.dy, 2.0);
        assert_eq!(labels[1].0.dy, 0.0);
        assert_eq!(labels[1].1.color, Color::WHITE);
        assert_eq!(labels[1].1.align, TextAlign::Right);
        assert!((labels[0].0.dx - geometry.radius * 0.86).abs() < 1e-12);
        assert!((normalize_angle(labels[2].0.angle) - geometry.segments[1].mid).abs() < 1e-12);
        assert!(matches!(surface.ops.last(), Some(DrawOp::Ring(..))));
    }

    #[test]
    fn test_truncate_label_fits_width() {
        let mut surface = RecordingSurface::default();
        assert_eq!(truncate_label(&mut surface, "short", "f", 100.0), "short");
        // 10 chars at 8px = 80px; 5 chars + ellipsis = 48px
        assert_eq!(truncate_label(&mut surface, "abcdefghij", "f", 50.0), "abcde…");
        assert_eq!(truncate_label(&mut surface, "ünïcödé", "f", 32.0), "ünï…");
        assert_eq!(truncate_label(&mut surface, "abc", "f", 1.0), "…");
    }

    #[test]
    fn test_long_labels_are_truncated_in_render() {
        let renderer = WheelRenderer::new();
        let mut surface = RecordingSurface::default();
        let label = "x".repeat(80);
        let viewport = Viewport::new(200.0, 200.0);
        let geometry = renderer.render(&mut surface, &options(&[&label]), 0.0, viewport);

        let drawn = &texts(&surface)[0];
        assert!(drawn.ends_with('…'));
        assert!(drawn.chars().count() as f64 * 8.0 <= geometry.radius * 0.6);
    }
}
