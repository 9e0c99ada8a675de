use gloo::events::EventListener;
use log::{error, warn};
use shared::palette::Color;
use shared::wheel_renderer::{
    Paint, Point, Surface, TextPlacement, TextStyle, Viewport, WheelRenderer,
};
use shared::OptionList;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

/// [`Surface`] over a 2D canvas context already scaled to CSS pixels.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    dpr: f64,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, dpr: f64) -> Self {
        Self { ctx, dpr }
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_string()),
            Paint::Linear { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                for (offset, color) in stops {
                    let _ = gradient.add_color_stop(*offset as f32, &color.to_string());
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => match self.ctx.create_radial_gradient(
                center.x,
                center.y,
                *inner_radius,
                center.x,
                center.y,
                *outer_radius,
            ) {
                Ok(gradient) => {
                    for (offset, color) in stops {
                        let _ = gradient.add_color_stop(*offset as f32, &color.to_string());
                    }
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                }
                Err(_) => {
                    warn!("Radial gradient rejected, using the first stop");
                    let fallback = stops.first().map(|(_, c)| *c).unwrap_or(Color::hex(0x0f172a));
                    self.ctx.set_fill_style_str(&fallback.to_string());
                }
            },
        }
    }

    fn sector_path(&self, center: Point, radius: f64, start: f64, end: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(center.x, center.y);
        let _ = self.ctx.arc(center.x, center.y, radius, start, end);
        self.ctx.close_path();
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, viewport: Viewport) {
        let _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_disk(&mut self, center: Point, radius: f64, paint: &Paint) {
        self.ctx.save();
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        self.set_fill(paint);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, line_width: f64) {
        self.ctx.save();
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn fill_sector(&mut self, center: Point, radius: f64, start: f64, end: f64, paint: &Paint) {
        self.ctx.save();
        self.sector_path(center, radius, start, end);
        self.set_fill(paint);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_sector(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        color: Color,
        line_width: f64,
    ) {
        self.ctx.save();
        self.sector_path(center, radius, start, end);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn measure_text(&mut self, text: &str, font: &str) -> f64 {
        self.ctx.set_font(font);
        self.ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }

    fn fill_text(&mut self, text: &str, placement: TextPlacement, style: &TextStyle) {
        self.ctx.save();
        let _ = self.ctx.translate(placement.origin.x, placement.origin.y);
        let _ = self.ctx.rotate(placement.angle);
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&style.color.to_string());
        let _ = self.ctx.fill_text(text, placement.dx, placement.dy);
        self.ctx.restore();
    }
}

/// Sizes the backing store to the element's CSS box times the device pixel ratio.
fn fit_canvas(canvas: &HtmlCanvasElement) -> (Viewport, f64) {
    let dpr = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);
    let rect = canvas.get_bounding_client_rect();
    let viewport = Viewport::new(rect.width(), rect.height());

    let width = (viewport.width * dpr).round() as u32;
    let height = (viewport.height * dpr).round() as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    (viewport, dpr)
}

fn draw_wheel(canvas: &HtmlCanvasElement, options: &OptionList, rotation: f64) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => {
                error!("Canvas context is not 2D");
                return;
            }
        },
        _ => {
            error!("Failed to get a 2D canvas context");
            return;
        }
    };

    let (viewport, dpr) = fit_canvas(canvas);
    let mut surface = CanvasSurface::new(&ctx, dpr);
    WheelRenderer::new().render(&mut surface, options.as_slice(), rotation, viewport);
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub options: OptionList,
    pub rotation: f64,
    pub is_spinning: bool,
    pub celebrating: bool,
    pub pointer_nudged: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let resize_count = use_state(|| 0u32);

    {
        let resize_count = resize_count.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                let mut count = 0u32;
                EventListener::new(&window, "resize", move |_| {
                    count = count.wrapping_add(1);
                    resize_count.set(count);
                })
            });
            move || drop(listener)
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.options.clone(), props.rotation, *resize_count),
            move |(options, rotation, _)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, options, *rotation);
                }
                || ()
            },
        );
    }

    let frame_class = classes!(
        styles::WHEEL_FRAME,
        props.is_spinning.then_some(styles::WHEEL_FRAME_SPINNING),
        props.celebrating.then_some(styles::WHEEL_FRAME_CELEBRATING),
    );
    let pointer_class = classes!(
        styles::WHEEL_POINTER,
        props.pointer_nudged.then_some(styles::WHEEL_POINTER_NUDGED),
    );

    html! {
        <div class={frame_class}>
            <div class={pointer_class} aria-hidden="true"></div>
            <canvas ref={canvas_ref} class="w-full h-full block"></canvas>
        </div>
    }
}
