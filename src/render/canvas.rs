use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{Painter, Text, TextAlign};
use crate::geometry::{Point, Size};

fn trace(ctx: &CanvasRenderingContext2d, points: &[Point], close: bool) {
    ctx.begin_path();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(p.x, p.y);
        } else {
            ctx.line_to(p.x, p.y);
        }
    }
    if close {
        ctx.close_path();
    }
}

impl Painter for CanvasRenderingContext2d {
    fn clear(&mut self, viewport: Size, color: &str) {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        self.set_fill_style_str(color);
        self.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn set_view(&mut self, zoom: f64, pan: Point) {
        self.set_transform(zoom, 0.0, 0.0, zoom, pan.x, pan.y).ok();
    }

    fn fill_polygon(&mut self, points: &[Point], color: &str) {
        trace(self, points, true);
        self.set_fill_style_str(color);
        self.fill();
    }

    fn stroke_polygon(&mut self, points: &[Point], color: &str, width: f64) {
        trace(self, points, true);
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, TAU).ok();
        self.set_fill_style_str(color);
        self.fill();
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f64, dash: &[f64]) {
        let segments: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d)).collect();
        self.save();
        self.set_line_dash(&segments).ok();
        trace(self, points, false);
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.stroke();
        self.restore();
    }

    fn fill_text(&mut self, text: &Text<'_>) {
        self.save();
        self.translate(text.anchor.x, text.anchor.y).ok();
        if text.rotation != 0.0 {
            self.rotate(text.rotation).ok();
        }
        self.set_font(&text.font);
        self.set_fill_style_str(text.color);
        match text.align {
            TextAlign::Center => {
                self.set_text_align("center");
                self.set_text_baseline("middle");
            }
            TextAlign::TopLeft => {
                self.set_text_align("left");
                self.set_text_baseline("top");
            }
        }
        // inherent method, not the trait method of the same name
        CanvasRenderingContext2d::fill_text(self, text.text, 0.0, text.offset_y).ok();
        self.restore();
    }
}
