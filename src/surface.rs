// Drawing seam for the effects. The browser implementation wraps a 2d canvas
// context; tests use a recorder that keeps every call.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn resize(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, style: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, style: &str);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("2d context is not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &str) {
        self.context.set_fill_style(&JsValue::from_str(style));
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str) {
        self.context.begin_path();
        // arc only fails on a negative radius
        let _ = self
            .context
            .arc(x, y, radius.max(0.0), 0.0, std::f64::consts::PI * 2.0);
        self.context.set_fill_style(&JsValue::from_str(style));
        self.context.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, style: &str) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style(&JsValue::from_str(style));
        self.context.set_line_width(width);
        self.context.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, style: &str) {
        self.context.set_fill_style(&JsValue::from_str(style));
        self.context.set_font(font);
        let _ = self.context.fill_text(text, x, y);
    }
}

#[cfg(test)]
pub mod recording {
    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Draw {
        Rect { x: f64, y: f64, width: f64, height: f64, style: String },
        Circle { x: f64, y: f64, radius: f64, style: String },
        Line { from: [f64; 2], to: [f64; 2], width: f64, style: String },
        Text { text: String, x: f64, y: f64, font: String, style: String },
    }

    // Keeps every draw call so tests can inspect what a frame produced
    #[derive(Default)]
    pub struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub draws: Vec<Draw>,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> RecordingSurface {
            RecordingSurface {
                width,
                height,
                draws: Vec::new(),
            }
        }

        pub fn lines(&self) -> impl Iterator<Item = &Draw> {
            self.draws.iter().filter(|d| matches!(d, Draw::Line { .. }))
        }

        pub fn circles(&self) -> usize {
            self.draws
                .iter()
                .filter(|d| matches!(d, Draw::Circle { .. }))
                .count()
        }

        pub fn texts(&self) -> Vec<&Draw> {
            self.draws
                .iter()
                .filter(|d| matches!(d, Draw::Text { .. }))
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn resize(&mut self, width: f64, height: f64) {
            self.width = width;
            self.height = height;
        }

        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &str) {
            self.draws.push(Draw::Rect {
                x,
                y,
                width,
                height,
                style: style.to_owned(),
            });
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str) {
            self.draws.push(Draw::Circle {
                x,
                y,
                radius,
                style: style.to_owned(),
            });
        }

        fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, style: &str) {
            self.draws.push(Draw::Line {
                from,
                to,
                width,
                style: style.to_owned(),
            });
        }

        fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, style: &str) {
            self.draws.push(Draw::Text {
                text: text.to_owned(),
                x,
                y,
                font: font.to_owned(),
                style: style.to_owned(),
            });
        }
    }
}
