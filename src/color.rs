// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or from hue/saturation/lightness, and written out as a CSS rgba() string
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Hue in degrees, saturation and lightness in percent
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        let s = (saturation / 100.0).max(0.0).min(1.0);
        let l = (lightness / 100.0).max(0.0).min(1.0);
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round() as u8;

        Color {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: 0xff,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }

    // Same color with an explicit CSS alpha, used for faded strokes
    pub fn css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
