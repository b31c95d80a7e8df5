// Matrix rain drawn behind the contact section: one falling glyph per column,
// with the previous frames fading out underneath.

use crate::lifecycle::{Cadence, Effect};
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::Rng;

pub const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()*&^%+-/~{[|`]}";

pub struct RainField {
    width: f64,
    height: f64,
    drops: Vec<u32>,
}

impl RainField {
    pub const GLYPH_SIZE: f64 = 10.0;
    pub const TICK_MS: u32 = 35;
    pub const TRAIL_ALPHA: f64 = 0.04;
    pub const RESET_CHANCE: f64 = 0.025;
    pub const GLYPH_STYLE: &'static str = "#0F0";
    pub const FONT: &'static str = "10px monospace";

    pub fn new(width: f64, height: f64) -> RainField {
        RainField {
            width,
            height,
            drops: vec![1; Self::columns_for(width)],
        }
    }

    pub fn columns_for(width: f64) -> usize {
        (width.max(0.0) / Self::GLYPH_SIZE).floor() as usize
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        *self = RainField::new(width, height);
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, surface: &mut dyn Surface) {
        let (width, height) = surface.size();
        surface.fill_rect(
            0.0,
            0.0,
            width,
            height,
            &format!("rgba(0, 0, 0, {})", Self::TRAIL_ALPHA),
        );

        let mut glyph = [0u8; 4];
        for (column, row) in self.drops.iter_mut().enumerate() {
            let pick = GLYPHS[rng.gen_range(0, GLYPHS.len())] as char;
            surface.fill_text(
                pick.encode_utf8(&mut glyph),
                column as f64 * Self::GLYPH_SIZE,
                *row as f64 * Self::GLYPH_SIZE,
                Self::FONT,
                Self::GLYPH_STYLE,
            );

            if *row as f64 * Self::GLYPH_SIZE > self.height && rng.gen::<f64>() < Self::RESET_CHANCE {
                *row = 0;
            } else {
                *row += 1;
            }
        }
    }
}

impl Effect for RainField {
    const CADENCE: Cadence = Cadence::Every {
        period_ms: RainField::TICK_MS,
    };
    const TRACKS_POINTER: bool = false;

    fn resize(&mut self, width: f64, height: f64, _rng: &mut StdRng) {
        RainField::resize(self, width, height);
    }

    fn frame(
        &mut self,
        _now_ms: f64,
        _cursor: Option<[f64; 2]>,
        rng: &mut StdRng,
        surface: &mut dyn Surface,
    ) {
        self.tick(rng, surface);
    }
}
