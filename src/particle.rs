// Simple particle struct to keep track of individual position, anchor, velocity, and fill

use crate::color::Color;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub base: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    // CSS fill, built once so the frame loop doesn't allocate
    pub fill: String,
}

impl Particle {
    pub fn new(base_x: f64, base_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [base_x, base_y],
            base: [base_x, base_y],
            vel: [0.0, 0.0],
            radius,
            fill: color.css(),
        }
    }
}
