// Morphing particle field drawn behind the hero section.
//
// Particles sit on a ring around the surface center and home toward an anchor
// that drifts on a slow sinusoid. The cursor pulls nearby particles, and every
// pair closer than LINK_RANGE is joined by a faint line.

use crate::color::Color;
use crate::lifecycle::{Cadence, Effect};
use crate::particle::Particle;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashMap;
use std::f64::consts::PI;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub const COUNT: usize = 800;
    pub const RING_MIN: f64 = 100.0;
    pub const RING_MAX: f64 = 400.0;
    pub const RADIUS_MIN: f64 = 1.0;
    pub const RADIUS_MAX: f64 = 4.0;

    pub const MORPH_AMPLITUDE: f64 = 50.0;
    pub const MORPH_PHASE_STEP: f64 = 0.01;
    pub const CURSOR_RANGE: f64 = 200.0;
    pub const CURSOR_STRENGTH: f64 = 0.5;
    pub const SPRING: f64 = 0.02;
    pub const DAMPING: f64 = 0.95;

    pub const TRAIL_ALPHA: f64 = 0.05;
    pub const LINK_RANGE: f64 = 100.0;
    pub const LINK_MAX_OPACITY: f64 = 0.2;
    pub const LINK_WIDTH: f64 = 0.5;
    pub const LINK_COLOR: u32 = 0x8b5cf6ff;

    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> ParticleField {
        ParticleField {
            width,
            height,
            particles: ring_layout(width, height, Self::COUNT, rng),
        }
    }

    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    // The whole set is rebuilt so the ring is centred on the new bounds
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        let count = self.particles.len();
        self.width = width;
        self.height = height;
        self.particles = ring_layout(width, height, count, rng);
    }

    pub fn morph_offset(now_ms: f64, index: usize) -> [f64; 2] {
        let phase = now_ms * 0.001 + index as f64 * Self::MORPH_PHASE_STEP;
        [
            phase.sin() * Self::MORPH_AMPLITUDE,
            phase.cos() * Self::MORPH_AMPLITUDE,
        ]
    }

    // Velocity change the cursor applies to a particle at `pos`. Zero outside
    // the range and when the cursor sits exactly on the particle.
    pub fn cursor_impulse(pos: [f64; 2], cursor: [f64; 2]) -> [f64; 2] {
        let to_cursor = vecmath::vec2_sub(cursor, pos);
        let distance = vecmath::vec2_len(to_cursor);
        if distance <= 0.0 || distance >= Self::CURSOR_RANGE {
            return [0.0, 0.0];
        }
        let force = (Self::CURSOR_RANGE - distance) / Self::CURSOR_RANGE;
        vecmath::vec2_scale(to_cursor, force * Self::CURSOR_STRENGTH / distance)
    }

    pub fn step(&mut self, now_ms: f64, cursor: Option<[f64; 2]>) {
        for (index, particle) in self.particles.iter_mut().enumerate() {
            let morph = Self::morph_offset(now_ms, index);

            if let Some(cursor) = cursor {
                let impulse = Self::cursor_impulse(particle.pos, cursor);
                particle.vel = vecmath::vec2_add(particle.vel, impulse);
            }

            let anchor = vecmath::vec2_add(particle.base, morph);
            let homing = vecmath::vec2_scale(vecmath::vec2_sub(anchor, particle.pos), Self::SPRING);
            particle.vel = vecmath::vec2_add(particle.vel, homing);
            particle.vel = vecmath::vec2_scale(particle.vel, Self::DAMPING);
            particle.pos = vecmath::vec2_add(particle.pos, particle.vel);
        }
    }

    pub fn link_opacity(distance: f64) -> f64 {
        if distance >= Self::LINK_RANGE {
            return 0.0;
        }
        Self::LINK_MAX_OPACITY * (1.0 - distance.max(0.0) / Self::LINK_RANGE)
    }

    // Calls `f(i, j, distance)` once for every pair i < j closer than
    // LINK_RANGE. Particles are bucketed into LINK_RANGE-sized cells so only
    // neighbouring cells are compared.
    pub fn for_each_link<F: FnMut(usize, usize, f64)>(&self, mut f: F) {
        let cell_of = |pos: [f64; 2]| {
            (
                (pos[0] / Self::LINK_RANGE).floor() as i64,
                (pos[1] / Self::LINK_RANGE).floor() as i64,
            )
        };

        let mut grid: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        for (index, particle) in self.particles.iter().enumerate() {
            grid.entry(cell_of(particle.pos)).or_default().push(index);
        }

        for (i, particle) in self.particles.iter().enumerate() {
            let (cx, cy) = cell_of(particle.pos);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let bucket = match grid.get(&(cx + dx, cy + dy)) {
                        Some(bucket) => bucket,
                        None => continue,
                    };
                    for &j in bucket.iter().filter(|&&j| j > i) {
                        let other = &self.particles[j];
                        let distance = vecmath::vec2_len(vecmath::vec2_sub(particle.pos, other.pos));
                        if distance < Self::LINK_RANGE {
                            f(i, j, distance);
                        }
                    }
                }
            }
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        let (width, height) = surface.size();
        surface.fill_rect(
            0.0,
            0.0,
            width,
            height,
            &format!("rgba(0, 0, 0, {})", Self::TRAIL_ALPHA),
        );

        for particle in &self.particles {
            surface.fill_circle(particle.pos[0], particle.pos[1], particle.radius, &particle.fill);
        }

        let link_color = Color::from_u32(Self::LINK_COLOR);
        self.for_each_link(|i, j, distance| {
            let style = link_color.css_with_alpha(Self::link_opacity(distance));
            surface.stroke_line(
                self.particles[i].pos,
                self.particles[j].pos,
                Self::LINK_WIDTH,
                &style,
            );
        });
    }
}

impl Effect for ParticleField {
    const CADENCE: Cadence = Cadence::EveryFrame;
    const TRACKS_POINTER: bool = true;

    fn resize(&mut self, width: f64, height: f64, rng: &mut StdRng) {
        ParticleField::resize(self, width, height, rng);
    }

    fn frame(
        &mut self,
        now_ms: f64,
        cursor: Option<[f64; 2]>,
        _rng: &mut StdRng,
        surface: &mut dyn Surface,
    ) {
        self.step(now_ms, cursor);
        self.render(surface);
    }
}

fn ring_layout<R: Rng + ?Sized>(width: f64, height: f64, count: usize, rng: &mut R) -> Vec<Particle> {
    let center = [width / 2.0, height / 2.0];
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * PI * 2.0;
            let ring: f64 = rng.gen_range(ParticleField::RING_MIN, ParticleField::RING_MAX);
            let radius: f64 = rng.gen_range(ParticleField::RADIUS_MIN, ParticleField::RADIUS_MAX);
            let hue: f64 = rng.gen_range(260.0, 320.0);
            let lightness: f64 = rng.gen_range(50.0, 70.0);
            Particle::new(
                center[0] + angle.cos() * ring,
                center[1] + angle.sin() * ring,
                radius,
                Color::from_hsl(hue, 70.0, lightness),
            )
        })
        .collect()
}
