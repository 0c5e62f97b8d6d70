//! Decorative particle network: drifting points that bounce off the field
//! edges, shy away from the pointer, and link up when close together.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Particles closer than this get a connecting line.
pub const LINK_DISTANCE: f64 = 150.0;
/// Pointer repulsion radius.
pub const POINTER_DISTANCE: f64 = 200.0;
/// Field width above which the dense particle count is used.
pub const WIDE_THRESHOLD: f64 = 768.0;
pub const WIDE_COUNT: usize = 80;
pub const NARROW_COUNT: usize = 40;
/// Base opacity factor for link lines.
pub const LINK_OPACITY: f64 = 0.4;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

#[derive(Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Option<(f64, f64)>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
        };
        field.seed_particles();
        field
    }

    pub fn count_for_width(width: f64) -> usize {
        if width > WIDE_THRESHOLD {
            WIDE_COUNT
        } else {
            NARROW_COUNT
        }
    }

    fn seed_particles(&mut self) {
        let count = Self::count_for_width(self.width);
        self.particles = (0..count)
            .map(|_| Particle {
                x: self.rng.gen_range(0.0..self.width.max(1.0)),
                y: self.rng.gen_range(0.0..self.height.max(1.0)),
                vx: (self.rng.gen_range(0.0..1.0) - 0.5) * 0.5,
                vy: (self.rng.gen_range(0.0..1.0) - 0.5) * 0.5,
                radius: self.rng.gen_range(0.0..2.0) + 1.0,
            })
            .collect();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Re-seed the field at a new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.seed_particles();
    }

    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    /// One simulation step: bounce at edges, repel from the pointer, then
    /// integrate velocity.
    pub fn step(&mut self) {
        let pointer = self.pointer;
        for p in &mut self.particles {
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }

            if let Some((mx, my)) = pointer {
                let dx = mx - p.x;
                let dy = my - p.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > 0.0 && dist < POINTER_DISTANCE {
                    let force = (POINTER_DISTANCE - dist) / POINTER_DISTANCE;
                    p.x -= dx / dist * force * 2.0;
                    p.y -= dy / dist * force * 2.0;
                }
            }

            p.x += p.vx;
            p.y += p.vy;
        }
    }

    /// Pairs close enough to link, with the line opacity for each.
    pub fn links(&self) -> Vec<(usize, usize, f64)> {
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dx = self.particles[i].x - self.particles[j].x;
                let dy = self.particles[i].y - self.particles[j].y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < LINK_DISTANCE {
                    let opacity = (1.0 - dist / LINK_DISTANCE) * LINK_OPACITY;
                    out.push((i, j, opacity));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_follows_width() {
        assert_eq!(ParticleField::count_for_width(1200.0), WIDE_COUNT);
        assert_eq!(ParticleField::count_for_width(768.0), NARROW_COUNT);
        assert_eq!(ParticleField::count_for_width(400.0), NARROW_COUNT);
    }

    #[test]
    fn seeding_is_deterministic() {
        let a = ParticleField::new(1000.0, 600.0, 7);
        let b = ParticleField::new(1000.0, 600.0, 7);
        assert_eq!(a.particles().len(), b.particles().len());
        assert_eq!(a.particles()[0].x, b.particles()[0].x);
        assert_eq!(a.particles()[3].vy, b.particles()[3].vy);
    }

    #[test]
    fn radii_in_range() {
        let field = ParticleField::new(1000.0, 600.0, 1);
        for p in field.particles() {
            assert!(p.radius >= 1.0 && p.radius < 3.0);
        }
    }

    #[test]
    fn particles_stay_near_the_field() {
        let mut field = ParticleField::new(500.0, 300.0, 2);
        for _ in 0..5_000 {
            field.step();
        }
        for p in field.particles() {
            // Bounce keeps them within one velocity step of the edges.
            assert!(p.x > -1.0 && p.x < 501.0);
            assert!(p.y > -1.0 && p.y < 301.0);
        }
    }

    #[test]
    fn pointer_pushes_particles_away() {
        let mut field = ParticleField::new(1000.0, 600.0, 3);
        let (px, py) = (field.particles()[0].x, field.particles()[0].y);
        field.set_pointer(Some((px + 1.0, py)));
        let before = field.particles()[0].x;
        field.step();
        let p = field.particles()[0];
        // Repulsion dominates the tiny drift velocity.
        assert!(p.x < before + p.vx);
    }

    #[test]
    fn links_only_within_distance() {
        let mut field = ParticleField::new(10_000.0, 10_000.0, 4);
        // Pin two particles close together and a third far away.
        field.particles[0].x = 100.0;
        field.particles[0].y = 100.0;
        field.particles[1].x = 150.0;
        field.particles[1].y = 100.0;
        let links = field.links();
        let pair = links.iter().find(|&&(i, j, _)| i == 0 && j == 1);
        let (_, _, opacity) = pair.expect("close pair should link");
        assert!((opacity - (1.0 - 50.0 / LINK_DISTANCE) * LINK_OPACITY).abs() < 1e-9);
    }

    #[test]
    fn resize_reseeds_to_the_new_count() {
        let mut field = ParticleField::new(1200.0, 600.0, 5);
        assert_eq!(field.particles().len(), WIDE_COUNT);
        field.resize(500.0, 300.0);
        assert_eq!(field.particles().len(), NARROW_COUNT);
        for p in field.particles() {
            assert!(p.x <= 500.0 && p.y <= 300.0);
        }
    }
}
