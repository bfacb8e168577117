// ParticleField - the continuously-running banner simulation
//
// Thirty independent particles bounce inside a bounded viewport. The field
// is a plain value owned by the App: re-initialization on resize replaces
// the old field (dropping it) before a new one starts ticking, so two
// simulations never run over the same surface. Rendering is a pure
// projection of positions; see `tui::components::banner`.
//
// Boundary reflection is a sign flip only - no position clamping, no energy
// loss. A particle may render slightly outside the viewport for one tick;
// that matches the reference behavior and is accepted.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

/// Number of particles in the field
pub const PARTICLE_COUNT: usize = 30;

/// One bouncing particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
}

/// The particle simulation: fixed population, bounded viewport
#[derive(Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Initialize the field for a W x H viewport
    ///
    /// Radius uniform in [2,12), position uniform in [0,W)x[0,H), velocity
    /// components uniform in [-1,1) per axis (pixels per tick).
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, &mut Rng::from_entropy())
    }

    /// Deterministic construction for tests
    fn with_rng(width: f64, height: f64, rng: &mut Rng) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.next_f64() * width,
                y: rng.next_f64() * height,
                vx: (rng.next_f64() - 0.5) * 2.0,
                vy: (rng.next_f64() - 0.5) * 2.0,
                r: rng.next_f64() * 10.0 + 2.0,
            })
            .collect();

        Self {
            width,
            height,
            particles,
        }
    }

    /// Advance the simulation by one tick
    ///
    /// Each particle moves by its velocity; crossing a horizontal boundary
    /// inverts vx, crossing a vertical boundary inverts vy.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    /// Current particle state, for rendering only
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Minimal xorshift64* generator
///
/// The animation needs uniform jitter, not cryptographic quality, so a tiny
/// generator seeded from `RandomState` avoids pulling in a rand dependency.
struct Rng(u64);

impl Rng {
    fn from_entropy() -> Self {
        let seed = RandomState::new().build_hasher().finish();
        // xorshift state must be non-zero
        Self(seed | 1)
    }

    #[cfg(test)]
    fn from_seed(seed: u64) -> Self {
        Self(seed | 1)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in [0,1)
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u64) -> ParticleField {
        ParticleField::with_rng(120.0, 40.0, &mut Rng::from_seed(seed))
    }

    #[test]
    fn test_population_is_fixed_at_init() {
        let f = field(7);
        assert_eq!(f.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_init_ranges() {
        let f = field(42);
        for p in f.particles() {
            assert!((0.0..120.0).contains(&p.x));
            assert!((0.0..40.0).contains(&p.y));
            assert!((-1.0..1.0).contains(&p.vx));
            assert!((-1.0..1.0).contains(&p.vy));
            assert!((2.0..12.0).contains(&p.r));
        }
    }

    #[test]
    fn test_tick_advances_by_velocity() {
        let mut f = field(1);
        let before = f.particles()[0].clone();
        f.tick();
        let after = &f.particles()[0];
        assert!((after.x - (before.x + before.vx)).abs() < 1e-12);
        assert!((after.y - (before.y + before.vy)).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_crossing_flips_velocity_sign() {
        let mut f = field(3);
        // Force a particle right up against the right edge, moving out
        f.particles[0] = Particle {
            x: 119.9,
            y: 20.0,
            vx: 0.8,
            vy: 0.1,
            r: 3.0,
        };
        f.tick();
        let p = &f.particles()[0];
        // Crossed x > width: vx flipped, vy untouched
        assert_eq!(p.vx, -0.8);
        assert_eq!(p.vy, 0.1);
        // No clamping: the particle sits past the edge for this tick
        assert!(p.x > 120.0);
    }

    #[test]
    fn test_left_and_top_boundaries_flip_too() {
        let mut f = field(5);
        f.particles[0] = Particle {
            x: 0.2,
            y: 0.3,
            vx: -0.9,
            vy: -0.7,
            r: 2.0,
        };
        f.tick();
        let p = &f.particles()[0];
        assert_eq!(p.vx, 0.9);
        assert_eq!(p.vy, 0.7);
    }

    #[test]
    fn test_interior_particle_keeps_velocity() {
        let mut f = field(9);
        f.particles[0] = Particle {
            x: 60.0,
            y: 20.0,
            vx: 0.5,
            vy: -0.5,
            r: 4.0,
        };
        f.tick();
        let p = &f.particles()[0];
        assert_eq!(p.vx, 0.5);
        assert_eq!(p.vy, -0.5);
    }

    #[test]
    fn test_rng_is_uniform_enough_for_ranges() {
        let mut rng = Rng::from_seed(0xDEAD_BEEF);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
