//! Ambient backdrop
//!
//! A drifting particle field drawn behind the intro and main views. It is
//! started once at boot and never talks back to the shell state.
//!
//! Particle positions are a pure function of the time since start, so a
//! frame can be drawn at any moment without stepping a simulation.

use crate::config::BackdropConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

const GLYPHS: [&str; 4] = ["·", "∙", "•", "*"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Start position in unit space, 0.0..1.0
    pub x: f32,
    pub y: f32,
    /// Drift in units per second
    pub vx: f32,
    pub vy: f32,
    pub glyph: &'static str,
}

impl Particle {
    /// Position after `secs`, wrapped back into unit space
    pub fn position_at(&self, secs: f32) -> (f32, f32) {
        (
            (self.x + self.vx * secs).rem_euclid(1.0),
            (self.y + self.vy * secs).rem_euclid(1.0),
        )
    }
}

#[derive(Debug)]
pub struct Backdrop {
    enabled: bool,
    particles: Vec<Particle>,
    started: Option<Instant>,
}

impl Backdrop {
    pub fn new(count: usize, seed: u64, enabled: bool) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f32>(),
                y: rng.gen::<f32>(),
                vx: rng.gen_range(-0.02..0.02),
                vy: rng.gen_range(-0.01..0.01),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            })
            .collect();
        Self {
            enabled,
            particles,
            started: None,
        }
    }

    pub fn from_config(cfg: &BackdropConfig) -> Self {
        Self::new(cfg.particles, cfg.seed, cfg.enabled)
    }

    /// Start the animation clock. Only the first call has an effect.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started.is_some() || !self.enabled {
            return false;
        }
        self.started = Some(now);
        tracing::debug!(particles = self.particles.len(), "backdrop started");
        true
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Cell positions for a `width` x `height` area at `now`
    pub fn frame(&self, now: Instant, width: u16, height: u16) -> Vec<(u16, u16, &'static str)> {
        let Some(started) = self.started else {
            return Vec::new();
        };
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let secs = now.saturating_duration_since(started).as_secs_f32();
        self.particles
            .iter()
            .map(|p| {
                let (x, y) = p.position_at(secs);
                let col = ((x * width as f32) as u16).min(width - 1);
                let row = ((y * height as f32) as u16).min(height - 1);
                (col, row, p.glyph)
            })
            .collect()
    }
}
