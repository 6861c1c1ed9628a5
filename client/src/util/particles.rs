//! Deterministic layout for the decorative particle field.
//!
//! Positions come from a seeded integer hash rather than a random source so
//! server-rendered markup and the hydrated client agree byte for byte.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

pub const PARTICLE_COUNT: usize = 40;
pub const PARTICLE_COLOR: &str = "#a855f7";
pub const PARTICLE_OPACITY: f64 = 0.5;
pub const MIN_RADIUS_PX: f64 = 1.0;
pub const MAX_RADIUS_PX: f64 = 5.0;

const SEED: u64 = 0x5eed_d3f1_9a11_c0de;

/// One decorative particle, positioned in viewport percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x_pct: f64,
    pub y_pct: f64,
    pub radius_px: f64,
    /// Drift animation duration.
    pub duration_s: f64,
    /// Negative delay so the field is already in motion on first paint.
    pub delay_s: f64,
}

impl Particle {
    /// Inline style for the particle element.
    #[must_use]
    pub fn style(&self) -> String {
        let size = self.radius_px * 2.0;
        format!(
            "left:{:.2}%;top:{:.2}%;width:{size:.2}px;height:{size:.2}px;background:{PARTICLE_COLOR};opacity:{PARTICLE_OPACITY};animation-duration:{:.2}s;animation-delay:{:.2}s",
            self.x_pct, self.y_pct, self.duration_s, self.delay_s
        )
    }
}

/// splitmix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Uniform value in `[0, 1)` for particle `index`, channel `channel`.
#[allow(clippy::cast_precision_loss)]
fn unit(index: usize, channel: u64) -> f64 {
    let h = mix(SEED ^ mix(index as u64) ^ channel.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    (h >> 11) as f64 / (1u64 << 53) as f64
}

/// The full particle field.
#[must_use]
pub fn layout() -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let duration_s = 12.0 + unit(i, 3) * 18.0;
            Particle {
                x_pct: unit(i, 0) * 100.0,
                y_pct: unit(i, 1) * 100.0,
                radius_px: MIN_RADIUS_PX + unit(i, 2) * (MAX_RADIUS_PX - MIN_RADIUS_PX),
                duration_s,
                delay_s: -unit(i, 4) * duration_s,
            }
        })
        .collect()
}
