use rand::Rng;

use crate::foundation::config::SlideConfig;

/// Broadcast luma (ITU-R BT.601 weights) of an sRGB color, 0..=255.
pub fn luma([r, g, b]: [u8; 3]) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Returned by [`sample_dark_color`] when every draw was too bright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorExhausted {
    pub attempts: u32,
}

/// Draw uniform RGB colors until one has `luma < threshold`, at most `attempts` times.
pub fn sample_dark_color<R: Rng + ?Sized>(
    rng: &mut R,
    threshold: f32,
    attempts: u32,
) -> Result<[u8; 3], ColorExhausted> {
    for _ in 0..attempts {
        let c: [u8; 3] = [rng.random(), rng.random(), rng.random()];
        if luma(c) < threshold {
            return Ok(c);
        }
    }
    Err(ColorExhausted { attempts })
}

/// Background fill for a slide: a random dark color, or the configured fallback.
pub fn background_color<R: Rng + ?Sized>(rng: &mut R, cfg: &SlideConfig) -> [u8; 3] {
    match sample_dark_color(rng, cfg.luma_threshold, cfg.color_attempts) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(attempts = e.attempts, "no dark color sampled, using fallback");
            cfg.fallback_background
        }
    }
}
