//! Decorative login backdrop math.
//!
//! The login page renders a static starfield plus a slow rain of warehouse
//! icons. All sizing and timing derives from uniform random samples in
//! `[0, 1)`; the formulas live here as pure functions so the visual tuning
//! is testable without a browser.

#[cfg(test)]
#[path = "sky_test.rs"]
mod sky_test;

/// Which decorative layers the login backdrop shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RainMode {
    /// Stars only, no falling icons.
    Stars,
    /// Falling icons only, no starfield.
    Icons,
    /// Both layers.
    #[default]
    Mixed,
}

impl RainMode {
    /// Parse a configuration value; unknown input falls back to [`RainMode::Mixed`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stars" => Self::Stars,
            "icons" => Self::Icons,
            _ => Self::Mixed,
        }
    }

    #[must_use]
    pub fn has_stars(self) -> bool {
        matches!(self, Self::Stars | Self::Mixed)
    }

    #[must_use]
    pub fn has_icons(self) -> bool {
        matches!(self, Self::Icons | Self::Mixed)
    }
}

/// How long a falling icon lives before it is removed, in milliseconds.
pub const ICON_LIFETIME_MS: u32 = 12_000;

/// Number of stars for a viewport of the given width, capped at 120.
#[must_use]
pub fn star_count(viewport_width: f64) -> usize {
    let density = (viewport_width / 11.0).floor().max(0.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = density as usize;
    count.min(120)
}

/// A star is "near" (larger, brighter) for the top ~38% of samples.
#[must_use]
pub fn star_is_near(r: f64) -> bool {
    r > 0.62
}

/// Star diameter in pixels from a uniform sample.
#[must_use]
pub fn star_size(r: f64, near: bool) -> f64 {
    if near { r.mul_add(1.9, 0.8) } else { r.mul_add(1.4, 0.4) }
}

/// Falling icon size in pixels.
#[must_use]
pub fn icon_size(r: f64) -> f64 {
    r.mul_add(24.0, 16.0)
}

/// Falling icon opacity.
#[must_use]
pub fn icon_opacity(r: f64) -> f64 {
    r.mul_add(0.36, 0.34)
}

/// Horizontal drift over an icon's fall, in pixels.
#[must_use]
pub fn icon_drift(r: f64) -> f64 {
    r.mul_add(110.0, -55.0)
}

/// Total rotation over an icon's fall, in degrees.
#[must_use]
pub fn icon_rotation(r: f64) -> f64 {
    r.mul_add(170.0, 80.0)
}

/// Fall duration in seconds.
#[must_use]
pub fn icon_duration_secs(r: f64) -> f64 {
    r.mul_add(6.5, 6.5)
}

/// Delay before the next icon spawns, in milliseconds.
#[must_use]
pub fn icon_spawn_delay_ms(r: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let delay = r.mul_add(1000.0, 700.0) as u32;
    delay
}
