use log::Level;

use crate::state::particles::ParticleField;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Signup endpoint baked in at build time. Without one signups are only logged.
pub fn signup_endpoint() -> Option<&'static str> {
    option_env!("WILDERLAND_SIGNUP_URL").filter(|url| !url.is_empty())
}

pub const HERO_REVEAL_DELAY_MS: u32 = 100;

pub mod thresholds {
    pub const STORY: f64 = 0.3;
    pub const GAMEPLAY: f64 = 0.2;
    pub const CHARACTERS: f64 = 0.2;
    pub const PLATFORMS: f64 = 0.3;
    pub const CALL_TO_ACTION: f64 = 0.3;
}

pub mod assets {
    pub const THEME_AUDIO: &str = "/assets/audio/theme.mp3";
    pub const TRAILER_VIDEO: &str = "/assets/video/trailer.mp4";
    pub const GAMEPLAY_VIDEO: &str = "/assets/video/gameplay.mp4";
    pub const HERO_BACKDROP: &str = "/assets/images/hero.png";
    pub const HERO_PORTRAIT: &str = "/assets/images/paul.jpeg";
}

pub const HERO_PARTICLES: ParticleField = ParticleField {
    salt: 1,
    count: 20,
    max_delay: 6.0,
    base_duration: 6.0,
    duration_jitter: 4.0,
    hue: None,
};

pub const CHARACTER_PARTICLES: ParticleField = ParticleField {
    salt: 2,
    count: 15,
    max_delay: 6.0,
    base_duration: 8.0,
    duration_jitter: 4.0,
    hue: Some((280.0, 80.0)),
};

pub const CTA_PARTICLES: ParticleField = ParticleField {
    salt: 3,
    count: 30,
    max_delay: 8.0,
    base_duration: 8.0,
    duration_jitter: 4.0,
    hue: None,
};

pub const FOOTER_PARTICLES: ParticleField = ParticleField {
    salt: 4,
    count: 10,
    max_delay: 6.0,
    base_duration: 6.0,
    duration_jitter: 4.0,
    hue: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::particles::scatter;

    #[test]
    fn particle_presets_differ_for_one_mount_seed() {
        let seed = 1_700_000_000_000;
        let presets = [HERO_PARTICLES, CHARACTER_PARTICLES, CTA_PARTICLES, FOOTER_PARTICLES];
        for (i, a) in presets.iter().enumerate() {
            for b in &presets[i + 1..] {
                let first = scatter(seed, a);
                let second = scatter(seed, b);
                assert_ne!(first[0].left, second[0].left);
                assert_ne!(first[0].top, second[0].top);
            }
        }
    }
}
