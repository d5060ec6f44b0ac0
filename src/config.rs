use log::Level;

/// Scroll offset (px) past which the navbar switches to its solid style.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fraction of an element that must be visible before it counts as entered.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.15;

pub const CARD_STAGGER_MS: u32 = 120;
pub const FAQ_STAGGER_MS: u32 = 100;

pub const HERO_HEADLINE_DELAY_MS: u32 = 400;
pub const HERO_TAGLINE_DELAY_MS: u32 = 700;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose subscription tracing while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
