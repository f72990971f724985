/// Hero parallax tuning.
///
/// The background chases the pointer with simple exponential smoothing: every
/// frame it closes `PARALLAX_DAMPING` of the remaining distance to the target.
pub const PARALLAX_DAMPING: f64 = 0.1;

// Pointer at the far edge of the viewport maps to this many pixels of offset
pub const PARALLAX_RANGE_PX: f64 = 15.0;

// Background is scaled up so the translated edges never show
pub const PARALLAX_SCALE: f64 = 1.1;

// Radius of the pointer-following glow on highlight cards (px)
pub const CARD_GLOW_RADIUS_PX: u32 = 140;

pub const HERO_SECTION_ID: &str = "hero-section";
pub const PAGE_TITLE: &str = "ABResh | IT Services";
pub const PAGE_DESCRIPTION: &str =
    "Innovate, automate, and elevate your digital experience with cutting-edge solutions tailored to your needs.";
