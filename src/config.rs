/// Scroll offset (px) past which the nav switches to its condensed state
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Viewport width (px) at or below which the mobile layout applies
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Quiet period before a resize burst is acted on
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Count-up repaint cadence, roughly one frame
pub const COUNTER_TICK_MS: u32 = 16;

/// Hero stat count-up duration
pub const STAT_COUNT_MS: u32 = 2000;

/// Pricing amount count-up duration
pub const PRICE_COUNT_MS: u32 = 1500;

/// Fraction of a reveal target that must be visible before it animates in
pub const REVEAL_VISIBILITY: f64 = 0.1;

/// Bottom inset so reveal targets fire slightly before entering the viewport edge
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Visibility fraction that starts a hero stat count-up
pub const STAT_VISIBILITY: f64 = 0.5;

/// Visibility fraction that starts a pricing count-up
pub const PRICE_VISIBILITY: f64 = 0.3;

/// Visibility fraction that starts the usage chart fill
pub const CHART_VISIBILITY: f64 = 0.3;

/// Visibility fraction that starts a rating star pop
pub const RATING_VISIBILITY: f64 = 0.5;

/// Reveal stagger between grid neighbours (seconds)
pub const CARD_STAGGER_SECS: f64 = 0.1;

/// Reveal stagger for the wider pricing and demo tiles (seconds)
pub const WIDE_STAGGER_SECS: f64 = 0.15;

/// Delay between successive chart bar fills
pub const CHART_BAR_STAGGER_MS: u32 = 200;

/// Delay between successive star pops in one rating
pub const STAR_STAGGER_MS: u32 = 100;

/// How long the video placeholder pulse runs before its animation is cleared
pub const VIDEO_PULSE_MS: u32 = 500;

/// Minimum horizontal travel (px) for a touch gesture to count as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Fraction of the scroll offset applied to the hero pattern
pub const PARALLAX_FACTOR: f64 = 0.3;
