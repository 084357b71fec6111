//! Pure page-behavior logic: count-up arithmetic, scroll math, reveal
//! staggering and the anchor allow-list. Nothing in here touches the DOM,
//! so all of it runs under plain `cargo test`.

use crate::config;

// ---------------- Count-up ----------------

/// How a counter renders its current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Thousands-grouped digits, e.g. `12,500`.
    Grouped,
    /// Grouped digits with a trailing plus, e.g. `12,500+`.
    GroupedPlus,
    /// Bare digits with a trailing percent sign. Percentages stay ungrouped.
    Percent,
}

impl DisplayStyle {
    pub fn render(&self, value: u64) -> String {
        match self {
            DisplayStyle::Grouped => group_thousands(value),
            DisplayStyle::GroupedPlus => format!("{}+", group_thousands(value)),
            DisplayStyle::Percent => format!("{value}%"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountPhase {
    Idle,
    Running,
    Settled,
}

/// A linear count-up from zero towards a fixed target. The driver feeds it
/// elapsed milliseconds; the value never overshoots and lands exactly on the
/// target when the duration has been consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    duration_ms: u32,
    elapsed_ms: u32,
    phase: CountPhase,
    style: DisplayStyle,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32, style: DisplayStyle) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(1),
            elapsed_ms: 0,
            phase: CountPhase::Idle,
            style,
        }
    }

    pub fn start(&mut self) {
        if self.phase == CountPhase::Idle {
            self.phase = CountPhase::Running;
            self.elapsed_ms = 0;
        }
    }

    /// Advances the clock and returns the value for the new instant.
    pub fn tick(&mut self, dt_ms: u32) -> u64 {
        if self.phase == CountPhase::Running {
            self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
            if self.elapsed_ms >= self.duration_ms {
                self.phase = CountPhase::Settled;
            }
        }
        self.value()
    }

    pub fn value(&self) -> u64 {
        match self.phase {
            CountPhase::Idle => 0,
            CountPhase::Settled => self.target,
            CountPhase::Running => {
                let ratio = f64::from(self.elapsed_ms) / f64::from(self.duration_ms);
                (self.target as f64 * ratio).floor() as u64
            }
        }
    }

    pub fn display(&self) -> String {
        self.style.render(self.value())
    }

    pub fn is_settled(&self) -> bool {
        self.phase == CountPhase::Settled
    }
}

/// Reads a count-up target out of rendered text. Digits are kept, everything
/// else is dropped; the suffix picks the render style, `+` winning over `%`.
/// `None` when the text carries no digits at all.
pub fn parse_counter_text(text: &str) -> Option<(u64, DisplayStyle)> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let target = digits.parse::<u64>().ok()?;
    let style = if text.contains('+') {
        DisplayStyle::GroupedPlus
    } else if text.contains('%') {
        DisplayStyle::Percent
    } else {
        DisplayStyle::Grouped
    };
    Some((target, style))
}

/// Trigger decision for one counter element: the parsed target and style when
/// the text warrants an animation. Digitless text and zero targets yield
/// `None`; a free tier's `$0` stays put.
pub fn counter_plan(text: &str) -> Option<(u64, DisplayStyle)> {
    match parse_counter_text(text)? {
        (0, _) => None,
        plan => Some(plan),
    }
}

/// Comma-groups a number every three digits: 1234567 -> "1,234,567".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ---------------- Scroll math ----------------

/// True once the page has scrolled past the condensed-nav threshold.
/// Exactly at the threshold still counts as top-of-page.
pub fn nav_scrolled(offset: f64) -> bool {
    offset > config::SCROLLED_THRESHOLD_PX
}

/// Read progress through the document as a percentage, clamped to 0..=100.
/// A document no taller than the viewport reports zero.
pub fn progress_percent(offset: f64, scroll_height: f64, client_height: f64) -> f64 {
    let track = scroll_height - client_height;
    if track <= 0.0 {
        return 0.0;
    }
    (offset / track * 100.0).clamp(0.0, 100.0)
}

/// Vertical shift for the hero pattern, or `None` when parallax is inactive:
/// on narrow viewports, or once the hero has fully scrolled out.
pub fn parallax_shift(offset: f64, hero_height: f64, viewport_width: f64) -> Option<f64> {
    if viewport_width <= config::MOBILE_BREAKPOINT_PX || offset >= hero_height {
        return None;
    }
    Some(offset * config::PARALLAX_FACTOR)
}

// ---------------- Reveal staggering ----------------

/// Direction a hidden reveal target is offset before it animates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideFrom {
    Below,
    Left,
}

impl SlideFrom {
    pub fn hidden_transform(&self) -> &'static str {
        match self {
            SlideFrom::Below => "translateY(30px)",
            SlideFrom::Left => "translateX(-30px)",
        }
    }
}

/// Transform for a revealed target. One axis reset is enough because the
/// whole transform property is replaced.
pub const SETTLED_TRANSFORM: &str = "translateY(0)";

/// Per-element transition string with the grid stagger baked into the delay.
pub fn reveal_transition(index: usize, step_secs: f64) -> String {
    let delay = index as f64 * step_secs;
    format!("opacity 0.6s ease-out {delay}s, transform 0.6s ease-out {delay}s")
}

// ---------------- Anchor routing ----------------

/// In-page destinations the smooth-scroll router owns. Anything else keeps
/// its native jump behavior.
pub const MANAGED_ANCHORS: &[&str] = &[
    "#",
    "#features",
    "#how-it-works",
    "#benefits",
    "#demo",
    "#testimonials",
    "#pricing",
    "#faq",
    "#download",
];

pub fn is_managed_anchor(href: &str) -> bool {
    MANAGED_ANCHORS.contains(&href)
}

/// Element id a managed href points at; bare `#` has no destination.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Document-space top of an element, from the viewport-relative top of its
/// box and the current scroll offset. Offset-parent chains only agree with
/// this while no ancestor is positioned; the box measurement always does.
pub fn document_top(viewport_top: f64, scroll_offset: f64) -> f64 {
    viewport_top + scroll_offset
}

/// Scroll destination that leaves the target clear of the fixed nav bar.
pub fn anchor_scroll_top(target_top: f64, nav_height: f64) -> f64 {
    target_top - nav_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nav_scrolled_boundary() {
        assert!(!nav_scrolled(0.0));
        assert!(!nav_scrolled(99.9));
        assert!(!nav_scrolled(100.0));
        assert!(nav_scrolled(100.1));
        assert!(nav_scrolled(5000.0));
    }

    #[test]
    fn test_progress_percent_clamps() {
        assert_eq!(progress_percent(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(progress_percent(600.0, 2000.0, 800.0), 50.0);
        assert_eq!(progress_percent(1200.0, 2000.0, 800.0), 100.0);
        // Overscroll bounce must not push past the ends
        assert_eq!(progress_percent(1500.0, 2000.0, 800.0), 100.0);
        assert_eq!(progress_percent(-40.0, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_percent_short_document() {
        assert_eq!(progress_percent(10.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn test_parallax_active_only_on_wide_viewports() {
        assert_eq!(parallax_shift(100.0, 900.0, 1280.0), Some(30.0));
        assert_eq!(parallax_shift(100.0, 900.0, 768.0), None);
        assert_eq!(parallax_shift(100.0, 900.0, 480.0), None);
    }

    #[test]
    fn test_parallax_stops_past_hero() {
        assert_eq!(parallax_shift(899.0, 900.0, 1280.0), Some(899.0 * 0.3));
        assert_eq!(parallax_shift(900.0, 900.0, 1280.0), None);
        assert_eq!(parallax_shift(2000.0, 900.0, 1280.0), None);
    }

    #[test]
    fn test_parse_counter_text() {
        assert_eq!(
            parse_counter_text("12,500+"),
            Some((12_500, DisplayStyle::GroupedPlus))
        );
        assert_eq!(parse_counter_text("98%"), Some((98, DisplayStyle::Percent)));
        assert_eq!(parse_counter_text("340000"), Some((340_000, DisplayStyle::Grouped)));
        assert_eq!(parse_counter_text("$0"), Some((0, DisplayStyle::Grouped)));
        assert_eq!(parse_counter_text("Free"), None);
        assert_eq!(parse_counter_text(""), None);
    }

    #[test]
    fn test_counter_plan_skips_zero_targets() {
        assert_eq!(counter_plan("$0"), None);
        assert_eq!(counter_plan("0%"), None);
        assert_eq!(counter_plan("Free"), None);
        assert_eq!(counter_plan("$12"), Some((12, DisplayStyle::Grouped)));
        assert_eq!(
            counter_plan("12,500+"),
            Some((12_500, DisplayStyle::GroupedPlus))
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_500), "12,500");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_percent_values_stay_ungrouped() {
        assert_eq!(DisplayStyle::Percent.render(1234), "1234%");
        assert_eq!(DisplayStyle::GroupedPlus.render(1234), "1,234+");
    }

    #[test]
    fn test_count_up_lifecycle() {
        let mut c = CountUp::new(1000, 100, DisplayStyle::Grouped);
        assert_eq!(c.value(), 0);
        assert!(!c.is_settled());
        c.start();
        assert_eq!(c.tick(25), 250);
        assert_eq!(c.tick(25), 500);
        assert_eq!(c.tick(60), 1000);
        assert!(c.is_settled());
        // Further ticks stay pinned to the target
        assert_eq!(c.tick(1000), 1000);
    }

    #[test]
    fn test_count_up_keeps_suffix() {
        let (target, style) = parse_counter_text("1,234+").unwrap();
        let mut c = CountUp::new(target, 100, style);
        c.start();
        while !c.is_settled() {
            c.tick(16);
        }
        assert_eq!(c.display(), "1,234+");
    }

    #[test]
    fn test_count_up_ignores_ticks_before_start() {
        let mut c = CountUp::new(500, 100, DisplayStyle::Grouped);
        assert_eq!(c.tick(50), 0);
        c.start();
        assert_eq!(c.tick(50), 250);
    }

    #[test]
    fn test_restart_mid_run_does_not_rewind() {
        let mut c = CountUp::new(1000, 100, DisplayStyle::Grouped);
        c.start();
        assert_eq!(c.tick(50), 500);
        // A second start while running must not reset the clock
        c.start();
        assert_eq!(c.value(), 500);
        assert_eq!(c.tick(50), 1000);
        assert!(c.is_settled());
        // Nor may a start after settling re-run the animation
        c.start();
        assert_eq!(c.value(), 1000);
        assert!(c.is_settled());
    }

    #[test]
    fn test_reveal_transition_stagger() {
        assert_eq!(
            reveal_transition(0, 0.1),
            "opacity 0.6s ease-out 0s, transform 0.6s ease-out 0s"
        );
        assert_eq!(
            reveal_transition(1, 0.1),
            "opacity 0.6s ease-out 0.1s, transform 0.6s ease-out 0.1s"
        );
        assert!(reveal_transition(2, 0.15).contains("0.3s"));
    }

    #[test]
    fn test_hidden_transforms() {
        assert_eq!(SlideFrom::Below.hidden_transform(), "translateY(30px)");
        assert_eq!(SlideFrom::Left.hidden_transform(), "translateX(-30px)");
    }

    #[test]
    fn test_anchor_allow_list() {
        assert!(is_managed_anchor("#features"));
        assert!(is_managed_anchor("#download"));
        assert!(is_managed_anchor("#"));
        assert!(!is_managed_anchor("#signup"));
        assert!(!is_managed_anchor("https://example.com"));
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#faq"), Some("faq"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("features"), None);
    }

    #[test]
    fn test_document_top_from_viewport_box() {
        assert_eq!(document_top(400.0, 0.0), 400.0);
        // A section already scrolled partly past sits above the viewport
        assert_eq!(document_top(-120.0, 900.0), 780.0);
    }

    #[test]
    fn test_anchor_scroll_top_accounts_for_nav() {
        assert_eq!(anchor_scroll_top(1200.0, 64.0), 1136.0);
        assert_eq!(anchor_scroll_top(document_top(-120.0, 900.0), 64.0), 716.0);
    }

    proptest! {
        #[test]
        fn count_up_is_monotone_and_bounded(
            target in 0u64..1_000_000_000,
            duration in 1u32..5_000,
            steps in proptest::collection::vec(1u32..100, 1..200),
        ) {
            let mut c = CountUp::new(target, duration, DisplayStyle::Grouped);
            c.start();
            let mut last = 0u64;
            let mut total = 0u64;
            for dt in steps {
                let v = c.tick(dt);
                prop_assert!(v >= last);
                prop_assert!(v <= target);
                last = v;
                total += u64::from(dt);
            }
            if total >= u64::from(duration) {
                prop_assert!(c.is_settled());
                prop_assert_eq!(c.value(), target);
            }
        }

        #[test]
        fn counter_text_round_trips(value in 0u64..10_000_000_000u64) {
            for style in [DisplayStyle::Grouped, DisplayStyle::GroupedPlus, DisplayStyle::Percent] {
                let text = style.render(value);
                prop_assert_eq!(parse_counter_text(&text), Some((value, style)));
            }
        }
    }
}
