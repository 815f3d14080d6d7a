//! Wheel Engine - Core wheel math per the Wheel Engine Contract
//!
//! Name list parsing, palette derivation, spin sessions, and winner
//! resolution. Everything here is pure and UI-independent.

use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::{Duration, Instant};

/// Minimum number of names a wheel can hold
pub const MIN_NAMES: usize = 2;
/// Maximum number of names a wheel can hold
pub const MAX_NAMES: usize = 30;
/// Maximum length of a single name, in characters
pub const MAX_NAME_LEN: usize = 32;

/// Fixed duration of one spin
pub const SPIN_DURATION: Duration = Duration::from_millis(3000);
/// Minimum number of full turns per spin
pub const MIN_TURNS: f32 = 5.0;
/// Maximum number of full turns per spin (exclusive)
pub const MAX_TURNS: f32 = 8.0;

/// Fixed screen angle of the pointer: 12 o'clock in y-up math coordinates
pub const POINTER_ANGLE: f32 = FRAC_PI_2;

/// Smallest font size a segment label may shrink to
pub const LABEL_MIN_FONT: u32 = 8;
/// Fraction of the wheel radius a label may occupy
const LABEL_MAX_WIDTH_FRACTION: f32 = 0.3;
/// Approximate average glyph width as a fraction of the font size
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Error type for name list parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameListError {
    /// Fewer than [`MIN_NAMES`] usable names remained after parsing
    TooFew(usize),
}

impl std::fmt::Display for NameListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameListError::TooFew(n) => {
                write!(f, "Need at least {} names, got {}", MIN_NAMES, n)
            }
        }
    }
}

impl std::error::Error for NameListError {}

/// A successfully parsed name list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNames {
    /// The effective names, in input order, at most [`MAX_NAMES`] long
    pub names: Vec<String>,
    /// How many trailing names were dropped to fit [`MAX_NAMES`]
    pub dropped: usize,
}

/// Parse raw multi-line editor text into a validated name list.
///
/// Lines are trimmed and sanitized; empty lines are dropped. Fails if fewer
/// than [`MIN_NAMES`] names remain. Truncates to the first [`MAX_NAMES`]
/// names, reporting the overflow in [`ParsedNames::dropped`] so callers can
/// surface a warning.
pub fn parse_names(raw: &str) -> Result<ParsedNames, NameListError> {
    let mut names: Vec<String> = raw
        .lines()
        .map(sanitize_name)
        .filter(|name| !name.is_empty())
        .collect();

    if names.len() < MIN_NAMES {
        return Err(NameListError::TooFew(names.len()));
    }

    let dropped = names.len().saturating_sub(MAX_NAMES);
    names.truncate(MAX_NAMES);

    Ok(ParsedNames { names, dropped })
}

/// Sanitize a single name: strip control and HTML-significant characters,
/// trim surrounding whitespace, cap at [`MAX_NAME_LEN`] characters.
pub fn sanitize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '<' | '>' | '&' | '"' | '\'' | '`'))
        .collect();
    cleaned.trim().chars().take(MAX_NAME_LEN).collect()
}

/// Angular width of one segment for a wheel of `count` names
pub fn angle_per_segment(count: usize) -> f32 {
    TAU / count as f32
}

/// Resolve which segment sits under the pointer for a given rotation.
///
/// Pure function of (rotation, count): the rotation is normalized to
/// [0, 2π) with `rem_euclid` (which handles negatives), then the pointer's
/// angular offset into the rotated wheel picks the segment. Periodic in 2π.
pub fn winning_index(rotation: f32, count: usize) -> usize {
    let angle_per = angle_per_segment(count);
    let normalized = rotation.rem_euclid(TAU);
    let offset = (POINTER_ANGLE - normalized).rem_euclid(TAU);
    (offset / angle_per) as usize % count
}

/// Cubic ease-out: fast initial motion, slow approach to rest
pub fn ease_out_cubic(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(3)
}

/// One spin in flight: start and target rotation plus its start instant.
///
/// The target is the current rotation plus 5-8 full turns and a uniform
/// random sub-turn offset, so every segment is reachable regardless of the
/// turn count. Timing is wall-clock based; [`SpinSession::rotation_at`]
/// takes the elapsed time explicitly so the curve is testable without a
/// real clock.
#[derive(Debug, Clone, Copy)]
pub struct SpinSession {
    pub start_rotation: f32,
    pub target_rotation: f32,
    pub started: Instant,
}

impl SpinSession {
    /// Start a new spin from the current rotation
    pub fn begin(current_rotation: f32, rng: &mut impl Rng) -> Self {
        let turns = rng.random_range(MIN_TURNS..MAX_TURNS);
        let offset = rng.random_range(0.0..TAU);
        SpinSession {
            start_rotation: current_rotation,
            target_rotation: current_rotation + turns * TAU + offset,
            started: Instant::now(),
        }
    }

    /// Elapsed wall-clock time since the spin began
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Animation progress in [0, 1] for a given elapsed time
    pub fn progress(&self, elapsed: Duration) -> f32 {
        (elapsed.as_secs_f32() / SPIN_DURATION.as_secs_f32()).min(1.0)
    }

    /// Eased rotation for a given elapsed time.
    ///
    /// Pins exactly to the target once the duration has elapsed, so the
    /// winner is resolved from the true target angle rather than a
    /// floating-point approach to it.
    pub fn rotation_at(&self, elapsed: Duration) -> f32 {
        let p = self.progress(elapsed);
        if p >= 1.0 {
            return self.target_rotation;
        }
        self.start_rotation + (self.target_rotation - self.start_rotation) * ease_out_cubic(p)
    }

    /// Whether the spin has run its full duration
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= SPIN_DURATION
    }
}

/// Derive the segment palette for a wheel of `count` names: evenly spaced
/// hues at fixed saturation and value, recomputed per render.
pub fn palette(count: usize) -> Vec<[u8; 3]> {
    (0..count)
        .map(|i| {
            let hue = i as f32 / count as f32 * 360.0;
            hsv_to_rgb(hue, 0.65, 0.92)
        })
        .collect()
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let c = v * s;
    let sector = (h / 60.0) % 6.0;
    let x = c * (1.0 - ((sector % 2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}

/// Pick a font size for a segment label: start from a radius-proportional
/// base and shrink toward [`LABEL_MIN_FONT`] until the approximated text
/// width fits inside [`LABEL_MAX_WIDTH_FRACTION`] of the radius.
pub fn fit_label_size(text: &str, radius: f32) -> u32 {
    let max_width = radius * LABEL_MAX_WIDTH_FRACTION;
    let base = ((radius * 14.0 / 216.0).round() as u32).clamp(LABEL_MIN_FONT, 20);
    let glyphs = text.chars().count() as f32;

    let mut size = base;
    while size > LABEL_MIN_FONT && glyphs * size as f32 * GLYPH_WIDTH_RATIO > max_width {
        size -= 1;
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_two_names() {
        let parsed = parse_names("Alice\nBob").unwrap();
        assert_eq!(parsed.names, vec!["Alice", "Bob"]);
        assert_eq!(parsed.dropped, 0);
    }

    #[test]
    fn test_parse_rejects_single_name() {
        assert_eq!(parse_names("A"), Err(NameListError::TooFew(1)));
        assert_eq!(parse_names(""), Err(NameListError::TooFew(0)));
        // Whitespace-only lines do not count as names
        assert_eq!(parse_names("Alice\n   \n"), Err(NameListError::TooFew(1)));
    }

    #[test]
    fn test_parse_truncates_to_max() {
        let raw: Vec<String> = (0..35).map(|i| format!("Name{}", i)).collect();
        let parsed = parse_names(&raw.join("\n")).unwrap();
        assert_eq!(parsed.names.len(), MAX_NAMES);
        assert_eq!(parsed.dropped, 5);
        assert_eq!(parsed.names[0], "Name0");
        assert_eq!(parsed.names[29], "Name29");
    }

    #[test]
    fn test_parse_boundaries_succeed_silently() {
        let two = parse_names("Alice\nBob").unwrap();
        assert_eq!(two.names.len(), 2);
        assert_eq!(two.dropped, 0);

        let raw: Vec<String> = (0..30).map(|i| format!("Name{}", i)).collect();
        let thirty = parse_names(&raw.join("\n")).unwrap();
        assert_eq!(thirty.names.len(), 30);
        assert_eq!(thirty.dropped, 0);
    }

    #[test]
    fn test_sanitize_strips_markup() {
        let parsed = parse_names("<script>alert(1)</script>\nBob").unwrap();
        assert!(!parsed.names[0].contains('<'));
        assert!(!parsed.names[0].contains('>'));
        assert_eq!(parsed.names[0], "scriptalert(1)/script");
    }

    #[test]
    fn test_sanitize_trims_and_caps() {
        assert_eq!(sanitize_name("  Alice  "), "Alice");
        assert_eq!(sanitize_name("Bob\u{0007}"), "Bob");
        let long = "x".repeat(100);
        assert_eq!(sanitize_name(&long).chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_winning_index_is_deterministic() {
        for &count in &[2usize, 5, 8, 30] {
            let a = winning_index(1.234, count);
            let b = winning_index(1.234, count);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_winning_index_periodicity() {
        for &rotation in &[0.4f32, 1.234, -3.7, 10.0] {
            for &count in &[2usize, 5, 8, 30] {
                assert_eq!(
                    winning_index(rotation, count),
                    winning_index(rotation + TAU, count),
                    "rotation {} count {}",
                    rotation,
                    count
                );
            }
        }
    }

    #[test]
    fn test_winning_index_hits_each_segment() {
        // Rotating segment i's midpoint under the pointer must resolve to i.
        // Negative rotations fall out of this naturally for larger i.
        for &count in &[2usize, 3, 8, 30] {
            let angle_per = angle_per_segment(count);
            for i in 0..count {
                let rotation = POINTER_ANGLE - (i as f32 + 0.5) * angle_per;
                assert_eq!(winning_index(rotation, count), i, "count {}", count);
            }
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints_and_monotonicity() {
        assert!(ease_out_cubic(0.0).abs() < 1e-6);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-6);

        let mut prev = ease_out_cubic(0.0);
        for step in 1..=100 {
            let next = ease_out_cubic(step as f32 / 100.0);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_spin_session_rotation_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let session = SpinSession::begin(1.5, &mut rng);
            let delta = session.target_rotation - session.start_rotation;
            assert!(delta >= MIN_TURNS * TAU);
            assert!(delta < (MAX_TURNS + 1.0) * TAU);
        }
    }

    #[test]
    fn test_spin_session_curve() {
        let mut rng = StdRng::seed_from_u64(42);
        let session = SpinSession::begin(0.0, &mut rng);

        // Starts at the start rotation
        assert_eq!(session.rotation_at(Duration::ZERO), session.start_rotation);

        // Monotone non-decreasing across the whole spin
        let mut prev = session.start_rotation;
        for ms in (0..=3000).step_by(50) {
            let r = session.rotation_at(Duration::from_millis(ms));
            assert!(r >= prev);
            prev = r;
        }

        // Pins exactly to the target at completion and beyond
        assert_eq!(session.rotation_at(SPIN_DURATION), session.target_rotation);
        assert_eq!(
            session.rotation_at(Duration::from_millis(4500)),
            session.target_rotation
        );
        assert!(session.is_complete(SPIN_DURATION));
        assert!(!session.is_complete(Duration::from_millis(2999)));
    }

    #[test]
    fn test_palette_counts_and_distinctness() {
        for count in MIN_NAMES..=MAX_NAMES {
            let colors = palette(count);
            assert_eq!(colors.len(), count);
            for i in 0..count {
                for j in (i + 1)..count {
                    assert_ne!(colors[i], colors[j], "count {}", count);
                }
            }
        }
    }

    #[test]
    fn test_palette_starts_at_red() {
        let colors = palette(8);
        let [r, g, b] = colors[0];
        assert!(r > g && r > b);
    }

    #[test]
    fn test_fit_label_size() {
        // Short names keep the radius-proportional base size
        assert_eq!(fit_label_size("Al", 216.0), 14);
        // Long names shrink but never below the floor
        let long = "Maximilian Featherstonehaugh III";
        assert_eq!(fit_label_size(long, 216.0), LABEL_MIN_FONT);
        // Shrinking stops as soon as the label fits
        let mid = fit_label_size("Charlotte", 216.0);
        assert!(mid < 14 && mid >= LABEL_MIN_FONT);
    }
}
