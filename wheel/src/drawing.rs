//! Drawing module - wheel, pointer, particle burst, and toast rendering
//!
//! Renders the wheel visual elements using nannou's Draw API. All functions
//! here are pure draws: same inputs, same output, no retained state.

use std::time::Instant;

use nannou::prelude::*;
use rand::Rng;
use shared::{angle_per_segment, fit_label_size, palette, POINTER_ANGLE};

/// Severity of a transient toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Warning,
}

/// A transient toast notification message
pub struct ToastMessage {
    pub text: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub duration_secs: f32,
}

impl ToastMessage {
    const DEFAULT_DURATION_SECS: f32 = 3.5;

    pub fn error(text: String) -> Self {
        ToastMessage {
            text,
            kind: ToastKind::Error,
            created_at: Instant::now(),
            duration_secs: Self::DEFAULT_DURATION_SECS,
        }
    }

    pub fn warning(text: String) -> Self {
        ToastMessage {
            text,
            kind: ToastKind::Warning,
            created_at: Instant::now(),
            duration_secs: Self::DEFAULT_DURATION_SECS,
        }
    }

    pub fn expired(&self) -> bool {
        self.created_at.elapsed().as_secs_f32() >= self.duration_secs
    }
}

/// Color palette for the wheel theme
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 30,
        green: 27,
        blue: 46,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 240,
        green: 240,
        blue: 240,
        standard: std::marker::PhantomData,
    };
    pub const SEGMENT_OUTLINE: Srgb<u8> = Srgb {
        red: 255,
        green: 255,
        blue: 255,
        standard: std::marker::PhantomData,
    };
    pub const LABEL: Srgb<u8> = Srgb {
        red: 255,
        green: 255,
        blue: 255,
        standard: std::marker::PhantomData,
    };
    pub const HUB: Srgb<u8> = Srgb {
        red: 51,
        green: 51,
        blue: 51,
        standard: std::marker::PhantomData,
    };
    pub const POINTER: Srgb<u8> = Srgb {
        red: 250,
        green: 204,
        blue: 21,
        standard: std::marker::PhantomData,
    };
    pub const TOAST_ERROR_BG: Srgb<u8> = Srgb {
        red: 120,
        green: 30,
        blue: 30,
        standard: std::marker::PhantomData,
    };
    pub const TOAST_WARNING_BG: Srgb<u8> = Srgb {
        red: 120,
        green: 90,
        blue: 20,
        standard: std::marker::PhantomData,
    };
}

/// Draw the wheel: one equal wedge per name, offset by the rotation,
/// counter-clockwise in nannou's y-up coordinates. Each wedge is filled
/// with its palette color, outlined, and labeled near the outer edge with
/// the text rotated to read radially outward. No-ops on a degenerate layout.
pub fn draw_wheel(draw: &Draw, names: &[String], rotation: f32, center: Point2, radius: f32) {
    if names.is_empty() || radius <= 0.0 {
        return;
    }

    let angle_per = angle_per_segment(names.len());
    let segment_colors = palette(names.len());

    for (i, name) in names.iter().enumerate() {
        let start = i as f32 * angle_per + rotation;
        let end = start + angle_per;

        let points = wedge_points(center, radius, start, end);
        let [r, g, b] = segment_colors[i];
        draw.polygon().color(srgb(r, g, b)).points(points.clone());

        // Closed outline back to the center
        let mut outline = points;
        outline.push(center);
        draw.polyline()
            .weight(2.0)
            .color(colors::SEGMENT_OUTLINE)
            .points(outline);

        // Label at 75% of the radius, reading radially outward
        let mid = start + angle_per / 2.0;
        let label_pos = center + vec2(mid.cos(), mid.sin()) * (radius * 0.75);
        let font_size = fit_label_size(name, radius);
        draw.text(name)
            .xy(label_pos)
            .rotate(mid)
            .color(colors::LABEL)
            .font_size(font_size)
            .w(radius);
    }

    // Center hub
    draw.ellipse()
        .xy(center)
        .radius((radius * 0.09).max(10.0))
        .color(colors::HUB);
}

/// Sample the arc of one wedge as a center-anchored fan of points
fn wedge_points(center: Point2, radius: f32, start: f32, end: f32) -> Vec<Point2> {
    let arc = end - start;
    let steps = ((arc / TAU) * 96.0).ceil().max(2.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let theta = start + arc * i as f32 / steps as f32;
        points.push(center + vec2(theta.cos(), theta.sin()) * radius);
    }
    points
}

/// Screen position of the pointer tip, just outside the rim at
/// [`POINTER_ANGLE`] (12 o'clock). The winner resolver reads segments off
/// at this same angle.
pub fn pointer_tip(center: Point2, radius: f32) -> Point2 {
    center + vec2(POINTER_ANGLE.cos(), POINTER_ANGLE.sin()) * (radius + 4.0)
}

/// Draw the fixed pointer indicator: a downward triangle above the wheel
pub fn draw_pointer(draw: &Draw, center: Point2, radius: f32) {
    if radius <= 0.0 {
        return;
    }

    let tip = pointer_tip(center, radius);
    let half_width = (radius * 0.06).max(8.0);
    let height = half_width * 1.8;

    draw.tri()
        .points(
            tip,
            tip + vec2(-half_width, height),
            tip + vec2(half_width, height),
        )
        .color(colors::POINTER);
}

/// Draw the status heading above the wheel
pub fn draw_status(draw: &Draw, status: &str, position: Point2, width: f32) {
    draw.text(status)
        .xy(position)
        .color(colors::TEXT_PRIMARY)
        .font_size(26)
        .w(width);
}

/// One celebration particle
pub struct Particle {
    pub pos: Point2,
    pub vel: Vec2,
    pub color: Srgb<u8>,
    pub age: f32,
    pub lifetime: f32,
}

/// Spawn a one-shot burst of particles at the pointer position, colored
/// from the current wheel palette with an upward velocity bias.
pub fn spawn_burst(origin: Point2, wheel_palette: &[[u8; 3]], rng: &mut impl Rng) -> Vec<Particle> {
    (0..48)
        .map(|_| {
            let [r, g, b] = wheel_palette[rng.random_range(0..wheel_palette.len())];
            Particle {
                pos: origin,
                vel: vec2(
                    rng.random_range(-160.0..160.0),
                    rng.random_range(40.0..260.0),
                ),
                color: srgb(r, g, b),
                age: 0.0,
                lifetime: rng.random_range(1.0..1.6),
            }
        })
        .collect()
}

/// Advance particles by one frame and prune the expired ones
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    for p in particles.iter_mut() {
        p.age += dt;
        p.vel.y -= 420.0 * dt;
        p.pos += p.vel * dt;
    }
    particles.retain(|p| p.age < p.lifetime);
}

/// Draw particles, fading out over their lifetime
pub fn draw_particles(draw: &Draw, particles: &[Particle]) {
    for p in particles {
        let t = (p.age / p.lifetime).min(1.0);
        let alpha = ((1.0 - t) * 255.0) as u8;
        draw.ellipse()
            .xy(p.pos)
            .radius(3.5)
            .color(srgba(p.color.red, p.color.green, p.color.blue, alpha));
    }
}

/// Draw toast notifications stacked from the bottom-left, fading out in
/// the last stretch of their duration
pub fn draw_toasts(draw: &Draw, toasts: &[ToastMessage], window_rect: Rect) {
    let toast_width = 320.0;
    let toast_height = 36.0;
    let padding = 10.0;
    let margin = 15.0;

    for (i, toast) in toasts.iter().enumerate() {
        let elapsed = toast.created_at.elapsed().as_secs_f32();
        let progress = elapsed / toast.duration_secs;

        let alpha = if progress > 0.8 {
            ((1.0 - progress) / 0.2 * 255.0) as u8
        } else {
            255u8
        };

        let bg = match toast.kind {
            ToastKind::Error => colors::TOAST_ERROR_BG,
            ToastKind::Warning => colors::TOAST_WARNING_BG,
        };

        let y_offset = (i as f32) * (toast_height + margin);
        let pos = pt2(
            window_rect.left() + toast_width / 2.0 + margin,
            window_rect.bottom() + toast_height / 2.0 + margin + y_offset,
        );

        draw.rect()
            .xy(pos)
            .w_h(toast_width, toast_height)
            .color(srgba(bg.red, bg.green, bg.blue, alpha));

        draw.text(&toast.text)
            .xy(pos)
            .color(srgba(
                colors::TEXT_PRIMARY.red,
                colors::TEXT_PRIMARY.green,
                colors::TEXT_PRIMARY.blue,
                alpha,
            ))
            .font_size(14)
            .w(toast_width - padding * 2.0);
    }
}

/// Layout for the wheel area, left of the editor panel
pub struct Layout {
    pub wheel_center: Point2,
    pub wheel_radius: f32,
    pub status_pos: Point2,
    pub status_width: f32,
}

impl Layout {
    /// Maximum wheel radius regardless of window size
    pub const MAX_RADIUS: f32 = 260.0;

    /// Calculate layout from the window rect, reserving the right-hand
    /// editor panel. The radius tracks the window responsively but is
    /// bounded at [`Layout::MAX_RADIUS`]; tiny windows can produce a
    /// non-positive radius, which the renderer treats as a no-op.
    pub fn calculate(window_rect: Rect, editor_panel_w: f32) -> Self {
        let canvas = Rect::from_corners(
            pt2(window_rect.left(), window_rect.bottom()),
            pt2(window_rect.right() - editor_panel_w, window_rect.top()),
        );

        let padding = 70.0;
        let wheel_radius = (canvas.w().min(canvas.h()) / 2.0 - padding).min(Self::MAX_RADIUS);
        let wheel_center = pt2(canvas.x(), canvas.y() - 24.0);
        let status_pos = pt2(canvas.x(), wheel_center.y + wheel_radius + 72.0);

        Layout {
            wheel_center,
            wheel_radius,
            status_pos,
            status_width: canvas.w() - 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_points_fan() {
        let center = pt2(10.0, -5.0);
        let points = wedge_points(center, 100.0, 0.0, TAU / 8.0);

        // Fan is anchored at the center, every other point on the rim
        assert_eq!(points[0], center);
        for p in &points[1..] {
            let dist = (*p - center).length();
            assert!((dist - 100.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_layout_radius_is_bounded() {
        let huge = Rect::from_w_h(4000.0, 3000.0);
        let layout = Layout::calculate(huge, 320.0);
        assert!(layout.wheel_radius <= Layout::MAX_RADIUS);

        // A tiny window degenerates to a non-positive radius; the renderer
        // treats that as a no-op rather than drawing garbage
        let tiny = Rect::from_w_h(360.0, 80.0);
        let layout = Layout::calculate(tiny, 320.0);
        assert!(layout.wheel_radius <= 0.0);
    }

    #[test]
    fn test_particles_expire() {
        let mut rng = rand::rng();
        let mut particles = spawn_burst(pt2(0.0, 0.0), &[[255, 0, 0]], &mut rng);
        assert_eq!(particles.len(), 48);

        // Lifetimes top out at 1.6s, so two seconds clears the burst
        update_particles(&mut particles, 2.0);
        assert!(particles.is_empty());
    }
}
