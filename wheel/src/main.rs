//! Wheel of Fortune
//!
//! A spinning wheel that picks one name at random from a user-editable
//! list: animated ease-out rotation, a fixed pointer at 12 o'clock, and a
//! celebratory particle burst when the winner lands.

mod drawing;
mod ui;

use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{parse_names, winning_index, NameListError, SpinSession, MAX_NAMES};

use crate::drawing::{
    colors, draw_particles, draw_pointer, draw_status, draw_toasts, draw_wheel, pointer_tip,
    spawn_burst, update_particles, Layout, Particle, ToastMessage,
};
use crate::ui::{draw_editor_panel, draw_greeting_card, draw_settings_panel, EDITOR_PANEL_WIDTH};

const DEFAULT_NAMES: [&str; 8] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry",
];
const IDLE_STATUS: &str = "Spin to find the winner!";

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted settings
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    show_burst: bool,
    show_icon: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_burst: true,
            show_icon: false,
        }
    }
}

/// Application state
struct Model {
    /// The names on the wheel, always 2-30 entries
    names: Vec<String>,
    /// Current wheel rotation in radians, unwrapped
    rotation: f32,
    /// The active spin, if any; at most one at a time
    spin: Option<SpinSession>,
    /// Status heading: idle prompt, "Spinning...", or winner announcement
    status: String,
    /// Most recent winner, shown on the greeting card
    last_winner: Option<String>,
    /// Editor text mirroring the name list
    names_input: String,
    /// Transient error/warning notifications
    toasts: Vec<ToastMessage>,
    /// Celebration particles in flight
    particles: Vec<Particle>,
    /// Whether the celebration burst is enabled
    show_burst: bool,
    /// Whether the greeting card shows its icon row
    show_icon: bool,
    /// egui integration
    egui: Egui,
}

fn save_settings(model: &Model) {
    let config = Config {
        show_burst: model.show_burst,
        show_icon: model.show_icon,
    };
    if let Err(e) = shared::save_config(&config) {
        eprintln!("Failed to save settings: {}", e);
    }
}

fn model(app: &App) -> Model {
    // Create window
    let window_id = app
        .new_window()
        .title("Wheel of Fortune")
        .size(960, 640)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    // Load settings
    let config: Config = shared::load_config().ok().flatten().unwrap_or_default();

    let names: Vec<String> = DEFAULT_NAMES.iter().map(|s| s.to_string()).collect();
    let names_input = names.join("\n");

    Model {
        names,
        rotation: 0.0,
        spin: None,
        status: IDLE_STATUS.to_string(),
        last_winner: None,
        names_input,
        toasts: Vec::new(),
        particles: Vec::new(),
        show_burst: config.show_burst,
        show_icon: config.show_icon,
        egui,
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    // Advance an active spin from wall-clock elapsed time, so the animation
    // speed is stable across frame rates
    if let Some(session) = model.spin {
        let elapsed = session.elapsed();
        model.rotation = session.rotation_at(elapsed);

        if session.is_complete(elapsed) {
            model.spin = None;
            resolve_winner(app, model);
        }
    }

    let dt = update.since_last.as_secs_f32();
    update_particles(&mut model.particles, dt);
    model.toasts.retain(|toast| !toast.expired());

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let is_spinning = model.spin.is_some();
    let panel_result = draw_editor_panel(
        &ctx,
        &mut model.names_input,
        is_spinning,
        model.names.len(),
    );

    let greeting_name = model
        .last_winner
        .clone()
        .unwrap_or_else(|| "World".to_string());
    let mut show_icon = model.show_icon;
    let card_changed = draw_greeting_card(&ctx, &greeting_name, &mut show_icon);

    let mut show_burst = model.show_burst;
    let settings_changed = draw_settings_panel(&ctx, &mut show_burst);

    // Apply UI results after the egui frame is done (ctx is dropped here)
    drop(ctx);

    if card_changed {
        model.show_icon = show_icon;
        save_settings(model);
    }
    if settings_changed {
        model.show_burst = show_burst;
        save_settings(model);
    }
    if panel_result.update_clicked {
        apply_names(model);
    }
    if panel_result.spin_clicked {
        start_spin(model);
    }
}

/// Start a spin unless one is already in flight
fn start_spin(model: &mut Model) {
    if model.spin.is_some() {
        return;
    }

    model.status = "Spinning...".to_string();
    let mut rng = rand::rng();
    model.spin = Some(SpinSession::begin(model.rotation, &mut rng));
}

/// Resolve the winner from the final rotation, announce it, and fire the
/// celebration burst at the pointer position
fn resolve_winner(app: &App, model: &mut Model) {
    let index = winning_index(model.rotation, model.names.len());
    let winner = model.names[index].clone();
    model.status = format!("Winner: {}!", winner);

    if model.show_burst {
        let layout = Layout::calculate(app.window_rect(), EDITOR_PANEL_WIDTH);
        let origin = pointer_tip(layout.wheel_center, layout.wheel_radius);
        let mut rng = rand::rng();
        model.particles.extend(spawn_burst(
            origin,
            &shared::palette(model.names.len()),
            &mut rng,
        ));
    }

    model.last_winner = Some(winner);
}

/// Apply the editor text as the new name list.
///
/// On success the effective (sanitized, possibly truncated) list is written
/// back into the editor so the displayed input matches what is in effect.
/// On failure the prior list is left unchanged.
fn apply_names(model: &mut Model) {
    match parse_names(&model.names_input) {
        Ok(parsed) => {
            if parsed.dropped > 0 {
                model.toasts.push(ToastMessage::warning(format!(
                    "Maximum {} names; ignoring the last {}",
                    MAX_NAMES, parsed.dropped
                )));
            }
            model.names = parsed.names;
            model.rotation = 0.0;
            model.status = IDLE_STATUS.to_string();
            model.names_input = model.names.join("\n");
        }
        Err(err @ NameListError::TooFew(_)) => {
            model.toasts.push(ToastMessage::error(err.to_string()));
        }
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    // Clear background
    draw.background().color(colors::BACKGROUND);

    // Calculate layout
    let layout = Layout::calculate(window_rect, EDITOR_PANEL_WIDTH);

    draw_status(&draw, &model.status, layout.status_pos, layout.status_width);
    draw_wheel(
        &draw,
        &model.names,
        model.rotation,
        layout.wheel_center,
        layout.wheel_radius,
    );
    draw_pointer(&draw, layout.wheel_center, layout.wheel_radius);
    draw_particles(&draw, &model.particles);
    draw_toasts(&draw, &model.toasts, window_rect);

    // Render to frame
    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
