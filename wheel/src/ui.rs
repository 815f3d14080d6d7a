//! UI module - egui name editor, greeting card, and settings
//!
//! Provides the interactive controls using nannou_egui.

use nannou_egui::egui;
use shared::{MAX_NAMES, MIN_NAMES};

/// Width reserved for the right-hand editor panel
pub const EDITOR_PANEL_WIDTH: f32 = 320.0;

/// Result of UI interactions, applied by the caller after the egui frame
#[derive(Default)]
pub struct UiResult {
    /// If true, the user clicked Spin
    pub spin_clicked: bool,
    /// If true, the user clicked Update
    pub update_clicked: bool,
}

/// Draw the name editor panel: multiline text field mirroring the name
/// list, Update and Spin buttons. Both buttons are disabled while a spin
/// is in flight, so the segment layout cannot change under the animation.
pub fn draw_editor_panel(
    ctx: &egui::Context,
    names_input: &mut String,
    is_spinning: bool,
    name_count: usize,
) -> UiResult {
    let mut result = UiResult::default();

    egui::SidePanel::right("names_panel")
        .resizable(false)
        .default_width(EDITOR_PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Update Names");
            ui.label(format!(
                "Enter {}-{} names, one per line",
                MIN_NAMES, MAX_NAMES
            ));
            ui.add_space(4.0);

            ui.add(
                egui::TextEdit::multiline(names_input)
                    .desired_rows(16)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!is_spinning, egui::Button::new("Update"))
                    .clicked()
                {
                    result.update_clicked = true;
                }

                let spin_label = if is_spinning { "Spinning..." } else { "Spin" };
                if ui
                    .add_enabled(!is_spinning, egui::Button::new(spin_label))
                    .clicked()
                {
                    result.spin_clicked = true;
                }
            });

            ui.separator();
            ui.label(format!("{} names on the wheel", name_count));
        });

    result
}

/// Draw the greeting card: a small card-style demo component greeting the
/// most recent winner
pub fn draw_greeting_card(ctx: &egui::Context, name: &str, show_icon: &mut bool) -> bool {
    let mut changed = false;

    egui::Window::new("Welcome")
        .collapsible(true)
        .resizable(false)
        .default_width(260.0)
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("WELCOME")
                    .small()
                    .color(egui::Color32::from_rgb(129, 140, 248)),
            );
            ui.heading(format!("Hello, {}!", name));
            ui.label("A sample card greeting the current winner.");

            ui.add_space(4.0);
            if ui.checkbox(show_icon, "Show icon").changed() {
                changed = true;
            }
            if *show_icon {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚡").size(18.0));
                    ui.small("With icon integration");
                });
            }
        });

    changed
}

/// Draw the settings panel
pub fn draw_settings_panel(ctx: &egui::Context, show_burst: &mut bool) -> bool {
    let mut changed = false;

    egui::Window::new("Settings")
        .collapsible(true)
        .resizable(false)
        .default_width(200.0)
        .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
        .show(ctx, |ui| {
            if ui.checkbox(show_burst, "Celebration burst").changed() {
                changed = true;
            }
            ui.label("Particle burst when a winner lands");
        });

    changed
}
