use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, SaveConfigRequest};
use crate::editor::{GridSettings, Session, SessionCommand};
use crate::theme;

/// Main toolbar: session commands, grid toggles and a status read-out
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    session: Res<Session>,
    mut grid: ResMut<GridSettings>,
    mut config: ResMut<AppConfig>,
    mut session_commands: MessageWriter<SessionCommand>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    let visibility = session.visibility();

    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                let buttons = [
                    (SessionCommand::Complete, visibility.complete_visible),
                    (SessionCommand::Copy, visibility.copy_visible),
                    (SessionCommand::Reset, true),
                ];
                for (command, visible) in buttons {
                    if !visible {
                        continue;
                    }

                    let button = egui::Button::new(
                        egui::RichText::new(command_button_label(&command))
                            .size(14.0)
                            .strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0));

                    let response = ui.add(button);
                    if response.clicked() {
                        session_commands.write(command);
                    }
                    response.on_hover_text(command_hint(&command));
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let mut grid_changed = false;
                grid_changed |= ui.checkbox(&mut grid.visible, "Grid").changed();
                grid_changed |= ui.checkbox(&mut grid.snap_enabled, "Snap").changed();
                if grid_changed {
                    config.data.grid_visible = grid.visible;
                    config.data.snap_to_grid = grid.snap_enabled;
                    config.dirty = true;
                    save_events.write(SaveConfigRequest);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if let Some(last) = session.polygons().last() {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(rect, 2.0, theme::bevy_to_egui_opaque(last.color().into()));
                    ui.painter().rect_stroke(
                        rect,
                        2.0,
                        egui::Stroke::new(1.0, theme::ui::SWATCH_BORDER),
                        egui::StrokeKind::Inside,
                    );
                }

                ui.label(egui::RichText::new(status_text(&session)).color(theme::ui::LABEL_TEXT));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Click: add vertex  Enter: complete  C: copy  R: reset")
                            .color(theme::ui::HINT_TEXT)
                            .size(11.0),
                    );
                });
            });
        });
    Ok(())
}

/// Get the button label for a command (with keyboard shortcut)
fn command_button_label(command: &SessionCommand) -> &'static str {
    match command {
        SessionCommand::Complete => "Complete [Enter]",
        SessionCommand::Copy => "Copy [C]",
        SessionCommand::Reset => "Reset [R]",
        SessionCommand::Move(_) | SessionCommand::Click(_) => "",
    }
}

fn command_hint(command: &SessionCommand) -> &'static str {
    match command {
        SessionCommand::Complete => "Close the outline into a filled polygon (needs 3 points)",
        SessionCommand::Copy => "Place a copy of the last polygon at the pointer",
        SessionCommand::Reset => "Remove all polygons and the current outline",
        SessionCommand::Move(_) | SessionCommand::Click(_) => "",
    }
}

/// One-line summary of the session for the toolbar
pub fn status_text(session: &Session) -> String {
    let pointer = session.pointer_world_position();
    let polygons = session.polygons().len();
    let draft = session.draft().vertex_count();

    let mut text = format!(
        "{} polygon{}",
        polygons,
        if polygons == 1 { "" } else { "s" }
    );
    if draft > 0 {
        text.push_str(&format!(
            " | drawing: {} point{}",
            draft,
            if draft == 1 { "" } else { "s" }
        ));
    }
    text.push_str(&format!(" | ({:.1}, {:.1})", pointer.x, pointer.y));
    text
}
