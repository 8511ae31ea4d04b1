// src/gui/components/input_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut load_clicked = false;

    ui.horizontal(|ui| {
        ui.label("Input:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.input_text)
                .hint_text("path/to/details.xlsx")
                .font(egui::TextStyle::Monospace)
                .desired_width(ui.available_width() - 60.0),
        );
        // Enter in the field loads too
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            load_clicked = true;
        }
        if ui.button("Load").clicked() {
            load_clicked = true;
        }
    });

    if load_clicked {
        actions::load(app);
    }
}
