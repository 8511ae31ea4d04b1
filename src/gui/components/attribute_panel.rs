// src/gui/components/attribute_panel.rs
//
// Left panel: which attributes to compute and where to read descriptions from.

use eframe::egui;

use crate::{extract::{AttributeKind, AttributeSet}, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Attributes");
    ui.add_space(4.0);

    {
        let attrs = &mut app.state.options.extract.attributes;
        for kind in AttributeKind::ALL {
            let mut on = attrs.contains(kind);
            if ui.checkbox(&mut on, kind.label()).changed() {
                attrs.set(kind, on);
                logf!("UI: {:?} → {}", kind, on);
            }
        }

        ui.horizontal(|ui| {
            if ui.small_button("All").clicked() {
                *attrs = AttributeSet::all();
            }
            if ui.small_button("None").clicked() {
                *attrs = AttributeSet::empty();
            }
        });
    }

    ui.separator();

    ui.label("Description column:");
    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.state.options.extract.source_column)
            .desired_width(140.0),
    );
    if resp.lost_focus() {
        logd!("UI: Source column → {:?}", app.state.options.extract.source_column);
    }

    ui.separator();

    if ui
        .checkbox(&mut app.state.gui.compact_preview, "Compact preview")
        .on_hover_text("Show only the description column and the extracted columns")
        .changed()
    {
        app.rebuild_preview();
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.small(format!("Rules v{}", app.extractor.rules_version()));
    });
}
