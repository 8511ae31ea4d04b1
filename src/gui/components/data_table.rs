// src/gui/components/data_table.rs
//
// Draws the preview table. Purely a view over App::preview.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::PREVIEW_ROWS, extract::AttributeKind, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(ds) = app.preview.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label("Load a CSV, TSV or Excel file to begin");
        });
        return;
    };

    let total = app.current().map(|d| d.row_count()).unwrap_or(0);
    if total > PREVIEW_ROWS {
        ui.small(format!("Showing first {PREVIEW_ROWS} of {total} rows"));
    }

    let cols = ds.col_count();
    if cols == 0 {
        ui.label("Input has no columns");
        return;
    }

    let headers: Vec<String> = (0..cols)
        .map(|ci| {
            ds.headers
                .as_ref()
                .and_then(|h| h.get(ci))
                .cloned()
                .unwrap_or_else(|| format!("Col {}", ci + 1))
        })
        .collect();

    // Extracted columns get a tint and a narrower default width.
    let extracted: Vec<bool> = headers
        .iter()
        .map(|h| AttributeKind::ALL.iter().any(|k| k.column_name() == h))
        .collect();
    let source_ix = ds.column_index(&app.state.options.extract.source_column);

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false; // reserve space instead of overlaying content
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("preview_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("preview", cols));
            for ci in 0..cols {
                let w = if Some(ci) == source_ix {
                    320.0
                } else if extracted[ci] {
                    90.0
                } else {
                    120.0
                };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
            }

            let tint = egui::Color32::from_rgb(0x64, 0xB4, 0xFF);

            table
                .header(24.0, |mut header| {
                    for (ci, label) in headers.iter().enumerate() {
                        header.col(|ui| {
                            let mut rt = RichText::new(label).strong();
                            if extracted[ci] {
                                rt = rt.color(tint);
                            }
                            ui.add(egui::Label::new(rt).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, ds.row_count(), |mut row| {
                        let Some(data) = ds.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(cell);
                                if extracted[ci] {
                                    rt = rt.color(tint);
                                }
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(rt);
                                });
                            });
                        }
                    });
                });
        });
}
