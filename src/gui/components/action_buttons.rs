// src/gui/components/action_buttons.rs

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::{
    config::{consts::DEFAULT_OUT_DIR, options::{looks_like_dir_hint, ExportFormat}},
    gui::{actions, app::App},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { SameAsInput, Csv, Tsv, Xlsx }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            None => UiFormat::SameAsInput,
            Some(ExportFormat::Csv) => UiFormat::Csv,
            Some(ExportFormat::Tsv) => UiFormat::Tsv,
            Some(ExportFormat::Xlsx) => UiFormat::Xlsx,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::SameAsInput, "Same as input");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");
            ui.selectable_value(&mut fmt, UiFormat::Xlsx, "Excel");
            ui.separator();
            if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::SameAsInput => None,
                UiFormat::Csv => Some(ExportFormat::Csv),
                UiFormat::Tsv => Some(ExportFormat::Tsv),
                UiFormat::Xlsx => Some(ExportFormat::Xlsx),
            };
            logf!("UI: Export format → {:?}", export.format);
        }
    }
    // extension may have changed
    app.refresh_default_out_path();

    // --- Output field ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                    .hint_text("outputs/processed_<input>")
                    .font(egui::TextStyle::Monospace),
            )
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }
    });

    if open_folder_clicked {
        open_output_folder(app);
    }

    // Actions: Copy / Export / Extract
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        let can_export = app.processed.is_some() && !app.running;
        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        let green = egui::Color32::from_rgb(40, 170, 90);
        let button_extract = ui.add_enabled(
            app.source.is_some() && !app.running,
            egui::Button::new(
                egui::RichText::new("EXTRACT")
                    .color(egui::Color32::BLACK)
                    .strong())
                .fill(green),
        );
        if button_extract.clicked() {
            actions::extract(app);
        }

        if app.running {
            ui.add(egui::widgets::Spinner::new().size(16.0));
        }

        let status = app.status.lock().map(|s| s.clone()).unwrap_or_default();
        ui.label(status);
    });
}

/// Open the folder the export would land in.
fn open_output_folder(app: &mut App) {
    app.sync_out_path();
    let export = &app.state.options.export;

    let folder = match (app.input_path(), export.explicit_out_path()) {
        (Some(input), _) => export.out_path(input).parent().map(Path::to_path_buf),
        (None, Some(p)) if looks_like_dir_hint(p) => Some(p.to_path_buf()),
        (None, Some(p)) => p.parent().map(Path::to_path_buf),
        (None, None) => Some(PathBuf::from(DEFAULT_OUT_DIR)),
    }
    .unwrap_or_else(|| PathBuf::from("."));
    let folder = find_nearest_existing_parent(&folder);

    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            loge!("Cannot resolve folder path: {}", e);
            app.status(format!("Cannot resolve folder path: {e}"));
            return;
        }
    };

    match open_folder_in_explorer(&absolute) {
        Ok(()) => logf!("Opened folder: {}", absolute.display()),
        Err(e) => {
            loge!("Failed to open folder: {}", e);
            app.status(format!("Failed to open folder: {e}"));
        }
    }
}

/// Walk up until a directory exists; `.` as the last resort.
fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| format!("Failed to spawn {program}: {e}"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
