// src/gui/components/toolbar.rs
//
// Refresh + status line, then Copy / Export with the output path field.

use eframe::egui::{self, widgets::Spinner, Color32, RichText};

use crate::gui::{actions, app::{App, LoadStatus}};

fn status_color(status: &LoadStatus, ui: &egui::Ui) -> Color32 {
    match status {
        LoadStatus::Loading => ui.visuals().weak_text_color(),
        LoadStatus::Loaded { .. } => Color32::from_rgb(0x4C, 0xAF, 0x50),
        LoadStatus::Error(_) => ui.visuals().error_fg_color,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let refresh = ui.add_enabled(
            !app.running(),
            egui::Button::new(RichText::new("Refresh").strong()),
        );
        if refresh.clicked() {
            logf!("UI: Refresh");
            app.refresh(ui.ctx());
        }

        if app.running() {
            ui.add(Spinner::new().size(16.0));
        }

        let color = status_color(&app.status, ui);
        ui.label(RichText::new(app.status.text()).color(color));
    });

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.export_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.export_path_dirty = true;
            logd!("UI: export_path_text changed (dirty=true) → {}", app.state.gui.export_path_text);
        }

        if let Some(notice) = &app.notice {
            ui.label(RichText::new(notice).weak());
        }
    });

    ui.label(RichText::new(format!("Source: {}", app.source)).small().weak());
    ui.add_space(2.0);
}
