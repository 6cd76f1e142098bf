// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::rows_to_string, gui::{app::App, table_model::TableView}};

/// Current view (display order, display text) → clipboard as TSV.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let view = app.table.view();
    if view.is_empty() {
        app.notice = Some(s!("Nothing to copy"));
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let rows = view.to_rows();
    let headers = TableView::headers();
    logf!("Copy: rows={}", rows.len());

    ui_ctx.copy_text(rows_to_string(&rows, Some(&headers), '\t'));
    app.notice = Some(s!("Copied to clipboard"));
}
