// src/gui/actions/export.rs
use std::path::PathBuf;

use crate::{
    config::consts::DEFAULT_EXPORT_FILE,
    file,
    gui::{app::App, table_model::TableView},
};

/// Write the current view to the export path; `.tsv` → tabs, else CSV.
pub fn export(app: &mut App) {
    // normalize out path first (mutates app) before any &app borrows
    if app.state.gui.export_path_dirty {
        app.state.options.export_path = PathBuf::from(app.state.gui.export_path_text.trim());
        logf!("Export: Out path set → {}", app.state.options.export_path.display());
        app.state.gui.export_path_dirty = false;
    }

    let view = app.table.view();
    if view.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.notice = Some(s!("Nothing to export"));
        return;
    }

    let target = &app.state.options.export_path;
    let sep = file::sep_for_path(target);
    let rows = view.to_rows();
    logf!("Export: Begin rows={} path={}", rows.len(), target.display());

    let msg = match file::write_table(target, DEFAULT_EXPORT_FILE, &TableView::headers(), &rows, sep) {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            format!("Exported {} rows → {}", rows.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.notice = Some(msg);
}
