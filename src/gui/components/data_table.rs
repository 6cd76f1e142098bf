// src/gui/components/data_table.rs
//
// Draws the live table. Purely a view: header clicks are collected during the
// frame and handed to the TableController afterwards.

use eframe::egui::{self, Align, CursorIcon, Hyperlink, Label, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column as ColumnSpec, TableBuilder};

use crate::gui::{app::App, table_model::{Column, TableRow}};

const WIDTHS: [f32; 4] = [50.0, 220.0, 130.0, 110.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<Column> = None;

    let table_ctl = &app.table;
    let rows = &table_ctl.view().rows;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for w in WIDTHS {
        table = table.column(ColumnSpec::initial(w).resizable(true).clip(true).at_least(30.0));
    }

    table
        .header(24.0, |mut header| {
            for col in Column::ALL {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let state = table_ctl.header_state(col);
                    let text = RichText::new(join!(col.title(), state.indicator())).strong();
                    let resp = ui
                        .add(Label::new(text).selectable(false).sense(Sense::click()))
                        .on_hover_cursor(CursorIcon::PointingHand);
                    if resp.clicked() {
                        clicked = Some(col);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(data) = rows.get(row.index()) else { return };
                for col in Column::ALL {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        cell(ui, data, col);
                    });
                }
            });
        });

    if let Some(col) = clicked {
        app.table.click_header(col);
    }
}

fn cell(ui: &mut egui::Ui, data: &TableRow, col: Column) {
    match (col, &data.link) {
        (Column::Name, Some(link)) => {
            ui.add(Hyperlink::from_label_and_url(data.name.as_str(), &link.url).open_in_new_tab(link.new_tab));
        }
        _ if col.is_numeric() => {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(data.cell(col));
            });
        }
        _ => {
            ui.label(data.cell(col));
        }
    }
}
