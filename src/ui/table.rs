use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Paper;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Raw-data preview
// ---------------------------------------------------------------------------

/// Table of title, authors, journal and publish time for `papers`.
pub fn preview_table(ui: &mut Ui, papers: &[Paper]) {
    if papers.is_empty() {
        ui.label("No rows.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::initial(420.0).at_least(120.0).clip(true))
        .column(Column::initial(240.0).at_least(80.0).clip(true))
        .column(Column::initial(180.0).at_least(80.0).clip(true))
        .column(Column::remainder().at_least(90.0))
        .header(ROW_HEIGHT, |mut header| {
            for name in ["title", "authors", "journal", "publish_time"] {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, papers.len(), |mut row| {
                let paper = &papers[row.index()];
                row.col(|ui| {
                    ui.label(paper.title());
                });
                row.col(|ui| {
                    ui.label(paper.authors().unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(paper.journal().unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(publish_time_text(paper));
                });
            });
        });
}

/// Parsed date when available, empty otherwise.
fn publish_time_text(paper: &Paper) -> String {
    paper
        .published
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
