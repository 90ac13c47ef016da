use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year selector
// ---------------------------------------------------------------------------

/// Render the left panel with the publication year selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.pipeline.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ui.strong(format!("Publication year (from {})", state.config.min_year));

    if state.years.is_empty() {
        ui.label("No dated papers in range.");
        return;
    }

    let current = state.selected_year;
    let mut chosen = current;
    egui::ComboBox::from_id_salt("publication_year")
        .selected_text(current.map(|y| y.to_string()).unwrap_or_default())
        .show_ui(ui, |ui: &mut Ui| {
            for &year in &state.years {
                ui.selectable_value(&mut chosen, Some(year), year.to_string());
            }
        });

    if chosen != current {
        state.select_year(chosen);
    }

    ui.add_space(4.0);
    ui.label(format!("{} papers", state.selected_count));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(state.data_path.display().to_string());

        if let Some(pipeline) = &state.pipeline {
            ui.separator();
            ui.label(format!(
                "{} papers after cleaning, {} since {}",
                pipeline.dataset().len(),
                pipeline.recent().len(),
                pipeline.min_year()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CORD-19 metadata")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
