use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{charts, cloud, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CordExplorerApp {
    pub state: AppState,
}

impl CordExplorerApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for CordExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: year selector ----
        egui::SidePanel::left("year_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    ui.heading("COVID-19 Research Papers – CORD-19 Dataset Explorer");

    if let Some(msg) = &state.status_message {
        ui.add_space(8.0);
        ui.label(RichText::new(msg).color(Color32::RED).strong());
        return;
    }
    let (Some(pipeline), Some(panels)) = (&state.pipeline, &state.panels) else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label(format!(
                "Filtered by publication year (from {}), \
                 excluding publications with missing titles.",
                pipeline.min_year()
            ));
            let year = state
                .selected_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "–".to_string());
            ui.heading(format!(
                "Number of papers published in {year}: {}",
                state.selected_count
            ));
            ui.separator();

            ui.strong("Publications Over Time");
            charts::publications_over_time(ui, &panels.per_year, pipeline.min_year());
            ui.separator();

            ui.strong("Top Journals Publishing COVID-19 Research");
            charts::horizontal_bars(
                ui,
                "top_journals",
                &format!("Top {} Journals", state.config.top_journals),
                &panels.journals,
                Color32::LIGHT_BLUE,
            );
            ui.separator();

            ui.strong("Most Frequent Words in Paper Titles");
            cloud::word_cloud(ui, &panels.cloud);
            ui.separator();

            ui.strong("Top Sources of Papers");
            charts::horizontal_bars(
                ui,
                "top_sources",
                &format!("Top {} Sources", state.config.top_sources),
                &panels.sources,
                Color32::from_rgb(128, 0, 128),
            );
            ui.separator();

            egui::CollapsingHeader::new(format!(
                "Show {} rows of raw data",
                state.config.preview_rows
            ))
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                table::preview_table(ui, pipeline.preview(state.config.preview_rows));
            });
        });
}
