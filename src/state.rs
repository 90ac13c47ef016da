use std::path::{Path, PathBuf};

use crate::config::DashboardConfig;
use crate::data::cache::DatasetCache;
use crate::data::filter::FrequencyTable;
use crate::data::pipeline::Pipeline;
use crate::data::words::{most_frequent, StopWords};

// ---------------------------------------------------------------------------
// Panel data, computed once per loaded dataset
// ---------------------------------------------------------------------------

/// Everything the four chart panels draw. Independent of the selected year.
#[derive(Debug, Clone)]
pub struct DashboardPanels {
    pub per_year: FrequencyTable<i32>,
    pub journals: FrequencyTable<String>,
    pub sources: FrequencyTable<String>,
    /// Most frequent title words, largest first.
    pub cloud: Vec<(String, usize)>,
}

impl DashboardPanels {
    fn build(pipeline: &Pipeline, config: &DashboardConfig) -> Self {
        Self {
            per_year: pipeline.publications_per_year(),
            journals: pipeline.top_journals(config.top_journals),
            sources: pipeline.top_sources(config.top_sources),
            cloud: most_frequent(&pipeline.title_words(), config.cloud_words),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// File currently shown.
    pub data_path: PathBuf,

    cache: DatasetCache,

    /// Queries over the loaded dataset (None until a load succeeds).
    pub pipeline: Option<Pipeline>,

    /// Chart data for the loaded dataset.
    pub panels: Option<DashboardPanels>,

    /// Options of the year selector, ascending.
    pub years: Vec<i32>,

    pub selected_year: Option<i32>,

    /// Papers published in `selected_year`.
    pub selected_count: usize,

    /// Error message shown in place of the dashboard.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state and load the configured data file.
    pub fn new(config: DashboardConfig) -> Self {
        let data_path = config.data_path.clone();
        let mut state = Self {
            config,
            data_path: data_path.clone(),
            cache: DatasetCache::new(),
            pipeline: None,
            panels: None,
            years: Vec::new(),
            selected_year: None,
            selected_count: 0,
            status_message: None,
        };
        state.load(&data_path);
        state
    }

    /// Load (or fetch from the cache) the file at `path` and rebuild the panels.
    ///
    /// On failure the dashboard is cleared and the error is kept in
    /// `status_message`.
    pub fn load(&mut self, path: &Path) {
        self.data_path = path.to_path_buf();
        match self.cache.get_or_load(path) {
            Ok(dataset) => {
                let stop_words = StopWords::english();
                log::debug!(
                    "Dataset ready: {} papers, {} stop-words, {} file read(s) this session",
                    dataset.len(),
                    stop_words.len(),
                    self.cache.loads()
                );
                let pipeline = Pipeline::new(dataset, self.config.min_year, stop_words);
                self.panels = Some(DashboardPanels::build(&pipeline, &self.config));
                self.years = pipeline.selectable_years();
                self.pipeline = Some(pipeline);
                self.status_message = None;

                let first = self.years.first().copied();
                self.select_year(first);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.pipeline = None;
                self.panels = None;
                self.years.clear();
                self.selected_year = None;
                self.selected_count = 0;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Drop the cached copy of the current file and read it again.
    pub fn reload(&mut self) {
        let path = self.data_path.clone();
        self.cache.invalidate(&path);
        self.load(&path);
    }

    /// Change the selected year and recount its papers.
    pub fn select_year(&mut self, year: Option<i32>) {
        self.selected_year = year;
        self.selected_count = match (&self.pipeline, year) {
            (Some(pipeline), Some(year)) => pipeline.filter(year).len(),
            _ => 0,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
title,abstract,publish_time,journal,source_x,authors,extra
Old study,a,1990-01-01,J1,PMC,A,x
Spread model,b,2020-02-02,J1,PMC,B,x
Mask study,c,2020,J2,WHO,C,x
Vaccine study,d,2012-05-05,J2,PMC,D,x
";

    fn config_for(path: &Path) -> DashboardConfig {
        DashboardConfig {
            data_path: path.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn loads_and_selects_the_first_year() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        std::fs::write(&path, CSV).unwrap();

        let state = AppState::new(config_for(&path));

        assert!(state.status_message.is_none());
        assert_eq!(state.years, vec![2012, 2020]);
        assert_eq!(state.selected_year, Some(2012));
        assert_eq!(state.selected_count, 1);

        let panels = state.panels.as_ref().unwrap();
        assert_eq!(panels.per_year.entries(), &[(2012, 1), (2020, 2)]);
        assert_eq!(panels.journals.entries()[0], ("J1".to_string(), 2));
        assert_eq!(panels.cloud[0], ("study".to_string(), 3));
    }

    #[test]
    fn selecting_a_year_recounts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        std::fs::write(&path, CSV).unwrap();
        let mut state = AppState::new(config_for(&path));

        state.select_year(Some(2020));
        assert_eq!(state.selected_count, 2);

        state.select_year(Some(2001));
        assert_eq!(state.selected_count, 0);

        state.select_year(None);
        assert_eq!(state.selected_count, 0);
    }

    #[test]
    fn missing_file_shows_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config_for(&dir.path().join("metadata.csv")));

        assert!(state.pipeline.is_none());
        assert!(state.panels.is_none());
        assert_eq!(state.selected_count, 0);
        assert!(state.status_message.unwrap().contains("metadata.csv"));
    }

    #[test]
    fn reload_picks_up_new_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        std::fs::write(&path, CSV).unwrap();
        let mut state = AppState::new(config_for(&path));

        std::fs::write(&path, format!("{CSV}New study,e,2020-09-09,J3,WHO,E,x\n")).unwrap();
        state.reload();

        assert_eq!(state.pipeline.as_ref().unwrap().dataset().len(), 5);
        assert_eq!(state.selected_year, Some(2012));
        state.select_year(Some(2020));
        assert_eq!(state.selected_count, 3);
    }
}
