use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use super::cleaner::clean_table;
use super::error::DataError;
use super::loader::load_table;
use super::model::CleanedDataset;

// ---------------------------------------------------------------------------
// Dataset cache
// ---------------------------------------------------------------------------

struct CacheEntry {
    modified: SystemTime,
    dataset: Arc<CleanedDataset>,
}

/// Cleaned datasets keyed by file path and modification time.
///
/// A file is read from disk at most once per modification time. The cached
/// datasets are immutable and handed out as shared `Arc`s.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
    loads: usize,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading and cleaning the file
    /// when it is not cached or changed on disk since it was read.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<CleanedDataset>, DataError> {
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| DataError::unreadable(path, e))?;

        if let Some(entry) = self.entries.get(path) {
            if entry.modified == modified {
                log::debug!("Cache hit for {}", path.display());
                return Ok(Arc::clone(&entry.dataset));
            }
            log::info!("{} changed on disk, reloading", path.display());
        }

        let table = load_table(path)?;
        let dataset = Arc::new(clean_table(&table)?);
        self.loads += 1;
        log::info!(
            "Loaded {} papers ({} rows before cleaning) from {}",
            dataset.len(),
            table.len(),
            path.display()
        );

        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                modified,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Forget the entry for `path`; the next `get_or_load` reads the file again.
    pub fn invalidate(&mut self, path: &Path) {
        if self.entries.remove(path).is_some() {
            log::debug!("Invalidated cache entry for {}", path.display());
        }
    }

    /// Number of times a file was actually read from disk.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;

    const CSV: &str = "\
cord_uid,title,abstract,publish_time,journal,source_x,authors
u1,First paper,Some text,2020-04-01,Lancet,PMC,Doe
u2,,No title,2020-04-01,Lancet,PMC,Roe
u3,Third paper,More text,2019,BMJ,Medline,Poe
";

    fn fixture() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        std::fs::write(&path, CSV).unwrap();
        (dir, path)
    }

    #[test]
    fn second_call_reuses_the_dataset() {
        let (_dir, path) = fixture();
        let mut cache = DatasetCache::new();

        let first = cache.get_or_load(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();

        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.loads(), 1);
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let (_dir, path) = fixture();
        let mut cache = DatasetCache::new();

        let first = cache.get_or_load(&path).unwrap();
        cache.invalidate(&path);
        let second = cache.get_or_load(&path).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(cache.loads(), 2);
    }

    #[test]
    fn changed_file_is_reloaded() {
        let (_dir, path) = fixture();
        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(&path).unwrap();

        let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(b"u4,Fourth paper,Text,2021-01-01,Cell,WHO,Ng\n")
            .unwrap();
        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
        let later = modified + Duration::from_secs(60);
        file.set_modified(later).unwrap();
        drop(file);

        let second = cache.get_or_load(&path).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 3);
        assert_eq!(cache.loads(), 2);
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DatasetCache::new();

        let err = cache.get_or_load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataError::Source { .. }));
        assert_eq!(cache.loads(), 0);
    }

    #[test]
    fn schema_errors_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.csv");
        std::fs::write(&path, "title,abstract\nA,B\n").unwrap();
        let mut cache = DatasetCache::new();

        assert!(matches!(
            cache.get_or_load(&path),
            Err(DataError::Schema { .. })
        ));
        assert!(matches!(
            cache.get_or_load(&path),
            Err(DataError::Schema { .. })
        ));
    }
}
