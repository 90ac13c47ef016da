use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// RawTable – the CSV as read from disk
// ---------------------------------------------------------------------------

/// Every row of the input file, kept as loosely typed text.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names from the header row, in file order.
    pub headers: Vec<String>,
    /// Data rows; ragged rows are kept as read.
    pub rows: Vec<csv::StringRecord>,
}

impl RawTable {
    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Cell texts that mark a missing value in exported data frames.
const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Normalise a raw cell: empty, whitespace-only and null markers become `None`.
pub fn cell_value(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || NULL_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(raw.to_string())
    }
}

// ---------------------------------------------------------------------------
// PaperRecord – the columns the pipeline reads from one row
// ---------------------------------------------------------------------------

/// One row of the metadata file restricted to the columns in use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperRecord {
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    /// Free-form date text, e.g. `2020-03-15` or `2019`.
    pub publish_time: Option<String>,
    pub journal: Option<String>,
    /// Data source(s) of the record, the `source_x` column.
    pub source: Option<String>,
    pub authors: Option<String>,
}

// ---------------------------------------------------------------------------
// Paper / CleanedDataset – output of the cleaner
// ---------------------------------------------------------------------------

/// A record that passed cleaning, with its parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    pub record: PaperRecord,
    /// `publish_time` parsed permissively; `None` when it did not parse.
    pub published: Option<NaiveDate>,
    /// Calendar year of `published`.
    pub year: Option<i32>,
}

impl Paper {
    /// Title text. Always present after cleaning.
    pub fn title(&self) -> &str {
        self.record.title.as_deref().unwrap_or_default()
    }

    pub fn journal(&self) -> Option<&str> {
        self.record.journal.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.record.source.as_deref()
    }

    pub fn authors(&self) -> Option<&str> {
        self.record.authors.as_deref()
    }
}

/// Papers with a title and an abstract, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedDataset {
    pub papers: Vec<Paper>,
}

impl CleanedDataset {
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// The underlying records, e.g. to feed them through the cleaner again.
    #[cfg(test)]
    pub fn records(&self) -> impl Iterator<Item = &PaperRecord> {
        self.papers.iter().map(|p| &p.record)
    }
}
