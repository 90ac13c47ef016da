use chrono::Datelike;

use super::dates::parse_publish_time;
use super::error::DataError;
use super::model::{cell_value, CleanedDataset, Paper, PaperRecord, RawTable};

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "title",
    "abstract",
    "publish_time",
    "journal",
    "source_x",
    "authors",
];

// ---------------------------------------------------------------------------
// Schema: RawTable → PaperRecord
// ---------------------------------------------------------------------------

/// Pull the required columns out of every row.
///
/// Fails only when a required column is missing from the header; the error
/// lists every missing name.
pub fn extract_records(table: &RawTable) -> Result<Vec<PaperRecord>, DataError> {
    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        match table.column_index(name) {
            Some(i) => *slot = i,
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(DataError::Schema { missing });
    }

    let [title, abstract_text, publish_time, journal, source, authors] = indices;
    Ok(table
        .rows
        .iter()
        .map(|row| PaperRecord {
            title: cell_value(row.get(title)),
            abstract_text: cell_value(row.get(abstract_text)),
            publish_time: cell_value(row.get(publish_time)),
            journal: cell_value(row.get(journal)),
            source: cell_value(row.get(source)),
            authors: cell_value(row.get(authors)),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

/// Drop rows without a title or abstract and derive the publication year.
///
/// Row order is preserved. A `publish_time` that does not parse leaves
/// `published` and `year` empty but keeps the row.
pub fn clean<'a, I>(records: I) -> CleanedDataset
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    let mut seen = 0usize;
    let mut unparsed = 0usize;

    let papers: Vec<Paper> = records
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|r| is_present(&r.title) && is_present(&r.abstract_text))
        .map(|record| {
            let published = record.publish_time.as_deref().and_then(parse_publish_time);
            if published.is_none() {
                unparsed += 1;
            }
            Paper {
                record: record.clone(),
                published,
                year: published.map(|d| d.year()),
            }
        })
        .collect();

    log::debug!(
        "Cleaned {} of {} rows ({} dropped, {} without a usable date)",
        papers.len(),
        seen,
        seen - papers.len(),
        unparsed
    );

    CleanedDataset { papers }
}

/// Schema check followed by [`clean`].
pub fn clean_table(table: &RawTable) -> Result<CleanedDataset, DataError> {
    let records = extract_records(table)?;
    Ok(clean(&records))
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[[&str; 6]]) -> RawTable {
        RawTable {
            headers: REQUIRED_COLUMNS.iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(|r| csv::StringRecord::from(r.to_vec())).collect(),
        }
    }

    #[test]
    fn drops_rows_missing_title_or_abstract() {
        let raw = table(&[
            ["A", "alpha", "2020-01-02", "J1", "PMC", "Doe"],
            ["", "beta", "2020-01-02", "J1", "PMC", "Doe"],
            ["C", "", "2020-01-02", "J1", "PMC", "Doe"],
            ["D", "nan", "2020-01-02", "J1", "PMC", "Doe"],
            ["E", "epsilon", "", "", "", ""],
        ]);
        let cleaned = clean_table(&raw).unwrap();

        let titles: Vec<&str> = cleaned.papers.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["A", "E"]);
        assert!(cleaned.len() <= raw.len());
        for paper in &cleaned.papers {
            assert!(paper.record.title.is_some());
            assert!(paper.record.abstract_text.is_some());
        }
    }

    #[test]
    fn year_follows_publish_time() {
        let raw = table(&[
            ["A", "a", "2020-03-15", "J", "S", "X"],
            ["B", "b", "2008", "J", "S", "X"],
            ["C", "c", "not a date", "J", "S", "X"],
            ["D", "d", "", "J", "S", "X"],
        ]);
        let cleaned = clean_table(&raw).unwrap();
        let years: Vec<Option<i32>> = cleaned.papers.iter().map(|p| p.year).collect();

        assert_eq!(years, vec![Some(2020), Some(2008), None, None]);
        for paper in &cleaned.papers {
            assert_eq!(paper.year, paper.published.map(|d| d.year()));
        }
    }

    #[test]
    fn cleaning_twice_changes_nothing() {
        let raw = table(&[
            ["A", "a", "2020-03-15", "J", "S", "X"],
            ["", "b", "2019", "J", "S", "X"],
            ["C", "c", "garbage", "", "S", ""],
        ]);
        let once = clean_table(&raw).unwrap();
        let twice = clean(once.records());

        assert_eq!(once, twice);
    }

    #[test]
    fn missing_columns_are_listed() {
        let raw = RawTable {
            headers: vec!["title".into(), "journal".into(), "authors".into()],
            rows: Vec::new(),
        };
        match clean_table(&raw) {
            Err(DataError::Schema { missing }) => {
                assert_eq!(missing, vec!["abstract", "publish_time", "source_x"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn empty_table_cleans_to_empty() {
        let cleaned = clean_table(&table(&[])).unwrap();
        assert_eq!(cleaned.len(), 0);
    }
}
