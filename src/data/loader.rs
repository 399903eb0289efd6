//! CSV dataset loading and saving
//!
//! Rows with more fields than the header are skipped; short rows are padded
//! with empty fields. Invalid UTF-8 is replaced rather than rejected.

use super::error::{DataError, DataResult};
use crate::models::{Record, ScoredRecord};
use csv::{ByteRecord, ReaderBuilder, Writer};
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

pub const TEXT_COLUMN: &str = "text";
pub const SENTIMENT_COLUMN: &str = "sentiment";
pub const USER_COLUMN: &str = "user";

/// Columns appended to the scored output
pub const DERIVED_COLUMNS: [&str; 4] = [
    "tweet_len",
    "pos_percentage",
    "neg_percentage",
    "predicted_sentiment_score",
];

/// A loaded tweet dataset
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in input order
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    /// Malformed rows dropped while loading
    pub skipped_rows: usize,
}

impl Dataset {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.headers.len())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove a column from the header and every record. Returns whether the
    /// column existed. The `text` column cannot be dropped.
    pub fn drop_column(&mut self, name: &str) -> bool {
        if name == TEXT_COLUMN || !self.has_column(name) {
            return false;
        }

        self.headers.retain(|h| h != name);
        for record in &mut self.records {
            record.fields.retain(|(column, _)| column != name);
            if name == SENTIMENT_COLUMN {
                record.sentiment = None;
            }
        }
        true
    }
}

/// Dataset loader for CSV files
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a headered CSV with at least a `text` column
    pub fn load<P: AsRef<Path>>(path: P) -> DataResult<Dataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
        let csv_err = |source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let headers: Vec<String> = reader
            .byte_headers()
            .map_err(csv_err)?
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();

        let text_idx = headers
            .iter()
            .position(|h| h == TEXT_COLUMN)
            .ok_or_else(|| DataError::MissingColumn {
                column: TEXT_COLUMN.to_string(),
                path: path.to_path_buf(),
            })?;
        let sentiment_idx = headers.iter().position(|h| h == SENTIMENT_COLUMN);

        let mut records = Vec::new();
        let mut skipped_rows = 0;
        let mut row = ByteRecord::new();

        loop {
            match reader.read_byte_record(&mut row) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(csv_err(e)),
                Err(e) => {
                    debug!("Skipping unreadable row: {e}");
                    skipped_rows += 1;
                    continue;
                }
            }

            if row.len() > headers.len() {
                let line = row.position().map(|p| p.line()).unwrap_or_default();
                debug!(line, fields = row.len(), "Skipping malformed row");
                skipped_rows += 1;
                continue;
            }

            let value = |idx: usize| {
                row.get(idx)
                    .map(|v| String::from_utf8_lossy(v).into_owned())
                    .unwrap_or_default()
            };

            let fields = headers
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != text_idx)
                .map(|(idx, name)| (name.clone(), value(idx)))
                .collect();

            records.push(Record {
                text: value(text_idx),
                sentiment: sentiment_idx.map(value),
                fields,
            });
        }

        if skipped_rows > 0 {
            warn!("Skipped {skipped_rows} malformed rows in {}", path.display());
        }

        Ok(Dataset {
            headers,
            records,
            skipped_rows,
        })
    }
}

/// Writer for scored datasets
pub struct DatasetWriter;

impl DatasetWriter {
    /// Write the retained columns (with `text` replaced by the cleaned text)
    /// followed by the derived sentiment columns
    pub fn write<P: AsRef<Path>>(path: P, headers: &[String], scored: &[ScoredRecord]) -> DataResult<()> {
        let path = path.as_ref();
        let csv_err = |source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = Writer::from_path(path).map_err(csv_err)?;

        let header_row = headers
            .iter()
            .map(String::as_str)
            .chain(DERIVED_COLUMNS.iter().copied());
        writer.write_record(header_row).map_err(csv_err)?;

        for item in scored {
            let mut row: Vec<String> = headers
                .iter()
                .map(|h| {
                    if h == TEXT_COLUMN {
                        item.cleaned_text.clone()
                    } else {
                        item.record.field(h).unwrap_or_default().to_string()
                    }
                })
                .collect();

            row.push(item.tweet_len().to_string());
            row.push(format_ratio(item.pos_percentage()));
            row.push(format_ratio(item.neg_percentage()));
            row.push(item.predicted.to_string());

            writer.write_record(&row).map_err(csv_err)?;
        }

        writer.flush().map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Always keep a decimal point so ratios read back as floats (`0.0`, `0.25`)
fn format_ratio(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SentimentLabel, SentimentScore};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_skips_long_rows_and_pads_short_ones() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tweets.csv");
        fs::write(
            &path,
            "user,text,sentiment\n\
             alice,I love it,positive\n\
             bob,too,many,fields,here\n\
             carol,short\n",
        )
        .unwrap();

        let dataset = DatasetLoader::load(&path).unwrap();

        assert_eq!(dataset.shape(), (2, 3));
        assert_eq!(dataset.skipped_rows, 1);
        assert_eq!(dataset.records[0].text, "I love it");
        assert_eq!(dataset.records[0].sentiment.as_deref(), Some("positive"));
        assert_eq!(dataset.records[1].text, "short");
        assert_eq!(dataset.records[1].sentiment.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_text_column_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "user,body\nalice,hello\n").unwrap();

        let err = DatasetLoader::load(&path).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column, .. } if column == "text"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let err = DatasetLoader::load(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_drop_user_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tweets.csv");
        fs::write(&path, "user,text\nalice,hi\n").unwrap();

        let mut dataset = DatasetLoader::load(&path).unwrap();

        assert!(dataset.drop_column(USER_COLUMN));
        assert!(!dataset.drop_column(USER_COLUMN));
        assert!(!dataset.drop_column(TEXT_COLUMN));
        assert_eq!(dataset.headers, vec!["text".to_string()]);
        assert_eq!(dataset.records[0].field(USER_COLUMN), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        fs::write(&path, b"text\ncaf\xe9 time\n").unwrap();

        let dataset = DatasetLoader::load(&path).unwrap();
        assert_eq!(dataset.records.len(), 1);
        assert!(dataset.records[0].text.starts_with("caf"));
    }

    #[test]
    fn test_write_appends_derived_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let record = Record {
            text: "Good day!".to_string(),
            sentiment: Some("positive".to_string()),
            fields: vec![("sentiment".to_string(), "positive".to_string())],
        };
        let scored = ScoredRecord {
            record,
            cleaned_text: "good day".to_string(),
            score: SentimentScore::from_hits(2, 1, 0),
            predicted: SentimentLabel::Positive,
        };
        let headers = vec!["text".to_string(), "sentiment".to_string()];

        DatasetWriter::write(&path, &headers, &[scored]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();

        assert_eq!(
            lines[0],
            "text,sentiment,tweet_len,pos_percentage,neg_percentage,predicted_sentiment_score"
        );
        assert_eq!(lines[1], "good day,positive,2,0.5,0.0,positive");
    }
}
