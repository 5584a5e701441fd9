//! Flat-file record storage.
//!
//! One comma-delimited file per entity type, one record per line, no header
//! row. Every operation opens the file, does its work and closes it; nothing
//! is cached between calls. Deletes and edits rewrite the whole file, so
//! file order is insertion order.

use std::fs::OpenOptions;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use tracing::debug;

use crate::error::{EventryError, EventryResult};

/// The highest id currently on file: the first field of the last record.
///
/// Returns 0 when the file is missing or empty — that is not an error, it
/// signals "no records yet". Callers add 1 to obtain the next id.
pub fn next_id(path: &Path) -> EventryResult<u64> {
    let records = match read_all(path) {
        Ok(records) => records,
        Err(EventryError::StoreMissing(_)) => return Ok(0),
        Err(err) => return Err(err),
    };

    let last = match records.last() {
        Some(last) => last,
        None => return Ok(0),
    };

    let field = last.get(0).unwrap_or("");
    field.parse::<u64>().map_err(|_| {
        EventryError::MalformedRecord(format!(
            "non-numeric id '{}' in {}",
            field,
            path.display()
        ))
    })
}

/// All records in file order.
///
/// Fails with [`EventryError::StoreMissing`] when the file does not exist;
/// callers treat that as an empty collection.
pub fn read_all(path: &Path) -> EventryResult<Vec<StringRecord>> {
    if !path.exists() {
        return Err(EventryError::StoreMissing(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result?);
    }
    Ok(records)
}

/// Append one record, creating the file (and its parent directory) if needed.
pub fn append(path: &Path, fields: &[String]) -> EventryResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(fields)?;
    writer.flush()?;

    debug!(file = %path.display(), "record appended");
    Ok(())
}

/// Truncate and replace the file's contents with `records`, in order.
pub fn rewrite_all(path: &Path, records: &[StringRecord]) -> EventryResult<()> {
    let mut writer = Writer::from_path(path)?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;

    debug!(file = %path.display(), count = records.len(), "store rewritten");
    Ok(())
}

/// First record satisfying `pred`, with its index in the file.
pub fn find<P>(path: &Path, pred: P) -> EventryResult<Option<(usize, StringRecord)>>
where
    P: Fn(&StringRecord) -> bool,
{
    let records = read_all(path)?;
    Ok(records.into_iter().enumerate().find(|(_, record)| pred(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn record_file(tmp: &TempDir) -> PathBuf {
        tmp.path().join("records.csv")
    }

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn next_id_is_zero_for_missing_file() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(next_id(&record_file(&tmp)).unwrap(), 0);
    }

    #[test]
    fn next_id_is_zero_for_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = record_file(&tmp);
        std::fs::write(&path, "").unwrap();
        assert_eq!(next_id(&path).unwrap(), 0);
    }

    #[test]
    fn next_id_reads_last_record() {
        let tmp = TempDir::new().unwrap();
        let path = record_file(&tmp);
        append(&path, &fields(&["1", "a"])).unwrap();
        append(&path, &fields(&["2", "b"])).unwrap();
        append(&path, &fields(&["7", "c"])).unwrap();
        assert_eq!(next_id(&path).unwrap(), 7);
    }

    #[test]
    fn next_id_fails_on_non_numeric_id() {
        let tmp = TempDir::new().unwrap();
        let path = record_file(&tmp);
        append(&path, &fields(&["one", "a"])).unwrap();
        assert!(matches!(
            next_id(&path),
            Err(EventryError::MalformedRecord(_))
        ));
    }

    #[test]
    fn read_all_missing_file_signals_store_missing() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            read_all(&record_file(&tmp)),
            Err(EventryError::StoreMissing(_))
        ));
    }

    #[test]
    fn append_then_read_preserves_order() {
        let tmp = TempDir::new().unwrap();
        let path = record_file(&tmp);
        append(&path, &fields(&["1", "first"])).unwrap();
        append(&path, &fields(&["2", "second"])).unwrap();

        let records = read_all(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][1], "first");
        assert_eq!(&records[1][1], "second");
    }

    #[test]
    fn append_creates_parent_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("records.csv");
        append(&path, &fields(&["1", "a"])).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rewrite_of_read_is_identical() {
        let tmp = TempDir::new().unwrap();
        let path = record_file(&tmp);
        append(&path, &fields(&["1", "first", "x"])).unwrap();
        append(&path, &fields(&["2", "second", "y"])).unwrap();

        let before = std::fs::read_to_string(&path).unwrap();
        let records = read_all(&path).unwrap();
        rewrite_all(&path, &records).unwrap();
        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn fields_with_commas_survive_a_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = record_file(&tmp);
        append(&path, &fields(&["1", "Acme, Inc."])).unwrap();

        let records = read_all(&path).unwrap();
        assert_eq!(&records[0][1], "Acme, Inc.");
    }

    #[test]
    fn find_returns_first_match_with_index() {
        let tmp = TempDir::new().unwrap();
        let path = record_file(&tmp);
        append(&path, &fields(&["1", "a"])).unwrap();
        append(&path, &fields(&["2", "b"])).unwrap();
        append(&path, &fields(&["3", "b"])).unwrap();

        let found = find(&path, |r| r.get(1) == Some("b")).unwrap();
        let (index, record) = found.unwrap();
        assert_eq!(index, 1);
        assert_eq!(&record[0], "2");

        assert!(find(&path, |r| r.get(1) == Some("z")).unwrap().is_none());
    }
}
