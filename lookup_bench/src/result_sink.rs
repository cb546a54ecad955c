use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BenchError, Result};

/// Timings for one benchmarked size, in whole milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub n: u64,
    #[serde(rename = "PerfectHashingInsertTime")]
    pub perfect_insert_ms: u64,
    #[serde(rename = "PerfectHashingQueryTime")]
    pub perfect_query_ms: u64,
    #[serde(rename = "HashingWithChainingInsertTime")]
    pub chain_insert_ms: u64,
    #[serde(rename = "HashingWithChainingQueryTime")]
    pub chain_query_ms: u64,
    #[serde(rename = "RedBlackTreeInsertTime")]
    pub tree_insert_ms: u64,
    #[serde(rename = "RedBlackTreeQueryTime")]
    pub tree_query_ms: u64,
}

impl ResultRow {
    pub const HEADER: [&'static str; 7] = [
        "n",
        "PerfectHashingInsertTime",
        "PerfectHashingQueryTime",
        "HashingWithChainingInsertTime",
        "HashingWithChainingQueryTime",
        "RedBlackTreeInsertTime",
        "RedBlackTreeQueryTime",
    ];

    pub fn fields(&self) -> [u64; 7] {
        [
            self.n,
            self.perfect_insert_ms,
            self.perfect_query_ms,
            self.chain_insert_ms,
            self.chain_query_ms,
            self.tree_insert_ms,
            self.tree_query_ms,
        ]
    }
}

/// Append-only destination for benchmark rows.
pub trait ResultSink {
    fn write_row(&mut self, row: &ResultRow) -> Result<()>;

    /// Flushes and releases the sink.
    fn finish(self) -> Result<()>;
}

/// Writes rows as CSV to a file, header first.
///
/// The file is flushed by [`finish`](ResultSink::finish); a sink dropped without
/// finishing (for example on an error path) makes a best-effort flush on drop.
pub struct CsvResultSink {
    path: PathBuf,
    writer: Option<csv::Writer<BufWriter<File>>>,
}

impl CsvResultSink {
    /// Creates or truncates `path` and writes the header row.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| BenchError::OutputUnavailable {
            path: path.clone(),
            source,
        })?;

        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(BufWriter::new(file));
        writer.write_record(ResultRow::HEADER)?;
        debug!("Opened result file {path:?}");

        Ok(Self {
            path,
            writer: Some(writer),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn close(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            let mut inner = writer.into_inner().map_err(|e| BenchError::Io(e.into_error()))?;
            inner.flush()?;
        }
        Ok(())
    }
}

impl ResultSink for CsvResultSink {
    fn write_row(&mut self, row: &ResultRow) -> Result<()> {
        match self.writer.as_mut() {
            Some(writer) => Ok(writer.serialize(row)?),
            None => Err(BenchError::Io(std::io::Error::other("result sink already closed"))),
        }
    }

    fn finish(mut self) -> Result<()> {
        self.close()
    }
}

impl Drop for CsvResultSink {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Error flushing result file {:?}: {e}", self.path);
        }
    }
}

/// Keeps rows in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryResultSink {
    pub rows: Vec<ResultRow>,
}

impl ResultSink for MemoryResultSink {
    fn write_row(&mut self, row: &ResultRow) -> Result<()> {
        self.rows.push(*row);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    const EXPECTED_HEADER: &str = "n,PerfectHashingInsertTime,PerfectHashingQueryTime,HashingWithChainingInsertTime,HashingWithChainingQueryTime,RedBlackTreeInsertTime,RedBlackTreeQueryTime";

    fn row(n: u64) -> ResultRow {
        ResultRow {
            n,
            perfect_insert_ms: 1,
            perfect_query_ms: 0,
            chain_insert_ms: 2,
            chain_query_ms: 3,
            tree_insert_ms: 4,
            tree_query_ms: 5,
        }
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        CsvResultSink::create(&path).unwrap().finish().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{EXPECTED_HEADER}\n"));
    }

    #[test]
    fn test_rows_written_once_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut sink = CsvResultSink::create(&path).unwrap();
        sink.write_row(&row(25)).unwrap();
        sink.write_row(&row(50)).unwrap();
        sink.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{EXPECTED_HEADER}\n25,1,0,2,3,4,5\n50,1,0,2,3,4,5\n"));
    }

    #[test]
    fn test_drop_flushes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        {
            let mut sink = CsvResultSink::create(&path).unwrap();
            sink.write_row(&row(25)).unwrap();
        }
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("25,1,0,2,3,4,5\n"));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.csv");
        let err = CsvResultSink::create(&path).err().unwrap();
        assert!(matches!(err, BenchError::OutputUnavailable { .. }));
    }

    #[test]
    fn test_header_matches_serde_names() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(row(1)).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().next().unwrap(), ResultRow::HEADER.join(","));
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemoryResultSink::default();
        sink.write_row(&row(25)).unwrap();
        assert_eq!(sink.rows, vec![row(25)]);
        sink.finish().unwrap();
    }
}
