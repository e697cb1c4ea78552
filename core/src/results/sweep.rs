use crate::prelude::{ToolError, ToolResult};
use crate::results::record::TaskRecord;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_PATH_TEMPLATE: &str =
    "2021-02-10_robots#20_timeout_const#{timeout}_augmmented_knowledge#true/seed#{seed}_results.csv";

const SEPARATOR: &str = "-------------------------------";

/// Sweep over the timeout constants and seeds of one experiment batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub timeout_values: Vec<u32>,
    pub seed_first: u32,
    pub seed_last: u32,
    /// Relative result path with `{timeout}` and `{seed}` placeholders.
    pub path_template: String,
    pub root: PathBuf,
    pub skip_missing: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            timeout_values: vec![5, 10, 15, 20],
            seed_first: 1,
            seed_last: 50,
            path_template: DEFAULT_PATH_TEMPLATE.to_string(),
            root: PathBuf::from("."),
            skip_missing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepParameter {
    pub timeout_index: u32,
    pub seed_index: u32,
}

impl SweepParameter {
    pub fn label(&self) -> String {
        format!("{} seed#{}_results.csv", self.timeout_index, self.seed_index)
    }
}

impl SweepConfig {
    /// Timeout outer, seed inner, in configured order.
    pub fn parameters(&self) -> impl Iterator<Item = SweepParameter> + '_ {
        self.timeout_values.iter().flat_map(move |&timeout_index| {
            (self.seed_first..=self.seed_last).map(move |seed_index| SweepParameter {
                timeout_index,
                seed_index,
            })
        })
    }

    pub fn result_path(&self, parameter: SweepParameter) -> PathBuf {
        let relative = self
            .path_template
            .replace("{timeout}", &parameter.timeout_index.to_string())
            .replace("{seed}", &parameter.seed_index.to_string());
        self.root.join(relative)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub files_read: usize,
    pub files_skipped: usize,
    pub rows: usize,
}

/// Prints every result file of a sweep to `out` for manual inspection.
pub struct SweepPrinter<W: Write> {
    config: SweepConfig,
    fields: ReaderBuilder,
    out: W,
}

impl<W: Write> SweepPrinter<W> {
    pub fn new(config: SweepConfig, out: W) -> Self {
        let mut fields = ReaderBuilder::new();
        fields.delimiter(b';').has_headers(false).flexible(true);
        Self {
            config,
            fields,
            out,
        }
    }

    pub fn run(&mut self) -> ToolResult<SweepSummary> {
        let mut summary = SweepSummary::default();
        let parameters: Vec<SweepParameter> = self.config.parameters().collect();
        info!(
            "sweeping {} result files under {}",
            parameters.len(),
            self.config.root.display()
        );

        for parameter in parameters {
            let path = self.config.result_path(parameter);
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(err) if err.kind() == ErrorKind::NotFound && self.config.skip_missing => {
                    warn!("skipping missing result file {}", path.display());
                    summary.files_skipped += 1;
                    continue;
                }
                Err(err) => return Err(ToolError::io(path, err)),
            };

            writeln!(self.out, "{}", parameter.label())?;
            let rows = self.print_file(file, &path)?;
            writeln!(self.out, "{SEPARATOR}")?;

            debug!("{} -> {} tasks", path.display(), rows);
            summary.files_read += 1;
            summary.rows += rows;
        }

        self.out.flush()?;
        Ok(summary)
    }

    /// Prints header and rows of one file, returning the data-row count.
    ///
    /// Lines are taken one at a time so a blank line counts as an empty
    /// data row instead of being skipped by the csv reader.
    fn print_file(&mut self, file: File, path: &Path) -> ToolResult<usize> {
        let mut rows = 0;
        let mut header_seen = false;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|err| ToolError::io(path, err))?;
            let record = self.split_fields(&line, path)?;
            if !header_seen {
                let names: Vec<&str> = record.iter().collect();
                writeln!(self.out, "Column names are:\n\t{}", names.join(", "))?;
                header_seen = true;
                continue;
            }
            rows += 1;
            let task = TaskRecord::decode(&record, path, rows)?;
            writeln!(self.out, "{}", task.display_line())?;
        }

        writeln!(self.out, "Completed {rows} tasks.")?;
        Ok(rows)
    }

    fn split_fields(&self, line: &str, path: &Path) -> ToolResult<StringRecord> {
        let mut reader = self.fields.from_reader(line.as_bytes());
        match reader.records().next() {
            Some(record) => record.map_err(|source| ToolError::Csv {
                path: path.to_path_buf(),
                source,
            }),
            None => Ok(StringRecord::new()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
