use crate::prelude::{ToolError, ToolResult};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of columns the dhtf loop function writes per completed task.
pub const RECORD_FIELDS: usize = 6;

/// One completed task as logged by the dhtf loop function.
///
/// Values are kept verbatim; the inspection output never reinterprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub time: String,
    pub id: String,
    pub creation: String,
    pub conclusion: String,
    pub client_color: String,
    pub server_color: String,
}

impl TaskRecord {
    /// Decodes the first six fields of a data row.
    ///
    /// `row` is the 1-based data-row index inside `path`, header excluded.
    /// Extra trailing fields are ignored.
    pub fn decode(record: &StringRecord, path: &Path, row: usize) -> ToolResult<Self> {
        if record.len() < RECORD_FIELDS {
            return Err(ToolError::MalformedRecord {
                path: path.to_path_buf(),
                row,
                fields: record.len(),
            });
        }
        let field = |index: usize| record.get(index).unwrap_or_default().to_string();
        Ok(Self {
            time: field(0),
            id: field(1),
            creation: field(2),
            conclusion: field(3),
            client_color: field(4),
            server_color: field(5),
        })
    }

    pub fn fields(&self) -> [&str; RECORD_FIELDS] {
        [
            &self.time,
            &self.id,
            &self.creation,
            &self.conclusion,
            &self.client_color,
            &self.server_color,
        ]
    }

    /// Tab-prefixed, tab-separated listing used by the sweep printer.
    pub fn display_line(&self) -> String {
        self.fields()
            .iter()
            .map(|value| format!("\t{value}"))
            .collect()
    }
}
