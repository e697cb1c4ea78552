use crate::prelude::{ToolError, ToolResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Where generated lines go inside the experiment template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceLayout {
    /// Area nodes are inserted this many lines before the end of the template.
    pub anchor_from_end: usize,
    /// Absolute index of the mode marker in the spliced document.
    pub mode_line_index: usize,
}

impl Default for SpliceLayout {
    fn default() -> Self {
        Self {
            anchor_from_end: 71,
            mode_line_index: 42,
        }
    }
}

/// Line-oriented ARGoS experiment template. Lines keep their terminators.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl TemplateDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> ToolResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| ToolError::io(path_ref, err))?;
        Ok(Self::from_text(path_ref, &contents))
    }

    /// Splits `contents` into lines, turning CRLF endings into LF so the
    /// spliced area nodes share the template's line endings.
    pub fn from_text<P: AsRef<Path>>(path: P, contents: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lines: contents
                .replace("\r\n", "\n")
                .split_inclusive('\n')
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Produces a new document with `fragments` at the area anchor, in the
    /// given order, followed by `marker` at the mode line index. The
    /// template itself is left untouched.
    pub fn splice(
        &self,
        fragments: &[String],
        marker: &str,
        layout: &SpliceLayout,
    ) -> ToolResult<Vec<String>> {
        let required = layout.anchor_from_end + 1;
        if self.lines.len() < required {
            return Err(self.too_short(required));
        }
        if layout.mode_line_index > self.lines.len() + fragments.len() {
            return Err(self.too_short(layout.mode_line_index.saturating_sub(fragments.len())));
        }

        let anchor = self.lines.len() - layout.anchor_from_end;
        let mut spliced = Vec::with_capacity(self.lines.len() + fragments.len() + 1);
        spliced.extend_from_slice(&self.lines[..anchor]);
        spliced.extend(fragments.iter().cloned());
        spliced.extend_from_slice(&self.lines[anchor..]);
        spliced.insert(layout.mode_line_index, marker.to_string());
        Ok(spliced)
    }

    fn too_short(&self, required: usize) -> ToolError {
        ToolError::TemplateTooShort {
            path: self.path.clone(),
            lines: self.lines.len(),
            required,
        }
    }
}
