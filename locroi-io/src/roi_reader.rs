//! ROI polygon file reader.
//!
//! The file is a sequence of blocks. Each block starts with a header line
//! `roi_id<sep>vertex_count` followed by `vertex_count` lines `x<sep>y`.

use crate::{Error, Result};
use locroi_core::{FilterConfig, Roi, Vertex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for ROI polygon files with a configurable field separator.
#[derive(Debug, Clone, Copy)]
pub struct RoiParser {
    separator: char,
}

impl Default for RoiParser {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}

impl RoiParser {
    /// Creates a parser for the given field separator.
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Creates a parser using the separator from a filter configuration.
    #[must_use]
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.roi_separator)
    }

    /// Returns the field separator.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Opens and parses a ROI file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is malformed.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Roi>> {
        let file = File::open(path)?;
        self.parse(BufReader::new(file))
    }

    /// Parses ROI blocks from a buffered reader, in file order.
    ///
    /// Blank lines are skipped. Reaching the end of input between blocks is
    /// the normal termination.
    ///
    /// # Errors
    /// Returns [`Error::Format`] for a header whose fields are not integers,
    /// a vertex line that is not two numbers, or a block cut short by the end
    /// of input; [`Error::Io`] on read failure.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Vec<Roi>> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|text| (index + 1, text)))
            .filter(|line| !matches!(line, Ok((_, text)) if text.trim().is_empty()));

        let mut rois = Vec::new();
        while let Some(header) = lines.next() {
            let (line_number, text) = header?;
            let (label, vertex_count) = self.parse_header(&text, line_number)?;

            let mut vertices = Vec::with_capacity(vertex_count);
            for read in 0..vertex_count {
                let Some(line) = lines.next() else {
                    return Err(Error::format(
                        line_number,
                        format!(
                            "ROI {label} declares {vertex_count} vertices but input ended after {read}"
                        ),
                    ));
                };
                let (vertex_line, text) = line?;
                vertices.push(self.parse_vertex(&text, vertex_line)?);
            }
            log::debug!("read ROI {label} with {vertex_count} vertices");
            rois.push(Roi::new(label, vertices));
        }

        Ok(rois)
    }

    fn fields<'a>(&self, text: &'a str, line: usize, what: &str) -> Result<(&'a str, &'a str)> {
        let mut fields = text.split(self.separator);
        match (fields.next(), fields.next()) {
            (Some(first), Some(second)) => Ok((first.trim(), second.trim())),
            _ => Err(Error::format(
                line,
                format!("expected two {what} fields separated by {:?}", self.separator),
            )),
        }
    }

    fn parse_header(&self, text: &str, line: usize) -> Result<(i64, usize)> {
        let (label, count) = self.fields(text, line, "header")?;
        let label = label
            .parse()
            .map_err(|err| Error::format(line, format!("invalid ROI id {label:?}: {err}")))?;
        let count = count
            .parse()
            .map_err(|err| Error::format(line, format!("invalid vertex count {count:?}: {err}")))?;
        Ok((label, count))
    }

    fn parse_vertex(&self, text: &str, line: usize) -> Result<Vertex> {
        let (x, y) = self.fields(text, line, "coordinate")?;
        let coordinate = |value: &str| -> Result<f64> {
            value
                .parse()
                .map_err(|err| Error::format(line, format!("invalid coordinate {value:?}: {err}")))
        };
        Ok(Vertex::new(coordinate(x)?, coordinate(y)?))
    }
}
