//! Localization table reader.
#![allow(clippy::cast_possible_truncation)]

use crate::numeric::parse_scientific;
use crate::{Error, Result};
use locroi_core::{FrameHeader, Point};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const FIELD_SEPARATOR: char = '\t';

/// Parsed contents of a localization file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocalizationFile {
    /// Frame identifier from the first line.
    pub frame: FrameHeader,
    /// Points in file order.
    pub points: Vec<Point>,
}

impl LocalizationFile {
    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the file holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Reader for tab-separated `x, y, luminosity, id` tables.
///
/// The first line carries the frame identifier before its first tab; every
/// other non-blank line is one point. Fields after the fourth are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalizationParser;

impl LocalizationParser {
    /// Opens and parses a localization file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is malformed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LocalizationFile> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parses a localization table from a buffered reader.
    ///
    /// # Errors
    /// Returns [`Error::Format`] for a missing header, a line with fewer than
    /// four fields or an unparseable number, and [`Error::Io`] on read failure.
    pub fn parse<R: BufRead>(reader: R) -> Result<LocalizationFile> {
        let mut lines = reader.lines();
        let header = lines
            .next()
            .transpose()?
            .ok_or_else(|| Error::format(1, "missing frame header line"))?;
        let token = header.split(FIELD_SEPARATOR).next().unwrap_or_default();
        let frame = FrameHeader::new(token.trim());

        let mut points = Vec::new();
        for (offset, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            points.push(parse_point(&line, offset + 2)?);
        }

        Ok(LocalizationFile { frame, points })
    }
}

fn parse_point(line: &str, line_number: usize) -> Result<Point> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 4 {
        return Err(Error::format(
            line_number,
            format!("expected 4 tab-separated fields, found {}", fields.len()),
        ));
    }

    let number = |index: usize, name: &str| {
        parse_scientific(fields[index]).map_err(|err| {
            Error::format(
                line_number,
                format!("invalid {name} value {:?}: {err}", fields[index]),
            )
        })
    };
    let x = number(0, "x")?;
    let y = number(1, "y")?;
    let luminosity = number(2, "luminosity")?;
    let id = number(3, "id")?;
    if !id.is_finite() {
        return Err(Error::format(
            line_number,
            format!("id must be finite, got {id}"),
        ));
    }

    Ok(Point::new(x, y, luminosity, id.trunc() as i64))
}
