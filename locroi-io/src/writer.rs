//! Result writers.
//!
//! Point tables are tab-separated, hull tables semicolon-separated. Floats
//! are written with their shortest round-trip representation and always
//! carry a decimal point (`100.0`, not `100`).

use crate::{OutputPaths, Result};
use locroi_algorithms::PipelineResult;
use locroi_core::{FrameHeader, Point};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the kept, excluded, area and hull vertex files of one run.
pub struct ResultAssembler<'a> {
    frame: &'a FrameHeader,
    result: &'a PipelineResult,
}

impl<'a> ResultAssembler<'a> {
    /// Creates an assembler over a pipeline result.
    #[must_use]
    pub fn new(frame: &'a FrameHeader, result: &'a PipelineResult) -> Self {
        Self { frame, result }
    }

    /// Writes all four files.
    ///
    /// # Errors
    /// Returns an error if any file cannot be created or written.
    pub fn write_all(&self, paths: &OutputPaths) -> Result<()> {
        self.write_file(&paths.kept, |w| self.write_kept(w))?;
        self.write_file(&paths.excluded, |w| self.write_excluded(w))?;
        self.write_file(&paths.areas, |w| self.write_areas(w))?;
        self.write_file(&paths.vertices, |w| self.write_vertices(w))?;
        Ok(())
    }

    fn write_file<F>(&self, path: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<()>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        write(&mut writer)?;
        writer.flush()?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    /// Writes the kept points: header `frame<TAB>count`, then one row per point.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_kept<W: Write>(&self, writer: &mut W) -> Result<()> {
        let aggregate = &self.result.aggregate;
        write_points(
            writer,
            self.frame,
            aggregate.kept_count(),
            &aggregate.final_kept,
        )
    }

    /// Writes the excluded points sorted by id.
    ///
    /// The header count is `total - kept`, which includes identical rows that
    /// collapsed into a single excluded entry.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_excluded<W: Write>(&self, writer: &mut W) -> Result<()> {
        let aggregate = &self.result.aggregate;
        write_points(
            writer,
            self.frame,
            aggregate.excluded_count(),
            &aggregate.excluded,
        )
    }

    /// Writes one `index;area` row per surviving ROI (1-based) and a total row.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_areas<W: Write>(&self, writer: &mut W) -> Result<()> {
        let hulls = &self.result.hulls;
        writeln!(writer, "object index;area")?;
        for (position, (_, hull)) in hulls.surviving().enumerate() {
            writeln!(writer, "{};{:?}", position + 1, hull.area)?;
        }
        writeln!(writer, "total;{:?}", hulls.total_area())?;
        Ok(())
    }

    /// Writes hull vertices grouped per surviving ROI (0-based positions).
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_vertices<W: Write>(&self, writer: &mut W) -> Result<()> {
        let hulls = &self.result.hulls;
        writeln!(writer, "total roi number;{}", hulls.surviving_count())?;
        for (position, (_, hull)) in hulls.surviving().enumerate() {
            writeln!(writer, "roi number;{position}")?;
            writeln!(writer, "total vertices;{}", hull.vertices.len())?;
            for vertex in &hull.vertices {
                writeln!(writer, "{:?};{:?}", vertex.x, vertex.y)?;
            }
        }
        Ok(())
    }
}

fn write_points<W: Write>(
    writer: &mut W,
    frame: &FrameHeader,
    count: usize,
    points: &[Point],
) -> Result<()> {
    writeln!(writer, "{frame}\t{count}")?;
    for p in points {
        writeln!(
            writer,
            "{:?}\t{:?}\t{:?}\t{}",
            p.x, p.y, p.luminosity, p.id
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use locroi_algorithms::{ExclusionPipeline, FilterConfig};
    use locroi_core::{Roi, Vertex};

    fn run() -> PipelineResult {
        let points = vec![
            Point::new(0.0, 0.0, 100.0, 4),
            Point::new(10.0, 0.0, 100.0, 2),
            Point::new(10.0, 10.0, 100.0, 3),
            Point::new(0.0, 10.0, 100.0, 1),
            Point::new(50.5, 50.0, 12.5, 5),
        ];
        let rois = vec![
            Roi::new(
                1,
                vec![
                    Vertex::new(-1.0, -1.0),
                    Vertex::new(11.0, -1.0),
                    Vertex::new(11.0, 11.0),
                    Vertex::new(-1.0, 11.0),
                ],
            ),
            Roi::new(2, vec![Vertex::new(100.0, 100.0), Vertex::new(101.0, 100.0)]),
        ];
        ExclusionPipeline::new(FilterConfig::default())
            .unwrap()
            .run(&points, &rois)
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_point_tables() {
        let result = run();
        let frame = FrameHeader::new("7");
        let assembler = ResultAssembler::new(&frame, &result);

        let kept = render(|w| assembler.write_kept(w));
        assert_eq!(kept, "7\t1\n50.5\t50.0\t12.5\t5\n");

        let excluded = render(|w| assembler.write_excluded(w));
        let lines: Vec<&str> = excluded.lines().collect();
        assert_eq!(lines[0], "7\t4");
        assert_eq!(lines[1], "0.0\t10.0\t100.0\t1");
        assert_eq!(lines[4], "0.0\t0.0\t100.0\t4");
    }

    #[test]
    fn test_areas_table() {
        let result = run();
        let frame = FrameHeader::new("7");
        let areas = render(|w| ResultAssembler::new(&frame, &result).write_areas(w));
        assert_eq!(areas, "object index;area\n1;100.0\ntotal;100.0\n");
    }

    #[test]
    fn test_vertices_table() {
        let result = run();
        let frame = FrameHeader::new("7");
        let text = render(|w| ResultAssembler::new(&frame, &result).write_vertices(w));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "total roi number;1");
        assert_eq!(lines[1], "roi number;0");
        assert_eq!(lines[2], "total vertices;4");
        assert_eq!(lines.len(), 7);
        assert!(lines[3..].contains(&"10.0;10.0"));
    }

    #[test]
    fn test_write_all_creates_files() {
        let result = run();
        let frame = FrameHeader::new("7");
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::derive_in(dir.path(), Path::new("rois.txt"), 0.0);

        ResultAssembler::new(&frame, &result)
            .write_all(&paths)
            .unwrap();
        for path in paths.all() {
            assert!(path.exists(), "missing {}", path.display());
        }
    }
}
