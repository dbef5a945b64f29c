//! Output file naming.

use std::path::{Path, PathBuf};

/// Locations of the four result files of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Kept points, `<base>.txt`.
    pub kept: PathBuf,
    /// Excluded points, `<base>_c.txt`.
    pub excluded: PathBuf,
    /// Hull areas, `<base>_Areas.csv`.
    pub areas: PathBuf,
    /// Hull vertices, `<base>_CHVertices.csv`.
    pub vertices: PathBuf,
}

impl OutputPaths {
    /// Builds all paths from a base path without extension.
    #[must_use]
    pub fn from_base(base: &Path) -> Self {
        let with_suffix = |suffix: &str| {
            let mut name = base.as_os_str().to_os_string();
            name.push(suffix);
            PathBuf::from(name)
        };
        Self {
            kept: with_suffix(".txt"),
            excluded: with_suffix("_c.txt"),
            areas: with_suffix("_Areas.csv"),
            vertices: with_suffix("_CHVertices.csv"),
        }
    }

    /// Derives output paths next to the ROI file.
    ///
    /// A `.txt` or `.csv` extension is removed and `_d<threshold>` appended,
    /// so `cell.txt` at threshold 0 yields `cell_d0.0.txt`, `cell_d0.0_c.txt`,
    /// `cell_d0.0_Areas.csv` and `cell_d0.0_CHVertices.csv`.
    #[must_use]
    pub fn derive(roi_path: &Path, threshold_distance: f64) -> Self {
        Self::from_base(&base_path(roi_path, threshold_distance))
    }

    /// Like [`derive`](Self::derive), but places the files in `directory`.
    #[must_use]
    pub fn derive_in(directory: &Path, roi_path: &Path, threshold_distance: f64) -> Self {
        let base = base_path(roi_path, threshold_distance);
        let name = base.file_name().map(PathBuf::from).unwrap_or_default();
        Self::from_base(&directory.join(name))
    }

    /// Returns the four paths in write order.
    #[must_use]
    pub fn all(&self) -> [&Path; 4] {
        [&self.kept, &self.excluded, &self.areas, &self.vertices]
    }
}

fn base_path(roi_path: &Path, threshold_distance: f64) -> PathBuf {
    let stripped = match roi_path.extension().and_then(|ext| ext.to_str()) {
        Some("txt" | "csv") => roi_path.with_extension(""),
        _ => roi_path.to_path_buf(),
    };
    let mut name = stripped.into_os_string();
    name.push("_d");
    name.push(format_threshold(threshold_distance));
    PathBuf::from(name)
}

/// Renders a threshold with at least one decimal digit (`0.0`, `2.5`, `10.0`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_threshold(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
