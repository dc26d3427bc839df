//! Layout report writers
//!
//! Two CSV artifacts plus a JSON export:
//!
//! - `layout.csv`: a `Grid Layout (RxC)` header row followed by one row per
//!   grid row of component labels (`-` for empty cells).
//! - `summary.csv`: a `Component,Count` table in catalogue declaration
//!   order, a blank separator row, then the `Total Operations`,
//!   `Budget Used` and `Budget Limit` aggregate rows in that order.
//! - `solution.json`: the solve status and full layout, pretty-printed.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use vpl_algo::layout::Layout;
use vpl_core::{Cell, ComponentType};

/// JSON report wrapper: the status string alongside the layout itself.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status: &'a str,
    layout: &'a Layout,
}

/// Render one grid row as report labels.
fn grid_row(layout: &Layout, row: usize) -> Vec<String> {
    (0..layout.cols())
        .map(|col| {
            layout
                .component_at(Cell::new(row, col))
                .map(|ty| ty.label().to_string())
                .unwrap_or_else(|| "-".to_string())
        })
        .collect()
}

/// Write the grid-shaped layout table.
pub fn write_grid_csv(layout: &Layout, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating grid CSV at {}", path.display()))?;

    writer
        .write_record([format!("Grid Layout ({}x{})", layout.rows(), layout.cols())])
        .context("writing grid CSV header")?;
    for row in 0..layout.rows() {
        writer
            .write_record(grid_row(layout, row))
            .context("writing grid CSV row")?;
    }

    writer.flush().context("flushing grid CSV")?;
    Ok(())
}

/// Write the summary table: per-component counts, then the aggregates.
pub fn write_summary_csv(layout: &Layout, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating summary CSV at {}", path.display()))?;

    writer
        .write_record(["Component", "Count"])
        .context("writing summary CSV header")?;
    for ty in ComponentType::ALL {
        writer
            .write_record([ty.label().to_string(), layout.count(ty).to_string()])
            .context("writing component count row")?;
    }
    writer.write_record([""]).context("writing separator row")?;
    writer
        .write_record(["Total Operations".to_string(), layout.throughput().to_string()])
        .context("writing operations row")?;
    writer
        .write_record(["Budget Used".to_string(), layout.budget_used().to_string()])
        .context("writing budget used row")?;
    writer
        .write_record(["Budget Limit".to_string(), layout.budget_limit().to_string()])
        .context("writing budget limit row")?;

    writer.flush().context("flushing summary CSV")?;
    Ok(())
}

/// Write the full solution as pretty-printed JSON.
pub fn write_json(layout: &Layout, status: &str, path: &Path) -> Result<()> {
    let report = JsonReport { status, layout };
    let json = serde_json::to_string_pretty(&report).context("serializing layout to JSON")?;
    std::fs::write(path, json).with_context(|| format!("writing JSON to {}", path.display()))?;
    Ok(())
}

/// Paths of the report files produced by [`write_reports`].
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub grid: PathBuf,
    pub summary: PathBuf,
    pub json: PathBuf,
}

/// Write all three report artifacts into a directory.
pub fn write_reports(layout: &Layout, status: &str, dir: &Path) -> Result<ReportPaths> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating report directory {}", dir.display()))?;
    let paths = ReportPaths {
        grid: dir.join("layout.csv"),
        summary: dir.join("summary.csv"),
        json: dir.join("solution.json"),
    };
    write_grid_csv(layout, &paths.grid)?;
    write_summary_csv(layout, &paths.summary)?;
    write_json(layout, status, &paths.json)?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vpl_algo::layout::{solve_layout, LayoutProblemBuilder, LayoutSolverConfig};

    fn solved_layout() -> Layout {
        let problem = LayoutProblemBuilder::new(2, 3)
            .budget(300_000.0)
            .build()
            .unwrap();
        solve_layout(&problem, &LayoutSolverConfig::default())
            .unwrap()
            .into_layout()
            .unwrap()
    }

    #[test]
    fn test_grid_csv_shape() {
        let layout = solved_layout();
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.csv");
        write_grid_csv(&layout, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1 + layout.rows());
        assert!(lines[0].contains("Grid Layout (2x3)"));
        // Each grid row carries one label per column.
        assert_eq!(lines[1].split(',').count(), layout.cols());
    }

    #[test]
    fn test_summary_csv_row_order() {
        let layout = solved_layout();
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary_csv(&layout, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].starts_with("Component"));
        assert!(lines[1].starts_with("Pad"));
        assert!(lines[2].starts_with("Stand"));
        assert!(lines[3].starts_with("Taxiway"));
        assert!(lines[4].starts_with("Terminal"));
        // The separator renders as a blank line (possibly a quoted empty
        // field depending on the writer's disambiguation rules).
        assert!(lines[5].is_empty() || lines[5] == "\"\"");
        assert!(lines[6].starts_with("Total Operations"));
        assert!(lines[7].starts_with("Budget Used"));
        assert!(lines[8].starts_with("Budget Limit"));
    }

    #[test]
    fn test_json_report() {
        let layout = solved_layout();
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.json");
        write_json(&layout, "optimal", &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["status"], "optimal");
        assert!(parsed["layout"].get("cells").is_some());
    }

    #[test]
    fn test_write_reports_creates_all_files() {
        let layout = solved_layout();
        let dir = tempdir().unwrap();
        let paths = write_reports(&layout, "optimal", dir.path()).unwrap();
        assert!(paths.grid.exists());
        assert!(paths.summary.exists());
        assert!(paths.json.exists());
    }
}
