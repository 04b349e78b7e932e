//! Point clouds as CSV (`x`, `y` columns) via polars.

use anyhow::{bail, Context, Result};
use planar::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read the `x` and `y` columns of a CSV file with a header row.
///
/// Other columns are ignored; integer columns are widened to f64. Missing
/// or null coordinates are an error.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("{}: null coordinate in row {row}", path.display()),
        }
    }
    tracing::debug!(rows = out.len(), path = %path.display(), "read_points_csv");
    Ok(out)
}

/// Write points as a two-column CSV with header `x,y`.
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Points as `[x, y]` pairs for JSON output.
pub fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.5, -2.25),
            Point::new(1e-3, 12345.678),
        ];
        write_points_csv(&path, &pts).unwrap();
        let back = read_points_csv(&path).unwrap();
        assert_eq!(back.len(), pts.len());
        for (a, b) in pts.iter().zip(&back) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn integer_columns_and_extra_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        std::fs::write(&path, "id,x,y\na,0,0\nb,4,0\nc,4,5\n").unwrap();
        let pts = read_points_csv(&path).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 5.0)]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "x,z\n1,2\n").unwrap();
        assert!(read_points_csv(&path).is_err());
    }
}
