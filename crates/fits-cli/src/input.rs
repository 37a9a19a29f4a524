//! Column sources for the writer: the built-in demo table and CSV files.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use fits_table::{ColumnType, FitsTableWriter};

/// Rows in the demo table.
pub const DEMO_ROWS: usize = 5;

/// Column values parsed from an input file, before registration.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<i32>),
    Float(Vec<f32>),
}

impl ColumnData {
    /// Element type of the column.
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Int(_) => ColumnType::Int32,
            Self::Float(_) => ColumnType::Float32,
        }
    }
}

/// A named input column.
#[derive(Debug, Clone, PartialEq)]
pub struct InputColumn {
    pub name: String,
    pub data: ColumnData,
}

/// Register the demo table: `EVIL` = 666 and `HALF` = 333.0 over five rows.
pub fn load_demo(writer: &mut FitsTableWriter) -> Result<()> {
    writer.add_comment("Hi there");
    writer.add_float_column("HALF", &[333.0; DEMO_ROWS])?;
    writer.add_int_column("EVIL", &[666; DEMO_ROWS])?;
    Ok(())
}

/// Parse a headed CSV file into typed columns.
///
/// A column is integer when every cell parses as `i32` and its name is not
/// in `force_float`; otherwise every cell must parse as `f32`.
pub fn read_csv_columns(
    path: &Path,
    force_float: &BTreeSet<String>,
) -> Result<Vec<InputColumn>> {
    let reader =
        csv::Reader::from_path(path).with_context(|| format!("open CSV {}", path.display()))?;
    parse_csv(reader, force_float).with_context(|| format!("parse CSV {}", path.display()))
}

/// Parse CSV from any reader.
pub fn parse_csv<R: Read>(
    mut reader: csv::Reader<R>,
    force_float: &BTreeSet<String>,
) -> Result<Vec<InputColumn>> {
    let headers: Vec<String> = reader
        .headers()
        .context("read CSV header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read CSV row {}", row + 1))?;
        for (idx, cell) in record.iter().enumerate() {
            if let Some(column) = cells.get_mut(idx) {
                column.push(cell.trim().to_string());
            }
        }
    }

    headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| -> Result<InputColumn> {
            let data = infer_column(&name, &values, force_float.contains(&name))?;
            debug!(
                column = %name,
                kind = %data.column_type(),
                rows = values.len(),
                "parsed column"
            );
            Ok(InputColumn { name, data })
        })
        .collect()
}

fn infer_column(name: &str, values: &[String], force_float: bool) -> Result<ColumnData> {
    if !force_float {
        let ints: std::result::Result<Vec<i32>, _> =
            values.iter().map(|v| v.parse::<i32>()).collect();
        if let Ok(ints) = ints {
            return Ok(ColumnData::Int(ints));
        }
    } else if values.iter().all(|v| v.parse::<i32>().is_ok()) {
        warn!(column = %name, "integer column stored as float");
    }

    values
        .iter()
        .enumerate()
        .map(|(row, v)| {
            v.parse::<f32>()
                .map_err(|_| anyhow!("column {name} row {}: '{v}' is not numeric", row + 1))
        })
        .collect::<Result<Vec<f32>>>()
        .map(ColumnData::Float)
}

/// Register parsed columns with the writer.
pub fn register_columns(writer: &mut FitsTableWriter, columns: &[InputColumn]) -> Result<()> {
    for column in columns {
        let added = match &column.data {
            ColumnData::Int(values) => writer.add_int_column(&column.name, values),
            ColumnData::Float(values) => writer.add_float_column(&column.name, values),
        };
        added.with_context(|| format!("register column {}", column.name))?;
    }
    Ok(())
}
