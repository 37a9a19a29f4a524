use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use fits_cli::input::{load_demo, read_csv_columns, register_columns};
use fits_table::{FitsTableWriter, TableLayout, WriterOptions};

use crate::cli::{ConvertArgs, DemoArgs, WriteArgs};

/// Outcome of one written file.
pub struct WriteResult {
    pub output: PathBuf,
    pub layout: TableLayout,
    pub bytes: u64,
    pub columns: Vec<(String, String)>,
}

pub fn run_demo(args: &DemoArgs) -> Result<WriteResult> {
    let span = info_span!("demo", output = %args.output.display());
    let _guard = span.enter();

    let mut writer = FitsTableWriter::with_options(writer_options(&args.write));
    load_demo(&mut writer)?;
    write_table(&writer, args.output.clone())
}

pub fn run_convert(args: &ConvertArgs) -> Result<WriteResult> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();

    let force_float: BTreeSet<String> = args.float_columns.iter().cloned().collect();
    let columns = read_csv_columns(&args.input, &force_float)?;
    info!(columns = columns.len(), "read input columns");

    let mut writer = FitsTableWriter::with_options(writer_options(&args.write));
    for comment in &args.comments {
        writer.add_comment(comment.clone());
    }
    register_columns(&mut writer, &columns)?;
    write_table(&writer, args.output.clone())
}

fn writer_options(args: &WriteArgs) -> WriterOptions {
    let mut options = WriterOptions::new();
    if let Some(timestamp) = args.timestamp {
        options = options.with_timestamp(timestamp);
    }
    if let Some(size) = args.buffer_size {
        options = options.with_buffer_capacity(size);
    }
    options
}

fn write_table(writer: &FitsTableWriter, output: PathBuf) -> Result<WriteResult> {
    let bytes = writer
        .write(&output)
        .with_context(|| format!("write {}", output.display()))?;
    let columns = writer
        .columns()
        .map(|column| (column.name.clone(), column.data_type.tform_code().to_string()))
        .collect();
    Ok(WriteResult {
        output,
        layout: writer.layout(),
        bytes,
        columns,
    })
}
