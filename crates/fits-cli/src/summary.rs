use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::commands::WriteResult;

pub fn print_summary(result: &WriteResult) {
    println!("Output: {}", result.output.display());

    let mut fields = Table::new();
    fields.set_header(vec![
        header_cell("#"),
        header_cell("TTYPE"),
        header_cell("TFORM"),
    ]);
    apply_table_style(&mut fields);
    for (idx, (name, tform)) in result.columns.iter().enumerate() {
        fields.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(name),
            Cell::new(tform).set_alignment(CellAlignment::Center),
        ]);
    }
    println!("{fields}");

    let layout = &result.layout;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Section"), header_cell("Bytes")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Header cards"), Cell::new(layout.header_cards)]);
    table.add_row(vec![Cell::new("Header blocks"), Cell::new(layout.header_bytes)]);
    table.add_row(vec![
        Cell::new(format!(
            "Data ({} rows x {} bytes)",
            layout.row_count, layout.row_bytes
        )),
        Cell::new(layout.data_bytes),
    ]);
    table.add_row(vec![
        Cell::new("Data blocks"),
        Cell::new(layout.data_padded_bytes),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(result.bytes).add_attribute(Attribute::Bold),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
