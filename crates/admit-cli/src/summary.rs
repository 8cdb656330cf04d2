use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use admit_model::ReferenceCatalog;

use crate::types::{ParseOutcome, ParsedLine};

pub fn print_parse_table(outcome: &ParseOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Level"),
        header_cell("Program"),
        header_cell("Matched"),
        header_cell("Tier"),
        header_cell("Residual"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for line in &outcome.lines {
        table.add_row(parse_row(line));
    }
    println!("{table}");
    println!(
        "{} lines, {} matched, {} need review",
        outcome.lines.len(),
        outcome.matched(),
        outcome.unmatched
    );
}

fn parse_row(line: &ParsedLine) -> Vec<Cell> {
    let parsed = &line.parsed;
    let program = match &parsed.program {
        Some(program) => Cell::new(program)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => Cell::new("?").fg(Color::Yellow),
    };
    vec![
        Cell::new(line.line),
        optional_cell(parsed.level.map(|level| level.as_str())),
        program,
        optional_cell(parsed.raw_program.as_deref()),
        optional_cell(parsed.tier.map(|tier| tier.as_str())),
        Cell::new(&parsed.residual),
    ]
}

/// Entry counts shown by `admit catalog`, in display order.
pub fn catalog_counts(catalog: &ReferenceCatalog) -> Vec<(&'static str, usize)> {
    vec![
        ("Degree levels", catalog.levels().len()),
        ("Programs", catalog.programs().len()),
        ("Masters-only", catalog.masters().len()),
        ("Majors", catalog.majors().len()),
        ("Typed keys", catalog.type_count()),
    ]
}

/// Typed keys per program type, sorted by type.
pub fn type_counts(catalog: &ReferenceCatalog) -> Vec<(String, usize)> {
    catalog
        .type_histogram()
        .into_iter()
        .map(|(program_type, count)| (String::from(program_type), count))
        .collect()
}

pub fn print_catalog_summary(catalog: &ReferenceCatalog) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Entries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let counts = catalog_counts(catalog);
    let last = counts.len().saturating_sub(1);
    for (index, (label, count)) in counts.into_iter().enumerate() {
        if index == last {
            table.add_row(vec![
                Cell::new(label).add_attribute(Attribute::Bold),
                Cell::new(count).add_attribute(Attribute::Bold),
            ]);
        } else {
            table.add_row(vec![Cell::new(label), Cell::new(count)]);
        }
    }
    println!("{table}");

    let mut types = Table::new();
    types.set_header(vec![header_cell("Type"), header_cell("Keys")]);
    apply_table_style(&mut types);
    align_column(&mut types, 1, CellAlignment::Right);
    for (program_type, count) in type_counts(catalog) {
        types.add_row(vec![Cell::new(program_type), Cell::new(count)]);
    }
    println!("{types}");
}

pub fn apply_table_style(table: &mut Table) {
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new("-").add_attribute(Attribute::Dim),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
