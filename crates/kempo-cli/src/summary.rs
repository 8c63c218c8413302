use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use kempo_cli::types::{ConvertResult, FileSummary};
use kempo_model::PremiumTable;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input_dir.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Area"),
        header_cell("Effective date"),
        header_cell("Ranks"),
        header_cell("Outputs"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    let mut total_ranks = 0usize;
    let mut total_outputs = 0usize;
    for summary in &result.files {
        total_ranks += summary.ranks;
        total_outputs += summary.outputs.len();
        table.add_row(vec![
            Cell::new(file_name(summary)),
            Cell::new(&summary.area)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            optional_cell(summary.effective_date.as_deref()),
            count_cell(summary.ranks),
            outputs_cell(summary),
            status_cell(summary),
        ]);
    }
    let failed = result.files.iter().filter(|summary| !summary.is_ok()).count();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} tables", result.files.len())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_ranks).add_attribute(Attribute::Bold),
        Cell::new(total_outputs).add_attribute(Attribute::Bold),
        if failed > 0 {
            Cell::new(format!("{failed} failed"))
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        },
    ]);
    println!("{table}");

    let errors: Vec<&FileSummary> = result.files.iter().filter(|s| !s.is_ok()).collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for summary in errors {
            eprintln!("- {}: {}", file_name(summary), summary.error.as_deref().unwrap_or("-"));
        }
    }
}

/// Prints every rank of one parsed table.
pub fn print_ranks(premiums: &PremiumTable) {
    println!("Area: {}", premiums.area);
    println!(
        "Effective date: {}",
        premiums.effective_date.as_deref().unwrap_or("-")
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Pension"),
        header_cell("Label"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Younger total"),
        header_cell("Younger salary"),
        header_cell("Elder total"),
        header_cell("Elder salary"),
        header_cell("Pension total"),
        header_cell("Pension salary"),
    ]);
    apply_table_style(&mut table);
    for index in 0..table.column_count() {
        if index != 2 {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for entry in &premiums.fee {
        table.add_row(vec![
            Cell::new(entry.rank).add_attribute(Attribute::Bold),
            optional_cell(entry.pension_rank.map(|rank| rank.to_string()).as_deref()),
            optional_cell(entry.label.as_deref()),
            bound_cell(entry.rank_min),
            bound_cell(entry.rank_max),
            optional_cell(entry.insurance_younger_total.as_deref()),
            optional_cell(entry.insurance_younger_salary.as_deref()),
            optional_cell(entry.insurance_elder_total.as_deref()),
            optional_cell(entry.insurance_elder_salary.as_deref()),
            optional_cell(entry.pension_total.as_deref()),
            optional_cell(entry.pension_salary.as_deref()),
        ]);
    }
    println!("{table}");
}

fn file_name(summary: &FileSummary) -> String {
    summary
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| summary.source.display().to_string())
}

fn outputs_cell(summary: &FileSummary) -> Cell {
    if summary.outputs.is_empty() {
        return dim_cell("-");
    }
    let names: Vec<String> = summary
        .outputs
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    Cell::new(names.join("\n"))
}

fn status_cell(summary: &FileSummary) -> Cell {
    if summary.is_ok() {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

/// Zero bounds mark the open ends of the first and last brackets.
fn bound_cell(value: i64) -> Cell {
    if value == 0 {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
