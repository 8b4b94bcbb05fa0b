use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use enc_cli::format::{
    format_count, format_daily_average, format_loaded_rows, format_monthly_average,
    format_percent,
};
use enc_metrics::{DashboardReport, FilterOptions, Granularity};
use enc_model::{CareClass, PayerClass};
use enc_transform::DATE_FORMAT;

pub fn print_report(report: &DashboardReport) {
    let range = report.filter.date_range;
    println!(
        "Period: {} - {}",
        range.start.format(DATE_FORMAT),
        range.end.format(DATE_FORMAT)
    );
    println!("{}", kpi_table(report));

    println!();
    println!("Top {} specialties:", report.top_specialties.len());
    println!("{}", specialty_table(report));

    println!();
    println!("By care class:");
    let mut table = count_table("Care class");
    for (class, count) in &report.by_classification {
        table.add_row(vec![Cell::new(class.label()), Cell::new(format_count(*count))]);
    }
    println!("{table}");

    println!();
    println!("By payer:");
    let mut table = count_table("Payer");
    for class in PayerClass::ALL {
        table.add_row(vec![
            Cell::new(class.label()),
            Cell::new(format_count(report.by_payer.get(class))),
        ]);
    }
    println!("{table}");

    println!();
    let title = match report.time_series.granularity {
        Granularity::Monthly => "Encounters per month:",
        Granularity::Daily => "Encounters per day:",
    };
    println!("{title}");
    let mut table = count_table("Period");
    for point in &report.time_series.points {
        table.add_row(vec![Cell::new(&point.label), Cell::new(format_count(point.count))]);
    }
    println!("{table}");

    print_loaded_rows(report.valid_rows, report.loaded_rows);
}

pub fn print_options(options: &FilterOptions) {
    match options.date_bounds {
        Some(bounds) => println!(
            "Dates: {} - {}",
            bounds.start.format(DATE_FORMAT),
            bounds.end.format(DATE_FORMAT)
        ),
        None => println!("Dates: no valid encounter dates"),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Filter"), header_cell("Values")]);
    apply_table_style(&mut table);
    let payers: Vec<&str> = options.payer_classes.iter().map(PayerClass::as_str).collect();
    let care: Vec<String> = options.care_classes.iter().map(care_option).collect();
    table.add_row(vec![Cell::new("--payer"), list_cell(&payers)]);
    table.add_row(vec![Cell::new("--care"), list_cell(&care)]);
    table.add_row(vec![Cell::new("--specialty"), list_cell(&options.specialties)]);
    table.add_row(vec![Cell::new("--type"), list_cell(&options.types)]);
    println!("{table}");
}

pub fn print_no_data(raw_rows: usize) {
    println!("No encounters with a valid date; nothing to report.");
    print_loaded_rows(0, raw_rows);
}

fn print_loaded_rows(valid_rows: usize, raw_rows: usize) {
    println!();
    println!("{}", format_loaded_rows(valid_rows, raw_rows));
}

fn kpi_table(report: &DashboardReport) -> Table {
    let kpis = &report.kpis;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total encounters"),
        header_cell("Daily average"),
        header_cell("Monthly average"),
        header_cell(PayerClass::Sus.label()),
        header_cell(PayerClass::NaoSus.label()),
        header_cell("% Urgency"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(format_count(kpis.total_encounters)).add_attribute(Attribute::Bold),
        Cell::new(format_daily_average(kpis.daily_average)),
        Cell::new(format_monthly_average(kpis.monthly_average)),
        Cell::new(format_count(kpis.sus)),
        Cell::new(format_count(kpis.nao_sus)),
        Cell::new(format_percent(kpis.urgency_percentage)),
    ]);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn specialty_table(report: &DashboardReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Specialty"),
        header_cell("Encounters"),
        header_cell("% of total"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &report.top_specialties {
        table.add_row(vec![
            Cell::new(&row.specialty),
            Cell::new(format_count(row.count)),
            Cell::new(format_percent(row.percent_of_total)),
        ]);
    }
    table
}

fn count_table(label: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Encounters")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

fn care_option(class: &CareClass) -> String {
    format!("{} ({})", class.code(), class.label())
}

fn list_cell<S: AsRef<str>>(values: &[S]) -> Cell {
    if values.is_empty() {
        return dim_cell("-");
    }
    let joined: Vec<&str> = values.iter().map(S::as_ref).collect();
    Cell::new(joined.join(", "))
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
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
