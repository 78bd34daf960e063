pub mod demo;
pub mod init;
pub mod mark;
pub mod validate;

use comfy_table::{Cell, Table};
use traintrack_core::statistics::TraineeSummary;
use traintrack_core::Trainee;

/// Print a trainee's assessments and per-kind averages.
pub fn print_trainee(trainee: &Trainee) {
    println!(
        "Trainee: {} <{}> (age {})",
        trainee.name,
        trainee.email,
        trainee.age()
    );

    let mut table = Table::new();
    table.set_header(vec!["Assessment", "Type", "Score", "Weighted"]);
    for a in trainee.assessments() {
        table.add_row(vec![
            Cell::new(a.name()),
            Cell::new(a.kind()),
            Cell::new(format!("{:.1}", a.score())),
            Cell::new(format!("{:.1}", a.calculate_score())),
        ]);
    }
    println!("{table}");

    let summary = TraineeSummary::compute(trainee);
    let mut table = Table::new();
    table.set_header(vec!["Type", "Count", "Mean score", "Mean weighted"]);
    for k in &summary.per_kind {
        table.add_row(vec![
            Cell::new(k.kind),
            Cell::new(k.count),
            Cell::new(fmt_mean(k.mean_score)),
            Cell::new(fmt_mean(k.mean_weighted_score)),
        ]);
    }
    println!("{table}");
    println!(
        "Overall mean weighted score: {}",
        fmt_mean(summary.mean_weighted_score)
    );
}

fn fmt_mean(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}
