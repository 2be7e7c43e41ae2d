//! Text rendering of records for the console

use crate::record::Record;

/// Names longer than this are cut in the table view
const TABLE_NAME_WIDTH: usize = 8;

/// Table view of the "show all" listing; callers pass records ordered by id.
pub fn render_table(records: &[Record]) -> String {
    let mut out = String::new();
    if records.is_empty() {
        out.push_str("Database is empty.\n");
        return out;
    }

    out.push_str("ALL RECORDS (sorted by ID)\n");
    out.push_str(&format!("Total records: {}\n", records.len()));
    out.push_str("ID\tName\t\tAge\tSalary\n");
    for record in records {
        out.push_str(&format!(
            "{}\t{}\t{}\t{:.2}\n",
            record.id,
            table_name(&record.name),
            record.age,
            record.salary
        ));
    }
    out
}

/// One line per record in the order given.
pub fn render_list(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n", record))
        .collect()
}

fn table_name(name: &str) -> String {
    if name.chars().count() < TABLE_NAME_WIDTH {
        format!("{}\t", name)
    } else {
        let cut: String = name.chars().take(TABLE_NAME_WIDTH).collect();
        format!("{}...", cut)
    }
}
