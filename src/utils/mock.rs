use crate::{storage::table::Table, types::row::Row};

/// Deterministic row for tests and benchmarks.
pub fn sample_row(id: u32) -> Row {
    Row::new(
        id,
        &format!("user{}", id),
        &format!("person{}@example.com", id),
    )
}

/// Append `rows` sample rows; callers stay below the table capacity.
pub fn fill_table(table: &mut Table, rows: usize) {
    for i in 0..rows {
        table
            .append(&sample_row(i as u32))
            .expect("sample row fits below table capacity");
    }
}

pub fn filled_table(rows: usize) -> Table {
    let mut table = Table::new();
    fill_table(&mut table, rows);
    table
}
