use lumbung::{
    storage::table::Table,
    types::{ROWS_PER_PAGE, TABLE_MAX_PAGES, TABLE_MAX_ROWS, error::DatabaseError},
    utils::mock::{fill_table, filled_table, sample_row},
};

#[test]
fn test_new_table_is_empty() {
    let table = Table::new();

    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.allocated_pages(), 0);
    assert!(!table.is_full());
}

#[test]
fn test_append_then_read_back() {
    let mut table = Table::new();
    let row = sample_row(1);

    table.append(&row).expect("append below capacity");

    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.row(0).expect("row 0 is committed"), row);
}

#[test]
fn test_rows_come_back_in_insertion_order() {
    let mut table = Table::new();
    fill_table(&mut table, 100);

    for i in 0..100 {
        assert_eq!(table.row(i).expect("committed row"), sample_row(i as u32));
    }
}

#[test]
fn test_slot_location_mapping() {
    assert_eq!(Table::slot_location(0), (0, 0));
    assert_eq!(
        Table::slot_location(ROWS_PER_PAGE - 1),
        (0, ROWS_PER_PAGE - 1)
    );
    assert_eq!(Table::slot_location(ROWS_PER_PAGE), (1, 0));
    assert_eq!(Table::slot_location(ROWS_PER_PAGE * 3 + 2), (3, 2));
    assert_eq!(
        Table::slot_location(TABLE_MAX_ROWS - 1),
        (TABLE_MAX_PAGES - 1, ROWS_PER_PAGE - 1)
    );
}

#[test]
fn test_pages_allocate_lazily() {
    let mut table = Table::new();

    fill_table(&mut table, ROWS_PER_PAGE);
    assert_eq!(table.allocated_pages(), 1);

    // The first row past the boundary materializes the second page.
    table.append(&sample_row(99)).expect("append below capacity");
    assert_eq!(table.allocated_pages(), 2);
}

#[test]
fn test_read_past_num_rows_is_rejected() {
    let mut table = Table::new();
    fill_table(&mut table, 3);

    match table.row(3) {
        Err(DatabaseError::RowIndexOutOfBounds { index, num_rows }) => {
            assert_eq!(index, 3);
            assert_eq!(num_rows, 3);
        }
        _ => panic!("Expected RowIndexOutOfBounds error"),
    }
}

#[test]
fn test_read_from_empty_table_is_rejected() {
    let table = Table::new();

    assert!(matches!(
        table.row(0),
        Err(DatabaseError::RowIndexOutOfBounds { .. })
    ));
}

#[test]
fn test_append_to_full_table_fails_and_preserves_count() {
    let mut table = filled_table(TABLE_MAX_ROWS);
    assert!(table.is_full());

    match table.append(&sample_row(0)) {
        Err(DatabaseError::TableFull { capacity }) => assert_eq!(capacity, TABLE_MAX_ROWS),
        _ => panic!("Expected TableFull error"),
    }

    assert_eq!(table.num_rows(), TABLE_MAX_ROWS);
    assert_eq!(table.allocated_pages(), TABLE_MAX_PAGES);
}

#[test]
fn test_full_table_still_reads_every_row() {
    let table = filled_table(TABLE_MAX_ROWS);

    assert_eq!(
        table.row(TABLE_MAX_ROWS - 1).expect("last committed row"),
        sample_row((TABLE_MAX_ROWS - 1) as u32)
    );
}
