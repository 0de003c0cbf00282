use chrono::NaiveDate;
use expense_tracker::{
    storage::{JsonStorage, StorageBackend},
    Expense, ExpenseError, ExpenseStore, Period, SummaryService,
};
use std::fs;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn load_of_saved_sequence_is_identical() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("expenses.json"));
    let expenses = vec![
        Expense::new(0.1, "Coffee", date(2024, 1, 1)),
        Expense::new(0.2, "coffee", date(2024, 1, 1)),
        Expense::new(1234.56, "Rent", date(2023, 12, 31)),
        Expense::new(0.0, "Freebies", date(2024, 2, 29)),
    ];
    storage.save(&expenses).unwrap();
    assert_eq!(storage.load().unwrap(), expenses);

    storage.save(&[]).unwrap();
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn store_written_by_hand_is_readable() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    fs::write(
        &path,
        r#"[
    {
        "amount": 12.0,
        "category": "Transport",
        "date": "2024-04-02"
    },
    {
        "amount": 8,
        "category": "transport",
        "date": "2024-04-03"
    }
]"#,
    )
    .unwrap();

    let store = ExpenseStore::open(Box::new(JsonStorage::new(&path))).unwrap();
    assert_eq!(
        SummaryService::total_by_category(store.expenses(), "TRANSPORT"),
        20.0
    );
    let daily = SummaryService::group_by_period(store.expenses(), Period::Daily).unwrap();
    assert_eq!(daily.render_lines("$"), ["2024-04-02: $12.00", "2024-04-03: $8.00"]);
}

#[test]
fn bad_date_in_store_fails_aggregation_only() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    fs::write(
        &path,
        r#"[{"amount": 1.0, "category": "Food", "date": "2024-13-40"}]"#,
    )
    .unwrap();

    let store = ExpenseStore::open(Box::new(JsonStorage::new(&path))).unwrap();
    assert_eq!(SummaryService::total_overall(store.expenses()), 1.0);
    for period in Period::ALL {
        assert!(matches!(
            SummaryService::group_by_period(store.expenses(), period),
            Err(ExpenseError::InvalidDateFormat { .. })
        ));
    }
}

#[test]
fn unwritable_location_reports_write_error() {
    let temp = tempdir().unwrap();
    // The store's parent "directory" is a regular file.
    let blocker = temp.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let storage = JsonStorage::new(blocker.join("expenses.json"));

    let mut store = ExpenseStore::open(Box::new(storage)).unwrap();
    let err = store
        .add_expense(9.99, "Games", Some(date(2024, 7, 1)))
        .expect_err("write must fail");
    assert!(matches!(err, ExpenseError::StorageWrite { .. }), "{err}");
    assert_eq!(store.len(), 1, "record stays in memory");
}
