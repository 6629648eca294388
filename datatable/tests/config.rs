use datatable::{Column, SortState, Table, TableConfig, TableError, TableRow, TableView, Value};

#[derive(Debug)]
struct Row {
    id: i64,
    age: i64,
}

impl TableRow for Row {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, data_index: &str) -> Value {
        match data_index {
            "age" => self.age.into(),
            _ => Value::Null,
        }
    }
}

const CONFIG: &str = r#"{
    "columns": [
        { "key": "id", "title": "ID", "dataIndex": "id" },
        { "key": "age", "title": "Age", "dataIndex": "age", "sortable": true }
    ],
    "selectable": true,
    "initial_sort": { "column": "age", "ascending": false }
}"#;

#[test]
fn test_from_json_applies_initial_sort() {
    let config = TableConfig::from_json(CONFIG).unwrap();
    assert!(config.selectable);

    let rows = vec![Row { id: 1, age: 24 }, Row { id: 2, age: 21 }, Row { id: 3, age: 30 }];
    let mut table = Table::from_config(&config, rows).unwrap();
    assert_eq!(table.sort(), &SortState::by("age", false));

    let ids: Vec<i64> = table.derive().iter().map(|r| r.id).collect();
    assert_eq!(ids, [3, 1, 2]);

    // Clicking the active column flips it back to ascending.
    table.set_sort("age");
    let ids: Vec<i64> = table.derive().iter().map(|r| r.id).collect();
    assert_eq!(ids, [2, 1, 3]);
}

#[test]
fn test_selectable_config_emits_checkboxes() {
    let config = TableConfig::from_json(CONFIG).unwrap();
    let mut table = Table::from_config(&config, vec![Row { id: 1, age: 24 }, Row { id: 2, age: 21 }])
        .unwrap();
    assert!(table.is_selectable());
    table.toggle_select(2);

    let TableView::Grid { rows, .. } = table.view(false) else {
        panic!("expected grid");
    };
    let checked: Vec<(i64, Option<bool>)> = rows.iter().map(|r| (r.id, r.checked)).collect();
    assert_eq!(checked, [(1, Some(false)), (2, Some(true))]);
}

#[test]
fn test_config_without_selectable_hides_checkboxes() {
    let config = TableConfig::new(vec![Column::new("age", "Age").sortable()]);
    let table = Table::from_config(&config, vec![Row { id: 1, age: 24 }]).unwrap();
    assert!(!table.is_selectable());

    let TableView::Grid { rows, .. } = table.view(false) else {
        panic!("expected grid");
    };
    assert_eq!(rows[0].checked, None);
}

#[test]
fn test_builder_config_round_trips_through_table() {
    let config = TableConfig::new(vec![Column::new("age", "Age").sortable()])
        .selectable()
        .initial_sort("age", true);
    let table = Table::from_config(&config, vec![Row { id: 1, age: 3 }]).unwrap();
    assert!(table.is_selectable());
    assert_eq!(table.sort(), &SortState::by("age", true));
    assert_eq!(table.columns(), config.columns.as_slice());
}

#[test]
fn test_duplicate_column_key() {
    let config = TableConfig::new(vec![Column::new("age", "Age"), Column::new("age", "Again")]);
    let err = Table::<Row>::from_config(&config, vec![]).unwrap_err();
    assert!(matches!(err, TableError::DuplicateColumn { ref key } if key == "age"));
    assert_eq!(err.to_string(), "Duplicate column key 'age'");
}

#[test]
fn test_initial_sort_unknown_column() {
    let config = TableConfig::new(vec![Column::new("age", "Age").sortable()])
        .initial_sort("height", true);
    assert!(matches!(
        config.validate(),
        Err(TableError::UnknownColumn { key }) if key == "height"
    ));
}

#[test]
fn test_initial_sort_not_sortable() {
    let config = TableConfig::new(vec![Column::new("age", "Age")]).initial_sort("age", true);
    assert!(matches!(
        config.validate(),
        Err(TableError::NotSortable { key }) if key == "age"
    ));
}

#[test]
fn test_malformed_json() {
    let err = TableConfig::from_json("{ \"columns\": 3 }").unwrap_err();
    assert!(matches!(err, TableError::Config(_)));
    assert!(err.to_string().starts_with("Invalid table configuration"));
}

#[test]
fn test_from_json_validates() {
    let json = r#"{"columns":[{"key":"a","title":"A","dataIndex":"a"},{"key":"a","title":"B","dataIndex":"b"}]}"#;
    assert!(matches!(
        TableConfig::from_json(json),
        Err(TableError::DuplicateColumn { .. })
    ));
}
