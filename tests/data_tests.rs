//! Column typing, dummy encoding and design assembly tests.

use regstat::core::RegressionError;
use regstat::data::{
    assemble_design, categorical_levels, dummy_encode, Column, ColumnData, Dataset,
};

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_three_labels_give_two_dummies() {
    let col = Column::categorical_from_strs("region", &["north", "south", "east", "south"]);
    let ColumnData::Categorical(values) = col.data() else {
        panic!("expected a categorical column");
    };

    let enc = dummy_encode("region", values);
    assert_eq!(enc.len(), 2);
    assert_eq!(enc.reference(), Some("north"));
    assert_eq!(enc.names, vec!["region[south]", "region[east]"]);
}

#[test]
fn test_one_label_gives_no_dummies() {
    let values = vec![Some("only".to_string()); 4];
    let enc = dummy_encode("g", &values);
    assert!(enc.is_empty());
}

#[test]
fn test_levels_first_occurrence_order() {
    let values = vec![
        None,
        Some("z".to_string()),
        Some("a".to_string()),
        Some("z".to_string()),
        Some("m".to_string()),
    ];
    assert_eq!(categorical_levels(&values), vec!["z", "a", "m"]);
}

#[test]
fn test_text_cells_coerced() {
    let ds = Dataset::new()
        .with_column(Column::numeric_from_cells("y", &["1", "2.5", "n/a", "4", ""]))
        .with_column(Column::numeric_from_cells("x", &["10", "20", "30", "", "50"]));

    let design = assemble_design(&ds, "y", &strings(&["x"])).unwrap();

    assert_eq!(design.y.nrows(), 5);
    assert!(design.y[2].is_nan());
    assert!(design.y[4].is_nan());
    assert!(design.x[(3, 0)].is_nan());
    assert_eq!(design.x[(1, 0)], 20.0);
}

#[test]
fn test_missing_category_is_nan_in_all_dummies() {
    let ds = Dataset::new()
        .with_column(Column::from_f64("y", &[1.0, 2.0, 3.0, 4.0]))
        .with_column(Column::categorical_from_strs("g", &["a", "", "b", "c"]));

    let design = assemble_design(&ds, "y", &strings(&["g"])).unwrap();

    assert_eq!(design.predictor_names, vec!["g[b]", "g[c]"]);
    assert!(design.x[(1, 0)].is_nan());
    assert!(design.x[(1, 1)].is_nan());
    assert_eq!(design.x[(2, 0)], 1.0);
    assert_eq!(design.x[(3, 1)], 1.0);
}

#[test]
fn test_declared_order_within_kind() {
    let ds = Dataset::new()
        .with_column(Column::from_f64("y", &[1.0, 2.0, 3.0]))
        .with_column(Column::from_f64("a", &[1.0, 0.0, 1.0]))
        .with_column(Column::from_f64("b", &[0.0, 1.0, 1.0]))
        .with_column(Column::categorical_from_strs("c", &["p", "q", "p"]))
        .with_column(Column::categorical_from_strs("d", &["u", "v", "w"]));

    let design = assemble_design(&ds, "y", &strings(&["d", "b", "c", "a"])).unwrap();
    assert_eq!(
        design.predictor_names,
        vec!["b", "a", "d[v]", "d[w]", "c[q]"]
    );
}

#[test]
fn test_unknown_predictor() {
    let ds = Dataset::new().with_column(Column::from_f64("y", &[1.0, 2.0]));
    let err = assemble_design(&ds, "y", &strings(&["ghost"])).unwrap_err();
    assert!(matches!(err, RegressionError::MissingVariable(ref name) if name == "ghost"));
}

#[test]
fn test_unassigned_response() {
    let ds = Dataset::new().with_column(Column::from_f64("x", &[1.0, 2.0]));
    assert!(matches!(
        assemble_design(&ds, "  ", &strings(&["x"])),
        Err(RegressionError::MissingVariable(_))
    ));
}

#[test]
fn test_dataset_from_iterator() {
    let ds: Dataset = vec![
        Column::from_f64("a", &[1.0]),
        Column::from_f64("b", &[2.0]),
    ]
    .into_iter()
    .collect();

    assert_eq!(ds.n_columns(), 2);
    assert!(ds.column("b").is_some_and(|c| c.data().is_numeric()));
}
