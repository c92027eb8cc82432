use spend_charts::ChartError;
use spend_charts::core::{CategoryTotal, PieDataset, PieModel};

fn dataset(values: Vec<CategoryTotal>) -> PieDataset {
    PieDataset::new(5, "₽", values)
}

#[test]
fn two_category_example_matches_expected_angles() {
    let model = PieModel::build(dataset(vec![
        CategoryTotal::new("Food", 100),
        CategoryTotal::new("Transport", 400),
    ]))
    .expect("dataset fits");

    assert_eq!(model.total(), 500);

    let sectors = model.sectors();
    assert_eq!(sectors[0].start_deg, 0.0);
    assert_eq!(sectors[0].end_deg, 72.0);
    assert_eq!(sectors[1].start_deg, 72.0);
    assert_eq!(sectors[1].end_deg, 360.0);
}

#[test]
fn values_sort_ascending_by_amount() {
    let model = PieModel::build(dataset(vec![
        CategoryTotal::new("Big", 900),
        CategoryTotal::new("Small", 10),
        CategoryTotal::new("Mid", 400),
    ]))
    .expect("dataset fits");

    let categories: Vec<&str> = model
        .dataset()
        .values
        .iter()
        .map(|value| value.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Small", "Mid", "Big"]);
}

#[test]
fn equal_amounts_keep_original_relative_order() {
    let model = PieModel::build(dataset(vec![
        CategoryTotal::new("First", 100),
        CategoryTotal::new("Second", 100),
        CategoryTotal::new("Third", 100),
    ]))
    .expect("dataset fits");

    let categories: Vec<&str> = model
        .dataset()
        .values
        .iter()
        .map(|value| value.category.as_str())
        .collect();
    assert_eq!(categories, vec!["First", "Second", "Third"]);
}

#[test]
fn thirteen_categories_are_rejected() {
    let values = (0..13)
        .map(|index| CategoryTotal::new(format!("category-{index}"), 100))
        .collect();

    let error = PieModel::build(dataset(values)).expect_err("13 categories must fail");

    match error {
        ChartError::InvalidDatasetSize { count, max } => {
            assert_eq!(count, 13);
            assert_eq!(max, 12);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn twelve_categories_are_accepted() {
    let values = (0..12)
        .map(|index| CategoryTotal::new(format!("category-{index}"), 100))
        .collect();

    let model = PieModel::build(dataset(values)).expect("12 categories fit");
    assert_eq!(model.sectors().len(), 12);
    assert_eq!(model.sectors()[11].end_deg, 360.0);
}

#[test]
fn zero_sum_dataset_is_degenerate() {
    let model = PieModel::build(dataset(vec![
        CategoryTotal::new("Food", 0),
        CategoryTotal::new("Transport", 0),
    ]))
    .expect("dataset fits");

    assert!(model.is_degenerate());
    assert!(model.sectors().iter().all(|sector| sector.span_deg() == 0.0));
}

#[test]
fn empty_dataset_is_degenerate_with_no_sectors() {
    let model = PieModel::build(dataset(Vec::new())).expect("empty dataset fits");

    assert!(model.is_degenerate());
    assert!(model.sectors().is_empty());
    assert_eq!(model.total(), 0);
}
