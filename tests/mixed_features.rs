use ndarray::array;

use gini_tree::dataset::{Column, Samples};
use gini_tree::{DecisionTreeParams, SplitRule};

fn loan_data() -> (Samples<f64, &'static str>, ndarray::Array1<usize>) {
    // approved when the income is high or the segment is "vip"
    let income = Column::Real(array![
        10., 20., 30., 40., 60., 70., 80., 90., 15., 25., 65., 75.
    ]);
    let segment = Column::Categorical(vec![
        "basic", "plus", "basic", "plus", "basic", "plus", "basic", "plus", "vip", "vip", "vip",
        "vip",
    ]);
    let labels = array![0usize, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1];

    (
        Samples::from_columns(vec![income, segment]).unwrap(),
        labels,
    )
}

#[test]
fn mixed_columns_fit_and_predict() {
    let (samples, labels) = loan_data();

    let tree = DecisionTreeParams::from_tags(&["real", "categorical"])
        .unwrap()
        .fit(&samples, &labels)
        .unwrap();

    assert_eq!(tree.predict(&samples), labels);
    assert_eq!(tree.features(), vec![0, 1]);
    assert_eq!(tree.max_depth(), 2);
    assert_eq!(tree.num_leaves(), 3);

    // the root thresholds the income between the two groups
    match tree.root_node().split() {
        Some((0, SplitRule::Threshold(threshold))) => {
            assert!(40. < *threshold && *threshold < 60.)
        }
        _ => panic!("expected a real split on the income column"),
    }
}

#[test]
fn unseen_segments_fall_through_to_the_right() {
    let (samples, labels) = loan_data();

    let tree = DecisionTreeParams::from_tags(&["real", "categorical"])
        .unwrap()
        .fit(&samples, &labels)
        .unwrap();

    let fresh = Samples::from_columns(vec![
        Column::Real(array![100., 20., 20.]),
        Column::Categorical(vec!["unknown", "unknown", "basic"]),
    ])
    .unwrap();

    // a high income is approved regardless of the segment; below the income
    // threshold an unknown segment is not in the left-routed set and ends up
    // on the approved "vip" side
    assert_eq!(tree.predict(&fresh), array![1, 1, 0]);
}

#[test]
fn depth_cap_coarsens_the_tree() {
    let (samples, labels) = loan_data();

    let tree = DecisionTreeParams::from_tags(&["real", "categorical"])
        .unwrap()
        .max_depth(Some(1))
        .fit(&samples, &labels)
        .unwrap();

    assert_eq!(tree.max_depth(), 1);
    // the vip rows below the income threshold can no longer be carved out
    assert_eq!(
        tree.predict(&samples),
        array![0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1]
    );
}
