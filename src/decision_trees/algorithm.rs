//! Gini decision trees over typed feature columns
//!
use std::collections::{HashMap, HashSet};

use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};

use super::{find_best_split, DecisionTreeParams, DecisionTreeValidParams, NodeIter};
use crate::dataset::{Category, Column, FeatureType, Float, Samples};
use crate::error::{Error, Result};
use crate::hyperparams::ParamGuard;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The routing rule stored in a split node
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum SplitRule<F: Float, K: Category> {
    /// Real feature: samples with a value below the threshold go left
    Threshold(F),
    /// Categorical feature: samples whose token is in the set go left
    Categories(HashSet<K>),
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
enum NodeKind<F: Float, K: Category> {
    Leaf {
        prediction: usize,
    },
    Split {
        feature_idx: usize,
        rule: SplitRule<F, K>,
        left: Box<TreeNode<F, K>>,
        right: Box<TreeNode<F, K>>,
    },
}

/// A node in the decision tree
///
/// Either a terminal leaf carrying a predicted class, or a split carrying a
/// routing rule and exclusive ownership of its two children.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<F: Float, K: Category> {
    depth: usize,
    kind: NodeKind<F, K>,
}

impl<F: Float, K: Category> TreeNode<F, K> {
    fn leaf(prediction: usize, depth: usize) -> Self {
        TreeNode {
            depth,
            kind: NodeKind::Leaf { prediction },
        }
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Returns the depth of the node in the decision tree, starting from 0 at
    /// the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `Some(class)` for leaf nodes and `None` for split nodes
    pub fn prediction(&self) -> Option<usize> {
        match &self.kind {
            NodeKind::Leaf { prediction } => Some(*prediction),
            NodeKind::Split { .. } => None,
        }
    }

    /// Returns the split feature index and routing rule for split nodes,
    /// `None` for leaves
    pub fn split(&self) -> Option<(usize, &SplitRule<F, K>)> {
        match &self.kind {
            NodeKind::Split {
                feature_idx, rule, ..
            } => Some((*feature_idx, rule)),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Returns both children, first left then right; empty for leaves
    pub fn children(&self) -> Vec<&TreeNode<F, K>> {
        match &self.kind {
            NodeKind::Split { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            NodeKind::Leaf { .. } => Vec::new(),
        }
    }
}

/// A fitted decision tree model for binary classification
///
/// ### Structure
///
/// A binary tree in which every split node holds a feature index and a
/// routing rule: a threshold for real features, or the set of left-routed
/// category tokens for categorical features. Leaves hold a predicted class.
///
/// ### Algorithm
///
/// Starting from the full training set at the root, fitting recursively
/// applies these rules at every node:
///
/// * A subset with a single label becomes a leaf predicting that label.
/// * Otherwise every feature is scored with [`find_best_split`];
///   categorical columns are first re-encoded within the node by ranking
///   each category by its empirical probability of label 1, which turns
///   subset selection into an equivalent threshold problem. The ranking is
///   local to the node and recomputed on every subset.
/// * The feature whose best threshold scores strictly highest wins, provided
///   both partitions hold at least `min_samples_leaf` samples; for
///   categorical features the winning threshold is mapped back to the
///   category tokens ranked below it.
/// * If no feature yields an admissible split, the node becomes a leaf
///   predicting the majority label, ties going to the smaller label.
///
/// Nodes holding fewer than `min_samples_split` samples or sitting at the
/// `max_depth` limit are not considered for splitting.
///
/// ### Predictions
///
/// Each sample walks from the root to a leaf, going left when its value is
/// below the node threshold (real) or a member of the node category set
/// (categorical), and the leaf's class is returned.
///
/// ### Example
///
/// ```rust
/// use gini_tree::DecisionTreeParams;
/// use gini_tree::dataset::{Column, FeatureType, Samples};
/// use ndarray::array;
///
/// let samples = Samples::<f64, &str>::from_columns(vec![
///     Column::Categorical(vec!["spam", "spam", "ham", "ham"]),
/// ])
/// .unwrap();
/// let labels = array![1usize, 1, 0, 0];
///
/// let tree = DecisionTreeParams::new(vec![FeatureType::Categorical])
///     .fit(&samples, &labels)
///     .unwrap();
///
/// assert_eq!(tree.predict(&samples), labels);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree<F: Float, K: Category> {
    root: TreeNode<F, K>,
    feature_types: Vec<FeatureType>,
}

impl DecisionTreeValidParams {
    /// Fits a decision tree on `samples` and binary `labels`
    ///
    /// The columns of `samples` must match the declared feature types
    /// column-for-column and every label must be 0 or 1.
    pub fn fit<F: Float, K: Category, D: Data<Elem = usize>>(
        &self,
        samples: &Samples<F, K>,
        labels: &ArrayBase<D, Ix1>,
    ) -> Result<DecisionTree<F, K>> {
        validate(self, samples, labels)?;

        let labels = labels.to_vec();
        let rows: Vec<usize> = (0..samples.nsamples()).collect();
        let root = fit_node(self, samples, &labels, &rows, 0);

        Ok(DecisionTree {
            root,
            feature_types: self.feature_types().to_vec(),
        })
    }
}

impl DecisionTreeParams {
    /// Checks the hyperparameters and fits; see
    /// [`DecisionTreeValidParams::fit`]
    pub fn fit<F: Float, K: Category, D: Data<Elem = usize>>(
        &self,
        samples: &Samples<F, K>,
        labels: &ArrayBase<D, Ix1>,
    ) -> Result<DecisionTree<F, K>> {
        self.check_ref()?.fit(samples, labels)
    }
}

impl<F: Float, K: Category> DecisionTree<F, K> {
    /// Makes a prediction for each row of `samples`, in row order
    ///
    /// A categorical value never seen while fitting is not a member of any
    /// left-routed category set and therefore falls through to the right
    /// child of every split it encounters.
    ///
    /// ### Panics
    ///
    /// If the columns of `samples` do not match the column typing seen at
    /// fit time.
    pub fn predict(&self, samples: &Samples<F, K>) -> Array1<usize> {
        assert_eq!(
            samples.nfeatures(),
            self.feature_types.len(),
            "The number of feature columns must match the fitted feature types."
        );
        assert_eq!(
            samples.feature_types(),
            self.feature_types,
            "The column types must match the fitted feature types."
        );

        (0..samples.nsamples())
            .map(|row| make_prediction(&self.root, samples, row))
            .collect()
    }

    /// Returns the root node of the tree
    pub fn root_node(&self) -> &TreeNode<F, K> {
        &self.root
    }

    /// The feature types the tree was fitted with
    pub fn feature_types(&self) -> &[FeatureType] {
        &self.feature_types
    }

    /// Creates a node iterator in level-order (BFT)
    pub fn iter_nodes(&self) -> NodeIter<F, K> {
        NodeIter::new(vec![&self.root])
    }

    /// Returns the distinct feature indices used by splits, ascending
    pub fn features(&self) -> Vec<usize> {
        let mut fitted_features = HashSet::new();

        for node in self.iter_nodes() {
            if let Some((feature_idx, _)) = node.split() {
                fitted_features.insert(feature_idx);
            }
        }

        let mut fitted_features = fitted_features.into_iter().collect::<Vec<_>>();
        fitted_features.sort_unstable();
        fitted_features
    }

    /// Returns the depth of the deepest node in the tree
    pub fn max_depth(&self) -> usize {
        self.iter_nodes()
            .fold(0, |max, node| usize::max(max, node.depth()))
    }

    /// Returns the number of leaves in this tree
    pub fn num_leaves(&self) -> usize {
        self.iter_nodes().filter(|node| node.is_leaf()).count()
    }
}

/// An admissible split of a node's subset, kept while scanning the features
struct BestSplit<F: Float, K: Category> {
    feature_idx: usize,
    score: F,
    rule: SplitRule<F, K>,
    left_rows: Vec<usize>,
    right_rows: Vec<usize>,
}

/// Recursively fits the subtree for the subset of training rows in `rows`
fn fit_node<F: Float, K: Category>(
    params: &DecisionTreeValidParams,
    samples: &Samples<F, K>,
    labels: &[usize],
    rows: &[usize],
    depth: usize,
) -> TreeNode<F, K> {
    let sub_labels: Vec<usize> = rows.iter().map(|&row| labels[row]).collect();

    // a pure subset terminates regardless of any other stopping rule
    if sub_labels.iter().all(|&label| label == sub_labels[0]) {
        return TreeNode::leaf(sub_labels[0], depth);
    }

    // subset-size and depth limits apply to every feature alike, so they are
    // checked once per node
    if rows.len() < params.min_samples_split()
        || params
            .max_depth()
            .map(|limit| depth >= limit)
            .unwrap_or(false)
    {
        return TreeNode::leaf(majority_label(&sub_labels), depth);
    }

    let mut best: Option<BestSplit<F, K>> = None;

    for feature_idx in 0..samples.nfeatures() {
        // per-node view of the feature, re-encoded for categorical columns
        let (values, ranking) = match samples.column(feature_idx) {
            Column::Real(column) => {
                let values = rows.iter().map(|&row| column[row]).collect::<Vec<F>>();
                (values, None)
            }
            Column::Categorical(column) => {
                let ranking = rank_categories(column, labels, rows);
                let values = rows
                    .iter()
                    .map(|&row| F::cast(ranking.ranks[&column[row]]))
                    .collect();
                (values, Some(ranking))
            }
        };

        // a constant column cannot separate the subset
        let candidates = match find_best_split(
            ArrayView1::from(values.as_slice()),
            ArrayView1::from(sub_labels.as_slice()),
        ) {
            Some(candidates) => candidates,
            None => continue,
        };

        // only the feature's best threshold competes; if it leaves too few
        // samples on a side the whole feature is rejected
        let left_count = values
            .iter()
            .filter(|&&value| value < candidates.best_threshold)
            .count();
        if left_count < params.min_samples_leaf()
            || rows.len() - left_count < params.min_samples_leaf()
        {
            continue;
        }

        // strict comparison: ties keep the earlier feature index
        if best
            .as_ref()
            .map(|incumbent| candidates.best_score > incumbent.score)
            .unwrap_or(true)
        {
            let mut left_rows = Vec::with_capacity(left_count);
            let mut right_rows = Vec::with_capacity(rows.len() - left_count);
            for (&row, &value) in rows.iter().zip(&values) {
                if value < candidates.best_threshold {
                    left_rows.push(row);
                } else {
                    right_rows.push(row);
                }
            }

            let rule = match &ranking {
                None => SplitRule::Threshold(candidates.best_threshold),
                Some(ranking) => SplitRule::Categories(ranking.left_of(candidates.best_threshold)),
            };

            best = Some(BestSplit {
                feature_idx,
                score: candidates.best_score,
                rule,
                left_rows,
                right_rows,
            });
        }
    }

    let split = match best {
        Some(split) => split,
        None => return TreeNode::leaf(majority_label(&sub_labels), depth),
    };

    let left = fit_node(params, samples, labels, &split.left_rows, depth + 1);
    let right = fit_node(params, samples, labels, &split.right_rows, depth + 1);

    TreeNode {
        depth,
        kind: NodeKind::Split {
            feature_idx: split.feature_idx,
            rule: split.rule,
            left: Box::new(left),
            right: Box::new(right),
        },
    }
}

/// Classifies the sample in row `row` by walking the tree from `node`
fn make_prediction<F: Float, K: Category>(
    node: &TreeNode<F, K>,
    samples: &Samples<F, K>,
    row: usize,
) -> usize {
    match &node.kind {
        NodeKind::Leaf { prediction } => *prediction,
        NodeKind::Split {
            feature_idx,
            rule,
            left,
            right,
        } => {
            let goes_left = match (rule, samples.column(*feature_idx)) {
                (SplitRule::Threshold(threshold), Column::Real(column)) => column[row] < *threshold,
                (SplitRule::Categories(left_set), Column::Categorical(column)) => {
                    left_set.contains(&column[row])
                }
                // the column kinds are asserted against the fitted types in predict
                _ => unreachable!("column type mismatch"),
            };

            if goes_left {
                make_prediction(left, samples, row)
            } else {
                make_prediction(right, samples, row)
            }
        }
    }
}

/// Per-node ordinal re-encoding of a categorical column
///
/// Categories are ranked ascending by their empirical probability of label 1
/// within the node's subset, so thresholding the ranks is equivalent to
/// selecting a category subset. The ranking is recomputed for every node.
struct CategoryRanking<K: Category> {
    ranks: HashMap<K, usize>,
}

impl<K: Category> CategoryRanking<K> {
    /// Inverts the encoding: the categories ranked below `threshold`, i.e.
    /// the left-routed set
    fn left_of<F: Float>(&self, threshold: F) -> HashSet<K> {
        self.ranks
            .iter()
            .filter(|(_, &rank)| F::cast(rank) < threshold)
            .map(|(category, _)| category.clone())
            .collect()
    }
}

fn rank_categories<K: Category>(
    column: &[K],
    labels: &[usize],
    rows: &[usize],
) -> CategoryRanking<K> {
    // (total, label-1 count) per category; first-occurrence order keeps
    // equal ratios deterministic under the stable sort below
    let mut counts: HashMap<&K, (usize, usize)> = HashMap::new();
    let mut order: Vec<&K> = Vec::new();

    for &row in rows {
        let category = &column[row];
        let entry = counts.entry(category).or_insert_with(|| {
            order.push(category);
            (0, 0)
        });
        entry.0 += 1;
        entry.1 += labels[row];
    }

    order.sort_by(|a, b| {
        let ratio_a = counts[a].1 as f64 / counts[a].0 as f64;
        let ratio_b = counts[b].1 as f64 / counts[b].0 as f64;
        ratio_a
            .partial_cmp(&ratio_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let ranks = order
        .into_iter()
        .enumerate()
        .map(|(rank, category)| (category.clone(), rank))
        .collect();

    CategoryRanking { ranks }
}

/// Majority label of a subset; ties go to the smaller label
fn majority_label(sub_labels: &[usize]) -> usize {
    let ones: usize = sub_labels.iter().sum();
    usize::from(ones * 2 > sub_labels.len())
}

fn validate<F: Float, K: Category, D: Data<Elem = usize>>(
    params: &DecisionTreeValidParams,
    samples: &Samples<F, K>,
    labels: &ArrayBase<D, Ix1>,
) -> Result<()> {
    if samples.nfeatures() != params.feature_types().len() {
        return Err(Error::FeatureCountMismatch {
            expected: params.feature_types().len(),
            found: samples.nfeatures(),
        });
    }

    for (feature_idx, (declared, column)) in params
        .feature_types()
        .iter()
        .zip(samples.columns())
        .enumerate()
    {
        if column.feature_type() != *declared {
            return Err(Error::FeatureTypeMismatch {
                feature_idx,
                declared: *declared,
                found: column.feature_type(),
            });
        }
    }

    if samples.nsamples() != labels.len() {
        return Err(Error::ShapeMismatch {
            nsamples: samples.nsamples(),
            nlabels: labels.len(),
        });
    }

    if samples.nsamples() == 0 {
        return Err(Error::EmptySet);
    }

    if let Some(&bad) = labels.iter().find(|&&label| label > 1) {
        return Err(Error::NonBinaryLabel(bad));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::{array, s, Array, Array1, Array2};
    use ndarray_rand::{rand::SeedableRng, rand_distr::Uniform, RandomExt};
    use rand::rngs::SmallRng;
    use rand::Rng;

    #[test]
    fn single_real_feature_split() {
        let samples = Samples::<f64, &str>::from_records(&array![[1.], [2.], [10.], [11.]]);
        let labels = array![0usize, 0, 1, 1];

        let tree = DecisionTreeParams::new(vec![FeatureType::Real])
            .fit(&samples, &labels)
            .unwrap();

        let (feature_idx, rule) = tree.root_node().split().unwrap();
        assert_eq!(feature_idx, 0);
        match rule {
            SplitRule::Threshold(threshold) => assert!(2. < *threshold && *threshold < 10.),
            SplitRule::Categories(_) => panic!("expected a threshold rule"),
        }

        assert_eq!(tree.max_depth(), 1);
        assert_eq!(tree.num_leaves(), 2);
        assert_eq!(tree.predict(&samples), labels);
    }

    #[test]
    fn pure_labels_terminate_immediately() {
        let samples = Samples::<f64, &str>::from_records(&array![[1., 5.], [2., 4.], [3., 3.]]);
        let labels = array![1usize, 1, 1];

        let tree = DecisionTreeParams::new(vec![FeatureType::Real, FeatureType::Real])
            .fit(&samples, &labels)
            .unwrap();

        assert!(tree.root_node().is_leaf());
        assert_eq!(tree.root_node().prediction(), Some(1));
        assert_eq!(tree.max_depth(), 0);
        assert_eq!(tree.predict(&samples), labels);
    }

    #[test]
    fn majority_ties_prefer_the_smaller_label() {
        let samples = Samples::<f64, &str>::from_records(&array![[1.], [2.]]);
        let labels = array![1usize, 0];

        // the subset is too small to split, so the root is a majority leaf
        let tree = DecisionTreeParams::new(vec![FeatureType::Real])
            .min_samples_split(3)
            .fit(&samples, &labels)
            .unwrap();

        assert!(tree.root_node().is_leaf());
        assert_eq!(tree.root_node().prediction(), Some(0));
        assert_eq!(tree.predict(&samples), array![0, 0]);
    }

    #[test]
    fn min_samples_leaf_rejects_a_features_best_threshold() {
        // the best threshold isolates the single 0 label; with
        // min_samples_leaf = 2 the feature is rejected outright and the
        // node falls back to a majority leaf
        let samples = Samples::<f64, &str>::from_records(&array![[1.], [2.], [3.], [4.]]);
        let labels = array![0usize, 1, 1, 1];

        let tree = DecisionTreeParams::new(vec![FeatureType::Real])
            .min_samples_leaf(2)
            .fit(&samples, &labels)
            .unwrap();

        assert!(tree.root_node().is_leaf());
        assert_eq!(tree.root_node().prediction(), Some(1));
    }

    #[test]
    fn committed_splits_respect_min_samples_leaf() {
        let mut rng = SmallRng::seed_from_u64(42);
        let records = Array::random_using((40, 3), Uniform::new(-1., 1.), &mut rng);
        let samples = Samples::<f64, &str>::from_records(&records);
        let labels: Array1<usize> = (0..40).map(|_| rng.gen_range(0..2)).collect();

        let min_samples_leaf = 5;
        let tree = DecisionTreeParams::new(vec![FeatureType::Real; 3])
            .min_samples_leaf(min_samples_leaf)
            .fit(&samples, &labels)
            .unwrap();

        // replay the training rows through the tree and count them per leaf
        fn check_counts(
            node: &TreeNode<f64, &str>,
            samples: &Samples<f64, &str>,
            rows: Vec<usize>,
            min_samples_leaf: usize,
        ) {
            match node.split() {
                None => assert!(rows.len() >= min_samples_leaf),
                Some((feature_idx, rule)) => {
                    let (left_rows, right_rows): (Vec<usize>, Vec<usize>) =
                        rows.into_iter().partition(|&row| match (rule, samples.column(feature_idx)) {
                            (SplitRule::Threshold(t), Column::Real(col)) => col[row] < *t,
                            (SplitRule::Categories(set), Column::Categorical(col)) => {
                                set.contains(&col[row])
                            }
                            _ => panic!("column type mismatch"),
                        });

                    assert!(left_rows.len() >= min_samples_leaf);
                    assert!(right_rows.len() >= min_samples_leaf);

                    let children = node.children();
                    check_counts(children[0], samples, left_rows, min_samples_leaf);
                    check_counts(children[1], samples, right_rows, min_samples_leaf);
                }
            }
        }

        check_counts(
            tree.root_node(),
            &samples,
            (0..40).collect(),
            min_samples_leaf,
        );
    }

    #[test]
    fn check_max_depth() {
        // alternating labels over a distinct-valued feature keep every
        // subset impure, so growth only stops at the depth limit
        let records = Array2::from_shape_fn((64, 1), |(i, _)| i as f64);
        let samples = Samples::<f64, &str>::from_records(&records);
        let labels: Array1<usize> = (0..64).map(|i| i % 2).collect();

        for max_depth in &[1, 2, 3, 5] {
            let tree = DecisionTreeParams::new(vec![FeatureType::Real])
                .max_depth(Some(*max_depth))
                .fit(&samples, &labels)
                .unwrap();

            assert_eq!(tree.max_depth(), *max_depth);
            for node in tree.iter_nodes() {
                assert!(node.depth() <= *max_depth);
            }
        }
    }

    #[test]
    fn separable_data_reproduces_training_labels() {
        // one feature separates the classes perfectly, the others are noise
        let mut rng = SmallRng::seed_from_u64(42);
        let mut records = Array::random_using((50, 3), Uniform::new(-1., 1.), &mut rng);
        records.slice_mut(s![..25, 0]).mapv_inplace(|x| x + 3.);

        let samples = Samples::<f64, &str>::from_records(&records);
        let labels: Array1<usize> = (0..50).map(|i| usize::from(i >= 25)).collect();

        let tree = DecisionTreeParams::new(vec![FeatureType::Real; 3])
            .fit(&samples, &labels)
            .unwrap();

        // the perfect split is found at the root and only there
        assert_eq!(tree.features(), vec![0]);
        assert_eq!(tree.max_depth(), 1);
        assert_eq!(tree.num_leaves(), 2);
        assert_eq!(tree.predict(&samples), labels);
    }

    #[test]
    fn categorical_split_inverts_the_encoding() {
        let samples = Samples::<f64, &str>::from_columns(vec![Column::Categorical(vec![
            "a", "a", "b", "b",
        ])])
        .unwrap();
        let labels = array![0usize, 0, 1, 1];

        let tree = DecisionTreeParams::new(vec![FeatureType::Categorical])
            .fit(&samples, &labels)
            .unwrap();

        let (_, rule) = tree.root_node().split().unwrap();
        match rule {
            SplitRule::Categories(left_set) => {
                assert_eq!(left_set.len(), 1);
                assert!(left_set.contains("a"));
            }
            SplitRule::Threshold(_) => panic!("expected a category rule"),
        }

        assert_eq!(tree.predict(&samples), labels);
    }

    #[test]
    fn unseen_categories_route_right() {
        let train = Samples::<f64, &str>::from_columns(vec![Column::Categorical(vec![
            "a", "a", "b", "b",
        ])])
        .unwrap();
        let labels = array![0usize, 0, 1, 1];

        let tree = DecisionTreeParams::new(vec![FeatureType::Categorical])
            .fit(&train, &labels)
            .unwrap();

        let test =
            Samples::<f64, &str>::from_columns(vec![Column::Categorical(vec!["a", "c"])]).unwrap();
        assert_eq!(tree.predict(&test), array![0, 1]);
    }

    #[test]
    fn category_ranking_is_recomputed_per_node() {
        // the token "a" correlates with label 0 below the real split and
        // with label 1 above it, so the two subtrees must rank it differently
        let samples = Samples::<f64, &str>::from_columns(vec![
            Column::Real(array![0., 0., 0., 0., 10., 10., 10., 10.]),
            Column::Categorical(vec!["a", "a", "b", "b", "a", "a", "b", "b"]),
        ])
        .unwrap();
        let labels = array![0usize, 0, 1, 1, 1, 1, 0, 0];

        let tree = DecisionTreeParams::new(vec![FeatureType::Real, FeatureType::Categorical])
            .fit(&samples, &labels)
            .unwrap();

        let (root_feature, _) = tree.root_node().split().unwrap();
        assert_eq!(root_feature, 0);

        let children = tree.root_node().children();
        let left_sets: Vec<&HashSet<&str>> = children
            .iter()
            .map(|child| match child.split() {
                Some((1, SplitRule::Categories(set))) => set,
                _ => panic!("expected a categorical split on feature 1"),
            })
            .collect();

        assert!(left_sets[0].contains("a") && !left_sets[0].contains("b"));
        assert!(left_sets[1].contains("b") && !left_sets[1].contains("a"));

        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.predict(&samples), labels);
    }

    #[test]
    fn data_validation_errors() {
        let params = DecisionTreeParams::new(vec![FeatureType::Real]);
        let samples = Samples::<f64, &str>::from_records(&array![[1.], [2.], [3.]]);

        assert_eq!(
            params.fit(&samples, &array![0usize, 1]).unwrap_err(),
            Error::ShapeMismatch {
                nsamples: 3,
                nlabels: 2,
            }
        );
        assert_eq!(
            params.fit(&samples, &array![0usize, 2, 1]).unwrap_err(),
            Error::NonBinaryLabel(2)
        );

        let two_column_params =
            DecisionTreeParams::new(vec![FeatureType::Real, FeatureType::Real]);
        assert_eq!(
            two_column_params
                .fit(&samples, &array![0usize, 1, 0])
                .unwrap_err(),
            Error::FeatureCountMismatch {
                expected: 2,
                found: 1,
            }
        );

        let categorical =
            Samples::<f64, &str>::from_columns(vec![Column::Categorical(vec!["a", "b", "a"])])
                .unwrap();
        assert_eq!(
            params.fit(&categorical, &array![0usize, 1, 0]).unwrap_err(),
            Error::FeatureTypeMismatch {
                feature_idx: 0,
                declared: FeatureType::Real,
                found: FeatureType::Categorical,
            }
        );
    }

    #[test]
    fn empty_training_set_is_rejected() {
        let samples = Samples::<f64, &str>::from_records(&Array2::zeros((0, 1)));
        let labels: Array1<usize> = array![];

        assert_eq!(
            DecisionTreeParams::new(vec![FeatureType::Real])
                .fit(&samples, &labels)
                .unwrap_err(),
            Error::EmptySet
        );
    }
}
