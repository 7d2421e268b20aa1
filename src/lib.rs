//!
//! # Decision tree learning
//!
//! `gini-tree` provides a pure Rust implementation of binary decision-tree
//! classification trained by greedy recursive partitioning with the Gini
//! impurity criterion.
//!
//! Feature columns are typed: real-valued columns are split by a threshold,
//! categorical columns by a subset of their tokens. Categorical columns are
//! handled by re-encoding the categories within every node, ranked by their
//! empirical probability of the positive label, which reduces subset
//! selection to the same threshold search used for real features.
//!
//! The two building blocks are exposed separately:
//!
//! * [`find_best_split`] scores every admissible threshold of a single
//!   feature vector and returns the best one;
//! * [`DecisionTree`] is the fitted model, built via [`DecisionTreeParams`]
//!   and queried with [`DecisionTree::predict`].
//!
//! ```rust
//! use gini_tree::DecisionTreeParams;
//! use gini_tree::dataset::{FeatureType, Samples};
//! use ndarray::array;
//!
//! let samples = Samples::<f64, &str>::from_records(&array![[1.0], [2.0], [10.0], [11.0]]);
//! let labels = array![0usize, 0, 1, 1];
//!
//! let tree = DecisionTreeParams::new(vec![FeatureType::Real])
//!     .fit(&samples, &labels)
//!     .unwrap();
//!
//! assert_eq!(tree.predict(&samples), labels);
//! ```

mod decision_trees;

pub mod dataset;
pub mod error;
pub mod hyperparams;

pub use decision_trees::*;
pub use error::Result;
