//! Error types in gini-tree
//!

use thiserror::Error;

use crate::dataset::FeatureType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("unknown feature type `{0}`, expected `real` or `categorical`")]
    UnknownFeatureType(String),
    #[error("expected {expected} feature columns but the sample matrix has {found}")]
    FeatureCountMismatch { expected: usize, found: usize },
    #[error("feature {feature_idx} is declared `{declared}` but the column holds `{found}` values")]
    FeatureTypeMismatch {
        feature_idx: usize,
        declared: FeatureType,
        found: FeatureType,
    },
    #[error("{nsamples} samples do not match {nlabels} labels")]
    ShapeMismatch { nsamples: usize, nlabels: usize },
    #[error("column {column} holds {found} values, expected {expected}")]
    ColumnLengthMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },
    #[error("labels must be binary (0 or 1), found {0}")]
    NonBinaryLabel(usize),
    #[error("the sample set is empty")]
    EmptySet,
}
