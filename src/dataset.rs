//! Typed sample matrices
//!
//! A [`Samples`] matrix stores one [`Column`] per feature, each either real
//! valued or categorical. Keeping the columns typed lets the tree fitting
//! routine check the data against the declared feature types up front and
//! removes any "unknown feature type" branch from the algorithm itself.
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use ndarray::{Array1, ArrayBase, Axis, Data, Ix2};
use num_traits::NumCast;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Floating point numbers usable as feature values and split quality scores
pub trait Float: num_traits::Float + fmt::Debug + fmt::Display {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}

/// Tokens usable as categorical feature values
pub trait Category: PartialEq + Eq + Hash + Clone + fmt::Debug {}

impl Category for bool {}
impl Category for usize {}
impl Category for u64 {}
impl Category for i64 {}
impl Category for char {}
impl Category for String {}
impl Category for &str {}

/// The type tag of a feature column
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureType {
    /// Ordered numeric values, split by a threshold
    Real,
    /// Unordered discrete tokens, split by a category subset
    Categorical,
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeatureType::Real => write!(f, "real"),
            FeatureType::Categorical => write!(f, "categorical"),
        }
    }
}

impl FromStr for FeatureType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "real" => Ok(FeatureType::Real),
            "categorical" => Ok(FeatureType::Categorical),
            other => Err(Error::UnknownFeatureType(other.to_string())),
        }
    }
}

/// A single feature column
#[derive(Debug, Clone, PartialEq)]
pub enum Column<F: Float, K: Category> {
    Real(Array1<F>),
    Categorical(Vec<K>),
}

impl<F: Float, K: Category> Column<F, K> {
    /// The type tag of this column
    pub fn feature_type(&self) -> FeatureType {
        match self {
            Column::Real(_) => FeatureType::Real,
            Column::Categorical(_) => FeatureType::Categorical,
        }
    }

    /// The number of values in this column
    pub fn len(&self) -> usize {
        match self {
            Column::Real(values) => values.len(),
            Column::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sample matrix with per-column feature types, stored column-major
///
/// The tree algorithm only ever looks at one feature at a time, so samples
/// are kept as a list of typed columns of equal length rather than as a flat
/// matrix of uniform element type.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples<F: Float, K: Category> {
    columns: Vec<Column<F, K>>,
    nsamples: usize,
}

impl<F: Float, K: Category> Samples<F, K> {
    /// Assembles a sample matrix from typed columns
    ///
    /// Fails if no column is given or if the columns disagree on length.
    pub fn from_columns(columns: Vec<Column<F, K>>) -> Result<Self> {
        let nsamples = columns.first().map(|c| c.len()).ok_or(Error::EmptySet)?;
        for (idx, column) in columns.iter().enumerate() {
            if column.len() != nsamples {
                return Err(Error::ColumnLengthMismatch {
                    column: idx,
                    expected: nsamples,
                    found: column.len(),
                });
            }
        }

        Ok(Samples { columns, nsamples })
    }

    /// Builds an all-real sample matrix from a two dimensional array
    pub fn from_records(records: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Self {
        let columns = records
            .axis_iter(Axis(1))
            .map(|column| Column::Real(column.to_owned()))
            .collect();

        Samples {
            columns,
            nsamples: records.nrows(),
        }
    }

    /// The number of samples (rows)
    pub fn nsamples(&self) -> usize {
        self.nsamples
    }

    /// The number of features (columns)
    pub fn nfeatures(&self) -> usize {
        self.columns.len()
    }

    /// The column of the feature at `feature_idx`
    ///
    /// ### Panics
    ///
    /// If `feature_idx` is out of bounds
    pub fn column(&self, feature_idx: usize) -> &Column<F, K> {
        &self.columns[feature_idx]
    }

    /// All columns in feature order
    pub fn columns(&self) -> &[Column<F, K>] {
        &self.columns
    }

    /// The type tags of all columns in feature order
    pub fn feature_types(&self) -> Vec<FeatureType> {
        self.columns.iter().map(|c| c.feature_type()).collect()
    }
}
