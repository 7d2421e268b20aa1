use crate::dataset::FeatureType;
use crate::error::{Error, Result};
use crate::hyperparams::ParamGuard;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The set of hyperparameters that can be specified for fitting a
/// [decision tree](crate::DecisionTree)
///
/// ### Example
///
/// ```rust
/// use gini_tree::DecisionTreeParams;
/// use gini_tree::dataset::{FeatureType, Samples};
/// use ndarray::array;
///
/// // declare the column types and adjust the parameters
/// let params = DecisionTreeParams::new(vec![FeatureType::Real, FeatureType::Real])
///     .max_depth(Some(3))
///     .min_samples_leaf(2);
///
/// let samples = Samples::<f64, &str>::from_records(&array![
///     [1.0, 7.0],
///     [2.0, 6.0],
///     [10.0, 3.0],
///     [11.0, 1.0],
/// ]);
/// let labels = array![0usize, 0, 1, 1];
///
/// let tree = params.fit(&samples, &labels).unwrap();
/// assert_eq!(tree.predict(&samples), labels);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionTreeValidParams {
    feature_types: Vec<FeatureType>,
    max_depth: Option<usize>,
    min_samples_split: usize,
    min_samples_leaf: usize,
}

impl DecisionTreeValidParams {
    /// The declared type of every feature column
    pub fn feature_types(&self) -> &[FeatureType] {
        &self.feature_types
    }

    /// The depth at which nodes stop splitting, unlimited if `None`
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// The minimum number of samples a node needs to be considered for a split
    pub fn min_samples_split(&self) -> usize {
        self.min_samples_split
    }

    /// The minimum number of samples a split has to place on each side
    pub fn min_samples_leaf(&self) -> usize {
        self.min_samples_leaf
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionTreeParams(DecisionTreeValidParams);

impl DecisionTreeParams {
    /// Defaults for the optional parameters:
    /// * `max_depth = None`
    /// * `min_samples_split = 2`
    /// * `min_samples_leaf = 1`
    pub fn new(feature_types: Vec<FeatureType>) -> Self {
        Self(DecisionTreeValidParams {
            feature_types,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        })
    }

    /// Parses string column tags, failing fast on anything other than
    /// `"real"` or `"categorical"`
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Result<Self> {
        let feature_types = tags
            .iter()
            .map(|tag| tag.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(feature_types))
    }

    /// Sets the optional limit on the depth of the tree; a node at the limit
    /// is never split
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.0.max_depth = max_depth;
        self
    }

    /// Sets the minimum number of samples required to split a node
    pub fn min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.0.min_samples_split = min_samples_split;
        self
    }

    /// Sets the minimum number of samples that a split has to place in each
    /// of the two partitions
    pub fn min_samples_leaf(mut self, min_samples_leaf: usize) -> Self {
        self.0.min_samples_leaf = min_samples_leaf;
        self
    }
}

impl ParamGuard for DecisionTreeParams {
    type Checked = DecisionTreeValidParams;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.feature_types.is_empty() {
            Err(Error::Parameters(
                "at least one feature type must be declared".to_string(),
            ))
        } else if self.0.max_depth == Some(0) {
            Err(Error::Parameters(
                "max_depth must be positive when set".to_string(),
            ))
        } else if self.0.min_samples_split < 2 {
            Err(Error::Parameters(format!(
                "min_samples_split should be at least 2, but was {}",
                self.0.min_samples_split
            )))
        } else if self.0.min_samples_leaf < 1 {
            Err(Error::Parameters(format!(
                "min_samples_leaf should be at least 1, but was {}",
                self.0.min_samples_leaf
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
