mod algorithm;
mod hyperparams;
mod iter;
mod split;

pub use algorithm::*;
pub use hyperparams::*;
pub use iter::*;
pub use split::*;
