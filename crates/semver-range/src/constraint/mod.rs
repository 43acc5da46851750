//! Comparator and range types for version matching

mod comparator;
mod comparator_set;
mod operator;
mod range;

pub use comparator::Comparator;
pub use comparator_set::ComparatorSet;
pub use operator::Operator;
pub use range::Range;
