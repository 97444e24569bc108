pub mod generators;
pub mod traits;
pub mod weighted;

pub use traits::{Graph, Weight};
pub use weighted::WeightedGraph;
