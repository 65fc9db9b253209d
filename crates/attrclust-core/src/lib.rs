#![deny(missing_docs)]
#![doc = "Core data model, error surface and numeric vector type shared by the attrclust crates."]

pub mod errors;
pub mod graph;
pub mod rng;
pub mod vector;

pub use errors::{ClusterError, ErrorInfo};
pub use graph::{Edge, GraphData, Node, PropertyBag, PropertyValue, DEFAULT_PROPERTY_KEY};
pub use rng::{derive_substream_seed, RngHandle};
pub use vector::Vector;
