//! Re-exports of the most commonly used items in `nearest_store`.
pub use crate::catalog::CityCatalog;
pub use crate::distance_index::DistanceIndex;
pub use crate::error::Error;
pub use crate::resolver::NearestStoreResolver;

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::route::{Hop, Route};

pub use crate::util::test_networks::generate_simple_network;
