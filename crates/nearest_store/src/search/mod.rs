use crate::{distance_index::DistanceIndex, search::dijkstra::SearchTree};

use self::route::{Hop, Route};

pub mod dijkstra;
pub mod route;

/// Walks the predecessor chain from `store` back to the origin of the search.
///
/// The search runs against the road direction, so the predecessor `prev`
/// of a city `cur` is the next city on the road and the hop distance is the
/// shortest segment `cur -> prev`.
pub fn reconstruct_path(store: &str, tree: &SearchTree, index: &DistanceIndex) -> Option<Route> {
    let distance = tree.weight(store)?;

    let mut hops = Vec::new();
    let mut current = store;
    while let Some(prev) = tree.predecessor(current) {
        hops.push(Hop::new(current, index.min_distance(prev, current)?));
        current = prev;
    }
    if current != tree.origin() {
        return None;
    }
    hops.push(Hop::new(current, 0));

    Some(Route::new(store, distance, hops))
}
