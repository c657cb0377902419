use crate::constants::{CityId, Weight, INFINITY};
use crate::distance_index::DistanceIndex;
use crate::error::Error;
use crate::statistics::SearchStats;
use log::debug;
use rustc_hash::FxHashMap;

/// Transient state of one city during a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub weight: Weight,
    pub visited: bool,
    /// Position of the predecessor in the same arena
    pub predecessor: Option<usize>,
}

impl Default for SearchNode {
    fn default() -> Self {
        SearchNode {
            weight: INFINITY,
            visited: false,
            predecessor: None,
        }
    }
}

/// Result of a search: the minimum distance tree rooted at the origin.
#[derive(Debug, Clone)]
pub struct SearchTree<'a> {
    origin: usize,
    cities: &'a [CityId],
    position: FxHashMap<&'a str, usize>,
    nodes: Vec<SearchNode>,
}

impl<'a> SearchTree<'a> {
    pub fn origin(&self) -> &'a str {
        &self.cities[self.origin]
    }

    pub fn node(&self, id: &str) -> Option<&SearchNode> {
        self.position.get(id).map(|&i| &self.nodes[i])
    }

    /// Distance from `id` to the origin, `None` if `id` cannot reach it.
    pub fn weight(&self, id: &str) -> Option<Weight> {
        self.node(id)
            .map(|node| node.weight)
            .filter(|&weight| weight != INFINITY)
    }

    pub fn predecessor(&self, id: &str) -> Option<&'a str> {
        let i = self.node(id)?.predecessor?;
        Some(self.cities[i].as_str())
    }

    pub fn is_reachable(&self, id: &str) -> bool {
        self.weight(id).is_some()
    }

    /// Number of cities that can reach the origin, the origin included
    pub fn reachable(&self) -> usize {
        self.nodes.iter().filter(|node| node.weight != INFINITY).count()
    }
}

/// Dijkstra over the reverse index: starting at a destination it follows
/// road segments backward to every city that can reach it.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    index: &'a DistanceIndex,
}

impl<'a> Dijkstra<'a> {
    pub fn new(index: &'a DistanceIndex) -> Self {
        Dijkstra {
            index,
            stats: SearchStats::default(),
        }
    }

    /// Computes the distance of every city in `cities` to `origin`.
    ///
    /// The arena is indexed by position in `cities`. Selection scans it
    /// linearly and takes the first strictly smaller weight, so ties are won
    /// by the city listed first. Sources missing from `cities` are ignored.
    pub fn search<'c>(&mut self, origin: &str, cities: &'c [CityId]) -> Result<SearchTree<'c>, Error> {
        self.stats.init();

        let position: FxHashMap<&str, usize> = cities
            .iter()
            .enumerate()
            .map(|(i, city)| (city.as_str(), i))
            .collect();
        let origin = *position
            .get(origin)
            .ok_or_else(|| Error::UnknownCity(origin.to_string()))?;

        let mut nodes = vec![SearchNode::default(); cities.len()];
        nodes[origin].weight = 0;

        while let Some(current) = next_unvisited(&nodes) {
            self.stats.nodes_settled += 1;
            nodes[current].visited = true;
            let weight = nodes[current].weight;

            for (source, distances) in self.index.incoming(&cities[current]) {
                let (Some(&next), Some(&distance)) = (position.get(source), distances.first())
                else {
                    continue;
                };
                if nodes[next].visited {
                    continue;
                }

                self.stats.edges_relaxed += 1;
                let candidate = weight.saturating_add(distance);
                if candidate < nodes[next].weight {
                    nodes[next].weight = candidate;
                    nodes[next].predecessor = Some(current);
                }
            }
        }
        self.stats.finish();

        debug!("Search from {}: {}", cities[origin], self.stats);

        Ok(SearchTree {
            origin,
            cities,
            position,
            nodes,
        })
    }
}

/// Unvisited node with the smallest finite weight, first one wins ties.
fn next_unvisited(nodes: &[SearchNode]) -> Option<usize> {
    let mut min: Option<usize> = None;
    for (i, node) in nodes.iter().enumerate() {
        if node.visited || node.weight == INFINITY {
            continue;
        }
        if min.map_or(true, |m| node.weight < nodes[m].weight) {
            min = Some(i);
        }
    }
    min
}
