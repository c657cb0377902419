use crate::constants::{CityId, Weight};
use anyhow::Context;
use log::info;
use road_reader::{Arc, ReaderOptions};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// Reverse adjacency of the road network.
///
/// Keyed by the target of a road segment, then by its source. Every
/// parallel segment between the same pair is kept and the distances of a
/// pair are sorted ascending, so position 0 always holds the shortest one.
#[derive(Debug, Clone, Default)]
pub struct DistanceIndex {
    incoming: FxHashMap<CityId, FxHashMap<CityId, Vec<Weight>>>,
    num_segments: usize,
}

impl DistanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_arcs(arcs: &[Arc]) -> Self {
        let mut index = DistanceIndex::new();
        for arc in arcs {
            index
                .incoming
                .entry(arc.target.clone())
                .or_default()
                .entry(arc.source.clone())
                .or_default()
                .push(arc.distance);
        }
        index.num_segments = arcs.len();

        for sources in index.incoming.values_mut() {
            for distances in sources.values_mut() {
                distances.sort_unstable();
            }
        }

        index
    }

    pub fn from_csv(path_to_roads: &Path, options: &ReaderOptions) -> anyhow::Result<Self> {
        info!("Parsing road segments: {:?}", path_to_roads);

        let arcs = road_reader::read_roads_from_path(path_to_roads, options)
            .context("Could not parse road segments")?;
        let index = DistanceIndex::from_arcs(&arcs);

        info!(
            "Index has {} target cities and {} road segments",
            index.num_targets(),
            index.num_segments()
        );
        Ok(index)
    }

    /// Cities with a direct segment into `target`, together with every
    /// parallel distance of that segment (ascending).
    pub fn incoming(&self, target: &str) -> impl Iterator<Item = (&str, &[Weight])> + '_ {
        self.incoming
            .get(target)
            .into_iter()
            .flat_map(|sources| sources.iter())
            .map(|(source, distances)| (source.as_str(), distances.as_slice()))
    }

    pub fn distances(&self, target: &str, source: &str) -> Option<&[Weight]> {
        self.incoming
            .get(target)?
            .get(source)
            .map(|distances| distances.as_slice())
    }

    /// Shortest of the parallel segments `source -> target`
    pub fn min_distance(&self, target: &str, source: &str) -> Option<Weight> {
        self.distances(target, source)?.first().copied()
    }

    /// Number of distinct cities feeding into `target`
    pub fn in_degree(&self, target: &str) -> usize {
        self.incoming.get(target).map_or(0, |sources| sources.len())
    }

    /// Every city mentioned by a road segment, sorted by id.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: FxHashSet<&str> = FxHashSet::default();
        for (target, sources) in self.incoming.iter() {
            cities.insert(target.as_str());
            cities.extend(sources.keys().map(|source| source.as_str()));
        }
        let mut cities: Vec<&str> = cities.into_iter().collect();
        cities.sort_unstable();
        cities
    }

    pub fn num_targets(&self) -> usize {
        self.incoming.len()
    }

    pub fn num_segments(&self) -> usize {
        self.num_segments
    }
}
