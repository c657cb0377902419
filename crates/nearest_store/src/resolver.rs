use log::{debug, info};

use crate::{
    catalog::CityCatalog,
    constants::{CityId, Weight},
    distance_index::DistanceIndex,
    error::Error,
    search::{self, dijkstra::Dijkstra, route::Route},
};

/// Finds the nearest store of a destination.
///
/// Catalog and index are only borrowed, every call to [`resolve`] starts a
/// fresh search so destinations do not influence each other.
///
/// [`resolve`]: NearestStoreResolver::resolve
pub struct NearestStoreResolver<'a> {
    catalog: &'a CityCatalog,
    index: &'a DistanceIndex,
}

impl<'a> NearestStoreResolver<'a> {
    pub fn new(catalog: &'a CityCatalog, index: &'a DistanceIndex) -> Result<Self, Error> {
        catalog.check_roads(index)?;
        Ok(NearestStoreResolver { catalog, index })
    }

    pub fn catalog(&self) -> &'a CityCatalog {
        self.catalog
    }

    pub fn resolve(&self, destination: &str) -> Result<Route, Error> {
        let mut dijkstra = Dijkstra::new(self.index);
        let tree = dijkstra.search(destination, self.catalog.cities())?;

        // Stores are sorted by id, the first one wins ties
        let mut nearest: Option<(&str, Weight)> = None;
        for store in self.catalog.stores() {
            if let Some(weight) = tree.weight(store) {
                if nearest.map_or(true, |(_, min)| weight < min) {
                    nearest = Some((store.as_str(), weight));
                }
            }
        }

        let (store, _) = nearest.ok_or_else(|| Error::PathNotFound(destination.to_string()))?;
        let route = search::reconstruct_path(store, &tree, self.index)
            .ok_or_else(|| Error::PathNotFound(destination.to_string()))?;

        debug!(
            "{} served by {} ({}), {}",
            destination, route.store, route.distance, dijkstra.stats
        );
        Ok(route)
    }

    /// Resolves every destination of the catalog in input order. A failed
    /// destination does not stop the others.
    pub fn resolve_all(&self) -> Vec<(CityId, Result<Route, Error>)> {
        let now = std::time::Instant::now();
        info!(
            "BEGIN resolving {} destinations",
            self.catalog.destinations().len()
        );

        let results: Vec<_> = self
            .catalog
            .destinations()
            .iter()
            .map(|destination| (destination.clone(), self.resolve(destination)))
            .collect();

        info!("FINISHED resolving. Took {:?}", now.elapsed());
        results
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use road_reader::{Arc, CityRecord, DestinationRecord};

    use super::*;
    use crate::{
        search::route::Hop,
        util::test_networks::{generate_complex_network, generate_simple_network},
    };

    fn catalog(cities: &[(&str, bool)], destinations: &[&str]) -> CityCatalog {
        let cities: Vec<_> = cities
            .iter()
            .map(|(id, is_store)| CityRecord {
                id: id.to_string(),
                is_store: *is_store,
            })
            .collect();
        let destinations: Vec<_> = destinations
            .iter()
            .map(|id| DestinationRecord {
                id: id.to_string(),
                included: true,
            })
            .collect();
        CityCatalog::new(&cities, &destinations).unwrap()
    }

    #[test]
    fn nearest_store_with_path() {
        let catalog = catalog(&[("A", true), ("B", false), ("C", false)], &["C"]);
        let index = DistanceIndex::from_arcs(&[Arc::new("A", "B", 4), Arc::new("B", "C", 2)]);
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        let route = resolver.resolve("C").unwrap();

        assert_eq!(route.store, "A");
        assert_eq!(route.distance, 6);
        assert_eq!(
            route.hops,
            vec![Hop::new("A", 4), Hop::new("B", 2), Hop::new("C", 0)]
        );
        assert_eq!(route.render_path(), "A -> 4 -> B -> 2");
    }

    #[test]
    fn no_store_reachable() {
        let catalog = catalog(&[("A", true), ("B", false), ("C", false)], &["C"]);
        let index = DistanceIndex::from_arcs(&[Arc::new("B", "C", 2)]);
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        let err = resolver.resolve("C").unwrap_err();

        assert!(matches!(&err, Error::PathNotFound(id) if id == "C"));
        assert_eq!(err.to_string(), "C: path not found");
    }

    #[test]
    fn no_stores_at_all() {
        let catalog = catalog(&[("A", false), ("B", false)], &["B"]);
        let index = DistanceIndex::from_arcs(&[Arc::new("A", "B", 2)]);
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        assert!(matches!(resolver.resolve("B"), Err(Error::PathNotFound(_))));
    }

    #[test]
    fn destination_is_store() {
        let (catalog, index) = generate_simple_network();
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        let route = resolver.resolve("D").unwrap();

        assert_eq!(route, Route::new("D", 0, vec![Hop::new("D", 0)]));
    }

    #[test]
    fn closer_store_wins() {
        let (catalog, index) = generate_complex_network();
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        let route = resolver.resolve("T1").unwrap();
        assert_eq!(route.store, "S1");
        assert_eq!(route.distance, 8);
        assert_eq!(route.render_path(), "S1 -> 3 -> A -> 2 -> B -> 3");

        // S2 is two away, S3 three via the shorter parallel segment
        let route = resolver.resolve("T2").unwrap();
        assert_eq!(route.store, "S2");
        assert_eq!(route.distance, 2);
    }

    #[test]
    fn parallel_segment_minimum_on_path() {
        let catalog = catalog(&[("S", true), ("T", false)], &["T"]);
        let index = DistanceIndex::from_arcs(&[
            Arc::new("S", "T", 3),
            Arc::new("S", "T", 7),
            Arc::new("S", "T", 5),
        ]);
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        let route = resolver.resolve("T").unwrap();
        assert_eq!(route.distance, 3);
        assert_eq!(route.render_path(), "S -> 3");
    }

    #[test]
    fn store_ties_go_to_lowest_id() {
        let catalog = catalog(&[("T", false), ("S2", true), ("S1", true)], &["T"]);
        let index = DistanceIndex::from_arcs(&[Arc::new("S2", "T", 4), Arc::new("S1", "T", 4)]);
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        assert_eq!(resolver.resolve("T").unwrap().store, "S1");
    }

    #[test]
    fn failure_does_not_stop_other_destinations() {
        let (catalog, index) = generate_complex_network();
        let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

        let results = resolver.resolve_all();
        let destinations: Vec<_> = results.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(destinations, ["T1", "T2", "T3"]);

        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_ok());
        assert!(matches!(&results[2].1, Err(Error::PathNotFound(id)) if id == "T3"));
    }

    #[test]
    fn unknown_road_city_is_rejected() {
        let catalog = catalog(&[("A", true)], &[]);
        let index = DistanceIndex::from_arcs(&[Arc::new("A", "Z", 1)]);

        assert!(matches!(
            NearestStoreResolver::new(&catalog, &index),
            Err(Error::UnknownCity(id)) if id == "Z"
        ));
    }

    fn network() -> impl Strategy<Value = (usize, Vec<bool>, Vec<Arc>)> {
        (1usize..10).prop_flat_map(|n| {
            let stores = prop::collection::vec(any::<bool>(), n);
            let arcs = prop::collection::vec((0..n, 0..n, 0u64..30), 0..30).prop_map(|arcs| {
                arcs.into_iter()
                    .map(|(s, t, d)| Arc::new(format!("{s}"), format!("{t}"), d))
                    .collect::<Vec<_>>()
            });
            (Just(n), stores, arcs)
        })
    }

    proptest! {
        #[test]
        fn proptest_route_is_valid_walk((n, stores, arcs) in network()) {
            let cities: Vec<CityRecord> = (0..n)
                .map(|i| CityRecord { id: format!("{i}"), is_store: stores[i] })
                .collect();
            let destinations: Vec<DestinationRecord> = (0..n)
                .map(|i| DestinationRecord { id: format!("{i}"), included: true })
                .collect();
            let catalog = CityCatalog::new(&cities, &destinations).unwrap();
            let index = DistanceIndex::from_arcs(&arcs);
            let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();

            for destination in catalog.destinations() {
                let Ok(route) = resolver.resolve(destination) else {
                    continue;
                };

                prop_assert!(catalog.is_store(&route.store));
                prop_assert_eq!(&route.hops[0].city, &route.store);
                prop_assert_eq!(route.destination(), Some(destination.as_str()));
                prop_assert_eq!(route.hops.last().map(|hop| hop.distance), Some(0));

                for pair in route.hops.windows(2) {
                    let hop = index.min_distance(&pair[1].city, &pair[0].city);
                    prop_assert_eq!(hop, Some(pair[0].distance));
                }
                let total: Weight = route.hops.iter().map(|hop| hop.distance).sum();
                prop_assert_eq!(total, route.distance);

                // Resolving again gives the same answer
                prop_assert_eq!(resolver.resolve(destination).unwrap(), route);
            }
        }
    }
}
