//! City, store and destination id sets of a road network.

use log::{info, warn};
use road_reader::{CityRecord, DestinationRecord};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{constants::CityId, distance_index::DistanceIndex, error::Error};

#[derive(Debug, Clone, Default)]
pub struct CityCatalog {
    /// All city ids, sorted ascending
    cities: Vec<CityId>,
    /// Store flag per city, parallel to `cities`
    is_store: Vec<bool>,
    position: FxHashMap<CityId, usize>,
    /// Store ids, sorted ascending
    stores: Vec<CityId>,
    /// Destination ids in input order
    destinations: Vec<CityId>,
}

impl CityCatalog {
    /// Builds the catalog from the raw city and destination records.
    ///
    /// Destination rows with a cleared flag are dropped. A city listed twice,
    /// a destination that is not a known city and a destination listed twice
    /// are rejected.
    pub fn new(cities: &[CityRecord], destinations: &[DestinationRecord]) -> Result<Self, Error> {
        let mut sorted: Vec<&CityRecord> = cities.iter().collect();
        sorted.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(Error::DuplicateCity(pair[0].id.clone()));
        }

        let mut catalog = CityCatalog::default();
        for (i, city) in sorted.into_iter().enumerate() {
            catalog.position.insert(city.id.clone(), i);
            catalog.cities.push(city.id.clone());
            catalog.is_store.push(city.is_store);
            if city.is_store {
                catalog.stores.push(city.id.clone());
            }
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for destination in destinations {
            if !destination.included {
                continue;
            }
            if !catalog.position.contains_key(&destination.id) {
                return Err(Error::UnknownDestination(destination.id.clone()));
            }
            if !seen.insert(destination.id.as_str()) {
                return Err(Error::DuplicateDestination(destination.id.clone()));
            }
            catalog.destinations.push(destination.id.clone());
        }

        if catalog.stores.is_empty() {
            warn!("Catalog contains no stores, no destination can be served");
        }
        info!(
            "Catalog has {} cities, {} stores and {} destinations",
            catalog.cities.len(),
            catalog.stores.len(),
            catalog.destinations.len()
        );

        Ok(catalog)
    }

    /// Every city referenced by a road segment must be listed.
    pub fn check_roads(&self, index: &DistanceIndex) -> Result<(), Error> {
        match index.cities().into_iter().find(|city| !self.contains(city)) {
            Some(unknown) => Err(Error::UnknownCity(unknown.to_string())),
            None => Ok(()),
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.position.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position.contains_key(id)
    }

    pub fn is_store(&self, id: &str) -> bool {
        self.position(id).map_or(false, |i| self.is_store[i])
    }

    pub fn is_destination(&self, id: &str) -> bool {
        self.destinations.iter().any(|destination| destination == id)
    }

    pub fn cities(&self) -> &[CityId] {
        &self.cities
    }

    pub fn stores(&self) -> &[CityId] {
        &self.stores
    }

    pub fn destinations(&self) -> &[CityId] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
