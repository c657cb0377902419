//! Crate to find the nearest store of every delivery destination in a
//! directed road network.
//!
//! # Basic usage
//! ```
//! use nearest_store::prelude::*;
//! use road_reader::{Arc, CityRecord, DestinationRecord};
//!
//! let cities = [
//!     CityRecord { id: "A".to_string(), is_store: true },
//!     CityRecord { id: "B".to_string(), is_store: false },
//!     CityRecord { id: "C".to_string(), is_store: false },
//! ];
//! let destinations = [DestinationRecord { id: "C".to_string(), included: true }];
//!
//! let catalog = CityCatalog::new(&cities, &destinations).unwrap();
//! let index = DistanceIndex::from_arcs(&[Arc::new("A", "B", 4), Arc::new("B", "C", 2)]);
//!
//! let resolver = NearestStoreResolver::new(&catalog, &index).unwrap();
//! let route = resolver.resolve("C").unwrap();
//!
//! assert_eq!(route.store, "A");
//! assert_eq!(route.distance, 6);
//! assert_eq!(route.render_path(), "A -> 4 -> B -> 2");
//! ```
use std::io::Write;

use anyhow::Context;
use indicatif::ProgressBar;
use log::warn;
use road_reader::RoadRecords;

pub mod catalog;
pub mod constants;
pub mod distance_index;
pub mod error;
pub mod prelude;
pub mod report;
pub mod resolver;
pub mod search;
pub mod statistics;
pub mod util;

use crate::{
    catalog::CityCatalog, distance_index::DistanceIndex, error::Error,
    resolver::NearestStoreResolver,
};

/// Outcome counts of a full run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub resolved: usize,
    pub not_found: usize,
}

/// Builds catalog and index from the raw records.
pub fn build(records: &RoadRecords) -> anyhow::Result<(CityCatalog, DistanceIndex)> {
    let catalog = CityCatalog::new(&records.cities, &records.destinations)
        .context("Invalid city or destination list")?;
    let index = DistanceIndex::from_arcs(&records.roads);
    Ok((catalog, index))
}

/// Resolves every destination in input order and writes its report block.
///
/// A destination without reachable store is reported and skipped, any other
/// error aborts the run.
pub fn write_reports<W: Write>(
    resolver: &NearestStoreResolver,
    writer: &mut W,
    progress: &ProgressBar,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for destination in resolver.catalog().destinations() {
        let result = match resolver.resolve(destination) {
            Ok(route) => {
                summary.resolved += 1;
                Ok(route)
            }
            Err(err @ Error::PathNotFound(_)) => {
                warn!("{}", err);
                summary.not_found += 1;
                Err(err)
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Could not resolve {}", destination))
            }
        };
        report::write_report(writer, destination, &result)?;
        progress.inc(1);
    }

    Ok(summary)
}
