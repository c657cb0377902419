use road_reader::{Arc, CityRecord, DestinationRecord};

use crate::{catalog::CityCatalog, distance_index::DistanceIndex};

fn city(id: &str, is_store: bool) -> CityRecord {
    CityRecord {
        id: id.to_string(),
        is_store,
    }
}

fn destination(id: &str) -> DestinationRecord {
    DestinationRecord {
        id: id.to_string(),
        included: true,
    }
}

pub fn generate_simple_network() -> (CityCatalog, DistanceIndex) {
    // A* -4-> B -2-> C -1-> D*
    let cities = [
        city("A", true),
        city("B", false),
        city("C", false),
        city("D", true),
    ];
    let index = DistanceIndex::from_arcs(&[
        Arc::new("A", "B", 4),
        Arc::new("B", "C", 2),
        Arc::new("C", "D", 1),
    ]);

    let catalog = CityCatalog::new(&cities, &[destination("C"), destination("B")])
        .expect("simple network is well formed");
    (catalog, index)
}

pub fn generate_complex_network() -> (CityCatalog, DistanceIndex) {
    //  S1*  -3-> A -2-> B -3-> T1
    //   |         ^      |
    //   5         1      4
    //   v         |      v
    //   C  -1->   D -6-> T2 <-2- S2*
    //                    ^
    //  S3* -7-> E -1-----'   (S3 -> E twice: 7 and 2)
    let cities = [
        city("A", false),
        city("B", false),
        city("C", false),
        city("D", false),
        city("E", false),
        city("S1", true),
        city("S2", true),
        city("S3", true),
        city("T1", false),
        city("T2", false),
        city("T3", false),
    ];
    let index = DistanceIndex::from_arcs(&[
        Arc::new("S1", "A", 3),
        Arc::new("A", "B", 2),
        Arc::new("B", "T1", 3),
        Arc::new("S1", "C", 5),
        Arc::new("C", "D", 1),
        Arc::new("D", "A", 1),
        Arc::new("B", "T2", 4),
        Arc::new("D", "T2", 6),
        Arc::new("S2", "T2", 2),
        Arc::new("S3", "E", 7),
        Arc::new("S3", "E", 2),
        Arc::new("E", "T2", 1),
        Arc::new("T3", "A", 1),
    ]);

    let catalog = CityCatalog::new(
        &cities,
        &[destination("T1"), destination("T2"), destination("T3")],
    )
    .expect("complex network is well formed");
    (catalog, index)
}
