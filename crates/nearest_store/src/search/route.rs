use crate::constants::{CityId, Weight};

/// One city on a route with the distance to the next city.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Hop {
    pub city: CityId,
    pub distance: Weight,
}

impl Hop {
    pub fn new(city: impl Into<CityId>, distance: Weight) -> Self {
        Hop {
            city: city.into(),
            distance,
        }
    }
}

/// Route from the nearest store to a destination. The first hop is the
/// store, the last hop is the destination with distance 0.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Route {
    pub store: CityId,
    pub distance: Weight,
    pub hops: Vec<Hop>,
}

impl Route {
    pub fn new(store: impl Into<CityId>, distance: Weight, hops: Vec<Hop>) -> Self {
        Route {
            store: store.into(),
            distance,
            hops,
        }
    }

    pub fn destination(&self) -> Option<&str> {
        self.hops.last().map(|hop| hop.city.as_str())
    }

    /// `A -> 4 -> B -> 2` for the hops `A(4), B(2), C(0)`. The destination
    /// and its trailing zero are left out.
    pub fn render_path(&self) -> String {
        let n = self.hops.len().saturating_sub(1);
        self.hops[..n]
            .iter()
            .map(|hop| format!("{} -> {}", hop.city, hop.distance))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
