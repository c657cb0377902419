use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use histogram::Histogram;

use crate::{catalog::CityCatalog, distance_index::DistanceIndex};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} edges relaxed in {:?}",
            self.nodes_settled, self.edges_relaxed, self.duration
        )
    }
}

/// Histogram over the number of distinct cities feeding into each city.
pub fn in_degree_hist(index: &DistanceIndex, catalog: &CityCatalog) -> anyhow::Result<Histogram> {
    let hist = Histogram::new(0, 10, 30).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for city in catalog.cities() {
        let degree = index.in_degree(city);
        hist.increment(degree as u64, 1)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(hist)
}

pub fn average_in_degree(index: &DistanceIndex, catalog: &CityCatalog) -> f64 {
    if catalog.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    for city in catalog.cities() {
        sum += index.in_degree(city) as f64;
    }
    sum / catalog.len() as f64
}
