use std::{
    fs::File,
    io::{self, BufWriter, Write},
    time::Instant,
};

use anyhow::Context;
use indicatif::ProgressBar;
use log::info;
use nearest_store::{
    prelude::*,
    statistics::{average_in_degree, in_degree_hist},
    util::cli,
    write_reports,
};
use road_reader::RoadRecords;

fn print_stats(index: &DistanceIndex, catalog: &CityCatalog) -> anyhow::Result<()> {
    eprintln!(
        "Network:\t#Cities: {}, #Stores: {}, #Segments: {}",
        catalog.len(),
        catalog.stores().len(),
        index.num_segments()
    );
    eprintln!(
        "Average in-degree: {:.2}",
        average_in_degree(index, catalog)
    );

    let hist = in_degree_hist(index, catalog)?;
    for bucket in hist.into_iter().filter(|b| b.count() > 0) {
        eprintln!("[{}-{}]: {}", bucket.low(), bucket.high(), bucket.count());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse()?;
    let now = Instant::now();

    let records = RoadRecords::from_paths(
        &cfg.cities,
        &cfg.destinations,
        &cfg.roads,
        &cfg.reader_options,
    )
    .context("Could not read input records")?;

    let (catalog, index) = nearest_store::build(&records)?;
    if cfg.stats {
        print_stats(&index, &catalog)?;
    }

    let resolver = NearestStoreResolver::new(&catalog, &index).context("Invalid road segments")?;
    let progress = ProgressBar::new(catalog.destinations().len() as u64);

    let summary = match &cfg.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let summary = write_reports(&resolver, &mut writer, &progress)?;
            writer.flush()?;
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let summary = write_reports(&resolver, &mut writer, &progress)?;
            writer.flush()?;
            summary
        }
    };
    progress.finish_and_clear();

    info!(
        "{} destinations served, {} without reachable store. Took {:?}",
        summary.resolved,
        summary.not_found,
        now.elapsed()
    );
    Ok(())
}
