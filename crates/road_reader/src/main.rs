use std::path::Path;

use anyhow::Context;
use road_reader::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let now = std::time::Instant::now();
    // Read paths to the three record files from command line
    let mut args = std::env::args().skip(1);
    let (Some(cities), Some(destinations), Some(roads)) = (args.next(), args.next(), args.next())
    else {
        anyhow::bail!("Usage: road_reader <cities> <destinations> <roads>");
    };

    let records = RoadRecords::from_paths(
        Path::new(&cities),
        Path::new(&destinations),
        Path::new(&roads),
        &ReaderOptions::default(),
    )
    .context("Could not read road records")?;

    let elapsed = now.elapsed();

    println!(
        "Finished reading records in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    println!(
        "{} cities ({} stores), {} destination rows, {} road segments",
        records.cities.len(),
        records.num_stores(),
        records.destinations.len(),
        records.roads.len()
    );
    Ok(())
}
