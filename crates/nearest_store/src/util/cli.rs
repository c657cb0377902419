use std::path::PathBuf;

use clap::Parser;
use road_reader::ReaderOptions;

#[derive(Parser, Debug)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the city list (`id,store_flag` per line)
    cities: PathBuf,

    /// Path to the destination list (`id,destination_flag` per line)
    destinations: PathBuf,

    /// Path to the road segments (`source,target,distance` per line)
    roads: PathBuf,

    /// Field delimiter of all three files
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Skip lines starting with this character
    #[arg(short, long)]
    comment: Option<char>,

    /// Treat the first line of every file as a header
    #[arg(long, default_value = "false")]
    headers: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "file")]
    output: Option<PathBuf>,

    /// Print in-degree statistics of the road network
    #[arg(short, long)]
    stats: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub cities: PathBuf,
    pub destinations: PathBuf,
    pub roads: PathBuf,
    pub output: Option<PathBuf>,
    pub reader_options: ReaderOptions,
    pub stats: bool,
}

pub fn parse() -> anyhow::Result<Cfg> {
    Cfg::from_cli(Cli::parse())
}

impl Cfg {
    fn from_cli(cli: Cli) -> anyhow::Result<Cfg> {
        if !cli.delimiter.is_ascii() {
            anyhow::bail!("Delimiter must be a single ASCII character");
        }
        if matches!(cli.comment, Some(c) if !c.is_ascii()) {
            anyhow::bail!("Comment must be a single ASCII character");
        }

        Ok(Cfg {
            cities: cli.cities,
            destinations: cli.destinations,
            roads: cli.roads,
            output: cli.output,
            reader_options: ReaderOptions::new()
                .delimiter(cli.delimiter as u8)
                .comment(cli.comment.map(|c| c as u8))
                .has_headers(cli.headers),
            stats: cli.stats,
        })
    }
}
