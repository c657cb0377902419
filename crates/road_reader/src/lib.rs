use log::info;
use serde::{de::DeserializeOwned, Deserialize};
use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Distance of a single road segment
pub type Distance = u64;

/// A directed road segment `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Arc {
    pub source: String,
    pub target: String,
    pub distance: Distance,
}

impl Arc {
    pub fn new(source: impl Into<String>, target: impl Into<String>, distance: Distance) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    pub id: String,
    pub is_store: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationRecord {
    pub id: String,
    pub included: bool,
}

/// Row layout shared by the city and the destination list: an id followed
/// by an optional flag.
#[derive(Debug, Deserialize)]
struct FlaggedRow {
    id: String,
    #[serde(default)]
    flag: Option<String>,
}

impl FlaggedRow {
    /// `"0"` clears the flag, any other value sets it. A missing flag is
    /// treated as cleared.
    fn is_set(&self) -> bool {
        matches!(self.flag.as_deref(), Some(flag) if flag != "0")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    City,
    Destination,
    Road,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::City => write!(f, "city"),
            RecordKind::Destination => write!(f, "destination"),
            RecordKind::Road => write!(f, "road"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {kind} record on line {line}")]
    Malformed {
        kind: RecordKind,
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("{kind} record on line {line} is missing the `{field}` field")]
    MissingField {
        kind: RecordKind,
        line: u64,
        field: &'static str,
    },
    #[error("{kind} record on line {line} has {found} fields, expected at most {max}")]
    TooManyFields {
        kind: RecordKind,
        line: u64,
        found: usize,
        max: usize,
    },
}

/// Options shared by all three readers. No comment syntax is recognised
/// unless one is set with [`ReaderOptions::comment`].
#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    delimiter: u8,
    comment: Option<u8>,
    has_headers: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: None,
            has_headers: false,
        }
    }
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    fn reader<R: Read>(&self, rdr: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .comment(self.comment)
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr)
    }
}

/// Deserializes every row of `rdr`. The first malformed row aborts the read,
/// as does a row with more than `max_fields` fields.
fn read_rows<R: Read, T: DeserializeOwned>(
    rdr: R,
    options: &ReaderOptions,
    kind: RecordKind,
    max_fields: usize,
) -> Result<Vec<(u64, T)>, ParseError> {
    let mut reader = options.reader(rdr);
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|source| ParseError::Malformed {
            kind,
            line: source.position().map_or(0, |pos| pos.line()),
            source,
        })?;
        let line = record.position().map_or(0, |pos| pos.line());
        if record.len() > max_fields {
            return Err(ParseError::TooManyFields {
                kind,
                line,
                found: record.len(),
                max: max_fields,
            });
        }
        let row = record
            .deserialize(None)
            .map_err(|source| ParseError::Malformed { kind, line, source })?;
        rows.push((line, row));
    }

    Ok(rows)
}

fn read_flagged<R: Read>(
    rdr: R,
    options: &ReaderOptions,
    kind: RecordKind,
) -> Result<Vec<(String, bool)>, ParseError> {
    read_rows::<_, FlaggedRow>(rdr, options, kind, 2)?
        .into_iter()
        .map(|(line, row)| {
            if row.id.is_empty() {
                return Err(ParseError::MissingField {
                    kind,
                    line,
                    field: "id",
                });
            }
            let is_set = row.is_set();
            Ok((row.id, is_set))
        })
        .collect()
}

/// Reads the city list: `id[,store_flag]` per line.
pub fn read_cities<R: Read>(rdr: R, options: &ReaderOptions) -> Result<Vec<CityRecord>, ParseError> {
    Ok(read_flagged(rdr, options, RecordKind::City)?
        .into_iter()
        .map(|(id, is_store)| CityRecord { id, is_store })
        .collect())
}

/// Reads the destination list: `id[,destination_flag]` per line.
pub fn read_destinations<R: Read>(
    rdr: R,
    options: &ReaderOptions,
) -> Result<Vec<DestinationRecord>, ParseError> {
    Ok(read_flagged(rdr, options, RecordKind::Destination)?
        .into_iter()
        .map(|(id, included)| DestinationRecord { id, included })
        .collect())
}

/// Reads the road segment list: `source,target,distance` per line.
/// Parallel segments are all kept.
pub fn read_roads<R: Read>(rdr: R, options: &ReaderOptions) -> Result<Vec<Arc>, ParseError> {
    read_rows::<_, Arc>(rdr, options, RecordKind::Road, 3)?
        .into_iter()
        .map(|(line, arc)| {
            let missing = if arc.source.is_empty() {
                Some("source")
            } else if arc.target.is_empty() {
                Some("target")
            } else {
                None
            };
            match missing {
                Some(field) => Err(ParseError::MissingField {
                    kind: RecordKind::Road,
                    line,
                    field,
                }),
                None => Ok(arc),
            }
        })
        .collect()
}

fn open(path: &Path) -> Result<BufReader<File>, ParseError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })
}

pub fn read_roads_from_path(path: &Path, options: &ReaderOptions) -> Result<Vec<Arc>, ParseError> {
    read_roads(open(path)?, options)
}

/// The three raw input records of a road network.
#[derive(Debug, Clone, Default)]
pub struct RoadRecords {
    pub cities: Vec<CityRecord>,
    pub destinations: Vec<DestinationRecord>,
    pub roads: Vec<Arc>,
}

impl RoadRecords {
    pub fn from_paths(
        cities: &Path,
        destinations: &Path,
        roads: &Path,
        options: &ReaderOptions,
    ) -> Result<RoadRecords, ParseError> {
        let now = std::time::Instant::now();
        info!("BEGIN reading {}", cities.display());
        let cities = read_cities(open(cities)?, options)?;

        info!("BEGIN reading {}", destinations.display());
        let destinations = read_destinations(open(destinations)?, options)?;

        info!("BEGIN reading {}", roads.display());
        let roads = read_roads(open(roads)?, options)?;
        info!("FINISHED reading records. Took {:?}", now.elapsed());

        Ok(RoadRecords {
            cities,
            destinations,
            roads,
        })
    }

    pub fn num_stores(&self) -> usize {
        self.cities.iter().filter(|city| city.is_store).count()
    }
}
