use std::io::{self, Write};

use crate::{error::Error, search::route::Route};

/// Writes the report block of one destination, followed by a blank line.
///
/// ```text
/// C
/// store: A
/// distance: 6
/// path: A -> 4 -> B -> 2
/// ```
///
/// A failed destination is reported as its error message on a single line.
pub fn write_report<W: Write>(
    writer: &mut W,
    destination: &str,
    result: &Result<Route, Error>,
) -> io::Result<()> {
    match result {
        Ok(route) => {
            writeln!(writer, "{}", destination)?;
            writeln!(writer, "store: {}", route.store)?;
            writeln!(writer, "distance: {}", route.distance)?;
            match route.render_path().as_str() {
                "" => writeln!(writer, "path:")?,
                path => writeln!(writer, "path: {}", path)?,
            }
        }
        Err(err) => writeln!(writer, "{}", err)?,
    }
    writeln!(writer)
}
