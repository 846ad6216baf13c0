//! Sliding window of one metric over consecutive partitions.
//!
//! The window lives in a text file with one `<partition> <value>` line per
//! partition, oldest first, values written with six fractional digits. Once
//! it holds `window` entries, adding one drops the oldest. A metric value is
//! flagged when it lies more than one standard deviation above the mean of
//! the window it was just added to.
use crate::loader::{open, read_lines};
use crate::writer::write_atomic;
use crate::{Error, Result};
use std::io::BufRead;
use std::path::Path;

/// Digits after the decimal point of a stored value.
pub const VALUE_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub partition: u64,
    pub value: f64,
}

/// Statistics of a window right after an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    pub mean: f64,
    pub std_dev: f64,
    pub exceeded: bool,
}

/// Blank lines are skipped; anything else must be `<partition> <value>`.
pub fn parse<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Entry>> {
    let mut entries = vec![];
    for line in read_lines(reader, path) {
        let (num, line) = line?;
        let tokens: Vec<_> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [partition, value] => {
                let partition = partition
                    .parse()
                    .map_err(|_| Error::malformed(path, num, &line, "partition is not an integer"))?;
                let value = value
                    .parse()
                    .map_err(|_| Error::malformed(path, num, &line, "value is not a number"))?;
                entries.push(Entry { partition, value });
            }
            _ => return Err(Error::malformed(path, num, &line, "expected a partition and a value")),
        }
    }
    Ok(entries)
}

/// Entries of the window file, empty when the file does not exist yet.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    match open(path) {
        Ok(reader) => parse(reader, path),
        Err(Error::FileNotFound { .. }) => Ok(vec![]),
        Err(e) => Err(e),
    }
}

pub fn render(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} {:.*}\n", e.partition, VALUE_PRECISION, e.value))
        .collect()
}

/// Appends `entry`, drops the oldest entries beyond `window` and rewrites
/// the file. Returns the window as stored, values rounded.
pub fn push<P: AsRef<Path>>(path: P, entry: Entry, window: usize) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let mut entries = read(path)?;
    entries.push(entry);
    if entries.len() > window {
        let excess = entries.len() - window;
        entries.drain(..excess);
    }
    let contents = render(&entries);
    write_atomic(path, contents.as_bytes())?;
    debug!("{}: {} entries", path.display(), entries.len());
    parse(contents.as_bytes(), path)
}

/// Mean of the values, 0 for an empty window.
pub fn mean(entries: &[Entry]) -> f64 {
    if entries.is_empty() {
        return 0.;
    }
    entries.iter().map(|e| e.value).sum::<f64>() / entries.len() as f64
}

/// Population standard deviation around `mean`, 0 for an empty window.
pub fn std_dev(entries: &[Entry], mean: f64) -> f64 {
    if entries.is_empty() {
        return 0.;
    }
    let squares: f64 = entries.iter().map(|e| (e.value - mean).powi(2)).sum();
    (squares / entries.len() as f64).sqrt()
}

/// Strictly more than one standard deviation above the mean.
pub fn exceeds(value: f64, mean: f64, std_dev: f64) -> bool {
    value - mean > std_dev
}

/// Adds `entry` to the window in `path`, then tests its value against the
/// updated window.
pub fn update<P: AsRef<Path>>(path: P, entry: Entry, window: usize) -> Result<Deviation> {
    let entries = push(path, entry, window)?;
    let mean = mean(&entries);
    let std_dev = std_dev(&entries, mean);
    Ok(Deviation {
        mean,
        std_dev,
        exceeded: exceeds(entry.value, mean, std_dev),
    })
}

/// Number of flagged metrics.
pub fn count_exceeded(deviations: &[Deviation]) -> usize {
    deviations.iter().filter(|d| d.exceeded).count()
}
