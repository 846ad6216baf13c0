//! Parsing a dataset's vertex and edge lists.
//!
//! The two files are read completely before any graph is built, so the
//! graph can be constructed in one step from the collected node ids and
//! edge pairs.
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Node ids and edge pairs of a dataset, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGraph {
    pub nodes: Vec<i64>,
    pub edges: Vec<(i64, i64)>,
}

impl RawGraph {
    pub fn new(nodes: Vec<i64>, edges: Vec<(i64, i64)>) -> Self {
        Self { nodes, edges }
    }
    /// Number of vertex lines read. Duplicated ids are counted each time.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

pub fn vertices_path<P: AsRef<Path>>(dir: P, id: &str) -> PathBuf {
    dir.as_ref().join(format!("vertices_{}.txt", id))
}

pub fn edges_path<P: AsRef<Path>>(dir: P, id: &str) -> PathBuf {
    dir.as_ref().join(format!("edges_{}.txt", id))
}

/// Load dataset `id` from `dir`. The vertices file is parsed before the
/// edges file is even opened.
pub fn load<P: AsRef<Path>>(dir: P, id: &str) -> Result<RawGraph> {
    let vertices = vertices_path(&dir, id);
    let nodes = parse_vertices(open(&vertices)?, &vertices)?;
    debug!("{} nodes from {}", nodes.len(), vertices.display());
    let edges_file = edges_path(&dir, id);
    let edges = parse_edges(open(&edges_file)?, &edges_file)?;
    debug!("{} edges from {}", edges.len(), edges_file.display());
    Ok(RawGraph::new(nodes, edges))
}

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(ref e) if e.kind() == ErrorKind::NotFound => Err(Error::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(Error::ReadError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn read_lines<'a, R: BufRead + 'a>(
    reader: R,
    path: &'a Path,
) -> impl Iterator<Item = Result<(usize, String)>> + 'a {
    reader.lines().enumerate().map(move |(idx, line)| {
        line.map(|line| (idx + 1, line)).map_err(|source| Error::ReadError {
            path: path.to_path_buf(),
            source,
        })
    })
}

fn parse_id(token: &str, path: &Path, line: usize, content: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| Error::malformed(path, line, content, "not an integer"))
}

/// One node id per line; surrounding whitespace is ignored.
pub fn parse_vertices<R: BufRead>(reader: R, path: &Path) -> Result<Vec<i64>> {
    let mut nodes = vec![];
    for line in read_lines(reader, path) {
        let (num, line) = line?;
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(token), None) => nodes.push(parse_id(token, path, num, &line)?),
            (None, _) => return Err(Error::malformed(path, num, &line, "empty line")),
            (Some(_), Some(_)) => {
                return Err(Error::malformed(path, num, &line, "expected a single node id"))
            }
        }
    }
    Ok(nodes)
}

/// Exactly two whitespace separated node ids per line, kept in the order read.
pub fn parse_edges<R: BufRead>(reader: R, path: &Path) -> Result<Vec<(i64, i64)>> {
    let mut edges = vec![];
    for line in read_lines(reader, path) {
        let (num, line) = line?;
        let tokens: Vec<_> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(Error::malformed(path, num, &line, "expected two node ids"));
        }
        let from = parse_id(tokens[0], path, num, &line)?;
        let to = parse_id(tokens[1], path, num, &line)?;
        edges.push((from, to));
    }
    Ok(edges)
}
