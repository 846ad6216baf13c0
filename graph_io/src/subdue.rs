//! Splitting a SUBDUE graph file into the vertex and edge lists the metric
//! tools read.
//!
//! Recognised records (tokens separated by whitespace, `%` starts a comment):
//! ```text
//! v <id> <label>
//! e <source> <target> <label>
//! d <source> <target> <label>
//! u <source> <target> <label>
//! ```
//! Labels are dropped and edge kinds are not distinguished. Anything else is
//! skipped.
use crate::loader::{edges_path, vertices_path, RawGraph};
use crate::writer::write_atomic;
use crate::{Error, Result};
use std::path::Path;

pub fn parse_graph(input: &str, path: &Path) -> Result<RawGraph> {
    let mut tokens = input.lines().enumerate().flat_map(|(idx, line)| {
        let line = match line.find('%') {
            Some(pos) => &line[..pos],
            None => line,
        };
        line.split_whitespace().map(move |token| (idx + 1, token))
    });
    let mut graph = RawGraph::default();
    while let Some((line, marker)) = tokens.next() {
        match marker {
            "v" => {
                let id = next_id(&mut tokens, path, line, marker)?;
                tokens.next();
                graph.nodes.push(id);
            }
            "e" | "d" | "u" => {
                let from = next_id(&mut tokens, path, line, marker)?;
                let to = next_id(&mut tokens, path, line, marker)?;
                tokens.next();
                graph.edges.push((from, to));
            }
            _ => {}
        }
    }
    Ok(graph)
}

fn next_id<'a, I>(tokens: &mut I, path: &Path, line: usize, marker: &str) -> Result<i64>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    match tokens.next() {
        Some((_, token)) => token.parse().map_err(|_| {
            let content = format!("{} {}", marker, token);
            Error::malformed(path, line, &content, "not an integer")
        }),
        None => Err(Error::malformed(path, line, marker, "record ends early")),
    }
}

/// Lines of a vertices or edges file, each newline terminated.
pub fn render(graph: &RawGraph) -> (String, String) {
    let vertices: String = graph.nodes.iter().map(|id| format!("{}\n", id)).collect();
    let edges: String = graph
        .edges
        .iter()
        .map(|(from, to)| format!("{} {}\n", from, to))
        .collect();
    (vertices, edges)
}

/// Read the SUBDUE file at `graph_file` and write `vertices_<id>.txt` and
/// `edges_<id>.txt` into `dir`.
pub fn split<P: AsRef<Path>, Q: AsRef<Path>>(graph_file: P, dir: Q, id: &str) -> Result<RawGraph> {
    let graph_file = graph_file.as_ref();
    let input = std::fs::read_to_string(graph_file).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: graph_file.to_path_buf(),
            }
        } else {
            Error::ReadError {
                path: graph_file.to_path_buf(),
                source,
            }
        }
    })?;
    let graph = parse_graph(&input, graph_file)?;
    let (vertices, edges) = render(&graph);
    write_atomic(&vertices_path(&dir, id), vertices.as_bytes())?;
    write_atomic(&edges_path(&dir, id), edges.as_bytes())?;
    info!(
        "{}: {} vertices, {} edges",
        graph_file.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    const GRAPH: &str = "% a small graph
v 1 A
v 2 B
v 3 C % trailing comment
e 1 2 x
d 2 3 y
u 3 1 z
XP
v 4 A
";
    #[test]
    fn records() {
        let graph = parse_graph(GRAPH, Path::new("g.g")).unwrap();
        assert_eq!(graph.nodes, vec![1, 2, 3, 4]);
        assert_eq!(graph.edges, vec![(1, 2), (2, 3), (3, 1)]);
    }
    #[test]
    fn rendering() {
        let graph = RawGraph::new(vec![1, 2], vec![(2, 1)]);
        let (vertices, edges) = render(&graph);
        assert_eq!(vertices, "1\n2\n");
        assert_eq!(edges, "2 1\n");
    }
    #[test]
    fn bad_records() {
        match parse_graph("v 1 A\nv x B\n", Path::new("g.g")) {
            Err(Error::MalformedLine { line, .. }) => assert_eq!(line, 2),
            x => panic!("{:?}", x),
        }
        match parse_graph("v 1 A\ne 1\n", Path::new("g.g")) {
            Err(Error::MalformedLine { .. }) => {}
            x => panic!("{:?}", x),
        }
    }
}
