//! DIMACS graph reader.
//!
//! Accepts the clique/coloring benchmark format:
//!
//! ```text
//! c comment
//! p col 4 3
//! e 1 2
//! e 2 3
//! e 3 4
//! ```
//!
//! Vertices are 1-indexed in the file and 0-indexed in the returned
//! [`Graph`]. The `p` line may omit the format word (`p 4 3`).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::types::{Graph, GraphError};

/// Failure while reading a DIMACS file.
#[derive(Debug, Error)]
pub enum DimacsError {
    /// The underlying reader failed.
    #[error("cannot read graph: {0}")]
    Io(#[from] std::io::Error),

    /// No `p` line was found.
    #[error("missing `p` header line")]
    MissingHeader,

    /// A second `p` line.
    #[error("line {line}: duplicate `p` header")]
    DuplicateHeader { line: usize },

    /// A token that should be a non-negative integer is not.
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },

    /// Unknown line kind or missing fields.
    #[error("line {line}: malformed line")]
    MalformedLine { line: usize },

    /// An `e` line precedes the header.
    #[error("line {line}: edge before `p` header")]
    EdgeBeforeHeader { line: usize },

    /// The header or an edge is invalid for the graph (line 0 when not tied to one line).
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

/// Reads a DIMACS graph from a file path.
pub fn read_path(path: impl AsRef<Path>) -> Result<Graph, DimacsError> {
    let file = File::open(path)?;
    read(BufReader::new(file))
}

/// Parses a DIMACS graph held in memory.
pub fn parse_str(text: &str) -> Result<Graph, DimacsError> {
    read(text.as_bytes())
}

/// Reads a DIMACS graph from any buffered reader.
///
/// # Errors
///
/// See [`DimacsError`]. Self-loops are skipped with a warning rather than
/// rejected; a declared edge count that disagrees with the edge lines is
/// only logged.
pub fn read<R: BufRead>(reader: R) -> Result<Graph, DimacsError> {
    let mut header: Option<(usize, usize)> = None;
    let mut edges = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            None => continue,
            Some(t) if t.starts_with('c') => continue,
            Some("p") => {
                if header.is_some() {
                    return Err(DimacsError::DuplicateHeader { line: lineno });
                }
                let rest: Vec<&str> = tokens.collect();
                let numbers = match rest.as_slice() {
                    [n, m] => [*n, *m],
                    [_format, n, m, ..] => [*n, *m],
                    _ => return Err(DimacsError::MalformedLine { line: lineno }),
                };
                let n = parse_number(numbers[0], lineno)?;
                let m = parse_number(numbers[1], lineno)?;
                Graph::check_size(n).map_err(|source| DimacsError::Graph {
                    line: lineno,
                    source,
                })?;
                header = Some((n, m));
            }
            Some("e") => {
                let (n, _) = header.ok_or(DimacsError::EdgeBeforeHeader { line: lineno })?;
                let (u, v) = match (tokens.next(), tokens.next()) {
                    (Some(u), Some(v)) => (parse_number(u, lineno)?, parse_number(v, lineno)?),
                    _ => return Err(DimacsError::MalformedLine { line: lineno }),
                };
                for w in [u, v] {
                    if w == 0 || w > n {
                        return Err(DimacsError::Graph {
                            line: lineno,
                            source: GraphError::VertexOutOfRange {
                                vertex: w,
                                vertex_count: n,
                            },
                        });
                    }
                }
                if u == v {
                    log::warn!("line {lineno}: skipping self-loop on vertex {u}");
                    continue;
                }
                edges.push((u - 1, v - 1));
            }
            Some(_) => return Err(DimacsError::MalformedLine { line: lineno }),
        }
    }

    let (n, declared) = header.ok_or(DimacsError::MissingHeader)?;
    if declared != edges.len() {
        log::warn!(
            "header declares {declared} edges, found {} edge lines",
            edges.len()
        );
    }
    // Endpoints are range-checked above; only duplicates remain to collapse.
    Graph::from_edges(n, &edges).map_err(|source| DimacsError::Graph { line: 0, source })
}

fn parse_number(token: &str, line: usize) -> Result<usize, DimacsError> {
    token.parse().map_err(|_| DimacsError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}
