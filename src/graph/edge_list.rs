//! Plain-text edge lists.
//!
//! ```text
//! # vertex count, then one `source destination weight` triple per line
//! 4
//! 0 1 3
//! 0 2 1
//! ```

use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{MutableGraph, Weight};
use crate::{Error, Result};

/// Reads a graph in edge-list format.
///
/// Blank lines and lines starting with `#` are ignored. The first remaining
/// line holds the vertex count; every following line is an edge.
pub fn read_edge_list<W, R>(reader: R) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
    W::Err: Display,
    R: BufRead,
{
    let mut graph: Option<DirectedGraph<W>> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = content.split_whitespace().collect();
        match graph.as_mut() {
            None => {
                if tokens.len() != 1 {
                    return Err(parse_error(line_no, "expected a single vertex count"));
                }
                let vertices = parse_index(tokens[0], line_no)?;
                graph = Some(DirectedGraph::with_capacity(vertices));
            }
            Some(graph) => {
                if tokens.len() != 3 {
                    return Err(parse_error(
                        line_no,
                        format!("expected `source destination weight`, got {} fields", tokens.len()),
                    ));
                }
                let from = parse_index(tokens[0], line_no)?;
                let to = parse_index(tokens[1], line_no)?;
                let weight = tokens[2]
                    .parse::<W>()
                    .map_err(|e| parse_error(line_no, format!("bad weight `{}`: {}", tokens[2], e)))?;
                graph.add_edge(from, to, weight).map_err(|e| parse_error(line_no, e.to_string()))?;
            }
        }
    }

    graph.ok_or_else(|| parse_error(0, "missing vertex count"))
}

/// Parses an edge list held in memory
pub fn parse_edge_list<W>(text: &str) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    read_edge_list(text.as_bytes())
}

fn parse_index(token: &str, line: usize) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|e| parse_error(line, format!("bad vertex `{}`: {}", token, e)))
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse { line, message: message.into() }
}
