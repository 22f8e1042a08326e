use log::warn;

use crate::error::{Error, Result};
use crate::frontend::token::{Token, TokenType};
use crate::graph::{Graph, MAX_NODES, Node};

pub struct Parser;

impl Parser {
    /// Builds the interference graph from a token stream, one entry per
    /// non-empty line. The first field of a line is the node, the remaining
    /// fields are its neighbors in the order written. A single trailing comma
    /// is tolerated; any other empty field is malformed.
    pub fn parse(tokens: &[Token]) -> Result<Graph> {
        let mut graph = Graph::new();

        let lines = tokens.split(|t| matches!(t.r#type, TokenType::Newline | TokenType::Eof));
        for line in lines {
            let Some(first) = line.first() else {
                continue;
            };
            let line_no = first.line;

            let mut fields = line.split(|t| t.r#type == TokenType::Comma);
            let head = fields.next().unwrap_or_default();
            let node = Self::number(head).ok_or_else(|| Error::MalformedNode {
                line: line_no,
                token: Self::lexeme(head),
            })?;

            let rest: Vec<&[Token]> = fields.collect();
            let mut neighbors = Vec::with_capacity(rest.len());
            for (i, field) in rest.iter().enumerate() {
                if field.is_empty() && i + 1 == rest.len() {
                    break;
                }
                let neighbor = Self::number(field).ok_or_else(|| Error::MalformedNeighbor {
                    line: line_no,
                    token: Self::lexeme(field),
                })?;
                neighbors.push(neighbor);
            }

            if !graph.insert(node, neighbors) {
                return Err(Error::DuplicateNode {
                    node,
                    line: line_no,
                });
            }
        }

        if graph.len() > MAX_NODES {
            warn!(
                "graph has {} nodes, more than the {} the input format allows",
                graph.len(),
                MAX_NODES
            );
        }

        Ok(graph)
    }

    fn number(field: &[Token]) -> Option<Node> {
        match field {
            [token] if token.r#type == TokenType::Digits => token.lexeme.parse().ok(),
            _ => None,
        }
    }

    fn lexeme(field: &[Token]) -> String {
        field.iter().map(|t| t.lexeme.as_str()).collect()
    }
}
