use std::path::PathBuf;

use thiserror::Error;

use crate::graph::Node;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid character {character:?} at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: usize,
        column: usize,
    },
    #[error("malformed node id {token:?} at line {line}")]
    MalformedNode { line: usize, token: String },
    #[error("malformed neighbor id {token:?} at line {line}")]
    MalformedNeighbor { line: usize, token: String },
    #[error("node {node} is declared twice (again at line {line})")]
    DuplicateNode { node: Node, line: usize },
    #[error("cannot color node {node}: all 26 colors are used by its neighbors")]
    ColorExhaustion { node: Node },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn io_error(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.into();
    move |source| Error::Io { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_line() {
        let errors = [
            Error::InvalidCharacter {
                character: 'x',
                line: 1,
                column: 5,
            },
            Error::MalformedNode {
                line: 2,
                token: String::new(),
            },
            Error::MalformedNeighbor {
                line: 3,
                token: "99999999999".to_string(),
            },
            Error::DuplicateNode { node: 4, line: 7 },
            Error::ColorExhaustion { node: 27 },
            io_error("missing.txt")(std::io::Error::from(std::io::ErrorKind::NotFound)),
        ];

        for err in errors {
            assert!(!err.to_string().contains('\n'), "{}", err);
        }
    }

    #[test]
    fn test_invalid_character_message() {
        let err = Error::InvalidCharacter {
            character: 'x',
            line: 1,
            column: 5,
        };
        assert_eq!(err.to_string(), "invalid character 'x' at line 1, column 5");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = io_error("out/colors.txt")(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("cannot access out/colors.txt: "));
        assert!(err.source().is_some());
    }
}
