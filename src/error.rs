use std::fmt;

use thiserror::Error;

use crate::course::PageId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Previous => f.write_str("previous"),
            Direction::Next => f.write_str("next"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("section not found: {0}")]
    SectionNotFound(String),

    #[error("page {0} is used by more than one section")]
    DuplicatePage(PageId),

    #[error("section link points at unknown page {0}")]
    MissingPage(PageId),

    /// The page chain loops back on itself.
    #[error("{direction} chain starting at page {from} does not terminate")]
    CorruptChain { from: PageId, direction: Direction },

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
