use std::{error::Error, fmt};

pub mod tree_map;

pub use tree_map::{Comparator, Natural, Partial, Reverse, TreeMap};

pub mod ordered_map;

pub use ordered_map::OrderedMap;

/// The error type for [`TreeMap`] and [`OrderedMap`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapError {
    pub(crate) kind: MapErrorKind,
}

impl MapError {
    /// Details about the failure.
    #[must_use]
    pub fn kind(&self) -> MapErrorKind {
        self.kind
    }

    pub(crate) fn invalid_argument() -> Self {
        MapErrorKind::InvalidArgument.into()
    }

    pub(crate) fn null_key() -> Self {
        MapErrorKind::NullKey.into()
    }

    pub(crate) fn unsupported(op: &'static str) -> Self {
        MapErrorKind::Unsupported(op).into()
    }

    pub(crate) fn incomparable() -> Self {
        MapErrorKind::Incomparable.into()
    }
}

impl From<MapErrorKind> for MapError {
    fn from(kind: MapErrorKind) -> Self {
        Self { kind }
    }
}

/// Details of the failure reported by a [`MapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapErrorKind {
    /// A lookup was given an absent key.
    InvalidArgument,

    /// An insertion was given an absent key.
    NullKey,

    /// The named operation is not provided by this map.
    Unsupported(&'static str),

    /// The comparator could not order two keys.
    Incomparable,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MapErrorKind::InvalidArgument => f.write_str("absent key is not a valid lookup argument"),
            MapErrorKind::NullKey => f.write_str("absent key cannot be inserted"),
            MapErrorKind::Unsupported(op) => write!(f, "operation `{op}` is not supported"),
            MapErrorKind::Incomparable => f.write_str("keys cannot be ordered by the comparator"),
        }
    }
}

impl Error for MapError {}
