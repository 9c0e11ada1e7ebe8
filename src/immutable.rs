//! Immutable media type snapshots.

use crate::decompose::split_type;
use crate::error::{Error, Result};
use crate::model::MediaType;
use crate::mutable::MutableMediaType;
use std::collections::HashMap;
use std::str::FromStr;

/// A media type that cannot change after construction.
///
/// Owns its own copies of the tree and parameters, so it can be shared
/// between threads without locking. Use [`to_mutable`](Self::to_mutable) to
/// get an independent editable copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImmutableMediaType {
    main: String,
    tree: Vec<String>,
    sub: String,
    suffix: String,
    params: HashMap<String, String>,
}

impl ImmutableMediaType {
    /// Parses a header value such as `application/epub+zip; version=3`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the parameter section is malformed.
    pub fn parse(s: &str) -> Result<Self> {
        MutableMediaType::parse(s).map(Self::from)
    }

    /// Builds a snapshot from a type part alone, without parameters.
    ///
    /// ```
    /// use mediatype::{ImmutableMediaType, MediaType};
    ///
    /// let mt = ImmutableMediaType::from_type("application/ld+json");
    /// assert_eq!(mt.sub_type(), "ld");
    /// assert_eq!(mt.suffix(), "json");
    /// ```
    pub fn from_type(full_type: &str) -> Self {
        split_type(full_type).into()
    }

    /// Returns an independent mutable copy.
    pub fn to_mutable(&self) -> MutableMediaType {
        self.clone().into_mutable()
    }

    /// Converts into a mutable media type, reusing the allocations.
    pub fn into_mutable(self) -> MutableMediaType {
        MutableMediaType {
            main: self.main,
            tree: self.tree,
            sub: self.sub,
            suffix: self.suffix,
            params: self.params,
        }
    }
}

impl MediaType for ImmutableMediaType {
    fn main_type(&self) -> &str {
        &self.main
    }

    fn sub_type(&self) -> &str {
        &self.sub
    }

    fn trees(&self) -> &[String] {
        &self.tree
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn parameters(&self) -> &HashMap<String, String> {
        &self.params
    }
}

impl From<MutableMediaType> for ImmutableMediaType {
    fn from(mt: MutableMediaType) -> Self {
        Self {
            main: mt.main,
            tree: mt.tree,
            sub: mt.sub,
            suffix: mt.suffix,
            params: mt.params,
        }
    }
}

impl From<&MutableMediaType> for ImmutableMediaType {
    fn from(mt: &MutableMediaType) -> Self {
        mt.clone().into()
    }
}

impl FromStr for ImmutableMediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
