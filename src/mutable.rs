//! Mutable media type, for building and editing.

use crate::decompose::split_type;
use crate::error::{Error, Result};
use crate::immutable::ImmutableMediaType;
use crate::media_type::parse_media_type;
use crate::model::MediaType;
use std::collections::HashMap;
use std::str::FromStr;

/// A media type whose components can be changed freely.
///
/// Every field is public and independent; nothing is validated. Take an
/// [`ImmutableMediaType`] snapshot with [`immutable`](Self::immutable) once
/// the value is final.
///
/// # Examples
///
/// ```
/// use mediatype::{MediaType, MutableMediaType};
///
/// let mt = MutableMediaType::new()
///     .with_main("application")
///     .with_tree(["vnd", "api"])
///     .with_sub("resource")
///     .with_suffix("json")
///     .with_parameter("charset", "utf-8");
/// assert_eq!(mt.format().unwrap(), "application/vnd.api.resource+json; charset=utf-8");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutableMediaType {
    /// Main (top-level) type.
    pub main: String,
    /// Registration tree segments, outermost first.
    pub tree: Vec<String>,
    /// Subtype.
    pub sub: String,
    /// Structured-syntax suffix.
    pub suffix: String,
    /// Parameters.
    pub params: HashMap<String, String>,
}

impl MutableMediaType {
    /// Creates an empty media type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a header value such as `text/html; charset=utf-8`.
    ///
    /// The type part is split with [`split_type`](crate::split_type), which
    /// accepts anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the parameter section is malformed.
    pub fn parse(s: &str) -> Result<Self> {
        let (full_type, params) = parse_media_type(s)?;
        let mut mt = split_type(&full_type);
        mt.params = params;
        Ok(mt)
    }

    /// Sets the main type.
    #[must_use]
    pub fn with_main(mut self, main: impl Into<String>) -> Self {
        self.main = main.into();
        self
    }

    /// Replaces the tree segments.
    #[must_use]
    pub fn with_tree<I, S>(mut self, tree: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tree = tree.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the subtype.
    #[must_use]
    pub fn with_sub(mut self, sub: impl Into<String>) -> Self {
        self.sub = sub.into();
        self
    }

    /// Sets the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Adds a parameter, replacing any previous value.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns an immutable copy of the current state.
    pub fn immutable(&self) -> ImmutableMediaType {
        ImmutableMediaType::from(self)
    }
}

impl MediaType for MutableMediaType {
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

impl FromStr for MutableMediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<ImmutableMediaType> for MutableMediaType {
    fn from(mt: ImmutableMediaType) -> Self {
        mt.into_mutable()
    }
}
