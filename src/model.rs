//! The read-only view shared by mutable and immutable media types.

use crate::decompose::join_type;
use crate::error::Result;
use crate::media_type::format_media_type;
use std::collections::HashMap;

/// Read access to the components of a media type.
///
/// Implemented by [`MutableMediaType`](crate::MutableMediaType) and
/// [`ImmutableMediaType`](crate::ImmutableMediaType). The full type and the
/// canonical string are always recomputed from the components.
pub trait MediaType {
    /// Returns the main (top-level) type, e.g. `application`.
    fn main_type(&self) -> &str;

    /// Returns the subtype without tree or suffix, e.g. `document`.
    fn sub_type(&self) -> &str;

    /// Returns the registration tree segments, outermost first.
    fn trees(&self) -> &[String];

    /// Returns the suffix without its `+`, e.g. `xml`.
    fn suffix(&self) -> &str;

    /// Returns the parameters.
    fn parameters(&self) -> &HashMap<String, String>;

    /// Returns the outermost tree segment, e.g. `vnd`, or an empty string.
    fn prefix(&self) -> &str {
        self.trees().first().map_or("", String::as_str)
    }

    /// Returns the type part rebuilt from the components, without parameters.
    fn full_type(&self) -> String {
        join_type(self.main_type(), self.trees(), self.sub_type(), self.suffix())
    }

    /// Returns the canonical form, usable as a `Content-Type` header value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`](crate::Error::Encode) if a parameter name
    /// cannot be written.
    fn format(&self) -> Result<String> {
        format_media_type(&self.full_type(), self.parameters())
    }

    /// Returns the charset parameter if present.
    fn charset(&self) -> Option<&str> {
        self.parameters().get("charset").map(String::as_str)
    }

    /// Returns the boundary parameter if present.
    fn boundary(&self) -> Option<&str> {
        self.parameters().get("boundary").map(String::as_str)
    }
}
