//! Structured Internet media types.
//!
//! This crate decomposes a media type such as
//! `application/vnd.openxmlformats-officedocument.wordprocessingml.document+xml; charset=utf-8`
//! into its main type, registration tree, subtype, suffix and parameters, and
//! writes it back in canonical form:
//! - Type part decomposition following RFC 6838 (`split_type`, `join_type`)
//! - Parameter decoding and formatting (RFC 2045, RFC 2616, RFC 2231)
//! - Mutable and immutable models sharing the [`MediaType`] accessor trait
//!
//! Splitting the type part never fails; only the parameter section can be
//! rejected.
//!
//! ```
//! use mediatype::{ImmutableMediaType, MediaType};
//!
//! let mt: ImmutableMediaType = "application/vnd.oasis.opendocument.text; charset=utf-8".parse().unwrap();
//! assert_eq!(mt.prefix(), "vnd");
//! assert_eq!(mt.sub_type(), "text");
//!
//! let mut edited = mt.to_mutable();
//! edited.params.clear();
//! assert_eq!(edited.format().unwrap(), "application/vnd.oasis.opendocument.text");
//! assert_eq!(mt.charset(), Some("utf-8"));
//! ```

pub mod error;
pub mod grammar;
pub mod media_type;
pub mod decompose;
pub mod model;
pub mod mutable;
pub mod immutable;
pub mod well_known;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types
pub use error::{Error, Result};
pub use media_type::{parse_media_type, format_media_type};
pub use decompose::{split_type, join_type, MAIN_SUB_SEPARATOR, TREE_SEPARATOR, SUFFIX_SEPARATOR};
pub use model::MediaType;
pub use mutable::MutableMediaType;
pub use immutable::ImmutableMediaType;
