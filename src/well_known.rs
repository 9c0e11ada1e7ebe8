//! Frequently used media types, built on first use.
//!
//! ```
//! use mediatype::{well_known, MediaType};
//!
//! assert_eq!(well_known::TEXT_PLAIN.format().unwrap(), "text/plain; charset=utf-8");
//! assert_eq!(well_known::IMAGE_SVG.suffix(), "xml");
//! ```

use crate::immutable::ImmutableMediaType;
use crate::mutable::MutableMediaType;
use once_cell::sync::Lazy;

fn text(sub: &str) -> ImmutableMediaType {
    MutableMediaType::new()
        .with_main("text")
        .with_sub(sub)
        .with_parameter("charset", "utf-8")
        .immutable()
}

fn typed(full_type: &str) -> ImmutableMediaType {
    ImmutableMediaType::from_type(full_type)
}

/// `text/plain; charset=utf-8`
pub static TEXT_PLAIN: Lazy<ImmutableMediaType> = Lazy::new(|| text("plain"));

/// `text/html; charset=utf-8`
pub static TEXT_HTML: Lazy<ImmutableMediaType> = Lazy::new(|| text("html"));

/// `text/css; charset=utf-8`
pub static TEXT_CSS: Lazy<ImmutableMediaType> = Lazy::new(|| text("css"));

/// `application/json`
pub static APPLICATION_JSON: Lazy<ImmutableMediaType> = Lazy::new(|| typed("application/json"));

/// `application/octet-stream`
pub static APPLICATION_OCTET_STREAM: Lazy<ImmutableMediaType> =
    Lazy::new(|| typed("application/octet-stream"));

/// `application/xhtml+xml`
pub static APPLICATION_XHTML: Lazy<ImmutableMediaType> = Lazy::new(|| typed("application/xhtml+xml"));

/// `application/epub+zip`
pub static APPLICATION_EPUB: Lazy<ImmutableMediaType> = Lazy::new(|| typed("application/epub+zip"));

/// `application/vnd.openxmlformats-officedocument.wordprocessingml.document`
pub static APPLICATION_DOCX: Lazy<ImmutableMediaType> =
    Lazy::new(|| typed("application/vnd.openxmlformats-officedocument.wordprocessingml.document"));

/// `application/vnd.oasis.opendocument.text`
pub static APPLICATION_ODT: Lazy<ImmutableMediaType> =
    Lazy::new(|| typed("application/vnd.oasis.opendocument.text"));

/// `image/png`
pub static IMAGE_PNG: Lazy<ImmutableMediaType> = Lazy::new(|| typed("image/png"));

/// `image/svg+xml`
pub static IMAGE_SVG: Lazy<ImmutableMediaType> = Lazy::new(|| typed("image/svg+xml"));

/// `multipart/form-data`, without a boundary.
pub static MULTIPART_FORM_DATA: Lazy<ImmutableMediaType> = Lazy::new(|| typed("multipart/form-data"));
