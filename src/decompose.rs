//! Decomposition of a type part into main type, tree, subtype and suffix.
//!
//! The RFC 6838 conventions: `main/tree.tree.sub+suffix`.

use crate::mutable::MutableMediaType;

/// Separates the main type from the rest of the type part.
pub const MAIN_SUB_SEPARATOR: char = '/';

/// Separates registration tree segments from each other and from the subtype.
pub const TREE_SEPARATOR: char = '.';

/// Introduces the structured-syntax suffix.
pub const SUFFIX_SEPARATOR: char = '+';

/// Splits a type part into its components.
///
/// Never fails: text without a `/` is taken as a bare main type, nothing is
/// trimmed or case-folded, and empty segments are kept. Everything after the
/// first `+` of the subtype becomes the suffix, including any further `+`.
/// Only the text up to a second `/` is considered part of the subtype.
///
/// Parameters are not looked at; pass only the part before any `;`.
///
/// # Examples
///
/// ```
/// use mediatype::{split_type, MediaType};
///
/// let mt = split_type("application/vnd.oasis.opendocument.text");
/// assert_eq!(mt.main_type(), "application");
/// assert_eq!(mt.trees(), ["vnd", "oasis", "opendocument"]);
/// assert_eq!(mt.sub_type(), "text");
/// assert_eq!(mt.suffix(), "");
/// ```
pub fn split_type(full_type: &str) -> MutableMediaType {
    let mut mt = MutableMediaType::new();

    let mut main_sub = full_type.split(MAIN_SUB_SEPARATOR);
    mt.main = main_sub.next().unwrap_or_default().to_string();

    if let Some(sub_part) = main_sub.next() {
        let with_tree = match sub_part.split_once(SUFFIX_SEPARATOR) {
            Some((with_tree, suffix)) => {
                mt.suffix = suffix.to_string();
                with_tree
            }
            None => sub_part,
        };

        let mut segments: Vec<String> = with_tree.split(TREE_SEPARATOR).map(str::to_string).collect();
        mt.sub = segments.pop().unwrap_or_default();
        mt.tree = segments;
    }

    mt
}

/// Rebuilds a type part from its components.
///
/// The separator after the main type is written only when a tree, subtype or
/// suffix is present, so a bare main type comes back unchanged.
///
/// ```
/// use mediatype::join_type;
///
/// let tree = ["vnd".to_string(), "openxmlformats".to_string()];
/// assert_eq!(join_type("application", &tree, "sheet", "xml"), "application/vnd.openxmlformats.sheet+xml");
/// assert_eq!(join_type("app", &[], "", ""), "app");
/// ```
pub fn join_type(main: &str, tree: &[String], sub: &str, suffix: &str) -> String {
    let mut full_type = String::from(main);

    if !tree.is_empty() || !sub.is_empty() || !suffix.is_empty() {
        full_type.push(MAIN_SUB_SEPARATOR);
    }

    for segment in tree {
        full_type.push_str(segment);
        full_type.push(TREE_SEPARATOR);
    }

    full_type.push_str(sub);

    if !suffix.is_empty() {
        full_type.push(SUFFIX_SEPARATOR);
        full_type.push_str(suffix);
    }

    full_type
}
