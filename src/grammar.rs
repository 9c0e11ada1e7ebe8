//! Grammar helpers for media type parameters.
//!
//! Token classes from RFC 2045 and the attribute-char class of RFC 2231.

/// The RFC 2045 `tspecials`, which must be quoted inside parameter values.
pub const TSPECIALS: &str = "()<>@,;:\\\"/[]?=";

/// Reports whether the character is one of [`TSPECIALS`].
pub fn is_tspecial(c: char) -> bool {
    TSPECIALS.contains(c)
}

/// Reports whether the character may appear in an RFC 2045 token: printable
/// US-ASCII other than space and [`TSPECIALS`].
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !is_tspecial(c)
}

/// Negation of [`is_token_char`], for use as a search pattern.
pub fn is_not_token_char(c: char) -> bool {
    !is_token_char(c)
}

/// Reports whether the string is a non-empty run of token characters.
pub fn is_token(s: &str) -> bool {
    s.chars().next().is_some() && s.chars().all(is_token_char)
}

/// Reports whether the byte may appear unescaped in an RFC 2231 extended value.
///
/// attribute-char := <any (US-ASCII) CHAR except SPACE, CTLs, "*", "'", "%", or tspecials>
pub fn is_attribute_char(b: u8) -> bool {
    is_token_char(b as char) && !matches!(b, b'*' | b'\'' | b'%')
}

/// Reports whether a parameter value can only be carried in RFC 2231 extended form.
///
/// Anything outside printable US-ASCII qualifies, except horizontal tab,
/// which a quoted-string carries as-is.
pub fn needs_extended_value(s: &str) -> bool {
    s.chars().any(|c| (c < ' ' || c > '~') && c != '\t')
}
