//! Media type header values: parameter decoding and canonical formatting.
//!
//! Implements the parameter grammar of RFC 2045 and RFC 2616, plus the
//! RFC 2231 extensions for charset-tagged values and continuations.

use crate::error::{Error, InvalidMediaParameter, Result};
use crate::grammar::{is_attribute_char, is_not_token_char, is_token, is_token_char, is_tspecial, needs_extended_value};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

const UPPER_HEX: &[u8] = b"0123456789ABCDEF";

/// Splits a header value into its type part and its parameters.
///
/// The type part is everything before the first `;`, with surrounding
/// whitespace removed; it is returned as-is and never rejected. Parameter
/// names and values keep their case. RFC 2231 extended values and
/// continuations are reassembled into a single parameter.
///
/// Decoding is all-or-nothing: a malformed parameter rejects the whole set.
///
/// # Examples
///
/// ```
/// use mediatype::parse_media_type;
///
/// let (media_type, params) = parse_media_type("text/html; charset=UTF-8").unwrap();
/// assert_eq!(media_type, "text/html");
/// assert_eq!(params.get("charset"), Some(&"UTF-8".to_string()));
/// ```
pub fn parse_media_type(v: &str) -> Result<(String, HashMap<String, String>)> {
    let (base, rest) = match v.find(';') {
        Some(i) => v.split_at(i),
        None => (v, ""),
    };
    let media_type = base.trim().to_string();

    let mut params = HashMap::new();
    let mut continuation: HashMap<String, HashMap<String, String>> = HashMap::new();

    let mut v = rest;
    while !v.is_empty() {
        v = v.trim_start_matches(is_linear_space);
        if v.is_empty() {
            break;
        }

        let Some((key, value, tail)) = consume_media_param(v) else {
            // Ignore trailing semicolons.
            if v.trim() == ";" {
                break;
            }
            tracing::debug!(input = v, "rejecting malformed media parameter");
            return Err(InvalidMediaParameter.into());
        };

        let pmap = match key.split_once('*') {
            Some(("", _)) => {
                tracing::debug!(name = key, "rejecting extended media parameter without a name");
                return Err(Error::Decode(format!("extended parameter without a name: {key}")));
            }
            Some((base_name, _)) => continuation.entry(base_name.to_string()).or_default(),
            None => &mut params,
        };
        if let Some(existing) = pmap.get(key) {
            if *existing != value {
                tracing::debug!(name = key, "rejecting duplicate media parameter");
                return Err(Error::Decode(format!("duplicate parameter name: {key}")));
            }
        }
        pmap.insert(key.to_string(), value);

        v = tail;
    }

    for (name, pieces) in continuation {
        let value = assemble_continuation(&name, &pieces)?;
        params.insert(name, value);
    }

    tracing::trace!(media_type = %media_type, params = params.len(), "decoded media type");
    Ok((media_type, params))
}

/// Serializes a type part and parameters as a header value conforming to RFC 2045 and RFC 2616.
///
/// The type part is written with its case unchanged. Parameters follow in
/// ascending name order as `; name=value`; values that are not tokens are
/// quoted, and values outside printable US-ASCII are written in RFC 2231
/// extended form.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the type part holds anything but token
/// characters around a single `/`, or if a parameter name is not a token or
/// contains `*`, which is reserved for extended parameters.
///
/// # Examples
///
/// ```
/// use mediatype::format_media_type;
/// use std::collections::HashMap;
///
/// let mut params = HashMap::new();
/// params.insert("charset".to_string(), "utf-8".to_string());
/// let formatted = format_media_type("text/html", &params).unwrap();
/// assert_eq!(formatted, "text/html; charset=utf-8");
/// ```
pub fn format_media_type(t: &str, params: &HashMap<String, String>) -> Result<String> {
    // Case is kept; only the main type and the rest may be split by a single `/`.
    let (major, sub) = t.split_once('/').unwrap_or((t, ""));
    if !major.chars().all(is_token_char) || !sub.chars().all(is_token_char) {
        tracing::debug!(media_type = t, "refusing to encode media type");
        return Err(Error::Encode(format!("invalid media type: {t:?}")));
    }

    let mut result = String::from(t);

    // Sort parameters for consistent output
    let mut keys: Vec<_> = params.keys().collect();
    keys.sort();

    for key in keys {
        let value = &params[key];

        if !is_token(key) || key.contains('*') {
            tracing::debug!(name = %key, "refusing to encode media parameter");
            return Err(Error::Encode(format!("invalid parameter name: {key:?}")));
        }

        result.push_str("; ");
        result.push_str(key);

        if needs_extended_value(value) {
            // RFC 2231 encoding
            result.push_str("*=utf-8''");
            for &b in value.as_bytes() {
                if is_attribute_char(b) {
                    result.push(b as char);
                } else {
                    result.push('%');
                    result.push(UPPER_HEX[(b >> 4) as usize] as char);
                    result.push(UPPER_HEX[(b & 0x0F) as usize] as char);
                }
            }
        } else if is_token(value) {
            result.push('=');
            result.push_str(value);
        } else {
            result.push_str("=\"");
            for ch in value.chars() {
                if ch == '"' || ch == '\\' {
                    result.push('\\');
                }
                result.push(ch);
            }
            result.push('"');
        }
    }

    Ok(result)
}

fn is_linear_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Consumes a leading token, returning it and the remainder.
fn consume_token(v: &str) -> (&str, &str) {
    let end = v.find(is_not_token_char).unwrap_or(v.len());
    v.split_at(end)
}

/// Consumes a token or quoted-string.
///
/// Inside quotes a backslash escapes only a following tspecial; any other
/// backslash is kept literally.
fn consume_value(v: &str) -> Option<(String, &str)> {
    let Some(quoted) = v.strip_prefix('"') else {
        let (token, rest) = consume_token(v);
        if token.is_empty() {
            return None;
        }
        return Some((token.to_string(), rest));
    };

    let mut buffer = String::new();
    let mut chars = quoted.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((buffer, &quoted[i + 1..])),
            '\\' if quoted[i + 1..].starts_with(is_tspecial) => {
                let (_, escaped) = chars.next()?;
                buffer.push(escaped);
            }
            '\r' | '\n' => return None,
            _ => buffer.push(c),
        }
    }

    // Unterminated quoted string.
    None
}

/// Consumes `; name = value`, returning the name, the value and the remainder.
fn consume_media_param(v: &str) -> Option<(&str, String, &str)> {
    let rest = v.trim_start().strip_prefix(';')?;
    let (param, rest) = consume_token(rest.trim_start());
    if param.is_empty() {
        return None;
    }

    let rest = rest.trim_start().strip_prefix('=')?;
    let (value, rest) = consume_value(rest.trim_start())?;
    Some((param, value, rest))
}

/// Reassembles the RFC 2231 pieces collected for one parameter name.
///
/// Every piece must take part: a lone `name*`, or a run `name*0`, `name*1`, ...
/// with no gaps, each optionally marked `*` as encoded.
fn assemble_continuation(name: &str, pieces: &HashMap<String, String>) -> Result<String> {
    if let Some(v) = pieces.get(&format!("{name}*")) {
        if pieces.len() != 1 {
            return Err(Error::Decode(format!("parameter {name} mixes extended and continued forms")));
        }
        return decode_extended_value(v);
    }

    let mut bytes = Vec::new();
    let mut ascii_only = false;
    let mut consumed = 0;

    for n in 0usize.. {
        let simple_part = format!("{name}*{n}");
        if let Some(v) = pieces.get(&simple_part) {
            consumed += 1;
            bytes.extend_from_slice(v.as_bytes());
            continue;
        }

        let Some(v) = pieces.get(&format!("{simple_part}*")) else {
            break;
        };
        consumed += 1;
        if n == 0 {
            let (charset, encoded) = split_extended_value(v)?;
            ascii_only = charset == "us-ascii";
            bytes.extend(percent_decode(encoded)?);
        } else {
            bytes.extend(percent_decode(v)?);
        }
    }

    if consumed == 0 || consumed != pieces.len() {
        tracing::debug!(name, pieces = pieces.len(), consumed, "rejecting broken parameter continuation");
        return Err(Error::Decode(format!("malformed continuation for parameter {name}")));
    }
    into_string(bytes, ascii_only)
}

/// Decodes a single `charset'language'value` extended value.
fn decode_extended_value(v: &str) -> Result<String> {
    let (charset, encoded) = split_extended_value(v)?;
    into_string(percent_decode(encoded)?, charset == "us-ascii")
}

/// Splits an extended value into its lower-cased charset and encoded text.
fn split_extended_value(v: &str) -> Result<(String, &str)> {
    let mut parts = v.splitn(3, '\'');
    let (Some(charset), Some(_language), Some(encoded)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::Decode(format!("malformed extended parameter value: {v:?}")));
    };

    let charset = charset.to_ascii_lowercase();
    match charset.as_str() {
        "us-ascii" | "utf-8" => Ok((charset, encoded)),
        "" => Err(Error::Decode("extended parameter value without charset".to_string())),
        _ => Err(Error::Decode(format!("unsupported parameter charset: {charset}"))),
    }
}

/// Percent-decodes an extended value, rejecting `%` not followed by two hex digits.
fn percent_decode(s: &str) -> Result<Vec<u8>> {
    let malformed = s.match_indices('%').any(|(i, _)| {
        !s.get(i + 1..i + 3)
            .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
    });
    if malformed {
        return Err(Error::Decode(format!("invalid percent escape in {s:?}")));
    }
    Ok(percent_decode_str(s).collect())
}

fn into_string(bytes: Vec<u8>, ascii_only: bool) -> Result<String> {
    if ascii_only && !bytes.is_ascii() {
        return Err(Error::Decode("non-ASCII byte in us-ascii parameter".to_string()));
    }
    String::from_utf8(bytes).map_err(|e| Error::Decode(format!("parameter is not valid UTF-8: {e}")))
}
