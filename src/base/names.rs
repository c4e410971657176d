//! Encoded-name handling.
//!
//! Front ends store operator identifiers in an encoded form so they survive
//! in environments that only accept alphanumeric names (`+` becomes `$plus`,
//! `=` becomes `$eq`, ...). Display names are the decoded form. The relevance
//! filter also needs decoding to spot generated accessors: a desugared
//! assignment accessor keeps the `_=` suffix after decoding.

use std::borrow::Cow;

/// Suffix carried by assignment accessors (`x_=` for a mutable field `x`).
pub const ASSIGN_SUFFIX: &str = "_=";

/// Escape table, longest escapes first so `$minus` wins over a prefix match.
const ESCAPES: [(&str, char); 13] = [
    ("$percent", '%'),
    ("$greater", '>'),
    ("$minus", '-'),
    ("$times", '*'),
    ("$colon", ':'),
    ("$plus", '+'),
    ("$less", '<'),
    ("$bang", '!'),
    ("$amp", '&'),
    ("$bar", '|'),
    ("$div", '/'),
    ("$eq", '='),
    ("$up", '^'),
];

/// Decode an encoded name into its display form.
///
/// Returns the input unchanged (borrowed) when it contains no escapes, which
/// is the overwhelmingly common case.
pub fn decode_name(name: &str) -> Cow<'_, str> {
    if !name.contains('$') {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    'outer: while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        for (escape, ch) in ESCAPES {
            if let Some(after) = tail.strip_prefix(escape) {
                out.push(ch);
                rest = after;
                continue 'outer;
            }
        }
        // Not a known escape; keep the dollar sign as-is.
        out.push('$');
        rest = &tail[1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}
