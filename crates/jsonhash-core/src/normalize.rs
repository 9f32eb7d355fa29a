//! Leaf normalization.
//!
//! Every leaf is turned into a byte string before it is digested. Null and
//! booleans get reserved markers, numbers a fixed six-decimal rendering, and
//! strings are used as they are.

pub const NULL_MARKER: &str = "$$$NULL$$$";
pub const TRUE_MARKER: &str = "$$$TRUE$$$";
pub const FALSE_MARKER: &str = "$$$FALSE$$$";

/// Joins child digests of arrays and objects
pub const ELEMENT_SEPARATOR: &str = "|||";
/// Joins a key digest and its value digest
pub const ENTRY_SEPARATOR: &str = ":::";

/// Render a number with six fractional digits.
///
/// `11`, `11.0` and `1.1e1` all render as `11.000000`. Anything that rounds
/// to zero renders as `0.000000`, whatever its sign. Digits past the sixth
/// decimal are dropped, so such numbers compare equal. Infinities render as
/// `+Inf` / `-Inf` and NaN as `NaN`, matching printf-style `%f`.
pub fn normalize_number(n: f64) -> String {
    if n.is_infinite() {
        let sign = if n > 0.0 { '+' } else { '-' };
        return format!("{}Inf", sign);
    }
    let rendered = format!("{:.6}", n);
    if rendered == "-0.000000" {
        return "0.000000".to_string();
    }
    rendered
}

pub fn normalize_bool(b: bool) -> &'static str {
    if b {
        TRUE_MARKER
    } else {
        FALSE_MARKER
    }
}
