//! Sign normalization of raw expressions
use tracing::trace;

use crate::grammar::is_sign;

/// Strip whitespace and collapse every run of `+`/`-` into a single sign.
///
/// A run collapses to `-` when it holds an odd number of minus signs, and to
/// `+` otherwise. This is the fixed point of repeatedly rewriting `--` and
/// `++` to `+`, and `+-` and `-+` to `-`.
pub fn normalize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().filter(|ch| !ch.is_whitespace()).peekable();

    while let Some(ch) = chars.next() {
        if !is_sign(&ch) {
            out.push(ch);
            continue;
        }
        let mut negative = ch == '-';
        while let Some(next) = chars.next_if(is_sign) {
            negative ^= next == '-';
        }
        out.push(if negative { '-' } else { '+' });
    }

    trace!("normalized {:?} to {:?}", line, out);
    out
}
