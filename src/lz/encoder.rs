//! Greedy left-to-right LZ77 encoder.
//!
//! Grounded in `original_source/values.go`'s `BytesToValues`: at every
//! cursor position, search the window behind it for the longest match of
//! the lookahead ahead of it, gated by `cursor > min_match` so the very
//! start of the input never emits a back-reference.

use crate::token::Value;
use crate::match_finder::longest_match;

/// Encode `input` into a token stream using the given LZ77 parameters.
/// Parameters are assumed already validated by `Params::new`.
pub fn encode(input: &[u8], min_match: u8, max_match: u8, search_window: u16) -> Vec<Value> {
    let mut values = Vec::with_capacity(input.len());
    let mut s = 0usize;
    while s < input.len() {
        let search_start = s.saturating_sub(search_window as usize);
        let lookahead_end = (s + max_match as usize).min(input.len());
        let (pos,len) = longest_match(&input[search_start..s],&input[s..lookahead_end],min_match);
        if s > min_match as usize && len > 0 {
            let distance = (s - (search_start + pos)) as u16;
            values.push(Value::BackRef { distance, length: len });
            s += len as usize;
        } else {
            values.push(Value::Literal(input[s]));
            s += 1;
        }
    }
    values
}
