//! LZ77 decoder: expands a `Value` stream back into bytes.
//!
//! Grounded in `original_source/values.go`'s `ValuesToBytes`, with the
//! byte-by-byte copy loop spec.md §4.4 requires so that overlapping
//! back-references (`distance < length`) extend into a run rather than
//! reading past the output built so far.

use crate::token::Value;
use crate::Error;

/// Expand a token stream into the bytes it represents.
pub fn decode(tokens: &[Value]) -> Result<Vec<u8>,Error> {
    let mut out = Vec::new();
    for token in tokens {
        match *token {
            Value::Literal(b) => out.push(b),
            Value::BackRef { distance, length } => {
                if distance == 0 || distance as usize > out.len() {
                    return Err(Error::CorruptStream(format!(
                        "back-reference distance {} exceeds decoded length {}",
                        distance,out.len()
                    )));
                }
                let mut from = out.len() - distance as usize;
                for _ in 0..length {
                    let b = out[from];
                    out.push(b);
                    from += 1;
                }
            }
        }
    }
    Ok(out)
}
