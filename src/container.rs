//! The compressed container: code-book header followed by the Huffman-coded
//! token payload. Grounded in `original_source/io.go`'s `BinaryWriter`/
//! `BinaryReader`, generalized to spec.md §6's explicit code-book header
//! (the original wrote no header at all, relying on an externally agreed
//! tree).

use std::collections::HashMap;
use crate::token::Value;
use crate::huffman::{Code,CodeTable};
use crate::bitio::{BitWriter,BitReader};
use crate::Error;

type DecodeTable = HashMap<(u64,u8),u8>;

/// Write the code-book header followed by the token payload.
///
/// `code_table` must have at least one entry; an empty token stream (and
/// therefore an empty code table) is rejected by the caller before this is
/// ever reached (spec.md §9 note (c): the `N - 1` header trick cannot
/// represent `N == 0`).
pub fn write(tokens: &[Value], code_table: &CodeTable) -> Result<Vec<u8>,Error> {
    let n = code_table.len();
    if n == 0 {
        return Err(Error::InvalidParameter("refusing to write a container with an empty code book".to_string()));
    }
    if n > 256 {
        return Err(Error::InvalidParameter("code book exceeds 256 symbols".to_string()));
    }
    let mut w = BitWriter::new();
    w.push_byte((n - 1) as u8);
    let mut symbols: Vec<(&u8,&Code)> = code_table.iter().collect();
    symbols.sort_by_key(|(s,_)| **s);
    for (symbol,code) in symbols {
        if code.length == 0 || code.length > 64 {
            return Err(Error::InvalidParameter(format!("code length {} out of range",code.length)));
        }
        w.push_byte(*symbol);
        w.push_byte(code.length);
        w.push_code(*code);
    }
    for token in tokens {
        match token {
            Value::Literal(b) => {
                w.push_bit(true);
                let code = code_table.get(b).ok_or_else(|| Error::InvalidParameter(
                    format!("no code for literal byte {}",b)
                ))?;
                w.push_code(*code);
            },
            Value::BackRef { distance, length } => {
                w.push_bit(false);
                for b in Value::backref_bytes(*distance,*length) {
                    let code = code_table.get(&b).ok_or_else(|| Error::InvalidParameter(
                        format!("no code for back-reference byte {}",b)
                    ))?;
                    w.push_code(*code);
                }
            }
        }
    }
    Ok(w.finish())
}

/// Parse the code-book header, then decode tokens until clean EOF at a
/// token boundary.
pub fn read(data: &[u8]) -> Result<Vec<Value>,Error> {
    if data.is_empty() {
        return Err(Error::CorruptStream("empty stream has no code book header".to_string()));
    }
    let mut r = BitReader::new(data);
    let n_minus_1 = r.read_byte().ok_or_else(|| Error::CorruptStream("truncated header".to_string()))?;
    let n = n_minus_1 as usize + 1;
    let mut decode_table: DecodeTable = HashMap::with_capacity(n);
    for _ in 0..n {
        let symbol = r.read_byte().ok_or_else(|| Error::CorruptStream("truncated code book entry".to_string()))?;
        let length = r.read_byte().ok_or_else(|| Error::CorruptStream("truncated code book entry".to_string()))?;
        if length == 0 || length > 64 {
            return Err(Error::CorruptStream(format!("code length {} out of range",length)));
        }
        let mut bits = 0u64;
        for _ in 0..length {
            let bit = r.read_bit().ok_or_else(|| Error::CorruptStream("truncated code book entry".to_string()))?;
            bits = (bits << 1) | bit as u64;
        }
        decode_table.insert((bits,length),symbol);
    }
    let mut tokens = Vec::new();
    loop {
        let is_literal = match r.read_bit() {
            Some(bit) => bit,
            None => break
        };
        if is_literal {
            let symbol = decode_symbol(&mut r,&decode_table)?;
            tokens.push(Value::Literal(symbol));
        } else {
            let hi = decode_symbol(&mut r,&decode_table)?;
            let lo = decode_symbol(&mut r,&decode_table)?;
            let length = decode_symbol(&mut r,&decode_table)?;
            let distance = ((hi as u16) << 8) | lo as u16;
            tokens.push(Value::BackRef { distance, length });
        }
    }
    Ok(tokens)
}

/// Decode one prefix-coded symbol. Because the code book is prefix-free,
/// the first exact match found is the unique answer.
fn decode_symbol(r: &mut BitReader, table: &DecodeTable) -> Result<u8,Error> {
    let mut bits = 0u64;
    let mut length = 0u8;
    loop {
        let bit = r.read_bit().ok_or_else(|| Error::CorruptStream("EOF mid-symbol".to_string()))?;
        bits = (bits << 1) | bit as u64;
        length += 1;
        if let Some(symbol) = table.get(&(bits,length)) {
            return Ok(*symbol);
        }
        if length >= 64 {
            return Err(Error::CorruptStream("no matching prefix code after 64 bits".to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman;

    fn code_table_for(tokens: &[Value]) -> CodeTable {
        let freq = huffman::accumulate(tokens);
        let root = huffman::build(&freq).unwrap();
        huffman::build_code_table(&root)
    }

    #[test]
    fn round_trips_a_token_stream() {
        let tokens = vec![
            Value::Literal(b'a'),
            Value::Literal(b'b'),
            Value::BackRef { distance: 2, length: 2 }
        ];
        let table = code_table_for(&tokens);
        let bytes = write(&tokens,&table).unwrap();
        let back = read(&bytes).unwrap();
        assert_eq!(back,tokens);
    }

    #[test]
    fn single_symbol_round_trips() {
        let tokens = vec![Value::Literal(b'z');5];
        let table = code_table_for(&tokens);
        let bytes = write(&tokens,&table).unwrap();
        assert_eq!(read(&bytes).unwrap(),tokens);
    }

    #[test]
    fn refuses_empty_code_table() {
        assert!(write(&[],&CodeTable::new()).is_err());
    }

    #[test]
    fn empty_stream_is_corrupt() {
        assert!(read(&[]).is_err());
    }

    #[test]
    fn truncated_header_is_corrupt() {
        assert!(read(&[0u8]).is_err());
    }
}
