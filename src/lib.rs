//! # lzhuff
//!
//! A lossless byte-stream compressor composing an LZ77-style sliding-window
//! dictionary coder with a static canonical Huffman coder. The code book is
//! computed from the LZ stage's output and written explicitly into the
//! compressed payload, so decompression needs nothing but the compressed
//! bytes themselves.
//!
//! * `token` — the `Value` literal/back-reference model.
//! * `match_finder` — windowed longest-match search.
//! * `lz` — the LZ77 encode/decode pair built on `match_finder`.
//! * `huffman` — frequency accumulation, tree construction, code tables.
//! * `bitio` — the MSB-first bit writer/reader.
//! * `container` — ties the above into the on-disk format (spec.md §6).
//!
//! ## Example
//!
//! ```rs
//! use lzhuff::{compress,decompress,Params};
//! let data = b"the quick brown fox jumps over the lazy dog, the quick fox";
//! let packed = compress(data,&Params::default()).expect("compression failed");
//! let restored = decompress(&packed).expect("decompression failed");
//! assert_eq!(restored,data);
//! ```

mod error;
mod options;
pub mod token;
pub mod match_finder;
pub mod lz;
pub mod huffman;
pub mod bitio;
pub mod container;
pub mod dump;

pub use error::Error;
pub use options::{Params,STD_PARAMS};
pub use token::Value;

/// Compress `input` with the given LZ77 parameters, producing a
/// self-described container (spec.md §6).
///
/// Refuses an empty input: an empty token stream has no code book, and
/// the `N - 1` header trick cannot represent `N == 0` (spec.md §9 note
/// (c)).
pub fn compress(input: &[u8], params: &Params) -> Result<Vec<u8>,Error> {
    if input.is_empty() {
        return Err(Error::InvalidParameter("refusing to compress empty input: empty token stream has no code book".to_string()));
    }
    let tokens = lz::encode(input,params.min_match,params.max_match,params.search_window);
    log::debug!("encoded {} bytes into {} tokens",input.len(),tokens.len());
    let freq = huffman::accumulate(&tokens);
    let root = huffman::build(&freq).expect("non-empty token stream always yields nonzero frequencies");
    let code_table = huffman::build_code_table(&root);
    log::debug!("huffman code book has {} symbols",code_table.len());
    container::write(&tokens,&code_table)
}

/// Decompress a container produced by [`compress`].
pub fn decompress(input: &[u8]) -> Result<Vec<u8>,Error> {
    let tokens = container::read(input)?;
    log::debug!("decoded {} tokens from container",tokens.len());
    lz::decode(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(input: &[u8], params: &Params) {
        let packed = compress(input,params).expect("compress failed");
        let restored = decompress(&packed).expect("decompress failed");
        assert_eq!(restored,input);
    }

    #[test]
    fn round_trips_small_inputs() {
        round_trip(b"a",&STD_PARAMS);
        round_trip(b"ab",&STD_PARAMS);
        round_trip(b"I am Sam. Sam I am. I do not like this Sam I am.\n",&STD_PARAMS);
    }

    #[test]
    fn round_trips_repeated_run() {
        round_trip(&vec![b'X';23],&Params::new(1,255,255).unwrap());
    }

    #[test]
    fn round_trips_larger_pseudo_random_input() {
        let mut data = Vec::new();
        let mut state: u32 = 0x12345;
        for _ in 0..5000 {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            data.push((state >> 16) as u8);
        }
        round_trip(&data,&STD_PARAMS);
    }

    #[test]
    fn round_trips_all_256_byte_values() {
        let data: Vec<u8> = (0..=255u8).collect();
        round_trip(&data,&STD_PARAMS);
    }

    #[test]
    fn refuses_empty_input() {
        assert!(compress(b"",&STD_PARAMS).is_err());
    }

    #[test]
    fn decompress_rejects_corrupt_stream() {
        assert!(decompress(&[]).is_err());
        assert!(decompress(&[0u8]).is_err());
    }
}
