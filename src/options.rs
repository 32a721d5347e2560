//! Encoder parameters.
//!
//! Mirrors the teacher's `Options`/`STD_OPTIONS` pattern (see the crate's
//! original `lib.rs`): a small `Clone`able struct with a constant default,
//! constructed once per invocation and validated up front rather than
//! checked piecemeal in the encoder's hot loop.

use crate::Error;

/// Parameters controlling the LZ77 stage.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct Params {
    /// minimum admissible match length
    pub min_match: u8,
    /// cap on any single back-reference length
    pub max_match: u8,
    /// maximum `distance` of any back-reference
    pub search_window: u16
}

/// Defaults chosen to reproduce the literal end-to-end scenarios in the
/// specification when callers don't override them explicitly.
pub const STD_PARAMS: Params = Params {
    min_match: 3,
    max_match: 255,
    search_window: 4096
};

impl Default for Params {
    fn default() -> Self {
        STD_PARAMS
    }
}

impl Params {
    /// Build and validate a parameter set.
    pub fn new(min_match: u8, max_match: u8, search_window: u16) -> Result<Self,Error> {
        let p = Self { min_match, max_match, search_window };
        p.validate()?;
        Ok(p)
    }
    fn validate(&self) -> Result<(),Error> {
        if self.min_match == 0 {
            return Err(Error::InvalidParameter("min_match must be >= 1".to_string()));
        }
        if self.max_match < self.min_match {
            return Err(Error::InvalidParameter("max_match must be >= min_match".to_string()));
        }
        if self.search_window == 0 {
            return Err(Error::InvalidParameter("search_window must be >= 1".to_string()));
        }
        Ok(())
    }
}

#[test]
fn rejects_zero_min_match() {
    assert!(Params::new(0,10,100).is_err());
}

#[test]
fn rejects_max_below_min() {
    assert!(Params::new(10,5,100).is_err());
}

#[test]
fn rejects_zero_window() {
    assert!(Params::new(1,10,0).is_err());
}

#[test]
fn accepts_std_params() {
    assert!(Params::new(STD_PARAMS.min_match,STD_PARAMS.max_match,STD_PARAMS.search_window).is_ok());
}
