//! Core runtime for Sarf: the ordered root index, the bucketed scheme store,
//! the derivation engine, and the lexicon facade that ties them together.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod engine;
pub mod error;
pub mod index;
pub mod lexicon;
pub mod obs;
pub mod root;
pub mod scheme;
pub mod snapshot;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or snapshots are re-exported here.
///

pub mod prelude {
    pub use crate::{
        engine::{apply_scheme, find_root_from_word, validate},
        index::RootIndex,
        lexicon::{Analysis, Lexicon},
        root::{Derivative, Root},
        scheme::{Scheme, SchemeStore},
    };
}
