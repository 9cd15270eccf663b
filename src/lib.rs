//! Grammar symbols and validated sets.
//!
//! This crate re-exports [`sigil_core`] and adds [`codegen`], which renders
//! symbol tables as Rust source to be compiled with the crate using them.
pub use sigil_core::*;

pub mod codegen;

pub mod prelude {
    pub use crate::codegen::{PatternDef, SymbolDef};
    pub use sigil_core::{
        Identical, Key, MatchKind, Pattern, Set, SigilResult, Symbol, SymbolKind, Typed,
        Validator,
    };
}
