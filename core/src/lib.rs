pub mod error;
pub mod key;
pub mod pattern;
pub mod set;
pub mod symbol;
pub mod typed;
pub mod validator;

pub use error::{ErrorKind, SigilError};
pub use key::Key;
pub use pattern::{Anchoring, MatchKind, Pattern, RegexPattern};
pub use set::{Iter, Set};
pub use symbol::{Symbol, SymbolKind, END_OF_INPUT};
pub use typed::{Identical, Typed};
pub use validator::{Predicate, TypeTag, Validator};

pub type SigilResult<T> = Result<T, SigilError>;
