use crate::{Identical, MatchKind, Pattern, Set, Typed};

/// Identifier of the end-of-input sentinel.
pub const END_OF_INPUT: &str = "$";

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum SymbolKind {
    Terminal,
    NonTerminal,
    /// The non-terminal of the grammar's entry rule.
    Start,
    /// The terminal found once the input is exhausted.
    EndOfInput,
}

impl SymbolKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::NonTerminal => "NonTerminal",
            Self::Start => "Start",
            Self::EndOfInput => "EndOfInput",
        }
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal | Self::EndOfInput)
    }

    #[inline(always)]
    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Self::NonTerminal | Self::Start)
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical element of a grammar.
///
/// Symbols are immutable once built. Every kind but [`SymbolKind::EndOfInput`]
/// carries a [`Pattern`] deciding which prefix of the input it consumes.
///
/// # Example
///
/// ```
/// use sigil_core::{Pattern, Symbol};
///
/// let keyword = Symbol::terminal("function", "function");
/// let number = Symbol::terminal("number", Pattern::regexp("[0-9]+").unwrap());
///
/// assert_eq!(keyword.do_match("function foo"), Some("function"));
/// assert_eq!(number.do_match("123abc"), Some("123"));
/// assert_eq!(number.do_match("abc"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// *Unique* identifier of the symbol within its grammar
    id: String,
    kind: SymbolKind,
    pattern: Option<Pattern>,
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl Symbol {
    fn new(kind: SymbolKind, id: impl Into<String>, pattern: impl Into<Pattern>) -> Self {
        Self {
            id: id.into(),
            kind,
            pattern: Some(pattern.into()),
        }
    }

    pub fn terminal(id: impl Into<String>, pattern: impl Into<Pattern>) -> Self {
        Self::new(SymbolKind::Terminal, id, pattern)
    }

    pub fn non_terminal(id: impl Into<String>, pattern: impl Into<Pattern>) -> Self {
        Self::new(SymbolKind::NonTerminal, id, pattern)
    }

    /// Creates the start symbol (S)
    pub fn start(id: impl Into<String>, pattern: impl Into<Pattern>) -> Self {
        Self::new(SymbolKind::Start, id, pattern)
    }

    /// Creates the end-of-input terminal ($)
    pub fn end_of_input() -> Self {
        Self {
            id: END_OF_INPUT.to_owned(),
            kind: SymbolKind::EndOfInput,
            pattern: None,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// The match kind of the symbol, `None` for the end-of-input sentinel.
    pub fn match_kind(&self) -> Option<MatchKind> {
        self.pattern.as_ref().map(Pattern::kind)
    }

    /// Match the symbol against the remaining input.
    ///
    /// Returns the consumed prefix, or `None` when the symbol does not match.
    /// The end-of-input sentinel only matches an empty input, consuming nothing.
    pub fn do_match<'i>(&self, input: &'i str) -> Option<&'i str> {
        match (self.kind, &self.pattern) {
            (SymbolKind::EndOfInput, _) => input.is_empty().then_some(input),
            (_, Some(pattern)) => pattern.find(input),
            (_, None) => None,
        }
    }

    #[inline(always)]
    pub fn is_character_match(&self) -> bool {
        matches!(self.match_kind(), Some(MatchKind::Character))
    }

    #[inline(always)]
    pub fn is_string_match(&self) -> bool {
        matches!(self.match_kind(), Some(MatchKind::String))
    }

    #[inline(always)]
    pub fn is_regexp_match(&self) -> bool {
        matches!(self.match_kind(), Some(MatchKind::Regexp))
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    #[inline(always)]
    pub fn is_non_terminal(&self) -> bool {
        self.kind.is_non_terminal()
    }

    #[inline(always)]
    pub fn is_start(&self) -> bool {
        matches!(self.kind, SymbolKind::Start)
    }

    #[inline(always)]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self.kind, SymbolKind::EndOfInput)
    }
}

impl Typed for Symbol {
    fn type_name(&self) -> &str {
        self.kind.as_str()
    }

    /// A start symbol is also a non-terminal, the sentinel also a terminal.
    fn is_a(&self, tag: &str) -> bool {
        tag == "Symbol"
            || tag == self.kind.as_str()
            || (tag == SymbolKind::Terminal.as_str() && self.is_terminal())
            || (tag == SymbolKind::NonTerminal.as_str() && self.is_non_terminal())
    }
}

impl Identical for Symbol {
    fn is_identical(&self, other: &Self) -> bool {
        self == other
    }
}

impl Set<Symbol> {
    pub fn terminals(&self) -> Set<Symbol> {
        self.filter(Symbol::is_terminal)
    }

    pub fn non_terminals(&self) -> Set<Symbol> {
        self.filter(Symbol::is_non_terminal)
    }

    pub fn start(&self) -> Option<&Symbol> {
        self.values().find(|sym| sym.is_start())
    }

    pub fn end_of_input(&self) -> Option<&Symbol> {
        self.values().find(|sym| sym.is_end_of_input())
    }

    pub fn symbol(&self, id: &str) -> Option<&Symbol> {
        self.values().find(|sym| sym.identifier() == id)
    }

    /// The first symbol, in set order, matching the input, with the prefix it consumes.
    pub fn first_match<'i>(&self, input: &'i str) -> Option<(&Symbol, &'i str)> {
        self.values()
            .find_map(|sym| sym.do_match(input).map(|matched| (sym, matched)))
    }
}
