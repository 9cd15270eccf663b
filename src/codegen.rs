use itertools::Itertools as _;
use log::trace;
use ruast::{Array, Call, Expr, Lit, Path, PathSegment};

use sigil_core::{
    Anchoring, ErrorKind, Pattern, Set, SigilResult, Symbol, SymbolKind, Validator,
};

/// The pattern of a [`SymbolDef`], as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternDef {
    /// No pattern, only valid for the end-of-input sentinel.
    Absent,
    /// Must hold exactly one character.
    Character(&'static str),
    String(&'static str),
    Regexp(&'static str),
    RegexpAnywhere(&'static str),
}

/// A symbol definition which can live in a `const` table.
///
/// Generated tables hold these definitions; [`SymbolDef::build`] turns them
/// into symbols at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDef {
    pub kind: SymbolKind,
    pub id: &'static str,
    pub pattern: PatternDef,
}

impl SymbolDef {
    pub const fn new(kind: SymbolKind, id: &'static str, pattern: PatternDef) -> Self {
        Self { kind, id, pattern }
    }

    pub fn build(&self) -> SigilResult<Symbol> {
        let build: fn(&'static str, Pattern) -> Symbol = match self.kind {
            SymbolKind::EndOfInput => return Ok(Symbol::end_of_input()),
            SymbolKind::Terminal => Symbol::terminal,
            SymbolKind::NonTerminal => Symbol::non_terminal,
            SymbolKind::Start => Symbol::start,
        };

        let pattern = match self.pattern {
            PatternDef::Absent => return Err(ErrorKind::MissingPattern(self.id.to_owned()).into()),
            PatternDef::Character(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Pattern::character(ch),
                    _ => return Err(ErrorKind::InvalidCharacter(s.to_owned()).into()),
                }
            }
            PatternDef::String(s) => Pattern::string(s),
            PatternDef::Regexp(source) => Pattern::regexp(source)?,
            PatternDef::RegexpAnywhere(source) => Pattern::regexp_anywhere(source)?,
        };

        Ok(build(self.id, pattern))
    }
}

/// Build a set from a table of definitions, in table order.
pub fn build_symbol_set(defs: &[SymbolDef], validator: Validator<Symbol>) -> SigilResult<Set<Symbol>> {
    let symbols = defs.iter().map(SymbolDef::build).collect::<SigilResult<Vec<_>>>()?;
    Set::with_validator(symbols, validator)
}

fn path(segments: &[&'static str]) -> Path {
    Path::new(segments.iter().map(|segment| PathSegment::simple(*segment)).collect())
}

/// A string literal expression, escaped so it reads back as `value`.
fn gen_str_lit(value: &str) -> Expr {
    Lit::str(value.escape_default().to_string().as_str()).into()
}

fn gen_kind_value(kind: SymbolKind) -> Expr {
    path(&["sigil", "SymbolKind", kind.as_str()]).into()
}

fn gen_pattern_value(pattern: Option<&Pattern>) -> Expr {
    let (variant, value) = match pattern {
        None => return path(&["sigil", "codegen", "PatternDef", "Absent"]).into(),
        Some(Pattern::Character(ch)) => ("Character", ch.to_string()),
        Some(Pattern::String(s)) => ("String", s.clone()),
        Some(Pattern::Regexp(regex)) => match regex.anchoring() {
            Anchoring::Start => ("Regexp", regex.source().to_owned()),
            Anchoring::Anywhere => ("RegexpAnywhere", regex.source().to_owned()),
        },
    };

    Call::new(
        path(&["sigil", "codegen", "PatternDef", variant]),
        vec![gen_str_lit(&value)],
    )
    .into()
}

/// Generate the `SymbolDef` constructor call of a symbol.
pub fn codegen_symbol(symbol: &Symbol) -> Expr {
    Call::new(
        path(&["sigil", "codegen", "SymbolDef", "new"]),
        vec![
            gen_kind_value(symbol.kind()),
            gen_str_lit(symbol.identifier()),
            gen_pattern_value(symbol.pattern()),
        ],
    )
    .into()
}

/// Generate the table value of a symbol set.
pub fn codegen_symbol_table(symbols: &Set<Symbol>) -> Expr {
    trace!(
        "generating symbol table [{}]",
        symbols.values().map(Symbol::identifier).join(", ")
    );

    Array::new(symbols.values().map(codegen_symbol).collect()).into()
}

/// Render the symbol set as a `pub const` table item named `name`.
pub fn render_symbol_table(name: &str, symbols: &Set<Symbol>) -> String {
    format!(
        "pub const {name}: [sigil::codegen::SymbolDef; {}] = {};\n",
        symbols.len(),
        codegen_symbol_table(symbols)
    )
}

#[cfg(test)]
pub mod tests {
    use sigil_core::{ErrorKind, Pattern, Set, Symbol, SymbolKind, Validator};

    use super::{build_symbol_set, codegen_symbol_table, render_symbol_table, PatternDef, SymbolDef};

    const FIXTURE_TABLE: [SymbolDef; 4] = [
        SymbolDef::new(SymbolKind::Start, "S", PatternDef::String("S")),
        SymbolDef::new(SymbolKind::Terminal, "+", PatternDef::Character("+")),
        SymbolDef::new(SymbolKind::Terminal, "n", PatternDef::Regexp("[0-9]+")),
        SymbolDef::new(SymbolKind::EndOfInput, "$", PatternDef::Absent),
    ];

    #[test]
    fn test_build_symbol_set() {
        let symbols = build_symbol_set(&FIXTURE_TABLE, Validator::of_type("Symbol")).unwrap();

        assert_eq!(symbols.join(" "), "S + n $");
        assert!(symbols.start().is_some());
        assert_eq!(symbols.symbol("n").unwrap().do_match("42+1"), Some("42"));
        assert_eq!(symbols.end_of_input().unwrap().do_match(""), Some(""));
    }

    #[test]
    fn test_build_rejects_bad_definitions() {
        let err = SymbolDef::new(SymbolKind::Terminal, "ab", PatternDef::Character("ab"))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidCharacter("ab".to_owned()));

        let err = SymbolDef::new(SymbolKind::NonTerminal, "E", PatternDef::Absent)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingPattern("E".to_owned()));

        let err = SymbolDef::new(SymbolKind::Terminal, "n", PatternDef::Regexp("[0-9"))
            .build()
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidPattern { .. }));
    }

    #[test]
    fn test_build_end_of_input_ignores_pattern() {
        for pattern in [PatternDef::Absent, PatternDef::String("eof")] {
            let sym = SymbolDef::new(SymbolKind::EndOfInput, "eof", pattern).build().unwrap();
            assert_eq!(sym, Symbol::end_of_input());
        }
    }

    #[test]
    fn test_build_keeps_regexp_anchoring() {
        let sym = SymbolDef::new(SymbolKind::Terminal, "n", PatternDef::RegexpAnywhere("[0-9]+"))
            .build()
            .unwrap();

        assert_eq!(sym.do_match("abc123"), Some("123"));
    }

    #[test]
    fn test_codegen_symbol_table() {
        let symbols = Set::new([
            Symbol::terminal("plus", '+'),
            Symbol::terminal("number", Pattern::regexp_anywhere("[0-9]+").unwrap()),
            Symbol::end_of_input(),
        ]);

        let ast = codegen_symbol_table(&symbols);
        println!("{ast}");

        let source = ast.to_string();
        assert!(source.contains("SymbolDef"));
        assert!(source.contains("RegexpAnywhere"));
        assert!(source.contains("EndOfInput"));
        assert!(source.contains("Absent"));
    }

    #[test]
    fn test_codegen_escapes_literals() {
        let symbols = Set::new([
            Symbol::terminal("digits", Pattern::regexp(r"\d+").unwrap()),
            Symbol::terminal("quote", '"'),
            Symbol::terminal(r"back\slash", "\\"),
        ]);

        let source = codegen_symbol_table(&symbols).to_string();

        assert!(source.contains(r#"PatternDef::Regexp("\\d+")"#));
        assert!(source.contains(r#"PatternDef::Character("\"")"#));
        assert!(source.contains(r#""back\\slash""#));
        assert!(source.contains(r#"PatternDef::String("\\")"#));
        assert!(!source.contains(r#"("\d+")"#));
    }

    #[test]
    fn test_render_symbol_table() {
        let symbols = build_symbol_set(&FIXTURE_TABLE, Validator::None).unwrap();
        let source = render_symbol_table("SYMBOLS", &symbols);

        assert!(source.starts_with("pub const SYMBOLS: [sigil::codegen::SymbolDef; 4] = "));
    }
}
