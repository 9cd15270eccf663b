use log::trace;
use regex::Regex;

use crate::{ErrorKind, SigilResult};

/// The strategy used to test a symbol against input.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MatchKind {
    Character,
    String,
    Regexp,
}

/// Where a regular expression is allowed to match in the remaining input.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Anchoring {
    /// The match must begin at the first character of the input.
    #[default]
    Start,
    /// The first match found anywhere in the input is taken.
    Anywhere,
}

/// A compiled regular expression, remembering its source.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    anchoring: Anchoring,
    regex: Regex,
}

impl RegexPattern {
    pub fn new(source: impl Into<String>, anchoring: Anchoring) -> SigilResult<Self> {
        let source = source.into();
        let compiled = match anchoring {
            Anchoring::Start => format!(r"\A(?:{source})"),
            Anchoring::Anywhere => source.clone(),
        };

        trace!("compiling /{compiled}/");
        let regex =
            Regex::new(&compiled).map_err(|err| ErrorKind::invalid_pattern(&source, err))?;

        Ok(Self {
            source,
            anchoring,
            regex,
        })
    }

    /// The expression as written, without the anchor.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    pub fn find<'i>(&self, input: &'i str) -> Option<&'i str> {
        self.regex.find(input).map(|m| m.as_str())
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.anchoring == other.anchoring
    }
}

impl Eq for RegexPattern {}

/// What a symbol matches, tagged by its [`MatchKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Character(char),
    String(String),
    Regexp(RegexPattern),
}

impl Pattern {
    pub fn character(ch: char) -> Self {
        Self::Character(ch)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// A regular expression which must match at the start of the input.
    pub fn regexp(source: impl Into<String>) -> SigilResult<Self> {
        RegexPattern::new(source, Anchoring::Start).map(Self::Regexp)
    }

    /// A regular expression taking its first match anywhere in the input.
    pub fn regexp_anywhere(source: impl Into<String>) -> SigilResult<Self> {
        RegexPattern::new(source, Anchoring::Anywhere).map(Self::Regexp)
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            Self::Character(_) => MatchKind::Character,
            Self::String(_) => MatchKind::String,
            Self::Regexp(_) => MatchKind::Regexp,
        }
    }

    /// Match the pattern against the input, returning the consumed slice.
    pub fn find<'i>(&self, input: &'i str) -> Option<&'i str> {
        match self {
            Self::Character(ch) => input
                .chars()
                .next()
                .filter(|first| first == ch)
                .map(|first| &input[..first.len_utf8()]),
            Self::String(s) => input.starts_with(s.as_str()).then(|| &input[..s.len()]),
            Self::Regexp(regex) => regex.find(input),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character(ch) => write!(f, "{ch:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Regexp(regex) => write!(f, "/{}/", regex.source()),
        }
    }
}

impl From<char> for Pattern {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<RegexPattern> for Pattern {
    fn from(value: RegexPattern) -> Self {
        Self::Regexp(value)
    }
}
