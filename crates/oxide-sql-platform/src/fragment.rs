//! Identifier quoting inside free-form SQL fragments.
//!
//! A fragment such as `(foo.bar = boo.baz) AND (foo.baz = boo.baz)` is not
//! parsed. It is split into lexical tokens; identifier words are quoted, and
//! everything else (whitespace, separators, punctuation, already-quoted text
//! and safe words) is copied through unchanged.

use std::collections::HashSet;

use tracing::trace;

use crate::platform::Platform;

/// Words that are always left unquoted.
const BUILTIN_SAFE_WORDS: [&str; 2] = ["*", "as"];

/// A case-insensitive set of words that fragment quoting leaves untouched.
///
/// `*` and `as` are always members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeWords {
    words: HashSet<String>,
}

impl SafeWords {
    /// Creates a set from the given words plus the built-in ones.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = BUILTIN_SAFE_WORDS
            .iter()
            .map(|w| (*w).to_string())
            .chain(words.into_iter().map(|w| w.as_ref().to_lowercase()))
            .collect();
        Self { words }
    }

    /// Returns whether `word` is safe, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Returns the number of distinct safe words, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: the built-in words are members of every set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for SafeWords {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl<S: AsRef<str>> FromIterator<S> for SafeWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A lexical token of a SQL fragment. Each variant borrows its exact source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FragmentToken<'a> {
    /// A run of identifier characters.
    Word(&'a str),
    /// The identifier separator.
    Separator(&'a str),
    /// A run of whitespace.
    Whitespace(&'a str),
    /// An already-quoted identifier or a string literal.
    Quoted(&'a str),
    /// Any other single character.
    Symbol(&'a str),
}

/// Splits a fragment into [`FragmentToken`]s.
pub(crate) struct FragmentLexer<'a> {
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    separator: char,
    identifier_quote: (&'a str, &'a str),
    value_quote: &'a str,
}

impl<'a> FragmentLexer<'a> {
    /// Creates a lexer recognising the given platform symbols.
    pub(crate) const fn new(
        input: &'a str,
        separator: char,
        identifier_quote: (&'a str, &'a str),
        value_quote: &'a str,
    ) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            separator,
            identifier_quote,
            value_quote,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn text(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '$'
    }

    /// Zero-width symbols never open a span.
    fn opens_span(&self, open: &str, close: &str) -> bool {
        !open.is_empty() && !close.is_empty() && self.rest().starts_with(open)
    }

    /// Scans a span opened by `open` up to the matching `close`. A doubled
    /// `close` is an escaped symbol. Unterminated spans run to the end.
    fn scan_quoted(&mut self, open: &str, close: &str) {
        self.pos += open.len();
        loop {
            if self.rest().starts_with(close) {
                self.pos += close.len();
                if self.rest().starts_with(close) {
                    self.pos += close.len();
                    continue;
                }
                break;
            }
            if self.advance().is_none() {
                break;
            }
        }
    }
}

impl<'a> Iterator for FragmentLexer<'a> {
    type Item = FragmentToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.start = self.pos;
        let c = self.peek()?;

        if c.is_whitespace() {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }
            return Some(FragmentToken::Whitespace(self.text()));
        }

        if c == self.separator {
            self.advance();
            return Some(FragmentToken::Separator(self.text()));
        }

        if Self::is_word_char(c) {
            while self.peek().is_some_and(Self::is_word_char) {
                self.advance();
            }
            return Some(FragmentToken::Word(self.text()));
        }

        let (open, close) = self.identifier_quote;
        if self.opens_span(open, close) {
            self.scan_quoted(open, close);
            return Some(FragmentToken::Quoted(self.text()));
        }
        let value_quote = self.value_quote;
        if self.opens_span(value_quote, value_quote) {
            self.scan_quoted(value_quote, value_quote);
            return Some(FragmentToken::Quoted(self.text()));
        }

        self.advance();
        Some(FragmentToken::Symbol(self.text()))
    }
}

impl Platform {
    /// Quotes every identifier inside a SQL fragment.
    ///
    /// Words matching one of `safe_words` (case-insensitively) are kept as
    /// they are, as are whitespace, the identifier separator, punctuation and
    /// text that is already quoted. Dotted chains are quoted segment by
    /// segment:
    ///
    /// ```rust
    /// use oxide_sql_platform::Platform;
    ///
    /// let platform = Platform::sql_server();
    /// assert_eq!(
    ///     platform.quote_identifier_in_fragment("(foo.bar = boo.baz) AND x", &["and"]),
    ///     "([foo].[bar] = [boo].[baz]) AND [x]"
    /// );
    /// ```
    ///
    /// This is lexical only and never fails: malformed input yields a best
    /// effort result.
    #[must_use]
    pub fn quote_identifier_in_fragment(&self, fragment: &str, safe_words: &[&str]) -> String {
        self.quote_identifier_in_fragment_with(fragment, &SafeWords::new(safe_words))
    }

    /// Same as [`Platform::quote_identifier_in_fragment`] with a prebuilt
    /// [`SafeWords`] set.
    #[must_use]
    pub fn quote_identifier_in_fragment_with(
        &self,
        fragment: &str,
        safe_words: &SafeWords,
    ) -> String {
        if !self.quotes_identifiers() {
            return fragment.to_string();
        }

        let lexer = FragmentLexer::new(
            fragment,
            self.identifier_separator(),
            self.quote_identifier_symbols(),
            self.quote_value_symbol(),
        );

        let mut out = String::with_capacity(fragment.len() + 8);
        let mut quoted_words = 0_usize;
        for token in lexer {
            match token {
                FragmentToken::Word(word) if !safe_words.contains(word) => {
                    self.write_quoted_identifier(&mut out, word);
                    quoted_words += 1;
                }
                FragmentToken::Word(text)
                | FragmentToken::Separator(text)
                | FragmentToken::Whitespace(text)
                | FragmentToken::Quoted(text)
                | FragmentToken::Symbol(text) => out.push_str(text),
            }
        }

        trace!(
            platform = self.name(),
            fragment,
            quoted_words,
            "Quoted identifiers in fragment"
        );
        out
    }
}
