//! The quoting platform.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::dialect::{
    Dialect, IbmDb2Dialect, MySqlDialect, OracleDialect, PlatformKind, PostgresDialect,
    Sql92Dialect, SqlServerDialect, SqliteDialect,
};
use crate::driver::Driver;
use crate::error::{Error, Result};

/// Quotes identifiers, values and SQL fragments for one SQL dialect.
///
/// The quoting symbols are fixed at construction. The only mutation is
/// binding a [`Driver`], which takes `&mut self` and therefore cannot race
/// with quoting calls.
#[derive(Debug)]
pub struct Platform {
    name: String,
    identifier_quote_start: String,
    identifier_quote_end: String,
    value_quote: String,
    identifier_separator: char,
    backslash_escapes: bool,
    quote_identifiers: bool,
    driver: Option<Arc<dyn Driver>>,
    insecure_quotes: AtomicU64,
}

impl Platform {
    /// Creates a platform using the symbols of `dialect`.
    #[must_use]
    pub fn new<D: Dialect>(dialect: D) -> Self {
        let (start, end) = dialect.identifier_quote();
        Self {
            name: dialect.name().to_string(),
            identifier_quote_start: start.to_string(),
            identifier_quote_end: end.to_string(),
            value_quote: dialect.value_quote().to_string(),
            identifier_separator: dialect.identifier_separator(),
            backslash_escapes: dialect.backslash_escapes(),
            quote_identifiers: true,
            driver: None,
            insecure_quotes: AtomicU64::new(0),
        }
    }

    /// Creates a platform for one of the built-in dialects.
    #[must_use]
    pub fn from_kind(kind: PlatformKind) -> Self {
        match kind {
            PlatformKind::SqlServer => Self::new(SqlServerDialect::new()),
            PlatformKind::MySql => Self::new(MySqlDialect::new()),
            PlatformKind::PostgreSql => Self::new(PostgresDialect::new()),
            PlatformKind::Sqlite => Self::new(SqliteDialect::new()),
            PlatformKind::Oracle => Self::new(OracleDialect::new()),
            PlatformKind::Sql92 => Self::new(Sql92Dialect::new()),
            PlatformKind::IbmDb2 => Self::new(IbmDb2Dialect::new()),
        }
    }

    /// Creates a platform with arbitrary symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] if a quote symbol is empty or if the
    /// separator is whitespace.
    pub fn custom(
        name: impl Into<String>,
        identifier_quote_start: impl Into<String>,
        identifier_quote_end: impl Into<String>,
        value_quote: impl Into<String>,
        identifier_separator: char,
    ) -> Result<Self> {
        let start = identifier_quote_start.into();
        let end = identifier_quote_end.into();
        let value_quote = value_quote.into();
        for symbol in [&start, &end, &value_quote] {
            if symbol.is_empty() {
                return Err(Error::InvalidSymbol {
                    symbol: symbol.clone(),
                    reason: "quote symbols cannot be empty",
                });
            }
        }
        if identifier_separator.is_whitespace() {
            return Err(Error::InvalidSymbol {
                symbol: identifier_separator.to_string(),
                reason: "the identifier separator cannot be whitespace",
            });
        }
        Ok(Self {
            name: name.into(),
            identifier_quote_start: start,
            identifier_quote_end: end,
            value_quote,
            identifier_separator,
            backslash_escapes: false,
            quote_identifiers: true,
            driver: None,
            insecure_quotes: AtomicU64::new(0),
        })
    }

    /// SQL Server platform.
    #[must_use]
    pub fn sql_server() -> Self {
        Self::new(SqlServerDialect::new())
    }

    /// MySQL platform.
    #[must_use]
    pub fn mysql() -> Self {
        Self::new(MySqlDialect::new())
    }

    /// PostgreSQL platform.
    #[must_use]
    pub fn postgres() -> Self {
        Self::new(PostgresDialect::new())
    }

    /// SQLite platform.
    #[must_use]
    pub fn sqlite() -> Self {
        Self::new(SqliteDialect::new())
    }

    /// Oracle platform.
    #[must_use]
    pub fn oracle() -> Self {
        Self::new(OracleDialect::new())
    }

    /// SQL-92 platform.
    #[must_use]
    pub fn sql92() -> Self {
        Self::new(Sql92Dialect::new())
    }

    /// IBM DB2 platform.
    #[must_use]
    pub fn ibm_db2() -> Self {
        Self::new(IbmDb2Dialect::new())
    }

    /// Turns identifier quoting on or off. When off, identifiers and
    /// fragments are returned unchanged.
    #[must_use]
    pub fn with_identifier_quoting(mut self, enabled: bool) -> Self {
        self.quote_identifiers = enabled;
        self
    }

    /// Enables or disables backslash escaping in value literals.
    #[must_use]
    pub fn with_backslash_escapes(mut self, enabled: bool) -> Self {
        self.backslash_escapes = enabled;
        self
    }

    /// Binds a driver, consuming and returning the platform.
    #[must_use]
    pub fn with_driver(mut self, driver: Arc<dyn Driver>) -> Self {
        self.set_driver(driver);
        self
    }

    /// Binds a driver used for native value escaping.
    pub fn set_driver(&mut self, driver: Arc<dyn Driver>) {
        debug!(platform = %self.name, driver = driver.name(), "Driver bound to platform");
        self.driver = Some(driver);
    }

    /// Returns the bound driver, if any.
    #[must_use]
    pub fn driver(&self) -> Option<&Arc<dyn Driver>> {
        self.driver.as_ref()
    }

    /// Returns whether a driver is bound.
    #[must_use]
    pub const fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    /// Returns the platform name, e.g. `SQLServer`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the symbols opening and closing a quoted identifier.
    #[must_use]
    pub fn quote_identifier_symbols(&self) -> (&str, &str) {
        (&self.identifier_quote_start, &self.identifier_quote_end)
    }

    /// Returns the symbol bracketing a quoted value.
    #[must_use]
    pub fn quote_value_symbol(&self) -> &str {
        &self.value_quote
    }

    /// Returns the character joining identifier chain segments.
    #[must_use]
    pub const fn identifier_separator(&self) -> char {
        self.identifier_separator
    }

    /// Returns whether identifiers are quoted at all.
    #[must_use]
    pub const fn quotes_identifiers(&self) -> bool {
        self.quote_identifiers
    }

    /// Returns how many values were quoted without native driver escaping.
    #[must_use]
    pub fn insecure_quote_count(&self) -> u64 {
        self.insecure_quotes.load(Ordering::Relaxed)
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Quotes a single identifier.
    ///
    /// Occurrences of the closing quote symbol inside `name` are doubled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIdentifier`] if `name` is empty.
    pub fn quote_identifier(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        if !self.quote_identifiers {
            return Ok(name.to_string());
        }
        let mut out = String::with_capacity(name.len() + 2);
        self.write_quoted_identifier(&mut out, name);
        Ok(out)
    }

    /// Quotes each segment of an identifier chain and joins the segments with
    /// the separator.
    ///
    /// A single string is split on the separator first, so `schema.table`
    /// and `["schema", "table"]` give the same result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChain`] for a chain without segments and
    /// [`Error::EmptyChainSegment`] if any segment is empty.
    pub fn quote_identifier_chain<C: IntoIdentifierChain>(&self, chain: C) -> Result<String> {
        let segments = chain.into_segments(self.identifier_separator);
        if segments.is_empty() {
            return Err(Error::EmptyChain);
        }
        if segments.iter().any(String::is_empty) {
            return Err(Error::EmptyChainSegment {
                chain: segments.join(&self.identifier_separator.to_string()),
            });
        }

        let mut out = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                out.push(self.identifier_separator);
            }
            if self.quote_identifiers {
                self.write_quoted_identifier(&mut out, segment);
            } else {
                out.push_str(segment);
            }
        }
        Ok(out)
    }

    pub(crate) fn write_quoted_identifier(&self, out: &mut String, name: &str) {
        let end = &self.identifier_quote_end;
        out.push_str(&self.identifier_quote_start);
        out.push_str(&name.replace(end.as_str(), &end.repeat(2)));
        out.push_str(end);
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Quotes a value, preferring the bound driver's native escaping.
    ///
    /// Without native escaping the value is only syntactically escaped, which
    /// is not safe for untrusted input. That path emits a security warning
    /// and bumps [`Platform::insecure_quote_count`] on every call.
    #[must_use]
    pub fn quote_value(&self, value: &str) -> String {
        if let Some(quoted) = self.driver.as_ref().and_then(|d| d.quote_value(value)) {
            return quoted;
        }
        self.report_insecure_quoting();
        self.quote_trusted_value(value)
    }

    /// Quotes a value the caller knows is safe to escape syntactically.
    ///
    /// The value quote symbol is doubled; nothing else is unescaped or
    /// collapsed, so already-doubled symbols double again.
    #[must_use]
    pub fn quote_trusted_value(&self, value: &str) -> String {
        let quote = &self.value_quote;
        let mut out = String::with_capacity(value.len() + 2 * quote.len());
        out.push_str(quote);
        if self.backslash_escapes {
            out.push_str(&escape_backslashes(value).replace(quote.as_str(), &quote.repeat(2)));
        } else {
            out.push_str(&value.replace(quote.as_str(), &quote.repeat(2)));
        }
        out.push_str(quote);
        out
    }

    /// Quotes every value of a list and joins them with `", "`.
    ///
    /// The security warning fires once for the whole call unless the driver
    /// escaped every value. An empty list never counts as driver-escaped.
    pub fn quote_value_list<I>(&self, values: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let native = self.driver.as_ref();
        let mut all_native = true;
        let quoted: Vec<String> = values
            .into_iter()
            .map(|value| {
                let value = value.as_ref();
                native.and_then(|d| d.quote_value(value)).unwrap_or_else(|| {
                    all_native = false;
                    self.quote_trusted_value(value)
                })
            })
            .collect();
        if quoted.is_empty() || !all_native {
            self.report_insecure_quoting();
        }
        quoted.join(", ")
    }

    fn report_insecure_quoting(&self) {
        self.insecure_quotes.fetch_add(1, Ordering::Relaxed);
        warn!(
            target: "oxide_sql_platform::security",
            platform = %self.name,
            "Attempting to quote a value in {} without extension/driver support can introduce security vulnerabilities in a production environment",
            self.name
        );
    }
}

/// Backslash-escapes the characters MySQL treats specially in literals.
fn escape_backslashes(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{1a}' => out.push_str("\\Z"),
            _ => out.push(c),
        }
    }
    out
}

/// Converts an input into the segments of an identifier chain.
///
/// Implemented for single names (split on the separator) and for sequences
/// of segments (taken as they are).
pub trait IntoIdentifierChain {
    /// Returns the chain segments.
    fn into_segments(self, separator: char) -> Vec<String>;
}

impl IntoIdentifierChain for &str {
    fn into_segments(self, separator: char) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        self.split(separator).map(str::to_string).collect()
    }
}

impl IntoIdentifierChain for String {
    fn into_segments(self, separator: char) -> Vec<String> {
        self.as_str().into_segments(separator)
    }
}

impl IntoIdentifierChain for &String {
    fn into_segments(self, separator: char) -> Vec<String> {
        self.as_str().into_segments(separator)
    }
}

impl<S: AsRef<str>> IntoIdentifierChain for &[S] {
    fn into_segments(self, _separator: char) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoIdentifierChain for [S; N] {
    fn into_segments(self, _separator: char) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoIdentifierChain for &[S; N] {
    fn into_segments(self, _separator: char) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoIdentifierChain for Vec<S> {
    fn into_segments(self, _separator: char) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoIdentifierChain for &Vec<S> {
    fn into_segments(self, _separator: char) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_symbols() {
        let platform = Platform::sql_server();
        assert_eq!(platform.name(), "SQLServer");
        assert_eq!(platform.quote_identifier_symbols(), ("[", "]"));
        assert_eq!(platform.quote_value_symbol(), "'");
        assert_eq!(platform.identifier_separator(), '.');
        assert!(platform.quotes_identifiers());
        assert!(!platform.has_driver());
    }

    #[test]
    fn test_from_kind_names() {
        let names: Vec<String> = PlatformKind::ALL
            .iter()
            .map(|k| Platform::from_kind(*k).name().to_string())
            .collect();
        assert_eq!(
            names,
            ["SQLServer", "MySQL", "PostgreSQL", "SQLite", "Oracle", "SQL92", "IBM DB2"]
        );
    }

    #[test]
    fn test_quote_identifier_doubles_closing_symbol() {
        assert_eq!(Platform::sql_server().quote_identifier("a]b").unwrap(), "[a]]b]");
        assert_eq!(Platform::postgres().quote_identifier("a\"b").unwrap(), "\"a\"\"b\"");
        assert_eq!(Platform::mysql().quote_identifier("a`b").unwrap(), "`a``b`");
    }

    #[test]
    fn test_quote_identifier_empty_fails() {
        let err = Platform::sql_server().quote_identifier("").unwrap_err();
        assert!(matches!(err, Error::EmptyIdentifier));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_identifier_quoting_disabled() {
        let platform = Platform::oracle().with_identifier_quoting(false);
        assert_eq!(platform.quote_identifier("users").unwrap(), "users");
        assert_eq!(platform.quote_identifier_chain("hr.users").unwrap(), "hr.users");
        assert!(platform.quote_identifier("").is_err());
    }

    #[test]
    fn test_chain_inputs() {
        let platform = Platform::sql_server();
        let owned = vec!["schema".to_string(), "table".to_string()];
        assert_eq!(platform.quote_identifier_chain(&owned).unwrap(), "[schema].[table]");
        assert_eq!(platform.quote_identifier_chain(owned).unwrap(), "[schema].[table]");
        assert_eq!(
            platform.quote_identifier_chain(&["a", "b", "c"][..]).unwrap(),
            "[a].[b].[c]"
        );
        assert_eq!(
            platform.quote_identifier_chain(String::from("db.schema.t")).unwrap(),
            "[db].[schema].[t]"
        );
    }

    #[test]
    fn test_chain_errors() {
        let platform = Platform::sql_server();
        assert!(matches!(platform.quote_identifier_chain(""), Err(Error::EmptyChain)));
        assert!(matches!(
            platform.quote_identifier_chain(Vec::<String>::new()),
            Err(Error::EmptyChain)
        ));
        assert!(matches!(
            platform.quote_identifier_chain("schema..table"),
            Err(Error::EmptyChainSegment { chain }) if chain == "schema..table"
        ));
        assert!(matches!(
            platform.quote_identifier_chain(["schema", ""]),
            Err(Error::EmptyChainSegment { .. })
        ));
    }

    #[test]
    fn test_db2_system_naming_chain() {
        let platform = Platform::new(IbmDb2Dialect::with_system_naming());
        assert_eq!(
            platform.quote_identifier_chain("lib/file").unwrap(),
            "\"lib\"/\"file\""
        );
    }

    #[test]
    fn test_custom_platform() {
        let platform = Platform::custom("Custom", "<", ">", "\"", ':').unwrap();
        assert_eq!(platform.quote_identifier_chain("a:b").unwrap(), "<a>:<b>");
        assert_eq!(platform.quote_trusted_value("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_custom_platform_rejects_bad_symbols() {
        assert!(matches!(
            Platform::custom("Bad", "", "]", "'", '.'),
            Err(Error::InvalidSymbol { .. })
        ));
        assert!(matches!(
            Platform::custom("Bad", "[", "]", "'", ' '),
            Err(Error::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn test_mysql_backslash_escaping() {
        let platform = Platform::mysql();
        assert_eq!(platform.quote_trusted_value("O'Bar"), "'O''Bar'");
        assert_eq!(platform.quote_trusted_value("a\\'b"), "'a\\\\''b'");
        assert_eq!(platform.quote_trusted_value("line\nbreak"), "'line\\nbreak'");
        let plain = Platform::mysql().with_backslash_escapes(false);
        assert_eq!(plain.quote_trusted_value("a\\b"), "'a\\b'");
    }

    #[test]
    fn test_insecure_counter() {
        let platform = Platform::sqlite();
        assert_eq!(platform.insecure_quote_count(), 0);
        let _ = platform.quote_value("x");
        let _ = platform.quote_value("y");
        assert_eq!(platform.insecure_quote_count(), 2);
        let _ = platform.quote_trusted_value("z");
        assert_eq!(platform.insecure_quote_count(), 2);
    }

    #[test]
    fn test_platform_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Platform>();
    }
}
