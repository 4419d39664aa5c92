//! Microsoft SQL Server dialect.

use super::Dialect;

/// SQL Server dialect: identifiers in square brackets.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "SQLServer"
    }

    fn identifier_quote(&self) -> (&'static str, &'static str) {
        ("[", "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_server_dialect() {
        let dialect = SqlServerDialect::new();
        assert_eq!(dialect.name(), "SQLServer");
        assert_eq!(dialect.identifier_quote(), ("[", "]"));
        assert_eq!(dialect.value_quote(), "'");
        assert_eq!(dialect.identifier_separator(), '.');
        assert!(!dialect.backslash_escapes());
    }
}
