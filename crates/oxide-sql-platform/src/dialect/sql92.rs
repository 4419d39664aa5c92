//! ANSI SQL-92 dialect.

use super::Dialect;

/// A generic dialect using SQL-92 quoting rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sql92Dialect;

impl Sql92Dialect {
    /// Creates a new SQL-92 dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for Sql92Dialect {
    fn name(&self) -> &'static str {
        "SQL92"
    }
}
