//! MySQL dialect.

use super::Dialect;

/// MySQL dialect: backtick identifiers, backslash escapes in literals.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn identifier_quote(&self) -> (&'static str, &'static str) {
        ("`", "`")
    }

    fn backslash_escapes(&self) -> bool {
        true // unless NO_BACKSLASH_ESCAPES is set on the server
    }
}
