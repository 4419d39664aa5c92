//! Oracle dialect.

use super::Dialect;

/// Oracle dialect.
///
/// Quoted identifiers are case-sensitive in Oracle, so deployments that rely
/// on implicit upper-casing usually build the platform with identifier
/// quoting turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect;

impl OracleDialect {
    /// Creates a new Oracle dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "Oracle"
    }
}
