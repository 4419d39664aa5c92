//! SQL dialect symbols.
//!
//! Every database quotes identifiers and string literals slightly
//! differently. A [`Dialect`] describes those symbols; a
//! [`Platform`](crate::Platform) is built from one and does the actual
//! quoting.

mod ibm_db2;
mod mysql;
mod oracle;
mod postgres;
mod sql92;
mod sql_server;
mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

pub use ibm_db2::IbmDb2Dialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
pub use sql92::Sql92Dialect;
pub use sql_server::SqlServerDialect;
pub use sqlite::SqliteDialect;

use crate::error::Error;

/// Trait for the quoting symbols of a SQL dialect.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the symbols opening and closing a quoted identifier.
    fn identifier_quote(&self) -> (&'static str, &'static str) {
        ("\"", "\"")
    }

    /// Returns the symbol bracketing a string literal.
    fn value_quote(&self) -> &'static str {
        "'"
    }

    /// Returns the character joining the segments of an identifier chain.
    fn identifier_separator(&self) -> char {
        '.'
    }

    /// Returns whether backslash is an escape character inside string literals.
    fn backslash_escapes(&self) -> bool {
        false
    }
}

/// The built-in dialects, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// Microsoft SQL Server.
    #[serde(alias = "mssql", alias = "sql_server")]
    SqlServer,
    /// MySQL / MariaDB.
    #[serde(alias = "mariadb")]
    MySql,
    /// PostgreSQL.
    #[serde(alias = "postgres", alias = "pgsql")]
    PostgreSql,
    /// SQLite.
    Sqlite,
    /// Oracle.
    Oracle,
    /// ANSI SQL-92.
    Sql92,
    /// IBM DB2.
    #[serde(alias = "db2", alias = "ibm_db2")]
    IbmDb2,
}

impl PlatformKind {
    /// All built-in kinds.
    pub const ALL: [Self; 7] = [
        Self::SqlServer,
        Self::MySql,
        Self::PostgreSql,
        Self::Sqlite,
        Self::Oracle,
        Self::Sql92,
        Self::IbmDb2,
    ];

    /// Returns the canonical lowercase name used on the command line and in
    /// configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SqlServer => "sqlserver",
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::Oracle => "oracle",
            Self::Sql92 => "sql92",
            Self::IbmDb2 => "ibmdb2",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pgsql" => Ok(Self::PostgreSql),
            "sqlite" => Ok(Self::Sqlite),
            "oracle" => Ok(Self::Oracle),
            "sql92" => Ok(Self::Sql92),
            "ibmdb2" | "db2" => Ok(Self::IbmDb2),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}
