//! # oxide-sql-platform
//!
//! Dialect-aware quoting of SQL identifiers, values and free-form fragments.
//!
//! This crate provides:
//! - A [`Dialect`] trait and built-in dialects (SQL Server, MySQL, PostgreSQL,
//!   SQLite, Oracle, SQL-92, IBM DB2)
//! - A [`Platform`] that quotes identifiers, identifier chains and values
//! - Lexical identifier quoting inside SQL fragments, with per-call safe words
//! - A [`Driver`] binding point for native value escaping
//!
//! ## Identifiers
//!
//! ```rust
//! use oxide_sql_platform::Platform;
//!
//! let platform = Platform::sql_server();
//! assert_eq!(platform.quote_identifier("users").unwrap(), "[users]");
//! assert_eq!(
//!     platform.quote_identifier_chain(["dbo", "users"]).unwrap(),
//!     "[dbo].[users]"
//! );
//! ```
//!
//! ## Fragments
//!
//! ```rust
//! use oxide_sql_platform::Platform;
//!
//! let platform = Platform::sql_server();
//! let sql = platform.quote_identifier_in_fragment(
//!     "(foo.bar = boo.baz) AND (foo.baz = boo.baz)",
//!     &["(", ")", "=", "and"],
//! );
//! assert_eq!(sql, "([foo].[bar] = [boo].[baz]) AND ([foo].[baz] = [boo].[baz])");
//! ```
//!
//! ## Values
//!
//! Without a driver that escapes natively, [`Platform::quote_value`] only
//! doubles quote symbols. It still works, but every call is reported as a
//! `tracing` warning on the `oxide_sql_platform::security` target and
//! counted in [`Platform::insecure_quote_count`]. Use
//! [`Platform::quote_trusted_value`] when the value is known to be safe.
//!
//! ```rust
//! use oxide_sql_platform::Platform;
//!
//! let platform = Platform::sql_server();
//! assert_eq!(platform.quote_trusted_value("Foo O'Bar"), "'Foo O''Bar'");
//! ```

pub mod config;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod fragment;
pub mod platform;

pub use config::PlatformConfig;
pub use dialect::{Dialect, PlatformKind};
pub use driver::Driver;
pub use error::{Error, Result};
pub use fragment::SafeWords;
pub use platform::{IntoIdentifierChain, Platform};
