//! # oxide-sql-ddl
//!
//! Platform-agnostic DDL column definitions.
//!
//! A [`Column`] describes itself as [`ExpressionData`]: a template plus
//! parameters tagged as identifiers, values or literals. Nothing is quoted
//! until the data is rendered for a concrete
//! [`Platform`](oxide_sql_platform::Platform):
//!
//! ```rust
//! use oxide_sql_ddl::{column::date, render, Expression, TypeTag};
//! use oxide_sql_platform::Platform;
//!
//! let created = date("created").not_null().default_value("2020-01-01");
//!
//! let data = created.expression_data();
//! let segment = &data.segments()[0];
//! assert_eq!(segment.template(), "%s DATE %s %s");
//! assert_eq!(segment.parameters(), ["created", "NOT NULL", "2020-01-01"]);
//! assert_eq!(
//!     segment.types(),
//!     [TypeTag::Identifier, TypeTag::Literal, TypeTag::Value]
//! );
//!
//! let sql = render(&created, &Platform::sql_server()).unwrap();
//! assert_eq!(sql, "[created] DATE NOT NULL '2020-01-01'");
//! ```

pub mod column;
pub mod expression;
pub mod render;

pub use column::{Column, ColumnType};
pub use expression::{Expression, ExpressionData, ExpressionSegment, TypeTag};
pub use render::{render, render_data};
