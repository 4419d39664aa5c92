//! Column definitions.
//!
//! A [`Column`] does not produce SQL. It produces [`ExpressionData`]: a
//! template such as `%s DATE %s %s` and typed parameters. The same column can
//! then be rendered for any platform.

use crate::expression::{Expression, ExpressionData, ExpressionSegment, TypeTag};

/// The SQL type of a column, with its size attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// BIGINT.
    BigInteger,
    /// INTEGER.
    Integer,
    /// BOOLEAN.
    Boolean,
    /// DATE.
    Date,
    /// TIME.
    Time,
    /// DATETIME.
    Datetime,
    /// TIMESTAMP.
    Timestamp,
    /// TEXT.
    Text,
    /// BLOB with optional length.
    Blob {
        /// Maximum length in bytes.
        length: Option<u32>,
    },
    /// CHAR(length).
    Char {
        /// Fixed length.
        length: u32,
    },
    /// VARCHAR(length).
    Varchar {
        /// Maximum length.
        length: u32,
    },
    /// BINARY(length).
    Binary {
        /// Fixed length in bytes.
        length: u32,
    },
    /// VARBINARY(length).
    Varbinary {
        /// Maximum length in bytes.
        length: u32,
    },
    /// DECIMAL(precision[, scale]).
    Decimal {
        /// Total number of digits.
        precision: u16,
        /// Digits after the decimal point.
        scale: Option<u16>,
    },
    /// FLOAT(digits, decimal).
    Float {
        /// Total number of digits.
        digits: u16,
        /// Digits after the decimal point.
        decimal: u16,
    },
}

impl ColumnType {
    /// Returns the SQL type keyword.
    #[must_use]
    pub const fn sql_name(&self) -> &'static str {
        match self {
            Self::BigInteger => "BIGINT",
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Datetime => "DATETIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Text => "TEXT",
            Self::Blob { .. } => "BLOB",
            Self::Char { .. } => "CHAR",
            Self::Varchar { .. } => "VARCHAR",
            Self::Binary { .. } => "BINARY",
            Self::Varbinary { .. } => "VARBINARY",
            Self::Decimal { .. } => "DECIMAL",
            Self::Float { .. } => "FLOAT",
        }
    }

    /// Returns the expression template for this type.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        match self {
            Self::BigInteger => "%s BIGINT %s %s",
            Self::Integer => "%s INTEGER %s %s",
            Self::Boolean => "%s BOOLEAN %s %s",
            Self::Date => "%s DATE %s %s",
            Self::Time => "%s TIME %s %s",
            Self::Datetime => "%s DATETIME %s %s",
            Self::Timestamp => "%s TIMESTAMP %s %s",
            Self::Text => "%s TEXT %s %s",
            Self::Blob { length: None } => "%s BLOB %s %s",
            Self::Blob { length: Some(_) } => "%s BLOB(%s) %s %s",
            Self::Char { .. } => "%s CHAR(%s) %s %s",
            Self::Varchar { .. } => "%s VARCHAR(%s) %s %s",
            Self::Binary { .. } => "%s BINARY(%s) %s %s",
            Self::Varbinary { .. } => "%s VARBINARY(%s) %s %s",
            Self::Decimal { .. } => "%s DECIMAL(%s) %s %s",
            Self::Float { .. } => "%s FLOAT(%s) %s %s",
        }
    }

    /// Returns the size parameter (`255`, `10,2`), if the type has one.
    #[must_use]
    pub fn size_literal(&self) -> Option<String> {
        match self {
            Self::Blob { length: Some(n) }
            | Self::Char { length: n }
            | Self::Varchar { length: n }
            | Self::Binary { length: n }
            | Self::Varbinary { length: n } => Some(n.to_string()),
            Self::Decimal {
                precision,
                scale: Some(scale),
            } => Some(format!("{precision},{scale}")),
            Self::Decimal {
                precision,
                scale: None,
            } => Some(precision.to_string()),
            Self::Float { digits, decimal } => Some(format!("{digits},{decimal}")),
            _ => None,
        }
    }
}

/// A column definition.
///
/// Columns are nullable and have no default until told otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    nullable: bool,
    default: Option<String>,
}

impl Column {
    /// Creates a new nullable column without default.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            default: None,
        }
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets whether the column accepts NULL (default `true`).
    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Renames the column.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets whether the column accepts NULL.
    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    /// Sets the default value.
    pub fn set_default(&mut self, value: impl Into<String>) {
        self.default = Some(value.into());
    }

    /// Removes the default value.
    pub fn clear_default(&mut self) {
        self.default = None;
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column type.
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Returns whether the column accepts NULL.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the default value, if any.
    #[must_use]
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

impl Expression for Column {
    /// Name (identifier), optional size (literal), `NOT NULL` or empty
    /// (literal), then the default (value) or empty (literal).
    fn expression_data(&self) -> ExpressionData {
        let mut parameters = Vec::with_capacity(4);
        parameters.push((self.name.clone(), TypeTag::Identifier));
        if let Some(size) = self.column_type.size_literal() {
            parameters.push((size, TypeTag::Literal));
        }
        let null = if self.nullable { "" } else { "NOT NULL" };
        parameters.push((null.to_string(), TypeTag::Literal));
        parameters.push(match &self.default {
            Some(value) => (value.clone(), TypeTag::Value),
            None => (String::new(), TypeTag::Literal),
        });

        ExpressionSegment::new(self.column_type.template(), parameters).into()
    }
}

// =============================================================================
// Shorthand Functions for Common Types
// =============================================================================

/// Creates a BIGINT column.
#[must_use]
pub fn big_integer(name: impl Into<String>) -> Column {
    Column::new(name, ColumnType::BigInteger)
}

/// Creates an INTEGER column.
#[must_use]
pub fn integer(name: impl Into<String>) -> Column {
    Column::new(name, ColumnType::Integer)
}

/// Creates a BOOLEAN column.
#[must_use]
pub fn boolean(name: impl Into<String>) -> Column {
    Column::new(name, ColumnType::Boolean)
}

/// Creates a DATE column.
#[must_use]
pub fn date(name: impl Into<String>) -> Column {
    Column::new(name, ColumnType::Date)
}

/// Creates a TIME column.
#[must_use]
pub fn time(name: impl Into<String>) -> Column {
    Column::new(name, ColumnType::Time)
}

/// Creates a DATETIME column.
#[must_use]
pub fn datetime(name: impl Into<String>) -> Column {
    Column::new(name, ColumnType::Datetime)
}

/// Creates a TIMESTAMP column.
#[must_use]
pub fn timestamp(name: impl Into<String>) -> Column {
    Column::new(name, ColumnType::Timestamp)
}

/// Creates a TEXT column.
#[must_use]
pub fn text(name: impl Into<String>) -> Column {
    Column::new(name, ColumnType::Text)
}

/// Creates a BLOB column.
#[must_use]
pub fn blob(name: impl Into<String>, length: Option<u32>) -> Column {
    Column::new(name, ColumnType::Blob { length })
}

/// Creates a CHAR column.
#[must_use]
pub fn char(name: impl Into<String>, length: u32) -> Column {
    Column::new(name, ColumnType::Char { length })
}

/// Creates a VARCHAR column.
#[must_use]
pub fn varchar(name: impl Into<String>, length: u32) -> Column {
    Column::new(name, ColumnType::Varchar { length })
}

/// Creates a BINARY column.
#[must_use]
pub fn binary(name: impl Into<String>, length: u32) -> Column {
    Column::new(name, ColumnType::Binary { length })
}

/// Creates a VARBINARY column.
#[must_use]
pub fn varbinary(name: impl Into<String>, length: u32) -> Column {
    Column::new(name, ColumnType::Varbinary { length })
}

/// Creates a DECIMAL column.
#[must_use]
pub fn decimal(name: impl Into<String>, precision: u16, scale: Option<u16>) -> Column {
    Column::new(name, ColumnType::Decimal { precision, scale })
}

/// Creates a FLOAT column.
#[must_use]
pub fn float(name: impl Into<String>, digits: u16, decimal: u16) -> Column {
    Column::new(name, ColumnType::Float { digits, decimal })
}
