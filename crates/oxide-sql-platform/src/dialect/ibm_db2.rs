//! IBM DB2 dialect.

use super::Dialect;

/// IBM DB2 dialect.
///
/// DB2 for i supports "system naming", where objects are addressed as
/// `library/file` instead of `schema.table`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IbmDb2Dialect {
    system_naming: bool,
}

impl IbmDb2Dialect {
    /// Creates a new DB2 dialect using SQL naming (`.` separator).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            system_naming: false,
        }
    }

    /// Creates a DB2 dialect using system naming (`/` separator).
    #[must_use]
    pub const fn with_system_naming() -> Self {
        Self {
            system_naming: true,
        }
    }
}

impl Dialect for IbmDb2Dialect {
    fn name(&self) -> &'static str {
        "IBM DB2"
    }

    fn identifier_separator(&self) -> char {
        if self.system_naming {
            '/'
        } else {
            '.'
        }
    }
}
