//! Binding point for a database driver's native escaping.

use std::fmt::Debug;

/// A driver capable of escaping values against a live connection.
///
/// The platform never owns the underlying connection; it only keeps a handle
/// it can ask for escaping. Drivers without native escaping return `None`
/// from [`Driver::quote_value`], in which case the platform falls back to
/// syntactic quoting and reports it as insecure.
pub trait Driver: Debug + Send + Sync {
    /// Returns the driver name.
    fn name(&self) -> &str;

    /// Returns `value` as a fully quoted string literal, escaped by the
    /// driver, or `None` when native escaping is not available.
    fn quote_value(&self, value: &str) -> Option<String>;
}
