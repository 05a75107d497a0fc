//! Clock port — where report timestamps come from.

use mockservices_domain::time::Timestamp;

/// Source of the current time.
pub trait Clock {
    /// The current UTC time.
    fn now(&self) -> Timestamp;
}
