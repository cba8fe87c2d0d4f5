//! Run and request identifiers.
//!
//! History records need a fresh unique key per write, and every write
//! carries the identifier of the request that produced it. ULIDs cover
//! both: unique, URL-safe, and lexicographically ordered by creation time,
//! so audit rows sort chronologically without a secondary index.

use once_cell::sync::Lazy;
use ulid::Ulid;

static PROCESS_RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Identifier shared by everything in this process lifetime. Useful for
/// correlating all writes of one batch run.
#[inline]
pub fn current() -> &'static str {
    &PROCESS_RUN_ID
}

/// A fresh ULID: history-record keys and fallback request ids.
#[inline]
pub fn fresh() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_stable_within_a_process() {
        assert_eq!(current(), current());
        assert_eq!(current().len(), 26);
    }

    #[test]
    fn fresh_values_are_unique() {
        assert_ne!(fresh(), fresh());
    }

    #[test]
    fn fresh_values_sort_by_creation_time() {
        let older = fresh();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let newer = fresh();
        assert!(older < newer);
    }
}
