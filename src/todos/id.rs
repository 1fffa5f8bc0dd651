//! ID allocation.
//!
//! Todo IDs are short decimal strings: one more than the largest numeric ID
//! currently in use. Group IDs are opaque: 16 random bytes, hex-encoded.

use crate::todos::models::Todo;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Global counter for deterministic ID generation in tests.
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Whether to use deterministic IDs (for testing).
static USE_DETERMINISTIC_IDS: AtomicBool = AtomicBool::new(false);

/// Number of random bytes in a group ID.
const GROUP_ID_BYTES: usize = 16;

/// Enable deterministic group ID generation for testing.
///
/// When enabled, group IDs will use a counter instead of random bytes.
pub fn enable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(true, Ordering::SeqCst);
    TEST_COUNTER.store(0, Ordering::SeqCst);
}

/// Disable deterministic ID generation.
pub fn disable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(false, Ordering::SeqCst);
}

/// Allocate the next todo ID.
///
/// Starts one above the largest numeric ID and steps past any candidate
/// already in use. IDs that do not parse as non-negative integers are
/// skipped when looking for the maximum.
#[must_use]
pub fn next_todo_id(todos: &[Todo]) -> String {
    let max = todos.iter().filter_map(|t| t.id.parse::<u128>().ok()).max().unwrap_or(0);

    // There are fewer todos than u128 values, so this always terminates.
    let mut candidate = max.wrapping_add(1);
    while todos.iter().any(|t| t.id == candidate.to_string()) {
        candidate = candidate.wrapping_add(1);
    }
    candidate.to_string()
}

/// Generate an opaque group ID.
#[must_use]
pub fn generate_group_id() -> String {
    if USE_DETERMINISTIC_IDS.load(Ordering::SeqCst) {
        let count = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        return format!("{count:032x}");
    }

    hex::encode(rand::random::<[u8; GROUP_ID_BYTES]>())
}
