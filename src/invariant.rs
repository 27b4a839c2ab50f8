//! Debug-only invariant assertion helpers.
//!
//! The heap and graph call these after every structural mutation so that
//! invariants stay explicit while release builds remain unaffected.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Structural invariant violated: {}", message);
}

/// Debug-asserts a structural invariant, evaluating the (possibly expensive)
/// check only in debug builds.
#[inline(always)]
pub(crate) fn invariant_assert_with<F: FnOnce() -> bool>(check: F, message: &str) {
    if cfg!(debug_assertions) {
        invariant_assert_msg(check(), message);
    }
}
