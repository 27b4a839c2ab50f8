//! Internal logging macros.
//!
//! Each macro forwards to the matching `tracing` macro when the `tracing` feature
//! is enabled and expands to nothing otherwise, so call sites never need their own
//! `#[cfg]` guards.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}
