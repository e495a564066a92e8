//! Logging macros used across the workspace.
//!
//! Everything user-facing is emitted as a `tracing` event. The binary installs
//! a formatter that picks a symbol per level, and treats the [`SUCCESS_TARGET`]
//! and [`PRINT_TARGET`] targets specially.

/// Events on this target are rendered as successful outcomes.
pub const SUCCESS_TARGET: &str = "arise::success";

/// Events on this target are written verbatim, without a level symbol.
pub const PRINT_TARGET: &str = "arise::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "arise::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
