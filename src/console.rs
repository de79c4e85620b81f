//! Browser console logging.
//!
//! On `wasm32` the macros forward to `console.log` / `console.warn`. Native
//! builds (unit tests, tooling) have no console to talk to, so the macros
//! only type-check their arguments there.

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn warn(_message: &str) {}

/// `console.log` with `format!` arguments.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::console::log(&format!("[flowpath] {}", format_args!($($arg)*)))
    };
}

/// `console.warn` with `format!` arguments.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console::warn(&format!("[flowpath] {}", format_args!($($arg)*)))
    };
}
