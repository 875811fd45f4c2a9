//! Browser console logging with a millisecond timestamp prefix.
//!
//! On wasm32 the macros write to the browser console through `gloo_console`.
//! Everywhere else they emit `tracing` events at the same level, so handlers
//! that log can run in native tests.

#[doc(hidden)]
pub use gloo_console as __gloo_console;
#[doc(hidden)]
pub use js_sys as __js_sys;
#[doc(hidden)]
pub use tracing as __tracing;

#[doc(hidden)]
#[macro_export]
macro_rules! __console_stamped {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::utils::console_macros::__gloo_console::$level!(format!(
                "[{}] {}",
                $crate::utils::console_macros::__js_sys::Date::now(),
                format!($($arg)+)
            ));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            $crate::utils::console_macros::__tracing::$level!("{}", format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)+) => { $crate::__console_stamped!(info, $($arg)+) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)+) => { $crate::__console_stamped!(warn, $($arg)+) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)+) => { $crate::__console_stamped!(error, $($arg)+) };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)+) => { $crate::__console_stamped!(debug, $($arg)+) };
}
