//! crates/diagnostics/src/macros.rs
//! Build-time diagnostic emission layer.
//!
//! Debug emission is selected at compile time through cargo features, so a
//! build without `debug-logging` carries no trace of the call sites: the
//! macros expand to nothing and their arguments are never evaluated. The
//! release channel is always compiled.

/// Captures the fully qualified path of the enclosing function.
///
/// Uses the nested-function/`type_name` idiom; the result looks like
/// `my_crate::optimizer::refine`.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Emits one debug line, prefixed with the enclosing function's name.
///
/// Compiled only with the `debug-logging` feature; this variant is selected
/// when `debug-fn-prefix` or `debug-pretty-fn-prefix` is also enabled.
#[cfg(all(
    feature = "debug-logging",
    any(feature = "debug-fn-prefix", feature = "debug-pretty-fn-prefix")
))]
#[macro_export]
macro_rules! debug_out {
    ($($arg:tt)*) => {
        $crate::global::emit_debug_with_function(
            $crate::__function_path!(),
            ::std::format_args!($($arg)*),
        )
    };
}

/// Emits one debug line, prefixed with the current indentation and dropped
/// above the reporter's maximum indent level.
///
/// Compiled only with the `debug-logging` feature.
#[cfg(all(
    feature = "debug-logging",
    not(any(feature = "debug-fn-prefix", feature = "debug-pretty-fn-prefix"))
))]
#[macro_export]
macro_rules! debug_out {
    ($($arg:tt)*) => {
        $crate::global::emit_debug_plain(::std::format_args!($($arg)*))
    };
}

/// Expansion when `debug-logging` is disabled: nothing. The arguments are
/// not evaluated, so debug-only formatting work vanishes from the build.
#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_out {
    ($($arg:tt)*) => {};
}

/// Runs the enclosed statements only in `debug-logging` builds.
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_exec {
    ($($body:tt)*) => {
        $($body)*
    };
}

/// Expansion when `debug-logging` is disabled: nothing.
#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_exec {
    ($($body:tt)*) => {};
}

/// Writes to the always-on informational channel, bypassing the visibility
/// policy. Never compiled out.
#[macro_export]
macro_rules! release_out {
    ($($arg:tt)*) => {
        $crate::global::emit_release(::std::format_args!($($arg)*))
    };
}

/// Like [`release_out!`] but prefixed with the current indentation and
/// suppressed above the reporter's maximum indent level.
#[macro_export]
macro_rules! indented_release_out {
    ($($arg:tt)*) => {
        $crate::global::emit_indented_release(::std::format_args!($($arg)*))
    };
}
