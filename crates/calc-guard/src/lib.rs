#![doc = include_str!("../../../README.md")]

use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{ItemFn, parse_macro_input};

use calc_guard_core::{Backend, Guard};

#[cfg(all(feature = "runtime-check-and-panic", feature = "runtime-no-check"))]
compile_error!("at most one `runtime-*` feature can be enabled");

const BACKEND: Backend = if cfg!(feature = "runtime-check-and-panic") {
    Backend::CHECK_AND_PANIC
} else if cfg!(feature = "runtime-no-check") {
    Backend::NO_CHECK
} else {
    Backend::CHECK_IN_DEBUG
};

/// Guards a function with preconditions and postconditions.
///
/// `requires: <condition> else <error>` clauses run first, in order. A false
/// condition returns `Err(From::from(<error>))` before the body executes.
///
/// `ensures: <closure or condition>` clauses run on the value produced by the
/// body. By default they are `debug_assert!`ed; the `runtime-check-and-panic`
/// and `runtime-no-check` features select `assert!` or no check instead.
#[proc_macro_attribute]
pub fn guard(args: TokenStream, input: TokenStream) -> TokenStream {
    // Parse the guard clauses from the attribute, e.g., `requires: b != 0 else Error, ...`
    let guard = parse_macro_input!(args as Guard);
    // Parse the function to which the attribute is attached.
    let func = parse_macro_input!(input as ItemFn);

    match BACKEND.instrument_fn(guard, func) {
        Ok(func) => func.into_token_stream().into(),
        Err(e) => e.to_compile_error().into(),
    }
}
