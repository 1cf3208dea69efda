use proc_macro2::TokenStream;
use quote::quote;

pub mod function;

/// Decides how postconditions are checked at runtime.
///
/// Preconditions are not affected: they always return an error from the
/// guarded function when they fail.
#[derive(Clone, Copy)]
pub struct Backend {
    pub build_check: fn(&TokenStream, &str, &TokenStream) -> TokenStream,
}

impl Backend {
    pub const CHECK_IN_DEBUG: Backend = Backend {
        build_check: build_debug_assert,
    };

    pub const CHECK_AND_PANIC: Backend = Backend {
        build_check: build_assert,
    };

    pub const NO_CHECK: Backend = Backend {
        build_check: build_inert,
    };
}

fn build_debug_assert(expr: &TokenStream, message: &str, repr: &TokenStream) -> TokenStream {
    let repr_str = repr.to_string();
    quote! { debug_assert!(#expr, #message, #repr_str); }
}

fn build_assert(expr: &TokenStream, message: &str, repr: &TokenStream) -> TokenStream {
    let repr_str = repr.to_string();
    quote! { assert!(#expr, #message, #repr_str); }
}

fn build_inert(expr: &TokenStream, message: &str, repr: &TokenStream) -> TokenStream {
    // Still type-checked, never evaluated.
    let repr_str = repr.to_string();
    quote! {
        if false {
            assert!(#expr, #message, #repr_str);
        }
    }
}
