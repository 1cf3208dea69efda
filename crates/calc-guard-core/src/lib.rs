//! Core parsing and instrumentation for the `#[guard]` attribute.
//!
//! A guard attaches two kinds of clauses to a function:
//!
//! - `requires: <condition> else <error>` is checked on entry. When the
//!   condition is false the function returns `Err(From::from(<error>))`
//!   without running its body.
//! - `ensures: <closure or condition>` is checked on the value the body
//!   produced, according to the selected [`Backend`].

use proc_macro2::Span;
use syn::{
    Attribute, Expr, ExprClosure, Token,
    parse::{Parse, ParseStream, Result},
    parse_quote,
    punctuated::Punctuated,
    spanned::Spanned,
};

pub mod backend;

pub use backend::Backend;

/// The clauses attached to a guarded function.
#[derive(Debug)]
pub struct Guard {
    /// Preconditions: checked on entry, each paired with the error it raises.
    pub requires: Vec<Precondition>,
    /// Postconditions: checked on the value returned by the body.
    pub ensures: Vec<PostCondition>,
}

impl Guard {
    pub fn is_empty(&self) -> bool {
        self.requires.is_empty() && self.ensures.is_empty()
    }
}

/// A `bool`-valued expression and the error returned when it does not hold.
#[derive(Debug)]
pub struct Precondition {
    /// The `bool`-valued expression.
    pub expr: Expr,
    /// The error value, converted with `From::from` into the function's error type.
    pub error: Expr,
}

/// A postcondition represented by a closure with a single argument, the
/// function's return value taken by reference.
#[derive(Debug)]
pub struct PostCondition {
    pub closure: ExprClosure,
}

impl Parse for Guard {
    fn parse(input: ParseStream) -> Result<Self> {
        let args = Punctuated::<GuardArg, Token![,]>::parse_terminated(input)?;

        let mut last_arg_order: Option<ArgOrder> = None;
        let mut requires = vec![];
        let mut ensures = vec![];

        for arg in args {
            let current_arg_order = arg.get_order();
            if let Some(last_order) = last_arg_order {
                if current_arg_order < last_order {
                    return Err(syn::Error::new(
                        arg.get_keyword_span(),
                        "parameters are out of order: their order must be `requires`, `ensures`",
                    ));
                }
            }
            last_arg_order = Some(current_arg_order);

            match arg {
                GuardArg::Requires { expr, error, .. } => {
                    requires.push(Precondition { expr, error });
                }
                GuardArg::Ensures { expr, .. } => {
                    ensures.push(interpret_expr_as_post_condition(expr)?);
                }
            }
        }

        Ok(Guard { requires, ensures })
    }
}

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
enum ArgOrder {
    Requires,
    Ensures,
}

/// An intermediate enum to help parse the clauses in any order before validating it.
enum GuardArg {
    Requires {
        keyword: kw::requires,
        expr: Expr,
        error: Expr,
    },
    Ensures {
        keyword: kw::ensures,
        expr: Expr,
    },
}

impl GuardArg {
    fn get_order(&self) -> ArgOrder {
        match self {
            GuardArg::Requires { .. } => ArgOrder::Requires,
            GuardArg::Ensures { .. } => ArgOrder::Ensures,
        }
    }

    fn get_keyword_span(&self) -> Span {
        match self {
            GuardArg::Requires { keyword, .. } => keyword.span,
            GuardArg::Ensures { keyword, .. } => keyword.span,
        }
    }
}

impl Parse for GuardArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        if let Some(attr) = attrs.first() {
            return Err(syn::Error::new(
                attr.span(),
                "attributes are not supported on guard clauses",
            ));
        }

        let lookahead = input.lookahead1();
        if lookahead.peek(kw::requires) {
            // Parse `requires: <condition> else <error>`
            let keyword = input.parse::<kw::requires>()?;
            input.parse::<Token![:]>()?;
            let expr: Expr = input.parse()?;
            if !input.peek(Token![else]) {
                return Err(syn::Error::new(
                    keyword.span,
                    "`requires` needs an error to return: `requires: <condition> else <error>`",
                ));
            }
            input.parse::<Token![else]>()?;
            Ok(GuardArg::Requires {
                keyword,
                expr,
                error: input.parse()?,
            })
        } else if lookahead.peek(kw::ensures) {
            // Parse `ensures: <closure or condition>`
            let keyword = input.parse::<kw::ensures>()?;
            input.parse::<Token![:]>()?;
            Ok(GuardArg::Ensures {
                keyword,
                expr: input.parse()?,
            })
        } else {
            Err(lookahead.error())
        }
    }
}

/// Interpret an `ensures` expression as a single-argument closure.
///
/// A naked expression binds the return value as `output`.
fn interpret_expr_as_post_condition(expr: Expr) -> Result<PostCondition> {
    match expr {
        Expr::Closure(closure) => {
            if closure.inputs.len() != 1 {
                return Err(syn::Error::new_spanned(
                    closure.or1_token,
                    format!(
                        "postcondition closure must take exactly one argument, found {}",
                        closure.inputs.len()
                    ),
                ));
            }
            Ok(PostCondition { closure })
        }
        expr => Ok(PostCondition {
            closure: parse_quote! { |output| #expr },
        }),
    }
}

/// Custom keywords for parsing. This allows us to use `requires` and `ensures`
/// as if they were built-in Rust keywords during parsing.
mod kw {
    syn::custom_keyword!(requires);
    syn::custom_keyword!(ensures);
}

#[cfg(test)]
mod test_parse_guard;

#[cfg(test)]
mod test_util;
