use crate::{Guard, PostCondition, Precondition};
use quote::ToTokens;
use syn::{
    Expr,
    parse::{Parse, ParseStream, Result},
};

impl Parse for Precondition {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr: Expr = input.parse()?;
        input.parse::<syn::Token![else]>()?;
        Ok(Precondition {
            expr,
            error: input.parse()?,
        })
    }
}

impl Parse for PostCondition {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(PostCondition {
            closure: input.parse()?,
        })
    }
}

pub fn assert_tokens_eq<L: ToTokens, R: ToTokens>(left: &L, right: &R) {
    let left_str = left.to_token_stream().to_string();
    let right_str = right.to_token_stream().to_string();
    assert_eq!(left_str, right_str);
}

pub fn assert_guard_eq(left: &Guard, right: &Guard) {
    // Destructure to ensure we handle all fields - compilation will fail if fields are added
    let Guard {
        requires: left_requires,
        ensures: left_ensures,
    } = left;

    let Guard {
        requires: right_requires,
        ensures: right_ensures,
    } = right;

    assert_slice_eq(
        left_requires,
        right_requires,
        "requires",
        &assert_precondition_eq,
    );
    assert_slice_eq(
        left_ensures,
        right_ensures,
        "ensures",
        &assert_postcondition_eq,
    );
}

fn assert_slice_eq<T, F>(left: &[T], right: &[T], item_name: &str, assert_item_eq: F)
where
    F: Fn(&T, &T, &str),
{
    assert_eq!(
        left.len(),
        right.len(),
        "number of `{}` items do not match",
        item_name
    );

    for (i, (left_item, right_item)) in left.iter().zip(right.iter()).enumerate() {
        let msg_prefix = format!("`{}` items at index {}, ", item_name, i);
        assert_item_eq(left_item, right_item, &msg_prefix);
    }
}

fn assert_precondition_eq(left: &Precondition, right: &Precondition, msg_prefix: &str) {
    let Precondition {
        expr: left_expr,
        error: left_error,
    } = left;

    let Precondition {
        expr: right_expr,
        error: right_error,
    } = right;

    assert_eq!(
        left_expr.to_token_stream().to_string(),
        right_expr.to_token_stream().to_string(),
        "{}`expr` does not match",
        msg_prefix
    );

    assert_eq!(
        left_error.to_token_stream().to_string(),
        right_error.to_token_stream().to_string(),
        "{}`error` does not match",
        msg_prefix
    );
}

fn assert_postcondition_eq(left: &PostCondition, right: &PostCondition, msg_prefix: &str) {
    assert_eq!(
        left.closure.to_token_stream().to_string(),
        right.closure.to_token_stream().to_string(),
        "{}`closure` does not match",
        msg_prefix
    );
}
