use crate::test_util::assert_guard_eq;

use super::*;
use syn::parse_quote;

#[test]
fn test_parse_simple_guard() {
    let guard: Guard = parse_quote! {
        requires: b != 0 else CalcError::DivideByZero,
        ensures: output.is_ok(),
    };

    let expected = Guard {
        requires: vec![parse_quote! { b != 0 else CalcError::DivideByZero }],
        ensures: vec![parse_quote! { |output| output.is_ok() }],
    };

    assert_guard_eq(&guard, &expected);
}

#[test]
fn test_parse_explicit_closure() {
    let guard: Guard = parse_quote! {
        ensures: |quotient| quotient.is_ok(),
    };

    let expected = Guard {
        requires: vec![],
        ensures: vec![parse_quote! { |quotient| quotient.is_ok() }],
    };

    assert_guard_eq(&guard, &expected);
}

#[test]
fn test_parse_repeated_clauses() {
    let guard: Guard = parse_quote! {
        requires: x > 0 else Error::NotPositive,
        requires: x % 2 == 0 else Error::Odd(x),
        ensures: |y| *y > x,
        ensures: |y| *y < 100,
    };

    let expected = Guard {
        requires: vec![
            parse_quote! { x > 0 else Error::NotPositive },
            parse_quote! { x % 2 == 0 else Error::Odd(x) },
        ],
        ensures: vec![
            parse_quote! { |y| *y > x },
            parse_quote! { |y| *y < 100 },
        ],
    };

    assert_guard_eq(&guard, &expected);
}

#[test]
fn test_parse_empty_guard() {
    let guard: Guard = parse_quote! {};
    assert!(guard.is_empty());
}

#[test]
#[should_panic(expected = "parameters are out of order")]
fn test_parse_out_of_order() {
    let _: Guard = parse_quote! {
        ensures: output.is_ok(),
        requires: b != 0 else CalcError::DivideByZero,
    };
}

#[test]
#[should_panic(expected = "`requires` needs an error to return")]
fn test_parse_requires_without_error() {
    let _: Guard = parse_quote! {
        requires: b != 0,
    };
}

#[test]
#[should_panic(expected = "postcondition closure must take exactly one argument, found 2")]
fn test_parse_closure_with_two_arguments() {
    let _: Guard = parse_quote! {
        ensures: |x, y| x == y,
    };
}

#[test]
#[should_panic(expected = "attributes are not supported on guard clauses")]
fn test_parse_attribute_on_clause() {
    let _: Guard = parse_quote! {
        #[cfg(test)]
        requires: b != 0 else CalcError::DivideByZero,
    };
}

#[test]
#[should_panic(expected = "expected `requires` or `ensures`")]
fn test_parse_unknown_keyword() {
    let _: Guard = parse_quote! {
        maintains: self.is_valid(),
    };
}
