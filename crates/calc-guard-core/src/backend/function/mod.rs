
use crate::{Guard, backend::Backend};

use proc_macro2::Span;
use quote::{ToTokens, quote};
use syn::{Block, Ident, ItemFn, Type, parse::Result, parse_quote};

impl Backend {
    pub fn instrument_fn(self, guard: Guard, mut func: ItemFn) -> Result<ItemFn> {
        if let Some(asyncness) = func.sig.asyncness {
            return Err(syn::Error::new_spanned(
                asyncness,
                "#[guard] does not support async functions",
            ));
        }

        // Extract the return type from the function signature
        let return_type: Type = match &func.sig.output {
            syn::ReturnType::Default => parse_quote!(()),
            syn::ReturnType::Type(_, ty) => ty.as_ref().clone(),
        };

        if !guard.requires.is_empty() && !is_result_type(&return_type) {
            return Err(syn::Error::new_spanned(
                &func.sig.output,
                "`requires` clauses need the function to return a `Result`",
            ));
        }

        // Generate the new, instrumented function body.
        let new_body = self.instrument_fn_body(&guard, &func.block, &return_type);

        // Replace the old function body with the new one.
        *func.block = new_body;

        Ok(func)
    }

    fn instrument_fn_body(self, guard: &Guard, original_body: &Block, return_type: &Type) -> Block {
        let build_check = self.build_check;

        // The identifier for the return value binding.
        let output_ident = Ident::new("__calc_guard_output", Span::mixed_site());

        // --- Generate Precondition Checks ---
        let precondition_checks = guard.requires.iter().map(|precondition| {
            let expr = &precondition.expr;
            let error = &precondition.error;
            quote! {
                if !(#expr) {
                    return ::core::result::Result::Err(::core::convert::From::from(#error));
                }
            }
        });

        // --- Generate Postcondition Checks ---
        let postcondition_checks = guard.ensures.iter().map(|postcondition| {
            let closure = annotate_postcondition_closure_argument(
                postcondition.closure.clone(),
                return_type.clone(),
            );
            let expr = quote! { (#closure)(&#output_ident) };
            build_check(
                &expr,
                "Postcondition failed: {}",
                &postcondition.closure.to_token_stream(),
            )
        });

        // The body runs inside a closure so that its own `return`s still reach the postconditions.
        parse_quote! {
            {
                #(#precondition_checks)*
                let #output_ident: #return_type = (|| #original_body)();
                #(#postcondition_checks)*
                #output_ident
            }
        }
    }
}

fn is_result_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Result"),
        Type::Paren(paren) => is_result_type(&paren.elem),
        Type::Group(group) => is_result_type(&group.elem),
        _ => false,
    }
}

fn annotate_postcondition_closure_argument(
    mut closure: syn::ExprClosure,
    return_type: Type,
) -> syn::ExprClosure {
    // Add type annotation: convert |param| to |param: &ReturnType|.
    if let Some(first_input) = closure.inputs.first_mut() {
        if !matches!(first_input, syn::Pat::Type(_)) {
            let pattern = first_input.clone();
            *first_input = syn::Pat::Type(syn::PatType {
                attrs: vec![],
                pat: Box::new(pattern),
                colon_token: Default::default(),
                ty: Box::new(Type::Reference(syn::TypeReference {
                    and_token: Default::default(),
                    lifetime: None,
                    mutability: None,
                    elem: Box::new(return_type),
                })),
            });
        }
    }
    closure
}
