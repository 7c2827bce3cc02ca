//! Derive macros for the aoc-solver framework.
//!
//! [`AocSolver`] writes the boilerplate `Solver` impl on top of a type's
//! `PartSolver<N>` impls, and [`AutoRegisterSolver`] submits the solver to
//! the inventory-backed plugin registry.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, LitInt, parse_macro_input};

/// Derives `aoc_solver::Solver` by dispatching to `PartSolver<N>` impls.
///
/// The required `#[aoc_solver(max_parts = N)]` attribute fixes `PARTS`; the
/// type must implement `PartSolver<1>` through `PartSolver<N>` or the
/// generated impl fails to compile.
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Solver;
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let mut max_parts: Option<u8> = None;
    let mut errors: Vec<syn::Error> = Vec::new();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("aoc_solver")) {
        let result = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("max_parts") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    max_parts = Some(lit_int.base10_parse()?);
                    Ok(())
                } else {
                    Err(meta.error("max_parts must be an integer literal"))
                }
            } else {
                Err(meta.error("unknown aoc_solver attribute key"))
            }
        });
        if let Err(e) = result {
            errors.push(e);
        }
    }

    if let Some(e) = errors.into_iter().next() {
        return e.to_compile_error().into();
    }

    let Some(max_parts) = max_parts else {
        return syn::Error::new_spanned(
            &input.ident,
            "AocSolver requires #[aoc_solver(max_parts = N)]",
        )
        .to_compile_error()
        .into();
    };

    if max_parts == 0 {
        return syn::Error::new_spanned(&input.ident, "max_parts must be at least 1")
            .to_compile_error()
            .into();
    }

    let parts_lit = LitInt::new(&format!("{max_parts}u8"), Span::call_site());
    let arms = (1..=max_parts).map(|n| {
        let n = LitInt::new(&format!("{n}u8"), Span::call_site());
        quote! {
            #n => <Self as ::aoc_solver::PartSolver<#n>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::aoc_solver::Solver for #name {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::aoc_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Registers a `Solver` with the plugin registry at link time.
///
/// Takes a required `#[aoc(year = Y, day = D)]` attribute and an optional
/// `tags = ["..."]` list for filtered registration.
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2024, day = 1, tags = ["lists"])]
/// struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Some(aoc_attr) = input.attrs.iter().find(|a| a.path().is_ident("aoc")) else {
        return syn::Error::new_spanned(
            &input.ident,
            "AutoRegisterSolver requires #[aoc(year = ..., day = ...)]",
        )
        .to_compile_error()
        .into();
    };

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    let parsed = aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
                Ok(())
            } else {
                Err(meta.error("year must be an integer literal"))
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
                Ok(())
            } else {
                Err(meta.error("day must be an integer literal"))
            }
        } else if meta.path.is_ident("tags") {
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                } else {
                    return Err(meta.error("tags must be string literals"));
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
            Ok(())
        } else {
            Err(meta.error("unknown aoc attribute key"))
        }
    });
    if let Err(e) = parsed {
        return e.to_compile_error().into();
    }

    let (Some(year), Some(day)) = (year, day) else {
        return syn::Error::new_spanned(aoc_attr, "#[aoc(...)] requires both year and day")
            .to_compile_error()
            .into();
    };

    // Suffixed so the plugin fields (u16, u8) type-check.
    let year = LitInt::new(&format!("{year}u16"), Span::call_site());
    let day = LitInt::new(&format!("{day}u8"), Span::call_site());
    let tag_strs = tags.iter().map(String::as_str);
    let tags_array = quote! { &[#(#tag_strs),*] };

    let expanded = quote! {
        // Surfaces a readable error when the Solver impl is missing.
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
