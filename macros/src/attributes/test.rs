use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use proc_macro_error2::{abort, abort_call_site};
use quote::{quote, quote_spanned};
use syn::{parse_macro_input, spanned::Spanned, FnArg, ItemFn, Path, ReturnType, Type};

use crate::construct;

pub(crate) fn expand(args: TokenStream, item: TokenStream) -> TokenStream {
    if args.is_empty() {
        abort_call_site!(
            "`#[test]` requires the name of the test suite";
            help = "write `#[test(Suite)]`"
        )
    }

    let suite = parse_macro_input!(args as Ident);
    let f = parse_macro_input!(item as ItemFn);

    validate_suite(&suite);
    validate_fn(&f, None);

    codegen(&f, &suite, None).into()
}

pub(crate) fn expand_with_fixture(args: TokenStream, item: TokenStream) -> TokenStream {
    if args.is_empty() {
        abort_call_site!(
            "`#[test_f]` requires the fixture type";
            help = "write `#[test_f(MyFixture)]`"
        )
    }

    let fixture = parse_macro_input!(args as Path);
    let f = parse_macro_input!(item as ItemFn);

    let suite = match fixture.segments.last() {
        Some(segment) if segment.arguments.is_empty() => segment.ident.clone(),
        _ => abort!(fixture, "the fixture must be a non-generic type"),
    };

    validate_suite(&suite);
    validate_fn(&f, Some(&fixture));

    codegen(&f, &suite, Some(&fixture)).into()
}

pub(crate) fn validate_suite(suite: &Ident) {
    if !construct::is_valid_suite_name(&suite.to_string()) {
        abort!(
            suite,
            "test suite names must not contain underscores, other than in a leading `{}`",
            construct::DISABLED_PREFIX
        )
    }
}

/// Checks for `fn name()` or, with a fixture, `fn name(fixture: &mut Fixture)`.
pub(crate) fn validate_fn(f: &ItemFn, fixture: Option<&Path>) {
    let sig = &f.sig;

    if let Some(constness) = &sig.constness {
        abort!(constness, "test functions must not be `const`")
    }
    if let Some(asyncness) = &sig.asyncness {
        abort!(asyncness, "test functions must not be `async`")
    }
    if let Some(unsafety) = &sig.unsafety {
        abort!(unsafety, "test functions must not be `unsafe`")
    }
    if let Some(abi) = &sig.abi {
        abort!(abi, "test functions must not specify an ABI")
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        abort!(sig.generics, "test functions must not be generic")
    }
    if let Some(variadic) = &sig.variadic {
        abort!(variadic, "test functions must not be variadic")
    }
    if let ReturnType::Type(_, ty) = &sig.output {
        abort!(ty, "test functions must not return a value")
    }

    match fixture {
        None => {
            if let Some(input) = sig.inputs.first() {
                abort!(
                    input,
                    "`#[test]` functions take no arguments";
                    help = "use `#[test_f(Fixture)]` to run a test against a fixture"
                )
            }
        }
        Some(fixture) => {
            let mut inputs = sig.inputs.iter();
            match inputs.next() {
                Some(input) if is_mut_ref(input) => {}
                Some(input) => abort!(
                    input,
                    "the fixture must be passed as `&mut {}`",
                    quote!(#fixture)
                ),
                None => abort!(
                    sig.ident,
                    "`#[test_f]` functions take the fixture as their only argument";
                    help = "write `fn {}(fixture: &mut {})`", sig.ident, quote!(#fixture)
                ),
            }
            if let Some(input) = inputs.next() {
                abort!(
                    input,
                    "`#[test_f]` functions take the fixture as their only argument"
                )
            }
        }
    }
}

fn is_mut_ref(input: &FnArg) -> bool {
    match input {
        FnArg::Typed(pat) => matches!(&*pat.ty, Type::Reference(r) if r.mutability.is_some()),
        FnArg::Receiver(_) => false,
    }
}

/// The function itself plus its registration in the global test list.
pub(crate) fn codegen(f: &ItemFn, suite: &Ident, fixture: Option<&Path>) -> TokenStream2 {
    let attrs = &f.attrs;
    let vis = &f.vis;
    let sig = &f.sig;
    let block = &f.block;
    let ident = &sig.ident;

    let suite_name = suite.to_string();
    let test_name = ident.to_string();
    let line = quote_spanned!(ident.span()=> ::core::line!());

    let (fixture, body, fits) = match fixture {
        Some(fixture) => (
            quote!(#fixture),
            quote!(#ident),
            quote_spanned!(fixture.span()=>
                const _: () = unit_test::export::assert_fits::<#fixture>();
            ),
        ),
        None => (
            quote!(unit_test::Test),
            quote!({
                fn __body(_: &mut unit_test::Test) {
                    #ident()
                }
                __body
            }),
            quote!(),
        ),
    };

    quote!(
        #(#attrs)*
        #[allow(non_snake_case)]
        #vis #sig #block

        const _: () = {
            #fits

            static FACTORY: unit_test::FixtureTest<#fixture> = unit_test::FixtureTest::new(#body);

            #[unit_test::export::linkme::distributed_slice(unit_test::export::TESTS)]
            #[linkme(crate = unit_test::export::linkme)]
            static INFO: unit_test::TestInfo = unit_test::TestInfo::new(
                #suite_name,
                #test_name,
                ::core::file!(),
                #line,
                &FACTORY,
            );
        };
    )
}
