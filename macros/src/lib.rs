//! INTERNAL; DO NOT USE. Please use the `unit-test` crate to access the functionality implemented
//! here

#![doc(html_logo_url = "https://knurling.ferrous-systems.com/knurling_logo_light_text.svg")]

use function_like::expect::{Mode, Predicate};
use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;

mod attributes;
mod construct;
mod function_like;

#[proc_macro_attribute]
#[proc_macro_error]
pub fn test(args: TokenStream, item: TokenStream) -> TokenStream {
    attributes::test::expand(args, item)
}

#[proc_macro_attribute]
#[proc_macro_error]
pub fn test_f(args: TokenStream, item: TokenStream) -> TokenStream {
    attributes::test::expand_with_fixture(args, item)
}

#[proc_macro_attribute]
#[proc_macro_error]
pub fn const_test(args: TokenStream, item: TokenStream) -> TokenStream {
    attributes::const_test::expand(args, item)
}

// NOTE the checks below are proc-macros rather than `macro_rules!` so that `line!()` in their
// expansion reports the call site. The trailing underscore keeps `assert_eq_` and `assert_ne_` from
// shadowing `core::assert_eq` and `core::assert_ne` in this scope; the others follow suit

#[proc_macro]
#[proc_macro_error]
pub fn expect_true_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::True, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_false_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::False, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_eq_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Eq, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_ne_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Ne, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_lt_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Lt, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_le_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Le, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_gt_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Gt, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_ge_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Ge, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_near_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Near, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_float_eq_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::FloatEq, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_double_eq_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::DoubleEq, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_streq_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::StrEq, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn expect_strne_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::StrNe, Mode::Expect)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_true_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::True, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_false_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::False, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_eq_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Eq, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_ne_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Ne, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_lt_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Lt, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_le_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Le, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_gt_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Gt, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_ge_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Ge, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_near_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::Near, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_float_eq_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::FloatEq, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_double_eq_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::DoubleEq, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_streq_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::StrEq, Mode::Assert)
}

#[proc_macro]
#[proc_macro_error]
pub fn assert_strne_(input: TokenStream) -> TokenStream {
    function_like::expect::expand(input, Predicate::StrNe, Mode::Assert)
}
