use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Expr};

use crate::construct;

use self::args::Args;

mod args;

/// What a failed check does at run time.
#[derive(Clone, Copy, PartialEq)]
pub(crate) enum Mode {
    /// Records the failure and carries on.
    Expect,
    /// Records the failure and returns from the enclosing function.
    Assert,
}

impl Mode {
    fn prefix(self) -> &'static str {
        match self {
            Mode::Expect => "expect",
            Mode::Assert => "assert",
        }
    }
}

/// The checks of the `expect_*!` and `assert_*!` families.
#[derive(Clone, Copy, PartialEq)]
pub(crate) enum Predicate {
    True,
    False,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Near,
    FloatEq,
    DoubleEq,
    StrEq,
    StrNe,
}

impl Predicate {
    const ALL: [Predicate; 13] = [
        Predicate::True,
        Predicate::False,
        Predicate::Eq,
        Predicate::Ne,
        Predicate::Lt,
        Predicate::Le,
        Predicate::Gt,
        Predicate::Ge,
        Predicate::Near,
        Predicate::FloatEq,
        Predicate::DoubleEq,
        Predicate::StrEq,
        Predicate::StrNe,
    ];

    /// Name of the macro without its `expect_` / `assert_` prefix.
    fn suffix(self) -> &'static str {
        match self {
            Predicate::True => "true",
            Predicate::False => "false",
            Predicate::Eq => "eq",
            Predicate::Ne => "ne",
            Predicate::Lt => "lt",
            Predicate::Le => "le",
            Predicate::Gt => "gt",
            Predicate::Ge => "ge",
            Predicate::Near => "near",
            Predicate::FloatEq => "float_eq",
            Predicate::DoubleEq => "double_eq",
            Predicate::StrEq => "streq",
            Predicate::StrNe => "strne",
        }
    }

    /// Parses the name of a `const_expect_*!` or `const_assert_*!` macro.
    pub(crate) fn from_const_macro(name: &str) -> Option<(Mode, Predicate)> {
        let name = name.strip_prefix("const_")?;
        let (mode, suffix) = if let Some(suffix) = name.strip_prefix("expect_") {
            (Mode::Expect, suffix)
        } else {
            (Mode::Assert, name.strip_prefix("assert_")?)
        };

        Self::ALL
            .into_iter()
            .find(|predicate| predicate.suffix() == suffix)
            .map(|predicate| (mode, predicate))
    }

    fn binary_operator(self) -> Option<&'static str> {
        Some(match self {
            Predicate::Eq => "==",
            Predicate::Ne => "!=",
            Predicate::Lt => "<",
            Predicate::Le => "<=",
            Predicate::Gt => ">",
            Predicate::Ge => ">=",
            _ => return None,
        })
    }

    fn operator_tokens(self) -> TokenStream2 {
        match self {
            Predicate::Ne => quote!(!=),
            Predicate::Lt => quote!(<),
            Predicate::Le => quote!(<=),
            Predicate::Gt => quote!(>),
            Predicate::Ge => quote!(>=),
            _ => quote!(==),
        }
    }

    fn usage(self, mode: Mode) -> String {
        let operands = match self {
            Predicate::True | Predicate::False => "condition",
            Predicate::Near => "left, right, epsilon",
            _ => "left, right",
        };
        format!("{}_{}!({})", mode.prefix(), self.suffix(), operands)
    }

    /// Parses the operands of an invocation; aborts on a wrong number of operands.
    pub(crate) fn parse_operands(self, mode: Mode, args: Args) -> Operands {
        let usage = self.usage(mode);
        match self {
            Predicate::True | Predicate::False => {
                let [condition] = args.take(&usage);
                Operands::Unary(condition)
            }
            Predicate::Near => {
                let [left, right, epsilon] = args.take(&usage);
                Operands::Near(left, right, epsilon)
            }
            _ => {
                let [left, right] = args.take(&usage);
                Operands::Binary(left, right)
            }
        }
    }

    /// The expression as reported to event handlers, e.g. `a + b == 4`.
    pub(crate) fn expression(self, operands: &Operands) -> String {
        match (self, operands) {
            (Predicate::True, Operands::Unary(condition)) => {
                format!("{} is true", construct::expr_string(condition))
            }
            (Predicate::False, Operands::Unary(condition)) => {
                format!("{} is false", construct::expr_string(condition))
            }
            (_, Operands::Near(left, right, epsilon)) => format!(
                "{} within {} of {}",
                construct::expr_string(left),
                construct::expr_string(epsilon),
                construct::expr_string(right)
            ),
            (_, Operands::Binary(left, right)) => {
                let operator = match self {
                    Predicate::FloatEq | Predicate::DoubleEq | Predicate::StrEq => "==",
                    Predicate::StrNe => "!=",
                    _ => self.binary_operator().unwrap_or("?"),
                };
                format!(
                    "{} {} {}",
                    construct::expr_string(left),
                    operator,
                    construct::expr_string(right)
                )
            }
            (_, Operands::Unary(condition)) => construct::expr_string(condition),
        }
    }

    /// A call into the runtime evaluator that returns whether the check held.
    pub(crate) fn runtime_check(self, operands: &Operands) -> TokenStream2 {
        let expression = self.expression(operands);
        let line = quote!(::core::line!());

        match (self, operands) {
            (Predicate::True, Operands::Unary(condition)) => quote!(
                unit_test::export::expect_bool(#condition, true, #expression, #line)
            ),
            (Predicate::False, Operands::Unary(condition)) => quote!(
                unit_test::export::expect_bool(#condition, false, #expression, #line)
            ),
            (_, Operands::Near(left, right, epsilon)) => quote!(
                unit_test::export::expect_near(#left, #right, #epsilon, #expression, #line)
            ),
            (Predicate::FloatEq, Operands::Binary(left, right)) => quote!(
                unit_test::export::expect_float_eq(#left, #right, #expression, #line)
            ),
            (Predicate::DoubleEq, Operands::Binary(left, right)) => quote!(
                unit_test::export::expect_double_eq(#left, #right, #expression, #line)
            ),
            (Predicate::StrEq, Operands::Binary(left, right)) => quote!(
                unit_test::export::expect_str(&(#left), &(#right), true, #expression, #line)
            ),
            (Predicate::StrNe, Operands::Binary(left, right)) => quote!(
                unit_test::export::expect_str(&(#left), &(#right), false, #expression, #line)
            ),
            (_, Operands::Binary(left, right)) => {
                let operator = self.binary_operator().unwrap_or("==");
                let operator_tokens = self.operator_tokens();
                quote!(
                    unit_test::export::expect_binary(
                        &(#left),
                        &(#right),
                        |lhs, rhs| lhs #operator_tokens rhs,
                        #operator,
                        #expression,
                        #line,
                    )
                )
            }
            (_, Operands::Unary(condition)) => quote!(#condition),
        }
    }

    /// An expression usable in constant evaluation that returns whether the check held.
    pub(crate) fn const_check(self, operands: &Operands) -> TokenStream2 {
        match (self, operands) {
            (Predicate::True, Operands::Unary(condition)) => quote!((#condition)),
            (Predicate::False, Operands::Unary(condition)) => quote!(!(#condition)),
            (_, Operands::Near(left, right, epsilon)) => quote!({
                let (lhs, rhs, epsilon) = (#left, #right, #epsilon);
                (if lhs > rhs { lhs - rhs } else { rhs - lhs }) <= epsilon
            }),
            (Predicate::FloatEq, Operands::Binary(left, right)) => {
                quote!(unit_test::export::float_eq(#left, #right))
            }
            (Predicate::DoubleEq, Operands::Binary(left, right)) => {
                quote!(unit_test::export::double_eq(#left, #right))
            }
            (Predicate::StrEq, Operands::Binary(left, right)) => {
                quote!(unit_test::export::str_eq(#left, #right))
            }
            (Predicate::StrNe, Operands::Binary(left, right)) => {
                quote!(!unit_test::export::str_eq(#left, #right))
            }
            (_, Operands::Binary(left, right)) => {
                let operator = self.operator_tokens();
                quote!(((#left) #operator (#right)))
            }
            (_, Operands::Unary(condition)) => quote!((#condition)),
        }
    }
}

pub(crate) enum Operands {
    Unary(Expr),
    Binary(Expr, Expr),
    Near(Expr, Expr, Expr),
}

pub(crate) fn expand(input: TokenStream, predicate: Predicate, mode: Mode) -> TokenStream {
    let args = parse_macro_input!(input as Args);
    let operands = predicate.parse_operands(mode, args);
    let check = predicate.runtime_check(&operands);

    match mode {
        Mode::Expect => quote!(#check),
        Mode::Assert => quote!(
            if !(#check) {
                return;
            }
        ),
    }
    .into()
}

/// Parses the operands of a `const_*!` invocation found inside a `#[const_test]` body.
pub(crate) fn parse_const_args(
    tokens: TokenStream2,
    predicate: Predicate,
    mode: Mode,
) -> syn::Result<Operands> {
    let args = syn::parse2::<Args>(tokens)?;
    Ok(predicate.parse_operands(mode, args))
}
