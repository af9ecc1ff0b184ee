use proc_macro_error2::abort_call_site;
use syn::{
    parse::{self, Parse, ParseStream},
    punctuated::Punctuated,
    Expr, Token,
};

/// Comma separated operands, with an optional trailing comma.
pub(crate) struct Args {
    pub(crate) operands: Vec<Expr>,
}

impl Parse for Args {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        let operands = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        Ok(Args {
            operands: operands.into_iter().collect(),
        })
    }
}

impl Args {
    /// Takes exactly `N` operands; `usage` shows the expected invocation.
    pub(crate) fn take<const N: usize>(self, usage: &str) -> [Expr; N] {
        match self.operands.try_into() {
            Ok(operands) => operands,
            Err(operands) => abort_call_site!(
                "expected {} operands, found {}",
                N,
                operands.len();
                help = "usage: `{}`", usage
            ),
        }
    }
}
