use quote::ToTokens;
use syn::Expr;

/// Source text of `expr`, as rendered by the token printer.
pub(crate) fn expr_string(expr: &Expr) -> String {
    expr.to_token_stream().to_string()
}

/// `string` escaped for use as a format string.
pub(crate) fn escaped(string: &str) -> String {
    string.replace('{', "{{").replace('}', "}}")
}

/// Prefix of disabled suites and test cases.
pub(crate) const DISABLED_PREFIX: &str = "DISABLED_";

/// Suite names must not contain `_`, except in a leading `DISABLED_`.
pub(crate) fn is_valid_suite_name(name: &str) -> bool {
    let name = name.strip_prefix(DISABLED_PREFIX).unwrap_or(name);
    !name.is_empty() && !name.contains('_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_names() {
        assert!(is_valid_suite_name("Math"));
        assert!(is_valid_suite_name("DISABLED_Math"));
        assert!(!is_valid_suite_name("Big_Math"));
        assert!(!is_valid_suite_name("DISABLED_"));
        assert!(!is_valid_suite_name("Math_"));
    }

    #[test]
    fn escapes_braces() {
        assert_eq!(escaped("S { x: 1 } == y"), "S {{ x: 1 }} == y");
    }
}
