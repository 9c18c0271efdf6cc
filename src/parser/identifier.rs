use sqlparser::ast::{Expr, Ident};

pub struct Identifier;

impl Identifier {
    /// Strip backtick and bracket decoration from both ends of a name.
    pub fn strip_decoration(name: &str) -> &str {
        name.trim_matches(|c| matches!(c, '`' | '[' | ']'))
    }

    /// Double-quote a name for use in SQL text, doubling embedded quotes.
    pub fn quote(name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// Bare column name of an identifier or a dotted property path
    /// (`a.b.c`), or `None` for any other expression.
    pub fn column_name(expr: &Expr) -> Option<String> {
        match expr {
            Expr::Identifier(ident) => Some(Self::strip_decoration(&ident.value).to_string()),
            Expr::CompoundIdentifier(parts) => Some(
                parts
                    .iter()
                    .map(|part| Self::strip_decoration(&part.value))
                    .collect::<Vec<_>>()
                    .join("."),
            ),
            _ => None,
        }
    }

    /// Single quoted identifier referring to the ephemeral table column `name`.
    pub fn quoted_expr(name: &str) -> Expr {
        Expr::Identifier(Ident::with_quote('"', name))
    }
}
