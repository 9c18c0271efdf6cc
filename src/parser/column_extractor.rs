use std::ops::ControlFlow;

use serde_json::Value;
use sqlparser::ast::{visit_expressions_mut, Expr, SelectItem};

use crate::{
    document::PathResolver,
    parser::{Identifier, SelectStatement},
    schema::{AliasIndex, TableSchema},
    Result,
};

/// Collects the column references of a query and registers each one in the
/// table schema, resolved against the document.
///
/// Every identifier and dotted property path is rewritten to a single
/// double-quoted identifier naming the ephemeral table column, so `a.b` becomes
/// `"a.b"`. References are deduplicated by lowercase name; the first one seen
/// defines the column.
pub struct ColumnExtractor<'a> {
    root: &'a Value,
    aliases: &'a AliasIndex,
    schema: &'a mut TableSchema,
}

impl<'a> ColumnExtractor<'a> {
    pub fn new(root: &'a Value, aliases: &'a AliasIndex, schema: &'a mut TableSchema) -> Self {
        Self { root, aliases, schema }
    }

    /// Aliases given to plain column references in the projection.
    pub fn scan_aliases(projection: &[SelectItem]) -> AliasIndex {
        let mut index = AliasIndex::default();
        for item in projection {
            if let SelectItem::ExprWithAlias { expr, alias } = item {
                if let Some(name) = Identifier::column_name(expr) {
                    index.register(&name, &alias.value);
                }
            }
        }
        index
    }

    /// Rewrite the where-clause, then each projection item in order.
    pub fn extract_statement(&mut self, statement: &mut SelectStatement) -> Result<()> {
        let select = statement.select_mut()?;

        select.selection = select.selection.take().map(|expr| self.extract(expr));

        for item in select.projection.iter_mut() {
            match item {
                SelectItem::UnnamedExpr(expr) | SelectItem::ExprWithAlias { expr, .. } => {
                    *expr = self.extract(expr.clone());
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Return `expr` with every column reference rewritten, registering the
    /// references not seen before.
    pub fn extract(&mut self, mut expr: Expr) -> Expr {
        let _ = visit_expressions_mut(&mut expr, |node| {
            self.visit(node);
            ControlFlow::<()>::Continue(())
        });
        expr
    }

    fn visit(&mut self, node: &mut Expr) {
        let Some(name) = Identifier::column_name(node) else {
            return;
        };
        if name.is_empty() {
            return;
        }

        *node = Identifier::quoted_expr(&name);

        if self.schema.contains(&name) {
            return;
        }

        let resolved = PathResolver::resolve(self.root, &name.to_lowercase());
        self.schema.classify(&name, resolved, self.aliases);
    }
}
