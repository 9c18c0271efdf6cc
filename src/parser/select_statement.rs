use std::fmt::Display;

use sqlparser::{
    ast::{Query, Select, SelectItem, SetExpr, Statement},
    parser::Parser,
};

use crate::{parser::{Identifier, SqlDialect}, Error, Result};

/// A single plain `SELECT` statement whose projection and selection can be
/// rewritten before being rendered back to SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    query: Box<Query>,
}

impl SelectStatement {
    /// `SELECT <select> FROM <table> [WHERE <where>]`, the where part only when
    /// the clause is not blank. `table` is inserted as given, already quoted.
    pub fn compose(select: &str, table: &str, where_clause: Option<&str>) -> String {
        match where_clause.map(str::trim).filter(|w| !w.is_empty()) {
            Some(where_clause) => format!("SELECT {select} FROM {table} WHERE {where_clause}"),
            None => format!("SELECT {select} FROM {table}"),
        }
    }

    pub fn parse(sql: &str, dialect: SqlDialect) -> Result<Self> {
        let mut statements = Parser::parse_sql(&*dialect.dialect(), sql)?;
        if statements.len() != 1 {
            return Err(Error::UnsupportedStatement(format!(
                "expected a single SELECT statement, found {}",
                statements.len()
            )));
        }

        let query = match statements.remove(0) {
            Statement::Query(query) => query,
            other => return Err(Error::UnsupportedStatement(other.to_string())),
        };

        let mut statement = Self { query };
        statement.select_mut()?;
        Ok(statement)
    }

    pub fn select(&self) -> Result<&Select> {
        match self.query.body.as_ref() {
            SetExpr::Select(select) => Ok(select),
            other => Err(Error::UnsupportedStatement(other.to_string())),
        }
    }

    pub fn select_mut(&mut self) -> Result<&mut Select> {
        match self.query.body.as_mut() {
            SetExpr::Select(select) => Ok(select),
            other => Err(Error::UnsupportedStatement(other.to_string())),
        }
    }

    /// Append an unaliased item selecting the table column `name`.
    pub fn push_column(&mut self, name: &str) -> Result<()> {
        self.select_mut()?
            .projection
            .push(SelectItem::UnnamedExpr(Identifier::quoted_expr(name)));
        Ok(())
    }
}

impl Display for SelectStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query)
    }
}
