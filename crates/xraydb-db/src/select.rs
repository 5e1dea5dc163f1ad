//! Incremental construction of `SELECT` statements.
//!
//! Lookups add the joins and filters they need one entity at a time, so
//! the same table may be requested several times. Joins are therefore
//! keyed by their alias (or table name) and added only once.

use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;

/// A bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Text(String),
    Real(f64),
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for SqlParam {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for SqlParam {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoinKind {
    Inner,
    Left,
}

#[derive(Debug, Clone)]
struct Join {
    kind: JoinKind,
    table: String,
    alias: Option<String>,
    column: String,
    other_table: String,
    other_column: String,
}

impl Join {
    fn name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }
}

/// One comparison: `table.column op ?`.
#[derive(Debug, Clone)]
pub struct Condition {
    table: String,
    column: String,
    operator: String,
    value: SqlParam,
}

impl Condition {
    pub fn new(table: &str, column: &str, operator: &str, value: impl Into<SqlParam>) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
            operator: operator.to_string(),
            value: value.into(),
        }
    }
}

/// `SELECT` statement builder.
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    distinct: bool,
    selects: Vec<String>,
    from: Option<String>,
    joins: Vec<Join>,
    wheres: Vec<Vec<Condition>>,
    order_by: Vec<String>,
    limit: Option<u32>,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    pub fn add_select(&mut self, table: &str, column: &str) -> &mut Self {
        self.selects.push(format!("{table}.{column}"));
        self
    }

    pub fn add_select_as(&mut self, table: &str, column: &str, alias: &str) -> &mut Self {
        self.selects.push(format!("{table}.{column} AS {alias}"));
        self
    }

    pub fn add_from(&mut self, table: &str) -> &mut Self {
        self.from = Some(table.to_string());
        self
    }

    /// `INNER JOIN table ON table.column = other_table.other_column`.
    pub fn add_join(
        &mut self,
        table: &str,
        column: &str,
        other_table: &str,
        other_column: &str,
    ) -> &mut Self {
        self.push_join(JoinKind::Inner, table, None, column, other_table, other_column)
    }

    /// Inner join under an alias, for tables joined more than once.
    pub fn add_join_as(
        &mut self,
        table: &str,
        alias: &str,
        column: &str,
        other_table: &str,
        other_column: &str,
    ) -> &mut Self {
        self.push_join(
            JoinKind::Inner,
            table,
            Some(alias),
            column,
            other_table,
            other_column,
        )
    }

    pub fn add_left_join(
        &mut self,
        table: &str,
        column: &str,
        other_table: &str,
        other_column: &str,
    ) -> &mut Self {
        self.push_join(JoinKind::Left, table, None, column, other_table, other_column)
    }

    fn push_join(
        &mut self,
        kind: JoinKind,
        table: &str,
        alias: Option<&str>,
        column: &str,
        other_table: &str,
        other_column: &str,
    ) -> &mut Self {
        let name = alias.unwrap_or(table);
        let already = self.from.as_deref() == Some(name) || self.joins.iter().any(|j| j.name() == name);
        if !already {
            self.joins.push(Join {
                kind,
                table: table.to_string(),
                alias: alias.map(str::to_string),
                column: column.to_string(),
                other_table: other_table.to_string(),
                other_column: other_column.to_string(),
            });
        }
        self
    }

    /// `AND table.column op ?`.
    pub fn add_where(
        &mut self,
        table: &str,
        column: &str,
        operator: &str,
        value: impl Into<SqlParam>,
    ) -> &mut Self {
        self.wheres
            .push(vec![Condition::new(table, column, operator, value)]);
        self
    }

    /// `AND (c1 OR c2 OR ...)`. An empty group is ignored.
    pub fn add_where_any(&mut self, conditions: Vec<Condition>) -> &mut Self {
        if !conditions.is_empty() {
            self.wheres.push(conditions);
        }
        self
    }

    pub fn add_orderby(&mut self, table: &str, column: &str) -> &mut Self {
        self.order_by.push(format!("{table}.{column}"));
        self
    }

    pub fn limit(&mut self, limit: u32) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// Render the statement and its parameters in placeholder order.
    pub fn build(&self) -> (String, Vec<SqlParam>) {
        let mut params = Vec::new();
        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        if self.selects.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.selects.join(", "));
        }

        if let Some(from) = &self.from {
            sql.push_str(" FROM ");
            sql.push_str(from);
        }

        for join in &self.joins {
            let keyword = match join.kind {
                JoinKind::Inner => "JOIN",
                JoinKind::Left => "LEFT JOIN",
            };
            sql.push(' ');
            sql.push_str(keyword);
            sql.push(' ');
            sql.push_str(&join.table);
            if let Some(alias) = &join.alias {
                sql.push_str(" AS ");
                sql.push_str(alias);
            }
            sql.push_str(&format!(
                " ON {}.{} = {}.{}",
                join.name(),
                join.column,
                join.other_table,
                join.other_column
            ));
        }

        if !self.wheres.is_empty() {
            let clauses: Vec<String> = self
                .wheres
                .iter()
                .map(|group| {
                    let parts: Vec<String> = group
                        .iter()
                        .map(|c| {
                            params.push(c.value.clone());
                            format!("{}.{} {} ?", c.table, c.column, c.operator)
                        })
                        .collect();
                    if parts.len() == 1 {
                        parts.join("")
                    } else {
                        format!("({})", parts.join(" OR "))
                    }
                })
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        (sql, params)
    }
}

/// Bind parameters onto a query in order.
pub fn bind_params<'q>(
    sql: &'q str,
    params: &'q [SqlParam],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    params
        .iter()
        .fold(sqlx::query(sql), |query, param| match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
            SqlParam::Real(v) => query.bind(*v),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_select() {
        let mut builder = SelectBuilder::new();
        builder
            .add_select("element", "id")
            .add_from("element")
            .add_where("element", "atomic_number", "=", 26_u8)
            .limit(1);
        let (sql, params) = builder.build();
        assert_eq!(
            sql,
            "SELECT element.id FROM element WHERE element.atomic_number = ? LIMIT 1"
        );
        assert_eq!(params, vec![SqlParam::Int(26)]);
    }

    #[test]
    fn test_joins_are_deduplicated() {
        let mut builder = SelectBuilder::new();
        builder
            .add_select("atomic_subshell", "id")
            .add_from("atomic_subshell")
            .add_join("atomic_shell", "id", "atomic_subshell", "atomic_shell_id")
            .add_join("atomic_shell", "id", "atomic_subshell", "atomic_shell_id")
            .add_join("atomic_subshell", "id", "x", "y");
        let (sql, _) = builder.build();
        assert_eq!(
            sql,
            "SELECT atomic_subshell.id FROM atomic_subshell \
             JOIN atomic_shell ON atomic_shell.id = atomic_subshell.atomic_shell_id"
        );
    }

    #[test]
    fn test_aliases_and_or_group() {
        let mut builder = SelectBuilder::new();
        builder
            .add_select("t", "id")
            .add_from("xray_transition")
            .add_join_as("atomic_subshell", "src", "id", "xray_transition", "source_subshell_id")
            .add_join_as(
                "atomic_subshell",
                "dst",
                "id",
                "xray_transition",
                "destination_subshell_id",
            )
            .add_where_any(vec![
                Condition::new("n", "ascii", "=", "K-L3"),
                Condition::new("n", "utf16", "=", "K-L3"),
            ])
            .add_where("src", "azimuthal_quantum_number", ">", 0_u32)
            .add_orderby("t", "reference_id");
        let (sql, params) = builder.build();
        assert!(sql.contains("JOIN atomic_subshell AS src ON src.id = xray_transition.source_subshell_id"));
        assert!(sql.contains("JOIN atomic_subshell AS dst ON dst.id"));
        assert!(sql.contains("WHERE (n.ascii = ? OR n.utf16 = ?) AND src.azimuthal_quantum_number > ?"));
        assert!(sql.ends_with("ORDER BY t.reference_id"));
        assert_eq!(params.len(), 3);
        assert_eq!(params[2], SqlParam::Int(0));
    }

    #[test]
    fn test_distinct_left_join() {
        let mut builder = SelectBuilder::new();
        builder
            .distinct()
            .add_select("element", "id")
            .add_from("element")
            .add_left_join("element_symbol", "element_id", "element", "id");
        let (sql, params) = builder.build();
        assert_eq!(
            sql,
            "SELECT DISTINCT element.id FROM element \
             LEFT JOIN element_symbol ON element_symbol.element_id = element.id"
        );
        assert!(params.is_empty());
    }
}
