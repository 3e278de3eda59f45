//! SQL builders for soft-deleted tables
//!
//! A row is live when `deleted = 0`. Reads go through [`LiveSelect`], which
//! adds that predicate for the base table and for every [`LiveSelect::live_join`];
//! writes go through [`live_update`] and [`soft_delete_statement`].

/// Builder for `SELECT` statements that only see live rows
#[derive(Debug, Clone)]
pub struct LiveSelect {
    table: &'static str,
    alias: &'static str,
    columns: &'static str,
    joins: Vec<String>,
    predicates: Vec<String>,
    order_by: Option<&'static str>,
    limit: Option<u32>,
}

impl LiveSelect {
    /// Select from `table AS alias`, keeping only its live rows
    pub fn from(table: &'static str, alias: &'static str) -> Self {
        Self {
            table,
            alias,
            columns: "*",
            joins: Vec::new(),
            predicates: vec![format!("{alias}.deleted = 0")],
            order_by: None,
            limit: None,
        }
    }

    /// Set the select list
    pub fn columns(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    /// Inner join without a liveness filter (link tables, lookups)
    pub fn join(mut self, table: &str, alias: &str, on: &str) -> Self {
        self.joins.push(format!("JOIN {table} {alias} ON {on}"));
        self
    }

    /// Inner join that also drops soft-deleted rows of the joined table
    pub fn live_join(mut self, table: &str, alias: &str, on: &str) -> Self {
        self.joins.push(format!("JOIN {table} {alias} ON {on}"));
        self.predicates.push(format!("{alias}.deleted = 0"));
        self
    }

    /// Add a predicate, ANDed with the others
    pub fn filter(mut self, predicate: &str) -> Self {
        self.predicates.push(predicate.to_string());
        self
    }

    pub fn order_by(mut self, order_by: &'static str) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the statement
    pub fn build(&self) -> String {
        let mut sql = format!("SELECT {} FROM {} {}", self.columns, self.table, self.alias);
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        sql.push_str(" WHERE ");
        sql.push_str(&self.predicates.join(" AND "));
        if let Some(order_by) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        sql
    }
}

/// `UPDATE` of a live row
///
/// Binds, in order: one value per column, the `updated_at` timestamp, the id.
/// Deleted or missing rows are left untouched and report zero affected rows.
pub fn live_update(table: &str, columns: &[&str]) -> String {
    let mut assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ?{}", i + 1))
        .collect();
    let n = columns.len();
    assignments.push(format!("updated_at = ?{}", n + 1));
    format!(
        "UPDATE {table} SET {} WHERE id = ?{} AND deleted = 0",
        assignments.join(", "),
        n + 2
    )
}

/// Soft delete of a live row
///
/// Binds the deletion timestamp, then the id. Already deleted rows keep
/// their original `deleted_at`.
pub fn soft_delete_statement(table: &str) -> String {
    format!(
        "UPDATE {table} SET deleted = 1, deleted_at = ?1, updated_at = ?1 WHERE id = ?2 AND deleted = 0"
    )
}
