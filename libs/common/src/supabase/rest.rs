//! Table API calls (`/rest/v1`)

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use super::SupabaseClient;
use crate::error::{SupabaseError, SupabaseResult};

/// Read query against a single table
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    columns: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

impl SelectQuery {
    /// Create a query selecting every column
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the selected columns
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns = Some(columns.join(","));
        self
    }

    /// Keep rows where `column` equals `value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Order rows by `column`
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_string(), ascending));
        self
    }

    /// Return at most `count` rows
    pub fn limit(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }

    /// Query-string pairs in the table API's syntax
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![(
            "select".to_string(),
            self.columns.clone().unwrap_or_else(|| "*".to_string()),
        )];

        pairs.extend(self.filters.iter().cloned());

        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            pairs.push(("order".to_string(), format!("{}.{}", column, direction)));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}

impl SupabaseClient {
    fn rest_path(table: &str) -> String {
        format!("/rest/v1/{}", table)
    }

    /// Fetch rows from `table`
    ///
    /// Without an access token the request runs as the anonymous role.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &SelectQuery,
        access_token: Option<&str>,
    ) -> SupabaseResult<Vec<T>> {
        let token = access_token.unwrap_or(self.anon_key()).to_string();
        let request = self
            .request(Method::GET, &Self::rest_path(table))
            .query(&query.to_pairs())
            .bearer_auth(token);

        self.send(request).await
    }

    /// Insert one row into `table` and return it as stored
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
        access_token: &str,
    ) -> SupabaseResult<R> {
        let request = self
            .request(Method::POST, &Self::rest_path(table))
            .header("Prefer", "return=representation")
            .bearer_auth(access_token)
            .json(row);

        let mut rows: Vec<R> = self.send(request).await?;
        if rows.is_empty() {
            return Err(SupabaseError::Decode(format!(
                "insert into {} returned no rows",
                table
            )));
        }

        Ok(rows.swap_remove(0))
    }
}
