use polars::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;
use anyhow::{anyhow, bail, Context, Result};

/// One table out of a stats.nba.com response envelope.
#[derive(Debug, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn column_index(&self, header: &str) -> Result<usize> {
        self.headers.iter()
            .position(|h| h == header)
            .ok_or_else(|| anyhow!("result set {} has no {} column", self.name, header))
    }

    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let load_start = Instant::now();
        for (pos, row) in self.row_set.iter().enumerate() {
            if row.len() != self.headers.len() {
                bail!("row {} of {} has {} values for {} headers", pos, self.name, row.len(), self.headers.len());
            }
        }
        let mut df_series: Vec<Series> = Vec::with_capacity(self.headers.len());
        for (col_pos, col_name) in self.headers.iter().enumerate() {
            let json_values: Vec<&Value> = self.row_set.iter().map(|r| &r[col_pos]).collect();
            df_series.push(column_to_series(col_name, &json_values));
        }
        let df = DataFrame::new(df_series)
            .with_context(|| format!("could not build dataframe for {}", self.name))?;
        log::debug!("dataframe loading for {} took {:?}", self.name, load_start.elapsed());
        Ok(df)
    }
}

fn column_to_series(col_name: &str, json_values: &[&Value]) -> Series {
    let non_null = || json_values.iter().filter(|v| !v.is_null());
    let has_values = non_null().next().is_some();
    if has_values && non_null().all(|v| v.is_i64()) {
        let typed_data = json_values.iter().map(|v| v.as_i64()).collect::<Vec<Option<i64>>>();
        Series::new(col_name, typed_data)
    } else if has_values && non_null().all(|v| v.is_number()) {
        let typed_data = json_values.iter().map(|v| v.as_f64()).collect::<Vec<Option<f64>>>();
        Series::new(col_name, typed_data)
    } else {
        let typed_data = json_values.iter().map(|v| value_to_text(v)).collect::<Vec<Option<String>>>();
        Series::new(col_name, typed_data)
    }
}

fn value_to_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Pulls every result set out of a response. Most endpoints use `resultSets`,
/// a few older ones answer with a single `resultSet`.
pub fn result_sets(endpoint_json: &Value) -> Result<Vec<ResultSet>> {
    let raw = endpoint_json.get("resultSets")
        .or_else(|| endpoint_json.get("resultSet"))
        .ok_or_else(|| anyhow!("response has no result sets"))?;
    let sets = match raw {
        Value::Array(_) => serde_json::from_value::<Vec<ResultSet>>(raw.clone()),
        _ => serde_json::from_value::<ResultSet>(raw.clone()).map(|s| vec![s]),
    };
    sets.context("malformed result set")
}

/// The first result set, which is the overall table on the player endpoints.
pub fn primary_result_set(endpoint_json: &Value) -> Result<ResultSet> {
    result_sets(endpoint_json)?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("response has an empty result set list"))
}

pub fn primary_frame(endpoint_json: &Value) -> Result<DataFrame> {
    primary_result_set(endpoint_json)?.to_dataframe()
}
