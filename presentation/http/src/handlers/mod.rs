//! HTTP request handlers

pub mod classify;
pub mod country;
pub mod health;

use crate::ItemsQuery;
use axum::extract::{rejection::QueryRejection, Query};
use tracing::warn;

/// Decoded query string, kept as pairs so repeated keys survive
pub(crate) type QueryPairs = Vec<(String, String)>;

/// Unwrap the `items` parameter, treating an unparseable query string as
/// if no items were given
pub(crate) fn items_param(query: Result<Query<QueryPairs>, QueryRejection>) -> Option<String> {
    match query {
        Ok(Query(pairs)) => ItemsQuery::from_pairs(pairs).items,
        Err(rejection) => {
            warn!("Ignoring malformed query string: {}", rejection);
            None
        }
    }
}
