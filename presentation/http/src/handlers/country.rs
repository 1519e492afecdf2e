//! Country hint handler

use super::{items_param, QueryPairs};
use crate::{AppState, CountryResponse};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use tracing::debug;

/// Map each address to an illustrative region label
pub async fn country_lookup(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Json<CountryResponse> {
    let items = items_param(query);
    debug!("Looking up countries for: {:?}", items);

    let results = state.service.lookup_countries(items.as_deref());
    Json(CountryResponse::new(items, results))
}
