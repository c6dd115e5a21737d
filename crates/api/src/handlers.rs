//! Request handlers.

use crate::error::ApiError;
use crate::models::{
    EstimateQuery, EstimateResponse, HealthResponse, ListPoolsResponse, MessageResponse,
    PoolHealthQuery, PoolHealthResponse, PutEntryRequest, RankQuery, RankingResponse,
    RefreshResponse, SearchQuery, StoreEntry,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use dlmm_scout_domain::{
    DEFAULT_RANKING_LIMIT, DepositAssumption, PoolFilter, PoolInfo, estimate_roi, rank_pools,
    score_pool, search_pools,
};
use rust_decimal::Decimal;

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let pools_cached = state.pools().await.len();
    Json(HealthResponse {
        status: "ok",
        pools_cached,
        last_refresh: state.last_refresh().await,
    })
}

/// `POST /pools/refresh`
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    let fetched = state.refresh().await?;
    Ok(Json(RefreshResponse { fetched }))
}

/// `GET /pools`
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ListPoolsResponse>, ApiError> {
    let filter = filter_from(query.min_liquidity, query.min_volume)?;
    let pools = state.pools().await;
    let matches: Vec<PoolInfo> = search_pools(&pools, &query.query, &filter)
        .into_iter()
        .cloned()
        .collect();
    let total = matches.len();
    Ok(Json(ListPoolsResponse {
        pools: matches,
        total,
    }))
}

/// `GET /pools/top`
pub async fn top(
    State(state): State<AppState>,
    Query(query): Query<RankQuery>,
) -> Result<Json<RankingResponse>, ApiError> {
    if query.deposit <= Decimal::ZERO {
        return Err(ApiError::BadRequest("deposit must be positive".to_string()));
    }
    let deposit = deposit_from(query.deposit, query.joins_pool)?;
    let filter = filter_from(query.min_liquidity, query.min_volume)?;
    let limit = query.limit.unwrap_or(DEFAULT_RANKING_LIMIT);

    let pools = state.pools().await;
    Ok(Json(RankingResponse {
        pools: rank_pools(&pools, &deposit, &filter, limit),
    }))
}

/// `GET /pools/{address}`
pub async fn get_pool(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<PoolInfo>, ApiError> {
    let pools = state.pools().await;
    let pool = lookup(&pools, &address)?;
    Ok(Json(pool.clone()))
}

/// `GET /pools/{address}/estimate`
pub async fn estimate(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<EstimateQuery>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let deposit = deposit_from(query.deposit, query.joins_pool)?;
    let pools = state.pools().await;
    let pool = lookup(&pools, &address)?;
    Ok(Json(EstimateResponse {
        pool: pool.clone(),
        estimate: estimate_roi(pool, &deposit),
    }))
}

/// `GET /pools/{address}/health`
pub async fn pool_health(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<PoolHealthQuery>,
) -> Result<Json<PoolHealthResponse>, ApiError> {
    let deposit = deposit_from(query.deposit.unwrap_or(Decimal::ZERO), true)?;
    let pools = state.pools().await;
    let pool = lookup(&pools, &address)?;
    Ok(Json(PoolHealthResponse {
        pool: pool.clone(),
        report: score_pool(pool, &pools, &state.thresholds, deposit.amount),
    }))
}

/// `GET /store`
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoreEntry>>, ApiError> {
    let entries = state.store().get_all()?;
    Ok(Json(
        entries
            .into_iter()
            .map(|(key, value)| StoreEntry { key, value })
            .collect(),
    ))
}

/// `GET /store/{key}`
pub async fn get_entry(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<StoreEntry>, ApiError> {
    let value = state
        .store()
        .get(&key)?
        .ok_or_else(|| ApiError::NotFound(format!("no entry under key {key}")))?;
    Ok(Json(StoreEntry { key, value }))
}

/// `PUT /store/{key}`
pub async fn put_entry(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<PutEntryRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store().set(&key, &body.value)?;
    Ok(Json(MessageResponse {
        message: format!("stored {key}"),
    }))
}

/// `DELETE /store/{key}`
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.store().delete(&key)? {
        Ok(Json(MessageResponse {
            message: format!("deleted {key}"),
        }))
    } else {
        Err(ApiError::NotFound(format!("no entry under key {key}")))
    }
}

fn lookup<'a>(pools: &'a [PoolInfo], address: &str) -> Result<&'a PoolInfo, ApiError> {
    pools
        .iter()
        .find(|p| p.address == address)
        .ok_or_else(|| ApiError::NotFound(format!("no pool with address {address}")))
}

fn deposit_from(amount: Decimal, joins_pool: bool) -> Result<DepositAssumption, ApiError> {
    DepositAssumption::new(amount, joins_pool).map_err(|err| ApiError::BadRequest(err.to_string()))
}

fn filter_from(
    min_liquidity: Option<Decimal>,
    min_volume: Option<Decimal>,
) -> Result<PoolFilter, ApiError> {
    PoolFilter::new(
        min_liquidity.unwrap_or(Decimal::ZERO),
        min_volume.unwrap_or(Decimal::ZERO),
    )
    .map_err(|err| ApiError::BadRequest(err.to_string()))
}
