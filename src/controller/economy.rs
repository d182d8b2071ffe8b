use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, BearerToken},
    model::{
        economy::{EconomyAccountDto, PurchaseBreakdownDto, SubBalance},
        permission::AccessTier,
    },
    service::economy::EconomyService,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseBody {
    pub monto: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositBody {
    /// Target sub-balance name, e.g. "salario" or "dineroNegro".
    pub cuenta: String,
    pub monto: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub cuenta: EconomyAccountDto,
    pub compra: PurchaseBreakdownDto,
}

/// GET /api/economia/{guild}/{user} - Fetch an economy account
///
/// # Returns
/// - `200 OK`: EconomyAccountDto
/// - `404 Not Found`: No account; the message tells the user to contact
///   an administrator
pub async fn get_account(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db).require_user(&token).await?;

    let account = EconomyService::new(&state.db)
        .get_account(&guild_id, &discord_id)
        .await?;

    Ok((StatusCode::OK, Json(EconomyAccountDto::from_entity(account))))
}

/// POST /api/economia/{guild}/{user}/comprar - Debit a purchase
///
/// Checking is debited first, the remainder comes from cash. Users may
/// only spend from their own account; Economy-tier staff may operate on
/// any account.
pub async fn purchase(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
    Json(body): Json<PurchaseBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;

    if user.discord_id != discord_id {
        state
            .permissions()
            .require(&guild_id, &user.discord_id, AccessTier::Economy)
            .await?;
    }

    let (account, breakdown) = EconomyService::new(&state.db)
        .purchase(&guild_id, &discord_id, body.monto)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PurchaseResponse {
            cuenta: EconomyAccountDto::from_entity(account),
            compra: breakdown,
        }),
    ))
}

/// POST /api/economia/{guild}/{user}/abrir - Open a zeroed account
///
/// Economy tier only.
pub async fn open_account(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Economy)
        .await?;

    let account = EconomyService::new(&state.db)
        .open_account(&guild_id, &discord_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(EconomyAccountDto::from_entity(account)),
    ))
}

/// POST /api/economia/{guild}/{user}/depositar - Credit a sub-balance
///
/// Economy tier only.
pub async fn deposit(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
    Json(body): Json<DepositBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Economy)
        .await?;

    let balance = SubBalance::parse(&body.cuenta)?;
    let account = EconomyService::new(&state.db)
        .deposit(&guild_id, &discord_id, balance, body.monto)
        .await?;

    Ok((StatusCode::OK, Json(EconomyAccountDto::from_entity(account))))
}
