//! API route table.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    controller::{alert, arrest, auth, company, config, economy, ine, news, staff},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // Economy
        .route("/api/economia/{guild}/{user}", get(economy::get_account))
        .route("/api/economia/{guild}/{user}/comprar", post(economy::purchase))
        .route("/api/economia/{guild}/{user}/abrir", post(economy::open_account))
        .route("/api/economia/{guild}/{user}/depositar", post(economy::deposit))
        // Staff profiles
        .route("/api/staff/{guild}/{user}", get(staff::get_profile))
        .route("/api/staff/{guild}/{user}/tiempo", post(staff::add_minutes))
        .route("/api/staff/{guild}/{user}/tickets", post(staff::increment_tickets))
        .route("/api/staff/{guild}/{user}/notas", post(staff::add_note))
        .route("/api/staff/{guild}/{user}/advertencias", post(staff::add_warning))
        // Antecedentes
        .route(
            "/api/antecedentes/{guild}/{user}",
            get(arrest::get_record).post(arrest::register),
        )
        .route(
            "/api/antecedentes/{guild}/{user}/{entry}/cumplir",
            post(arrest::serve_entry),
        )
        // Company/faction requests
        .route("/api/empresas", post(company::create))
        .route("/api/empresas/pendientes", get(company::list_pending))
        .route("/api/empresas/mias", get(company::list_mine))
        .route("/api/empresas/{id}/aprobar", post(company::approve))
        .route("/api/empresas/{id}/denegar", post(company::deny))
        // Identity documents
        .route("/api/ine", post(ine::upsert))
        .route("/api/ine/{guild}/{user}", get(ine::get_document))
        .route("/api/ine/{guild}/{user}/aprobar", post(ine::approve))
        .route("/api/ine/{guild}/{user}/emitir", post(ine::issue))
        // News
        .route("/api/noticias", post(news::publish))
        .route("/api/noticias/{guild}", get(news::list_recent))
        // Alerts
        .route(
            "/api/alertas/{guild}",
            get(alert::list_active).post(alert::create),
        )
        .route("/api/alertas/{guild}/{id}/resolver", post(alert::resolve))
        // Role configuration
        .route(
            "/api/config/roles/{guild}",
            get(config::get_roles).put(config::put_role),
        )
        .layer(CorsLayer::permissive())
}
