use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory::user::create_user_with_id};

use crate::{
    data::session::SessionRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, BearerToken},
};

/// Tests resolving a valid, unexpired token to its user.
///
/// Expected: Ok with the user the token was issued for
#[tokio::test]
async fn resolves_valid_token() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_user_with_id(db, "42").await.unwrap();
    let now = Utc::now().naive_utc();
    SessionRepository::new(db)
        .create("42", "tok-valid", now, now + Duration::hours(24))
        .await
        .unwrap();

    let user = AuthGuard::new(db)
        .require_user(&BearerToken("tok-valid".to_string()))
        .await
        .unwrap();

    assert_eq!(user.discord_id, "42");
}

/// Tests presenting a token that was never issued.
///
/// Expected: AuthError::InvalidToken
#[tokio::test]
async fn rejects_unknown_token() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db)
        .require_user(&BearerToken("tok-forged".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests presenting a token whose expiry has passed.
///
/// An expired token is rejected distinctly from an unknown one.
///
/// Expected: AuthError::ExpiredToken
#[tokio::test]
async fn rejects_expired_token() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_user_with_id(db, "42").await.unwrap();
    let now = Utc::now().naive_utc();
    SessionRepository::new(db)
        .create("42", "tok-old", now - Duration::hours(48), now - Duration::hours(24))
        .await
        .unwrap();

    let result = AuthGuard::new(db)
        .require_user(&BearerToken("tok-old".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::ExpiredToken))
    ));
}
