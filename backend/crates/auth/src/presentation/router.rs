//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use platform::clock::Clock;
use std::sync::Arc;

use crate::application::issue_token::TokenIssuer;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Create the Auth router
pub fn auth_router<C>(issuer: Arc<TokenIssuer<C>>) -> Router
where
    C: Clock + 'static,
{
    let state = AuthAppState {
        issuer: issuer.clone(),
    };

    let protected = Router::new()
        .route("/me", get(handlers::session_status))
        .route_layer(middleware::from_fn_with_state(
            issuer,
            require_session::<C>,
        ));

    Router::new()
        .route("/logout", post(handlers::sign_out::<C>))
        .with_state(state)
        .merge(protected)
}
