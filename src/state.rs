//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{AuthService, UserService};
use crate::gate::AccessPolicy;
use crate::infrastructure::persistence::{PgTokenRepository, PgUserRepository};

/// Application state cloned into every request.
///
/// Services are `Arc`-wrapped so cloning the state is cheap; the concrete
/// repository types are fixed here, at the composition root.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    pub policy: Arc<AccessPolicy>,
}
