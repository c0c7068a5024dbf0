use axum::response::Redirect;
use tower_sessions::Session;

use super::AppError;
use crate::session::destroy_session;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    destroy_session(&session).await?;
    Ok(Redirect::to("/"))
}
