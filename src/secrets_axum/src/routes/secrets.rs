use axum::extract::State;
use secrets_application::ListSecretsUseCase;
use secrets_core::UserStore;

use super::AppError;
use crate::{
    session::AuthState,
    templates::{HtmlTemplate, SecretsTemplate},
};

/// Lists every submitted secret. Open to anonymous visitors.
#[tracing::instrument(name = "Secrets", skip_all)]
pub async fn secrets<U>(
    State(user_store): State<U>,
    auth: AuthState,
) -> Result<HtmlTemplate<SecretsTemplate>, AppError>
where
    U: UserStore + Clone + 'static,
{
    let secrets = ListSecretsUseCase::new(user_store).execute().await?;

    Ok(HtmlTemplate(SecretsTemplate {
        secrets,
        authenticated: auth.is_authenticated(),
    }))
}
