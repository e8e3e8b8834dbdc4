use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::SharedState;
use crate::submit;

/// Handle a form submission. Always answers 200 with a plain string:
/// the derived expert URL, or one of the two fixed error messages.
/// No failure escapes as an HTTP error.
pub async fn submit(State(state): State<SharedState>, body: Bytes) -> impl IntoResponse {
    let name = form_urlencoded::parse(&body)
        .find(|(k, _)| k == "expertName")
        .map(|(_, v)| v.into_owned());

    match submit::process(
        state.store.as_ref(),
        &state.config.base_url,
        name.as_deref(),
    )
    .await
    {
        Ok(url) => url,
        Err(e) => e.user_message().to_string(),
    }
}
