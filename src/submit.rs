use chrono::Utc;

use crate::error::SubmitError;
use crate::sheets::RowStore;

/// Record a submitted expert name and derive the expert's link.
///
/// An absent or whitespace-only name is rejected before any store
/// access. On success one row `(trimmed name, timestamp)` is appended
/// and the returned URL is the base URL with the trimmed name
/// concatenated verbatim, no percent-encoding.
pub async fn process(
    store: &dyn RowStore,
    base_url: &str,
    name: Option<&str>,
) -> Result<String, SubmitError> {
    let trimmed = name.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(SubmitError::EmptyName);
    }

    if let Err(e) = store.append_row(trimmed, Utc::now()).await {
        tracing::error!("寫入試算表時發生錯誤：{e}");
        return Err(e.into());
    }

    tracing::info!("記錄專家：{trimmed}");

    Ok(format!("{base_url}{trimmed}"))
}
