use crate::sheets::StoreError;

/// Failure modes of a form submission. Both variants are flattened to
/// fixed user-facing strings at the HTTP boundary; the store detail is
/// only ever written to the diagnostic log.
#[derive(Debug)]
pub enum SubmitError {
    EmptyName,
    Store(StoreError),
}

impl SubmitError {
    /// The exact message shown to the end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::EmptyName => "Error: 專家姓名不能為空。",
            SubmitError::Store(_) => {
                "Error: 存取試算表時發生錯誤。請確認試算表 ID 正確，且您已授權指令碼存取權限。"
            }
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::EmptyName => write!(f, "empty expert name"),
            SubmitError::Store(err) => write!(f, "store access failed: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        SubmitError::Store(err)
    }
}
