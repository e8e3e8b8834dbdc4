use serde::Deserialize;

/// Form-submission event delivered by the hosting platform's trigger.
/// Item order is the order the fields were answered in.
#[derive(Debug, Deserialize)]
pub struct FormSubmitEvent {
    pub responses: Vec<ItemResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    pub title: String,
    pub response: String,
}

/// Render the diagnostic log lines for an event: one banner line, then
/// one line per answered item, in the original order.
pub fn log_lines(event: &FormSubmitEvent) -> Vec<String> {
    let mut lines = Vec::with_capacity(event.responses.len() + 1);
    lines.push(format!("收到表單提交：{} 個欄位", event.responses.len()));
    for item in &event.responses {
        lines.push(format!("{}： {}", item.title, item.response));
    }
    lines
}
