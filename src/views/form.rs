use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::state::SharedState;

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate {
    inline_css: String,
}

pub async fn form_page(State(state): State<SharedState>) -> impl IntoResponse {
    let template = FormTemplate {
        inline_css: state.inline_css.clone(),
    };
    Html(template.render().unwrap_or_default())
}
