//! `GET /advocacy` and `POST /advocacy/search`: a server-rendered
//! search form, in the same process as the GraphQL service rather than a
//! separate JSON endpoint.

use crate::state::AppState;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Form;
use ilga_advocacy::{select, AdvocacyCard};
use serde::Deserialize;
use std::sync::Arc;

pub async fn advocacy_form() -> Html<String> {
    Html(render_page(None))
}

#[derive(Debug, Deserialize)]
pub struct AdvocacySearchForm {
    zip: String,
    policy_category: Option<String>,
}

pub async fn advocacy_search(State(state): State<Arc<AppState>>, Form(form): Form<AdvocacySearchForm>) -> impl IntoResponse {
    let policy_category = form.policy_category.as_deref().filter(|c| !c.is_empty());
    let body = match select(&state.graph, &state.scorecards, &state.moneyball, &state.crosswalk, &form.zip, policy_category) {
        Ok(cards) => render_cards(&cards),
        Err(e) => format!("<p class=\"error\">{e}</p>"),
    };
    Html(render_page(Some(&body)))
}

fn render_cards(cards: &[AdvocacyCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                "<article class=\"card\"><h3>{:?}</h3><p><strong>{}</strong></p><p>{}</p><p><em>{}</em></p></article>",
                card.kind, card.member_name, card.why_this_target, card.script_hint
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_page(results: Option<&str>) -> String {
    let results = results.unwrap_or_default();
    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>ILGA Watch Advocacy</title></head>
<body>
<h1>Find your legislators</h1>
<form method="post" action="/advocacy/search">
  <label>ZIP code <input type="text" name="zip" required></label>
  <label>Policy category <input type="text" name="policy_category"></label>
  <button type="submit">Search</button>
</form>
<section class="results">{results}</section>
</body>
</html>"#
    )
}
