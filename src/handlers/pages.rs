//! Server-rendered HTML pages. Error bodies on this surface are plain
//! text; the JSON error envelope is reserved for /api routes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::auth::current_user;
use crate::catalog::query;
use crate::images::display_image;
use crate::render::{escape, layout, university_card};
use crate::AppState;

pub async fn home(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let user = current_user(&state, &headers).await;
    let cities: String = query::cities(state.catalog.all())
        .iter()
        .map(|c| {
            format!(
                r#"<li><a href="/universities?city={}">{}</a></li>"#,
                urlencode(c),
                escape(c)
            )
        })
        .collect();
    let body = format!(
        r#"<h1>Find your university</h1>
<p>Browse universities across the Emirates, filter by program, and save the ones you like.</p>
<ul class="city-list">{cities}</ul>
<section id="save-list">
<h2>Send yourself your list</h2>
<form id="saveForm">
<input name="name" placeholder="Your name" required>
<input name="email" type="email" placeholder="Email" required>
<textarea name="note" placeholder="Note (optional)"></textarea>
<button type="submit">Save my list</button>
</form>
</section>"#,
        cities = cities
    );
    Html(layout("Home", user.as_ref(), &body))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub city: Option<String>,
    pub q: Option<String>,
    pub program: Option<String>,
    pub page: Option<usize>,
}

pub async fn universities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Response {
    let Some(city) = params.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "No city selected").into_response();
    };

    let in_city = query::universities_by_city(state.catalog.all(), city);
    if in_city.is_empty() {
        return (StatusCode::NOT_FOUND, "Unknown city").into_response();
    }

    let q = params.q.as_deref().unwrap_or("");
    let program = params.program.as_deref().unwrap_or("");
    let filtered: Vec<_> = in_city
        .iter()
        .filter(|u| q.is_empty() || query::matches_query(u, q))
        .filter(|u| program.is_empty() || query::has_program(u, program))
        .copied()
        .collect();

    let page = query::paginate(&filtered, params.page.unwrap_or(1));
    let user = current_user(&state, &headers).await;

    let cards: String = page
        .items
        .iter()
        .map(|u| {
            let image = display_image(u, &state.config.images);
            university_card(&u.slug, &u.name, &u.city, &image, &u.programs)
        })
        .collect();

    let program_options: String = query::programs_by_city(state.catalog.all(), city)
        .iter()
        .map(|p| {
            let selected = if p == program { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape(p),
                selected,
                escape(p)
            )
        })
        .collect();

    let pager = (1..=page.total_pages)
        .map(|n| {
            if n == page.page {
                format!(r#"<span class="page current">{}</span>"#, n)
            } else {
                format!(
                    r#"<a class="page" href="/universities?city={}&q={}&program={}&page={}">{}</a>"#,
                    urlencode(city),
                    urlencode(q),
                    urlencode(program),
                    n,
                    n
                )
            }
        })
        .collect::<String>();

    let body = format!(
        r#"<h1>Universities in {city}</h1>
<form method="get" action="/universities" class="filters">
<input type="hidden" name="city" value="{city}">
<input name="q" placeholder="Search name or description" value="{q}">
<select name="program"><option value="">All programs</option>{program_options}</select>
<button type="submit">Filter</button>
</form>
<div class="cards">{cards}</div>
<div class="pager">{pager}</div>"#,
        city = escape(city),
        q = escape(q),
        program_options = program_options,
        cards = cards,
        pager = pager,
    );
    Html(layout(
        &format!("Universities in {}", city),
        user.as_ref(),
        &body,
    ))
    .into_response()
}

pub async fn university_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let Some(u) = state.catalog.by_slug(&slug) else {
        return (StatusCode::NOT_FOUND, "Unknown university").into_response();
    };
    let user = current_user(&state, &headers).await;

    let requirements: String = u
        .requirements
        .iter()
        .map(|r| format!("<li>{}</li>", escape(r)))
        .collect();
    let programs: String = u
        .programs
        .iter()
        .map(|p| format!(r#"<span class="tag">{}</span>"#, escape(p)))
        .collect();
    let image = display_image(u, &state.config.images);

    let body = format!(
        r#"<article class="detail">
<img src="{image}" alt="{name}">
<h1>{name}</h1>
<p class="city">{city}</p>
<p>{description}</p>
<h2>Admission requirements</h2>
<ul>{requirements}</ul>
<h2>Programs</h2>
<div class="tags">{programs}</div>
<button data-fav-btn data-slug="{slug}">&#9825; Save</button>
</article>"#,
        image = escape(&image),
        name = escape(&u.name),
        city = escape(&u.city),
        description = escape(&u.description),
        requirements = requirements,
        programs = programs,
        slug = escape(&u.slug),
    );
    Html(layout(&u.name, user.as_ref(), &body)).into_response()
}

pub async fn favorites_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let user = current_user(&state, &headers).await;

    let body = match &user {
        None => r#"<h1>My favorites</h1>
<p>You are not signed in. <a href="/login">Log in</a> or <a href="/signup">sign up</a> to keep favorites on your account.</p>"#
            .to_string(),
        Some(user) if user.favorites.is_empty() => format!(
            r#"<h1>My favorites</h1>
<p>Nothing saved yet, {}. Browse a city and tap the heart on universities you like.</p>"#,
            escape(&user.name)
        ),
        Some(user) => {
            let cards: String = user
                .favorites
                .iter()
                .filter_map(|slug| state.catalog.by_slug(slug))
                .map(|u| {
                    let image = display_image(u, &state.config.images);
                    university_card(&u.slug, &u.name, &u.city, &image, &u.programs)
                })
                .collect();
            format!(
                r#"<h1>My favorites</h1><div class="cards">{}</div>"#,
                cards
            )
        }
    };
    Html(layout("My favorites", user.as_ref(), &body))
}

pub async fn signup_form(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let user = current_user(&state, &headers).await;
    Html(layout("Sign up", user.as_ref(), &auth_form_body("signup", None)))
}

pub async fn login_form(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let user = current_user(&state, &headers).await;
    Html(layout("Log in", user.as_ref(), &auth_form_body("login", None)))
}

/// Shared signup/login form body; POST handlers re-render it with an error.
pub fn auth_form_body(kind: &str, error: Option<&str>) -> String {
    let (title, action, name_field) = match kind {
        "signup" => (
            "Sign up",
            "/signup",
            r#"<input name="name" placeholder="Name" required>"#,
        ),
        _ => ("Log in", "/login", ""),
    };
    let error_html = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();
    format!(
        r#"<h1>{title}</h1>
{error_html}
<form method="post" action="{action}">
{name_field}
<input name="email" type="email" placeholder="Email" required>
<input name="password" type="password" placeholder="Password" required>
<button type="submit">{title}</button>
</form>"#,
        title = title,
        action = action,
        name_field = name_field,
        error_html = error_html,
    )
}

fn urlencode(input: &str) -> String {
    url::form_urlencoded::byte_serialize(input.as_bytes()).collect()
}
