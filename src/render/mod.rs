//! Minimal server-side HTML rendering. Pages are small enough that a
//! template engine would be overkill; handlers build bodies with these
//! helpers and wrap them in the shared layout.

use crate::store::User;

/// Escape text for interpolation into HTML bodies and attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page chrome: nav with auth state, then the page body.
pub fn layout(title: &str, user: Option<&User>, body: &str) -> String {
    let account = match user {
        Some(user) => format!(
            r#"<span class="nav-user">{}</span> <a href="/favorites">My favorites</a>
            <form class="inline" method="post" action="/logout"><button type="submit">Log out</button></form>"#,
            escape(&user.name)
        ),
        None => r#"<a href="/login">Log in</a> <a href="/signup">Sign up</a>"#.to_string(),
    };
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - MyUni</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<nav><a class="brand" href="/">MyUni</a><div class="nav-right">{account}</div></nav>
<main>
{body}
</main>
<script src="/static/app.js"></script>
</body>
</html>"#,
        title = escape(title),
        account = account,
        body = body,
    )
}

/// One university card for the list and favorites pages.
pub fn university_card(slug: &str, name: &str, city: &str, image: &str, programs: &[String]) -> String {
    let tags: String = programs
        .iter()
        .map(|p| format!(r#"<span class="tag">{}</span>"#, escape(p)))
        .collect();
    format!(
        r#"<div class="card">
<img src="{image}" alt="{name}" loading="lazy">
<h3><a href="/university/{slug}">{name}</a></h3>
<p class="city">{city}</p>
<div class="tags">{tags}</div>
<button data-fav-btn data-slug="{slug}">&#9825; Save</button>
</div>"#,
        slug = escape(slug),
        name = escape(name),
        city = escape(city),
        image = escape(image),
        tags = tags,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>&"it's"</b>"#),
            "&lt;b&gt;&amp;&quot;it&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn layout_switches_on_auth_state() {
        let anonymous = layout("Home", None, "<p>hi</p>");
        assert!(anonymous.contains("/login"));
        assert!(anonymous.contains("<p>hi</p>"));

        let user = User {
            id: "u1".into(),
            name: "Amal <script>".into(),
            email: "a@example.com".into(),
            password: "h".into(),
            favorites: vec![],
        };
        let signed_in = layout("Home", Some(&user), "");
        assert!(signed_in.contains("Amal &lt;script&gt;"));
        assert!(signed_in.contains("/logout"));
    }

    #[test]
    fn card_escapes_interpolated_fields() {
        let html = university_card("s", "A & B", "Dubai", "/img.png", &["IT".into()]);
        assert!(html.contains("A &amp; B"));
        assert!(html.contains(r#"data-slug="s""#));
    }
}
