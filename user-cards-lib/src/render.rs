use crate::config::DirectoryConfig;
use crate::types::*;

pub const CARD_CLASS: &str = "user-card";

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_view(state: &ViewState, config: &DirectoryConfig) -> String {
    match state {
        ViewState::Loading => render_loading(),
        ViewState::Error(message) => render_error(message),
        ViewState::Loaded(users) => render_user_list(users, config),
    }
}

pub fn render_loading() -> String {
    r#"<div class="loading" role="progressbar" aria-busy="true" aria-label="Loading users"></div>"#
        .to_string()
}

pub fn render_error(message: &str) -> String {
    format!(r#"<div class="error" role="alert">{}</div>"#, escape_html(message))
}

pub fn render_user_list(users: &[User], config: &DirectoryConfig) -> String {
    let mut html = String::new();
    html.push_str(r#"<main class="container">"#);
    html.push_str(&format!(r#"<h1 class="title">{}</h1>"#, escape_html(&config.heading)));

    if users.is_empty() {
        html.push_str(r#"<p class="empty">No users found.</p>"#);
    } else {
        html.push_str(r#"<section class="user-grid">"#);
        for user in users {
            html.push_str(&render_card(user));
        }
        html.push_str("</section>");
    }

    html.push_str("</main>");
    html
}

pub fn render_card(user: &User) -> String {
    let website = escape_html(&user.website);
    let lines = [
        format!(r#"<h2 class="name">{}</h2>"#, escape_html(&user.name)),
        format!(r#"<p class="username">{}</p>"#, escape_html(&user.handle())),
        format!(
            r#"<p class="email">📧 <a href="mailto:{0}">{0}</a></p>"#,
            escape_html(&user.email)
        ),
        format!(r#"<p class="phone">📞 {}</p>"#, escape_html(&user.phone)),
        format!(
            r#"<p class="website">🌐 <a href="https://{0}" rel="noopener">{0}</a></p>"#,
            website
        ),
        format!(
            r#"<p class="company">🏢 {} <span class="catch-phrase">{}</span></p>"#,
            escape_html(&user.company.name),
            escape_html(&user.company.catch_phrase)
        ),
        format!(r#"<p class="city">🏙️ {}</p>"#, escape_html(&user.address.city)),
        format!(
            r#"<p class="address">{}</p>"#,
            escape_html(&user.address.summary())
        ),
    ];

    format!(
        r#"<article class="{}" data-user-id="{}">{}</article>"#,
        CARD_CLASS,
        user.id,
        lines.concat()
    )
}

pub fn render_document(config: &DirectoryConfig, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="theme-color" content="{}">
<meta name="description" content="{}">
<title>{}</title>
</head>
<body>
<div id="app">{}</div>
</body>
</html>
"#,
        escape_html(&config.theme_color),
        escape_html(&config.description),
        escape_html(&config.title),
        body
    )
}
