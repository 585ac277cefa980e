//! Server-rendered HTML pages
//!
//! Plain `format!` templates: the sign-in page (with the sign-up modal), the
//! post sign-in landing page and the loading placeholder.

use crate::auth::dto::{SignUpForm, User};

pub const AVATAR_BASE_URL: &str = "https://api.dicebear.com/6.x/avataaars/svg?seed=";

/// Generic message for every failed sign-in
pub const SIGN_IN_FAILED: &str = "Unable to login. Please check your details.";

/// Notifications a page can show. Only these are accepted from the query
/// string so no free text is ever reflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    SignedIn,
    SignedOut,
    UserCreated,
    Error,
}

impl Toast {
    pub fn message(self) -> &'static str {
        match self {
            Toast::SignedIn => "Logged in successfully!",
            Toast::SignedOut => "Logged out successfully!",
            Toast::UserCreated => "User Created!",
            Toast::Error => "Error!",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "signed-in" => Some(Toast::SignedIn),
            "signed-out" => Some(Toast::SignedOut),
            "user-created" => Some(Toast::UserCreated),
            "error" => Some(Toast::Error),
            _ => None,
        }
    }

    pub fn query_value(self) -> &'static str {
        match self {
            Toast::SignedIn => "signed-in",
            Toast::SignedOut => "signed-out",
            Toast::UserCreated => "user-created",
            Toast::Error => "error",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Toast::Error => "toast toast-error",
            _ => "toast toast-success",
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Avatar seeded with the user's id, whatever shape the backend gave it
pub fn avatar_url(user: &User) -> String {
    format!("{}{}", AVATAR_BASE_URL, urlencoding::encode(&user.id().unwrap_or_default()))
}

const STYLE: &str = r#"
    * { box-sizing: border-box; }
    html, body { height: 100%; margin: 0; }
    body { background: #111827; color: #fff; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
    .container { min-height: 100%; display: flex; flex-direction: column; justify-content: center; padding: 48px 24px; }
    .panel { margin: 0 auto; width: 100%; max-width: 24rem; }
    h2 { text-align: center; font-size: 1.5rem; margin-top: 40px; }
    label { display: block; font-size: .875rem; margin-bottom: 8px; }
    input { display: block; width: 100%; padding: 6px 8px; border-radius: 6px; border: 1px solid rgba(255,255,255,.1); background: rgba(255,255,255,.05); color: inherit; margin-bottom: 24px; }
    .button { display: flex; justify-content: center; width: 100%; padding: 6px 12px; border-radius: 6px; border: 0; background: #6366f1; color: #fff; font-weight: 600; font-size: .875rem; text-decoration: none; cursor: pointer; }
    .button-outline { background: transparent; border: 1px solid #6366f1; margin-top: 24px; }
    .muted { text-align: center; color: #9ca3af; font-size: .875rem; margin-top: 40px; }
    .muted a { color: #818cf8; font-weight: 600; text-decoration: none; }
    .avatar { display: block; margin: 0 auto; width: 64px; height: 64px; border-radius: 9999px; background: #1f2937; }
    .toast { position: fixed; top: 16px; left: 50%; transform: translateX(-50%); padding: 8px 16px; border-radius: 8px; background: #fff; color: #111827; font-size: .875rem; box-shadow: 0 4px 12px rgba(0,0,0,.3); }
    .toast-error { border-left: 4px solid #ef4444; }
    .toast-success { border-left: 4px solid #22c55e; }
    .overlay { position: fixed; inset: 0; background: rgba(17,24,39,.75); display: flex; align-items: center; justify-content: center; padding: 16px; }
    .modal { width: 100%; max-width: 36rem; background: #fff; color: #111827; border-radius: 8px; padding: 24px; }
    .modal header { display: flex; justify-content: space-between; align-items: center; padding-bottom: 16px; border-bottom: 1px solid #e5e7eb; }
    .modal header a { color: #111827; text-decoration: none; font-size: 1.25rem; }
    .modal .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0 24px; margin-top: 16px; }
    .modal input { color: #111827; border-color: #d1d5db; background: #fff; }
    .modal .button { background: #111827; }
    .form-error { color: #ef4444; font-size: .875rem; margin: 12px 0 0; }
"#;

fn layout(title: &str, toast: Option<Toast>, detail: Option<&str>, body: &str) -> String {
    let toast_html = match toast {
        Some(toast) => {
            let detail = detail.map(|d| format!(" {}", escape_html(d))).unwrap_or_default();
            format!(r#"<div class="{}" role="status">{}{}</div>"#, toast.class(), toast.message(), detail)
        },
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{toast_html}
{body}
</body>
</html>"#,
        title = escape_html(title),
    )
}

/// State of the sign-up modal on the sign-in page
#[derive(Debug, Default)]
pub struct SignUpModal<'a> {
    pub open: bool,
    pub error: Option<&'a str>,
    /// Values to put back into the form after a rejected submission
    pub values: Option<&'a SignUpForm>,
}

#[derive(Debug, Default)]
pub struct SignInView<'a> {
    pub toast: Option<Toast>,
    pub error: Option<&'a str>,
    pub username: Option<&'a str>,
    pub signup: SignUpModal<'a>,
}

fn text_input(id: &str, label: &str, kind: &str, value: &str, placeholder: &str, required: bool) -> String {
    format!(
        r#"<div><label for="{id}">{label}</label><input id="{id}" name="{id}" type="{kind}" value="{value}" placeholder="{placeholder}"{required}></div>"#,
        value = escape_html(value),
        required = if required { " required" } else { "" },
    )
}

fn sign_up_modal(modal: &SignUpModal<'_>) -> String {
    if !modal.open {
        return String::new();
    }

    let empty = SignUpForm::default();
    let values = modal.values.unwrap_or(&empty);
    let error = modal
        .error
        .map(|e| format!(r#"<p class="form-error">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<div class="overlay">
<div class="modal" role="dialog" aria-labelledby="create-user-title">
<form method="post" action="/signup">
<header><h3 id="create-user-title">Create User</h3><a href="/" aria-label="Close">&times;</a></header>
<div class="grid">
{first_name}
{last_name}
{username}
{age}
{address}
{password}
</div>
{error}
<button type="submit" class="button">Create</button>
</form>
</div>
</div>"#,
        first_name = text_input("firstName", "First name", "text", &values.first_name, "John", true),
        last_name = text_input("lastName", "Last name", "text", &values.last_name, "Doe", true),
        username = text_input("username", "Username", "text", &values.username, "johndoe97", true),
        age = text_input("age", "Age", "number", &values.age, "10", true),
        address = text_input("address", "Address", "text", &values.address, "Acme street 7", true),
        password = text_input("password", "Password", "password", "", "Acme123", false),
    )
}

pub fn sign_in_page(view: &SignInView<'_>) -> String {
    let body = format!(
        r#"{modal}
<div class="container">
<div class="panel">
<h2>Sign in to your account</h2>
<form method="post" action="/api/auth/callback/credentials">
<div><label for="username">Username</label><input id="username" name="username" type="text" autocomplete="username" value="{username}" required></div>
<div><label for="password">Password</label><input id="password" name="password" type="password" autocomplete="current-password" required></div>
<button type="submit" class="button">Sign in</button>
</form>
<p class="muted">Not a member? <a href="/?signup=open">Sign Up</a></p>
</div>
</div>"#,
        modal = sign_up_modal(&view.signup),
        username = escape_html(view.username.unwrap_or("")),
    );

    layout("Sign in", view.toast, view.error, &body)
}

pub fn landing_page(user: &User, chat_url: &str, toast: Option<Toast>) -> String {
    let body = format!(
        r#"<div class="container">
<div class="panel">
<img class="avatar" src="{avatar}" alt="avatar">
<h2>Authentication successful</h2>
<p class="muted">Signed in as {name}</p>
<a class="button" href="{chat_url}">Chat</a>
<form method="post" action="/api/auth/signout">
<button type="submit" class="button button-outline">Sign out</button>
</form>
</div>
</div>"#,
        avatar = escape_html(&avatar_url(user)),
        name = escape_html(&user.display_name()),
        chat_url = escape_html(chat_url),
    );

    layout("Authenticated", toast, None, &body)
}

pub fn loading_page() -> String {
    layout("Loading", None, None, "<span>Loading...</span>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        User::from(json!({"id": 5, "firstName": "<b>Eve</b>", "username": "eve"}))
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_landing_page_escapes_user_fields() {
        let html = landing_page(&user(), "https://chat.example.com", Some(Toast::SignedIn));

        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(!html.contains("<b>Eve</b>"));
        assert!(html.contains("https://api.dicebear.com/6.x/avataaars/svg?seed=5"));
        assert!(html.contains(r#"href="https://chat.example.com""#));
        assert!(html.contains("Logged in successfully!"));
    }

    #[test]
    fn test_avatar_seed_is_percent_encoded() {
        let user = User::from(json!({"id": "team/a b&c", "username": "eve"}));
        assert_eq!(avatar_url(&user), "https://api.dicebear.com/6.x/avataaars/svg?seed=team%2Fa%20b%26c");

        let user = User::from(json!({"id": "64a1f0c2e4b0"}));
        assert_eq!(avatar_url(&user), "https://api.dicebear.com/6.x/avataaars/svg?seed=64a1f0c2e4b0");
    }

    #[test]
    fn test_sign_in_page_modal_closed_by_default() {
        let html = sign_in_page(&SignInView::default());

        assert!(html.contains("Sign in to your account"));
        assert!(!html.contains("Create User"));
        assert!(!html.contains("role=\"status\""));
    }

    #[test]
    fn test_sign_in_page_modal_error() {
        let form = SignUpForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            username: "john".into(),
            age: "12".into(),
            address: "Acme street 7".into(),
            password: "do-not-echo".into(),
        };
        let html = sign_in_page(&SignInView {
            toast: Some(Toast::Error),
            signup: SignUpModal {
                open: true,
                error: Some("Username <taken>"),
                values: Some(&form),
            },
            ..Default::default()
        });

        assert!(html.contains("Create User"));
        assert!(html.contains("Username &lt;taken&gt;"));
        assert!(html.contains(r#"value="john""#));
        assert!(!html.contains("do-not-echo"));
    }

    #[test]
    fn test_toast_query_values() {
        for toast in [Toast::SignedIn, Toast::SignedOut, Toast::UserCreated, Toast::Error] {
            assert_eq!(Toast::from_query_value(toast.query_value()), Some(toast));
        }
        assert_eq!(Toast::from_query_value("<script>"), None);
    }
}
