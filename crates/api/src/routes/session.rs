//! Login and logout routes

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::{
    auth::{clear_session_cookie, session_cookie, AuthError, LoginOutcome, LOGIN_PATH},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: Option<String>,
}

const LOGIN_PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Lead Portal - Sign in</title>
</head>
<body>
<h1>Lead Portal</h1>
<p>Administrative access</p>
"#;

const LOGIN_PAGE_FORM: &str = r#"<form method="post" action="/login">
<label for="password">Master password</label>
<input id="password" name="password" type="password" required>
<button type="submit">Sign in</button>
</form>
</body>
</html>
"#;

/// `error` is always one of our own messages, never user input.
fn render_login_page(error: Option<&str>) -> String {
    let mut page = String::from(LOGIN_PAGE_HEAD);
    if let Some(error) = error {
        page.push_str(&format!("<p class=\"error\" role=\"alert\">{error}</p>\n"));
    }
    page.push_str(LOGIN_PAGE_FORM);
    page
}

/// GET /login
pub async fn login_page() -> Html<String> {
    Html(render_login_page(None))
}

fn rejected_login(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Html(render_login_page(Some(message))),
    )
        .into_response()
}

/// POST /login
///
/// On success sets the session cookie and redirects to the dashboard; on
/// failure re-renders the form with the error and leaves cookies untouched.
/// A body that is not a well-formed login form is treated as a wrong password.
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Admin login rejected: malformed form body");
            return rejected_login(&AuthError::PasswordMismatch.to_string());
        }
    };

    match state.credentials.verify(form.password.as_deref()) {
        LoginOutcome::Redirect(target) => match session_cookie() {
            Ok(cookie) => {
                tracing::info!(redirect = target, "Admin login succeeded");
                ([(SET_COOKIE, cookie)], Redirect::to(target)).into_response()
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to build session cookie");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        LoginOutcome::Error(message) => {
            tracing::warn!(
                password_submitted = form.password.as_deref().is_some_and(|p| !p.is_empty()),
                "Admin login rejected"
            );
            rejected_login(&message)
        }
    }
}

/// POST /logout
///
/// Always clears the session cookie, whether or not one was sent.
pub async fn logout() -> Response {
    match clear_session_cookie() {
        Ok(cookie) => {
            tracing::info!("Admin logged out");
            ([(SET_COOKIE, cookie)], Redirect::to(LOGIN_PATH)).into_response()
        }
        Err(e) => {
            tracing::error!(error = ?e, "Failed to build session clearing cookie");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_has_password_field() {
        let page = render_login_page(None);
        assert!(page.contains(r#"name="password""#));
        assert!(page.contains(r#"action="/login""#));
        assert!(!page.contains("role=\"alert\""));
    }

    #[test]
    fn test_login_page_shows_error() {
        let page = render_login_page(Some("Incorrect password"));
        assert!(page.contains("Incorrect password"));
    }
}
