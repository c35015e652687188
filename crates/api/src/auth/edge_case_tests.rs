//! Edge Case Tests for Authentication
//!
//! Tests boundary conditions in:
//! - Password comparison (empty, missing, whitespace, case)
//! - Unconfigured admin password (login must fail closed)
//! - Session lifecycle across login and logout cookies

#[cfg(test)]
mod credential_tests {
    use super::super::credentials::*;

    const SECRET: &str = "abc123";

    fn check() -> CredentialCheck {
        CredentialCheck::new(Some(SECRET.to_string()))
    }

    fn is_error(outcome: &LoginOutcome) -> bool {
        matches!(outcome, LoginOutcome::Error(_))
    }

    // =========================================================================
    // Empty and missing submissions never match
    // =========================================================================
    #[test]
    fn test_empty_password_rejected() {
        assert!(is_error(&check().verify(Some(""))));
    }

    #[test]
    fn test_missing_password_rejected() {
        assert!(is_error(&check().verify(None)));
    }

    // =========================================================================
    // Comparison is exact: no trimming, no case folding
    // =========================================================================
    #[test]
    fn test_whitespace_is_significant() {
        assert!(is_error(&check().verify(Some(" abc123"))));
        assert!(is_error(&check().verify(Some("abc123 "))));
        assert!(is_error(&check().verify(Some("abc123\n"))));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(is_error(&check().verify(Some("ABC123"))));
        assert!(is_error(&check().verify(Some("Abc123"))));
    }

    #[test]
    fn test_prefix_and_extension_rejected() {
        assert!(is_error(&check().verify(Some("abc"))));
        assert!(is_error(&check().verify(Some("abc1234"))));
    }

    #[test]
    fn test_non_ascii_password() {
        let check = CredentialCheck::new(Some("contraseña-maestra".to_string()));
        assert_eq!(
            check.verify(Some("contraseña-maestra")),
            LoginOutcome::Redirect("/admin")
        );
        assert!(is_error(&check.verify(Some("contrasena-maestra"))));
    }

    // =========================================================================
    // Missing configuration fails closed
    // =========================================================================
    #[test]
    fn test_unconfigured_rejects_everything() {
        let check = CredentialCheck::new(None);
        assert!(!check.is_configured());

        for candidate in [None, Some(""), Some("abc123"), Some("undefined"), Some("null")] {
            assert!(
                is_error(&check.verify(candidate)),
                "{candidate:?} must not log in without a configured password"
            );
        }
    }

    #[test]
    fn test_empty_configured_password_is_unconfigured() {
        let check = CredentialCheck::new(Some(String::new()));
        assert!(!check.is_configured());
        assert!(is_error(&check.verify(Some(""))));
    }

    #[test]
    fn test_error_message_is_displayable() {
        match check().verify(Some("wrong")) {
            LoginOutcome::Error(message) => assert_eq!(message, "Incorrect password"),
            other => panic!("expected error, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::super::cookies::*;
    use super::super::credentials::*;
    use super::super::middleware::*;

    /// Browser-side view of the marker: whatever the last `Set-Cookie` left behind
    fn apply_set_cookie(jar: &mut Option<String>, set_cookie: &str) {
        let value = cookie_value(set_cookie, SESSION_COOKIE_NAME).unwrap_or_default();
        if set_cookie.contains("Max-Age=0") {
            *jar = None;
        } else {
            *jar = Some(value.to_string());
        }
    }

    // =========================================================================
    // Unauthenticated -> Authenticated -> Unauthenticated
    // =========================================================================
    #[test]
    fn test_login_then_logout_cycle() {
        let check = CredentialCheck::new(Some("abc123".to_string()));
        let mut jar: Option<String> = None;

        assert_eq!(
            gate_decision("/admin", jar.as_deref()),
            GateDecision::Redirect("/login")
        );

        assert_eq!(check.verify(Some("abc123")), LoginOutcome::Redirect("/admin"));
        apply_set_cookie(&mut jar, session_cookie().unwrap().to_str().unwrap());
        assert_eq!(gate_decision("/admin", jar.as_deref()), GateDecision::PassThrough);

        apply_set_cookie(&mut jar, clear_session_cookie().unwrap().to_str().unwrap());
        assert_eq!(jar, None);
        assert_eq!(
            gate_decision("/admin", jar.as_deref()),
            GateDecision::Redirect("/login")
        );

        // The machine has no terminal state: logging in again works
        assert_eq!(check.verify(Some("abc123")), LoginOutcome::Redirect("/admin"));
        apply_set_cookie(&mut jar, session_cookie().unwrap().to_str().unwrap());
        assert_eq!(gate_decision("/admin", jar.as_deref()), GateDecision::PassThrough);
    }

    #[test]
    fn test_double_logout_same_end_state() {
        let mut once: Option<String> = Some("true".to_string());
        apply_set_cookie(&mut once, clear_session_cookie().unwrap().to_str().unwrap());

        let mut twice: Option<String> = Some("true".to_string());
        apply_set_cookie(&mut twice, clear_session_cookie().unwrap().to_str().unwrap());
        apply_set_cookie(&mut twice, clear_session_cookie().unwrap().to_str().unwrap());

        assert_eq!(once, twice);
        assert_eq!(twice, None);
    }

    #[test]
    fn test_failed_login_keeps_existing_state() {
        let check = CredentialCheck::new(Some("abc123".to_string()));
        let jar: Option<String> = None;

        assert!(matches!(check.verify(Some("wrong")), LoginOutcome::Error(_)));
        assert_eq!(
            gate_decision("/admin/calendar", jar.as_deref()),
            GateDecision::Redirect("/login")
        );
    }
}
