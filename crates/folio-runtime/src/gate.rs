//! The login gate.
//!
//! This is a format validator, not an authenticator: any email/password pair
//! whose shape passes the checks below is let through, and the persisted flag
//! carries no token semantics. It stays a demo-only placeholder on purpose;
//! do not point real credentials at it.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::Result;

/// Sentinel written to the session flag file on login.
pub const SESSION_SENTINEL: &str = "portfolio_builder_token";

const SESSION_FILE: &str = "session";

// The original character class: anything outside it does not count.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Password rules, checked independently. A failed attempt reports every
/// unmet rule at once, not just the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCriterion {
    MinLength8,
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar,
}

impl PasswordCriterion {
    pub const ALL: [PasswordCriterion; 5] = [
        PasswordCriterion::MinLength8,
        PasswordCriterion::Uppercase,
        PasswordCriterion::Lowercase,
        PasswordCriterion::Digit,
        PasswordCriterion::SpecialChar,
    ];

    /// Phrasing used in failure messages and the live checklist.
    pub fn requirement(&self) -> &'static str {
        match self {
            PasswordCriterion::MinLength8 => "at least 8 characters",
            PasswordCriterion::Uppercase => "one uppercase letter",
            PasswordCriterion::Lowercase => "one lowercase letter",
            PasswordCriterion::Digit => "one number",
            PasswordCriterion::SpecialChar => "one special character",
        }
    }

    pub fn met(&self, password: &str) -> bool {
        match self {
            PasswordCriterion::MinLength8 => password.chars().count() >= 8,
            PasswordCriterion::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordCriterion::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordCriterion::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordCriterion::SpecialChar => password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }
}

/// The exact subset of criteria `password` fails to meet; empty iff all five hold.
pub fn validate_password(password: &str) -> Vec<PasswordCriterion> {
    PasswordCriterion::ALL
        .into_iter()
        .filter(|criterion| !criterion.met(password))
        .collect()
}

/// Shape check only: an email must contain both an `@` and a `.`.
pub fn email_format_ok(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && email.contains('.')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    InvalidEmailFormat,
    WeakPassword(Vec<PasswordCriterion>),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidEmailFormat => write!(f, "Please enter a valid email address"),
            LoginError::WeakPassword(missing) => {
                let requirements: Vec<&str> =
                    missing.iter().map(PasswordCriterion::requirement).collect();
                write!(f, "Password must contain: {}", requirements.join(", "))
            }
        }
    }
}

impl std::error::Error for LoginError {}

/// Validate credential shape without touching the flag file.
///
/// This is the gate's whole contract: there is no credential store to check
/// against, so shape-valid input always succeeds.
pub fn check_credentials(email: &str, password: &str) -> std::result::Result<(), LoginError> {
    if !email_format_ok(email) {
        return Err(LoginError::InvalidEmailFormat);
    }

    let missing = validate_password(password);
    if !missing.is_empty() {
        return Err(LoginError::WeakPassword(missing));
    }

    Ok(())
}

/// Two-state gate {LoggedOut, LoggedIn}, persisted as a single flag file in
/// the data directory. Initial state is the flag's presence at startup.
#[derive(Debug, Clone)]
pub struct SessionGate {
    flag_path: PathBuf,
}

impl SessionGate {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            flag_path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.flag_path.exists()
    }

    /// Check the credentials' shape and, on success, write the session flag.
    pub fn attempt_login(&self, email: &str, password: &str) -> Result<()> {
        check_credentials(email, password)?;

        if let Some(parent) = self.flag_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.flag_path, SESSION_SENTINEL)?;
        Ok(())
    }

    /// Clear the session flag. Logging out while logged out is fine.
    pub fn logout(&self) -> Result<()> {
        match fs::remove_file(&self.flag_path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn test_validate_password_reports_exact_missing_subset() {
        assert_eq!(validate_password("Aa1!aaaa"), vec![]);
        assert_eq!(
            validate_password("weak"),
            vec![
                PasswordCriterion::MinLength8,
                PasswordCriterion::Uppercase,
                PasswordCriterion::Digit,
                PasswordCriterion::SpecialChar,
            ]
        );
        assert_eq!(
            validate_password(""),
            PasswordCriterion::ALL.to_vec()
        );
        assert_eq!(
            validate_password("AAAAAAAA"),
            vec![
                PasswordCriterion::Lowercase,
                PasswordCriterion::Digit,
                PasswordCriterion::SpecialChar,
            ]
        );
    }

    #[test]
    fn test_special_char_class_matches_the_fixed_set() {
        assert!(PasswordCriterion::SpecialChar.met("a\"b"));
        assert!(PasswordCriterion::SpecialChar.met("a|b"));
        // '-' and '_' are outside the class
        assert!(!PasswordCriterion::SpecialChar.met("a-b_c"));
    }

    #[test]
    fn test_email_shape_check() {
        assert!(email_format_ok("a@b.c"));
        assert!(email_format_ok("weird.@"));
        assert!(!email_format_ok("abc"));
        assert!(!email_format_ok("a@b"));
        assert!(!email_format_ok("a.b"));
        assert!(!email_format_ok(""));
    }

    #[test]
    fn test_check_credentials_accepts_and_rejects_by_shape() {
        assert_eq!(check_credentials("a@b.c", "Aa1!aaaa"), Ok(()));
        assert_eq!(
            check_credentials("abc", "Aa1!aaaa"),
            Err(LoginError::InvalidEmailFormat)
        );

        match check_credentials("a@b.c", "weak") {
            Err(LoginError::WeakPassword(missing)) => {
                assert!(missing.contains(&PasswordCriterion::MinLength8));
                assert!(missing.contains(&PasswordCriterion::Uppercase));
                assert!(missing.contains(&PasswordCriterion::Digit));
                assert!(missing.contains(&PasswordCriterion::SpecialChar));
                assert!(!missing.contains(&PasswordCriterion::Lowercase));
            }
            other => panic!("expected WeakPassword, got {other:?}"),
        }
    }

    #[test]
    fn test_weak_password_message_joins_all_requirements() {
        let err = check_credentials("a@b.c", "aaaaaaaa").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must contain: one uppercase letter, one number, one special character"
        );
    }

    #[test]
    fn test_flag_lifecycle() {
        let dir = TempDir::new().unwrap();
        let gate = SessionGate::new(dir.path());

        assert!(!gate.is_logged_in());

        gate.attempt_login("a@b.c", "Aa1!aaaa").unwrap();
        assert!(gate.is_logged_in());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("session")).unwrap(),
            SESSION_SENTINEL
        );

        gate.logout().unwrap();
        assert!(!gate.is_logged_in());

        // logout is idempotent
        gate.logout().unwrap();
    }

    #[test]
    fn test_failed_login_leaves_state_logged_out() {
        let dir = TempDir::new().unwrap();
        let gate = SessionGate::new(dir.path());

        let err = gate.attempt_login("abc", "Aa1!aaaa").unwrap_err();
        assert!(matches!(err, Error::Gate(LoginError::InvalidEmailFormat)));
        assert!(!gate.is_logged_in());
    }
}
