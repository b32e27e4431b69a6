//! Login form validation.
//!
//! Pure checks with the same rules and messages the login page shows
//! inline. Nothing here establishes a session; a passing validation is the
//! whole of the "authentication".

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please enter your roll number")]
    MissingRollNumber,

    #[error("Please enter a valid roll number (e.g., 23CS101)")]
    InvalidRollNumber,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter your password")]
    MissingPassword,

    #[error("Password must be at least 6 characters long")]
    ShortPassword,

    #[error("Please enter your club code")]
    MissingClubCode,
}

/// Roll numbers are exactly two digits, two uppercase letters, three
/// digits: "23CS101" passes, "23cs101" does not.
pub fn is_valid_roll_number(roll: &str) -> bool {
    let bytes = roll.as_bytes();
    bytes.len() == 7
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[2..4].iter().all(u8::is_ascii_uppercase)
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

/// Something before an @, something after it containing a dot, and no
/// whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

fn check_password(password: &str) -> Result<(), LoginError> {
    if password.is_empty() {
        return Err(LoginError::MissingPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(LoginError::ShortPassword);
    }
    Ok(())
}

/// Validate a student login attempt. First failed check wins, matching the
/// inline-error behavior of the form.
pub fn validate_student_login(roll_number: &str, password: &str) -> Result<(), LoginError> {
    let roll_number = roll_number.trim();
    if roll_number.is_empty() {
        return Err(LoginError::MissingRollNumber);
    }
    if !is_valid_roll_number(roll_number) {
        return Err(LoginError::InvalidRollNumber);
    }
    check_password(password)
}

/// Validate an admin login attempt.
pub fn validate_admin_login(
    email: &str,
    password: &str,
    club_code: &str,
) -> Result<(), LoginError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LoginError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(LoginError::InvalidEmail);
    }
    check_password(password)?;
    if club_code.trim().is_empty() {
        return Err(LoginError::MissingClubCode);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_number_requires_exact_shape() {
        assert!(is_valid_roll_number("23CS101"));
        assert!(!is_valid_roll_number("23cs101")); // lowercase letters
        assert!(!is_valid_roll_number("2CS1011")); // digits in wrong place
        assert!(!is_valid_roll_number("23CS10")); // too short
        assert!(!is_valid_roll_number("23CS1011")); // too long
        assert!(!is_valid_roll_number(""));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("admin@club.edu"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user name@domain.com"));
        assert!(!is_valid_email("user@do@main.com"));
    }

    #[test]
    fn student_login_reports_first_failure() {
        assert_eq!(
            validate_student_login("", "secret1"),
            Err(LoginError::MissingRollNumber)
        );
        assert_eq!(
            validate_student_login("23cs101", "secret1"),
            Err(LoginError::InvalidRollNumber)
        );
        assert_eq!(
            validate_student_login("23CS101", ""),
            Err(LoginError::MissingPassword)
        );
        assert_eq!(
            validate_student_login("23CS101", "short"),
            Err(LoginError::ShortPassword)
        );
        assert_eq!(validate_student_login("23CS101", "secret1"), Ok(()));
        // Surrounding whitespace on the roll number is not an error.
        assert_eq!(validate_student_login(" 23CS101 ", "secret1"), Ok(()));
    }

    #[test]
    fn admin_login_checks_all_fields() {
        assert_eq!(
            validate_admin_login("", "secret1", "CODE"),
            Err(LoginError::MissingEmail)
        );
        assert_eq!(
            validate_admin_login("not-an-email", "secret1", "CODE"),
            Err(LoginError::InvalidEmail)
        );
        assert_eq!(
            validate_admin_login("admin@club.edu", "12345", "CODE"),
            Err(LoginError::ShortPassword)
        );
        assert_eq!(
            validate_admin_login("admin@club.edu", "secret1", "  "),
            Err(LoginError::MissingClubCode)
        );
        assert_eq!(validate_admin_login("admin@club.edu", "secret1", "CODE"), Ok(()));
    }

    #[test]
    fn password_boundary_is_six_characters() {
        assert_eq!(
            validate_student_login("23CS101", "12345"),
            Err(LoginError::ShortPassword)
        );
        assert_eq!(validate_student_login("23CS101", "123456"), Ok(()));
    }
}
