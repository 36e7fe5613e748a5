use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

impl Debug for LoginCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LoginCredentials {{email={}, password=MASKED}}",
            self.email
        )
    }
}

impl LoginCredentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }

    /// Credentials are not checked against anything: any non-empty pair is accepted.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        email = {"jon@doe.com", "", "jon@doe.com", "", " "},
        password = {"password", "password", "", "", " "},
        expected_result = {true, false, false, false, true}
    )]
    fn should_tell_whether_credentials_are_complete(
        email: &str,
        password: &str,
        expected_result: bool,
    ) {
        let credentials = LoginCredentials::new(email.to_owned(), password.to_owned());

        assert_eq!(expected_result, credentials.is_complete());
    }

    #[test]
    fn should_mask_password_when_debugging() {
        let credentials =
            LoginCredentials::new("jon@doe.com".to_owned(), "secret".to_owned());

        let text = format!("{credentials:?}");

        assert!(text.contains("jon@doe.com"));
        assert!(!text.contains("secret"));
    }
}
