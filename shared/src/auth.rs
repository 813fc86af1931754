use crate::page::Page;

/// localStorage key whose presence marks the user as signed in.
pub const AUTH_FLAG_KEY: &str = "careersafe_user";

/// Where a signed-in user is sent when they land on the login page.
pub const LANDING_PAGE: Page = Page::Index;

/// Returns the redirect target when the auth gate should fire.
///
/// The login marker is a substring match on the path, so query-less
/// variants like `/app/login.html` and `login.html` both count.
pub fn redirect_target(path: &str, flag_present: bool) -> Option<&'static str> {
    if flag_present && path.contains(Page::Login.file_name()) {
        Some(LANDING_PAGE.file_name())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("/login.html", true, Some("index.html") ; "login with flag")]
    #[test_case("/app/login.html", true, Some("index.html") ; "nested login with flag")]
    #[test_case("/login.html", false, None ; "login without flag")]
    #[test_case("/dashboard.html", true, None ; "other page with flag")]
    #[test_case("/dashboard.html", false, None ; "other page without flag")]
    #[test_case("/", true, None ; "root with flag")]
    fn test_redirect_target(path: &str, flag: bool, expected: Option<&str>) {
        assert_eq!(redirect_target(path, flag), expected);
    }
}
