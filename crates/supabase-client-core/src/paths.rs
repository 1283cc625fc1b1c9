//! Fixed backend paths. Every path is absolute (starts with `/`).

/// PostgREST prefix for tables and views.
pub const REST_API_PATH: &str = "/rest/v1";
/// GoTrue prefix.
pub const AUTH_API_PATH: &str = "/auth/v1";

pub const TOKEN_PATH: &str = "/token";
pub const SIGNUP_PATH: &str = "/signup";
pub const MAGIC_LINK_PATH: &str = "/magiclink";
pub const RECOVER_PATH: &str = "/recover";
pub const VERIFY_PATH: &str = "/verify";
pub const USER_PATH: &str = "/user";
pub const LOGOUT_PATH: &str = "/logout";
pub const INVITE_PATH: &str = "/invite";
pub const RESET_PATH: &str = "/reset";

/// Which API namespace a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// `/rest/v1`, filters are equality-encoded.
    Rest,
    /// `/auth/v1`, query pairs are sent verbatim.
    Auth,
}

impl Surface {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Rest => REST_API_PATH,
            Self::Auth => AUTH_API_PATH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PATHS: &[&str] = &[
        REST_API_PATH,
        AUTH_API_PATH,
        TOKEN_PATH,
        SIGNUP_PATH,
        MAGIC_LINK_PATH,
        RECOVER_PATH,
        VERIFY_PATH,
        USER_PATH,
        LOGOUT_PATH,
        INVITE_PATH,
        RESET_PATH,
    ];

    #[test]
    fn every_path_is_absolute() {
        for path in ALL_PATHS {
            assert!(path.starts_with('/'), "{} is not absolute", path);
            assert!(!path.ends_with('/'), "{} has a trailing slash", path);
        }
    }

    #[test]
    fn surface_prefixes() {
        assert_eq!(Surface::Rest.prefix(), "/rest/v1");
        assert_eq!(Surface::Auth.prefix(), "/auth/v1");
    }
}
