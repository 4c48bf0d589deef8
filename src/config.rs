//! Runtime configuration: one struct built from the environment at startup,
//! passed down explicitly. No ambient globals.

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/books";
const DEFAULT_TEST_DATABASE_URL: &str = "postgres://localhost/books_test";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    /// Read config from env. `APP_ENV=test` selects `TEST_DATABASE_URL` so
    /// test runs never touch the production database.
    pub fn from_env() -> Self {
        let database_url = select_database_url(
            std::env::var("APP_ENV").ok().as_deref(),
            std::env::var("DATABASE_URL").ok(),
            std::env::var("TEST_DATABASE_URL").ok(),
        );
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        AppConfig {
            database_url,
            bind_addr,
        }
    }
}

/// Pick the connection string: test flag wins, then explicit URL, then default.
fn select_database_url(
    app_env: Option<&str>,
    database_url: Option<String>,
    test_database_url: Option<String>,
) -> String {
    if app_env == Some("test") {
        test_database_url.unwrap_or_else(|| DEFAULT_TEST_DATABASE_URL.to_string())
    } else {
        database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_url() {
        assert_eq!(DEFAULT_DATABASE_URL, select_database_url(None, None, None));
    }

    #[test]
    fn explicit_database_url_wins_outside_test() {
        assert_eq!(
            "postgres://db1/books",
            select_database_url(None, Some("postgres://db1/books".into()), None)
        );
    }

    #[test]
    fn test_env_selects_test_url() {
        assert_eq!(
            "postgres://db1/books_test",
            select_database_url(
                Some("test"),
                Some("postgres://db1/books".into()),
                Some("postgres://db1/books_test".into())
            )
        );
    }

    #[test]
    fn test_env_without_test_url_falls_back_to_test_default() {
        assert_eq!(
            DEFAULT_TEST_DATABASE_URL,
            select_database_url(Some("test"), Some("postgres://db1/books".into()), None)
        );
    }
}
