#[cfg(test)]
mod tests {
    use shiftrep::api::AttendanceConfig;
    use shiftrep::libs::config::{Config, ReportConfig, API_URL_ENV};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests below rewrite process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Test context pointing the user's home/appdata directory at a temporary
    /// directory and clearing the API URL override.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(API_URL_ENV);
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                api_url: "https://attendance.example.com".to_string(),
            }
        }

        fn teardown(self) {
            std::env::remove_var(API_URL_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.standard_shift_minutes(), 480);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(AttendanceConfig {
                api_url: ctx.api_url.clone(),
            }),
            report: Some(ReportConfig {
                standard_shift_minutes: 360,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.standard_shift_minutes(), 360);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_url_precedence(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(AttendanceConfig {
                api_url: ctx.api_url.clone(),
            }),
            report: None,
        };

        assert_eq!(config.resolve_api_url(None), Some(ctx.api_url.clone()));
        assert_eq!(config.resolve_api_url(Some("")), Some(ctx.api_url.clone()));
        assert_eq!(config.resolve_api_url(Some("  ")), Some(ctx.api_url.clone()));

        std::env::set_var(API_URL_ENV, "");
        assert_eq!(config.resolve_api_url(None), Some(ctx.api_url.clone()));
        assert_eq!(config.resolve_api_url(Some("")), Some(ctx.api_url.clone()));

        std::env::set_var(API_URL_ENV, "http://from-env:8000");
        assert_eq!(config.resolve_api_url(None), Some("http://from-env:8000".to_string()));
        assert_eq!(
            config.resolve_api_url(Some("http://from-flag:8000")),
            Some("http://from-flag:8000".to_string())
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_no_api_url_anywhere(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::default().resolve_api_url(None), None);

        let blank = Config {
            api: Some(AttendanceConfig { api_url: String::new() }),
            report: None,
        };
        std::env::set_var(API_URL_ENV, " ");
        assert_eq!(blank.resolve_api_url(Some("")), None);
    }
}
