#[cfg(test)]
mod tests {
    use std::fs;
    use takt::libs::config::{ConfigError, WakaConfig, CONFIG_FILE_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context providing a temporary home directory for each config
    /// test, with helpers for writing a `.wakatime.cfg` into it.
    struct ConfigTestContext {
        home: TempDir,
        api_key: String,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                home: tempfile::tempdir().unwrap(),
                api_key: "waka_test_key_1234".to_string(),
                api_url: "https://hackatime.hackclub.com/api/hackatime/v1".to_string(),
            }
        }
    }

    impl ConfigTestContext {
        fn write_config(&self, contents: &str) {
            fs::write(self.home.path().join(CONFIG_FILE_NAME), contents).unwrap();
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_file(ctx: &mut ConfigTestContext) {
        let err = WakaConfig::read(ctx.home.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_valid_config(ctx: &mut ConfigTestContext) {
        ctx.write_config(&format!(
            "[settings]\napi_key = {}\napi_url = {}\n",
            ctx.api_key, ctx.api_url
        ));

        let config = WakaConfig::read(ctx.home.path()).unwrap();
        assert_eq!(config.api_key, ctx.api_key);
        assert_eq!(config.api_url, ctx.api_url);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_values_are_trimmed(ctx: &mut ConfigTestContext) {
        ctx.write_config("[settings]\napi_key =   spaced-key  \napi_url=https://x\n");

        let config = WakaConfig::read(ctx.home.path()).unwrap();
        assert_eq!(config.api_key, "spaced-key");
        assert_eq!(config.api_url, "https://x");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_comments_and_blank_lines_ignored(ctx: &mut ConfigTestContext) {
        ctx.write_config(
            "# generated by the setup script\n\n[settings]\n; key follows\napi_key = abc\napi_url = https://x\n",
        );

        let config = WakaConfig::read(ctx.home.path()).unwrap();
        assert_eq!(config.api_key, "abc");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_other_sections_do_not_leak(ctx: &mut ConfigTestContext) {
        ctx.write_config(
            "[git]\napi_key = wrong\n[settings]\napi_key = right\napi_url = https://x\n",
        );

        let config = WakaConfig::read(ctx.home.path()).unwrap();
        assert_eq!(config.api_key, "right");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_settings_section(ctx: &mut ConfigTestContext) {
        ctx.write_config("[internal]\ndebug = true\n");

        let err = WakaConfig::read(ctx.home.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSettings));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_line(ctx: &mut ConfigTestContext) {
        ctx.write_config("settings]\napi_key = abc\n");

        let err = WakaConfig::read(ctx.home.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { line: 1, .. }));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unclosed_section_header(ctx: &mut ConfigTestContext) {
        ctx.write_config("[settings\napi_key = abc\n");

        let err = WakaConfig::read(ctx.home.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_keys_read_as_blank(ctx: &mut ConfigTestContext) {
        ctx.write_config("[settings]\napi_key = abc\n");

        let config = WakaConfig::read(ctx.home.path()).unwrap();
        assert_eq!(config.api_key, "abc");
        assert!(config.api_url.is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_and_malformed_messages_are_distinct(ctx: &mut ConfigTestContext) {
        let missing = WakaConfig::read(ctx.home.path()).unwrap_err().to_string();

        ctx.write_config("not an ini file at all\n");
        let malformed = WakaConfig::read(ctx.home.path()).unwrap_err().to_string();

        assert_ne!(missing, malformed);
        assert!(missing.contains("not found"));
        assert!(!malformed.contains("not found"));
    }
}
