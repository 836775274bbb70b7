#[cfg(test)]
mod tests {
    use habita::libs::config::{Config, DEFAULT_CATEGORY_TITLE};
    use habita::libs::state::AppState;
    use tempfile::TempDir;
    use std::sync::{Mutex, MutexGuard};
    use test_context::{test_context, TestContext};

    // Tests rewire HOME/LOCALAPPDATA, which the whole process shares;
    // the lock runs them one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _temp_dir: TempDir,
        _env_lock: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let env_lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _env_lock: env_lock,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_defaults_when_missing(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.default_category.is_none());
        assert_eq!(config.default_category(), DEFAULT_CATEGORY_TITLE);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_round_trip(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.default_category = Some("Habits".to_string());
        config.save().unwrap();

        let reloaded = Config::read().unwrap();
        assert_eq!(reloaded.default_category(), "Habits");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_state_round_trip(_ctx: &mut ConfigTestContext) {
        let state = AppState::read().unwrap();
        assert!(!state.has_seen_onboarding);
        assert_eq!(state.total_completions, 0);

        let mut state = state;
        state.has_seen_onboarding = true;
        state.total_completions = 2;
        state.save().unwrap();

        let reloaded = AppState::read().unwrap();
        assert!(reloaded.has_seen_onboarding);
        assert_eq!(reloaded.total_completions, 2);
    }
}
