//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::ApiKey;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<PathBuf, Error> {
        if let Some(home) = non_empty_var("DRIVETHRU_HOME") {
            return Ok(PathBuf::from(home));
        }

        let config_base = non_empty_var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(config_base.join("drivethru"))
    }

    fn api_key(&self, var_name: &str) -> Option<ApiKey> {
        non_empty_var(var_name).map(ApiKey::new)
    }
}
