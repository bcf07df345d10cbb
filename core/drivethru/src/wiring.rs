//! 配線: 設定・環境変数・標準アダプタで OrderAssistant を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StderrLog};
use common::config::AssistantConfig;
use common::domain::ModelName;
use common::error::Error;
use common::llm::OpenAiCompatProvider;
use common::ports::outbound::{EnvResolver, Log, LogLevel};

use crate::adapter::DriverCompletion;
use crate::cli::Config;
use crate::domain::Menu;
use crate::usecase::OrderAssistant;

pub struct App {
    pub assistant: OrderAssistant,
    pub logger: Arc<dyn Log>,
}

/// --log-file > --verbose > 出力なし
pub fn wire_logger(config: &Config) -> Arc<dyn Log> {
    if let Some(ref path) = config.log_file {
        Arc::new(FileJsonLog::new(path))
    } else if config.verbose {
        Arc::new(StderrLog::new(LogLevel::Debug))
    } else {
        Arc::new(NoopLog)
    }
}

/// 設定ファイルを読む。--config 指定時はファイル必須
pub fn load_config(config: &Config, env: &dyn EnvResolver) -> Result<AssistantConfig, Error> {
    match config.config {
        Some(ref path) => AssistantConfig::load(path, true),
        None => AssistantConfig::load(&env.resolve_config_path()?, false),
    }
}

pub fn wire_app(config: &Config, env: &dyn EnvResolver) -> Result<App, Error> {
    let logger = wire_logger(config);
    let file_config = load_config(config, env)?;

    let api_key_env = file_config.api_key_env_or_default();
    let api_key = env.api_key(&api_key_env).ok_or_else(|| {
        Error::invalid_argument(format!(
            "API key not found. Set the {} environment variable.",
            api_key_env
        ))
    })?;

    let model = ModelName::new(
        config
            .model
            .clone()
            .unwrap_or_else(|| file_config.model_or_default()),
    );
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| file_config.base_url_or_default());
    let menu = Menu::new(file_config.menu_or_default())?;

    let provider = OpenAiCompatProvider::new(
        model,
        Some(base_url),
        Some(api_key),
        file_config.referer_or_default(),
    )?;
    let assistant = OrderAssistant::with_client(
        Arc::new(DriverCompletion::new(provider)),
        menu,
        Arc::clone(&logger),
    );
    Ok(App { assistant, logger })
}
