//! 環境変数解決 Outbound ポート
//!
//! 設定ファイルの場所と API キーを環境変数から解決する。
//! 注文エンジン自体は環境変数を読まない。読むのは CLI の配線だけ。

use crate::domain::ApiKey;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 設定ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. DRIVETHRU_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/drivethru
    /// 3. $HOME/.config/drivethru
    fn resolve_home_dir(&self) -> Result<PathBuf, Error>;

    /// 既定の設定ファイルパス（resolve_home_dir() 直下の config.json）
    fn resolve_config_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("config.json"))
    }

    /// 指定した環境変数から API キーを読む。未設定・空なら None
    fn api_key(&self, var_name: &str) -> Option<ApiKey>;
}
