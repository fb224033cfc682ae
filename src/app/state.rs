// ==========================================
// 制造业自动化投资仿真系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::path::Path;
use std::sync::Arc;

use crate::api::{ApiResult, SimulationApi};
use crate::config::{default_config_path, ConfigManager, ConfigSource};

/// 应用状态
///
/// 包含配置与 API 实例; 所有字段只读, 可在线程间共享
#[derive(Debug, Clone)]
pub struct AppState {
    /// 配置管理器 (含配置来源)
    pub config_manager: Arc<ConfigManager>,

    /// 仿真API
    pub simulation_api: Arc<SimulationApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config_path: 显式配置文件路径; None 时按查找顺序解析
    ///
    /// # 返回
    /// - Err(ApiError::Config): 配置文件读取、解析或校验失败
    pub fn new(config_path: Option<&Path>) -> ApiResult<Self> {
        let config_manager = ConfigManager::resolve(config_path)?;
        tracing::info!(source = %config_manager.source(), "初始化AppState");
        Ok(Self::from_config_manager(config_manager))
    }

    pub fn from_config_manager(config_manager: ConfigManager) -> Self {
        let simulation_api = Arc::new(SimulationApi::from_config_manager(&config_manager));
        Self {
            config_manager: Arc::new(config_manager),
            simulation_api,
        }
    }

    pub fn config_source(&self) -> &ConfigSource {
        self.config_manager.source()
    }
}

/// 获取默认配置文件路径 (用于提示)
pub fn get_default_config_path() -> String {
    default_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "config.json".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_state_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"labor": {{"productivity_gain": 0.3}}}}"#).unwrap();

        let state = AppState::new(Some(file.path())).unwrap();
        assert_eq!(state.config_manager.config().labor.productivity_gain, 0.3);
        assert_eq!(state.simulation_api.config().labor.productivity_gain, 0.3);
        assert!(matches!(state.config_source(), ConfigSource::File(_)));
    }

    #[test]
    fn test_state_rejects_missing_file() {
        let result = AppState::new(Some(Path::new("/nonexistent/mfg-sim.json")));
        assert!(result.is_err());
    }
}
