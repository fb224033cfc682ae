// ==========================================
// 制造业自动化投资仿真系统 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照
// 查找顺序: 显式路径 > 环境变量 MFG_SIM_CONFIG > 用户配置目录 > 内置默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::simulation_config::SimulationConfig;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "MFG_SIM_CONFIG";

const CONFIG_DIR_NAME: &str = "mfg-automation-sim";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigSource - 配置来源
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    BuiltIn,
    File(PathBuf),
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::BuiltIn => write!(f, "built-in"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Inline => write!(f, "inline"),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: SimulationConfig,
    source: ConfigSource,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            source: ConfigSource::BuiltIn,
        }
    }
}

impl ConfigManager {
    /// 使用内置默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载配置
    ///
    /// 缺省字段回落为默认值; 加载后立即校验
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let origin = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: origin.clone(),
            source,
        })?;

        let config = parse_config(&raw, &origin)?;
        info!(path = %origin, "已加载仿真配置文件");

        Ok(Self {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }

    /// 从 JSON 字符串加载配置
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config = parse_config(raw, "<inline>")?;
        Ok(Self {
            config,
            source: ConfigSource::Inline,
        })
    }

    /// 从已构造的配置创建 (同样执行校验)
    pub fn from_config(config: SimulationConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: ConfigSource::Inline,
        })
    }

    /// 按查找顺序解析配置
    ///
    /// # 参数
    /// - explicit: 命令行显式指定的路径 (文件必须存在)
    ///
    /// # 逻辑
    /// 1. explicit 存在 → 加载该文件
    /// 2. 环境变量 MFG_SIM_CONFIG 非空 → 加载该文件
    /// 3. 用户配置目录下 config.json 存在 → 加载
    /// 4. 内置默认值
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(value) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Self::from_file(Path::new(trimmed));
            }
        }

        if let Some(path) = default_config_path() {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        debug!("未找到配置文件, 使用内置默认配置");
        Ok(Self::default())
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 获取配置快照（JSON格式）
    ///
    /// # 用途
    /// - 随仿真报告记录所用因子, 保证结果可复现
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

/// 用户配置目录下的默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn parse_config(raw: &str, origin: &str) -> ConfigResult<SimulationConfig> {
    let config: SimulationConfig = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
        path: origin.to_string(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_manager_uses_builtin() {
        let manager = ConfigManager::new();
        assert_eq!(manager.source(), &ConfigSource::BuiltIn);
        assert_eq!(manager.config(), &SimulationConfig::default());
    }

    #[test]
    fn test_from_file_merges_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"labor": {{"productivity_gain": 0.3}}, "projection": {{"max_horizon_months": 60}}}}"#).unwrap();

        let manager = ConfigManager::from_file(file.path()).unwrap();
        assert_eq!(manager.config().labor.productivity_gain, 0.3);
        assert_eq!(manager.config().labor.overtime_reduction, 0.35);
        assert_eq!(manager.config().projection.max_horizon_months, 60);
        assert_eq!(manager.source(), &ConfigSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ConfigManager::from_file(Path::new("/nonexistent/mfg-sim/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ConfigManager::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let err = ConfigManager::from_json_str(r#"{"service": {"automation_rate": 2.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_snapshot_roundtrips() {
        let manager = ConfigManager::new();
        let snapshot = manager.get_config_snapshot().unwrap();
        let restored = ConfigManager::from_json_str(&snapshot).unwrap();
        assert_eq!(restored.config(), manager.config());
    }
}
