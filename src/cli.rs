// ==========================================
// 制造业自动化投资仿真系统 - 命令行定义
// ==========================================
// 职责: clap 参数定义, 与执行逻辑分离便于测试
// ==========================================

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::simulation::AutomationLevelsInput;
use crate::logging::LogFormat;

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 本地化文本
    Text,
    /// 完整 JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "mfg-automation-sim")]
#[command(about = "Financial impact simulation for manufacturing automation investments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 配置文件路径 (缺省时依次查找 MFG_SIM_CONFIG 与用户配置目录)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 报告语言 (zh-CN / en)
    #[arg(long, global = true, env = "MFG_SIM_LOCALE", default_value = "zh-CN")]
    pub locale: String,

    /// 日志格式 (human / json), 日志写入 stderr
    #[arg(long = "log-format", global = true, default_value = "human")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// 单类别自动化水平覆盖参数
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LevelArgs {
    /// 人工自动化水平 [0, 1]
    #[arg(long)]
    pub labor: Option<f64>,

    /// 质量自动化水平 [0, 1]
    #[arg(long)]
    pub quality: Option<f64>,

    /// 库存自动化水平 [0, 1]
    #[arg(long)]
    pub inventory: Option<f64>,

    /// 服务自动化水平 [0, 1]
    #[arg(long)]
    pub service: Option<f64>,
}

impl LevelArgs {
    /// 命令行参数优先, 其余沿用请求文件中的水平
    pub fn merge_into(&self, base: AutomationLevelsInput) -> AutomationLevelsInput {
        AutomationLevelsInput {
            labor: self.labor.or(base.labor),
            quality: self.quality.or(base.quality),
            inventory: self.inventory.or(base.inventory),
            service: self.service.or(base.service),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full simulation from a JSON request file
    Simulate {
        /// 仿真请求 JSON 文件
        #[arg(short, long)]
        input: PathBuf,

        /// 覆盖预测月数
        #[arg(short, long)]
        months: Option<u32>,

        /// 盈亏平衡日期基准日 (YYYY-MM-DD, 缺省为今天)
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,

        /// 输出格式
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// 输出文件 (缺省为 stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 额外导出月度预测 CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        #[command(flatten)]
        levels: LevelArgs,
    },

    /// Re-run the 12-month what-if with new automation levels
    Adjust {
        /// 仿真请求 JSON 文件 (用于构建基线)
        #[arg(short, long)]
        input: PathBuf,

        /// 输出格式
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[command(flatten)]
        levels: LevelArgs,
    },

    /// Print the built-in default configuration as JSON
    ConfigDefaults,

    /// Print the resolved configuration (file / env / defaults) as JSON
    ShowConfig,
}
