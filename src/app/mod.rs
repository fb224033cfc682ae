// ==========================================
// 制造业自动化投资仿真系统 - 应用层
// ==========================================
// 职责: 连接命令行与 API 层 (状态、请求读取、报告渲染、导出)
// ==========================================

pub mod export;
pub mod input;
pub mod report;
pub mod state;

// 重导出
pub use export::{export_projections_csv, export_report_json, report_to_json, write_projections_csv};
pub use input::{load_request, parse_request};
pub use report::{render_adjustment, render_report};
pub use state::{get_default_config_path, AppState};
