// ==========================================
// 制造业自动化投资仿真系统 - 结果导出
// ==========================================
// 支持: 月度预测 CSV / 仿真报告 JSON
// ==========================================

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::api::error::ApiResult;
use crate::domain::projection::MonthlyProjection;
use crate::domain::simulation::SimulationReport;

// ==========================================
// CSV 导出
// ==========================================

/// 将月度预测写为 CSV (首行为字段名)
pub fn write_projections_csv<W: Write>(writer: W, projections: &[MonthlyProjection]) -> ApiResult<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for projection in projections {
        csv_writer.serialize(projection)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// 将月度预测导出到文件
pub fn export_projections_csv(path: &Path, projections: &[MonthlyProjection]) -> ApiResult<()> {
    let file = File::create(path)?;
    write_projections_csv(BufWriter::new(file), projections)?;
    info!(path = %path.display(), rows = projections.len(), "月度预测已导出为 CSV");
    Ok(())
}

// ==========================================
// JSON 导出
// ==========================================

pub fn report_to_json(report: &SimulationReport) -> ApiResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// 将完整报告导出到 JSON 文件
pub fn export_report_json(path: &Path, report: &SimulationReport) -> ApiResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    info!(path = %path.display(), simulation_id = %report.simulation_id, "仿真报告已导出为 JSON");
    Ok(())
}
