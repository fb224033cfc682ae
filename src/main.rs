// ==========================================
// 制造业自动化投资仿真系统 - 命令行主入口
// ==========================================
// 输出: 报告写 stdout (或 --output 文件), 日志与提示写 stderr
// ==========================================

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use mfg_automation_sim::app::{
    export_projections_csv, export_report_json, load_request, render_adjustment, render_report, report_to_json,
    AppState,
};
use mfg_automation_sim::cli::{Cli, Commands, LevelArgs, OutputFormat};
use mfg_automation_sim::i18n::{self, t_with_args};
use mfg_automation_sim::{logging, ConfigManager};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_format);
    i18n::set_locale_or_default(&cli.locale);

    tracing::info!("{} v{}", mfg_automation_sim::APP_NAME, mfg_automation_sim::VERSION);

    match cli.command {
        Commands::Simulate {
            input,
            months,
            as_of,
            format,
            output,
            csv,
            levels,
        } => {
            let state = load_state(cli.config.as_deref())?;
            let mut request =
                load_request(&input).with_context(|| format!("读取仿真请求失败: {}", input.display()))?;
            if let Some(months) = months {
                request.projection_months = months;
            }
            request.automation_levels = levels.merge_into(request.automation_levels);

            let api = &state.simulation_api;
            let report = match as_of {
                Some(date) => api.run_simulation_as_of(&request, date),
                None => api.run_simulation(&request),
            }
            .context("仿真执行失败")?;

            match (format, output.as_deref()) {
                (OutputFormat::Json, Some(path)) => {
                    export_report_json(path, &report)
                        .with_context(|| format!("写入报告失败: {}", path.display()))?;
                    eprintln!("{}", t_with_args("cli.report_written", &[("path", &path.display().to_string())]));
                }
                (OutputFormat::Json, None) => emit(&report_to_json(&report)?, None)?,
                (OutputFormat::Text, output) => emit(&render_report(&report), output)?,
            }

            if let Some(path) = csv {
                export_projections_csv(&path, &report.projections)
                    .with_context(|| format!("导出 CSV 失败: {}", path.display()))?;
                eprintln!("{}", t_with_args("cli.csv_written", &[("path", &path.display().to_string())]));
            }
        }
        Commands::Adjust { input, format, levels } => {
            let state = load_state(cli.config.as_deref())?;
            let request =
                load_request(&input).with_context(|| format!("读取仿真请求失败: {}", input.display()))?;

            run_adjust(&state, &request, &levels, format)?;
        }
        Commands::ConfigDefaults => print_config(&ConfigManager::new())?,
        Commands::ShowConfig => {
            let manager = ConfigManager::resolve(cli.config.as_deref()).context("加载配置失败")?;
            print_config(&manager)?;
        }
    }

    Ok(())
}

fn load_state(config: Option<&Path>) -> Result<AppState> {
    AppState::new(config).context("加载配置失败")
}

fn run_adjust(
    state: &AppState,
    request: &mfg_automation_sim::SimulationRequest,
    levels: &LevelArgs,
    format: OutputFormat,
) -> Result<()> {
    let api = &state.simulation_api;
    let baseline = api.build_baseline(&request.financial, &request.profile);
    let levels = levels.merge_into(request.automation_levels);
    let adjustment = api.adjust(&baseline, &levels).context("快速调整失败")?;

    let rendered = match format {
        OutputFormat::Text => render_adjustment(&adjustment),
        OutputFormat::Json => serde_json::to_string_pretty(&adjustment)?,
    };
    emit(&rendered, None)
}

fn print_config(manager: &ConfigManager) -> Result<()> {
    eprintln!(
        "{}",
        t_with_args("cli.config_source", &[("source", &manager.source().to_string())])
    );
    println!("{}", manager.get_config_snapshot()?);
    Ok(())
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("写入报告失败: {}", path.display()))?;
            eprintln!("{}", t_with_args("cli.report_written", &[("path", &path.display().to_string())]));
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
