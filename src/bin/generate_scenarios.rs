// ==========================================
// 制造业自动化投资仿真系统 - 示例场景生成
// ==========================================
// 用法: generate_scenarios [输出目录] (默认 ./scenarios)
// 生成小/中/大型企业三个仿真请求 JSON, 可直接用于 `simulate`
// ==========================================

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use mfg_automation_sim::domain::{
    AutomationLevelsInput, CompanyProfile, FinancialAggregates, OpportunityPotential,
    QuestionnaireInsights, SimulationRequest,
};
use mfg_automation_sim::AutomationCategory;

const DEFAULT_OUTPUT_DIR: &str = "scenarios";

fn main() -> Result<(), Box<dyn Error>> {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    fs::create_dir_all(&output_dir)?;

    for (name, request) in scenarios() {
        let path = write_scenario(&output_dir, name, &request)?;
        println!("已生成: {}", path.display());
    }

    Ok(())
}

fn scenarios() -> Vec<(&'static str, SimulationRequest)> {
    let small = SimulationRequest::new(
        FinancialAggregates::new(1_500_000.0, 900_000.0, 360_000.0, 150_000.0),
        CompanyProfile::new("100-1000 units/day", "11-50 employees", "Fully manual operations"),
    )
    .with_months(36);

    let medium = SimulationRequest::new(
        FinancialAggregates::new(5_000_000.0, 3_000_000.0, 1_200_000.0, 500_000.0),
        CompanyProfile::new("1000-10000 units/day", "51-200 employees", "Some automated tools"),
    );

    let mut opportunities = BTreeMap::new();
    opportunities.insert(AutomationCategory::Labor, OpportunityPotential::High);
    opportunities.insert(AutomationCategory::Quality, OpportunityPotential::High);
    opportunities.insert(AutomationCategory::Service, OpportunityPotential::Low);
    let large = SimulationRequest::new(
        FinancialAggregates::new(40_000_000.0, 26_000_000.0, 9_000_000.0, 3_500_000.0),
        CompanyProfile::new("10000+ units/day", "200+ employees", "Highly automated").with_insights(
            QuestionnaireInsights {
                size_category: Some("large".to_string()),
                production_volume_annual: Some("3.5M units/year".to_string()),
                automation_percentage: Some("60%".to_string()),
                quality_loss_percentage: Some("2-4%".to_string()),
                opportunities,
            },
        ),
    )
    .with_levels(AutomationLevelsInput {
        labor: Some(0.8),
        quality: Some(0.7),
        inventory: Some(0.5),
        service: Some(0.3),
    })
    .with_months(60);

    vec![("small_company", small), ("medium_company", medium), ("large_company", large)]
}

fn write_scenario(dir: &Path, name: &str, request: &SimulationRequest) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(format!("{}.json", name));
    fs::write(&path, serde_json::to_string_pretty(request)?)?;
    Ok(path)
}
