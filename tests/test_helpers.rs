// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供集成测试共用的输入构建器与基准场景
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use mfg_automation_sim::domain::{
    AutomationLevelsInput, CompanyProfile, FinancialAggregates, OpportunityPotential,
    QuestionnaireInsights, SimulationRequest,
};
use mfg_automation_sim::AutomationCategory;

/// 固定基准日, 保证盈亏平衡日期可断言
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// 基准中型企业: 营收 5M, COGS 3M, 人工 1.2M, 间接费用 0.5M
pub fn reference_financial() -> FinancialAggregates {
    FinancialAggregates::new(5_000_000.0, 3_000_000.0, 1_200_000.0, 500_000.0)
}

pub fn reference_profile() -> CompanyProfile {
    ProfileBuilder::new().build()
}

pub fn reference_request() -> SimulationRequest {
    SimulationRequest::new(reference_financial(), reference_profile())
}

// ==========================================
// CompanyProfile 构建器
// ==========================================

pub struct ProfileBuilder {
    production_volume: String,
    employee_count: String,
    automation_level: String,
    insights: Option<QuestionnaireInsights>,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self {
            production_volume: "1000-10000 units/day".to_string(),
            employee_count: "51-200 employees".to_string(),
            automation_level: "Some automated tools".to_string(),
            insights: None,
        }
    }

    pub fn volume(mut self, volume: &str) -> Self {
        self.production_volume = volume.to_string();
        self
    }

    pub fn employees(mut self, employees: &str) -> Self {
        self.employee_count = employees.to_string();
        self
    }

    pub fn automation(mut self, automation: &str) -> Self {
        self.automation_level = automation.to_string();
        self
    }

    pub fn size_category(mut self, size: &str) -> Self {
        self.insights_mut().size_category = Some(size.to_string());
        self
    }

    pub fn annual_volume(mut self, volume: &str) -> Self {
        self.insights_mut().production_volume_annual = Some(volume.to_string());
        self
    }

    pub fn quality_loss(mut self, loss: &str) -> Self {
        self.insights_mut().quality_loss_percentage = Some(loss.to_string());
        self
    }

    pub fn opportunity(mut self, category: AutomationCategory, potential: OpportunityPotential) -> Self {
        self.insights_mut().opportunities.insert(category, potential);
        self
    }

    fn insights_mut(&mut self) -> &mut QuestionnaireInsights {
        self.insights.get_or_insert_with(QuestionnaireInsights::default)
    }

    pub fn build(self) -> CompanyProfile {
        let profile = CompanyProfile::new(&self.production_volume, &self.employee_count, &self.automation_level);
        match self.insights {
            Some(insights) => profile.with_insights(insights),
            None => profile,
        }
    }
}

/// 四类别统一水平
pub fn uniform_levels(level: f64) -> AutomationLevelsInput {
    AutomationLevelsInput {
        labor: Some(level),
        quality: Some(level),
        inventory: Some(level),
        service: Some(level),
    }
}

/// 浮点近似断言
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: 期望 {}, 实际 {}",
        what,
        expected,
        actual
    );
}
