// ==========================================
// 制造业自动化投资仿真系统 - 仿真配置
// ==========================================
// 职责: 汇总全部因子, 提供一致性校验
// 来源: 内置默认值 / JSON 配置文件 (缺省字段回落默认值)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::factors::{
    AnalysisSettings, DecompositionRatios, InventoryFactors, LaborFactors, ProjectionSettings,
    QualityFactors, RampWindow, ServiceFactors,
};
use serde::{Deserialize, Serialize};

/// 比例组之和允许的浮点误差
const GROUP_SUM_TOLERANCE: f64 = 1e-6;

/// 实施 + 爬坡月数上限
const MAX_RAMP_MONTHS: u32 = 120;

// ==========================================
// SimulationConfig - 仿真配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub decomposition: DecompositionRatios,
    pub labor: LaborFactors,
    pub quality: QualityFactors,
    pub inventory: InventoryFactors,
    pub service: ServiceFactors,
    pub projection: ProjectionSettings,
    pub analysis: AnalysisSettings,
}

impl SimulationConfig {
    /// 校验配置
    ///
    /// 规则:
    /// 1) 所有比例/费率 ∈ [0, 1]
    /// 2) 每个拆分组比例之和 = 1
    /// 3) 金额与乘数非负
    /// 4) 摊销月数 > 0, 最大预测期 > 0
    pub fn validate(&self) -> ConfigResult<()> {
        self.validate_decomposition()?;
        self.validate_labor()?;
        self.validate_quality()?;
        self.validate_inventory()?;
        self.validate_service()?;
        self.validate_projection()?;

        check_fraction("analysis.annual_discount_rate", self.analysis.annual_discount_rate)?;
        if self.analysis.days_per_month == 0 {
            return Err(ConfigError::invalid("analysis.days_per_month", 0.0, "必须大于0"));
        }
        Ok(())
    }

    fn validate_decomposition(&self) -> ConfigResult<()> {
        let d = &self.decomposition;
        let fields = [
            ("decomposition.direct_labor_share", d.direct_labor_share),
            ("decomposition.indirect_labor_share", d.indirect_labor_share),
            ("decomposition.overtime_share", d.overtime_share),
            ("decomposition.benefits_share", d.benefits_share),
            ("decomposition.quality_share_of_cogs", d.quality_share_of_cogs),
            ("decomposition.rework_share", d.rework_share),
            ("decomposition.scrap_share", d.scrap_share),
            ("decomposition.inspection_share", d.inspection_share),
            ("decomposition.warranty_share", d.warranty_share),
            ("decomposition.inventory_share_of_overhead", d.inventory_share_of_overhead),
            ("decomposition.carrying_share", d.carrying_share),
            ("decomposition.storage_share", d.storage_share),
            ("decomposition.obsolescence_share", d.obsolescence_share),
            ("decomposition.insurance_share", d.insurance_share),
            ("decomposition.service_share_of_overhead", d.service_share_of_overhead),
            ("decomposition.agent_salary_share", d.agent_salary_share),
            ("decomposition.system_cost_share", d.system_cost_share),
            ("decomposition.service_training_share", d.service_training_share),
        ];
        for (key, value) in fields {
            check_fraction(key, value)?;
        }

        check_group_sum(
            "decomposition.labor_group",
            &[d.direct_labor_share, d.indirect_labor_share, d.overtime_share, d.benefits_share],
        )?;
        check_group_sum(
            "decomposition.quality_group",
            &[d.rework_share, d.scrap_share, d.inspection_share, d.warranty_share],
        )?;
        check_group_sum(
            "decomposition.inventory_group",
            &[d.carrying_share, d.storage_share, d.obsolescence_share, d.insurance_share],
        )?;
        check_group_sum(
            "decomposition.service_group",
            &[d.agent_salary_share, d.system_cost_share, d.service_training_share],
        )?;

        // 库存 + 客服 不能超过 overhead 总额
        let overhead_claimed = d.inventory_share_of_overhead + d.service_share_of_overhead;
        if overhead_claimed > 1.0 + GROUP_SUM_TOLERANCE {
            return Err(ConfigError::invalid(
                "decomposition.overhead_claimed",
                overhead_claimed,
                "库存与客服占 overhead 之和不能超过1",
            ));
        }
        Ok(())
    }

    fn validate_labor(&self) -> ConfigResult<()> {
        let l = &self.labor;
        check_fraction("labor.productivity_gain", l.productivity_gain)?;
        check_fraction("labor.error_reduction", l.error_reduction)?;
        check_fraction("labor.indirect_error_weight", l.indirect_error_weight)?;
        check_fraction("labor.overtime_reduction", l.overtime_reduction)?;
        check_non_negative("labor.large_company_savings_multiplier", l.large_company_savings_multiplier)?;
        check_non_negative("labor.small_company_savings_multiplier", l.small_company_savings_multiplier)?;
        check_fraction("labor.large_company_implementation_rate", l.large_company_implementation_rate)?;
        check_fraction("labor.medium_company_implementation_rate", l.medium_company_implementation_rate)?;
        check_fraction("labor.small_company_implementation_rate", l.small_company_implementation_rate)?;
        check_non_negative("labor.small_workforce_training_cost", l.small_workforce_training_cost)?;
        check_non_negative("labor.training_cost_per_employee", l.training_cost_per_employee)?;
        if l.small_company_threshold > l.large_company_threshold {
            return Err(ConfigError::invalid(
                "labor.small_company_threshold",
                l.small_company_threshold as f64,
                "小型企业阈值不能大于大型企业阈值",
            ));
        }
        check_ramp("labor.ramp", l.ramp)
    }

    fn validate_quality(&self) -> ConfigResult<()> {
        let q = &self.quality;
        check_fraction("quality.defect_reduction", q.defect_reduction)?;
        check_fraction("quality.inspection_defect_weight", q.inspection_defect_weight)?;
        check_fraction("quality.rework_reduction", q.rework_reduction)?;
        check_fraction("quality.scrap_reduction", q.scrap_reduction)?;
        check_non_negative("quality.high_volume_savings_multiplier", q.high_volume_savings_multiplier)?;
        check_non_negative("quality.low_volume_savings_multiplier", q.low_volume_savings_multiplier)?;
        check_fraction("quality.high_volume_system_rate", q.high_volume_system_rate)?;
        check_fraction("quality.standard_system_rate", q.standard_system_rate)?;
        check_fraction("quality.low_volume_system_rate", q.low_volume_system_rate)?;
        check_non_negative("quality.training_cost_per_employee", q.training_cost_per_employee)?;
        if q.low_volume_threshold > q.high_volume_threshold {
            return Err(ConfigError::invalid(
                "quality.low_volume_threshold",
                q.low_volume_threshold as f64,
                "低产量阈值不能大于高产量阈值",
            ));
        }
        check_ramp("quality.ramp", q.ramp)
    }

    fn validate_inventory(&self) -> ConfigResult<()> {
        let i = &self.inventory;
        check_fraction("inventory.turnover_improvement", i.turnover_improvement)?;
        check_fraction("inventory.storage_turnover_weight", i.storage_turnover_weight)?;
        check_fraction("inventory.carrying_cost_reduction", i.carrying_cost_reduction)?;
        check_fraction("inventory.obsolescence_reduction", i.obsolescence_reduction)?;
        check_fraction("inventory.inventory_share_of_cogs", i.inventory_share_of_cogs)?;
        check_fraction("inventory.cost_of_capital", i.cost_of_capital)?;
        check_fraction("inventory.system_cost_rate", i.system_cost_rate)?;
        check_non_negative("inventory.training_cost_per_employee", i.training_cost_per_employee)?;
        check_ramp("inventory.ramp", i.ramp)
    }

    fn validate_service(&self) -> ConfigResult<()> {
        let s = &self.service;
        check_fraction("service.automation_rate", s.automation_rate)?;
        check_fraction("service.automated_agent_weight", s.automated_agent_weight)?;
        check_fraction("service.agent_productivity_gain", s.agent_productivity_gain)?;
        check_fraction("service.cost_per_interaction_reduction", s.cost_per_interaction_reduction)?;
        check_fraction("service.platform_cost_rate", s.platform_cost_rate)?;
        check_non_negative("service.base_setup_cost", s.base_setup_cost)?;
        // 坐席节省 = 自动化份额 + 生产率提升, 不能超过坐席成本本身
        let agent_share = s.automation_rate * s.automated_agent_weight + s.agent_productivity_gain;
        if agent_share > 1.0 + GROUP_SUM_TOLERANCE {
            return Err(ConfigError::invalid(
                "service.agent_savings_share",
                agent_share,
                "坐席节省比例之和不能超过1",
            ));
        }
        check_ramp("service.ramp", s.ramp)
    }

    fn validate_projection(&self) -> ConfigResult<()> {
        let p = &self.projection;
        if p.implementation_spread_months == 0 {
            return Err(ConfigError::invalid(
                "projection.implementation_spread_months",
                0.0,
                "必须大于0",
            ));
        }
        if p.max_horizon_months == 0 {
            return Err(ConfigError::invalid("projection.max_horizon_months", 0.0, "必须大于0"));
        }
        check_non_negative("projection.full_adoption_bonus", p.full_adoption_bonus)?;
        check_fraction("projection.default_automation_level", p.default_automation_level)
    }
}

// ==========================================
// 校验辅助函数
// ==========================================

fn check_fraction(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, value, "必须位于 [0, 1] 区间"))
    }
}

fn check_non_negative(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, value, "必须为非负有限数"))
    }
}

fn check_group_sum(key: &str, shares: &[f64]) -> ConfigResult<()> {
    let sum: f64 = shares.iter().sum();
    if (sum - 1.0).abs() <= GROUP_SUM_TOLERANCE {
        Ok(())
    } else {
        Err(ConfigError::invalid(key, sum, "组内比例之和必须为1"))
    }
}

fn check_ramp(key: &str, ramp: RampWindow) -> ConfigResult<()> {
    if ramp.implementation_months == 0 && ramp.ramp_months == 0 {
        // 允许即时生效, 不做限制
        return Ok(());
    }
    let saturation = ramp
        .implementation_months
        .checked_add(ramp.ramp_months)
        .ok_or_else(|| {
            ConfigError::invalid(
                key,
                f64::from(ramp.implementation_months) + f64::from(ramp.ramp_months),
                "实施+爬坡月数溢出",
            )
        })?;
    if saturation > MAX_RAMP_MONTHS {
        return Err(ConfigError::invalid(
            key,
            f64::from(saturation),
            "实施+爬坡月数不能超过120",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_fraction_out_of_range() {
        let mut config = SimulationConfig::default();
        config.labor.productivity_gain = 1.5;

        match config.validate() {
            Err(ConfigError::InvalidValue { key, value, .. }) => {
                assert_eq!(key, "labor.productivity_gain");
                assert_eq!(value, 1.5);
            }
            other => panic!("应返回 InvalidValue, 实际: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unbalanced_group() {
        let mut config = SimulationConfig::default();
        config.decomposition.rework_share = 0.5;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("decomposition.quality_group"));
    }

    #[test]
    fn test_rejects_zero_spread_months() {
        let mut config = SimulationConfig::default();
        config.projection.implementation_spread_months = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_setup_cost() {
        let mut config = SimulationConfig::default();
        config.service.base_setup_cost = -1.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_volume_thresholds() {
        let mut config = SimulationConfig::default();
        config.quality.low_volume_threshold = 2_000_000;

        assert!(config.validate().is_err());
    }
}
