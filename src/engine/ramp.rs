// ==========================================
// 制造业自动化投资仿真系统 - 收益爬坡曲线
// ==========================================
// 实施期: m ≤ impl → m / impl
// 爬坡期: impl < m < impl + ramp → 1 + bonus × (m − impl) / ramp
// 稳定期: m ≥ impl + ramp → 1 + bonus
// ==========================================

use crate::config::RampWindow;
use serde::{Deserialize, Serialize};

/// 单类别爬坡曲线
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampCurve {
    pub window: RampWindow,
    pub full_adoption_bonus: f64,
}

impl RampCurve {
    pub fn new(window: RampWindow, full_adoption_bonus: f64) -> Self {
        Self {
            window,
            full_adoption_bonus,
        }
    }

    /// 稳定期系数
    pub fn plateau(&self) -> f64 {
        1.0 + self.full_adoption_bonus
    }

    /// 第 month 月 (从 1 开始) 的收益系数
    pub fn factor(&self, month: u32) -> f64 {
        let implementation = self.window.implementation_months;
        let ramp = self.window.ramp_months;

        if month >= self.window.saturation_month() {
            self.plateau()
        } else if month <= implementation {
            f64::from(month) / f64::from(implementation)
        } else {
            let progress = f64::from(month - implementation) / f64::from(ramp);
            1.0 + self.full_adoption_bonus * progress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(implementation: u32, ramp: u32) -> RampCurve {
        RampCurve::new(RampWindow::new(implementation, ramp), 0.2)
    }

    #[test]
    fn test_labor_curve() {
        let c = curve(4, 2);
        assert_eq!(c.factor(1), 0.25);
        assert_eq!(c.factor(2), 0.5);
        assert_eq!(c.factor(4), 1.0);
        assert!((c.factor(5) - 1.1).abs() < 1e-12);
        assert_eq!(c.factor(6), 1.2);
        assert_eq!(c.factor(7), 1.2);
        assert_eq!(c.factor(120), 1.2);
    }

    #[test]
    fn test_saturation_equals_tail() {
        for (implementation, ramp) in [(4, 2), (6, 4), (3, 2), (2, 1)] {
            let c = curve(implementation, ramp);
            let saturation = implementation + ramp;
            assert_eq!(c.factor(saturation), c.factor(saturation + 1), "饱和月与之后应一致");
            assert_eq!(c.factor(saturation), c.plateau());
        }
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        let c = curve(6, 4);
        let factors: Vec<f64> = (1..=24).map(|m| c.factor(m)).collect();
        assert!(factors.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_degenerate_windows() {
        // 无实施期、无爬坡期: 首月即满额
        assert_eq!(curve(0, 0).factor(1), 1.2);
        // 无爬坡期: 实施期结束后直接进入稳定期
        let c = curve(3, 0);
        assert_eq!(c.factor(3), 1.2);
        assert_eq!(c.factor(2), 2.0 / 3.0);
        // 无实施期
        let c = curve(0, 2);
        assert!((c.factor(1) - 1.1).abs() < 1e-12);
        assert_eq!(c.factor(2), 1.2);
    }
}
