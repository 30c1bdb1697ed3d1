//! 用水警報政策
//!
//! 警報分級以 trait 呈現，新增分級時只需新增實作，不修改既有政策

use rust_decimal::Decimal;
use std::fmt;

/// 警報政策
///
/// 以總用水量評估是否觸發警報，除限額外無其他狀態，評估無副作用
pub trait AlertPolicy: fmt::Debug {
    /// 評估總用水量，回傳警報訊息（未觸發時為 None）
    fn evaluate(&self, total: Decimal) -> Option<String>;
}

/// 一般警報：總用水量超過限額時觸發
#[derive(Debug, Clone)]
pub struct StandardAlert {
    /// 限額（公升）
    threshold: Decimal,
}

impl StandardAlert {
    /// 創建一般警報
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }

    /// 獲取限額（公升）
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }
}

impl AlertPolicy for StandardAlert {
    fn evaluate(&self, total: Decimal) -> Option<String> {
        if total > self.threshold {
            Some(format!(
                "⚠️  CONSUMO ALTO: {}L (Limite: {}L)",
                total, self.threshold
            ))
        } else {
            None
        }
    }
}

/// 嚴重警報：總用水量超過限額 1.5 倍時觸發
#[derive(Debug, Clone)]
pub struct CriticalAlert {
    /// 限額（公升）
    threshold: Decimal,
}

impl CriticalAlert {
    /// 創建嚴重警報
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }

    /// 獲取限額（公升）
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// 實際觸發門檻（限額 × 1.5）
    fn trigger_point(&self) -> Decimal {
        self.threshold * Decimal::new(15, 1)
    }
}

impl AlertPolicy for CriticalAlert {
    fn evaluate(&self, total: Decimal) -> Option<String> {
        if total > self.trigger_point() {
            Some(format!(
                "🚨 CONSUMO CRÍTICO: {}L (Limite: {}L)",
                total, self.threshold
            ))
        } else {
            None
        }
    }
}
