//! 系統報表模型

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 系統整體報表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemReport {
    /// 用戶總數
    pub user_count: usize,

    /// 系統總用水量（公升）
    pub total_system_consumption: Decimal,

    /// 平均每位用戶用水量（公升）
    pub mean_per_user: Decimal,

    /// 有警報觸發的用戶數
    pub users_with_active_alert: usize,

    /// 報表產生時間
    pub generated_at: NaiveDateTime,
}

impl SystemReport {
    /// 創建空的報表（無用戶時所有數值為 0）
    pub fn empty() -> Self {
        Self {
            user_count: 0,
            total_system_consumption: Decimal::ZERO,
            mean_per_user: Decimal::ZERO,
            users_with_active_alert: 0,
            generated_at: Local::now().naive_local(),
        }
    }
}
