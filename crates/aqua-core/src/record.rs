//! 用水記錄模型

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用水記錄
///
/// 建立後不可變更，由所屬用戶依登錄順序持有
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// 記錄ID
    id: Uuid,

    /// 用水量（公升，呼叫端保證非負）
    amount_liters: Decimal,

    /// 記錄時間
    recorded_at: NaiveDateTime,
}

impl ConsumptionRecord {
    /// 創建新的用水記錄，記錄時間為當下
    pub fn new(amount_liters: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount_liters,
            recorded_at: Local::now().naive_local(),
        }
    }

    /// 建構器模式：設置記錄時間
    pub fn with_timestamp(mut self, recorded_at: NaiveDateTime) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    /// 獲取記錄ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 獲取用水量（公升）
    pub fn amount_liters(&self) -> Decimal {
        self.amount_liters
    }

    /// 獲取記錄時間
    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }
}

impl std::fmt::Display for ConsumptionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}L em {}",
            self.amount_liters,
            self.recorded_at.format("%d/%m/%Y %H:%M")
        )
    }
}
