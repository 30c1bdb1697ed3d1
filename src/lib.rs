//! # Aqua
//!
//! 用水監控系統：用戶登錄、用水記錄、警報評估與彙總報表

pub mod shell;

// Re-export 主要類型
pub use aqua_core::{
    AlertPolicy, ConsumptionRecord, ConsumptionStats, CriticalAlert, StandardAlert, User,
    UserCategory,
};
pub use aqua_report::{ConsumptionManager, SystemReport};
