//! 用戶與警報管理

use aqua_core::{AlertPolicy, CriticalAlert, StandardAlert, User};
use chrono::Local;
use rust_decimal::Decimal;

use crate::report::SystemReport;

/// 用戶與警報管理器
///
/// 擁有全部用戶與警報政策，生命週期同行程，無持久化
#[derive(Debug)]
pub struct ConsumptionManager {
    /// 用戶（依登錄順序，允許重名）
    users: Vec<User>,

    /// 警報政策（依固定順序評估：一般在前、嚴重在後）
    policies: Vec<Box<dyn AlertPolicy>>,
}

impl ConsumptionManager {
    /// 預設警報限額（公升）
    pub fn default_threshold() -> Decimal {
        Decimal::from(200)
    }

    /// 創建新的管理器，套用預設警報政策
    pub fn new() -> Self {
        let threshold = Self::default_threshold();
        Self {
            users: Vec::new(),
            policies: vec![
                Box::new(StandardAlert::new(threshold)),
                Box::new(CriticalAlert::new(threshold)),
            ],
        }
    }

    /// 建構器模式：設置警報政策
    pub fn with_policies(mut self, policies: Vec<Box<dyn AlertPolicy>>) -> Self {
        self.policies = policies;
        self
    }

    /// 登錄用戶（不檢查重名，查找時回傳最先登錄者）
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// 依名稱查找用戶（不分大小寫，回傳登錄順序中的第一位）
    pub fn find_user(&self, name: &str) -> Option<&User> {
        let wanted = name.to_lowercase();
        self.users
            .iter()
            .find(|user| user.name().to_lowercase() == wanted)
    }

    /// 獲取全部用戶（唯讀，依登錄順序）
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// 依序號獲取可變用戶（超出範圍時為 None）
    pub fn user_at_mut(&mut self, index: usize) -> Option<&mut User> {
        self.users.get_mut(index)
    }

    /// 評估單一用戶的警報
    ///
    /// 依政策固定順序收集全部觸發訊息，皆未觸發時為空
    pub fn evaluate_alerts(&self, user: &User) -> Vec<String> {
        let total = user.total_consumed();
        let messages: Vec<String> = self
            .policies
            .iter()
            .filter_map(|policy| policy.evaluate(total))
            .collect();

        tracing::debug!(
            "警報評估: 用戶 {} 總量 {}L，觸發 {} 則",
            user.name(),
            total,
            messages.len()
        );

        messages
    }

    /// 產生系統整體報表
    pub fn system_report(&self) -> SystemReport {
        if self.users.is_empty() {
            return SystemReport::empty();
        }

        let user_count = self.users.len();
        let total: Decimal = self.users.iter().map(|user| user.total_consumed()).sum();
        let users_with_active_alert = self
            .users
            .iter()
            .filter(|user| !self.evaluate_alerts(user).is_empty())
            .count();

        tracing::info!("產生系統報表: 用戶 {} 位，總量 {}L", user_count, total);

        SystemReport {
            user_count,
            total_system_consumption: total,
            mean_per_user: total / Decimal::from(user_count),
            users_with_active_alert,
            generated_at: Local::now().naive_local(),
        }
    }
}

impl Default for ConsumptionManager {
    fn default() -> Self {
        Self::new()
    }
}
