//! 用戶模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::ConsumptionRecord;

/// 用戶類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserCategory {
    /// 住宅用戶
    Residential,
    /// 商業用戶（企業）
    Commercial,
}

impl std::fmt::Display for UserCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserCategory::Residential => write!(f, "Residencial"),
            UserCategory::Commercial => write!(f, "Comercial"),
        }
    }
}

/// 用水統計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionStats {
    /// 總用水量（公升）
    pub total: Decimal,

    /// 平均每筆用水量（公升）
    pub mean: Decimal,

    /// 記錄筆數
    pub count: usize,

    /// 最大單筆用水量（公升）
    pub max: Decimal,

    /// 最小單筆用水量（公升）
    pub min: Decimal,
}

impl ConsumptionStats {
    /// 創建空的統計（無記錄時所有數值為 0）
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            mean: Decimal::ZERO,
            count: 0,
            max: Decimal::ZERO,
            min: Decimal::ZERO,
        }
    }
}

/// 用戶
///
/// 住宅與商業用戶共用同一結構，以 `category` 區分；
/// 商業用戶額外持有企業編號（CNPJ）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用戶ID
    id: Uuid,

    /// 用戶名稱
    name: String,

    /// 用戶類型
    category: UserCategory,

    /// 企業編號（CNPJ），僅商業用戶
    business_id: Option<String>,

    /// 用水記錄（只追加，不重排、不刪除）
    records: Vec<ConsumptionRecord>,
}

impl User {
    /// 創建住宅用戶
    pub fn residential(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category: UserCategory::Residential,
            business_id: None,
            records: Vec::new(),
        }
    }

    /// 創建商業用戶
    pub fn commercial(name: String, business_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category: UserCategory::Commercial,
            business_id: Some(business_id),
            records: Vec::new(),
        }
    }

    /// 獲取用戶ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 獲取用戶名稱
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 獲取用戶類型
    pub fn category(&self) -> UserCategory {
        self.category
    }

    /// 獲取企業編號（僅商業用戶）
    pub fn business_id(&self) -> Option<&str> {
        self.business_id.as_deref()
    }

    /// 獲取用水記錄（唯讀，依登錄順序）
    pub fn records(&self) -> &[ConsumptionRecord] {
        &self.records
    }

    /// 追加用水記錄
    pub fn add_record(&mut self, record: ConsumptionRecord) {
        self.records.push(record);
    }

    /// 計算總用水量（公升），無記錄時為 0
    pub fn total_consumed(&self) -> Decimal {
        self.records.iter().map(|r| r.amount_liters()).sum()
    }

    /// 計算用水統計
    pub fn statistics(&self) -> ConsumptionStats {
        if self.records.is_empty() {
            return ConsumptionStats::empty();
        }

        let amounts: Vec<Decimal> = self.records.iter().map(|r| r.amount_liters()).collect();
        let total: Decimal = amounts.iter().copied().sum();
        let count = amounts.len();

        ConsumptionStats {
            total,
            mean: total / Decimal::from(count),
            count,
            max: amounts.iter().copied().max().unwrap_or(Decimal::ZERO),
            min: amounts.iter().copied().min().unwrap_or(Decimal::ZERO),
        }
    }

    /// 依用戶類型產生顯示文字
    pub fn describe(&self) -> String {
        match self.category {
            UserCategory::Residential => {
                format!("Usuário: {} | Tipo: {}", self.name, self.category)
            }
            UserCategory::Commercial => format!(
                "Empresa: {} | CNPJ: {} | Tipo: {}",
                self.name,
                self.business_id.as_deref().unwrap_or(""),
                self.category
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_residential_user() {
        let user = User::residential("Ana".to_string());

        assert_eq!(user.name(), "Ana");
        assert_eq!(user.category(), UserCategory::Residential);
        assert_eq!(user.business_id(), None);
        assert_eq!(user.describe(), "Usuário: Ana | Tipo: Residencial");
    }

    #[test]
    fn test_commercial_user() {
        let user = User::commercial("Acme".to_string(), "12.345".to_string());

        assert_eq!(user.category(), UserCategory::Commercial);
        assert_eq!(user.business_id(), Some("12.345"));
        assert_eq!(
            user.describe(),
            "Empresa: Acme | CNPJ: 12.345 | Tipo: Comercial"
        );
    }

    #[test]
    fn test_empty_statistics() {
        let user = User::residential("Ana".to_string());

        assert_eq!(user.total_consumed(), Decimal::ZERO);
        assert_eq!(user.statistics(), ConsumptionStats::empty());
    }

    #[test]
    fn test_statistics() {
        let mut user = User::residential("Ana".to_string());
        user.add_record(ConsumptionRecord::new(Decimal::from(100)));
        user.add_record(ConsumptionRecord::new(Decimal::from(50)));
        user.add_record(ConsumptionRecord::new(Decimal::from(150)));

        let stats = user.statistics();
        assert_eq!(stats.total, Decimal::from(300));
        assert_eq!(stats.mean, Decimal::from(100));
        assert_eq!(stats.count, 3);
        assert_eq!(stats.max, Decimal::from(150));
        assert_eq!(stats.min, Decimal::from(50));
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let mut user = User::residential("Ana".to_string());
        user.add_record(ConsumptionRecord::new(Decimal::from(30)));
        user.add_record(ConsumptionRecord::new(Decimal::from(10)));
        user.add_record(ConsumptionRecord::new(Decimal::from(20)));

        let amounts: Vec<Decimal> = user.records().iter().map(|r| r.amount_liters()).collect();
        assert_eq!(
            amounts,
            vec![Decimal::from(30), Decimal::from(10), Decimal::from(20)]
        );
    }

    proptest! {
        #[test]
        fn statistics_match_the_record_sequence(
            amounts in proptest::collection::vec(0u32..10_000, 1..50)
        ) {
            let mut user = User::residential("Ana".to_string());
            for amount in &amounts {
                user.add_record(ConsumptionRecord::new(Decimal::from(*amount)));
            }

            let stats = user.statistics();
            let expected_total: Decimal = amounts.iter().map(|a| Decimal::from(*a)).sum();

            prop_assert_eq!(stats.total, expected_total);
            prop_assert_eq!(stats.total, user.total_consumed());
            prop_assert_eq!(stats.count, amounts.len());
            prop_assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        }
    }
}
