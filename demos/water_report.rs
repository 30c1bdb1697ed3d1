//! 用水監控完整範例
//!
//! 展示從用戶登錄到警報與系統報表的完整流程

use aqua_core::{ConsumptionRecord, User};
use aqua_report::ConsumptionManager;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("===== Water Consumption Report Example =====\n");

    // 步驟 1: 創建管理器（預設警報限額 200L）
    println!("[1] Create Consumption Manager");
    let mut manager = ConsumptionManager::new();
    println!(
        "    Default threshold: {}L\n",
        ConsumptionManager::default_threshold()
    );

    // 步驟 2: 登錄用戶
    println!("[2] Register Users");
    manager.add_user(User::residential("Ana".to_string()));
    manager.add_user(User::commercial("Acme".to_string(), "12.345".to_string()));
    for user in manager.users() {
        println!("    {}", user.describe());
    }
    println!();

    // 步驟 3: 記錄用水
    println!("[3] Record Consumption");
    let march_10 = NaiveDate::from_ymd_opt(2026, 3, 10)
        .ok_or("invalid date")?
        .and_hms_opt(8, 0, 0)
        .ok_or("invalid time")?;

    if let Some(ana) = manager.user_at_mut(0) {
        ana.add_record(ConsumptionRecord::new(Decimal::from(150)).with_timestamp(march_10));
        ana.add_record(ConsumptionRecord::new(Decimal::from(100)));
    }
    if let Some(acme) = manager.user_at_mut(1) {
        acme.add_record(ConsumptionRecord::new(Decimal::from(350)));
    }
    for user in manager.users() {
        println!("    {}: {}L", user.name(), user.total_consumed());
    }
    println!();

    // 步驟 4: 統計與警報
    println!("[4] Statistics and Alerts");
    for user in manager.users() {
        let stats = user.statistics();
        println!(
            "    {}: total {}L, mean {}L, max {}L, min {}L",
            user.name(),
            stats.total,
            stats.mean.round_dp(2),
            stats.max,
            stats.min
        );
        for alert in manager.evaluate_alerts(user) {
            println!("      {alert}");
        }
    }
    println!();

    // 步驟 5: 系統報表
    println!("[5] System Report");
    let report = manager.system_report();
    println!("    Users: {}", report.user_count);
    println!("    Total: {}L", report.total_system_consumption);
    println!("    Mean per user: {}L", report.mean_per_user.round_dp(2));
    println!("    Users with alert: {}", report.users_with_active_alert);

    Ok(())
}
