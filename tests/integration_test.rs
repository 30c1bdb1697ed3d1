//! 集成測試

use aqua_core::{ConsumptionRecord, User};
use aqua_report::ConsumptionManager;
use rust_decimal::Decimal;

#[test]
fn test_consumption_alert_ladder() {
    // 場景：Ana 逐步累積用水量，警報依序觸發

    let mut manager = ConsumptionManager::new();
    manager.add_user(User::residential("Ana".to_string()));

    // 1. 150L：無警報
    manager
        .user_at_mut(0)
        .unwrap()
        .add_record(ConsumptionRecord::new(Decimal::from(150)));

    let user = &manager.users()[0];
    assert_eq!(user.total_consumed(), Decimal::from(150));
    assert!(manager.evaluate_alerts(user).is_empty());

    // 2. 累計 250L：僅一般警報（250 ≤ 300）
    manager
        .user_at_mut(0)
        .unwrap()
        .add_record(ConsumptionRecord::new(Decimal::from(100)));

    let alerts = manager.evaluate_alerts(&manager.users()[0]);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("CONSUMO ALTO"));

    // 3. 累計 350L：一般與嚴重警報皆觸發（350 > 300）
    manager
        .user_at_mut(0)
        .unwrap()
        .add_record(ConsumptionRecord::new(Decimal::from(100)));

    let alerts = manager.evaluate_alerts(&manager.users()[0]);
    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].contains("CONSUMO ALTO"));
    assert!(alerts[1].contains("CONSUMO CRÍTICO"));
}

#[test]
fn test_commercial_user_describe() {
    let mut manager = ConsumptionManager::new();
    manager.add_user(User::commercial("Acme".to_string(), "12.345".to_string()));

    let description = manager.users()[0].describe();
    assert!(description.contains("Acme"));
    assert!(description.contains("12.345"));
    assert!(description.contains("Comercial"));
}

#[test]
fn test_system_report_without_users() {
    let report = ConsumptionManager::new().system_report();

    assert_eq!(report.user_count, 0);
    assert_eq!(report.total_system_consumption, Decimal::ZERO);
    assert_eq!(report.mean_per_user, Decimal::ZERO);
}

#[test]
fn test_system_report_aggregates() {
    let mut manager = ConsumptionManager::new();
    manager.add_user(User::residential("Ana".to_string()));
    manager.add_user(User::commercial("Acme".to_string(), "12.345".to_string()));

    manager
        .user_at_mut(0)
        .unwrap()
        .add_record(ConsumptionRecord::new(Decimal::from(120)));
    manager
        .user_at_mut(1)
        .unwrap()
        .add_record(ConsumptionRecord::new(Decimal::from(280)));

    let report = manager.system_report();
    assert_eq!(report.user_count, 2);
    assert_eq!(report.total_system_consumption, Decimal::from(400));
    assert_eq!(report.mean_per_user, Decimal::from(200));
    // 只有 Acme（280 > 200）觸發警報
    assert_eq!(report.users_with_active_alert, 1);
}

#[test]
fn test_duplicate_names_lookup_first() {
    let mut manager = ConsumptionManager::new();
    manager.add_user(User::residential("Ana".to_string()));
    manager.add_user(User::residential("Ana".to_string()));

    manager
        .user_at_mut(0)
        .unwrap()
        .add_record(ConsumptionRecord::new(Decimal::from(90)));

    // 不分大小寫，回傳最先登錄者
    let found = manager.find_user("ANA").unwrap();
    assert_eq!(found.total_consumed(), Decimal::from(90));
}

#[test]
fn test_full_shell_session() {
    use aqua::shell::Shell;
    use std::io::Cursor;

    // 完整選單流程：登錄兩類用戶、記錄用水、查看統計與報表
    let script = "1\nAna\n2\nAcme\n12.345\n3\n1\n150\n3\n1\n100\n3\n2\n280\n7\n8\n9\n";
    let mut output = Vec::new();
    let mut shell = Shell::new(Cursor::new(script.to_string()), &mut output);
    shell.run().unwrap();
    drop(shell);

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Usuário: Ana | Tipo: Residencial cadastrado com sucesso!"));
    assert!(
        output.contains("Empresa: Acme | CNPJ: 12.345 | Tipo: Comercial cadastrado com sucesso!")
    );
    assert!(output.contains("Total consumido: 250L"));
    assert!(output.contains("Consumo total do sistema: 530L"));
    assert!(output.contains("Total de usuários: 2"));
    assert!(output.contains("Usuários com alerta ativo: 2"));
}
