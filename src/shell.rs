//! 互動式選單
//!
//! 所有輸入驗證在此邊界完成，核心模型不接收非法值；
//! 讀寫端以泛型注入，測試時可用緩衝區取代終端

use std::io::{BufRead, Write};

use aqua_core::{ConsumptionRecord, User};
use aqua_report::ConsumptionManager;
use rust_decimal::Decimal;

/// 選單邊界錯誤（除 IO 外皆可恢復，回到主選單）
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Digite um valor numérico válido.")]
    InvalidNumber,

    #[error("O consumo não pode ser negativo.")]
    NegativeAmount,

    #[error("Usuário inválido.")]
    InvalidSelection,

    #[error("O nome não pode ser vazio.")]
    EmptyInput,

    #[error("Entrada encerrada.")]
    Eof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// 互動式選單
pub struct Shell<R, W> {
    reader: R,
    writer: W,
    manager: ConsumptionManager,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// 創建新的選單
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            manager: ConsumptionManager::new(),
        }
    }

    /// 獲取管理器引用
    pub fn manager(&self) -> &ConsumptionManager {
        &self.manager
    }

    /// 選單主迴圈，直到選擇離開或輸入結束
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.show_menu()?;

            let choice = match self.read_line("\nEscolha uma opção: ") {
                Ok(line) => line,
                Err(ShellError::Eof) => break,
                Err(err) => return Err(err),
            };

            let option: u32 = match choice.parse() {
                Ok(option) => option,
                Err(_) => {
                    writeln!(self.writer, "Erro: Digite um número válido.")?;
                    continue;
                }
            };

            tracing::debug!("選單選項: {}", option);

            let outcome = match option {
                1 => self.register_residential(),
                2 => self.register_commercial(),
                3 => self.register_consumption(),
                4 => self.show_records(),
                5 => self.show_totals(),
                6 => self.show_alerts(),
                7 => self.show_statistics(),
                8 => self.show_system_report(),
                9 => {
                    writeln!(self.writer, "Saindo do sistema...")?;
                    break;
                }
                _ => {
                    writeln!(self.writer, "Opção inválida. Escolha entre 1 e 9.")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(ShellError::Eof) => break,
                Err(ShellError::Io(err)) => return Err(ShellError::Io(err)),
                Err(err) => writeln!(self.writer, "Erro: {err}")?,
            }
        }

        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.writer, "\n=== Controle de Consumo de Água ===")?;
        writeln!(self.writer, "1 - Cadastrar Usuário Residencial")?;
        writeln!(self.writer, "2 - Cadastrar Usuário Comercial")?;
        writeln!(self.writer, "3 - Registrar Consumo de Água")?;
        writeln!(self.writer, "4 - Ver Consumo Registrado")?;
        writeln!(self.writer, "5 - Calcular Consumo Total")?;
        writeln!(self.writer, "6 - Ver Alerta de Consumo")?;
        writeln!(self.writer, "7 - Ver Estatísticas Detalhadas")?;
        writeln!(self.writer, "8 - Relatório Geral do Sistema")?;
        writeln!(self.writer, "9 - Sair")?;
        Ok(())
    }

    /// 提示並讀取一行（去除前後空白）
    fn read_line(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ShellError::Eof);
        }
        Ok(line.trim().to_string())
    }

    /// 讀取非空名稱
    fn read_name(&mut self, prompt: &str) -> Result<String, ShellError> {
        let name = self.read_line(prompt)?;
        if name.is_empty() {
            return Err(ShellError::EmptyInput);
        }
        Ok(name)
    }

    /// 讀取非負用水量（公升）
    fn read_amount(&mut self, prompt: &str) -> Result<Decimal, ShellError> {
        let raw = self.read_line(prompt)?;
        let amount: Decimal = raw.parse().map_err(|_| ShellError::InvalidNumber)?;
        if amount < Decimal::ZERO {
            return Err(ShellError::NegativeAmount);
        }
        Ok(amount)
    }

    fn register_residential(&mut self) -> Result<(), ShellError> {
        let name = self.read_name("Nome do usuário: ")?;
        let user = User::residential(name);
        writeln!(self.writer, "{} cadastrado com sucesso!", user.describe())?;
        self.manager.add_user(user);
        Ok(())
    }

    fn register_commercial(&mut self) -> Result<(), ShellError> {
        let name = self.read_name("Nome da empresa: ")?;
        let business_id = self.read_name("CNPJ: ")?;
        let user = User::commercial(name, business_id);
        writeln!(self.writer, "{} cadastrado com sucesso!", user.describe())?;
        self.manager.add_user(user);
        Ok(())
    }

    fn register_consumption(&mut self) -> Result<(), ShellError> {
        if self.manager.users().is_empty() {
            writeln!(
                self.writer,
                "Nenhum usuário cadastrado. Cadastre um usuário primeiro."
            )?;
            return Ok(());
        }

        writeln!(self.writer, "\nUsuários disponíveis:")?;
        for (ordinal, user) in self.manager.users().iter().enumerate() {
            writeln!(self.writer, "{} - {}", ordinal + 1, user.describe())?;
        }

        let selection = self.read_line("Escolha o número do usuário: ")?;
        let ordinal: usize = selection.parse().map_err(|_| ShellError::InvalidNumber)?;
        let index = ordinal.checked_sub(1).ok_or(ShellError::InvalidSelection)?;
        if index >= self.manager.users().len() {
            return Err(ShellError::InvalidSelection);
        }

        let amount = self.read_amount("Informe o consumo em litros: ")?;

        if let Some(user) = self.manager.user_at_mut(index) {
            user.add_record(ConsumptionRecord::new(amount));
            let name = user.name().to_string();
            writeln!(
                self.writer,
                "Consumo de {}L registrado para {}.",
                amount, name
            )?;
        }
        Ok(())
    }

    fn show_records(&mut self) -> Result<(), ShellError> {
        if self.manager.users().is_empty() {
            writeln!(self.writer, "Nenhum usuário cadastrado.")?;
            return Ok(());
        }

        writeln!(self.writer, "\nConsumos registrados:")?;
        for user in self.manager.users() {
            writeln!(self.writer, "\n{}", user.describe())?;
            if user.records().is_empty() {
                writeln!(self.writer, "  Nenhum consumo registrado")?;
            } else {
                for record in user.records() {
                    writeln!(self.writer, "  - {record}")?;
                }
            }
        }
        Ok(())
    }

    fn show_totals(&mut self) -> Result<(), ShellError> {
        if self.manager.users().is_empty() {
            writeln!(self.writer, "Nenhum usuário cadastrado.")?;
            return Ok(());
        }

        writeln!(self.writer, "\nConsumo total por usuário:")?;
        for user in self.manager.users() {
            writeln!(self.writer, "{}: {}L", user.name(), user.total_consumed())?;
        }
        Ok(())
    }

    fn show_alerts(&mut self) -> Result<(), ShellError> {
        if self.manager.users().is_empty() {
            writeln!(self.writer, "Nenhum usuário cadastrado.")?;
            return Ok(());
        }

        writeln!(self.writer, "\nAlertas de consumo:")?;
        let mut any_alert = false;
        for user in self.manager.users() {
            let alerts = self.manager.evaluate_alerts(user);
            if !alerts.is_empty() {
                any_alert = true;
                writeln!(self.writer, "\n{}:", user.name())?;
                for alert in alerts {
                    writeln!(self.writer, "  {alert}")?;
                }
            }
        }

        if !any_alert {
            writeln!(self.writer, "Nenhum alerta ativo. Consumo dentro do normal.")?;
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> Result<(), ShellError> {
        if self.manager.users().is_empty() {
            writeln!(self.writer, "Nenhum usuário cadastrado.")?;
            return Ok(());
        }

        writeln!(self.writer, "\n=== Estatísticas Detalhadas por Usuário ===")?;
        for user in self.manager.users() {
            let stats = user.statistics();
            writeln!(self.writer, "\n{}:", user.name())?;
            writeln!(self.writer, "  Total consumido: {}L", stats.total)?;
            writeln!(
                self.writer,
                "  Média de consumo: {}L",
                stats.mean.round_dp(2)
            )?;
            writeln!(self.writer, "  Quantidade de registros: {}", stats.count)?;
            if stats.count > 0 {
                writeln!(self.writer, "  Maior consumo: {}L", stats.max)?;
                writeln!(self.writer, "  Menor consumo: {}L", stats.min)?;
            }
        }
        Ok(())
    }

    fn show_system_report(&mut self) -> Result<(), ShellError> {
        let report = self.manager.system_report();

        writeln!(self.writer, "\n=== Relatório Geral do Sistema ===")?;
        writeln!(self.writer, "Total de usuários: {}", report.user_count)?;
        writeln!(
            self.writer,
            "Consumo total do sistema: {}L",
            report.total_system_consumption
        )?;

        if report.user_count > 0 {
            writeln!(
                self.writer,
                "Média de consumo por usuário: {}L",
                report.mean_per_user.round_dp(2)
            )?;
            writeln!(
                self.writer,
                "Usuários com alerta ativo: {}",
                report.users_with_active_alert
            )?;
        }
        Ok(())
    }
}
