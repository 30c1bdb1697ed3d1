//! 互動式選單進入點

use std::io;

use anyhow::Result;

use aqua::shell::Shell;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
