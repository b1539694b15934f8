//! staff-client 入口
//!
//! 终端 UI：列表、新增、编辑、删除员工

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

use staff_client::app::handle_key;
use staff_client::logger::init_file_logger;
use staff_client::terminal::{self, Tui};
use staff_client::{ClientConfig, Command, DirectoryApp, EmployeeService, HttpClient, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    let _guard = init_file_logger(&config.log_dir);
    let client = HttpClient::new(&config)?;
    tracing::info!(base_url = %config.base_url, "Staff client starting");

    let mut terminal = terminal::init()?;

    let mut app = DirectoryApp::new();
    let res = run_app(&mut terminal, &mut app, &client).await;

    terminal::restore()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "Terminal loop failed");
    }
    tracing::info!("Staff client stopped");
    Ok(res?)
}

async fn run_app(
    terminal: &mut Tui,
    app: &mut DirectoryApp,
    service: &dyn EmployeeService,
) -> io::Result<()> {
    run_command(terminal, app, service, Command::Refresh).await?;

    loop {
        terminal.draw(|f| ui::render(f, app))?;
        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && let Some(command) = handle_key(app, key)
        {
            run_command(terminal, app, service, command).await?;
        }
    }
}

/// Show the loading line, then run the command
async fn run_command(
    terminal: &mut Tui,
    app: &mut DirectoryApp,
    service: &dyn EmployeeService,
    command: Command,
) -> io::Result<()> {
    if command != Command::Quit {
        app.loading = true;
        terminal.draw(|f| ui::render(f, app))?;
    }
    app.dispatch(command, service).await;
    Ok(())
}
