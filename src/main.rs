use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use simplelog::{ConfigBuilder, WriteLogger};

use todos::app::App;
use todos::config::{self, Config};
use todos::terminal::{self, RawMode, StdinSource};
use todos::{handlers, input, ui};

fn main() {
    let config = Config::load().unwrap_or_default();
    init_logging(&config);

    let path = std::env::args()
        .nth(1)
        .map(|arg| config::resolve_path(&arg))
        .or_else(|| config.list_path());

    log::info!("todos {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(config, path) {
        log::error!("fatal: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Writes log records to the configured file. Nothing is logged otherwise,
/// since the terminal itself is in raw mode.
fn init_logging(config: &Config) {
    let Some(path) = config.log_path() else {
        return;
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = WriteLogger::init(config.log_level(), log_config, log_file);
    }
}

fn run(config: Config, path: Option<PathBuf>) -> io::Result<()> {
    let mut raw_mode = RawMode::enable()?;
    let (rows, cols) = terminal::window_size()?;

    let mut app = App::new(config, path, rows, cols)?;
    app.set_status("OK");

    let mut source = StdinSource::default();

    loop {
        let frame = ui::render_frame(&mut app, Instant::now());
        terminal::write_frame(&frame)?;

        let key = input::read_key(&mut source)?;
        handlers::handle_key(&mut app, key);

        if app.should_quit {
            break;
        }
    }

    raw_mode.restore()
}
