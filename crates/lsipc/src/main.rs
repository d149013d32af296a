use std::env;
use std::io;
use std::process::ExitCode;

use env_logger::Env;
use lsipc::{cli, run, Config, LsipcError, RunContext};
use lsipc_sysv::{SystemDirectory, SysvSource};
use terminal_size::{terminal_size, Width};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or("LSIPC_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let args = match cli::parse_from(env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lsipc: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &cli::Cli) -> Result<(), LsipcError> {
    let mut config = Config::from_cli(args)?;
    let width = terminal_size().map(|(Width(w), _)| usize::from(w));
    config.render = config.render.term_width(width);

    let source = SysvSource::with_root(cli::procfs_root());
    log::debug!("reading IPC state from {}", source.root().display());

    let ctx = RunContext::new(config.time_mode, config.bytes, config.numeric_perms);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();
    run(&config, &ctx, &source, &SystemDirectory, &mut out, &mut err)
}
