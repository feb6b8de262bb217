use ai_query::MissingArgument;
use env_logger::Env;
use std::{env, io, process};

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_LEVEL)).init();

    let args: Vec<_> = env::args_os().skip(1).collect();
    log::debug!("Started with {} argument(s)", args.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match ai_query::echo(args, &mut out) {
        Err(err) if err.downcast_ref::<MissingArgument>().is_some() => {
            process::exit(MissingArgument::EXIT_CODE)
        }
        result => result,
    }
}
