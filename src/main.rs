use std::{fs, io, path::PathBuf};

use clap::Parser;
use minic::{
    console::Console,
    interpreter::Interpreter,
    session::{DEFAULT_PROMPT, SessionConfig, run_script, run_session},
};
use tracing_subscriber::EnvFilter;

/// minic is an interactive interpreter for a minimal C-like language with
/// `int` and `string` variables, `printf` and `scanf`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the lines of this file instead of starting an interactive
    /// session. `scanf` still reads from standard input.
    script: Option<PathBuf>,

    /// The prompt shown before each line of an interactive session.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Logs every statement as it is parsed. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// Prints diagnostics without colour.
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), !args.no_color);
    let mut interpreter = Interpreter::new();

    let result = if let Some(path) = &args.script {
        let source = fs::read_to_string(path).unwrap_or_else(|_| {
                                                  eprintln!("Failed to read the script '{}'. Perhaps this file does not exist?",
                                                            path.display());
                                                  std::process::exit(1);
                                              });
        run_script(&mut console, &mut interpreter, &source)
    } else {
        let config = SessionConfig { prompt: args.prompt };
        run_session(&mut console, &mut interpreter, &config)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Filter used when `RUST_LOG` is unset.
///
/// Diagnostics are already printed by the console, so their `warn!` copies
/// only show up with `--verbose`.
const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "error" }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// [`default_directive`].
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                        EnvFilter::new(default_directive(verbose))
                                                    });

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}
