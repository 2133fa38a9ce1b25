use clap::Parser;

use lectern_core::StateFile;

mod command;
mod input;
mod session;
mod ui;

use input::TerminalInput;
use session::{Clock, Session, SystemClock};

/// Lectern -- interactive lecture progress tracker.
///
/// No flags, no subcommands: running the binary enters the interactive
/// session and every command is a token typed at the prompt.
#[derive(Parser)]
#[command(name = "lectern", version, about = "Interactive lecture progress tracker")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    let store = match StateFile::default_location() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let clock = SystemClock;
    let tracker = store.load(clock.today());
    let mut session = Session::new(tracker, TerminalInput::new(), clock);
    let result = session.run(&store);

    // The session hides the cursor while rendering; always hand the terminal
    // back in a usable state.
    ui::show_cursor();

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Logging is off unless LECTERN_LOG asks for it, keeping the interactive
/// screen clean. `LECTERN_LOG=debug lectern 2>lectern.log` to trace a run.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("LECTERN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
