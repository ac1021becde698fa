use clap::Parser;

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::rc::Rc;

use sigtrace_config::{SharedConfig, toml_config};
use sigtrace_core::{Direction, RadioMessage, debug};
use sigtrace_engine::{CellTally, ChannelDescriptionParser, Engine, MessageSink, Session, SessionStore};

mod trace_line;
use trace_line::TraceLine;

/// Prints everything the engine delivers to stdout
struct PrintingSink {
    sessions: usize,
}

impl MessageSink for PrintingSink {
    fn send_message(&mut self, msg: RadioMessage) {
        println!("{}", msg);
    }

    fn send_llc(&mut self, frame: &[u8], dir: Direction) {
        println!("LLC {} {}", dir, hex::encode(frame));
    }

    fn send_session(&mut self, session: Session) {
        self.sessions += 1;
        println!("=== {}", session);
    }
}

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> SharedConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Cellular signalling trace replay",
    long_about = "Replays a text trace of captured control channel frames through the sigtrace engine"
)]
struct Args {
    /// Trace file
    #[arg(help = "Text trace, one frame per line: <gsm|umts|lte> <sacch|sdcch|facch|bcch> <ul|dl> <fn> <hex> [l3]")]
    trace: String,

    #[arg(short = 'c', long = "config", help = "TOML engine config")]
    config: Option<String>,

    #[arg(short = 'l', long = "logfile", help = "Verbose log file, overrides debug_log from the config")]
    logfile: Option<String>,
}

fn main() {
    eprintln!("[+] sigtrace trace replay");

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => load_config_from_toml(path),
        None => SharedConfig::default(),
    };
    let logfile = args.logfile.clone().or_else(|| cfg.config().debug_log.clone());
    let _log_guard = match debug::setup_logging_default(logfile) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: cannot open log file: {}", e);
            std::process::exit(1);
        }
    };

    let file = match File::open(&args.trace) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: cannot open trace {}: {}", args.trace, e);
            std::process::exit(1);
        }
    };

    let tally = Rc::new(RefCell::new(CellTally::default()));
    let sink = Rc::new(RefCell::new(PrintingSink { sessions: 0 }));
    let mut engine = Engine::new(cfg)
        .with_sink(Box::new(SharedSink(sink.clone())))
        .with_cell_observer(Box::new(tally.clone()))
        .with_assignment_parser(Box::new(ChannelDescriptionParser));
    let mut store = SessionStore::new();

    let mut frames = 0usize;
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error: reading {} failed: {}", args.trace, e);
                std::process::exit(1);
            }
        };
        let msg = match TraceLine::parse(&line).and_then(|l| l.map(TraceLine::into_message).transpose()) {
            Ok(Some(msg)) => msg,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("line {}: {}", lineno + 1, e);
                continue;
            }
        };
        engine.handle_radio_msg(&mut store, msg);
        frames += 1;
    }
    engine.finish(&mut store);

    let tally = tally.borrow();
    eprintln!("[+] {} frames, {} transactions", frames, sink.borrow().sessions);
    for (label, count) in &tally.sysinfo {
        eprintln!("    {:<20} {}", label, count);
    }
}

/// Keeps the sink readable after handing it to the engine
struct SharedSink(Rc<RefCell<PrintingSink>>);

impl MessageSink for SharedSink {
    fn send_message(&mut self, msg: RadioMessage) {
        self.0.borrow_mut().send_message(msg);
    }

    fn send_llc(&mut self, frame: &[u8], dir: Direction) {
        self.0.borrow_mut().send_llc(frame, dir);
    }

    fn send_session(&mut self, session: Session) {
        self.0.borrow_mut().send_session(session);
    }
}
