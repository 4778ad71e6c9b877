use dasher::assets::AssetSet;
use dasher::build_info;
use dasher::core::constants::LOG_FILENAME;
use dasher::core::{run, settle, GameConfig, GameSession, SessionState};
use dasher::ui::TerminalFrontend;
use dasher::utils::persistence::data_path;
use env_logger::{Env, Target};
use std::fs::File;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Dasher - side-scrolling runner\n");
                println!("Usage: dasher [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls: Space/Up to jump, Esc/q to quit.");
                println!("Settings are read from ~/.dasher/config.json if present.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'dasher --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();

    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not load config: {}", e);
            std::process::exit(1);
        }
    };
    let target_fps = config.target_fps;
    let mut session = GameSession::new(config, AssetSet::default());

    let mut frontend = TerminalFrontend::new(target_fps)?;
    let outcome = run(&mut frontend, &mut session);
    let summary = settle(outcome, frontend.restore())?;

    let result = match summary.final_state {
        SessionState::Won => "won",
        SessionState::Lost => "lost",
        SessionState::Running => "quit",
    };
    println!(
        "Run {} after {:.1}s: cleared {}/{} obstacles.",
        result,
        session.elapsed,
        summary.cleared,
        session.obstacles.len()
    );

    Ok(())
}

/// Log to `~/.dasher/dasher.log`; the terminal belongs to the game while it
/// runs. `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let file = match data_path(LOG_FILENAME).and_then(File::create) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return;
        }
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
