mod app;
mod domain;
mod error;
mod input;
mod notifications;
mod persistence;
mod quotes;
mod speech;
mod store;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{init_local_buddy, load_snapshot, snapshot_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use speech::Speaker;
use std::io;
use store::TaskStore;

#[derive(Parser)]
#[command(name = "buddy")]
#[command(about = "A friendly terminal study buddy with spoken feedback and a focus timer", long_about = None)]
struct Cli {
    /// Disable spoken feedback
    #[arg(long)]
    mute: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .buddy directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .buddy directory
            let buddy_dir = init_local_buddy()?;
            println!("Initialized buddy directory: {}", buddy_dir.display());
            println!();
            println!("Buddy will now use this local directory for task storage.");
            println!("Run 'buddy' to start studying.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui(cli.mute)
        }
    }
}

fn run_tui(mute: bool) -> Result<()> {
    // Load the task snapshot (absent file means an empty list)
    let snapshot_path = snapshot_file()?;
    eprintln!("Using snapshot file: {}", snapshot_path.display());
    let tasks = load_snapshot(&snapshot_path)?;

    let speaker = if mute {
        Speaker::disabled()
    } else {
        Speaker::spawn()
    };

    // Create app state
    let mut app = AppState::new(TaskStore::new(tasks), snapshot_path, speaker);
    app.greet();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit (mutations persist as they happen; this is a last
    // full write in case the snapshot path changed underneath us)
    if let Err(e) = app.save() {
        eprintln!("Error saving tasks: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = timer::ui_tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so the countdown pane keeps refreshing
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Surface timer completion once the ticker finishes
        app.poll_timer();
    }
}
