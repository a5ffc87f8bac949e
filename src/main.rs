// Baguette: C ↔ C🥖 keyword translator

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use baguette::cli::{self, Command};
use baguette::keywords::{self, Direction};
use baguette::ui::App;
use baguette::{config, error, info, logging, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", cli::usage());
            process::exit(1);
        }
    };

    logging::initialize(options.verbosity);
    let dictionary = keywords::builtin();

    match options.command {
        Command::Help => println!("{}", cli::usage()),
        Command::Version => println!("{} {}", config::APP_NAME, config::VERSION),
        Command::Keywords { category } => {
            print!("{}", cli::keyword_listing(dictionary, category));
        }
        Command::Convert {
            direction,
            input,
            output,
        } => {
            info!("{}: {} -> {}", direction, input.display(), output.display());

            let translation = match cli::convert_file(dictionary, direction, &input, &output) {
                Ok(translation) => translation,
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            };

            for collision in &translation.collisions {
                warn!(
                    "{}:{}: identifier '{}' is a {} keyword and will not survive the way back",
                    input.display(),
                    collision.location,
                    collision.word,
                    collision.vocabulary
                );
            }
            info!("{} keywords replaced", translation.replaced);

            let verb = match direction {
                Direction::ToTarget => "Translated",
                Direction::ToOrigin => "Compiled",
            };
            println!("{} {} to {}", verb, input.display(), output.display());
        }
        Command::Preview { input, direction } => {
            let source = match cli::read_source(&input) {
                Ok(source) => source,
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            };

            let app = App::new(dictionary, source, direction);
            run_preview(app)?;
        }
    }

    Ok(())
}

fn run_preview(mut app: App<'_>) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("{:?}", err);
    }

    Ok(())
}
