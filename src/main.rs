use clap::Parser;
use deck_sim::{
    format_decklist, format_hand, save_hand_images, DeckError, DeckResult, ImageCache,
    LookupStrategy, ScryfallClient, Simulator, SimulatorConfig,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// MTG opening hand simulator - draws hands from a decklist using Scryfall card data
#[derive(Parser, Debug)]
#[command(name = "deck_sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Decklist file, one `<count> <card name>` per line
    decklist: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of cards per hand
    #[arg(long)]
    hand_size: Option<usize>,

    /// Number of hands to draw (each redraw shuffles the last hand back in)
    #[arg(short, long, default_value_t = 1)]
    draws: usize,

    /// Print the full decklist after drawing
    #[arg(long, default_value_t = false)]
    show_decklist: bool,

    /// Read commands from stdin instead of exiting after the draws
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Save resized images of every drawn hand into this directory
    #[arg(long)]
    save_images: Option<PathBuf>,

    /// RNG seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Scryfall API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Look up every copy of a card separately
    #[arg(long, default_value_t = false)]
    per_copy_lookups: bool,
}

impl Args {
    fn to_config(&self) -> DeckResult<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::load(path)?,
            None => SimulatorConfig::default(),
        };
        if let Some(hand_size) = self.hand_size {
            config.hand_size = hand_size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(url) = &self.api_url {
            config.scryfall_base_url = url.clone();
        }
        if self.per_copy_lookups {
            config.lookup_strategy = LookupStrategy::PerCopy;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Front end state: the simulator plus image output settings
struct App<'a> {
    sim: Simulator<&'a ScryfallClient>,
    client: &'a ScryfallClient,
    images: ImageCache,
    image_dir: Option<PathBuf>,
    hands_drawn: usize,
}

impl App<'_> {
    fn load(&mut self, path: &Path) -> DeckResult<()> {
        let drawn = self.sim.load_file(path)?.len();
        self.hands_drawn = 0;
        if drawn > 0 {
            self.show_hand();
        } else {
            log::info!("Decklist {} has no cards", path.display());
        }
        Ok(())
    }

    fn draw(&mut self) {
        if self.sim.draw().is_some() {
            self.show_hand();
        } else {
            log::debug!("Draw requested with no cards to draw");
        }
    }

    fn show_hand(&mut self) {
        self.hands_drawn += 1;
        println!("Hand #{}", self.hands_drawn);
        print!("{}", format_hand(self.sim.hand(), &self.sim.hand_summary()));

        if let Some(dir) = &self.image_dir {
            let dir = dir.join(format!("hand_{}", self.hands_drawn));
            if let Err(e) = save_hand_images(&mut self.images, self.client, self.sim.hand(), &dir) {
                log::warn!("Failed to save hand images to {}: {}", dir.display(), e);
            }
        }
    }

    fn show_decklist(&self) {
        let rows = self.sim.full_decklist();
        if !rows.is_empty() {
            print!("{}", format_decklist(&rows));
        }
    }
}

const HELP: &str = "Commands:
  draw | d          shuffle the last hand back in and draw a new one
  deck | v          show the full decklist
  load <path>       load another decklist
  help | h          show this help
  quit | q          exit";

fn interactive(app: &mut App<'_>) -> io::Result<()> {
    println!("{HELP}");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "draw" | "d" => app.draw(),
            "deck" | "v" => app.show_decklist(),
            "load" if !rest.trim().is_empty() => {
                if let Err(e) = app.load(Path::new(rest.trim())) {
                    log::error!("Failed to load decklist: {}", e);
                    eprintln!("Error: {e}");
                }
            }
            "help" | "h" => println!("{HELP}"),
            "quit" | "q" | "exit" => return Ok(()),
            other => println!("Unknown command: {other} (try `help`)"),
        }
    }
}

fn run(args: Args) -> DeckResult<()> {
    let config = args.to_config()?;
    let client = ScryfallClient::with_base_url(&config.scryfall_base_url)
        .user_agent(config.user_agent.clone());

    log::info!(
        "Using Scryfall at {} (hand size {})",
        client.base_url(),
        config.hand_size
    );

    let mut app = App {
        sim: Simulator::new(&client, config),
        client: &client,
        images: ImageCache::new(),
        image_dir: args.save_images.clone(),
        hands_drawn: 0,
    };

    if let Some(path) = &args.decklist {
        app.load(path)?;
        for _ in 1..args.draws {
            println!();
            app.draw();
        }
        if args.show_decklist {
            println!();
            app.show_decklist();
        }
    } else if !args.interactive {
        return Err(DeckError::Config(
            "no decklist given (pass a file or use --interactive)".to_string(),
        ));
    }

    if args.interactive {
        interactive(&mut app)?;
    }
    Ok(())
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=deck_sim=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting deck_sim");

    if let Err(e) = run(args) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
