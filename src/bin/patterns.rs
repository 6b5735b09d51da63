use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use design_patterns::console;
use design_patterns::measurements::RandomMeasurements;
use design_patterns::{decorator, logging, observer, strategy, DemoConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "patterns", about = "Run the decorator, observer and strategy demos")]
struct Cli {
    /// Demo to run
    #[arg(value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// TOML file with demo settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of observer rounds
    #[arg(short, long)]
    iterations: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    Decorator,
    Observer,
    Strategy,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Decorator,
    Observer,
    Strategy,
}

impl Demo {
    fn sections(self) -> &'static [Section] {
        match self {
            Demo::All => &[Section::Decorator, Section::Observer, Section::Strategy],
            Demo::Decorator => &[Section::Decorator],
            Demo::Observer => &[Section::Observer],
            Demo::Strategy => &[Section::Strategy],
        }
    }
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Section::Decorator => "Decorator Pattern",
            Section::Observer => "Observer Pattern",
            Section::Strategy => "Strategy Pattern",
        }
    }

    fn run(self, config: &DemoConfig, console: &console::Console) -> Result<bool> {
        let flag = match self {
            Section::Decorator => decorator::run_with(&config.decorator, console)?,
            Section::Observer => {
                let mut source = RandomMeasurements::from_config(&config.observer)?;
                observer::run_with(&config.observer, &mut source, console)?
            }
            Section::Strategy => strategy::run_with(console)?,
        };
        Ok(flag)
    }
}

fn load_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(iterations) = cli.iterations {
        config.observer.iterations = iterations;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    logging::init(&config.log_level)?;

    let console = console::stdout();
    for (index, &section) in cli.demo.sections().iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", format!("=== {} ===", section.title()).bold().cyan());
        let flag = section
            .run(&config, &console)
            .with_context(|| format!("{} demo failed", section.title()))?;
        // The flag is handed back for a menu driver; nothing here acts on it.
        debug!(demo = section.title(), flag, "demo finished");
    }
    Ok(())
}
