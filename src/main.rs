use clap::Parser;
use frax::{Config, Fraction, JsonSource, SeedSource, Searches, UserSource};

#[derive(Parser)]
#[command(name = "frax", about = "frax — fraction queries over a user roster")]
struct Cli {
    /// Write debug logs to /tmp/frax-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Roster file (JSON array of users); overrides the configured one.
    #[arg(long)]
    users: Option<std::path::PathBuf>,

    /// User id for the addition query.
    #[arg(long, default_value = "4")]
    id: String,

    /// Given name for the subtraction query.
    #[arg(long, default_value = "Paula")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/frax-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("frax debug log started — tail -f /tmp/frax-debug.log");
    }

    let config = Config::load()?;

    let source: Box<dyn UserSource> = match &cli.users {
        Some(path) => Box::new(JsonSource::open(path)?),
        None if !config.data.users_file.is_empty() => {
            Box::new(JsonSource::open(&config.data.users_file)?)
        }
        None => Box::new(SeedSource::builtin()),
    };
    let searches = Searches::new(source);

    let render = |fraction: Option<Fraction>| match fraction {
        Some(fraction) if config.output.show_decimal => format!(
            "{fraction} ({:.prec$})",
            fraction.decimal(),
            prec = config.output.decimal_places
        ),
        Some(fraction) => fraction.to_string(),
        None => "no value".to_string(),
    };

    let sum = searches.find_fraction_addition_by_user_id(Some(&cli.id))?;
    println!("addition for id {:?}: {}", cli.id, render(sum));

    let ids: Vec<String> = searches.find_user_id_by_some_proper_fraction().collect();
    println!("ids with some proper fraction: {}", ids.join(", "));

    let family_names: Vec<String> = searches
        .find_user_family_name_by_some_improper_fraction()
        .collect();
    println!(
        "family names with some improper fraction: {}",
        family_names.join(", ")
    );

    let difference = searches.find_fraction_subtraction_by_user_name(Some(&cli.name))?;
    println!("subtraction for name {:?}: {}", cli.name, render(difference));

    Ok(())
}
