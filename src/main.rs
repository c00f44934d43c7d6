mod engine;
mod error;
mod games;
mod i18n;

use clap::{Parser, Subcommand};
use error::AppError;
use games::memory::{MemoryArgs, MemoryConfig};

#[derive(Parser)]
#[command(name = "memory-pairs", version, about = "Card-pairs memory game for the terminal")]
#[command(after_help = "Set MEMORY_LANG to pick the default interface language.")]
struct Cli
{
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command
{
    /// List available games
    List,
    /// Play the memory game
    Memory(MemoryArgs),
}

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError>
{
    let cli = Cli::parse();
    match cli.command {
        None => interactive_menu(),
        Some(Command::List) => {
            list_games();
            Ok(())
        }
        Some(Command::Memory(args)) => games::memory::run_with_config(MemoryConfig::from_args(args)),
    }
}

fn run_game(name: &str) -> Result<(), AppError>
{
    match name {
        "memory" => games::memory::run_with_config(MemoryConfig::from_args(MemoryArgs::default())),
        _ => Err(AppError::UnknownGame(name.to_string())),
    }
}

fn interactive_menu() -> Result<(), AppError>
{
    let registry = games::registry();
    println!("memory-pairs");
    println!();
    println!("Select a game:");
    for (idx, game) in registry.iter().enumerate() {
        println!("  {}. {} - {}", idx + 1, game.name, game.description);
    }
    println!();
    print!("Enter number or name (default 1, q to quit): ");
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let choice = input.trim();

    if choice.is_empty() {
        return run_game(registry[0].name);
    }
    if choice.eq_ignore_ascii_case("q") {
        return Ok(());
    }
    if let Ok(index) = choice.parse::<usize>() {
        if index >= 1 && index <= registry.len() {
            return run_game(registry[index - 1].name);
        }
    }

    for game in &registry {
        if game.name.eq_ignore_ascii_case(choice) {
            return run_game(game.name);
        }
    }

    Err(AppError::InvalidSelection)
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<10} - {}", game.name, game.description);
    }
}
