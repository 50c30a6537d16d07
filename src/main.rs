// src/main.rs
use clap::Parser;
use quantum_chess::config::{GameConfig, MovePolicy, DEFAULT_CONFIG_FILENAME};
use quantum_chess::controller::{Activation, SelectionController};
use quantum_chess::input::{parse_user_input, Command, UserInput};
use quantum_chess::{GameSession, MoveRecord, Square};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "quantum_chess")]
#[command(about = "Quantum chess on a 10x10 board", long_about = None)]
struct Args {
    /// JSON config file; defaults are used when it does not exist
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILENAME)]
    config: PathBuf,

    /// Seed for collapse sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Only allow the side to move to play generated destinations
    #[arg(long)]
    strict: bool,

    #[arg(long)]
    board_size: Option<i32>,
}

fn load_config(args: &Args) -> Result<GameConfig, Box<dyn Error>> {
    let mut config = GameConfig::load_or_default(&args.config)?;
    if let Some(seed) = args.seed { config.seed = Some(seed); }
    if let Some(size) = args.board_size { config.board_size = size; }
    if args.strict { config.policy = MovePolicy::Strict; }
    config.validate()?;
    Ok(config)
}

fn print_record(game: &GameSession, record: &MoveRecord) {
    let kind = if record.quantum { "split" } else { "move" };
    println!("{}. {:?} {:?} {} to {}", record.ply, record.color, record.kind, kind,
        record.destination.to_notation(game.board_size()));
}

fn print_moves(game: &GameSession, square: Square) {
    let size = game.board_size();
    let Some(id) = game.piece_at(square) else {
        println!("No piece on {}.", square.to_notation(size));
        return;
    };
    match game.possible_moves(id) {
        Ok(moves) if moves.is_empty() => println!("No moves available."),
        Ok(moves) => {
            let list: Vec<String> = moves.iter().map(|sq| sq.to_notation(size)).collect();
            println!("Moves: {}", list.join(" "));
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut game = GameSession::new(&config);
    let mut controller = SelectionController::new();

    println!("==============================");
    println!("|       Quantum Chess        |");
    println!("==============================");
    print_help();
    println!("{}", game);

    'game_loop: loop {
        let size = game.board_size();
        match controller.selected() {
            Some(id) => print!("\n{:?}'s turn ({} selected). Enter target or command: ", game.current_player(), id),
            None => print!("\n{:?}'s turn. Enter move (e.g. b1c3, b1c3~) or command: ", game.current_player()),
        }
        io::stdout().flush()?;

        let mut input_line = String::new();
        match io::stdin().read_line(&mut input_line) {
            Ok(0) => {
                println!("\nEnd of input detected. Quitting game.");
                break 'game_loop;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}. Try again or use 'quit'/'exit'.", e);
                continue 'game_loop;
            }
        }

        let input_trimmed = input_line.trim();
        if input_trimmed.is_empty() { continue 'game_loop; }

        match parse_user_input(input_trimmed, size) {
            Ok(UserInput::Move { from, to, quantum }) => {
                controller.clear();
                match controller.activate(&mut game, from, false) {
                    Ok(Activation::Selected(_)) => {}
                    Ok(_) => {
                        println!("No {:?} piece on {}.", game.current_player(), from.to_notation(size));
                        continue 'game_loop;
                    }
                    Err(e) => { println!("Error: {}", e); continue 'game_loop; }
                }
                match controller.activate(&mut game, to, quantum) {
                    Ok(Activation::Moved(record)) => {
                        print_record(&game, &record);
                        println!("{}", game);
                    }
                    Ok(_) => {}
                    Err(e) => println!("Error making move: {}", e),
                }
            }
            Ok(UserInput::Command(command)) => match command {
                Command::Click(square) => match controller.activate(&mut game, square, false) {
                    Ok(Activation::Selected(id)) => println!("Selected {}.", id),
                    Ok(Activation::Moved(record)) => {
                        print_record(&game, &record);
                        println!("{}", game);
                    }
                    Ok(Activation::Ignored) => println!("Nothing to select on {}.", square.to_notation(size)),
                    Err(e) => println!("Error making move: {}", e),
                },
                Command::Moves(square) => print_moves(&game, square),
                Command::Board => println!("{}", game),
                Command::State => println!("{}", serde_json::to_string_pretty(&game.snapshot())?),
                Command::History => {
                    if game.history().is_empty() { println!("No moves yet."); }
                    for record in game.history() { print_record(&game, record); }
                }
                Command::Help => print_help(),
                Command::Quit => {
                    println!("Exiting game.");
                    break 'game_loop;
                }
            },
            Err(e) => println!("Input Error: {}", e),
        }
    }

    println!("\nGame session finished.");
    Ok(())
}

/// Prints available commands.
fn print_help() {
    println!("\nAvailable Commands:");
    println!("  <from><to>     Classical move, e.g. b1c3. Collapses the piece first.");
    println!("  <from><to>~    Quantum split, e.g. b1c3~. The piece also stays where it was.");
    println!("                 <from> may be any square holding one of the piece's states.");
    println!("  click <sq>     Activate a single cell: select a piece, or move the selected one.");
    println!("  moves <sq>     List destinations for the piece on a square.");
    println!("  board          Show the board.");
    println!("  state          Print the session as JSON.");
    println!("  history        List moves made so far.");
    println!("  help           Show this help message.");
    println!("  quit / exit    Exit the game.");
    println!();
}
