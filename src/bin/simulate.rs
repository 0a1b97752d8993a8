use clap::Parser;
use triadeck::{rng_from_seed, Deck, PlayArea};

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Headless seeded playthrough of the set engine")]
struct Args {
    /// RNG seed driving the shuffle and any recycling (deterministic)
    #[arg(long, default_value_t = 0x00C0_FFEEu64)]
    seed: u64,

    /// Return matched sets to the deck at random positions
    #[arg(long)]
    recycle: bool,

    /// Stop after this many matched sets (recycling games never run dry)
    #[arg(long, default_value_t = 200)]
    max_rounds: u32,

    /// Emit a single JSON summary line instead of the text log
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut rng = rng_from_seed(args.seed);

    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let mut board = PlayArea::with_recycling(deck, args.recycle);

    board.fill();
    if !args.json {
        println!(
            "[simulate] Board filled: {}x{}, {} in play, {} in deck.",
            board.width(),
            board.height(),
            board.cards_in_play(),
            board.cards_in_deck()
        );
    }

    let mut rounds: u32 = 0;
    while rounds < args.max_rounds {
        let Some(set) = board.first_set() else { break };
        rounds += 1;
        if !args.json {
            println!(
                "[simulate] Round {}: matched {} / {} / {}",
                rounds,
                set[0].key(),
                set[1].key(),
                set[2].key()
            );
        }
        board.remove_set(&set, &mut rng);
        board.fill();
    }

    if args.json {
        let summary = serde_json::json!({
            "seed": args.seed,
            "recycle": args.recycle,
            "rounds": rounds,
            "cards_in_play": board.cards_in_play(),
            "cards_in_deck": board.cards_in_deck(),
            "solvable": board.has_sets(),
        });
        println!("{summary}");
    } else {
        println!(
            "[simulate] Finished after {} rounds: {} left in play, {} in deck.",
            rounds,
            board.cards_in_play(),
            board.cards_in_deck()
        );
    }

    Ok(())
}
