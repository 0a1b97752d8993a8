use clap::Parser;
use triadeck::{first_set_among, rng_from_seed, Card};

#[derive(Debug, Parser)]
#[command(name = "puzzle", about = "Practice-puzzle generator: random cards with set hints")]
struct Args {
    /// RNG seed (a fixed seed deals the same puzzle)
    #[arg(long, default_value_t = 0x00C0_FFEEu64)]
    seed: u64,

    /// Number of distinct cards to deal
    #[arg(long, default_value_t = 12)]
    cards: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.cards > 81 {
        return Err(format!(
            "a puzzle can hold at most 81 distinct cards, got {}",
            args.cards
        )
        .into());
    }
    let mut rng = rng_from_seed(args.seed);

    // Rejection-sample until the deal is duplicate-free; keys are canonical.
    let mut dealt: Vec<Card> = Vec::with_capacity(args.cards);
    while dealt.len() < args.cards {
        let card = Card::random(&mut rng);
        if !dealt.contains(&card) {
            dealt.push(card);
        }
    }

    for (i, card) in dealt.iter().enumerate() {
        println!("[puzzle] Card {i:>2}: {}", card.key());
    }

    let refs: Vec<&Card> = dealt.iter().collect();
    match first_set_among(&refs) {
        Some([a, b, c]) => {
            println!(
                "[puzzle] Set found: {} / {} / {}",
                a.key(),
                b.key(),
                c.key()
            );
            let eval = Card::evaluate_set([a, b, c]);
            for (name, entry) in ["color", "shape", "fill", "count"].iter().zip(eval) {
                println!("[puzzle]   {name}: {entry:?}");
            }
            let third = Card::completing_card(a, b);
            println!(
                "[puzzle] Hint: {} and {} complete with {}.",
                a.key(),
                b.key(),
                third.key()
            );
        }
        None => println!("[puzzle] No set among the dealt cards."),
    }

    Ok(())
}
