//! Skirmish - seeded demo engagement
//!
//! Runs a scripted melee fight between two preset combatants and prints
//! each outcome record. The seed makes the whole engagement replayable.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use greysteel::character::{Attributes, Character};
use greysteel::combat::{combat_round, DefenseAction};
use greysteel::equipment::{Armor, Weapon};

#[derive(Parser, Debug)]
#[command(name = "skirmish", about = "Run a seeded demo skirmish")]
struct Args {
    /// Seed for the engagement's die rolls
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Stop after this many rounds even if both combatants stand
    #[arg(long, default_value_t = 20)]
    max_rounds: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("greysteel=info")
        .init();

    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut hero = Character::new(
        "Hero",
        Attributes::new(7, 8, 6, 6, 5, 6, 7, 6, 6),
        6,
        6,
        Weapon::long_sword(),
        Armor::leather(),
    );
    let mut goblin = Character::new(
        "Goblin",
        Attributes::new(4, 7, 4, 5, 5, 4, 3, 6, 3),
        4,
        5,
        Weapon::dagger(),
        Armor::none(),
    );

    println!("{hero}");
    println!("{goblin}");
    println!();

    for round in 1..=args.max_rounds {
        println!("Round {round}:");

        let result = combat_round(&hero, &mut goblin, DefenseAction::Dodge, &mut rng);
        println!("  {result}");
        if goblin.is_dead() {
            println!("  {} has been defeated!", goblin.name);
            return;
        }

        let result = combat_round(&goblin, &mut hero, DefenseAction::Parry, &mut rng);
        println!("  {result}");
        if hero.is_dead() {
            println!("  {} has been defeated!", hero.name);
            return;
        }

        println!(
            "  {}: {} | {}: {}",
            hero.name, hero.wounds, goblin.name, goblin.wounds
        );
    }

    println!("Combat lasted more than {} rounds!", args.max_rounds);
}
