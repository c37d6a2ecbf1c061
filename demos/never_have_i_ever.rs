//! Never Have I Ever
//!
//! This example plays a few rounds of Never Have I Ever against the round
//! machine and a small content pool.
//!
//! Key concepts:
//! - Startup validation of every game table
//! - Table-driven transitions and rejected moves
//! - Content rotation with no repeats until a mode runs dry
//! - Mode fallback to "original"
//!
//! Run with: cargo run --example never_have_i_ever

use party_rounds::content::{ContentPool, Rotation};
use party_rounds::games::{NeverHaveIEver, NeverHaveIEverPhase as Nhie, Reaction, Statement};
use party_rounds::{validate_catalog, GameConfig, Session};

const POOL: &str = r#"{
    "original": [
        { "id": "o1", "text": "Never have I ever sung karaoke" },
        { "id": "o2", "text": "Never have I ever missed a flight" },
        { "id": "o3", "text": "Never have I ever eaten a bug" }
    ],
    "travel": [
        { "id": "t1", "text": "Never have I ever slept in an airport", "intensity": 2 }
    ]
}"#;

fn main() {
    println!("=== Never Have I Ever ===\n");

    validate_catalog().unwrap();
    println!("All game tables validated\n");

    let config = GameConfig {
        seed: Some(7),
        ..GameConfig::default()
    };
    let pool: ContentPool<Statement> = ContentPool::from_json_with(POOL, &config).unwrap();

    let mut session = Session::new();
    let sam = session.add_player("Sam").unwrap();
    session.add_player("Alex").unwrap();
    session.ensure_enough_players(2).unwrap();

    let mut rotation = Rotation::new(&pool, "travel", config.rng());
    let mut machine = NeverHaveIEver::new();

    println!("Initial phase: {}", machine.current());
    println!(
        "Skipping ahead to NEXT_ROUND: {}\n",
        machine.transition(Nhie::NextRound).unwrap_err()
    );

    for round in 0..4 {
        machine = machine.transition(Nhie::ShowStatement).unwrap();
        let statement = rotation.next_item();
        println!("Round {}: {}", machine.round(), statement.text);

        // Alternate between owning up with a story and taking the penalty.
        let reaction = if round % 2 == 0 {
            Reaction::TellStory
        } else {
            Reaction::TakePenalty
        };
        machine = machine
            .transition(Nhie::PlayerReaction)
            .and_then(|m| m.transition(reaction.consequence()))
            .and_then(|m| m.transition(Nhie::NextRound))
            .unwrap();
        if reaction == Reaction::TellStory {
            session.adjust_score(sam, 1).unwrap();
        }
        println!("  -> {}", machine.previous().map(|p| p.to_string()).unwrap_or_default());

        if round == 1 {
            println!("  (switching to the unknown 'spicy' mode; falls back to original)");
            rotation.set_mode("spicy");
        }
    }

    machine = machine.transition(Nhie::Exit).unwrap();
    println!("\nFinal phase: {} (finished: {})", machine.current(), machine.is_finished());
    println!("Path: {:?}", machine.history().path());
    println!("Sam's score: {}", session.player(sam).unwrap().score);

    println!("\n=== Example Complete ===");
}
