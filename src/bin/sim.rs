//! Plays one complete single-player match with an AI planner standing in
//! for player 1 and prints a JSON summary.

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    init_logging, AiPlanner, GameEngine, GameEvent, Phase, PlayerCount, PlayerId,
};
use serde_json::json;

/// Upper bound on player 1 turns; a board has 100 cells.
const MAX_TURNS: usize = 100;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <engine-seed> <player-seed>", args[0]);
        std::process::exit(1);
    }
    let engine_seed: u64 = args[1].parse()?;
    let player_seed: u64 = args[2].parse()?;

    let mut engine = GameEngine::with_rng(PlayerCount::One, SmallRng::seed_from_u64(engine_seed));
    let mut rng = SmallRng::seed_from_u64(player_seed);
    let mut planner = AiPlanner::new();

    engine.auto_place_fleet()?;
    engine.confirm_fleet()?;

    let mut shots = [0usize; 2];
    let mut hits = [0usize; 2];
    for _ in 0..MAX_TURNS {
        engine.ready()?;
        let knowledge = engine.knowledge_snapshot(PlayerId::One);
        let at = planner
            .choose_shot(&knowledge, &mut rng)
            .ok_or_else(|| anyhow::anyhow!("player 1 has nothing left to shoot"))?;
        let outcome = engine.take_shot(at)?;
        planner.record(&engine.knowledge_snapshot(PlayerId::One), &outcome);
        if engine.phase() != Phase::Finished {
            engine.end_turn()?;
        }
        for event in engine.drain_events() {
            if let GameEvent::ShotResolved { player, outcome } = event {
                shots[player.index()] += 1;
                hits[player.index()] += outcome.hit as usize;
            }
        }
        if engine.phase() == Phase::Finished {
            break;
        }
    }

    let state = engine.match_state();
    let winner = state.winner.map(|w| match w {
        PlayerId::One => "player1",
        PlayerId::Two => "player2",
    });
    let result = json!({
        "player1": {"shots": shots[0], "hits": hits[0], "ships_left": state.ships_remaining[0]},
        "player2": {"shots": shots[1], "hits": hits[1], "ships_left": state.ships_remaining[1]},
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
