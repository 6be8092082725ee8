use std::str::FromStr;

use anyhow::{bail, Context};
use netwalk::config::{GameConfig, Skill};
use netwalk::solver::AutosolveState;
use netwalk::{Event, Game};
use tracing::info;
use tracing_subscriber::EnvFilter;

// netwalk-solver [skill] [seed]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let skill = match args.next() {
        Some(name) => Skill::from_str(&name).with_context(|| format!("unknown skill {:?}", name))?,
        None => Skill::default(),
    };
    let seed = match args.next() {
        Some(seed) => seed.parse::<u64>().with_context(|| format!("bad seed {:?}", seed))?,
        None => 0,
    };

    let mut game = Game::new(GameConfig { skill, ..Default::default() }, seed)?;
    println!("{} board, seed {}, {} of {} cells unconnected:", skill, seed, game.unconnected_cells(), game.board().active_count());
    print!("{}", game.board());

    let total = game.start_autosolve();
    info!(total, "planned");
    let mut played = 0;
    let mut solved_at = None;
    while let Some(events) = game.step_autosolve() {
        played += 1;
        if events.contains(&Event::Solved) {
            solved_at = Some(played);
        }
    }

    if game.autosolve_state() != AutosolveState::Idle || !game.is_solved() {
        bail!("autosolve stopped after {} of {} moves without solving the board", played, total);
    }

    println!("\nsolved in {} moves{}:", played, match solved_at {
        Some(at) if at < played => format!(" (connected after {})", at),
        _ => String::new(),
    });
    print!("{}", game.board());
    Ok(())
}
