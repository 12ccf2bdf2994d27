//! Pixel Brawl Demo
//!
//! Runs a scripted match between the two fighters, logs the event stream,
//! and verifies replay determinism from the recorded inputs.

use anyhow::{bail, Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pixel_brawl::{
    game::events::GameEventData,
    render::{MatchVisuals, PixelBuffer, PoseCategory, Rgba, CANVAS_SIZE},
    replay_match, tick, FighterId, FrameInput, InputRecording, MatchConfig, MatchState, Vec2,
    TICK_DT, TICK_RATE, VERSION,
};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Pixel Brawl v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    let config = MatchConfig::default();
    config.validate().context("invalid match config")?;

    demo_match(&config)
}

/// Run a scripted demo match.
fn demo_match(config: &MatchConfig) -> Result<()> {
    info!("=== Starting Demo Match ===");

    let rng_seed = 12345u64;
    let mut state = MatchState::new(rng_seed, config);
    state.start();

    info!("RNG Seed: {}", rng_seed);
    for id in FighterId::BOTH {
        let fighter = state.fighter(id);
        info!(
            "Fighter {} at ({:.2}, {:.2}) facing {:+}",
            id.index(),
            fighter.position.x,
            fighter.position.y,
            fighter.facing
        );
    }

    // Sprite caches are built once, before the first rendered frame
    let mut visuals = MatchVisuals::new(&state);
    info!("Sprite caches built (20 composites)");
    dump_sprite(visuals.animator(FighterId::P1).sprites().frame(PoseCategory::Idle, 0));

    let mut recordings = [InputRecording::new(rng_seed), InputRecording::new(rng_seed)];
    let max_ticks = 60 * TICK_RATE;
    let mut total_events = 0usize;

    for _ in 0..max_ticks {
        let inputs = scripted_inputs(state.tick, &state);
        recordings[0].record(state.tick, inputs[0]);
        recordings[1].record(state.tick, inputs[1]);

        let result = tick(&mut state, &inputs, config, TICK_DT);
        let frames = visuals.update(&state, config, TICK_DT);
        total_events += result.events.len();

        for event in &result.events {
            info!("event: {}", serde_json::to_string(&event)?);
        }

        // Periodic visual snapshot
        if state.tick % 300 == 0 && state.tick > 0 {
            info!(
                "tick {}: poses {:?}/{:?}, P1 exhaustion {:.1}, P2 hits {}",
                state.tick,
                frames[0].category,
                frames[1].category,
                state.fighter(FighterId::P1).exhaustion,
                state.fighter(FighterId::P2).hits_taken,
            );
        }

        if result.match_ended {
            info!("Match ended at tick {}; winner: {:?}", state.tick, result.winner);
            break;
        }
    }

    info!("=== Match Results ===");
    for id in FighterId::BOTH {
        let fighter = state.fighter(id);
        info!(
            "Fighter {}: {} hits taken, {:.1} exhaustion, final x {:.2}",
            id.index(),
            fighter.hits_taken,
            fighter.exhaustion,
            fighter.position.x,
        );
    }
    info!("Total events: {}", total_events);

    verify_replay(&state, &recordings, config)
}

/// Replay the recorded inputs and check the simulation reproduces itself.
fn verify_replay(
    live: &MatchState,
    recordings: &[InputRecording; 2],
    config: &MatchConfig,
) -> Result<()> {
    info!("=== Verifying Determinism ===");

    let fresh = MatchState::new(live.rng_seed, config);
    let (replayed, events) = replay_match(fresh, recordings, live.tick, config);

    for id in FighterId::BOTH {
        let a = live.fighter(id);
        let b = replayed.fighter(id);
        if a.position != b.position || a.exhaustion != b.exhaustion || a.hits_taken != b.hits_taken
        {
            bail!("replay diverged for fighter {}", id.index());
        }
    }

    let downs = events
        .iter()
        .filter(|e| matches!(e.data, GameEventData::FighterDowned { .. }))
        .count();
    info!("DETERMINISM VERIFIED: replay matches live match ({downs} downs)");
    Ok(())
}

/// Scripted intent: P1 hunts and punches, P2 circles and guards in bursts.
fn scripted_inputs(tick: u32, state: &MatchState) -> [FrameInput; 2] {
    let p1 = state.fighter(FighterId::P1);
    let p2 = state.fighter(FighterId::P2);
    let gap = p2.position.x - p1.position.x;
    let close = gap.abs() <= 1.1;

    let aggressor = FrameInput {
        movement: if close {
            Vec2::ZERO
        } else {
            Vec2::new(gap.signum(), 0.0)
        },
        block_held: false,
        punch_pressed: close && tick % 25 == 0,
    };

    let defender = FrameInput {
        movement: if tick % 240 < 60 {
            Vec2::new(-gap.signum() * 0.6, 0.0)
        } else {
            Vec2::ZERO
        },
        block_held: tick % 120 < 45,
        punch_pressed: close && tick % 75 == 0,
    };

    [aggressor, defender]
}

/// Print a sprite to the log as ASCII art (top row first).
fn dump_sprite(buffer: &PixelBuffer) {
    for y in (0..CANVAS_SIZE).rev() {
        let row: String = (0..CANVAS_SIZE)
            .map(|x| match buffer.pixel(x, y) {
                Rgba { a: 0, .. } => ' ',
                p if p == Rgba::opaque(26, 26, 26) => '@',
                _ => '#',
            })
            .collect();
        info!("{row}");
    }
}
