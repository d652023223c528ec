use anyhow::Result;
use elemental_duo::engine::game_loop::GameLoop;
use elemental_duo::engine::input::InputFrame;
use elemental_duo::game::levels;
use elemental_duo::game::session::{Session, FIRE, WATER};
use log::info;
use std::time::Duration;

/// Headless demo: runs the tutorial level for ten simulated seconds with a
/// scripted input pattern and logs what the simulation reports.
fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Elemental Duo demo...");

    let level = levels::training_ground();
    let mut session = Session::new(&level)?;
    let mut game_loop = GameLoop::new();

    let mut tick: u64 = 0;
    while tick < 600 && !session.complete && !session.game_over {
        for _ in 0..game_loop.begin_frame() {
            // Both characters run right; a jump every 1.5 seconds clears
            // the pool walls along the way
            let mut frame = InputFrame::right();
            if tick % 90 == 0 {
                frame = frame.merge(InputFrame::jump());
            }
            session.step([frame, frame]);

            for event in session.events() {
                info!("tick {tick}: event {event:?}");
            }
            if tick % 60 == 0 {
                info!(
                    "tick {tick}: fire at {:.2}, water at {:.2}",
                    session.players[FIRE].position,
                    session.players[WATER].position
                );
            }
            tick += 1;
        }
        std::thread::sleep(Duration::from_millis(4));
    }

    info!(
        "demo finished after {} updates: complete={}, game_over={}, gems={:?}",
        game_loop.update_count(),
        session.complete,
        session.game_over,
        session.gems_collected
    );
    Ok(())
}
