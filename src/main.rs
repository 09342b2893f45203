//! Fruit Slice headless entry point
//!
//! Runs a seeded game with the autopilot player through the fixed-step
//! driver, then stores the final score.

use fruit_slice::audio::CueMixer;
use fruit_slice::demo::DemoPlayer;
use fruit_slice::effects::EffectTracker;
use fruit_slice::persistence::JsonScoreFile;
use fruit_slice::sim::{FrameClock, Game, GameEvent, PresentationSink};
use fruit_slice::{Settings, Tuning};

/// Host frame length (60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Simulated seconds before the demo gives up
const DEMO_SECONDS: f32 = 180.0;

fn main() {
    env_logger::init();
    log::info!("Fruit Slice (headless) starting...");

    let data_dir = std::env::temp_dir();
    let settings = Settings::load(&data_dir.join("fruit_slice_settings.json"));
    let score_file = JsonScoreFile::new(data_dir.join("fruit_slice_score.json"));

    let seed: u64 = rand::random();
    let mut game = Game::new(Tuning::default(), seed).with_score_sink(Box::new(score_file));
    log::info!("Game initialized with seed: {}", seed);
    log::info!("Previous score: {}", game.saved_score());

    let mut clock = FrameClock::new();
    let mut player = DemoPlayer::new(300.0, 7);
    let mut visuals = EffectTracker::new(settings.clone());
    let mut mixer = CueMixer::new(settings);
    let mut cues_played = 0usize;

    game.start();
    let frames = (DEMO_SECONDS / FRAME_DT) as u32;
    for _ in 0..frames {
        clock.advance(&mut game, FRAME_DT);
        player.act(&mut game);

        for event in game.drain_events() {
            match &event {
                GameEvent::GameEnded { score } => log::info!("Game over! Score: {}", score),
                GameEvent::LivesChanged(lives) => log::debug!("Lives: {}", lives),
                _ => {}
            }
            visuals.on_event(&event);
            mixer.on_event(&event);
        }
        visuals.advance(FRAME_DT);
        cues_played += mixer.take_cues().len();

        if game.is_ended() && game.pending().is_empty() {
            break;
        }
    }

    log::info!(
        "Demo finished at t={:.1}s: score {}, lives {}, {} waves, {} swipes, {} sound cues, {} juice bursts",
        game.clock(),
        game.score(),
        game.lives(),
        game.state().waves,
        player.strokes(),
        cues_played,
        visuals.bursts()
    );
    println!("Final score: {}", game.score());
}
