/// Example: replay a scripted input sequence and print stage changes
///
/// Usage: cargo run --example scripted_input -- [config.toml]
use isle3d_core::{InputEvent, Island, IslandProps, Key, PointerPosition};
use isle3d_terminal::{AppConfig, TerminalHost};
use std::env;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))?,
        None => AppConfig::default(),
    };

    let props = IslandProps {
        viewport_width: 80.0,
        ..IslandProps::default()
    };
    let (mut island, handle) = Island::new(props, config.motion, TerminalHost::default())?;

    // Hold ArrowLeft for two seconds at 60 fps, then let it coast
    let mut script: Vec<Vec<InputEvent>> = Vec::new();
    for _ in 0..120 {
        script.push(vec![InputEvent::KeyDown(Key::ArrowLeft)]);
    }
    script.push(vec![InputEvent::KeyUp(Key::ArrowLeft)]);
    script.extend((0..120).map(|_| Vec::new()));

    // A drag to the right spins the other way
    script.push(vec![InputEvent::PointerDown(PointerPosition::mouse(20.0))]);
    for x in 21..=60 {
        script.push(vec![InputEvent::PointerMove(PointerPosition::mouse(x as f64))]);
    }
    script.push(vec![InputEvent::PointerUp]);
    script.extend((0..240).map(|_| Vec::new()));

    let mut last_stage = None;
    for (frame, events) in script.into_iter().enumerate() {
        for event in events {
            island.on_event(event);
        }
        island.on_frame();

        let stage = island.host().current_stage;
        if stage != last_stage {
            println!(
                "frame {frame:4}: rotation.y {:+.3} -> {}",
                handle.rotation_y(),
                stage.map(|s| s.to_string()).unwrap_or_else(|| "no stage".into())
            );
            last_stage = stage;
        }
    }

    println!(
        "{} stage reports, final velocity {:+.6}",
        island.host().stage_reports,
        island.rotation().velocity
    );
    Ok(())
}
