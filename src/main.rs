//=========================================================================
// Demo
//=========================================================================
//
// Base scene → title screen → main menu, on a 1920 × 1080 window.
//
// The host records each frame into a DrawList but has no graphics
// backend, so the window itself stays blank. Navigation is visible in the
// `scene` log target (RUST_LOG=scene=debug).
//
//=========================================================================

mod scenes;

use std::process::ExitCode;

use aetheric_scenes::prelude::*;
use log::error;

use scenes::{BaseScene, SceneId, TitleScreen};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let result = EngineBuilder::<SceneId>::new()
        .with_window_title("Aetheric Scenes")
        .build()
        .run(|stack| {
            stack.push(BaseScene::new())?;
            stack.push(TitleScreen::new())
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
