//=========================================================================
// Demo Scenes
//=========================================================================

mod base;
mod menu;
mod title;

use aetheric_scenes::core::scene::SceneKey;

pub use base::BaseScene;
pub use menu::MainMenu;
pub use title::TitleScreen;

/// Scene kinds of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Base,
    Title,
    MainMenu,
}

impl SceneKey for SceneId {}

/// Horizontal position that centers `width` on the screen.
fn centered(screen_width: f32, width: f32) -> f32 {
    (screen_width - width) / 2.0
}
