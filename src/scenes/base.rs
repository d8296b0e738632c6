use aetheric_scenes::prelude::*;

use super::{SceneId, TitleScreen};

/// Root of the demo. Never popped; Enter reopens the title, Escape quits.
pub struct BaseScene;

impl BaseScene {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BaseScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId> for BaseScene {
    fn key(&self) -> SceneId {
        SceneId::Base
    }

    fn tick(&mut self, ctx: &mut TickContext<'_, SceneId>) {
        if ctx.input.is_key_pressed(KeyCode::Escape) {
            ctx.request_exit();
        } else if ctx.input.is_key_pressed(KeyCode::Enter) {
            let _ = ctx.stack.push(TitleScreen::new());
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(Color::RAYWHITE);
        canvas.draw_text("Null Scene", (10.0, 10.0), 20.0, Color::DARKGRAY);
    }
}
