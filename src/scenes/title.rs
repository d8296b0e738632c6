use aetheric_scenes::prelude::*;
use log::info;

use super::{centered, MainMenu, SceneId};

const MESSAGE: &str = "Press ENTER or any key to start";
const MESSAGE_SIZE: f32 = 20.0;

/// Logo and prompt. Any key swaps it for the main menu.
pub struct TitleScreen {
    frame_count: u64,
    logo: Option<Texture>,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            logo: None,
        }
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId> for TitleScreen {
    fn key(&self) -> SceneId {
        SceneId::Title
    }

    fn acquire(&mut self, resources: &mut dyn ResourceLoader) -> Result<(), ResourceError> {
        self.logo = Some(resources.load_texture("logo.jpg")?);
        Ok(())
    }

    fn tick(&mut self, ctx: &mut TickContext<'_, SceneId>) {
        self.frame_count += 1;

        if ctx.input.any_key_pressed() {
            info!("Leaving title screen after {} frames", self.frame_count);
            let _ = ctx.stack.replace(MainMenu::new());
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let (width, height) = canvas.screen_size();
        canvas.clear(Color::BLACK);

        if let Some(logo) = self.logo {
            let center = (width / 2.0, height / 2.0 - 50.0);
            canvas.draw_texture_centered(logo, center, Color::WHITE);
        }

        let text_width = canvas.measure_text(MESSAGE, MESSAGE_SIZE);
        canvas.draw_text(
            MESSAGE,
            (centered(width, text_width), height / 2.0 + 20.0),
            MESSAGE_SIZE,
            Color::LIGHTGRAY,
        );
    }

    fn teardown(&mut self, resources: &mut dyn ResourceLoader) {
        if let Some(logo) = self.logo.take() {
            resources.unload_texture(logo);
        }
    }
}
