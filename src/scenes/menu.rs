use aetheric_scenes::prelude::*;
use log::info;

use super::{centered, SceneId};

const OPTIONS: [&str; 3] = ["Start", "Options", "Exit"];
const EXIT: usize = 2;
const OPTION_SIZE: f32 = 30.0;
const OPTION_SPACING: f32 = 50.0;

/// Start / Options / Exit. Arrows move, Enter confirms, Escape goes back.
pub struct MainMenu {
    background: Option<Texture>,
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            background: None,
            selected: 0,
        }
    }

    fn confirm(&self, ctx: &mut TickContext<'_, SceneId>) {
        match self.selected {
            EXIT => ctx.request_exit(),
            option => info!("{} is not available yet", OPTIONS[option]),
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId> for MainMenu {
    fn key(&self) -> SceneId {
        SceneId::MainMenu
    }

    fn acquire(&mut self, resources: &mut dyn ResourceLoader) -> Result<(), ResourceError> {
        self.background = Some(resources.load_texture("background.png")?);
        Ok(())
    }

    fn tick(&mut self, ctx: &mut TickContext<'_, SceneId>) {
        if ctx.input.is_key_pressed(KeyCode::ArrowDown) {
            self.selected = (self.selected + 1) % OPTIONS.len();
        }
        if ctx.input.is_key_pressed(KeyCode::ArrowUp) {
            self.selected = (self.selected + OPTIONS.len() - 1) % OPTIONS.len();
        }

        if ctx.input.is_key_pressed(KeyCode::Enter) {
            self.confirm(ctx);
        } else if ctx.input.is_key_pressed(KeyCode::Escape) {
            let _ = ctx.stack.pop();
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let (width, height) = canvas.screen_size();
        canvas.clear(Color::BLACK);

        if let Some(background) = self.background {
            let center = (width / 2.0, height / 2.0 - 50.0);
            canvas.draw_texture_centered(background, center, Color::WHITE);
        }

        for (index, label) in OPTIONS.iter().enumerate() {
            let color = if index == self.selected { Color::GOLD } else { Color::LIGHTGRAY };
            let y = height / 2.0 + index as f32 * OPTION_SPACING;
            let x = centered(width, canvas.measure_text(label, OPTION_SIZE));
            canvas.draw_text(label, (x, y), OPTION_SIZE, color);
        }
    }

    fn teardown(&mut self, resources: &mut dyn ResourceLoader) {
        if let Some(background) = self.background.take() {
            resources.unload_texture(background);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{BaseScene, TitleScreen};

    fn stack() -> SceneStack<SceneId> {
        let mut stack = SceneStack::new(Box::new(ResourceRegistry::in_memory())).unwrap();
        stack.push(BaseScene::new()).unwrap();
        stack
    }

    fn press(key: KeyCode) -> impl InputQuery {
        let mut input = aetheric_scenes::core::input::StateTracker::new();
        input.begin_frame(&[vec![InputEvent::key_down(key)]]);
        input
    }

    #[test]
    fn any_key_on_title_opens_menu() {
        let mut stack = stack();
        stack.push(TitleScreen::new()).unwrap();

        stack.tick(&press(KeyCode::Space));

        assert_eq!(stack.keys().collect::<Vec<_>>(), vec![SceneId::Base, SceneId::MainMenu]);
    }

    #[test]
    fn selection_wraps_and_exit_quits() {
        let mut stack = stack();
        stack.push(MainMenu::new()).unwrap();

        stack.tick(&press(KeyCode::ArrowUp));
        let control = stack.tick(&press(KeyCode::Enter));

        assert_eq!(control, TickControl::Exit);
    }

    #[test]
    fn selected_option_is_highlighted() {
        let mut stack = stack();
        stack.push(MainMenu::new()).unwrap();
        stack.tick(&press(KeyCode::ArrowDown));

        let mut canvas = DrawList::new(1920.0, 1080.0);
        stack.render(&mut canvas);

        let highlighted: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|command| match command {
                aetheric_scenes::core::render::DrawCommand::Text { text, color, .. }
                    if *color == Color::GOLD => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(highlighted, vec!["Options"]);
    }

    #[test]
    fn title_logo_is_centered_above_prompt() {
        let mut stack = stack();
        stack.push(TitleScreen::default()).unwrap();

        let mut canvas = DrawList::new(1920.0, 1080.0);
        stack.render(&mut canvas);

        let logo = canvas.commands().iter().find_map(|command| match command {
            aetheric_scenes::core::render::DrawCommand::Texture { position, anchor, .. } => {
                Some((*position, *anchor))
            }
            _ => None,
        });
        assert_eq!(logo, Some(((960.0, 490.0), Anchor::Center)));
    }

    #[test]
    fn scenes_default_to_fresh_state() {
        let mut stack = stack();
        stack.push(MainMenu::default()).unwrap();

        let mut canvas = DrawList::new(1920.0, 1080.0);
        stack.render(&mut canvas);

        assert_eq!(canvas.texts().collect::<Vec<_>>(), OPTIONS.to_vec());
        assert_eq!(BaseScene::default().key(), SceneId::Base);
    }

    #[test]
    fn escape_returns_to_base() {
        let mut stack = stack();
        stack.push(MainMenu::new()).unwrap();

        stack.tick(&press(KeyCode::Escape));

        assert_eq!(stack.current_key(), Some(SceneId::Base));
    }

    #[test]
    fn escape_on_base_requests_exit() {
        let mut stack = stack();
        assert_eq!(stack.tick(&press(KeyCode::Escape)), TickControl::Exit);
    }
}
