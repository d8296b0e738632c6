//=========================================================================
// Render Surface
//=========================================================================
//
// Drawing seam handed to Scene::render.
//
// Scenes draw through the Canvas trait and never see a graphics backend.
// DrawList is the bundled canvas: it records commands per frame, which
// the host (or a test) can inspect after the render pass.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::resources::Texture;

//=== Color ===============================================================

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RAYWHITE: Self = Self::rgb(245, 245, 245);
    pub const LIGHTGRAY: Self = Self::rgb(200, 200, 200);
    pub const DARKGRAY: Self = Self::rgb(80, 80, 80);
    pub const GOLD: Self = Self::rgb(255, 203, 0);

    /// Opaque color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

//=== Anchor ==============================================================

/// Which point of a texture its draw position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    /// Texture midpoint. The backend resolves it from the texture's size.
    Center,
}

//=== Canvas ==============================================================

/// Drawing operations available to scenes.
///
/// Positions are in screen pixels with a top-left origin.
pub trait Canvas {
    /// Current drawable size in pixels.
    fn screen_size(&self) -> (f32, f32);

    fn clear(&mut self, color: Color);

    fn draw_text(&mut self, text: &str, position: (f32, f32), size: f32, color: Color);

    fn draw_texture(&mut self, texture: Texture, position: (f32, f32), tint: Color);

    /// Draws `texture` with its midpoint at `center`.
    fn draw_texture_centered(&mut self, texture: Texture, center: (f32, f32), tint: Color);

    /// Width `text` would occupy when drawn at `size`.
    fn measure_text(&self, text: &str, size: f32) -> f32;
}

//=== DrawCommand =========================================================

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Text {
        text: String,
        position: (f32, f32),
        size: f32,
        color: Color,
    },
    Texture {
        texture: Texture,
        position: (f32, f32),
        anchor: Anchor,
        tint: Color,
    },
}

//=== DrawList ============================================================

/// Canvas that records the commands of a single frame.
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    screen_size: (f32, f32),
}

impl DrawList {
    /// Average glyph advance as a fraction of the font size.
    const GLYPH_ADVANCE: f32 = 0.5;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            commands: Vec::with_capacity(32),
            screen_size: (width, height),
        }
    }

    /// Drops the previous frame's commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_size = (width, height);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text drawn this frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn screen_size(&self) -> (f32, f32) {
        self.screen_size
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_text(&mut self, text: &str, position: (f32, f32), size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            size,
            color,
        });
    }

    fn draw_texture(&mut self, texture: Texture, position: (f32, f32), tint: Color) {
        self.commands.push(DrawCommand::Texture {
            texture,
            position,
            anchor: Anchor::TopLeft,
            tint,
        });
    }

    fn draw_texture_centered(&mut self, texture: Texture, center: (f32, f32), tint: Color) {
        self.commands.push(DrawCommand::Texture {
            texture,
            position: center,
            anchor: Anchor::Center,
            tint,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * Self::GLYPH_ADVANCE
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
