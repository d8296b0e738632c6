//=========================================================================
// Core
//=========================================================================
//
// Platform-independent frame loop pieces.
//
// Architecture:
// ```text
//   Receiver<PlatformEvent>
//         ↓
//   FrameDriver::frame()
//     ├─ EventCollector::collect_frame()   (inputs, resize, close)
//     ├─ StateTracker::begin_frame()
//     ├─ SceneStack::tick()                (may push / pop)
//     └─ SceneStack::render(DrawList)      (post-tick top)
// ```
//
// The driver owns everything a frame touches, so it runs the same way
// under the winit host and under a test holding the channel sender.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod input;
pub mod platform_bridge;
pub mod render;
pub mod resources;
pub mod scene;

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use input::StateTracker;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::DrawList;
use scene::{SceneKey, SceneStack};

//=== FrameDriver =========================================================

/// Runs one tick + render cycle per call.
pub struct FrameDriver<K: SceneKey> {
    stack: SceneStack<K>,
    collector: EventCollector,
    input: StateTracker,
    canvas: DrawList,
    frames: u64,
}

impl<K: SceneKey> FrameDriver<K> {
    /// Creates a driver reading platform events from `receiver`.
    pub fn new(stack: SceneStack<K>, receiver: Receiver<PlatformEvent>, screen: (u32, u32)) -> Self {
        Self {
            stack,
            collector: EventCollector::new(receiver),
            input: StateTracker::new(),
            canvas: DrawList::new(screen.0 as f32, screen.1 as f32),
            frames: 0,
        }
    }

    /// Runs a single frame.
    ///
    /// Returns [`TickControl::Exit`] when the window closed, the platform
    /// hung up, or the current scene requested exit. A frame that ends on
    /// a close event does not tick or render.
    pub fn frame(&mut self) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            debug!(target: "platform", "Platform requested exit after {} frames", self.frames);
            return TickControl::Exit;
        }

        if let Some((width, height)) = self.collector.take_resize() {
            debug!(target: "platform", "Screen resized to {}x{}", width, height);
            self.canvas.set_screen_size(width as f32, height as f32);
        }

        self.input.begin_frame(self.collector.batches());

        let control = self.stack.tick(&self.input);

        self.canvas.begin_frame();
        self.stack.render(&mut self.canvas);

        self.frames += 1;
        trace!(
            target: "scene",
            "Frame {} done ({} draw commands)",
            self.frames,
            self.canvas.len()
        );

        if control == TickControl::Exit {
            debug!(target: "scene", "Scene requested exit");
        }
        control
    }

    //--- Accessors --------------------------------------------------------

    pub fn stack(&self) -> &SceneStack<K> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut SceneStack<K> {
        &mut self.stack
    }

    /// Commands recorded by the last rendered frame.
    pub fn draw_list(&self) -> &DrawList {
        &self.canvas
    }

    /// Input state of the last frame.
    pub fn input(&self) -> &StateTracker {
        &self.input
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Unwinds the stack, returning keys in teardown order.
    pub fn shutdown(self) -> Vec<K> {
        debug!(target: "scene", "Frame driver stopping after {} frames", self.frames);
        self.stack.shutdown()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{unbounded, Sender};

    use crate::core::input::{InputEvent, InputQuery, KeyCode};
    use crate::core::render::{Canvas, Color};
    use crate::core::resources::ResourceRegistry;
    use crate::core::scene::{Scene, TickContext};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Screen {
        Base,
        Prompt,
    }

    impl SceneKey for Screen {}

    /// Shows its name; Enter pushes a prompt, Escape pops, Q exits.
    struct Labelled(Screen);

    impl Scene<Screen> for Labelled {
        fn key(&self) -> Screen {
            self.0
        }

        fn tick(&mut self, ctx: &mut TickContext<'_, Screen>) {
            if ctx.input.is_key_pressed(KeyCode::Enter) {
                let _ = ctx.stack.push(Labelled(Screen::Prompt));
            }
            if ctx.input.is_key_pressed(KeyCode::Escape) {
                let _ = ctx.stack.pop();
            }
            if ctx.input.is_key_pressed(KeyCode::KeyQ) {
                ctx.request_exit();
            }
        }

        fn render(&self, canvas: &mut dyn Canvas) {
            canvas.clear(Color::RAYWHITE);
            canvas.draw_text(&format!("{:?}", self.0), (0.0, 0.0), 20.0, Color::DARKGRAY);
        }
    }

    fn driver() -> (FrameDriver<Screen>, Sender<PlatformEvent>) {
        let (tx, rx) = unbounded();
        let mut stack = SceneStack::new(Box::new(ResourceRegistry::in_memory())).unwrap();
        stack.push(Labelled(Screen::Base)).unwrap();
        (FrameDriver::new(stack, rx, (800, 600)), tx)
    }

    fn press(tx: &Sender<PlatformEvent>, key: KeyCode) {
        tx.send(PlatformEvent::Inputs {
            discrete: vec![InputEvent::key_down(key)],
            continuous: vec![],
        })
        .unwrap();
    }

    fn rendered(driver: &FrameDriver<Screen>) -> Vec<&str> {
        driver.draw_list().texts().collect()
    }

    #[test]
    fn idle_frame_renders_current_scene() {
        let (mut driver, _tx) = driver();

        assert_eq!(driver.frame(), TickControl::Continue);

        assert_eq!(driver.frames(), 1);
        assert_eq!(rendered(&driver), vec!["Base"]);
    }

    #[test]
    fn push_during_tick_renders_new_top_same_frame() {
        let (mut driver, tx) = driver();
        press(&tx, KeyCode::Enter);

        driver.frame();

        assert_eq!(driver.stack().current_key(), Some(Screen::Prompt));
        assert_eq!(rendered(&driver), vec!["Prompt"]);
    }

    #[test]
    fn draw_list_holds_only_last_frame() {
        let (mut driver, _tx) = driver();

        driver.frame();
        driver.frame();

        assert_eq!(driver.draw_list().len(), 2);
    }

    #[test]
    fn window_closed_exits_without_rendering() {
        let (mut driver, tx) = driver();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(driver.frame(), TickControl::Exit);
        assert_eq!(driver.frames(), 0);
    }

    #[test]
    fn scene_exit_request_stops_loop() {
        let (mut driver, tx) = driver();
        press(&tx, KeyCode::KeyQ);

        assert_eq!(driver.frame(), TickControl::Exit);
    }

    #[test]
    fn resize_updates_canvas() {
        let (mut driver, tx) = driver();
        tx.send(PlatformEvent::Resized { width: 1280, height: 720 }).unwrap();

        driver.frame();

        assert_eq!(driver.draw_list().screen_size(), (1280.0, 720.0));
    }

    #[test]
    fn input_is_visible_after_frame() {
        let (mut driver, tx) = driver();
        press(&tx, KeyCode::Space);

        driver.frame();

        assert!(driver.input().is_key_down(KeyCode::Space));
    }

    #[test]
    fn shutdown_unwinds_stack() {
        let (mut driver, tx) = driver();
        press(&tx, KeyCode::Enter);
        driver.frame();

        assert_eq!(driver.shutdown(), vec![Screen::Prompt, Screen::Base]);
    }
}
