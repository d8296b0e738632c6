//=========================================================================
// Event Collector
//=========================================================================
//
// Drains platform events at the start of each frame.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input batches + resize
//                                             → TickControl
//
// Polling is bounded so a flooded channel cannot stall a frame. The
// collector never blocks: frame pacing belongs to the host.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== Constants ===========================================================

const MAX_EVENTS_PER_FRAME: usize = 100;

//=== TickControl =========================================================

/// Frame loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
    resize: Option<(u32, u32)>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
            resize: None,
        }
    }

    /// Collects pending platform events for this frame.
    ///
    /// Returns [`TickControl::Exit`] when the window closed or the
    /// platform side hung up.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        self.resize = None;

        for _ in 0..MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                }
                Err(TryRecvError::Empty) => return TickControl::Continue,
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "platform", "Platform channel disconnected");
                    return TickControl::Exit;
                }
            }
        }

        warn!(
            target: "platform",
            "Event backlog: stopped after {} events this frame",
            MAX_EVENTS_PER_FRAME
        );
        TickControl::Continue
    }

    /// Input batches collected this frame, in arrival order.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    /// Latest size reported this frame, if any.
    pub(crate) fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.resize.take()
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs { discrete, continuous } => {
                if !discrete.is_empty() {
                    self.input_batches.push(discrete);
                }
                if !continuous.is_empty() {
                    self.input_batches.push(continuous);
                }
                TickControl::Continue
            }
            PlatformEvent::Resized { width, height } => {
                self.resize = Some((width, height));
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    fn inputs(discrete: Vec<InputEvent>, continuous: Vec<InputEvent>) -> PlatformEvent {
        PlatformEvent::Inputs { discrete, continuous }
    }

    #[test]
    fn empty_queue_continues() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn non_empty_halves_become_batches() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(inputs(vec![InputEvent::key_down(KeyCode::KeyA)], vec![])).unwrap();
        tx.send(inputs(vec![], vec![InputEvent::MouseMoved { x: 10.0, y: 20.0 }])).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.batches().len(), 2);
    }

    #[test]
    fn previous_frame_is_cleared() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(inputs(vec![InputEvent::key_down(KeyCode::Space)], vec![])).unwrap();
        collector.collect_frame();
        assert_eq!(collector.batches().len(), 1);

        collector.collect_frame();
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn latest_resize_wins() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Resized { width: 640, height: 480 }).unwrap();
        tx.send(PlatformEvent::Resized { width: 1280, height: 720 }).unwrap();
        collector.collect_frame();

        assert_eq!(collector.take_resize(), Some((1280, 720)));
        assert_eq!(collector.take_resize(), None);
    }

    #[test]
    fn window_closed_exits() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn disconnect_exits() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn backlog_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..(MAX_EVENTS_PER_FRAME + 5) {
            tx.send(inputs(vec![InputEvent::key_down(KeyCode::KeyB)], vec![])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.batches().len(), MAX_EVENTS_PER_FRAME);

        collector.collect_frame();
        assert_eq!(collector.batches().len(), 5);
    }
}
