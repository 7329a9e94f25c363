//! Drawing boundary between the simulation core and whatever paints it.

mod canvas;
mod panel;

pub use canvas::Canvas;
pub use panel::draw_controls;

use crate::domain::Point;

/// Receives draw instructions from the core.
///
/// After a commit only the cells whose state changed are reported; a manual
/// toggle reports the single affected cell. `clear_all` precedes a full
/// redraw (reseed or resize).
pub trait Renderer {
    fn draw_alive(&mut self, p: Point);
    fn draw_dead(&mut self, p: Point);
    fn clear_all(&mut self);
}

/// Renderer that drops every instruction, for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_alive(&mut self, _p: Point) {}
    fn draw_dead(&mut self, _p: Point) {}
    fn clear_all(&mut self) {}
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum DrawCall {
        Alive(Point),
        Dead(Point),
        Clear,
    }

    /// Keeps every instruction in arrival order
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingRenderer {
        pub fn take(&mut self) -> Vec<DrawCall> {
            std::mem::take(&mut self.calls)
        }
    }

    impl Renderer for RecordingRenderer {
        fn draw_alive(&mut self, p: Point) {
            self.calls.push(DrawCall::Alive(p));
        }

        fn draw_dead(&mut self, p: Point) {
            self.calls.push(DrawCall::Dead(p));
        }

        fn clear_all(&mut self) {
            self.calls.push(DrawCall::Clear);
        }
    }
}
