use windowed_list::{ConfigError, ContentOffset, ScheduledCorrection, WindowList, WindowOptions};

use crate::{FrameScheduler, JumpButton, RenderSurface, ScrollContainer};

/// A framework-neutral controller that wraps a `windowed_list::WindowList` and runs its
/// deferred corrections.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll_end` / `jump_to` / `press` when UI events occur
/// - `render_if_changed` and then `tick(now_ms)` on each frame/timer tick
///
/// Rendering before ticking makes sure the new rows are laid out by the time a correction moves
/// the scroll container.
#[derive(Clone, Debug)]
pub struct Controller {
    list: WindowList,
    scheduler: FrameScheduler<ScheduledCorrection>,
    rendered_revision: Option<u64>,
}

impl Controller {
    pub fn new(options: WindowOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_list(WindowList::new(options)?))
    }

    pub fn from_list(list: WindowList) -> Self {
        Self {
            list,
            scheduler: FrameScheduler::new(),
            rendered_revision: None,
        }
    }

    pub fn list(&self) -> &WindowList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut WindowList {
        &mut self.list
    }

    pub fn into_list(self) -> WindowList {
        self.list
    }

    /// Number of corrections waiting for their frame, stale ones included.
    pub fn pending_corrections(&self) -> usize {
        self.scheduler.len()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.scheduler.next_due_ms()
    }

    fn schedule(&mut self, correction: ScheduledCorrection, now_ms: u64) {
        atrace!(
            generation = correction.generation,
            due = now_ms.saturating_add(correction.delay_ms),
            "Controller::schedule"
        );
        self.scheduler.schedule(now_ms, correction.delay_ms, correction);
    }

    /// Call this when the scroll container reports that scrolling stopped.
    ///
    /// Returns `true` when the window shifted and a correction was scheduled.
    pub fn on_scroll_end(&mut self, offset_y: f32, now_ms: u64) -> bool {
        let Some(correction) = self.list.on_scroll_end(offset_y) else {
            return false;
        };
        self.schedule(correction, now_ms);
        true
    }

    pub fn jump_to(&mut self, index: i64, now_ms: u64) {
        let correction = self.list.jump_to(index);
        self.schedule(correction, now_ms);
    }

    pub fn press(&mut self, button: &JumpButton, now_ms: u64) {
        adebug!(label = %button.label, index = button.index, "Controller::press");
        self.jump_to(button.index, now_ms);
    }

    /// Runs every correction due at `now_ms`.
    ///
    /// Stale corrections are dropped, so at most one content offset comes back.
    pub fn tick(&mut self, now_ms: u64) -> Option<ContentOffset> {
        let mut applied = None;
        for correction in self.scheduler.drain_due(now_ms) {
            if let Some(offset) = self.list.apply_correction(correction) {
                applied = Some(offset);
            }
        }
        applied
    }

    /// Same as `tick`, but forwards the content offset to `container`.
    pub fn tick_into(&mut self, now_ms: u64, container: &mut impl ScrollContainer) -> bool {
        match self.tick(now_ms) {
            Some(offset) => {
                container.apply(offset);
                true
            }
            None => false,
        }
    }

    /// `true` when the materialized rows changed since the last `render_if_changed`.
    pub fn needs_render(&self) -> bool {
        self.rendered_revision != Some(self.list.revision())
    }

    /// Pushes the current rows to `surface` if they changed since the last call.
    pub fn render_if_changed(&mut self, surface: &mut impl RenderSurface) -> bool {
        if !self.needs_render() {
            return false;
        }
        surface.render(self.list.rows());
        self.rendered_revision = Some(self.list.revision());
        true
    }
}
