use core::cell::Cell;
use core::ops::Range;
use std::sync::Arc;

use crate::{
    Anchor, ConfigError, ContentOffset, CorrectionKind, Row, ScheduledCorrection, WindowOptions,
    WindowSnapshot,
};

/// A sliding window of materialized rows over a huge logical list.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects and never sleeps or spawns timers.
/// - Your adapter feeds it scroll-end offsets and jump requests.
/// - Reloads that need a follow-up content-offset fix return a [`ScheduledCorrection`]; the
///   adapter delivers it back through [`WindowList::apply_correction`] one frame later.
///
/// Every materialized row set is contiguous: `rows()[i].index == window_start() + i`.
#[derive(Clone, Debug)]
pub struct WindowList {
    options: WindowOptions,
    window_start: usize,
    rows: Vec<Row>,
    anchor: Anchor,
    is_adjusting: bool,
    generation: u64,
    revision: u64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

fn signed(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

impl WindowList {
    /// Validates `options` and performs the initial load at `window_start = 0`.
    pub fn new(options: WindowOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        wdebug!(
            total_count = options.total_count,
            window_size = options.window_size,
            item_height = options.item_height,
            "WindowList::new"
        );
        let mut w = Self {
            options,
            window_start: 0,
            rows: Vec::new(),
            anchor: Anchor::default(),
            is_adjusting: false,
            generation: 0,
            revision: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        // Nobody has observed the list yet, so the initial load does not notify.
        w.materialize(0);
        Ok(w)
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Clones the current options, applies `f`, validates the result, then reloads the current
    /// window under the new configuration.
    ///
    /// On error the previous options stay in effect.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut WindowOptions),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        next.validate()?;
        self.options = next;
        wtrace!(
            total_count = self.options.total_count,
            window_size = self.options.window_size,
            "WindowList::update_options"
        );

        let last = self.options.total_count - 1;
        if self.anchor.index > last {
            self.anchor = Anchor {
                index: last,
                offset_in_item: 0.0,
            };
        }
        if self.anchor.offset_in_item >= self.options.item_height {
            self.anchor.offset_in_item = 0.0;
        }
        self.load_window(signed(self.window_start));
        Ok(())
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&WindowList) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn total_count(&self) -> usize {
        self.options.total_count
    }

    pub fn window_size(&self) -> usize {
        self.options.window_size
    }

    pub fn item_height(&self) -> f32 {
        self.options.item_height
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Logical indices currently materialized.
    pub fn window_range(&self) -> Range<usize> {
        self.window_start..self.window_start + self.options.window_size
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Looks up a materialized row by its logical index.
    pub fn row(&self, index: usize) -> Option<&Row> {
        let i = index.checked_sub(self.window_start)?;
        self.rows.get(i)
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// `true` while a shift correction is outstanding. Scroll-end events are ignored meanwhile.
    pub fn is_adjusting(&self) -> bool {
        self.is_adjusting
    }

    /// Identifies the most recently scheduled correction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Incremented on every reload of the materialized rows.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pixel extent of the materialized rows.
    pub fn content_height(&self) -> f32 {
        self.options.window_size as f32 * self.options.item_height
    }

    /// Inclusive `[lower, upper]` band the anchor may move in without triggering a shift.
    pub fn shift_band(&self) -> (usize, usize) {
        let w = self.options.window_size;
        (self.window_start + w / 4, self.window_start + w * 3 / 4)
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            window_start: self.window_start,
            anchor: self.anchor,
            is_adjusting: self.is_adjusting,
            generation: self.generation,
            revision: self.revision,
        }
    }

    fn clamp_start(&self, start_index: i64) -> usize {
        let max = self.options.max_window_start();
        if start_index <= 0 {
            return 0;
        }
        usize::try_from(start_index).map_or(max, |s| s.min(max))
    }

    fn clamp_index(&self, index: i64) -> usize {
        let last = self.options.total_count - 1;
        if index <= 0 {
            return 0;
        }
        usize::try_from(index).map_or(last, |i| i.min(last))
    }

    /// Maps a scroll offset inside the materialized content to an anchor.
    ///
    /// Offsets before the first or past the last logical row clamp to that row with a zero
    /// in-row offset.
    pub fn anchor_at_offset(&self, offset_y: f32) -> Anchor {
        let h = self.options.item_height;
        let mut delta_index = (offset_y / h).floor() as i64;
        let mut delta_offset = offset_y.rem_euclid(h);
        // rem_euclid rounds up to `h` for tiny negative inputs.
        if delta_offset >= h {
            delta_index = delta_index.saturating_add(1);
            delta_offset = 0.0;
        }

        let raw = signed(self.window_start).saturating_add(delta_index);
        let index = self.clamp_index(raw);
        if signed(index) != raw {
            return Anchor {
                index,
                offset_in_item: 0.0,
            };
        }
        Anchor {
            index,
            offset_in_item: delta_offset,
        }
    }

    pub fn index_at_offset(&self, offset_y: f32) -> usize {
        self.anchor_at_offset(offset_y).index
    }

    /// Scroll offset that puts `index` at the top of the viewport, if it is materialized.
    pub fn offset_for_index(&self, index: usize) -> Option<f32> {
        if !self.window_range().contains(&index) {
            return None;
        }
        Some((index - self.window_start) as f32 * self.options.item_height)
    }

    fn offset_for_anchor(&self, anchor: Anchor) -> f32 {
        debug_assert!(anchor.index >= self.window_start);
        anchor.index.saturating_sub(self.window_start) as f32 * self.options.item_height
            + anchor.offset_in_item
    }

    fn materialize(&mut self, safe_start: usize) {
        self.window_start = safe_start;
        self.rows = (safe_start..safe_start + self.options.window_size)
            .map(Row::new)
            .collect();
        self.revision = self.revision.wrapping_add(1);
        wdebug!(
            window_start = safe_start,
            revision = self.revision,
            "WindowList::materialize"
        );
    }

    fn reload(&mut self, safe_start: usize) {
        self.materialize(safe_start);
        self.notify();
    }

    fn schedule(&mut self, kind: CorrectionKind, target: Anchor) -> ScheduledCorrection {
        self.generation = self.generation.wrapping_add(1);
        wtrace!(
            generation = self.generation,
            ?kind,
            target = target.index,
            "WindowList::schedule"
        );
        ScheduledCorrection {
            generation: self.generation,
            delay_ms: self.options.frame_delay_ms,
            kind,
            target,
        }
    }

    /// Materializes `window_size` rows starting at `start_index`.
    ///
    /// Out-of-range starts are clamped into `[0, total_count - window_size]`. Any outstanding
    /// correction is invalidated.
    pub fn load_window(&mut self, start_index: i64) {
        let safe_start = self.clamp_start(start_index);
        self.generation = self.generation.wrapping_add(1);
        self.is_adjusting = false;
        self.reload(safe_start);
    }

    /// Handles the scroll container settling at `offset_y` (relative to the first materialized
    /// row).
    ///
    /// Returns a correction to schedule when the window had to shift.
    pub fn on_scroll_end(&mut self, offset_y: f32) -> Option<ScheduledCorrection> {
        if self.is_adjusting {
            wtrace!(offset_y, "on_scroll_end ignored while adjusting");
            return None;
        }
        if !offset_y.is_finite() {
            wwarn!(offset_y, "on_scroll_end: non-finite offset");
            return None;
        }

        self.anchor = self.anchor_at_offset(offset_y);
        wtrace!(
            offset_y,
            anchor_index = self.anchor.index,
            anchor_offset_in_item = self.anchor.offset_in_item,
            "on_scroll_end"
        );
        self.maybe_shift_window()
    }

    /// Shifts the window only once the anchor leaves the middle half of it.
    pub fn maybe_shift_window(&mut self) -> Option<ScheduledCorrection> {
        let (lower, upper) = self.shift_band();
        if (lower..=upper).contains(&self.anchor.index) {
            return None;
        }
        self.shift_window()
    }

    /// Re-centers the window on the anchor.
    ///
    /// Returns `None` when clamping leaves the window where it is. Otherwise the rows are
    /// reloaded, `is_adjusting` is set, and the returned correction restores the anchor's visual
    /// position.
    pub fn shift_window(&mut self) -> Option<ScheduledCorrection> {
        let half = signed(self.options.window_size / 2);
        let new_start = self.clamp_start(signed(self.anchor.index).saturating_sub(half));
        if new_start == self.window_start {
            return None;
        }

        wdebug!(
            from = self.window_start,
            to = new_start,
            anchor = self.anchor.index,
            "shift_window"
        );
        self.is_adjusting = true;
        self.reload(new_start);
        Some(self.schedule(CorrectionKind::Shift, self.anchor))
    }

    /// Moves the window so `index` is materialized and returns the correction that scrolls it to
    /// the top of the viewport.
    ///
    /// The anchor is left untouched unless `sync_anchor_on_jump` is set; see
    /// [`WindowOptions::sync_anchor_on_jump`]. A pending shift correction is superseded.
    pub fn jump_to(&mut self, index: i64) -> ScheduledCorrection {
        let target = self.clamp_index(index);
        let half = signed(self.options.window_size / 2);
        let new_start = self.clamp_start(signed(target).saturating_sub(half));
        wdebug!(index, target, window_start = new_start, "jump_to");

        let target = Anchor {
            index: target,
            offset_in_item: 0.0,
        };
        self.is_adjusting = false;
        self.reload(new_start);
        if self.options.sync_anchor_on_jump {
            self.anchor = target;
        }
        self.schedule(CorrectionKind::Jump, target)
    }

    /// Runs the deferred half of a shift or jump.
    ///
    /// Returns the content offset to apply, or `None` when a later load, shift, or jump has made
    /// `correction` stale. Delivering the current correction more than once yields the same
    /// offset each time.
    pub fn apply_correction(&mut self, correction: ScheduledCorrection) -> Option<ContentOffset> {
        if correction.generation != self.generation {
            wtrace!(
                stale = correction.generation,
                current = self.generation,
                "apply_correction: discarded"
            );
            return None;
        }

        let y = self.offset_for_anchor(correction.target);
        if correction.kind == CorrectionKind::Shift {
            self.is_adjusting = false;
        }
        wtrace!(y, kind = ?correction.kind, "apply_correction");
        Some(ContentOffset::unanimated(y))
    }
}
