use std::sync::Arc;

use crate::{ConfigError, WindowList};

/// One frame at 60 Hz.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 16;

pub const DEMO_TOTAL_COUNT: usize = 1_000_000;
pub const DEMO_WINDOW_SIZE: usize = 200;
pub const DEMO_ITEM_HEIGHT: f32 = 80.0;

pub type OnChangeCallback = Arc<dyn Fn(&WindowList) + Send + Sync>;

/// Configuration for [`crate::WindowList`].
///
/// Cheap to clone: the change hook is stored in an `Arc`.
#[derive(Clone)]
pub struct WindowOptions {
    /// Size of the logical universe `[0, total_count)`.
    pub total_count: usize,
    /// Number of contiguous rows kept materialized.
    pub window_size: usize,
    /// Uniform row height in pixels.
    pub item_height: f32,
    /// Delay between a reload and its content-offset correction, so the render pass for the new
    /// rows completes first.
    pub frame_delay_ms: u64,
    /// When `true`, `jump_to` also moves the anchor to the jump target.
    ///
    /// Off by default: the anchor is only reconciled by the next scroll-end event, which means a
    /// scroll-end that arrives before the jump correction lands is evaluated against the stale
    /// anchor.
    pub sync_anchor_on_jump: bool,
    /// Fired after every reload of the materialized rows.
    pub on_change: Option<OnChangeCallback>,
}

impl WindowOptions {
    pub fn new(total_count: usize, window_size: usize, item_height: f32) -> Self {
        Self {
            total_count,
            window_size,
            item_height,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            sync_anchor_on_jump: false,
            on_change: None,
        }
    }

    /// One million rows, 200 materialized, 80px each.
    pub fn demo() -> Self {
        Self::new(DEMO_TOTAL_COUNT, DEMO_WINDOW_SIZE, DEMO_ITEM_HEIGHT)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.window_size > self.total_count {
            return Err(ConfigError::WindowLargerThanUniverse {
                window_size: self.window_size,
                total_count: self.total_count,
            });
        }
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(ConfigError::InvalidItemHeight(self.item_height));
        }
        Ok(())
    }

    /// Largest valid window start. Only meaningful for validated options.
    pub fn max_window_start(&self) -> usize {
        self.total_count.saturating_sub(self.window_size)
    }

    pub fn with_total_count(mut self, total_count: usize) -> Self {
        self.total_count = total_count;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_item_height(mut self, item_height: f32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_frame_delay_ms(mut self, frame_delay_ms: u64) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    pub fn with_sync_anchor_on_jump(mut self, sync_anchor_on_jump: bool) -> Self {
        self.sync_anchor_on_jump = sync_anchor_on_jump;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&WindowList) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::demo()
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("total_count", &self.total_count)
            .field("window_size", &self.window_size)
            .field("item_height", &self.item_height)
            .field("frame_delay_ms", &self.frame_delay_ms)
            .field("sync_anchor_on_jump", &self.sync_anchor_on_jump)
            .finish_non_exhaustive()
    }
}
