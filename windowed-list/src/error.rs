use thiserror::Error;

/// Rejected [`crate::WindowOptions`].
///
/// Windowing operations themselves never fail (out-of-range input is clamped), so this is the
/// only error the crate produces.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("window_size must be at least 1")]
    EmptyWindow,

    #[error("window_size ({window_size}) exceeds total_count ({total_count})")]
    WindowLargerThanUniverse {
        window_size: usize,
        total_count: usize,
    },

    #[error("item_height must be finite and positive, got {0}")]
    InvalidItemHeight(f32),
}
