use crate::Anchor;

/// A lightweight, serializable snapshot of the controller's bookkeeping.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. The rows are not
/// included: they are fully determined by `window_start` and the options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    pub window_start: usize,
    pub anchor: Anchor,
    pub is_adjusting: bool,
    pub generation: u64,
    pub revision: u64,
}
