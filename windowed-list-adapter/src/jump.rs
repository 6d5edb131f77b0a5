/// A button that jumps the list to a fixed logical index.
///
/// Labels follow the demo list page's "jump to N" buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpButton {
    pub label: String,
    pub index: i64,
}

impl JumpButton {
    pub fn new(index: i64) -> Self {
        Self {
            label: format!("Jump to {index}"),
            index,
        }
    }
}

/// First row, middle row, and last row of the one-million-row demo list.
pub fn default_jump_buttons() -> [JumpButton; 3] {
    [
        JumpButton::new(0),
        JumpButton::new(500_000),
        JumpButton::new(999_999),
    ]
}
