use core::fmt;

/// A packed `0xAARRGGBB` color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Opaque color derived from a row index. The same index always yields the same color.
    pub fn for_index(index: usize) -> Self {
        // Reduce first so the multiplication cannot overflow for any index.
        let i = (index % 255) as u32;
        let r = (i * 37 % 255) as u8;
        let g = (i * 73 % 255) as u8;
        let b = (i * 19 % 255) as u8;
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

/// One materialized row of the logical list.
///
/// Rows are never mutated: a window reload replaces the whole row set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub index: usize,
    pub title: String,
    pub color: Color,
}

impl Row {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            title: format!("Item #{index}"),
            color: Color::for_index(index),
        }
    }

    /// Text shown inside the row cell.
    pub fn label(&self) -> String {
        format!("Index: {}", self.index)
    }
}

/// The logical row the viewport settled on, plus the pixel offset into that row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub index: usize,
    /// Always in `[0, item_height)`.
    pub offset_in_item: f32,
}

/// A content-offset command for the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentOffset {
    pub x: f32,
    pub y: f32,
    pub animated: bool,
}

impl ContentOffset {
    pub const fn unanimated(y: f32) -> Self {
        Self {
            x: 0.0,
            y,
            animated: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionKind {
    /// Keeps the anchor row visually in place after a window shift.
    Shift,
    /// Brings a jump target to the top of the viewport.
    Jump,
}

/// The deferred half of a shift or jump.
///
/// Returned by [`crate::WindowList`] when a reload needs a content-offset fix once the new rows
/// have been rendered. The adapter holds it for `delay_ms` and then hands it back to
/// [`crate::WindowList::apply_correction`]. Only the correction carrying the current generation
/// is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledCorrection {
    pub generation: u64,
    pub delay_ms: u64,
    pub kind: CorrectionKind,
    /// Row (and offset into it) that must end up at the top of the viewport.
    pub target: Anchor,
}
