use windowed_list::{ContentOffset, Row};

/// The scrollable container hosting the materialized rows.
pub trait ScrollContainer {
    fn set_content_offset(&mut self, x: f32, y: f32, animated: bool);

    fn apply(&mut self, offset: ContentOffset) {
        self.set_content_offset(offset.x, offset.y, offset.animated);
    }
}

/// Draws the materialized rows. Every call replaces whatever was drawn before.
pub trait RenderSurface {
    fn render(&mut self, rows: &[Row]);
}
