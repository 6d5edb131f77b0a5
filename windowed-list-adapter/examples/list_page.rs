// Example: drive a controller the way a list page would, with simulated frames.
//
// Run with `RUST_LOG=windowed_list=debug cargo run --example list_page --features tracing`.
use tracing_subscriber::EnvFilter;
use windowed_list::{Row, WindowOptions};
use windowed_list_adapter::{Controller, RenderSurface, ScrollContainer, default_jump_buttons};

const FRAME_MS: u64 = 16;

struct Page {
    offset_y: f32,
}

impl ScrollContainer for Page {
    fn set_content_offset(&mut self, _x: f32, y: f32, _animated: bool) {
        self.offset_y = y;
    }
}

impl RenderSurface for Page {
    fn render(&mut self, rows: &[Row]) {
        if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
            println!(
                "render {} rows: {} .. {}",
                rows.len(),
                first.label(),
                last.label()
            );
        }
    }
}

fn frame(controller: &mut Controller, page: &mut Page, now_ms: &mut u64) {
    *now_ms += FRAME_MS;
    controller.render_if_changed(page);
    if controller.tick_into(*now_ms, page) {
        let anchor = controller.list().anchor();
        println!("corrected offset to {} (anchor {:?})", page.offset_y, anchor);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut controller = Controller::new(WindowOptions::demo())?;
    let mut page = Page { offset_y: 0.0 };
    let mut now_ms = 0u64;

    frame(&mut controller, &mut page, &mut now_ms);

    // Fling downwards a few times.
    for _ in 0..6 {
        page.offset_y += 4_000.0;
        controller.on_scroll_end(page.offset_y, now_ms);
        frame(&mut controller, &mut page, &mut now_ms);
    }

    for button in default_jump_buttons() {
        println!("press {:?}", button.label);
        controller.press(&button, now_ms);
        frame(&mut controller, &mut page, &mut now_ms);
    }

    Ok(())
}
