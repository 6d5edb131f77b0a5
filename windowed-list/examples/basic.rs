// Example: scroll past the shift band, deliver the correction, then jump to the last row.
use windowed_list::{WindowList, WindowOptions};

fn main() -> Result<(), windowed_list::ConfigError> {
    let mut w = WindowList::new(WindowOptions::demo())?;
    println!("window={:?} rows={}", w.window_range(), w.rows().len());

    if let Some(correction) = w.on_scroll_end(160.0 * 80.0 + 20.0) {
        println!("shifted: window={:?} anchor={:?}", w.window_range(), w.anchor());
        // An adapter would wait one frame here.
        let offset = w.apply_correction(correction);
        println!("set content offset: {offset:?}");
    }

    let correction = w.jump_to(999_999);
    println!(
        "after jump_to: window={:?} offset={:?}",
        w.window_range(),
        w.apply_correction(correction)
    );
    Ok(())
}
