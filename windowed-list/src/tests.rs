use crate::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }
}

fn demo() -> WindowList {
    WindowList::new(WindowOptions::demo()).unwrap()
}

fn assert_window_invariants(w: &WindowList) {
    assert!(w.window_start() <= w.total_count() - w.window_size());
    assert_eq!(w.rows().len(), w.window_size());
    for (i, row) in w.rows().iter().enumerate() {
        assert_eq!(row.index, w.window_start() + i);
    }
    let a = w.anchor();
    assert!(a.index < w.total_count());
    assert!(a.offset_in_item >= 0.0 && a.offset_in_item < w.item_height());
}

#[test]
fn initial_load_materializes_first_window() {
    let w = demo();
    assert_eq!(w.window_start(), 0);
    assert_eq!(w.rows().len(), 200);
    assert_eq!(w.rows()[0].index, 0);
    assert_eq!(w.rows()[199].index, 199);
    assert_eq!(w.rows()[7].title, "Item #7");
    assert_eq!(w.rows()[7].label(), "Index: 7");
    assert_eq!(w.revision(), 1);
    assert!(!w.is_adjusting());
    assert_window_invariants(&w);
}

#[test]
fn load_window_clamps_any_start() {
    let mut w = demo();
    let mut rng = Lcg::new(7);
    for _ in 0..200 {
        let start = rng.gen_range_i64(-2_000_000, 2_000_000);
        w.load_window(start);
        assert_window_invariants(&w);
        if (0..=999_800).contains(&start) {
            assert_eq!(w.window_start(), start as usize);
        }
    }

    w.load_window(i64::MIN);
    assert_eq!(w.window_start(), 0);
    w.load_window(i64::MAX);
    assert_eq!(w.window_start(), 999_800);
}

#[test]
fn load_window_is_idempotent() {
    let mut w = demo();
    w.load_window(12_345);
    let first = w.rows().to_vec();
    w.load_window(w.window_start() as i64);
    assert_eq!(w.rows(), first.as_slice());
}

#[test]
fn colors_derive_from_index() {
    let c = Color::for_index(10);
    assert_eq!(c.alpha(), 0xFF);
    assert_eq!(c.red(), (370 % 255) as u8);
    assert_eq!(c.green(), (730 % 255) as u8);
    assert_eq!(c.blue(), 190);
    assert_eq!(Color::for_index(0), Color(0xFF00_0000));
    assert_eq!(Color::for_index(3), Color::for_index(258));
    // Huge indices must not overflow.
    let _ = Color::for_index(usize::MAX);
}

#[test]
fn scroll_end_inside_band_does_not_shift() {
    let mut w = demo();
    assert!(w.on_scroll_end(8080.0).is_none());
    assert_eq!(w.anchor().index, 101);
    assert_eq!(w.anchor().offset_in_item, 0.0);
    assert_eq!(w.window_start(), 0);
    assert_eq!(w.revision(), 1);
}

#[test]
fn band_edges_are_inclusive() {
    let mut w = demo();
    w.load_window(1000);
    assert_eq!(w.shift_band(), (1050, 1150));

    assert!(w.on_scroll_end(50.0 * 80.0).is_none());
    assert_eq!(w.anchor().index, 1050);
    assert!(w.on_scroll_end(150.0 * 80.0 + 79.0).is_none());
    assert_eq!(w.anchor().index, 1150);
    assert_eq!(w.window_start(), 1000);

    assert!(w.on_scroll_end(151.0 * 80.0).is_some());
    assert_eq!(w.window_start(), 1051);
}

#[test]
fn scroll_end_past_band_shifts_and_preserves_anchor_position() {
    let mut w = demo();
    let c = w.on_scroll_end(160.0 * 80.0 + 12.5).unwrap();
    assert_eq!(w.anchor().index, 160);
    assert_eq!(w.anchor().offset_in_item, 12.5);
    assert_eq!(w.window_start(), 60);
    assert!(w.is_adjusting());
    assert_eq!(c.kind, CorrectionKind::Shift);
    assert_eq!(c.delay_ms, DEFAULT_FRAME_DELAY_MS);
    assert_window_invariants(&w);

    let off = w.apply_correction(c).unwrap();
    assert_eq!(off, ContentOffset::unanimated(100.0 * 80.0 + 12.5));
    assert!(!off.animated);
    assert!(!w.is_adjusting());

    // The same logical row is under the viewport after the correction.
    assert_eq!(w.anchor_at_offset(off.y), w.anchor());
}

#[test]
fn anchors_inside_band_never_reload() {
    let mut rng = Lcg::new(1234);
    let mut w = demo();
    for _ in 0..200 {
        w.load_window(rng.gen_range_i64(0, 999_801));
        let (lower, upper) = w.shift_band();
        let revision = w.revision();
        let start = w.window_start();

        let rel = rng.gen_range_i64((lower - start) as i64, (upper - start) as i64 + 1);
        let in_item = rng.gen_range_i64(0, 80) as f32;
        assert!(w.on_scroll_end(rel as f32 * 80.0 + in_item).is_none());

        assert_eq!(w.anchor().index, start + rel as usize);
        assert_eq!(w.anchor().offset_in_item, in_item);
        assert_eq!(w.revision(), revision);
        assert_eq!(w.window_start(), start);
        assert!(!w.is_adjusting());
    }
}

#[test]
fn shift_lands_anchor_inside_new_window() {
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let mut w = demo();
        w.load_window(rng.gen_range_i64(0, 999_801));
        let offset = rng.gen_range_i64(-40_000, 56_000) as f32;
        if let Some(c) = w.on_scroll_end(offset) {
            let a = w.anchor();
            assert!(w.window_range().contains(&a.index));
            let off = w.apply_correction(c).unwrap();
            assert!(off.y >= 0.0 && off.y < w.content_height());
            assert_eq!(w.anchor_at_offset(off.y).index, a.index);
        }
        assert_window_invariants(&w);
    }
}

#[test]
fn scroll_end_is_ignored_while_adjusting() {
    let mut w = demo();
    let c = w.on_scroll_end(190.0 * 80.0).unwrap();
    let before = w.snapshot();

    assert!(w.on_scroll_end(0.0).is_none());
    assert_eq!(w.snapshot(), before);

    w.apply_correction(c).unwrap();
    assert!(w.on_scroll_end(0.0).is_some());
}

#[test]
fn shift_absorbed_by_clamp_is_noop() {
    let mut w = demo();
    // Anchor 10 is below the band, but re-centering on it clamps back to 0.
    assert!(w.on_scroll_end(10.0 * 80.0).is_none());
    assert_eq!(w.window_start(), 0);
    assert!(!w.is_adjusting());
    assert_eq!(w.revision(), 1);

    w.load_window(i64::MAX);
    assert!(w.on_scroll_end(199.0 * 80.0 + 79.0).is_none());
    assert_eq!(w.anchor().index, 999_999);
    assert_eq!(w.window_start(), 999_800);
}

#[test]
fn negative_and_oversized_offsets_clamp_anchor() {
    let mut w = demo();
    w.load_window(5_000);

    assert!(w.on_scroll_end(-40.0).is_some());
    assert_eq!(w.anchor().index, 4_999);
    assert_eq!(w.anchor().offset_in_item, 40.0);
    assert_window_invariants(&w);

    let mut w = demo();
    w.on_scroll_end(-1_000_000.0);
    assert_eq!(w.anchor(), Anchor::default());

    let mut w = demo();
    w.load_window(i64::MAX);
    w.on_scroll_end(1.0e9);
    assert_eq!(w.anchor().index, 999_999);
    assert_eq!(w.anchor().offset_in_item, 0.0);
    assert_window_invariants(&w);
}

#[test]
fn non_finite_offsets_are_ignored() {
    let mut w = demo();
    w.on_scroll_end(800.0);
    let before = w.snapshot();
    assert!(w.on_scroll_end(f32::NAN).is_none());
    assert!(w.on_scroll_end(f32::INFINITY).is_none());
    assert_eq!(w.snapshot(), before);
}

#[test]
fn jump_to_end_clamps_window_and_offsets_target() {
    let mut w = demo();
    let c = w.jump_to(999_999);
    assert_eq!(w.window_start(), 999_800);
    assert_eq!(c.kind, CorrectionKind::Jump);
    assert_eq!(c.target.index, 999_999);
    let off = w.apply_correction(c).unwrap();
    assert_eq!(off.y, 15_920.0);
    assert!(!off.animated);
    assert_window_invariants(&w);
}

#[test]
fn jump_to_start_and_middle() {
    let mut w = demo();
    w.load_window(70_000);
    let c = w.jump_to(0);
    assert_eq!(w.window_start(), 0);
    assert_eq!(w.apply_correction(c).unwrap().y, 0.0);

    let c = w.jump_to(500_000);
    assert_eq!(w.window_start(), 499_900);
    assert_eq!(w.apply_correction(c).unwrap().y, 100.0 * 80.0);
}

#[test]
fn jump_target_is_clamped_to_universe() {
    let mut w = demo();
    let c = w.jump_to(-5);
    assert_eq!(c.target.index, 0);
    let c = w.jump_to(5_000_000);
    assert_eq!(c.target.index, 999_999);
    assert_eq!(w.window_start(), 999_800);
}

#[test]
fn jump_leaves_anchor_stale_by_default() {
    let mut w = demo();
    w.on_scroll_end(120.0 * 80.0);
    let anchor = w.anchor();
    let c = w.jump_to(500_000);
    assert_eq!(w.anchor(), anchor);

    // A scroll-end before the correction lands re-anchors relative to the new window.
    assert!(w.on_scroll_end(0.0).is_some());
    assert_eq!(w.anchor().index, 499_900);
    assert!(w.apply_correction(c).is_none());
}

#[test]
fn jump_can_sync_anchor() {
    let mut w = WindowList::new(WindowOptions::demo().with_sync_anchor_on_jump(true)).unwrap();
    let c = w.jump_to(500_000);
    assert_eq!(
        w.anchor(),
        Anchor {
            index: 500_000,
            offset_in_item: 0.0
        }
    );
    let off = w.apply_correction(c).unwrap();
    assert!(w.on_scroll_end(off.y).is_none());
}

#[test]
fn stale_corrections_are_discarded() {
    let mut w = demo();
    let first = w.on_scroll_end(190.0 * 80.0).unwrap();
    let second = w.jump_to(400_000);
    assert!(!w.is_adjusting());
    assert!(second.generation > first.generation);

    assert!(w.apply_correction(first).is_none());
    let off = w.apply_correction(second).unwrap();
    assert_eq!(off.y, 100.0 * 80.0);

    // Delivering the current correction twice is harmless.
    assert_eq!(w.apply_correction(second), Some(off));
}

#[test]
fn explicit_load_cancels_pending_shift() {
    let mut w = demo();
    let c = w.on_scroll_end(190.0 * 80.0).unwrap();
    assert!(w.is_adjusting());
    w.load_window(0);
    assert!(!w.is_adjusting());
    assert!(w.apply_correction(c).is_none());
}

#[test]
fn offset_and_index_queries() {
    let mut w = demo();
    w.load_window(300);
    assert_eq!(w.window_range(), 300..500);
    assert_eq!(w.offset_for_index(300), Some(0.0));
    assert_eq!(w.offset_for_index(310), Some(800.0));
    assert_eq!(w.offset_for_index(299), None);
    assert_eq!(w.offset_for_index(500), None);
    assert_eq!(w.index_at_offset(801.0), 310);
    assert_eq!(w.row(310).map(|r| r.index), Some(310));
    assert!(w.row(10).is_none());
    assert_eq!(w.content_height(), 16_000.0);
}

#[test]
fn invalid_options_fail_fast() {
    assert_eq!(
        WindowList::new(WindowOptions::new(100, 0, 10.0)).unwrap_err(),
        ConfigError::EmptyWindow
    );
    assert_eq!(
        WindowList::new(WindowOptions::new(10, 20, 10.0)).unwrap_err(),
        ConfigError::WindowLargerThanUniverse {
            window_size: 20,
            total_count: 10
        }
    );
    assert!(matches!(
        WindowList::new(WindowOptions::new(10, 5, 0.0)).unwrap_err(),
        ConfigError::InvalidItemHeight(_)
    ));
    assert!(WindowOptions::new(10, 5, f32::NAN).validate().is_err());
    assert!(WindowOptions::new(10, 10, 1.0).validate().is_ok());
}

#[test]
fn options_debug_lists_only_configuration() {
    let opts = WindowOptions::demo().with_on_change(Some(|_: &WindowList| {}));
    let dbg = format!("{opts:?}");
    assert_eq!(
        dbg,
        "WindowOptions { total_count: 1000000, window_size: 200, item_height: 80.0, \
         frame_delay_ms: 16, sync_anchor_on_jump: false, .. }"
    );
}

#[test]
fn window_equal_to_universe_never_shifts() {
    let mut w = WindowList::new(WindowOptions::new(8, 8, 10.0)).unwrap();
    assert!(w.on_scroll_end(75.0).is_none());
    assert_eq!(w.anchor().index, 7);
    let c = w.jump_to(7);
    assert_eq!(w.window_start(), 0);
    assert_eq!(w.apply_correction(c).unwrap().y, 70.0);
}

#[test]
fn on_change_fires_per_reload() {
    let calls = Arc::new(AtomicUsize::new(0));
    let opts = WindowOptions::demo().with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |w: &WindowList| {
            assert_eq!(w.rows()[0].index, w.window_start());
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    let mut w = WindowList::new(opts).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    w.on_scroll_end(80.0);
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    w.on_scroll_end(190.0 * 80.0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    w.batch_update(|w| {
        w.load_window(10);
        w.load_window(20);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn update_options_revalidates_and_reloads() {
    let mut w = demo();
    w.load_window(999_800);
    w.on_scroll_end(150.0 * 80.0);

    w.update_options(|o| o.total_count = 1_000).unwrap();
    assert_eq!(w.window_start(), 800);
    assert_eq!(w.anchor().index, 999);
    assert_window_invariants(&w);

    let err = w.update_options(|o| o.window_size = 2_000).unwrap_err();
    assert!(matches!(err, ConfigError::WindowLargerThanUniverse { .. }));
    assert_eq!(w.window_size(), 200);
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_roundtrips_through_serde() {
    let mut w = demo();
    w.on_scroll_end(8080.0);
    let snap = w.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: WindowSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}
