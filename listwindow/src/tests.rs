use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

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

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

/// Naive per-row scan the O(1) math must agree with.
fn expected_visible_range(
    count: usize,
    row_size: u32,
    scroll_offset: u64,
    viewport_size: u32,
) -> WindowRange {
    if count == 0 || viewport_size == 0 || row_size == 0 {
        return WindowRange {
            start_index: 0,
            end_index: 0,
        };
    }

    let total = count as u64 * row_size as u64;
    let view = viewport_size as u64;
    let scroll_offset = scroll_offset.min(total.saturating_sub(view));
    let scroll_end = scroll_offset.saturating_add(view);

    let mut start = None;
    let mut end = 0usize;
    for i in 0..count {
        let row_start = i as u64 * row_size as u64;
        let row_end = row_start + row_size as u64;
        if row_end > scroll_offset && row_start < scroll_end {
            start.get_or_insert(i);
            end = i + 1;
        }
    }

    WindowRange {
        start_index: start.unwrap_or(count),
        end_index: end.max(start.unwrap_or(count)),
    }
}

#[test]
fn fixed_size_range_and_total() {
    let mut w = ListWindow::new(WindowOptions::new(100, 1));
    w.set_viewport_size(10);
    w.set_scroll_offset(0);
    assert_eq!(w.total_size(), 100);

    let r = w.window_range();
    assert_eq!(r.start_index, 0);
    // 10 visible + overscan(1) at end
    assert_eq!(r.end_index, 11);
}

#[test]
fn overscan_and_scroll() {
    let mut w = ListWindow::new(WindowOptions::new(100, 1));
    w.set_viewport_size(10);
    w.set_scroll_offset(50);
    let r = w.window_range();
    assert_eq!(r.start_index, 49);
    assert_eq!(r.end_index, 61);
}

#[test]
fn visible_row_count_is_ceil_of_viewport_over_row_size() {
    for (view, size) in [(400u32, 20u32), (401, 20), (399, 20), (1, 7), (100, 1)] {
        let count = 10_000;
        let mut w = ListWindow::new(WindowOptions::new(count, size).with_overscan(0));
        w.set_viewport_and_scroll(view, 0);

        let visible = w.visible_range();
        let expected = (view as usize).div_ceil(size as usize).min(count);
        assert_eq!(visible.len(), expected, "view={view} size={size}");
    }
}

#[test]
fn window_range_adds_overscan_on_each_side() {
    let mut w = ListWindow::new(WindowOptions::new(10_000, 20).with_overscan(10));
    w.set_viewport_and_scroll(400, 2_000);

    let visible = w.visible_range();
    let window = w.window_range();
    assert_eq!(window.start_index, visible.start_index - 10);
    assert_eq!(window.end_index, visible.end_index + 10);
    assert_eq!(window.len(), visible.len() + 20);
}

#[test]
fn first_computation_covers_viewport_plus_overscan() {
    // 20px rows in a 400px container with overscan 10: the first window is
    // [0, 20 + 10) before clamping to the record count.
    let mut w = ListWindow::new(WindowOptions::new(1_000_000, 20).with_overscan(10));
    w.set_viewport_and_scroll(400, 0);

    let r = w.window_range();
    assert_eq!(r.start_index, 0);
    assert_eq!(r.end_index, 30);

    // With fewer records than the window asks for, the range clamps.
    w.set_count(7);
    let r = w.window_range();
    assert_eq!(r.start_index, 0);
    assert_eq!(r.end_index, 7);
}

#[test]
fn total_size_is_count_times_row_size() {
    let w = ListWindow::new(WindowOptions::new(1_000_000, 20));
    assert_eq!(w.total_size(), 20_000_000);

    let w = ListWindow::new(WindowOptions::new(0, 20));
    assert_eq!(w.total_size(), 0);

    let w = ListWindow::new(WindowOptions::new(3, 0));
    assert_eq!(w.total_size(), 0);
}

#[test]
fn rows_are_contiguous_with_cumulative_starts() {
    let mut w = ListWindow::new(WindowOptions::new(1_000, 20).with_overscan(3));
    w.set_viewport_and_scroll(400, 317);

    let mut rows = Vec::new();
    w.collect_visible_rows(&mut rows);
    assert!(!rows.is_empty());

    for pair in rows.windows(2) {
        assert_eq!(pair[0].index + 1, pair[1].index);
        assert_eq!(pair[0].end(), pair[1].start);
    }
    for row in &rows {
        assert_eq!(row.start, row.index as u64 * 20);
        assert_eq!(row.size, 20);
    }
}

#[test]
fn scroll_offset_clamps_to_content_end() {
    let mut w = ListWindow::new(WindowOptions::new(100, 10));
    w.set_viewport_size(250);
    assert_eq!(w.max_scroll_offset(), 750);
    w.set_scroll_offset_clamped(u64::MAX);
    assert_eq!(w.scroll_offset(), 750);

    let r = w.visible_range();
    assert_eq!(r.end_index, 100);
    assert_eq!(r.start_index, 75);
}

#[test]
fn index_at_offset_round_trips() {
    let w = ListWindow::new(WindowOptions::new(100, 20));
    assert_eq!(w.index_at_offset(0), Some(0));
    assert_eq!(w.index_at_offset(19), Some(0));
    assert_eq!(w.index_at_offset(20), Some(1));
    assert_eq!(w.index_at_offset(u64::MAX), Some(99));

    let w = ListWindow::new(WindowOptions::new(0, 20));
    assert_eq!(w.index_at_offset(0), None);
}

#[test]
fn scroll_to_index_alignments() {
    let mut w = ListWindow::new(WindowOptions::new(100, 10));
    w.set_viewport_and_scroll(50, 0);

    assert_eq!(w.scroll_to_index_offset(20, Align::Start), 200);
    assert_eq!(w.scroll_to_index_offset(20, Align::End), 160);
    assert_eq!(w.scroll_to_index_offset(20, Align::Center), 180);

    // Auto keeps the offset when the row is already fully visible.
    w.set_scroll_offset(200);
    assert_eq!(w.scroll_to_index_offset(22, Align::Auto), 200);
    // Row above the viewport: align its start.
    assert_eq!(w.scroll_to_index_offset(5, Align::Auto), 50);
    // Row below the viewport: align its end.
    assert_eq!(w.scroll_to_index_offset(40, Align::Auto), 360);

    // Out-of-range indexes clamp to the last row.
    let clamped = w.scroll_to_index_offset(usize::MAX, Align::Start);
    assert_eq!(clamped, w.max_scroll_offset());
}

#[test]
fn scroll_to_index_applies_offset() {
    let mut w = ListWindow::new(WindowOptions::new(100, 10));
    w.set_viewport_and_scroll(50, 0);

    let applied = w.scroll_to_index(60, Align::Start);
    assert_eq!(applied, 600);
    assert_eq!(w.scroll_offset(), 600);
    assert!(w.visible_range().contains(60));
}

#[test]
fn disabled_window_returns_empty_results() {
    let mut w = ListWindow::new(WindowOptions::new(100, 10).with_enabled(false));
    w.set_viewport_size(50);
    assert_eq!(w.total_size(), 0);
    assert!(w.window_range().is_empty());
    assert_eq!(w.row(0), None);
    assert_eq!(w.index_at_offset(5), None);

    w.set_enabled(true);
    w.set_viewport_size(50);
    assert_eq!(w.total_size(), 1_000);
    assert!(!w.window_range().is_empty());
}

#[test]
fn zero_viewport_or_row_size_yields_empty_window() {
    let w = ListWindow::new(WindowOptions::new(100, 10));
    assert!(w.visible_range().is_empty()); // viewport still 0

    let mut w = ListWindow::new(WindowOptions::new(100, 0));
    w.set_viewport_size(50);
    assert!(w.visible_range().is_empty());

    let mut rows = Vec::new();
    w.collect_visible_rows(&mut rows);
    assert!(rows.is_empty());
}

#[test]
fn initial_rect_and_offset_provider_apply_immediately() {
    let saved = Arc::new(AtomicU64::new(120));
    let opts = WindowOptions::new(1_000, 1)
        .with_initial_rect(Some(Rect { main: 10, cross: 80 }))
        .with_initial_offset_provider({
            let saved = Arc::clone(&saved);
            move || saved.load(Ordering::Relaxed)
        });

    let w = ListWindow::new(opts);
    assert_eq!(w.viewport_size(), 10);
    assert_eq!(w.scroll_offset(), 120);
    assert_eq!(w.visible_range().start_index, 120);
}

#[test]
fn batch_update_coalesces_notifications() {
    let fired = Arc::new(AtomicU64::new(0));
    let opts = WindowOptions::new(100, 10).with_on_change(Some({
        let fired = Arc::clone(&fired);
        move |_w: &ListWindow| {
            fired.fetch_add(1, Ordering::Relaxed);
        }
    }));

    let mut w = ListWindow::new(opts);
    fired.store(0, Ordering::Relaxed);

    w.set_viewport_and_scroll(50, 30);
    assert_eq!(fired.load(Ordering::Relaxed), 1);

    // No-op setters do not notify.
    w.set_scroll_offset(30);
    w.set_viewport_size(50);
    assert_eq!(fired.load(Ordering::Relaxed), 1);

    w.batch_update(|w| {
        w.set_count(200);
        w.set_overscan(5);
        w.set_row_size(12);
    });
    assert_eq!(fired.load(Ordering::Relaxed), 2);
}

#[test]
fn update_options_rebuilds_from_current_values() {
    let mut w = ListWindow::new(WindowOptions::new(100, 10).with_overscan(2));
    w.set_viewport_and_scroll(50, 0);

    w.update_options(|o| {
        o.count = 500;
        o.row_size = 5;
    });
    assert_eq!(w.count(), 500);
    assert_eq!(w.total_size(), 2_500);
    assert_eq!(w.overscan(), 2);
}

#[test]
fn randomized_ranges_match_naive_scan() {
    let mut rng = Lcg::new(0x5eed);

    for _ in 0..500 {
        let count = rng.gen_range_usize(0, 2_000);
        let row_size = rng.gen_range_u32(0, 50);
        let viewport = rng.gen_range_u32(0, 1_000);
        let overscan = rng.gen_range_usize(0, 20);
        let total = count as u64 * row_size as u64;
        let offset = rng.gen_range_u64(0, total.saturating_add(100) + 1);

        let mut w = ListWindow::new(WindowOptions::new(count, row_size).with_overscan(overscan));
        w.set_viewport_and_scroll(viewport, offset);

        let expected = expected_visible_range(count, row_size, offset, viewport);
        let visible = w.visible_range();
        assert_eq!(
            visible, expected,
            "count={count} row_size={row_size} viewport={viewport} offset={offset}"
        );

        let window = w.window_range();
        if visible.is_empty() {
            assert!(window.is_empty());
        } else {
            assert_eq!(window.start_index, visible.start_index.saturating_sub(overscan));
            assert_eq!(
                window.end_index,
                (visible.end_index + overscan).min(count)
            );
        }

        // Emitted rows agree with the range and with the O(1) start math.
        let mut rows = Vec::new();
        w.collect_visible_rows(&mut rows);
        assert_eq!(rows.len(), window.len());
        for row in &rows {
            assert!(window.contains(row.index));
            assert_eq!(row.start, row.index as u64 * row_size as u64);
        }
    }
}
