//! Filled 2D primitives rasterized through `PixelBuffer::set_pixel`
//!
//! Both primitives are anchored on their center and rely on the buffer's
//! silent clipping near the edges.

use super::{Color, PixelBuffer};

/// Fill a circle centered on (cx, cy).
///
/// Offsets run over the half-open square `[-radius, radius)` on both axes and a
/// pixel is kept when `dx² + dy² < radius²`. The strict test never admits an
/// offset of `-radius`, so the lit disc spans `radius - 1` pixels either side.
///
/// Rows and columns whose writes `set_pixel` would drop are skipped up front;
/// what remains is written exactly as the full loop would write it.
pub fn fill_circle(buf: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: Color) {
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    // |d| <= i32::MAX, so the sum of two squares stays below i64::MAX
    let r_sq = r * r;
    for y in buf.clip_rows(cy - r, cy + r, cx - r, cx + r) {
        let dy = y - cy;
        let room = r_sq - dy * dy;
        if room <= 0 {
            continue;
        }
        // Widest |dx| with dx² < room
        let reach = (room - 1).isqrt();
        let x0 = cx + (-reach).max(-r);
        let x1 = cx + (reach + 1).min(r);
        for x in buf.clip_span(y, x0, x1) {
            let dx = x - cx;
            // squared distance, no sqrt
            if dx * dx + dy * dy < r_sq {
                buf.plot(x, y, color);
            }
        }
    }
}

/// Fill a `w` x `h` rectangle centered on (cx, cy).
///
/// The top-left corner is `(cx - w/2, cy - h/2)` with truncating division, the
/// same half-size the paddle collision threshold uses.
pub fn fill_rect(buf: &mut PixelBuffer, cx: i32, cy: i32, w: i32, h: i32, color: Color) {
    let start_x = cx as i64 - (w / 2) as i64;
    let start_y = cy as i64 - (h / 2) as i64;
    let end_x = start_x + w as i64;
    let end_y = start_y + h as i64;
    for y in buf.clip_rows(start_y, end_y, start_x, end_x) {
        for x in buf.clip_span(y, start_x, end_x) {
            buf.plot(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lit(buf: &PixelBuffer) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if buf.pixel(x, y).is_some_and(|p| p[..3] != [0, 0, 0]) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_circle_radius_one_is_single_pixel() {
        let mut buf = PixelBuffer::new(10, 10);
        fill_circle(&mut buf, 4, 4, 1, Color::WHITE);
        assert_eq!(lit(&buf), vec![(4, 4)]);
    }

    #[test]
    fn test_circle_radius_two_is_three_by_three() {
        let mut buf = PixelBuffer::new(10, 10);
        fill_circle(&mut buf, 5, 5, 2, Color::WHITE);
        let pixels = lit(&buf);
        // (-2, 0) is visited but 4 < 4 fails; (2, 0) is never visited
        assert!(!pixels.contains(&(3, 5)));
        assert!(!pixels.contains(&(7, 5)));
        assert!(pixels.contains(&(4, 4)));
        assert!(pixels.contains(&(6, 6)));
        assert_eq!(pixels.len(), 9);
    }

    #[test]
    fn test_circle_clips_at_edges() {
        let mut buf = PixelBuffer::new(10, 10);
        fill_circle(&mut buf, 0, 0, 3, Color::WHITE);
        // Negative rows are dropped, negative columns wrap to the row above
        assert_eq!(buf.pixel(0, 0).map(|p| p[0]), Some(255));
        assert_eq!(buf.pixel(8, 0).map(|p| p[0]), Some(255));
        assert_eq!(buf.pixel(9, 9).map(|p| p[0]), Some(0));
    }

    #[test]
    fn test_rect_anchored_on_center() {
        let mut buf = PixelBuffer::new(20, 20);
        fill_rect(&mut buf, 10, 10, 4, 6, Color::WHITE);
        let pixels = lit(&buf);
        assert_eq!(pixels.len(), 24);
        assert_eq!(pixels.first(), Some(&(8, 7)));
        assert_eq!(pixels.last(), Some(&(11, 12)));
    }

    #[test]
    fn test_rect_odd_size_truncates_half() {
        let mut buf = PixelBuffer::new(20, 20);
        fill_rect(&mut buf, 10, 10, 5, 3, Color::WHITE);
        let pixels = lit(&buf);
        // 5 / 2 == 2, 3 / 2 == 1
        assert_eq!(pixels.first(), Some(&(8, 9)));
        assert_eq!(pixels.last(), Some(&(12, 11)));
    }

    #[test]
    fn test_rect_keeps_alpha() {
        let mut buf = PixelBuffer::new(20, 20);
        fill_rect(&mut buf, 10, 10, 2, 2, Color::new(1, 2, 3));
        assert_eq!(buf.pixel(9, 9), Some([1, 2, 3, 0]));
    }

    /// Every offset of the circle, no clipping
    fn naive_circle(buf: &mut PixelBuffer, cx: i32, cy: i32, radius: i32, color: Color) {
        for dy in -radius..radius {
            for dx in -radius..radius {
                if dx * dx + dy * dy < radius * radius {
                    buf.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Every pixel of the rectangle, no clipping
    fn naive_rect(buf: &mut PixelBuffer, cx: i32, cy: i32, w: i32, h: i32, color: Color) {
        for y in 0..h {
            for x in 0..w {
                buf.set_pixel(cx - w / 2 + x, cy - h / 2 + y, color);
            }
        }
    }

    #[test]
    fn test_huge_radius_fills_without_overflow() {
        let mut buf = PixelBuffer::new(32, 24);
        fill_circle(&mut buf, 16, 12, 40_000, Color::WHITE);
        // Everything but the guarded last pixel
        assert_eq!(lit(&buf).len(), 32 * 24 - 1);

        // 46_341² no longer fits in an i32
        let mut buf = PixelBuffer::new(32, 24);
        fill_circle(&mut buf, 16, 12, 46_341, Color::new(1, 2, 3));
        assert_eq!(buf.pixel(0, 0), Some([1, 2, 3, 0]));
    }

    #[test]
    fn test_shapes_at_saturated_positions() {
        let mut buf = PixelBuffer::new(32, 24);
        fill_circle(&mut buf, i32::MAX, i32::MAX, 20, Color::WHITE);
        fill_circle(&mut buf, i32::MIN, i32::MIN, 20, Color::WHITE);
        fill_rect(&mut buf, 10, i32::MAX, 20, 100, Color::WHITE);
        fill_rect(&mut buf, 10, i32::MIN, 20, 100, Color::WHITE);
        fill_rect(&mut buf, i32::MAX, 0, 2, 2, Color::WHITE);
        assert!(lit(&buf).is_empty());
    }

    proptest! {
        #[test]
        fn prop_clipped_shapes_match_full_loops(
            cx in -60i32..90,
            cy in -40i32..60,
            radius in 0i32..30,
            w in 0i32..50,
            h in 0i32..50,
        ) {
            let mut fast = PixelBuffer::new(32, 24);
            let mut slow = PixelBuffer::new(32, 24);
            fill_circle(&mut fast, cx, cy, radius, Color::WHITE);
            naive_circle(&mut slow, cx, cy, radius, Color::WHITE);
            prop_assert_eq!(fast.as_bytes(), slow.as_bytes());

            let mut fast = PixelBuffer::new(32, 24);
            let mut slow = PixelBuffer::new(32, 24);
            fill_rect(&mut fast, cx, cy, w, h, Color::WHITE);
            naive_rect(&mut slow, cx, cy, w, h, Color::WHITE);
            prop_assert_eq!(fast.as_bytes(), slow.as_bytes());
        }

        #[test]
        fn prop_circle_matches_distance_test(
            cx in 5i32..27,
            cy in 5i32..19,
            radius in 1i32..5,
        ) {
            let mut buf = PixelBuffer::new(32, 24);
            fill_circle(&mut buf, cx, cy, radius, Color::WHITE);
            for y in 0..24i32 {
                for x in 0..32i32 {
                    let (dx, dy) = (x - cx, y - cy);
                    let inside = dx * dx + dy * dy < radius * radius;
                    let set = buf.pixel(x as u32, y as u32).map(|p| p[0]) == Some(255);
                    prop_assert_eq!(inside, set, "pixel ({}, {})", x, y);
                }
            }
        }
    }
}
