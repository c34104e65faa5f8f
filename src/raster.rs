// Stroke rasterization: square brush stamps + Bresenham walks between samples.
// Visual: fast mouse drags still leave one continuous line, no dotted gaps.

use crate::buffer::PixelBuffer;
use crate::types::{Color, Point};

/// Cells covered by a brush of `width` centered at `center`:
/// the (2w+1) x (2w+1) square, row by row. Cells past the i32 range are left out;
/// no other clipping here.
pub fn footprint(center: Point, width: u32) -> impl Iterator<Item = Point> {
    let w = width as i64;
    let (cx, cy) = (center.x as i64, center.y as i64);
    (-w..=w).flat_map(move |dy| {
        (-w..=w).filter_map(move |dx| {
            let x = i32::try_from(cx + dx).ok()?;
            let y = i32::try_from(cy + dy).ok()?;
            Some(Point::new(x, y))
        })
    })
}

/// Stamp the brush at (x, y). Cells the buffer refuses (edges, row/col 0) are skipped.
pub fn paint_disk(buf: &mut PixelBuffer, x: i32, y: i32, width: u32, color: Color) {
    for p in footprint(Point::new(x, y), width) {
        buf.set(p.x, p.y, color);
    }
}

/// Walk `from` -> `to` with the classic error accumulator, painting a disk
/// at every visited cell (both endpoints included).
pub fn paint_segment(buf: &mut PixelBuffer, from: Point, to: Point, width: u32, color: Color) {
    for p in line_cells(from, to) {
        paint_disk(buf, p.x, p.y, width, color);
    }
}

/// Cell centers visited on the way from `from` to `to`.
pub fn line_cells(from: Point, to: Point) -> LineCells {
    let dx = (to.x as i64 - from.x as i64).abs();
    let dy = (to.y as i64 - from.y as i64).abs();
    LineCells {
        cur: from,
        to,
        dx,
        dy,
        sx: if from.x < to.x { 1 } else { -1 },
        sy: if from.y < to.y { 1 } else { -1 },
        err: dx - dy,
        done: false,
    }
}

/// Iterator over a Bresenham line. Consecutive items differ by at most
/// one cell on each axis.
#[derive(Clone, Debug)]
pub struct LineCells {
    cur: Point,
    to: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl Iterator for LineCells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let here = self.cur;
        if here == self.to {
            self.done = true;
            return Some(here);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(here)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = (self.to.x as i64 - self.cur.x as i64)
            .abs()
            .max((self.to.y as i64 - self.cur.y as i64).abs()) as usize
            + 1;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BACKGROUND;
    use crate::types::BLACK;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn painted(buf: &PixelBuffer) -> HashSet<(usize, usize)> {
        let mut out = HashSet::new();
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if buf.get(x, y) != BACKGROUND {
                    out.insert((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn footprint_is_a_square() {
        let cells: Vec<Point> = footprint(Point::new(5, 5), 1).collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Point::new(4, 4));
        assert_eq!(cells[8], Point::new(6, 6));
        assert_eq!(footprint(Point::new(-3, 2), 0).collect::<Vec<_>>(), vec![Point::new(-3, 2)]);
    }

    #[test]
    fn disk_paints_exactly_the_square() {
        let mut buf = PixelBuffer::new(12, 12);
        paint_disk(&mut buf, 5, 6, 2, BLACK);
        let expected: HashSet<_> =
            (3..=7).flat_map(|x| (4..=8).map(move |y| (x, y))).collect();
        assert_eq!(painted(&buf), expected);
    }

    #[test]
    fn disk_near_origin_skips_row_and_column_zero() {
        let mut buf = PixelBuffer::new(8, 8);
        paint_disk(&mut buf, 1, 1, 1, BLACK);
        let expected: HashSet<_> = [(1, 1), (1, 2), (2, 1), (2, 2)].into_iter().collect();
        assert_eq!(painted(&buf), expected);
    }

    #[test]
    fn disk_at_origin_paints_nothing() {
        let mut buf = PixelBuffer::new(4, 4);
        paint_disk(&mut buf, 0, 0, 0, BLACK);
        assert!(painted(&buf).is_empty());
    }

    #[test]
    fn disk_past_far_edge_is_clipped() {
        let mut buf = PixelBuffer::new(4, 4);
        paint_disk(&mut buf, 4, 4, 1, BLACK);
        let expected: HashSet<_> = [(3, 3)].into_iter().collect();
        assert_eq!(painted(&buf), expected);
    }

    #[test]
    fn disk_at_i32_extremes_is_dropped() {
        let mut buf = PixelBuffer::new(8, 8);
        paint_disk(&mut buf, i32::MAX, 3, 1, BLACK);
        paint_disk(&mut buf, i32::MIN, i32::MIN, 2, BLACK);
        paint_disk(&mut buf, 3, i32::MAX, 50, BLACK);
        assert!(painted(&buf).is_empty());
    }

    #[test]
    fn footprint_at_i32_max_keeps_representable_cells() {
        let cells: Vec<Point> = footprint(Point::new(i32::MAX, 0), 1).collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|p| p.x >= i32::MAX - 1));
    }

    #[test]
    fn diagonal_segment_on_small_buffer() {
        let mut buf = PixelBuffer::new(4, 4);
        paint_segment(&mut buf, Point::new(1, 1), Point::new(3, 3), 0, BLACK);
        let expected: HashSet<_> = [(1, 1), (2, 2), (3, 3)].into_iter().collect();
        assert_eq!(painted(&buf), expected);
    }

    #[test]
    fn zero_length_segment_is_one_disk() {
        let cells: Vec<_> = line_cells(Point::new(4, 9), Point::new(4, 9)).collect();
        assert_eq!(cells, vec![Point::new(4, 9)]);

        let mut a = PixelBuffer::new(10, 10);
        let mut b = PixelBuffer::new(10, 10);
        paint_segment(&mut a, Point::new(5, 5), Point::new(5, 5), 2, BLACK);
        paint_disk(&mut b, 5, 5, 2, BLACK);
        assert_eq!(painted(&a), painted(&b));
    }

    #[test]
    fn shallow_line_steps_every_column() {
        let cells: Vec<_> = line_cells(Point::new(0, 0), Point::new(6, 2)).collect();
        assert_eq!(cells.len(), 7);
        let xs: Vec<i32> = cells.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn reverse_walk_covers_same_length() {
        let fwd: Vec<_> = line_cells(Point::new(2, 9), Point::new(11, 1)).collect();
        let back: Vec<_> = line_cells(Point::new(11, 1), Point::new(2, 9)).collect();
        assert_eq!(fwd.len(), back.len());
        assert_eq!(fwd.first(), back.last());
    }

    fn coord() -> impl Strategy<Value = i32> {
        -300i32..300
    }

    proptest! {
        #[test]
        fn segment_is_eight_connected(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let from = Point::new(x0, y0);
            let to = Point::new(x1, y1);
            let cells: Vec<_> = line_cells(from, to).collect();

            prop_assert_eq!(cells.first().copied(), Some(from));
            prop_assert_eq!(cells.last().copied(), Some(to));
            let steps = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
            prop_assert_eq!(cells.len(), steps + 1);
            for pair in cells.windows(2) {
                let ddx = (pair[1].x - pair[0].x).abs();
                let ddy = (pair[1].y - pair[0].y).abs();
                prop_assert!(ddx <= 1 && ddy <= 1 && (ddx, ddy) != (0, 0));
            }
        }

        #[test]
        fn size_hint_is_exact(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let walk = line_cells(Point::new(x0, y0), Point::new(x1, y1));
            let (lo, hi) = walk.size_hint();
            let n = walk.count();
            prop_assert_eq!(lo, n);
            prop_assert_eq!(hi, Some(n));
        }

        #[test]
        fn disk_stays_inside_its_square(x in -4i32..20, y in -4i32..20, w in 0u32..5) {
            let mut buf = PixelBuffer::new(16, 16);
            paint_disk(&mut buf, x, y, w, BLACK);
            let w = w as i32;
            for (cx, cy) in painted(&buf) {
                let (cx, cy) = (cx as i32, cy as i32);
                prop_assert!((cx - x).abs() <= w && (cy - y).abs() <= w);
                prop_assert!(cx > 0 && cy > 0);
            }
            let expected = footprint(Point::new(x, y), w as u32)
                .filter(|p| buf.writable(p.x, p.y))
                .count();
            prop_assert_eq!(painted(&buf).len(), expected);
        }
    }
}
