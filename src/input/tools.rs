/// Bresenham line algorithm - returns all grid cells between two points
pub fn bresenham(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        cells.push((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point() {
        assert_eq!(bresenham((3, 4), (3, 4)), vec![(3, 4)]);
    }

    #[test]
    fn horizontal_and_diagonal() {
        assert_eq!(bresenham((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(bresenham((2, 2), (0, 0)), vec![(2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn steep_line_has_no_gaps() {
        let line = bresenham((0, 0), (1, 5));
        assert_eq!(line.len(), 6);
        assert_eq!(line.first(), Some(&(0, 0)));
        assert_eq!(line.last(), Some(&(1, 5)));
        for pair in line.windows(2) {
            assert_eq!(pair[1].1 - pair[0].1, 1);
        }
    }
}
