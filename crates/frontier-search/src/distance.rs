use frontier_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_agree_on_straight_lines() {
        let a = Point::new(1, 1);
        let b = Point::new(1, 6);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(chebyshev(a, b), 5);
        assert_eq!(euclidean(a, b), 5.0);
    }

    #[test]
    fn metrics_on_diagonal() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(euclidean(a, b), 5.0);
    }
}
