//! Collision detection for axis-aligned boxes
//!
//! Every entity is a rectangle, so a single strict overlap test covers
//! ball/paddle and ball/enemy contact.

use super::rect::Rect;

/// Check whether two rectangles overlap
///
/// Intervals are compared with strict inequalities: rectangles that only
/// share an edge do not collide.
#[inline]
pub fn colliding(a: Rect, b: Rect) -> bool {
    a.left < b.right && b.left < a.right && a.top < b.bottom && b.top < a.bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::from_xywh(0, 0, 20, 20);
        let b = Rect::from_xywh(10, 10, 20, 20);
        assert!(colliding(a, b));
        assert!(colliding(b, a));
    }

    #[test]
    fn test_contained_rect_collides() {
        let outer = Rect::from_xywh(0, 0, 100, 100);
        let inner = Rect::from_xywh(40, 40, 5, 5);
        assert!(colliding(outer, inner));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::from_xywh(0, 0, 20, 20);
        // Shares the vertical edge x = 20
        assert!(!colliding(a, Rect::from_xywh(20, 0, 20, 20)));
        // Shares the horizontal edge y = 20
        assert!(!colliding(a, Rect::from_xywh(0, 20, 20, 20)));
        // Shares only a corner
        assert!(!colliding(a, Rect::from_xywh(20, 20, 20, 20)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500i32..500, -500i32..500, 1i32..200, 1i32..200)
            .prop_map(|(x, y, w, h)| Rect::from_xywh(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_disjoint_on_x_never_collides(a in rect_strategy(), gap in 0i32..100, y in -500i32..500, w in 1i32..200, h in 1i32..200) {
            let b = Rect::from_xywh(a.right + gap, y, w, h);
            prop_assert!(!colliding(a, b));
            prop_assert!(!colliding(b, a));
        }

        #[test]
        fn prop_disjoint_on_y_never_collides(a in rect_strategy(), gap in 0i32..100, x in -500i32..500, w in 1i32..200, h in 1i32..200) {
            let b = Rect::from_xywh(x, a.bottom + gap, w, h);
            prop_assert!(!colliding(a, b));
        }

        #[test]
        fn prop_shared_interior_point_collides(a in rect_strategy(), b in rect_strategy()) {
            let shares_interior = a.left.max(b.left) < a.right.min(b.right)
                && a.top.max(b.top) < a.bottom.min(b.bottom);
            prop_assert_eq!(colliding(a, b), shares_interior);
        }

        #[test]
        fn prop_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(colliding(a, b), colliding(b, a));
        }
    }
}
