use cgmath::Vector2;

/// Axis-aligned rectangle in screen pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "rectangle must have a positive size");

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn translate(&mut self, offset: Vector2<i32>) {
        self.x += offset.x;
        self.y += offset.y;
    }

    /// Returns true when both rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-1000..1000i32, -1000..1000i32, 1..500i32, 1..500i32)
            .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
    }

    #[test]
    fn edges_and_center() {
        let rect = Rect::new(350, 570, 100, 10);

        assert_eq!(rect.left(), 350);
        assert_eq!(rect.right(), 450);
        assert_eq!(rect.top(), 570);
        assert_eq!(rect.bottom(), 580);
        assert_eq!(rect.center_x(), 400);
        assert_eq!(rect.center_y(), 575);
    }

    #[test]
    fn translate_moves_position_only() {
        let mut rect = Rect::new(400, 300, 20, 20);
        rect.translate(Vector2::new(4, -4));

        assert_eq!(rect, Rect::new(404, 296, 20, 20));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);

        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(a.overlaps(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn contained_rectangle_overlaps() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);

        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn rectangle_overlaps_itself(a in rect_strategy()) {
            prop_assert!(a.overlaps(&a));
        }
    }
}
