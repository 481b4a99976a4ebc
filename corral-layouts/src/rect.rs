use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Rectangle dimensions in absolute screen coordinates
pub struct Rect {
    /// Left point of the rectangle
    pub left: i32,
    /// Top point of the rectangle
    pub top: i32,
    /// Width of the rectangle (from the left point)
    pub right: i32,
    /// Height of the rectangle (from the top point)
    pub bottom: i32,
}

impl Rect {
    #[must_use]
    pub const fn right_edge(&self) -> i32 {
        self.left + self.right
    }

    #[must_use]
    pub const fn bottom_edge(&self) -> i32 {
        self.top + self.bottom
    }

    /// The centre point, rounded towards the top-left on odd dimensions.
    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        (self.left + self.right / 2, self.top + self.bottom / 2)
    }

    #[must_use]
    pub const fn contains_point(&self, point: (i32, i32)) -> bool {
        point.0 >= self.left
            && point.0 <= self.left + self.right
            && point.1 >= self.top
            && point.1 <= self.top + self.bottom
    }

    /// A rectangle with no area cannot hold any window placements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.right <= 0 || self.bottom <= 0
    }

    #[must_use]
    pub fn is_same_size_as(&self, rhs: &Self) -> bool {
        self.right == rhs.right && self.bottom == rhs.bottom
    }

    #[must_use]
    pub fn has_same_position_as(&self, rhs: &Self) -> bool {
        self.left == rhs.left && self.top == rhs.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_even_rect() {
        let rect = Rect {
            left: 100,
            top: 200,
            right: 800,
            bottom: 600,
        };

        assert_eq!(rect.center(), (500, 500));
    }

    #[test]
    fn test_edges() {
        let rect = Rect {
            left: 60,
            top: 30,
            right: 1860,
            bottom: 1050,
        };

        assert_eq!(rect.right_edge(), 1920);
        assert_eq!(rect.bottom_edge(), 1080);
    }

    #[test]
    fn test_contains_point_on_boundary() {
        let rect = Rect {
            left: 0,
            top: 0,
            right: 100,
            bottom: 100,
        };

        assert!(rect.contains_point((0, 0)));
        assert!(rect.contains_point((100, 100)));
        assert!(!rect.contains_point((101, 50)));
    }

    #[test]
    fn test_zero_area_is_empty() {
        let rect = Rect {
            left: 10,
            top: 10,
            right: 0,
            bottom: 50,
        };

        assert!(rect.is_empty());
        assert!(!Rect {
            left: 0,
            top: 0,
            right: 1,
            bottom: 1
        }
        .is_empty());
    }
}
