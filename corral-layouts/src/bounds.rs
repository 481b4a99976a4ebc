use super::Rect;
use super::Window;

/// Calculate the maximal usable rectangle within a set of strut windows.
///
/// Only struts that span a screen edge are recognized: a taller-than-wide
/// strut anchored at the left or right edge, or a wider-than-tall strut
/// anchored at the top or bottom edge (a standard panel setup). Anything
/// else is a floating element; it is logged and excluded from the
/// computation.
///
/// With no struts the full screen rectangle is returned. If pathological
/// struts occlude the whole screen the result is clamped to zero width
/// or height rather than going negative; callers must treat an empty
/// work area as unusable.
#[must_use]
pub fn calculate_bounds(screen: &Rect, struts: &[Window]) -> Rect {
    let mut edge_left = 0;
    let mut edge_top = 0;
    let mut edge_right = screen.right;
    let mut edge_bottom = screen.bottom;

    for strut in struts {
        let rect = &strut.rect;
        let tall = rect.bottom > rect.right;
        let wide = rect.right > rect.bottom;

        if tall && rect.left == 0 {
            edge_left = edge_left.max(rect.right_edge());
        } else if wide && rect.top == 0 {
            edge_top = edge_top.max(rect.bottom_edge());
        } else if tall && rect.right_edge() == screen.right {
            edge_right = edge_right.min(rect.left);
        } else if wide && rect.bottom_edge() == screen.bottom {
            edge_bottom = edge_bottom.min(rect.top);
        } else {
            tracing::warn!(
                "desktop layout contains floating element at ({}, {})@{}x{}",
                rect.left,
                rect.top,
                rect.right,
                rect.bottom
            );
        }
    }

    let mut work_area = Rect {
        left: edge_left,
        top: edge_top,
        right: edge_right - edge_left,
        bottom: edge_bottom - edge_top,
    };

    if work_area.right < 0 || work_area.bottom < 0 {
        tracing::warn!(
            "struts fully occlude the screen, clamping work area ({}, {})@{}x{}",
            work_area.left,
            work_area.top,
            work_area.right,
            work_area.bottom
        );

        work_area.right = work_area.right.max(0);
        work_area.bottom = work_area.bottom.max(0);
    }

    tracing::debug!(
        "calculated desktop bounds ({}, {}), ({}, {})",
        edge_left,
        edge_top,
        edge_right,
        edge_bottom
    );

    work_area
}
