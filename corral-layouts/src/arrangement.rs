use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

use super::Rect;
use super::Window;
use super::WindowId;

/// A computed target geometry for one window, to be applied by the
/// external caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Placement {
    pub id: WindowId,
    pub rect: Rect,
}

pub trait Arrangement {
    /// Compute target geometries for the given windows within the work
    /// area. An empty result means the layout declined to act (no
    /// windows, or no active window where one is required); a non-empty
    /// result always covers every window the layout manages.
    fn calculate(
        &self,
        area: &Rect,
        windows: &[Window],
        active: Option<WindowId>,
    ) -> Vec<Placement>;
}

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Display, EnumString, ValueEnum,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
/// A predefined repositioning layout
pub enum DefaultLayout {
    /// Grow the active window in all four directions until it touches
    /// another window or the work area edge
    ///
    /// ```text
    /// +---+---------+      +---+---------+
    /// |   |  +---+  |      |   |+-------+|
    /// | A |  | B |  |  ->  | A ||   B   ||
    /// |   |  +---+  |      |   |+-------+|
    /// +---+---------+      +---+---------+
    /// ```
    Expand,
    /// Arrange all windows in the smallest square-ish grid that holds
    /// them, in input order, row-major
    ///
    /// ```text
    /// +-----+-----+   +---+---+---+   +---+---+---+
    /// |     |     |   |   |   |   |   |   |   |   |
    /// +-----+-----+   +---+---+---+   +---+---+---+
    /// |     |     |   |   |   |   |   |   |   |
    /// +-----+-----+   +---+---+---+   +---+---+
    ///   4 windows       6 windows       5 windows
    /// ```
    Tile,
    /// The active window takes the left two thirds of the work area;
    /// the rest stack top-to-bottom in the right third
    ///
    /// ```text
    /// +---------+----+
    /// |         |    |
    /// |         +----+
    /// |         |    |
    /// +---------+----+
    /// ```
    TwoThirds,
}

impl Arrangement for DefaultLayout {
    fn calculate(
        &self,
        area: &Rect,
        windows: &[Window],
        active: Option<WindowId>,
    ) -> Vec<Placement> {
        if windows.is_empty() {
            tracing::debug!("layout {self} invoked with no windows");
            return vec![];
        }

        match self {
            Self::Expand => expand(area, windows, active),
            Self::Tile => tile(area, windows),
            Self::TwoThirds => two_thirds(area, windows, active),
        }
    }
}

fn expand(area: &Rect, windows: &[Window], active: Option<WindowId>) -> Vec<Placement> {
    let Some(active) = active else {
        tracing::debug!("no active window to expand");
        return vec![];
    };

    let Some(target) = windows.iter().find(|w| w.id == active) else {
        tracing::debug!("active window is not among the arrangeable windows");
        return vec![];
    };

    let rect = &target.rect;

    let mut bound_left = area.left;
    let mut bound_top = area.top;
    let mut bound_right = area.right_edge();
    let mut bound_bottom = area.bottom_edge();

    for window in windows {
        if window.id == active {
            continue;
        }

        let other = &window.rect;

        // A window wholly to the left limits how far left we may grow,
        // and likewise for the other three directions. Windows that
        // already overlap the active one impose no bound.
        if rect.left > other.right_edge() {
            bound_left = bound_left.max(other.right_edge());
        }

        if rect.right_edge() < other.left {
            bound_right = bound_right.min(other.left);
        }

        if rect.top > other.bottom_edge() {
            bound_top = bound_top.max(other.bottom_edge());
        }

        if rect.bottom_edge() < other.top {
            bound_bottom = bound_bottom.min(other.top);
        }
    }

    tracing::debug!(
        "expanding window to ({}, {}) @ {}x{}",
        bound_left,
        bound_top,
        bound_right - bound_left,
        bound_bottom - bound_top
    );

    vec![Placement {
        id: active,
        rect: Rect {
            left: bound_left,
            top: bound_top,
            right: bound_right - bound_left,
            bottom: bound_bottom - bound_top,
        },
    }]
}

/// The smallest square-ish (cols, rows) grid holding `count` cells,
/// wide rather than tall when the two differ
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn grid_dimensions(count: usize) -> (usize, usize) {
    let cols = (count as f32).sqrt().ceil() as usize;

    if cols * cols == count {
        return (cols, cols);
    }

    let mut rows = (count as f32).sqrt().floor() as usize;

    // Adjust for the odd cases (like count = 3)
    if cols * rows < count {
        rows += 1;
    }

    (cols, rows)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn tile(area: &Rect, windows: &[Window]) -> Vec<Placement> {
    let (cols, rows) = grid_dimensions(windows.len());

    // Integer division; remainder pixels are dropped rather than
    // redistributed across cells
    let cell_width = area.right / cols as i32;
    let cell_height = area.bottom / rows as i32;

    tracing::debug!("grid is {cols}x{rows}, with cell size {cell_width}x{cell_height}");

    let mut placements = Vec::with_capacity(windows.len());
    let mut col = 0;
    let mut row = 0;

    for window in windows {
        placements.push(Placement {
            id: window.id,
            rect: Rect {
                left: area.left + col as i32 * cell_width,
                top: area.top + row as i32 * cell_height,
                right: cell_width,
                bottom: cell_height,
            },
        });

        col += 1;

        if col == cols {
            col = 0;
            row += 1;
        }
    }

    placements
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn two_thirds(area: &Rect, windows: &[Window], active: Option<WindowId>) -> Vec<Placement> {
    // A single window gets the entire work area, active or not
    if let [only] = windows {
        return vec![Placement {
            id: only.id,
            rect: *area,
        }];
    }

    let Some(active) = active.filter(|id| windows.iter().any(|w| w.id == *id)) else {
        tracing::debug!("no active window for the two thirds split");
        return vec![];
    };

    let primary_width = area.right * 2 / 3;
    let stack_width = area.right - primary_width;
    let stack_height = area.bottom / (windows.len() as i32 - 1);

    let mut placements = Vec::with_capacity(windows.len());
    let mut row = 0;

    for window in windows {
        if window.id == active {
            placements.push(Placement {
                id: window.id,
                rect: Rect {
                    left: area.left,
                    top: area.top,
                    right: primary_width,
                    bottom: area.bottom,
                },
            });
        } else {
            placements.push(Placement {
                id: window.id,
                rect: Rect {
                    left: area.left + primary_width,
                    top: area.top + row * stack_height,
                    right: stack_width,
                    bottom: stack_height,
                },
            });

            row += 1;
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect {
            left: 0,
            top: 0,
            right: 1000,
            bottom: 1000,
        }
    }

    fn window_at(id: u64, left: i32, top: i32, right: i32, bottom: i32) -> Window {
        Window::new(
            id,
            Rect {
                left,
                top,
                right,
                bottom,
            },
        )
    }

    mod expand_layout_tests {
        use super::*;

        #[test]
        fn test_lone_window_expands_to_work_area() {
            let area = Rect {
                left: 0,
                top: 0,
                right: 1920,
                bottom: 1080,
            };
            let active = window_at(1, 0, 0, 800, 600);

            let placements =
                DefaultLayout::Expand.calculate(&area, &[active], Some(active.id));

            assert_eq!(placements.len(), 1);
            assert_eq!(placements[0].rect, area);
        }

        #[test]
        fn test_expand_stops_at_neighbouring_windows() {
            let area = test_area();
            let active = window_at(1, 400, 400, 200, 200);
            // Wholly to the left and wholly below the active window
            let left = window_at(2, 0, 0, 300, 1000);
            let below = window_at(3, 0, 800, 1000, 200);

            let windows = vec![active, left, below];
            let placements = DefaultLayout::Expand.calculate(&area, &windows, Some(active.id));

            assert_eq!(
                placements,
                vec![Placement {
                    id: active.id,
                    rect: Rect {
                        left: 300,
                        top: 0,
                        right: 700,
                        bottom: 800,
                    },
                }]
            );
        }

        #[test]
        fn test_overlapping_window_imposes_no_bound() {
            let area = test_area();
            let active = window_at(1, 400, 400, 200, 200);
            let overlapping = window_at(2, 350, 350, 300, 300);

            let windows = vec![active, overlapping];
            let placements = DefaultLayout::Expand.calculate(&area, &windows, Some(active.id));

            assert_eq!(placements[0].rect, area);
        }

        #[test]
        fn test_no_active_window_is_a_noop() {
            let area = test_area();
            let windows = vec![window_at(1, 0, 0, 100, 100)];

            assert!(DefaultLayout::Expand.calculate(&area, &windows, None).is_empty());
        }

        #[test]
        fn test_expand_respects_work_area_offsets() {
            let area = Rect {
                left: 60,
                top: 30,
                right: 1860,
                bottom: 1050,
            };
            let active = window_at(1, 500, 500, 200, 200);

            let placements =
                DefaultLayout::Expand.calculate(&area, &[active], Some(active.id));

            assert_eq!(placements[0].rect, area);
        }
    }

    mod tile_layout_tests {
        use super::*;

        #[test]
        fn test_grid_dimensions_hold_all_windows() {
            for count in 1..=50 {
                let (cols, rows) = grid_dimensions(count);

                assert!(cols * rows >= count, "grid too small for {count}");
                assert!(
                    (rows - 1) * cols < count,
                    "grid has a wasted empty row for {count}"
                );
            }
        }

        #[test]
        fn test_perfect_square_counts() {
            assert_eq!(grid_dimensions(4), (2, 2));
            assert_eq!(grid_dimensions(9), (3, 3));
        }

        #[test]
        fn test_odd_counts() {
            assert_eq!(grid_dimensions(3), (2, 2));
            assert_eq!(grid_dimensions(5), (3, 2));
            assert_eq!(grid_dimensions(7), (3, 3));
        }

        #[test]
        fn test_four_windows_make_a_two_by_two_grid() {
            let area = test_area();
            let windows: Vec<Window> = (1..=4).map(|i| window_at(i, 0, 0, 100, 100)).collect();

            let placements = DefaultLayout::Tile.calculate(&area, &windows, None);

            let expected_origins = [(0, 0), (500, 0), (0, 500), (500, 500)];
            assert_eq!(placements.len(), 4);

            for (placement, (left, top)) in placements.iter().zip(expected_origins) {
                assert_eq!(placement.rect.left, left);
                assert_eq!(placement.rect.top, top);
                assert_eq!(placement.rect.right, 500);
                assert_eq!(placement.rect.bottom, 500);
            }
        }

        #[test]
        fn test_cells_are_distinct() {
            let area = test_area();
            let windows: Vec<Window> = (1..=7).map(|i| window_at(i, 0, 0, 100, 100)).collect();

            let placements = DefaultLayout::Tile.calculate(&area, &windows, None);

            for (i, a) in placements.iter().enumerate() {
                for b in placements.iter().skip(i + 1) {
                    assert!(!a.rect.has_same_position_as(&b.rect));
                }
            }
        }

        #[test]
        fn test_tile_offsets_by_work_area_origin() {
            let area = Rect {
                left: 60,
                top: 30,
                right: 1000,
                bottom: 1000,
            };
            let windows: Vec<Window> = (1..=4).map(|i| window_at(i, 0, 0, 100, 100)).collect();

            let placements = DefaultLayout::Tile.calculate(&area, &windows, None);

            assert_eq!(placements[0].rect.left, 60);
            assert_eq!(placements[0].rect.top, 30);
            assert_eq!(placements[3].rect.left, 560);
            assert_eq!(placements[3].rect.top, 530);
        }

        #[test]
        fn test_empty_window_list_is_a_noop() {
            assert!(DefaultLayout::Tile.calculate(&test_area(), &[], None).is_empty());
        }
    }

    mod two_thirds_layout_tests {
        use super::*;

        #[test]
        fn test_single_window_gets_the_whole_area() {
            let area = test_area();
            let only = window_at(1, 0, 0, 100, 100);

            // The active flag does not matter for a lone window
            let placements = DefaultLayout::TwoThirds.calculate(&area, &[only], None);

            assert_eq!(placements.len(), 1);
            assert_eq!(placements[0].rect, area);
        }

        #[test]
        fn test_active_window_takes_left_two_thirds() {
            let area = test_area();
            let windows: Vec<Window> = (1..=3).map(|i| window_at(i, 0, 0, 100, 100)).collect();

            let placements =
                DefaultLayout::TwoThirds.calculate(&area, &windows, Some(windows[1].id));

            assert_eq!(placements.len(), 3);

            // 1000 * 2 / 3 = 666 for the primary pane
            assert_eq!(
                placements[1].rect,
                Rect {
                    left: 0,
                    top: 0,
                    right: 666,
                    bottom: 1000,
                }
            );

            // The other two stack in the right third, 500 tall each
            assert_eq!(
                placements[0].rect,
                Rect {
                    left: 666,
                    top: 0,
                    right: 334,
                    bottom: 500,
                }
            );
            assert_eq!(
                placements[2].rect,
                Rect {
                    left: 666,
                    top: 500,
                    right: 334,
                    bottom: 500,
                }
            );
        }

        #[test]
        fn test_no_active_window_is_a_noop() {
            let area = test_area();
            let windows: Vec<Window> = (1..=3).map(|i| window_at(i, 0, 0, 100, 100)).collect();

            assert!(DefaultLayout::TwoThirds
                .calculate(&area, &windows, None)
                .is_empty());
        }

        #[test]
        fn test_active_window_outside_the_list_is_a_noop() {
            let area = test_area();
            let windows: Vec<Window> = (1..=3).map(|i| window_at(i, 0, 0, 100, 100)).collect();

            assert!(DefaultLayout::TwoThirds
                .calculate(&area, &windows, Some(WindowId(99)))
                .is_empty());
        }

        #[test]
        fn test_stack_respects_work_area_origin() {
            let area = Rect {
                left: 60,
                top: 30,
                right: 900,
                bottom: 900,
            };
            let windows: Vec<Window> = (1..=2).map(|i| window_at(i, 0, 0, 100, 100)).collect();

            let placements =
                DefaultLayout::TwoThirds.calculate(&area, &windows, Some(windows[0].id));

            assert_eq!(
                placements[0].rect,
                Rect {
                    left: 60,
                    top: 30,
                    right: 600,
                    bottom: 900,
                }
            );
            assert_eq!(
                placements[1].rect,
                Rect {
                    left: 660,
                    top: 30,
                    right: 300,
                    bottom: 900,
                }
            );
        }
    }
}
