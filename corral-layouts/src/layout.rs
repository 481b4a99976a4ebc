use serde::Deserialize;
use serde::Serialize;

use super::Arrangement;
use super::DefaultLayout;
use super::OperationDirection;
use super::Placement;
use super::Rect;
use super::Window;
use super::WindowId;
use super::neighbour::find_neighbour;

/// Every operation the registry can dispatch: either a repositioning
/// layout or a spatial activation in a cardinal direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Default(DefaultLayout),
    Activate(OperationDirection),
}

/// The computed result of applying a layout. The caller owns the write
/// side: setting geometries or activating a window on the live
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum LayoutOutcome {
    /// Target geometries for every window the layout manages
    Arrange(Vec<Placement>),
    /// The neighbour window to activate
    Activate(WindowId),
    /// The layout declined to act; an informational condition, not an
    /// error
    NoOp,
}

impl Layout {
    /// Apply this layout to a classified snapshot.
    ///
    /// `windows` are the arrangeable windows in snapshot order and
    /// `area` the work area from [`calculate_bounds`]. An empty work
    /// area is never laid out into.
    ///
    /// [`calculate_bounds`]: crate::calculate_bounds
    #[must_use]
    pub fn apply(
        &self,
        area: &Rect,
        windows: &[Window],
        active: Option<WindowId>,
    ) -> LayoutOutcome {
        if area.is_empty() {
            tracing::warn!("work area is empty, refusing to lay out windows into it");
            return LayoutOutcome::NoOp;
        }

        match self {
            Layout::Default(layout) => {
                let placements = layout.calculate(area, windows, active);

                if placements.is_empty() {
                    LayoutOutcome::NoOp
                } else {
                    LayoutOutcome::Arrange(placements)
                }
            }
            Layout::Activate(direction) => {
                let Some(active) = active.and_then(|id| windows.iter().find(|w| w.id == id))
                else {
                    tracing::debug!("no active window for spatial activation");
                    return LayoutOutcome::NoOp;
                };

                find_neighbour(windows, active, *direction)
                    .map_or(LayoutOutcome::NoOp, LayoutOutcome::Activate)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_at(id: u64, left: i32, top: i32) -> Window {
        Window::new(
            id,
            Rect {
                left,
                top,
                right: 400,
                bottom: 400,
            },
        )
    }

    #[test]
    fn test_empty_work_area_is_never_arranged() {
        let area = Rect::default();
        let windows = vec![window_at(1, 0, 0)];

        let outcome =
            Layout::Default(DefaultLayout::Tile).apply(&area, &windows, Some(windows[0].id));

        assert_eq!(outcome, LayoutOutcome::NoOp);
    }

    #[test]
    fn test_activation_selects_a_neighbour() {
        let area = Rect {
            left: 0,
            top: 0,
            right: 1000,
            bottom: 1000,
        };
        let left = window_at(1, 0, 0);
        let right = window_at(2, 600, 0);

        let windows = vec![left, right];
        let outcome =
            Layout::Activate(OperationDirection::Left).apply(&area, &windows, Some(right.id));

        assert_eq!(outcome, LayoutOutcome::Activate(left.id));
    }

    #[test]
    fn test_activation_without_active_window_is_a_noop() {
        let area = Rect {
            left: 0,
            top: 0,
            right: 1000,
            bottom: 1000,
        };
        let windows = vec![window_at(1, 0, 0)];

        let outcome = Layout::Activate(OperationDirection::Left).apply(&area, &windows, None);

        assert_eq!(outcome, LayoutOutcome::NoOp);
    }
}
