use super::OperationDirection;
use super::Window;
use super::WindowId;

/// Select the best neighbour of `active` in the given direction.
///
/// A window is a candidate when its centre lies strictly beyond the
/// active window's centre on the axis of movement. Among candidates the
/// winner minimizes a direction-weighted Euclidean distance between
/// centres: horizontal moves penalize vertical offset (preferring
/// same-row neighbours), vertical moves penalize horizontal offset
/// (preferring same-column neighbours). Ties go to the first candidate
/// in input order, so selection is deterministic for a fixed snapshot.
///
/// Returns `None` when there are no windows, no candidate in that
/// direction, or the active window is skip-tasklist.
#[must_use]
pub fn find_neighbour(
    windows: &[Window],
    active: &Window,
    direction: OperationDirection,
) -> Option<WindowId> {
    if windows.is_empty() || active.skip_tasklist {
        tracing::debug!("no usable active window for spatial activation");
        return None;
    }

    let (active_x, active_y) = active.center();

    let mut best: Option<(WindowId, f64)> = None;

    for window in windows {
        if window.id == active.id {
            continue;
        }

        let (x, y) = window.center();

        let eligible = match direction {
            OperationDirection::Left => x < active_x,
            OperationDirection::Right => x > active_x,
            OperationDirection::Up => y < active_y,
            OperationDirection::Down => y > active_y,
        };

        if !eligible {
            continue;
        }

        let distance = weighted_distance(direction, x - active_x, y - active_y);

        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((window.id, distance)),
        }
    }

    if best.is_none() {
        tracing::debug!("unable to find {direction} neighbour");
    }

    best.map(|(id, _)| id)
}

/// Euclidean distance with the off-axis component weighted double, so
/// that neighbours aligned with the direction of movement win over
/// closer but offset ones.
fn weighted_distance(direction: OperationDirection, dx: i32, dy: i32) -> f64 {
    let dx = f64::from(dx);
    let dy = f64::from(dy);

    if direction.is_horizontal() {
        dx.mul_add(dx, 2.0 * dy * dy).sqrt()
    } else {
        dy.mul_add(dy, 2.0 * dx * dx).sqrt()
    }
}
