use serde::{Deserialize, Serialize};

use crate::*;

/// Kind of action produced by an input collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Reveal,
    Flag,
    /// Button held while moving; only meaningful to the input layer.
    Drag,
    Restart,
    None,
}

/// An action kind paired with the pixel it targets, when it targets one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerAction {
    pub kind: ActionKind,
    pub point: Option<Point>,
}

impl PointerAction {
    pub const fn new(kind: ActionKind, point: Option<Point>) -> Self {
        Self { kind, point }
    }

    pub const fn reveal(point: Point) -> Self {
        Self::new(ActionKind::Reveal, Some(point))
    }

    pub const fn flag(point: Point) -> Self {
        Self::new(ActionKind::Flag, Some(point))
    }

    pub const fn drag(point: Point) -> Self {
        Self::new(ActionKind::Drag, Some(point))
    }

    pub const fn restart() -> Self {
        Self::new(ActionKind::Restart, None)
    }

    pub const fn none() -> Self {
        Self::new(ActionKind::None, None)
    }

    /// Maps the pointer action onto a board action, `None` when it has no
    /// board-level effect.
    pub fn resolve(self, size: BoardSize, geometry: CellGeometry) -> Result<Option<Action>> {
        let target = |point: Option<Point>| -> Result<Option<CellIndex>> {
            let Some((x, y)) = point else {
                log::warn!("{:?} without a point, ignored", self.kind);
                return Ok(None);
            };
            geometry
                .cell_at((x, y), size)
                .map(Some)
                .ok_or(GameError::OutsideGrid { x, y })
        };

        Ok(match self.kind {
            ActionKind::Reveal => target(self.point)?.map(Action::Reveal),
            ActionKind::Flag => target(self.point)?.map(Action::Flag),
            ActionKind::Restart => Some(Action::Restart(None)),
            ActionKind::Drag | ActionKind::None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: BoardSize = BoardSize::new(4, 5);

    fn geometry() -> CellGeometry {
        CellGeometry::new(8, 6).unwrap()
    }

    #[test]
    fn reveal_and_flag_resolve_to_cell_under_point() {
        assert_eq!(
            PointerAction::reveal((17, 13)).resolve(SIZE, geometry()),
            Ok(Some(Action::Reveal(12)))
        );
        assert_eq!(
            PointerAction::flag((39, 23)).resolve(SIZE, geometry()),
            Ok(Some(Action::Flag(19)))
        );
    }

    #[test]
    fn drag_and_none_have_no_board_effect() {
        assert_eq!(PointerAction::drag((1, 1)).resolve(SIZE, geometry()), Ok(None));
        assert_eq!(PointerAction::none().resolve(SIZE, geometry()), Ok(None));
    }

    #[test]
    fn restart_ignores_the_point() {
        assert_eq!(
            PointerAction::restart().resolve(SIZE, geometry()),
            Ok(Some(Action::Restart(None)))
        );
    }

    #[test]
    fn points_off_the_grid_are_rejected() {
        assert_eq!(
            PointerAction::reveal((40, 0)).resolve(SIZE, geometry()),
            Err(GameError::OutsideGrid { x: 40, y: 0 })
        );
        assert_eq!(
            PointerAction::flag((0, 24)).resolve(SIZE, geometry()),
            Err(GameError::OutsideGrid { x: 0, y: 24 })
        );
    }

    #[test]
    fn missing_point_is_ignored() {
        let action = PointerAction::new(ActionKind::Reveal, None);

        assert_eq!(action.resolve(SIZE, geometry()), Ok(None));
    }
}
