// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validation and execution of moves, and the session that sequences them.
//!
//! [`apply_move`] is the whole engine for a single command: parse, resolve the direction
//! for the acting side, validate, execute. It reads a grid and registry and, on success,
//! returns new ones; on failure nothing changes and a [`RejectReason`] says why.
//!
//! [`Session`] owns a grid for the length of a game and adds the rules that live outside
//! a single move: whose turn it is, who may submit at all, and when the game is over.
use log::debug;

use crate::{
    board::Grid,
    command::Command,
    units::{Side, UnitRegistry},
};

pub use self::{
    errors::{MoveError, RejectReason, SessionError},
    execute::Movement,
    session::{MoveUpdate, Participant, Session},
    validate::{plan_move, PlannedMove},
};

mod errors;
mod execute;
mod session;
mod validate;

/// Result of a move that was carried out.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Applied {
    /// The grid after the move.
    pub grid: Grid,
    /// The registry after the move.
    pub registry: UnitRegistry,
    /// The command that was applied.
    pub command: Command,
    /// What happened.
    pub movement: Movement,
}

/// Apply the raw command `raw` for `side`.
///
/// `registry` must describe `grid`; a stale registry is a bug in the caller. Checking
/// whose turn it is is also left to the caller.
pub fn apply_move(
    grid: &Grid,
    registry: &UnitRegistry,
    side: Side,
    raw: &str,
) -> Result<Applied, MoveError> {
    debug_assert!(registry.agrees_with(grid), "registry is out of sync with the grid");

    let planned = Command::parse(raw)
        .map_err(|_| RejectReason::MalformedCommand)
        .and_then(|command| {
            let plan = plan_move(grid, registry, side, &command)?;
            Ok((command, plan))
        });
    let (command, plan) = planned.map_err(|reason| {
        debug!("rejected {:?} for side {}: {}", raw, side, reason);
        MoveError::new(reason, raw)
    })?;
    let (grid, registry, movement) = execute::execute(grid, registry, &plan);
    debug!(
        "{} moved {} -> {}, captured {:?}",
        movement.unit, movement.from, movement.to, movement.captured
    );
    Ok(Applied {
        grid,
        registry,
        command,
        movement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{Cell, Coordinate},
        direction::Direction,
        units::{UnitId, UnitKind},
    };

    fn id(owner: Side, kind: UnitKind) -> UnitId {
        UnitId::new(owner, kind)
    }

    fn setup(units: Vec<(UnitId, (usize, usize))>) -> (Grid, UnitRegistry) {
        let grid = Grid::from_units(units.into_iter().map(|(id, c)| (id, c.into()))).unwrap();
        let registry = UnitRegistry::from_grid(&grid);
        (grid, registry)
    }

    #[test]
    fn simple_step() {
        let p1 = id(Side::A, UnitKind::P1);
        let (grid, registry) = setup(vec![(p1, (4, 2))]);
        let applied = apply_move(&grid, &registry, Side::A, "p1:f").unwrap();
        assert_eq!(applied.grid[Coordinate::new(4, 2)], Cell::Empty);
        assert_eq!(applied.grid[Coordinate::new(3, 2)], Cell::Unit(p1));
        assert_eq!(
            applied.registry.get(p1).unwrap().position(),
            Some(Coordinate::new(3, 2))
        );
        assert!(applied.movement.captured.is_empty());
        assert!(applied.registry.agrees_with(&applied.grid));
        // Input grid is untouched.
        assert_eq!(grid[Coordinate::new(4, 2)], Cell::Unit(p1));
    }

    #[test]
    fn leaper_captures_on_the_way() {
        let h2 = id(Side::A, UnitKind::H2);
        let victim = id(Side::B, UnitKind::P1);
        let (grid, registry) = setup(vec![(h2, (4, 2)), (victim, (3, 1))]);
        let applied = apply_move(&grid, &registry, Side::A, "h2:fl").unwrap();
        assert_eq!(applied.grid[Coordinate::new(2, 0)], Cell::Unit(h2));
        assert_eq!(applied.grid[Coordinate::new(3, 1)], Cell::Empty);
        assert_eq!(applied.movement.captured, vec![victim]);
        assert_eq!(applied.movement.direction, Direction::ForwardLeft);
        assert!(!applied.registry.get(victim).unwrap().alive());
        assert_eq!(applied.registry.live_count(Side::B), 0);
    }

    #[test]
    fn destination_and_path_both_captured() {
        let h1 = id(Side::B, UnitKind::H1);
        let first = id(Side::A, UnitKind::P1);
        let second = id(Side::A, UnitKind::P2);
        let (grid, registry) = setup(vec![(h1, (0, 0)), (first, (1, 0)), (second, (2, 0))]);
        // Side B's forward is toward row 4.
        let applied = apply_move(&grid, &registry, Side::B, "h1:f").unwrap();
        assert_eq!(applied.movement.to, Coordinate::new(2, 0));
        assert_eq!(applied.movement.captured, vec![first, second]);
        assert_eq!(applied.grid.live_count(Side::A), 0);
        assert!(applied.registry.agrees_with(&applied.grid));
    }

    /// Logger that keeps every message so tests can check what was logged.
    struct Recorder(std::sync::Mutex<Vec<String>>);

    impl log::Log for Recorder {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static RECORDER: Recorder = Recorder(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn every_rejection_is_logged() {
        // The logger can only be installed once per process.
        let _ = log::set_logger(&RECORDER);
        log::set_max_level(log::LevelFilter::Debug);

        let (grid, registry) = setup(vec![
            (id(Side::A, UnitKind::P1), (4, 2)),
            (id(Side::A, UnitKind::P2), (3, 2)),
        ]);
        apply_move(&grid, &registry, Side::A, "p3 ~ f").unwrap_err();
        apply_move(&grid, &registry, Side::A, " p1 :f").unwrap_err();

        let lines = RECORDER.0.lock().unwrap();
        assert!(lines
            .iter()
            .any(|line| line.contains("\"p3 ~ f\"") && line.contains("malformed command")));
        assert!(lines
            .iter()
            .any(|line| line.contains("\" p1 :f\"") && line.contains("blocked by own unit")));
    }

    #[test]
    fn rejection_reports_reason_and_command() {
        let (grid, registry) = setup(vec![
            (id(Side::A, UnitKind::P1), (4, 2)),
            (id(Side::A, UnitKind::P2), (3, 2)),
        ]);
        let err = apply_move(&grid, &registry, Side::A, "p1:f").unwrap_err();
        assert_eq!(err.reason(), RejectReason::BlockedByOwnUnit);
        assert_eq!(err.command(), "p1:f");
        assert_eq!(err.reason().code(), "blocked-by-own-unit");

        let err = apply_move(&grid, &registry, Side::A, "p1 f").unwrap_err();
        assert_eq!(err.reason(), RejectReason::MalformedCommand);
        assert_eq!(err.into_command(), "p1 f");
    }
}
