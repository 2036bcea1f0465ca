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

//! A single game between two sides, as tracked by whoever hosts it.
use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    board::Grid,
    command::Command,
    game::{apply_move, Movement, SessionError},
    units::{Side, UnitRegistry},
};

/// Someone connected to a session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Participant {
    /// A player controlling the given side.
    Player(Side),
    /// A guest who may watch but not move.
    Viewer,
}

/// Broadcast after every applied move so that all participants can replace their grid,
/// rebuild their registry and pass the turn.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveUpdate {
    /// Grid after the move.
    pub grid: Grid,
    /// Side that moved.
    pub side: Side,
    /// Command as submitted, normalized.
    pub command: Command,
    /// What the move did.
    pub movement: Movement,
}

/// Handles gameplay for one grid.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current grid.
    grid: Grid,

    /// Registry for both sides, always in sync with `grid`.
    registry: UnitRegistry,

    /// Side whose turn it is.
    turn: Side,

    /// Every move applied so far.
    history: Vec<MoveUpdate>,
}

impl Session {
    /// Start a session from the given layout with `first` to move.
    pub fn new(grid: Grid, first: Side) -> Self {
        Self {
            registry: UnitRegistry::from_grid(&grid),
            grid,
            turn: first,
            history: Vec::new(),
        }
    }

    /// Get the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the registry for the current grid.
    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Get the side whose turn it currently is.
    pub fn current(&self) -> Side {
        self.turn
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[MoveUpdate] {
        &self.history
    }

    /// Get the status of the game. Returns `None` while both sides have units left,
    /// otherwise the side that still does.
    pub fn winner(&self) -> Option<Side> {
        Side::ALL.iter().copied().find(|&side| {
            self.registry.live_count(side) > 0 && self.registry.live_count(side.opponent()) == 0
        })
    }

    /// Submit a raw command on behalf of `who`.
    ///
    /// Viewers, players acting out of turn and any submission after the game is decided
    /// are refused before the command is looked at. Otherwise the move is applied, the
    /// turn passes to the opponent and the resulting update is returned for broadcast.
    pub fn submit(&mut self, who: Participant, raw: &str) -> Result<MoveUpdate, SessionError> {
        let side = match who {
            Participant::Viewer => {
                warn!("[Session] viewer tried to submit {:?}", raw);
                return Err(SessionError::Viewer);
            }
            Participant::Player(side) => side,
        };
        if self.winner().is_some() {
            return Err(SessionError::AlreadyOver);
        }
        if side != self.turn {
            warn!("[Session] side {} submitted {:?} out of turn", side, raw);
            return Err(SessionError::OutOfTurn(side));
        }

        let applied = apply_move(&self.grid, &self.registry, side, raw)?;
        self.grid = applied.grid;
        self.registry = applied.registry;
        self.turn = side.opponent();

        let update = MoveUpdate {
            grid: self.grid,
            side,
            command: applied.command,
            movement: applied.movement,
        };
        info!(
            "[Session] side {} played {} ({} -> {})",
            side, update.command, update.movement.from, update.movement.to
        );
        if let Some(winner) = self.winner() {
            info!("[Session] side {} wins", winner);
        }
        self.history.push(update.clone());
        Ok(update)
    }

    /// Adopt an update broadcast by the session that applied it. The registry is rebuilt
    /// from the received grid and the turn passes to the other side.
    pub fn sync(&mut self, update: MoveUpdate) {
        self.grid = update.grid;
        self.registry = UnitRegistry::from_grid(&self.grid);
        self.turn = update.side.opponent();
        self.history.push(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{layout, Cell, Coordinate},
        game::RejectReason,
        units::{UnitId, UnitKind},
    };

    #[test]
    fn turns_alternate() {
        let mut session = Session::new(layout::standard(), Side::A);
        assert_eq!(session.current(), Side::A);

        let update = session.submit(Participant::Player(Side::A), "p1:f").unwrap();
        assert_eq!(update.side, Side::A);
        assert_eq!(update.command.to_string(), "p1:f");
        assert_eq!(session.current(), Side::B);

        assert_eq!(
            session.submit(Participant::Player(Side::A), "p2:f"),
            Err(SessionError::OutOfTurn(Side::A))
        );
        session.submit(Participant::Player(Side::B), "p1:f").unwrap();
        assert_eq!(session.current(), Side::A);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn side_b_moves_toward_row_four() {
        let mut session = Session::new(layout::standard(), Side::B);
        let update = session.submit(Participant::Player(Side::B), "p1:f").unwrap();
        assert_eq!(update.movement.from, Coordinate::new(0, 4));
        assert_eq!(update.movement.to, Coordinate::new(1, 4));
    }

    #[test]
    fn viewers_cannot_move() {
        let mut session = Session::new(layout::standard(), Side::A);
        assert_eq!(session.submit(Participant::Viewer, "p1:f"), Err(SessionError::Viewer));
        assert!(session.history().is_empty());
    }

    #[test]
    fn rejected_moves_keep_the_turn() {
        let mut session = Session::new(layout::standard(), Side::A);
        let before = *session.grid();
        match session.submit(Participant::Player(Side::A), "p1:b") {
            Err(SessionError::Rejected(err)) => {
                assert_eq!(err.reason(), RejectReason::OutOfBounds)
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(session.current(), Side::A);
        assert_eq!(*session.grid(), before);
    }

    #[test]
    fn game_ends_when_a_side_is_wiped_out() {
        let a = UnitId::new(Side::A, UnitKind::P1);
        let b = UnitId::new(Side::B, UnitKind::P1);
        let grid = Grid::from_units(vec![(a, Coordinate::new(2, 2)), (b, Coordinate::new(1, 2))])
            .unwrap();
        let mut session = Session::new(grid, Side::A);
        assert_eq!(session.winner(), None);
        let update = session.submit(Participant::Player(Side::A), "p1:f").unwrap();
        assert_eq!(update.movement.captured, vec![b]);
        assert_eq!(session.winner(), Some(Side::A));
        assert_eq!(
            session.submit(Participant::Player(Side::B), "p1:f"),
            Err(SessionError::AlreadyOver)
        );
    }

    #[test]
    fn replicas_follow_updates() {
        let mut host = Session::new(layout::standard(), Side::A);
        let mut replica = Session::new(layout::standard(), Side::A);
        let update = host.submit(Participant::Player(Side::A), "h1:f").unwrap();
        replica.sync(update);
        assert_eq!(replica.grid(), host.grid());
        assert_eq!(replica.registry(), host.registry());
        assert_eq!(replica.current(), Side::B);
        assert_eq!(
            replica.grid()[Coordinate::new(2, 1)],
            Cell::Unit(UnitId::new(Side::A, UnitKind::H1))
        );
    }
}
