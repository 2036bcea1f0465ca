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

//! Types identifying the two sides and their units.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

pub use self::{
    errors::{ParseSideError, ParseUnitIdError, ParseUnitKindError},
    registry::{UnitRegistry, UnitStatus},
};

mod errors;
mod registry;

/// One of the two competing players. Side `A` plays from row 4 toward row 0, side `B`
/// from row 0 toward row 4, so `B`'s direction vocabulary is mirrored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in turn order of the standard game.
    pub const ALL: &'static [Side] = &[Side::A, Side::B];

    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Whether this side views the board from the opposite end, and therefore has its
    /// direction tokens mirrored.
    pub fn is_flipped(self) -> bool {
        self == Side::B
    }

    /// Convert a direction as seen by this side into the canonical orientation.
    pub fn orient(self, dir: Direction) -> Direction {
        if self.is_flipped() {
            dir.mirrored()
        } else {
            dir
        }
    }

    /// Single-letter name of the side.
    pub fn letter(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.letter())
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("a") {
            Ok(Side::A)
        } else if s.eq_ignore_ascii_case("b") {
            Ok(Side::B)
        } else {
            Err(ParseSideError::new(s))
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Side> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Side {
        if rng.gen() {
            Side::A
        } else {
            Side::B
        }
    }
}

/// The kind of a unit. Each side has exactly one unit of each kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitKind {
    /// Runner: one cell straight.
    P1,
    /// Runner: one cell straight.
    P2,
    /// Runner: one cell straight.
    P3,
    /// Scout: two cells straight.
    H1,
    /// Leaper: two cells diagonally.
    H2,
}

impl UnitKind {
    /// Every unit kind, in roster order.
    pub const ALL: &'static [UnitKind] = &[
        UnitKind::P1,
        UnitKind::P2,
        UnitKind::P3,
        UnitKind::H1,
        UnitKind::H2,
    ];

    /// Set of directions this kind of unit may move in.
    pub fn vocabulary(self) -> BitFlags<Direction> {
        match self {
            UnitKind::P1 | UnitKind::P2 | UnitKind::P3 | UnitKind::H1 => Direction::straight(),
            UnitKind::H2 => Direction::diagonal(),
        }
    }

    /// Number of steps taken along a direction in a single move. The scout shares the
    /// runners' straight directions but covers two cells, like the leaper does diagonally.
    pub fn reach(self) -> isize {
        match self {
            UnitKind::P1 | UnitKind::P2 | UnitKind::P3 => 1,
            UnitKind::H1 | UnitKind::H2 => 2,
        }
    }

    /// Lower-case name, as typed in commands.
    pub fn name(self) -> &'static str {
        match self {
            UnitKind::P1 => "p1",
            UnitKind::P2 => "p2",
            UnitKind::P3 => "p3",
            UnitKind::H1 => "h1",
            UnitKind::H2 => "h2",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            UnitKind::P1 => "P1",
            UnitKind::P2 => "P2",
            UnitKind::P3 => "P3",
            UnitKind::H1 => "H1",
            UnitKind::H2 => "H2",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.marker())
    }
}

impl FromStr for UnitKind {
    type Err = ParseUnitKindError;

    /// Parse a unit kind, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseUnitKindError::new(s))
    }
}

/// Identifies a single unit on the board: the side that owns it and its kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitId {
    /// Side the unit belongs to.
    pub owner: Side,
    /// Kind of the unit.
    pub kind: UnitKind,
}

impl UnitId {
    /// Construct a [`UnitId`] for the given side and kind.
    pub fn new(owner: Side, kind: UnitKind) -> Self {
        Self { owner, kind }
    }

    /// Iterate over all ten units of both sides.
    pub fn all() -> impl Iterator<Item = UnitId> {
        Side::ALL.iter().flat_map(|&side| Self::roster(side))
    }

    /// Iterate over the five units of one side.
    pub fn roster(side: Side) -> impl Iterator<Item = UnitId> {
        UnitKind::ALL.iter().map(move |&kind| UnitId::new(side, kind))
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Format to a temporary so padding applies to the whole marker.
        f.pad(&format!("{}-{}", self.owner, self.kind))
    }
}

impl FromStr for UnitId {
    type Err = ParseUnitIdError;

    /// Parse a marker of the form `A-P1`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, kind) = s.split_once('-').ok_or_else(|| ParseUnitIdError::new(s))?;
        match (owner.parse(), kind.parse()) {
            (Ok(owner), Ok(kind)) => Ok(UnitId::new(owner, kind)),
            _ => Err(ParseUnitIdError::new(s)),
        }
    }
}
