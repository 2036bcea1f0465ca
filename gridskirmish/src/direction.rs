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

//! Direction tokens and their resolution into grid deltas.
//!
//! Tokens are given relative to the acting side's view of the board. Side `A` uses the
//! canonical orientation: `f` moves toward row 0 and `l` toward column 0. Side `B` sits at
//! the other end of the board, so its tokens are flipped character by character (`l`<->`r`,
//! `f`<->`b`) before being resolved.
use std::{borrow::Cow, fmt};

use enumflags2::BitFlags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::units::Side;

/// A direction of movement in canonical (side `A`) orientation.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Direction {
    Left = 0b0000_0001,
    Right = 0b0000_0010,
    Forward = 0b0000_0100,
    Backward = 0b0000_1000,
    ForwardLeft = 0b0001_0000,
    ForwardRight = 0b0010_0000,
    BackwardLeft = 0b0100_0000,
    BackwardRight = 0b1000_0000,
}

impl Direction {
    /// Every direction, straight ones first.
    pub const ALL: &'static [Direction] = &[
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
        Direction::ForwardLeft,
        Direction::ForwardRight,
        Direction::BackwardLeft,
        Direction::BackwardRight,
    ];

    /// The four orthogonal directions.
    pub fn straight() -> BitFlags<Direction> {
        BitFlags::from(Direction::Left) | Direction::Right | Direction::Forward | Direction::Backward
    }

    /// The four diagonal directions.
    pub fn diagonal() -> BitFlags<Direction> {
        BitFlags::from(Direction::ForwardLeft)
            | Direction::ForwardRight
            | Direction::BackwardLeft
            | Direction::BackwardRight
    }

    /// Parse a canonical direction token. Tokens must already be lower case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|dir| dir.token() == token)
    }

    /// Resolve a token typed by the given side into a canonical direction.
    pub fn resolve(token: &str, side: Side) -> Option<Self> {
        let token = if side.is_flipped() {
            Cow::Owned(flip_token(token))
        } else {
            Cow::Borrowed(token)
        };
        Self::from_token(&token)
    }

    /// The token for this direction.
    pub fn token(self) -> &'static str {
        match self {
            Direction::Left => "l",
            Direction::Right => "r",
            Direction::Forward => "f",
            Direction::Backward => "b",
            Direction::ForwardLeft => "fl",
            Direction::ForwardRight => "fr",
            Direction::BackwardLeft => "bl",
            Direction::BackwardRight => "br",
        }
    }

    /// This direction as seen from the opposite end of the board.
    pub fn mirrored(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::ForwardLeft => Direction::BackwardRight,
            Direction::ForwardRight => Direction::BackwardLeft,
            Direction::BackwardLeft => Direction::ForwardRight,
            Direction::BackwardRight => Direction::ForwardLeft,
        }
    }

    /// Single step `(row, col)` delta for this direction. Each component is -1, 0 or 1.
    pub fn unit_delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
            Direction::ForwardLeft => (-1, -1),
            Direction::ForwardRight => (-1, 1),
            Direction::BackwardLeft => (1, -1),
            Direction::BackwardRight => (1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.token())
    }
}

/// Mirror a token character by character. Characters other than `l`, `r`, `f` and `b`
/// are kept as-is, so flipping twice always restores the input.
pub fn flip_token(token: &str) -> String {
    token
        .chars()
        .map(|c| match c {
            'l' => 'r',
            'r' => 'l',
            'f' => 'b',
            'b' => 'f',
            other => other,
        })
        .collect()
}
