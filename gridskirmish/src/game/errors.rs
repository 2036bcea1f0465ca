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

//! Errors returned when a move is rejected.

use thiserror::Error;

use crate::units::Side;

/// Reason why a move was rejected. Rejections never change the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RejectReason {
    /// The command was not of the form `<unit>:<direction>`.
    #[error("malformed command")]
    MalformedCommand,
    /// The unit name is not a known kind, or the registry does not track it.
    #[error("unknown unit")]
    UnknownUnit,
    /// The unit has been captured.
    #[error("dead unit")]
    DeadUnit,
    /// The direction is not one this unit may move in.
    #[error("illegal direction")]
    IllegalDirection,
    /// The destination lies off the grid.
    #[error("out of bounds")]
    OutOfBounds,
    /// A unit of the acting side stands on the path.
    #[error("blocked by own unit")]
    BlockedByOwnUnit,
}

impl RejectReason {
    /// Stable identifier for this reason, suitable for sending to clients.
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::MalformedCommand => "malformed-command",
            RejectReason::UnknownUnit => "unknown-unit",
            RejectReason::DeadUnit => "dead-unit",
            RejectReason::IllegalDirection => "illegal-direction",
            RejectReason::OutOfBounds => "out-of-bounds",
            RejectReason::BlockedByOwnUnit => "blocked-by-own-unit",
        }
    }
}

/// Error returned when a submitted move was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("move {command:?} rejected: {reason}")]
pub struct MoveError {
    /// Reason the move was rejected.
    #[source]
    reason: RejectReason,

    /// The command as it was submitted.
    command: String,
}

impl MoveError {
    /// Construct a move error from a reason and the submitted command text.
    pub(super) fn new(reason: RejectReason, command: &str) -> Self {
        Self {
            reason,
            command: command.into(),
        }
    }

    /// Get the reason the move was rejected.
    pub fn reason(&self) -> RejectReason {
        self.reason
    }

    /// Get the command as submitted.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Extract the submitted command.
    pub fn into_command(self) -> String {
        self.command
    }
}

/// Reason why a session refused a submission.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SessionError {
    /// Viewers may watch but not move.
    #[error("viewers cannot submit moves")]
    Viewer,
    /// The submitting side is not the one whose turn it is.
    #[error("it is not side {0}'s turn")]
    OutOfTurn(Side),
    /// One side has no units left.
    #[error("the game is already over")]
    AlreadyOver,
    /// The move itself was rejected by the engine.
    #[error(transparent)]
    Rejected(#[from] MoveError),
}
