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

//! Parsing of textual move commands such as `"h2: fl"`.
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A normalized move command: the unit name and the direction token as typed by the
/// player, both lower case and free of whitespace.
///
/// Neither part is checked against the known unit kinds or directions here; that is the
/// job of move validation, which needs the acting side and the board to do it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    unit: String,
    direction: String,
}

impl Command {
    /// Parse a raw command. All whitespace is removed and the text is lower-cased before
    /// splitting on the first `:`. Both halves must be non-empty.
    pub fn parse(raw: &str) -> Result<Self, MalformedCommand> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.split_once(':') {
            Some((unit, direction)) if !unit.is_empty() && !direction.is_empty() => Ok(Self {
                unit: unit.into(),
                direction: direction.into(),
            }),
            _ => Err(MalformedCommand::new(raw)),
        }
    }

    /// Name of the unit to move.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Direction token, relative to the acting side's view of the board.
    pub fn direction(&self) -> &str {
        &self.direction
    }
}

impl FromStr for Command {
    type Err = MalformedCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.unit, self.direction)
    }
}

/// Error returned when a command is not of the form `<unit>:<direction>`.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("malformed command {raw:?}, expected <unit>:<direction>")]
pub struct MalformedCommand {
    raw: String,
}

impl MalformedCommand {
    fn new(raw: &str) -> Self {
        Self { raw: raw.into() }
    }

    /// The command text as it was submitted.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_case() {
        let cmd = Command::parse(" H2 :\tFL ").unwrap();
        assert_eq!(cmd.unit(), "h2");
        assert_eq!(cmd.direction(), "fl");
        assert_eq!(cmd.to_string(), "h2:fl");
    }

    #[test]
    fn splits_on_first_colon() {
        let cmd: Command = "p1:f:x".parse().unwrap();
        assert_eq!(cmd.unit(), "p1");
        assert_eq!(cmd.direction(), "f:x");
    }

    #[test]
    fn unknown_names_still_parse() {
        let cmd = Command::parse("zz:q").unwrap();
        assert_eq!(cmd.unit(), "zz");
        assert_eq!(cmd.direction(), "q");
    }

    #[test]
    fn rejects_malformed() {
        for raw in &["p1 f", "", ":", "p1:", ":f", "  :  ", "p1"] {
            let err = Command::parse(raw).unwrap_err();
            assert_eq!(err.raw(), *raw);
        }
    }
}
