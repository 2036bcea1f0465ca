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

//! Move interpretation and execution engine for a two-player tactical game played on a
//! fixed 5x5 grid.
//!
//! Each side controls five units: three runners (`P1`-`P3`), a scout (`H1`) and a leaper
//! (`H2`). A player submits a textual command such as `"h2: fl"`; the engine parses it
//! into a [`Command`][command::Command], resolves the direction for the acting side's
//! orientation, validates the move against the [`Grid`][board::Grid] and
//! [`UnitRegistry`][units::UnitRegistry], and finally sweeps the unit along its path,
//! capturing any enemy it passes over.
//!
//! [`game::apply_move`] is the single entry point for one move. [`game::Session`] wraps
//! it with the turn bookkeeping a game session needs.

pub mod board;
pub mod command;
pub mod direction;
pub mod game;
pub mod units;
