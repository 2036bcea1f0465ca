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

use std::{
    fmt, fs,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

use gridskirmish::{
    board::{layout, Cell, Grid, GRID_SIZE},
    game::{MoveUpdate, Participant, Session, SessionError},
    units::{Side, UnitKind},
};

fn main() -> io::Result<()> {
    env_logger::init();

    let matches = App::new("Skirmish")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player hot-seat skirmish on a 5x5 grid.")
        .arg(
            Arg::with_name("first")
                .short("f")
                .long("first")
                .value_name("SIDE")
                .help("side that moves first")
                .takes_value(true)
                .possible_values(&["a", "b", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("layout")
                .short("l")
                .long("layout")
                .value_name("LAYOUT")
                .help("starting layout")
                .takes_value(true)
                .possible_values(&["standard", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("load")
                .long("load")
                .value_name("FILE")
                .help("read the starting grid from a file, one row per line, x for empty cells")
                .takes_value(true)
                .conflicts_with("layout"),
        )
        .get_matches();

    let grid = choose_grid(&matches)?;
    let first = choose_first(&matches);
    info!("starting with side {} to move", first);

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut session = Session::new(grid, first);
    play(&mut session, &mut input)
}

/// Build the starting grid from `--load` or `--layout`.
fn choose_grid(matches: &ArgMatches) -> io::Result<Grid> {
    if let Some(path) = matches.value_of("load") {
        let text = fs::read_to_string(path)?;
        return text
            .parse()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err));
    }
    Ok(match matches.value_of("layout").map(str::to_ascii_lowercase).as_deref() {
        Some("random") | Some("rand") => layout::random(&mut rand::thread_rng()),
        _ => layout::standard(),
    })
}

/// Pick the side that moves first from `--first`, defaulting to side A.
fn choose_first(matches: &ArgMatches) -> Side {
    match matches.value_of("first").map(str::to_ascii_lowercase).as_deref() {
        Some("b") => Side::B,
        Some("random") | Some("rand") => rand::random(),
        _ => Side::A,
    }
}

/// Run the game until one side is wiped out or the players quit.
fn play(session: &mut Session, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    enum Command {
        Move(String),
        Units(Option<Side>),
        History,
        Help,
        Quit,
    }
    /// Matcher for the roster listing, with an optional side.
    static UNITS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?x)(?:units|roster)(?:\s+(?P<side>[ab]))?$").unwrap()
    });

    println!("Type help or ? for commands.");
    loop {
        if let Some(winner) = session.winner() {
            println!();
            show_grid(session.grid(), winner);
            println!("Side {} wins!", winner);
            return Ok(());
        }

        let side = session.current();
        println!();
        println!("Side {} to move:", side);
        show_grid(session.grid(), side);

        let cmd = input.read_input_lower(&format!("{}>", side), |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            "history" => Some(Command::History),
            "" => None,
            other => {
                if let Some(captures) = UNITS.captures(other) {
                    Some(Command::Units(
                        captures.name("side").and_then(|m| m.as_str().parse().ok()),
                    ))
                } else {
                    Some(Command::Move(other.to_owned()))
                }
            }
        })?;

        match cmd {
            Command::Move(raw) => match session.submit(Participant::Player(side), &raw) {
                Ok(update) => describe_update(&update),
                Err(SessionError::Rejected(err)) => {
                    println!("Invalid move: {}.", err.reason());
                }
                Err(err) => println!("{}.", err),
            },
            Command::Units(which) => show_units(session, which.unwrap_or(side)),
            Command::History => {
                if session.history().is_empty() {
                    println!("No moves yet.");
                }
                for (i, update) in session.history().iter().enumerate() {
                    println!("{:>3}. {} {}", i + 1, update.side, update.command);
                }
            }
            Command::Help => {
                println!(
                    "Available Commands:
    <unit>:<dir>        move a unit, e.g. \"p1:f\" or \"h2: fl\".
    units [a|b]         list a side's units and where they stand.
    history             list the moves played so far.
    quit                leave the game.

Units and directions:
    p1, p2, p3          runners: one cell l, r, f or b.
    h1                  scout: two cells l, r, f or b.
    h2                  leaper: two cells diagonally, fl, fr, bl or br.

Directions are relative to the side moving: forward is always away from you.
Every enemy on the path of a move is captured."
                );
            }
            Command::Quit => return Ok(()),
        }
    }
}

/// Print what a move did.
fn describe_update(update: &MoveUpdate) {
    let movement = &update.movement;
    print!(
        "{} moved {} from {} to {}",
        update.side,
        UnitName(movement.unit.kind),
        movement.from,
        movement.to
    );
    if movement.captured.is_empty() {
        println!(".");
    } else {
        let names: Vec<_> = movement
            .captured
            .iter()
            .map(|id| format!("{} {}", id.owner, UnitName(id.kind)))
            .collect();
        println!(", capturing {}.", names.join(", "));
    }
}

/// Print the units of one side and their positions.
fn show_units(session: &Session, side: Side) {
    println!("Side {} units:", side);
    for (kind, status) in session.registry().iter_side(side) {
        match status.position() {
            Some(coord) => println!("    {:<3} {:<8} at {}", kind, UnitName(kind), coord),
            None => println!("    {:<3} {:<8} captured", kind, UnitName(kind)),
        }
    }
}

/// Print the grid as seen from the given side. Side B views the board from the other
/// end, so rows and columns are reversed for it.
fn show_grid(grid: &Grid, viewer: Side) {
    struct GridCell(Cell);
    impl fmt::Display for GridCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self.0 {
                Cell::Empty => f.pad("."),
                Cell::Unit(id) => fmt::Display::fmt(&id, f),
            }
        }
    }

    let mut rows: Vec<_> = grid.rows().enumerate().collect();
    let mut cols: Vec<usize> = (0..GRID_SIZE).collect();
    if viewer.is_flipped() {
        rows.reverse();
        cols.reverse();
    }
    print!("   ");
    for col in &cols {
        print!("{:^6}", col);
    }
    println!();
    for (row, cells) in rows {
        print!("{:>2} ", row);
        for &col in &cols {
            print!("{:^6}", GridCell(cells[col]));
        }
        println!();
    }
}

/// Display helper that prints the unit's role.
struct UnitName(UnitKind);

impl UnitName {
    fn name(&self) -> &'static str {
        match self.0 {
            UnitKind::P1 | UnitKind::P2 | UnitKind::P3 => "runner",
            UnitKind::H1 => "scout",
            UnitKind::H2 => "leaper",
        }
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Helper to read input from the players.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
