//! Line-oriented text front end.
//!
//! Reads commands, forwards them to a [`GameEngine`] and prints boards and
//! events. The engine does all rule checking; this module only parses and
//! renders.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context};

use crate::{
    config::FLEET, Coordinate, GameEngine, GameEvent, Orientation, Phase, PlayerId,
};

const HELP: &str = "\
commands:
  place <cell> <size> <v|h>   place a ship (vertical grows up, horizontal right)
  preview <cell> <size> <v|h> check a placement without committing it
  auto                        place the whole fleet at random
  reset                       remove every ship placed so far
  confirm                     lock in the fleet
  ready                       start your turn
  shoot <cell> | <cell>       fire at a cell, e.g. `shoot C7` or just `C7`
  mark <cell>                 toggle a marker on an unknown cell
  end                         end your turn
  show                        print your boards
  help                        this text
  quit                        leave the game";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place {
        at: Coordinate,
        size: usize,
        orientation: Orientation,
    },
    Preview {
        at: Coordinate,
        size: usize,
        orientation: Orientation,
    },
    Auto,
    Reset,
    Confirm,
    Ready,
    Shoot(Coordinate),
    Mark(Coordinate),
    End,
    Show,
    Help,
    Quit,
}

fn parse_coord(word: Option<&str>) -> anyhow::Result<Coordinate> {
    let word = word.ok_or_else(|| anyhow!("missing cell, e.g. C7"))?;
    word.parse::<Coordinate>()
        .map_err(|e| anyhow!("`{}`: {}", word, e))
}

fn parse_orientation(word: Option<&str>) -> anyhow::Result<Orientation> {
    match word.map(|w| w.to_ascii_lowercase()).as_deref() {
        Some("v") | Some("vertical") => Ok(Orientation::Vertical),
        Some("h") | Some("horizontal") => Ok(Orientation::Horizontal),
        Some(other) => bail!("unknown orientation `{}`, use v or h", other),
        None => bail!("missing orientation, use v or h"),
    }
}

fn parse_size(word: Option<&str>) -> anyhow::Result<usize> {
    let word = word.ok_or_else(|| anyhow!("missing ship size"))?;
    word.parse::<usize>()
        .with_context(|| format!("`{}` is not a ship size", word))
}

/// Parse one input line.
pub fn parse_command(line: &str) -> anyhow::Result<Command> {
    let mut words = line.split_whitespace();
    let head = words
        .next()
        .ok_or_else(|| anyhow!("empty command"))?
        .to_ascii_lowercase();
    let cmd = match head.as_str() {
        "place" | "preview" => {
            let at = parse_coord(words.next())?;
            let size = parse_size(words.next())?;
            let orientation = parse_orientation(words.next())?;
            if head == "place" {
                Command::Place {
                    at,
                    size,
                    orientation,
                }
            } else {
                Command::Preview {
                    at,
                    size,
                    orientation,
                }
            }
        }
        "auto" => Command::Auto,
        "reset" => Command::Reset,
        "confirm" => Command::Confirm,
        "ready" => Command::Ready,
        "shoot" | "fire" => Command::Shoot(parse_coord(words.next())?),
        "mark" => Command::Mark(parse_coord(words.next())?),
        "end" => Command::End,
        "show" | "board" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Shoot(
            head.parse::<Coordinate>()
                .map_err(|_| anyhow!("unknown command `{}`, try `help`", head))?,
        ),
    };
    Ok(cmd)
}

/// Remaining placement quotas, e.g. `Submarine(1) x2`.
pub fn render_quotas(engine: &GameEngine) -> String {
    let mut out = String::new();
    for entry in FLEET.iter() {
        let size = entry.kind.size();
        let _ = write!(
            out,
            "{}({}) x{}  ",
            entry.kind,
            size,
            engine.remaining_quota(size)
        );
    }
    out.trim_end().to_string()
}

/// The placing player's board and quotas.
pub fn render_placement(engine: &GameEngine) -> String {
    format!(
        "{} placing ships\n{}\nleft: {}",
        engine.current_player(),
        engine.placement_snapshot(),
        render_quotas(engine)
    )
}

/// Opponent knowledge on top, own fleet below.
pub fn render_player_view(engine: &GameEngine, player: PlayerId) -> String {
    let state = engine.match_state();
    format!(
        "Opponent board ({} ships left):\n{}\n\nYour board ({} ships left):\n{}",
        state.ships_remaining[player.other().index()],
        engine.knowledge_snapshot(player),
        state.ships_remaining[player.index()],
        engine.fleet_snapshot(player),
    )
}

/// Human-readable description of an event, if it is worth printing.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    let line = match event {
        GameEvent::ShipPlaced { kind, cells, .. } => {
            format!("placed {} at {}", kind, cells[0])
        }
        GameEvent::FleetReset { player } => format!("{} cleared their fleet", player),
        GameEvent::FleetConfirmed { player } => format!("{} fleet confirmed", player),
        GameEvent::PhaseChanged {
            phase: Phase::Ready,
            current,
        } => format!("{}'s turn, type `ready` when seated", current),
        GameEvent::PhaseChanged {
            phase: Phase::Placement,
            current,
        } => format!("{}: place your fleet (`help` lists commands)", current),
        GameEvent::PhaseChanged { .. } => return None,
        GameEvent::ShotResolved { player, outcome } => {
            let result = match outcome.sunk_kind {
                Some(kind) => format!("sank a {}", kind),
                None if outcome.hit => "hit".to_string(),
                None => "miss".to_string(),
            };
            format!("{} fires at {}: {}", player, outcome.at, result)
        }
        GameEvent::TurnEnded { .. } => return None,
        GameEvent::Victory { winner } => format!("{} won!", winner),
    };
    Some(line)
}

/// Drive `engine` from `input` until the match ends, input runs out or the
/// player quits.
pub fn run<R: BufRead, W: Write>(engine: &mut GameEngine, input: R, mut out: W) -> anyhow::Result<()> {
    flush_events(engine, &mut out)?;
    writeln!(out, "{}", render_placement(engine))?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}> ", engine.current_player())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        if cmd == Command::Quit {
            break;
        }
        if let Err(e) = apply(engine, cmd, &mut out) {
            writeln!(out, "{}", e)?;
        }
        flush_events(engine, &mut out)?;
        if engine.phase() == Phase::Finished {
            for player in [PlayerId::One, PlayerId::Two] {
                writeln!(out, "\n{}:\n{}", player, engine.fleet_snapshot(player))?;
            }
            break;
        }
    }
    Ok(())
}

fn apply<W: Write>(engine: &mut GameEngine, cmd: Command, out: &mut W) -> anyhow::Result<()> {
    match cmd {
        Command::Place {
            at,
            size,
            orientation,
        } => {
            engine.place_ship_attempt(at, size, orientation)?;
            writeln!(out, "{}", render_placement(engine))?;
        }
        Command::Preview {
            at,
            size,
            orientation,
        } => {
            let preview = engine.placement_preview(at, size, orientation);
            let cells: Vec<String> = preview.cells.iter().map(|c| c.to_string()).collect();
            let verdict = if preview.valid { "fits" } else { "does not fit" };
            writeln!(out, "{} ({})", verdict, cells.join(" "))?;
        }
        Command::Auto => {
            engine.auto_place_fleet()?;
            writeln!(out, "{}", render_placement(engine))?;
        }
        Command::Reset => {
            engine.reset_fleet()?;
            writeln!(out, "{}", render_placement(engine))?;
        }
        Command::Confirm => {
            engine.confirm_fleet()?;
            if engine.phase() == Phase::Placement {
                writeln!(out, "{}", render_placement(engine))?;
            }
        }
        Command::Ready => {
            let player = engine.ready()?;
            writeln!(out, "{}", render_player_view(engine, player))?;
        }
        Command::Shoot(at) => {
            let player = engine.current_player();
            engine.take_shot(at)?;
            writeln!(out, "{}", render_player_view(engine, player))?;
        }
        Command::Mark(at) => {
            let player = engine.current_player();
            engine.toggle_highlight(at)?;
            writeln!(out, "{}", engine.knowledge_snapshot(player))?;
        }
        Command::End => engine.end_turn()?,
        Command::Show => match engine.phase() {
            Phase::Placement => writeln!(out, "{}", render_placement(engine))?,
            Phase::Shooting => {
                writeln!(out, "{}", render_player_view(engine, engine.current_player()))?
            }
            Phase::Ready | Phase::Finished => writeln!(out, "nothing to show yet")?,
        },
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

fn flush_events<W: Write>(engine: &mut GameEngine, out: &mut W) -> anyhow::Result<()> {
    for event in engine.drain_events() {
        if let Some(line) = describe_event(&event) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
