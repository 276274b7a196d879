use anyhow::bail;
use sos_core::{GameEngine, Move, MoveHeuristic, Outcome, PlayerMap};
use sos_protocol::{
    MoveOracle, PlayerKind, Recorder, Recording, Replay, choose_move, parse_suggestion,
};
use std::io::{BufRead, Write};

/// One interactive game in the terminal. Humans type `row col letter`, computers use the
/// heuristic and, when one is attached, the oracle.
pub struct Session<R, W> {
    engine: GameEngine,
    players: PlayerMap<PlayerKind>,
    heuristic: MoveHeuristic,
    oracle: Option<Box<dyn MoveOracle>>,
    recorder: Recorder,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        engine: GameEngine,
        players: PlayerMap<PlayerKind>,
        seed: u64,
        input: R,
        output: W,
    ) -> Self {
        let recorder = Recorder::new(&engine, players.clone());
        Self {
            engine,
            players,
            heuristic: MoveHeuristic::new(seed),
            oracle: None,
            recorder,
            input,
            output,
        }
    }

    /// Consults `oracle` on computer turns that have no match to complete.
    pub fn with_oracle(mut self, oracle: impl MoveOracle + 'static) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    /// Plays until the game is over and returns the recording of it.
    pub fn run(mut self) -> anyhow::Result<(Outcome, Recording)> {
        loop {
            write!(self.output, "\n{}", self.engine.board())?;
            if let Some(outcome) = self.outcome() {
                writeln!(self.output, "Game over: {outcome}")?;
                return Ok((outcome, self.recorder.finish()));
            }

            let mover = self.engine.current_player();
            let mv = match self.players[mover] {
                PlayerKind::Computer => {
                    let oracle = self.oracle.as_deref_mut();
                    let Some(mv) = choose_move(&mut self.engine, &mut self.heuristic, oracle) else {
                        bail!("no move left for {mover} on a board that is not full");
                    };
                    writeln!(self.output, "{mover} (computer) plays {mv}", mv = describe(mv))?;
                    mv
                }
                PlayerKind::Human => match self.read_move()? {
                    Some(mv) => mv,
                    None => bail!("input ended before the game was over"),
                },
            };

            match self.engine.play(mv) {
                Ok(outcome) => {
                    self.recorder.record(mover, mv);
                    if outcome.keeps_turn() {
                        writeln!(self.output, "{mover} completed SOS and moves again")?;
                    }
                }
                Err(err) => {
                    log::debug!("{mover} move {mv:?} rejected: {err}");
                    writeln!(self.output, "Invalid move: {err}")?;
                }
            }
        }
    }

    fn outcome(&mut self) -> Option<Outcome> {
        if self.engine.check_game_over() {
            self.engine.winner()
        } else {
            None
        }
    }

    /// Prompts until a line parses as a move, or returns `None` at end of input.
    fn read_move(&mut self) -> anyhow::Result<Option<Move>> {
        let mover = self.engine.current_player();
        loop {
            write!(self.output, "{mover} to move (row col S|O): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_suggestion(&line, self.engine.size()) {
                Ok(mv) => return Ok(Some(mv)),
                Err(_) => writeln!(
                    self.output,
                    "Expected `row col letter` with row and col below {}",
                    self.engine.size()
                )?,
            }
        }
    }
}

fn describe(mv: Move) -> String {
    format!("{} {} {}", mv.coords.0, mv.coords.1, mv.letter)
}

/// Replays `recording` move by move, printing the board after each one.
pub fn replay(recording: &Recording, mut output: impl Write) -> anyhow::Result<GameEngine> {
    let mut replay = Replay::new(recording)?;
    writeln!(
        output,
        "Replaying {} game on {size}x{size}, {} move(s)",
        recording.variant,
        recording.moves.len(),
        size = recording.board_size,
    )?;

    while let Some(step) = replay.step()? {
        writeln!(output, "\n#{} {} plays {}", step.index + 1, step.mover, describe(step.mv))?;
        write!(output, "{}", replay.engine().board())?;
    }

    let engine = replay.into_engine();
    match engine.winner() {
        Some(outcome) => writeln!(output, "Game over: {outcome}")?,
        None => writeln!(output, "Recording ends before the game is over")?,
    }
    Ok(engine)
}
