//! GTP connection: line-oriented request/response loop
//!
//! One command per line, `= response` on success, `? message` on failure,
//! each terminated by a blank line. The connection owns the game session and
//! the engine; the surrounding process just feeds it lines.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::Stone;
use crate::engine::Engine;
use crate::game::{GameState, GameStatus, Move, Outcome};
use crate::gtp::command::Command;
use crate::gtp::coord::{format_point, parse_move};

/// Analyze stanza advertised to gogui front ends
const ANALYZE_COMMANDS: &str = "pstring/Legal Moves For ToPlay/gogui-rules_legal_moves\n\
pstring/Side to Play/gogui-rules_side_to_move\n\
pstring/Final Result/gogui-rules_final_result\n\
pstring/Board Size/gogui-rules_board_size\n\
pstring/Rules GameID/gogui-rules_game_id\n\
pstring/Show Board/gogui-rules_board\n";

/// Manage a GTP connection for the Gomoku engine
pub struct GtpConnection<W: Write> {
    game: GameState,
    engine: Engine,
    out: W,
}

impl<W: Write> GtpConnection<W> {
    pub fn new(game: GameState, engine: Engine, out: W) -> Self {
        Self { game, engine, out }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Read commands until the input ends or `quit` arrives
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if !self.handle_line(&line?)? {
                break;
            }
        }
        self.out.flush()
    }

    /// Parse one command line and execute it. Returns false once the session
    /// should end.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let mut line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(true);
        }
        // Strip the leading id used by regression test drivers
        if line.starts_with(|c: char| c.is_ascii_digit()) {
            line = line
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .trim_start();
        }

        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(true);
        };
        let args: Vec<&str> = parts.collect();

        let Some(cmd) = Command::from_name(name) else {
            debug!(%name, "unknown command");
            self.error("unknown command")?;
            return Ok(true);
        };
        if let Some((count, usage)) = cmd.arg_spec() {
            if args.len() != count {
                self.error(usage)?;
                return Ok(true);
            }
        }
        self.dispatch(cmd, &args)
    }

    fn dispatch(&mut self, cmd: Command, args: &[&str]) -> io::Result<bool> {
        debug!(name = cmd.name(), ?args, "executing command");
        match cmd {
            Command::ProtocolVersion => self.respond("2")?,
            Command::Quit => {
                self.respond("")?;
                return Ok(false);
            }
            Command::Name => {
                let name = self.engine.name();
                self.respond(name)?;
            }
            Command::Version => {
                let version = self.engine.version();
                self.respond(version)?;
            }
            Command::KnownCommand => {
                let known = Command::from_name(args[0]).is_some();
                self.respond(if known { "true" } else { "false" })?;
            }
            Command::ListCommands => {
                let names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
                self.respond(&names.join(" "))?;
            }
            Command::BoardSize => self.cmd_boardsize(args[0])?,
            Command::ClearBoard => {
                let size = self.game.board().size();
                match self.game.reset(size) {
                    Ok(()) => self.respond("")?,
                    Err(e) => self.error(&e.to_string())?,
                }
            }
            Command::ShowBoard => {
                let grid = self.game.board().render();
                self.respond(&format!("\n{}", grid.trim_end()))?;
            }
            Command::Komi => match args[0].parse::<f32>() {
                Ok(komi) => {
                    self.engine.komi = komi;
                    self.respond("")?;
                }
                Err(_) => self.error("Usage: komi FLOAT")?,
            },
            Command::Play => self.cmd_play(args[0], args[1])?,
            Command::GenMove => self.cmd_genmove(args[0])?,
            Command::LegalMoves => self.cmd_legal_moves(args[0])?,
            Command::GoguiAnalyzeCommands => self.respond(ANALYZE_COMMANDS.trim_end())?,
            Command::GoguiRulesGameId => self.respond("Gomoku")?,
            Command::GoguiRulesBoardSize => {
                let size = self.game.board().size().to_string();
                self.respond(&size)?;
            }
            Command::GoguiRulesLegalMoves => {
                let joined = self.sorted_legal_moves().to_uppercase();
                self.respond(&joined)?;
            }
            Command::GoguiRulesSideToMove => {
                let side = match self.game.side_to_move() {
                    Stone::White => "white",
                    _ => "black",
                };
                self.respond(side)?;
            }
            Command::GoguiRulesBoard => {
                let grid = self.game.board().render();
                self.respond(grid.trim_end())?;
            }
            Command::GoguiRulesFinalResult => self.cmd_final_result()?,
        }
        Ok(true)
    }

    fn cmd_boardsize(&mut self, arg: &str) -> io::Result<()> {
        let Ok(size) = arg.parse::<usize>() else {
            return self.error("Usage: boardsize INT");
        };
        match self.game.reset(size) {
            Ok(()) => self.respond(""),
            Err(e) => self.error(&e.to_string()),
        }
    }

    fn cmd_play(&mut self, color_arg: &str, move_arg: &str) -> io::Result<()> {
        let Some(color) = parse_color(color_arg) else {
            return self.error(&format!("invalid color: '{color_arg}'"));
        };
        let mv = match parse_move(move_arg, self.game.board().size()) {
            Ok(mv) => mv,
            Err(e) => return self.error(&e.to_string()),
        };
        match self.game.apply_move(mv, color) {
            Outcome::Illegal(reason) => self.error(&format!("illegal move: {reason}")),
            _ => self.respond(""),
        }
    }

    fn cmd_genmove(&mut self, color_arg: &str) -> io::Result<()> {
        let Some(color) = parse_color(color_arg) else {
            return self.error(&format!("invalid color: '{color_arg}'"));
        };
        if self.game.status() != GameStatus::InProgress {
            return self.respond("resign");
        }
        match self.engine.get_move(&self.game, color) {
            Some(pos) => match self.game.apply_move(Move::Place(pos), color) {
                Outcome::Illegal(reason) => self.error(&format!("illegal move: {reason}")),
                _ => self.respond(&format_point(pos)),
            },
            None => {
                self.game.apply_move(Move::Pass, color);
                self.respond("pass")
            }
        }
    }

    fn cmd_legal_moves(&mut self, color_arg: &str) -> io::Result<()> {
        if parse_color(color_arg).is_none() {
            return self.error(&format!("invalid color: '{color_arg}'"));
        }
        let joined = self.sorted_legal_moves();
        self.respond(&joined)
    }

    fn cmd_final_result(&mut self) -> io::Result<()> {
        let result = match self.game.status() {
            GameStatus::Won(Stone::White) => "white win",
            GameStatus::Won(_) => "black win",
            GameStatus::Draw => "draw",
            GameStatus::InProgress => "unknown",
        };
        self.respond(result)
    }

    /// Legal moves as GTP text, lexicographically sorted
    fn sorted_legal_moves(&self) -> String {
        let mut moves: Vec<String> = self
            .game
            .legal_moves()
            .into_iter()
            .map(format_point)
            .collect();
        moves.sort();
        moves.join(" ")
    }

    fn respond(&mut self, msg: &str) -> io::Result<()> {
        write!(self.out, "= {msg}\n\n")?;
        self.out.flush()
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        write!(self.out, "? {msg}\n\n")?;
        self.out.flush()
    }
}

fn parse_color(s: &str) -> Option<Stone> {
    match s.to_ascii_lowercase().as_str() {
        "b" => Some(Stone::Black),
        "w" => Some(Stone::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(size: usize) -> GtpConnection<Vec<u8>> {
        let game = GameState::new(size).unwrap();
        GtpConnection::new(game, Engine::with_seed(0), Vec::new())
    }

    fn session(size: usize, lines: &[&str]) -> String {
        let mut conn = connection(size);
        for line in lines {
            conn.handle_line(line).unwrap();
        }
        String::from_utf8(conn.out).unwrap()
    }

    #[test]
    fn test_protocol_version() {
        assert_eq!(session(7, &["protocol_version"]), "= 2\n\n");
    }

    #[test]
    fn test_name_and_version() {
        let out = session(7, &["name", "version"]);
        assert!(out.starts_with("= gomoku\n\n= "));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(session(7, &["explode"]), "? unknown command\n\n");
    }

    #[test]
    fn test_known_command() {
        let out = session(7, &["known_command play", "known_command explode"]);
        assert_eq!(out, "= true\n\n= false\n\n");
    }

    #[test]
    fn test_list_commands_contains_vocabulary() {
        let out = session(7, &["list_commands"]);
        for name in ["play", "genmove", "boardsize", "gogui-rules_final_result"] {
            assert!(out.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_blank_comment_and_id_lines() {
        let out = session(7, &["", "   ", "# a comment", "42 protocol_version"]);
        assert_eq!(out, "= 2\n\n");
    }

    #[test]
    fn test_argument_count_enforced() {
        assert_eq!(session(7, &["play b"]), "? Usage: play {b,w} MOVE\n\n");
        assert_eq!(session(7, &["genmove"]), "? Usage: genmove {w,b}\n\n");
        assert_eq!(session(7, &["boardsize 9 9"]), "? Usage: boardsize INT\n\n");
    }

    #[test]
    fn test_boardsize_resets_game() {
        let mut conn = connection(7);
        conn.handle_line("play b a1").unwrap();
        conn.handle_line("boardsize 9").unwrap();
        assert_eq!(conn.game().board().size(), 9);
        assert_eq!(conn.game().board().stone_count(), 0);
    }

    #[test]
    fn test_boardsize_rejects_out_of_range() {
        let out = session(7, &["boardsize 30"]);
        assert!(out.starts_with("? invalid board size 30"));
        let out = session(7, &["boardsize x"]);
        assert_eq!(out, "? Usage: boardsize INT\n\n");
    }

    #[test]
    fn test_play_and_showboard() {
        let mut conn = connection(3);
        conn.handle_line("play b a1").unwrap();
        conn.handle_line("play w c3").unwrap();
        conn.out.clear();
        conn.handle_line("showboard").unwrap();
        let out = String::from_utf8(conn.out).unwrap();
        assert_eq!(out, "= \n..O\n...\nX..\n\n");
    }

    #[test]
    fn test_play_rejects_bad_input() {
        assert_eq!(session(7, &["play x a1"]), "? invalid color: 'x'\n\n");
        assert_eq!(session(7, &["play b i1"]), "? invalid point: 'i1'\n\n");
        assert_eq!(session(7, &["play b a9"]), "? point off board: 'a9'\n\n");
    }

    #[test]
    fn test_play_occupied_is_error() {
        let out = session(7, &["play b c3", "play w c3"]);
        assert_eq!(out, "= \n\n? illegal move: point (3,3) is already occupied\n\n");
    }

    #[test]
    fn test_pass_flips_side_to_move() {
        let out = session(7, &["play b pass", "gogui-rules_side_to_move"]);
        assert_eq!(out, "= \n\n= white\n\n");
    }

    #[test]
    fn test_win_then_final_result_and_resign() {
        let mut conn = connection(9);
        for col in ["a", "b", "c", "d"] {
            conn.handle_line(&format!("play b {col}1")).unwrap();
            conn.handle_line("gogui-rules_final_result").unwrap();
        }
        conn.out.clear();
        conn.handle_line("play b e1").unwrap();
        conn.handle_line("gogui-rules_final_result").unwrap();
        conn.handle_line("genmove w").unwrap();
        conn.handle_line("play w f1").unwrap();
        let out = String::from_utf8(conn.out.clone()).unwrap();
        assert_eq!(
            out,
            "= \n\n= black win\n\n= resign\n\n? illegal move: the game is already over\n\n"
        );
        assert!(conn.game().legal_moves().is_empty());
    }

    #[test]
    fn test_final_result_before_any_win() {
        assert_eq!(session(7, &["gogui-rules_final_result"]), "= unknown\n\n");
    }

    #[test]
    fn test_draw_final_result() {
        let out = session(
            2,
            &[
                "play b a1",
                "play w a2",
                "play w b1",
                "play b b2",
                "gogui-rules_final_result",
            ],
        );
        assert!(out.ends_with("= draw\n\n"));
    }

    #[test]
    fn test_legal_moves_sorted() {
        let out = session(2, &["play b a1", "legal_moves w"]);
        assert_eq!(out, "= \n\n= a2 b1 b2\n\n");
    }

    #[test]
    fn test_gogui_legal_moves_uppercase_and_empty_after_win() {
        let mut conn = connection(9);
        for col in ["a", "b", "c", "d", "e"] {
            conn.handle_line(&format!("play b {col}1")).unwrap();
        }
        conn.out.clear();
        conn.handle_line("gogui-rules_legal_moves").unwrap();
        let out = String::from_utf8(conn.out).unwrap();
        assert_eq!(out, "= \n\n");

        let out = session(2, &["gogui-rules_legal_moves"]);
        assert_eq!(out, "= A1 A2 B1 B2\n\n");
    }

    #[test]
    fn test_genmove_plays_a_legal_move() {
        let mut conn = connection(5);
        conn.handle_line("genmove b").unwrap();
        assert_eq!(conn.game().board().stone_count(), 1);
        let out = String::from_utf8(conn.out.clone()).unwrap();
        assert!(out.starts_with("= "));
        // The reply names the point that was played
        let coord = out.trim_start_matches("= ").trim();
        let mv = parse_move(coord, 5).unwrap();
        match mv {
            Move::Place(pos) => assert_eq!(conn.game().board().get(pos), Stone::Black),
            Move::Pass => panic!("expected a point, got pass"),
        }
    }

    #[test]
    fn test_komi_stored() {
        let mut conn = connection(7);
        conn.handle_line("komi 5.5").unwrap();
        assert_eq!(conn.engine.komi, 5.5);
        conn.out.clear();
        conn.handle_line("komi nan-like").unwrap();
        let out = String::from_utf8(conn.out).unwrap();
        assert_eq!(out, "? Usage: komi FLOAT\n\n");
    }

    #[test]
    fn test_quit_ends_session() {
        let mut conn = connection(7);
        assert!(conn.handle_line("protocol_version").unwrap());
        assert!(!conn.handle_line("quit").unwrap());
    }

    #[test]
    fn test_run_drives_full_session() {
        let input = b"boardsize 9\nplay b e5\ngenmove w\nquit\nplay b a1\n";
        let game = GameState::new(7).unwrap();
        let mut conn = GtpConnection::new(game, Engine::with_seed(3), Vec::new());
        conn.run(&input[..]).unwrap();
        let out = String::from_utf8(conn.out).unwrap();
        // Four responses: boardsize, play, genmove, quit; nothing after quit
        assert_eq!(out.matches("\n\n").count(), 4);
        assert_eq!(conn.game.board().stone_count(), 2);
    }

    #[test]
    fn test_rules_metadata() {
        let out = session(
            7,
            &[
                "gogui-rules_game_id",
                "gogui-rules_board_size",
                "gogui-rules_side_to_move",
            ],
        );
        assert_eq!(out, "= Gomoku\n\n= 7\n\n= black\n\n");
    }

    #[test]
    fn test_gogui_board_rendering() {
        let out = session(3, &["play b b2", "gogui-rules_board"]);
        assert_eq!(out, "= \n\n= ...\n.X.\n...\n\n");
    }

    #[test]
    fn test_analyze_commands_listed() {
        let out = session(7, &["gogui-analyze_commands"]);
        assert!(out.contains("pstring/Final Result/gogui-rules_final_result"));
    }
}
