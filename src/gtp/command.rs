//! GTP command vocabulary
//!
//! Commands are an enum so dispatch is an exhaustive match instead of a
//! string-keyed handler table; unknown names simply fail to parse.

/// Every command this engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ProtocolVersion,
    Quit,
    Name,
    Version,
    KnownCommand,
    ListCommands,
    BoardSize,
    ClearBoard,
    ShowBoard,
    Komi,
    Play,
    GenMove,
    LegalMoves,
    GoguiAnalyzeCommands,
    GoguiRulesGameId,
    GoguiRulesBoardSize,
    GoguiRulesLegalMoves,
    GoguiRulesSideToMove,
    GoguiRulesBoard,
    GoguiRulesFinalResult,
}

impl Command {
    pub const ALL: [Command; 20] = [
        Command::ProtocolVersion,
        Command::Quit,
        Command::Name,
        Command::Version,
        Command::KnownCommand,
        Command::ListCommands,
        Command::BoardSize,
        Command::ClearBoard,
        Command::ShowBoard,
        Command::Komi,
        Command::Play,
        Command::GenMove,
        Command::LegalMoves,
        Command::GoguiAnalyzeCommands,
        Command::GoguiRulesGameId,
        Command::GoguiRulesBoardSize,
        Command::GoguiRulesLegalMoves,
        Command::GoguiRulesSideToMove,
        Command::GoguiRulesBoard,
        Command::GoguiRulesFinalResult,
    ];

    /// Wire name of the command
    pub fn name(self) -> &'static str {
        match self {
            Command::ProtocolVersion => "protocol_version",
            Command::Quit => "quit",
            Command::Name => "name",
            Command::Version => "version",
            Command::KnownCommand => "known_command",
            Command::ListCommands => "list_commands",
            Command::BoardSize => "boardsize",
            Command::ClearBoard => "clear_board",
            Command::ShowBoard => "showboard",
            Command::Komi => "komi",
            Command::Play => "play",
            Command::GenMove => "genmove",
            Command::LegalMoves => "legal_moves",
            Command::GoguiAnalyzeCommands => "gogui-analyze_commands",
            Command::GoguiRulesGameId => "gogui-rules_game_id",
            Command::GoguiRulesBoardSize => "gogui-rules_board_size",
            Command::GoguiRulesLegalMoves => "gogui-rules_legal_moves",
            Command::GoguiRulesSideToMove => "gogui-rules_side_to_move",
            Command::GoguiRulesBoard => "gogui-rules_board",
            Command::GoguiRulesFinalResult => "gogui-rules_final_result",
        }
    }

    /// Look a command up by its wire name
    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Required argument count and usage message, for commands that take
    /// arguments
    pub fn arg_spec(self) -> Option<(usize, &'static str)> {
        match self {
            Command::BoardSize => Some((1, "Usage: boardsize INT")),
            Command::Komi => Some((1, "Usage: komi FLOAT")),
            Command::KnownCommand => Some((1, "Usage: known_command CMD_NAME")),
            Command::GenMove => Some((1, "Usage: genmove {w,b}")),
            Command::Play => Some((2, "Usage: play {b,w} MOVE")),
            Command::LegalMoves => Some((1, "Usage: legal_moves {w,b}")),
            _ => None,
        }
    }
}
