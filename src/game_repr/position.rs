//! Chess position backed by the `chess` crate.
//!
//! `chess::Board` is an immutable value type, so reversibility comes from an
//! undo stack of snapshots. The snapshot stack doubles as the game history for
//! repetition detection, and the half-move clock (which `chess::Board` does
//! not track) is kept alongside each snapshot.

use super::rules::{DrawReason, GameStatus, Rules};
use super::{parse_square, Color, Move, MoveList, Piece, Type};
use crate::error::{EngineError, EngineResult};
use chess::{Board, BoardStatus, ChessMove, MoveGen, ALL_SQUARES};
use std::fmt;
use std::str::FromStr;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-moves without a pawn move or capture that end the game in a draw.
const FIFTY_MOVE_LIMIT: u32 = 100;

#[derive(Clone, Copy)]
struct Snapshot {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

#[derive(Clone)]
pub struct Position {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<Snapshot>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("plies_played", &self.history.len())
            .finish()
    }
}

impl Position {
    /// Parses a FEN string. The two clock fields are optional and default to
    /// `0 1`.
    pub fn from_fen(fen: &str) -> EngineResult<Position> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 || fields.len() > 6 {
            return Err(EngineError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("expected 4 to 6 fields, found {}", fields.len()),
            });
        }

        let parse_clock = |idx: usize, default: u32| -> EngineResult<u32> {
            match fields.get(idx) {
                None => Ok(default),
                Some(text) => text.parse().map_err(|_| EngineError::InvalidFen {
                    fen: fen.to_string(),
                    reason: format!("bad clock field '{}'", text),
                }),
            }
        };
        let halfmove_clock = parse_clock(4, 0)?;
        let fullmove_number = parse_clock(5, 1)?.max(1);

        let normalized = format!(
            "{} {} {} {} {} {}",
            fields[0], fields[1], fields[2], fields[3], halfmove_clock, fullmove_number
        );
        let board = Board::from_str(&normalized).map_err(|e| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{:?}", e),
        })?;

        Ok(Position {
            board,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        })
    }

    pub fn to_fen(&self) -> String {
        let board_fen = self.board.to_string();
        let placement: Vec<&str> = board_fen.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            placement.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    pub fn is_in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    /// Number of moves applied since this position was set up.
    pub fn plies_played(&self) -> usize {
        self.history.len()
    }

    /// Resolves long algebraic text (`e2e4`, `e7e8q`) to a legal move.
    pub fn find_move(&self, text: &str) -> EngineResult<Move> {
        let text = text.trim();
        let unknown = || EngineError::UnknownMove {
            text: text.to_string(),
        };
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(unknown());
        }
        let from = parse_square(&text[0..2]).ok_or_else(unknown)?;
        let to = parse_square(&text[2..4]).ok_or_else(unknown)?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Type::from_char(c) {
                Some(t @ (Type::Queen | Type::Rook | Type::Bishop | Type::Knight)) => Some(t),
                _ => return Err(unknown()),
            },
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| EngineError::IllegalMove {
                mv: text.to_string(),
                fen: self.to_fen(),
            })
    }

    /// Applies a move that came from outside the engine (user input, a
    /// player implementation) after checking it is legal.
    pub fn try_apply(&mut self, mv: Move) -> EngineResult<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(EngineError::IllegalMove {
                mv: mv.to_string(),
                fen: self.to_fen(),
            });
        }
        self.apply(mv);
        Ok(())
    }

    fn to_chess_move(&self, mv: Move) -> ChessMove {
        ChessMove::new(
            ALL_SQUARES[mv.from() as usize],
            ALL_SQUARES[mv.to() as usize],
            mv.promotion().map(to_chess_piece),
        )
    }

    fn from_chess_move(&self, cm: ChessMove) -> Move {
        let source = cm.get_source();
        let dest = cm.get_dest();
        let captured = match self.board.piece_on(dest) {
            Some(piece) => Some(from_chess_piece(piece)),
            // A pawn moving diagonally onto an empty square is en passant
            None if self.board.piece_on(source) == Some(chess::Piece::Pawn)
                && source.get_file() != dest.get_file() =>
            {
                Some(Type::Pawn)
            }
            None => None,
        };

        Move::new(
            source.to_index() as u8,
            dest.to_index() as u8,
            cm.get_promotion().map(from_chess_piece),
            captured,
        )
    }

    fn is_insufficient_material(&self) -> bool {
        let occupied = self.board.combined().popcnt();
        if occupied == 2 {
            return true;
        }
        if occupied == 3 {
            let minors = *self.board.pieces(chess::Piece::Knight) | *self.board.pieces(chess::Piece::Bishop);
            return minors.popcnt() == 1;
        }

        // Kings plus bishops that all stand on one square colour
        let bishops = *self.board.pieces(chess::Piece::Bishop);
        if occupied != bishops.popcnt() + 2 {
            return false;
        }
        let mut colours = bishops.map(|sq| (sq.get_rank().to_index() + sq.get_file().to_index()) % 2);
        match colours.next() {
            Some(first) => colours.all(|colour| colour == first),
            None => false,
        }
    }

    fn is_threefold_repetition(&self) -> bool {
        // Only positions since the last irreversible move can repeat
        let repeats = self
            .history
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .filter(|snapshot| snapshot.board == self.board)
            .count();
        repeats >= 2
    }
}

impl Rules for Position {
    fn legal_moves(&self) -> MoveList {
        MoveGen::new_legal(&self.board)
            .map(|cm| self.from_chess_move(cm))
            .collect()
    }

    fn apply(&mut self, mv: Move) {
        let cm = self.to_chess_move(mv);
        assert!(
            self.board.legal(cm),
            "illegal move {} applied to {}",
            mv,
            self.to_fen()
        );

        let is_pawn_move = self.board.piece_on(cm.get_source()) == Some(chess::Piece::Pawn);
        let is_capture = self.board.piece_on(cm.get_dest()).is_some();
        let black_moved = self.board.side_to_move() == chess::Color::Black;

        self.history.push(Snapshot {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        self.board = self.board.make_move_new(cm);
        self.halfmove_clock = if is_pawn_move || is_capture {
            0
        } else {
            self.halfmove_clock + 1
        };
        if black_moved {
            self.fullmove_number += 1;
        }
    }

    fn undo(&mut self) {
        let snapshot = self
            .history
            .pop()
            .expect("undo called without a matching apply");
        self.board = snapshot.board;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;
    }

    fn status(&self) -> GameStatus {
        match self.board.status() {
            BoardStatus::Checkmate => GameStatus::Checkmate,
            BoardStatus::Stalemate => GameStatus::Stalemate,
            BoardStatus::Ongoing => {
                if self.is_insufficient_material() {
                    GameStatus::Draw(DrawReason::InsufficientMaterial)
                } else if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
                    GameStatus::Draw(DrawReason::FiftyMoveRule)
                } else if self.is_threefold_repetition() {
                    GameStatus::Draw(DrawReason::ThreefoldRepetition)
                } else {
                    GameStatus::Ongoing
                }
            }
        }
    }

    fn side_to_move(&self) -> Color {
        from_chess_color(self.board.side_to_move())
    }

    fn piece_at(&self, square: u8) -> Option<Piece> {
        let sq = ALL_SQUARES[square as usize];
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(Piece::new(from_chess_color(color), from_chess_piece(piece)))
    }
}

fn from_chess_piece(piece: chess::Piece) -> Type {
    match piece {
        chess::Piece::Pawn => Type::Pawn,
        chess::Piece::Knight => Type::Knight,
        chess::Piece::Bishop => Type::Bishop,
        chess::Piece::Rook => Type::Rook,
        chess::Piece::Queen => Type::Queen,
        chess::Piece::King => Type::King,
    }
}

fn to_chess_piece(piece_type: Type) -> chess::Piece {
    match piece_type {
        Type::Pawn => chess::Piece::Pawn,
        Type::Knight => chess::Piece::Knight,
        Type::Bishop => chess::Piece::Bishop,
        Type::Rook => chess::Piece::Rook,
        Type::Queen => chess::Piece::Queen,
        Type::King => chess::Piece::King,
    }
}

fn from_chess_color(color: chess::Color) -> Color {
    match color {
        chess::Color::White => Color::White,
        chess::Color::Black => Color::Black,
    }
}
