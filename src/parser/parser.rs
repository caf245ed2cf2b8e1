//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level `parse`
//! entry point. The grammar itself is a recursive descent split across
//! `stmt`, `expr` and `types`.
//!
//! Two pieces of state go beyond a plain token cursor:
//! - a single backtrack checkpoint, used to try a declaration and fall back
//!   to an expression statement when the tokens turn out not to be one
//! - the list of syntax errors collected so far, so one run can report
//!   several independent problems

use log::{debug, trace, warn};

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::stmt::parse_statement_list;

/// Tokens that end a statement.
pub const STATEMENT_ENDS: [TokenKind; 4] = [
    TokenKind::CloseCurly,
    TokenKind::Semicolon,
    TokenKind::NewLine,
    TokenKind::EOF,
];

/// Keywords that start a statement; recovery stops in front of them.
const RECOVERY_KEYWORDS: [TokenKind; 5] = [
    TokenKind::Var,
    TokenKind::For,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Return,
];

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Cursor saved before a speculative declaration parse
    checkpoint: Option<usize>,
    /// Syntax errors reported so far
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A missing trailing `EOF` is added so the cursor can never run past the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |token| token.kind != TokenKind::EOF) {
            let position = tokens
                .last()
                .map(|token| token.position)
                .unwrap_or_default();
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, position));
        }

        Parser {
            tokens,
            pos: 0,
            checkpoint: None,
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one, if there is one.
    pub fn next_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    pub fn next_token_kind(&self) -> Option<TokenKind> {
        self.next_token().map(|token| token.kind)
    }

    pub fn previous_token(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|index| self.tokens.get(index))
    }

    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Advances to the next token and returns the one just passed.
    ///
    /// The cursor never moves past `EOF`; advancing there returns `EOF` again.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Consumes the current token if it is any of `kinds`.
    pub fn advance_if(&mut self, kinds: &[TokenKind]) -> bool {
        if self.current_token().is_one_of_many(kinds) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `context` - Where in the grammar we are, e.g. `"in function declaration"`
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect(&mut self, expected_kind: TokenKind, context: &str) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            return Ok(self.advance().clone());
        }

        Err(self.error(&format!(
            "Expected {} {} after {{peekPrev}}, instead got {{peek}}",
            expected_kind.describe(),
            context
        )))
    }

    /// Builds a syntax error at the current token.
    ///
    /// `{peek}`, `{peekNext}` and `{peekPrev}` in `template` are replaced with
    /// the rendering of the current, next and previous tokens.
    pub fn error(&self, template: &str) -> Error {
        let describe = |token: Option<&Token>, fallback: &str| {
            token
                .map(|token| token.describe())
                .unwrap_or_else(|| fallback.to_string())
        };

        let message = template
            .replace("{peekNext}", &describe(self.next_token(), "end of file"))
            .replace("{peekPrev}", &describe(self.previous_token(), "start of file"))
            .replace("{peek}", &self.current_token().describe());

        Error::new(ErrorImpl::UnexpectedToken { message }, self.current_token().position)
    }

    /// Builds an error of any kind at the current token.
    pub fn error_impl(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.current_token().position)
    }

    pub fn get_position(&self) -> Position {
        self.current_token().position
    }

    /// Skips newlines, returning whether the end of input was reached.
    pub fn eat_blank_lines(&mut self) -> bool {
        while self.advance_if(&[TokenKind::NewLine]) {}
        self.is_at_end()
    }

    /// Saves the cursor so a speculative parse can be undone.
    ///
    /// Only one checkpoint may be live at a time.
    pub fn checkpoint(&mut self) -> Result<(), Error> {
        if self.checkpoint.is_some() {
            return Err(self
                .error_impl(ErrorImpl::NestedCheckpoint)
                .with_context(self.current_token().describe()));
        }

        trace!("Checkpoint at token {}", self.pos);
        self.checkpoint = Some(self.pos);
        Ok(())
    }

    pub fn has_checkpoint(&self) -> bool {
        self.checkpoint.is_some()
    }

    /// Rewinds to the live checkpoint and drops it.
    pub fn restore(&mut self) {
        if let Some(pos) = self.checkpoint.take() {
            trace!("Backtracking from token {} to {}", self.pos, pos);
            self.pos = pos;
        }
    }

    /// Drops the live checkpoint, the speculative parse is now certain.
    pub fn commit(&mut self) {
        if self.checkpoint.take().is_some() {
            trace!("Committed at token {}", self.pos);
        }
    }

    /// Skips tokens until a statement boundary, always moving at least once.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            let token = self.current_token();
            if token.is_one_of_many(&STATEMENT_ENDS) || token.is_one_of_many(&RECOVERY_KEYWORDS) {
                return;
            }

            self.advance();
        }
    }

    /// Records `error` and moves to the start of the next statement.
    ///
    /// An error reported on a statement end only consumes that token, and a
    /// `}` inside a block is left for the block to close on.
    pub fn recover(&mut self, error: Error, in_block: bool) {
        warn!("Recovering from syntax error: {}", error);
        self.errors.push(error);
        self.checkpoint = None;

        match self.current_token_kind() {
            TokenKind::NewLine | TokenKind::Semicolon => {
                self.advance();
            }
            TokenKind::CloseCurly if in_block => {}
            TokenKind::EOF => {}
            _ => {
                self.synchronize();
                self.advance_if(&[TokenKind::Semicolon, TokenKind::NewLine]);
            }
        }
    }
}

/// Parses a stream of tokens into top-level statements.
///
/// This is the main entry point for parsing. Syntax errors do not stop the
/// parse: each one is recorded, the parser resynchronizes at the next
/// statement boundary, and everything that could be recovered is returned
/// alongside the errors.
pub fn parse(tokens: Vec<Token>) -> (Vec<Stmt>, Vec<Error>) {
    debug!("Parsing {} tokens", tokens.len());

    let mut parser = Parser::new(tokens);
    let statements = parse_statement_list(&mut parser, false);

    debug!(
        "Parsed {} statements with {} errors",
        statements.len(),
        parser.errors.len()
    );
    (statements, parser.errors)
}
