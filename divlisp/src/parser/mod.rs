//! Recursive-descent parser producing the generic parse tree
//!
//! Grammar:
//!
//! ```text
//! number  : /-?[0-9]+/ ;
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&%^]+/ ;
//! sexpr   : '(' <expr>* ')' ;
//! qexpr   : '{' <expr>* '}' ;
//! expr    : <number> | <symbol> | <sexpr> | <qexpr> ;
//! divlisp : /^/ <expr>* /$/ ;
//! ```

use crate::ast::{
    CHAR_TAG, NUMBER_TAG, ParseNode, QEXPR_TAG, REGEX_TAG, ROOT_TAG, SEXPR_TAG, SYMBOL_TAG, Span,
};
use crate::error::{CompileError, Result};
use crate::lexer::{Token, tokenize};


/// Nesting depth past which the parser grows its stack
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROW_SIZE: usize = 1024 * 1024;

/// Deepest list nesting accepted. Values are dropped recursively, so the
/// limit bounds the stack needed to tear down whatever the input builds.
const MAX_NESTING_DEPTH: usize = 1024;

/// Tokenize and parse a complete line or file
pub fn parse_source(source: &str) -> Result<ParseNode> {
    let tokens = tokenize(source)?;
    parse(source, tokens)
}

/// Parse tokens into a parse tree rooted at a `>` node
pub fn parse(source: &str, tokens: Vec<(Token, Span)>) -> Result<ParseNode> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        eof: Span::point(source.len()),
    };
    parser.program()
}

struct Parser {
    tokens: Vec<(Token, Span)>,
    pos: usize,
    depth: usize,
    eof: Span,
}

impl Parser {
    fn peek(&self) -> Option<&(Token, Span)> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<(Token, Span)> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn program(&mut self) -> Result<ParseNode> {
        let mut children = vec![ParseNode::leaf(REGEX_TAG, "")];
        while self.peek().is_some() {
            children.push(self.expr()?);
        }
        children.push(ParseNode::leaf(REGEX_TAG, ""));
        Ok(ParseNode::branch(ROOT_TAG, children))
    }

    fn expr(&mut self) -> Result<ParseNode> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.expr_inner())
    }

    fn expr_inner(&mut self) -> Result<ParseNode> {
        let Some((token, span)) = self.bump() else {
            return Err(CompileError::parser("unexpected end of input", self.eof));
        };
        match token {
            Token::Number(text) => Ok(ParseNode::leaf(NUMBER_TAG, text)),
            Token::Symbol(text) => Ok(ParseNode::leaf(SYMBOL_TAG, text)),
            Token::LParen => self.list(SEXPR_TAG, Token::LParen, Token::RParen, span),
            Token::LBrace => self.list(QEXPR_TAG, Token::LBrace, Token::RBrace, span),
            Token::RParen | Token::RBrace => Err(CompileError::parser(
                format!("unexpected {token}, no matching opening delimiter"),
                span,
            )),
        }
    }

    /// Parse the body of a list whose opening delimiter was just consumed
    fn list(&mut self, tag: &str, open: Token, close: Token, open_span: Span) -> Result<ParseNode> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(CompileError::parser(
                format!("nesting exceeds {MAX_NESTING_DEPTH} levels"),
                open_span,
            ));
        }
        self.depth += 1;
        let node = self.list_body(tag, open, close, open_span);
        self.depth -= 1;
        node
    }

    fn list_body(
        &mut self,
        tag: &str,
        open: Token,
        close: Token,
        open_span: Span,
    ) -> Result<ParseNode> {
        let mut children = vec![ParseNode::leaf(CHAR_TAG, open.text())];
        loop {
            match self.peek() {
                None => {
                    return Err(CompileError::parser(
                        format!("unclosed {open}, expected {close} before end of input"),
                        open_span,
                    ));
                }
                Some((tok, _)) if *tok == close => {
                    self.pos += 1;
                    children.push(ParseNode::leaf(CHAR_TAG, close.text()));
                    return Ok(ParseNode::branch(tag, children));
                }
                Some((tok, span)) if matches!(tok, Token::RParen | Token::RBrace) => {
                    return Err(CompileError::parser(
                        format!("expected {close}, found {tok}"),
                        open_span.merge(*span),
                    ));
                }
                Some(_) => children.push(self.expr()?),
            }
        }
    }
}
