//! Token definitions

use logos::Logos;

/// DivLisp token
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
#[logos(skip r";[^\n]*")]
pub enum Token {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string(), priority = 10)]
    Number(String),

    // Numbers are tried first at every position, so a symbol never starts
    // with a digit or with `-` followed by a digit: `12-3` is `12` `-3`.
    #[regex(r"[a-zA-Z_+*/\\=<>!&%^][a-zA-Z0-9_+\-*/\\=<>!&%^]*", |lex| lex.slice().to_string())]
    #[regex(r"-([a-zA-Z_+\-*/\\=<>!&%^][a-zA-Z0-9_+\-*/\\=<>!&%^]*)?", |lex| lex.slice().to_string())]
    Symbol(String),
}

impl Token {
    /// Source text of the token
    pub fn text(&self) -> &str {
        match self {
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Number(s) | Token::Symbol(s) => s,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.text())
    }
}
