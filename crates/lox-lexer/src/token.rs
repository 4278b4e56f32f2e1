//! Token types for the Lox scanner.

use std::fmt;

/// Token kinds for the Lox language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// The stable spelling of this kind, as used in token dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for the reserved-word kinds.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words and the kind each one scans to.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Look up a reserved word. Matching is exact and case-sensitive.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, kind)| *kind)
}

/// Look up an identifier to see if it's a keyword.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    keyword(ident).unwrap_or(TokenKind::Identifier)
}

/// Literal payload carried by STRING and NUMBER tokens.
///
/// Numbers keep their source text; turning it into a numeric value is left
/// to whoever consumes the tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    String(String),
    Number(String),
}

impl Literal {
    /// The literal's text.
    pub fn as_str(&self) -> &str {
        match self {
            Literal::String(s) | Literal::Number(s) => s,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Source text the token was recognized from. Empty for EOF, and
    /// without the quotes for strings.
    pub lexeme: String,
    /// 1-based line of the token's first character.
    pub line: usize,
    /// Decoded payload, only for STRING and NUMBER.
    pub literal: Option<Literal>,
}

impl Token {
    /// Create a new Token.
    pub fn new(kind: TokenKind, lexeme: String, line: usize, literal: Option<Literal>) -> Self {
        Self {
            kind,
            lexeme,
            line,
            literal,
        }
    }

    /// Returns true for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword("while"), Some(TokenKind::While));
        assert_eq!(keyword("nil"), Some(TokenKind::Nil));
        assert_eq!(keyword("and"), Some(TokenKind::And));
        assert_eq!(keyword("While"), None);
        assert_eq!(keyword("whilex"), None);
        assert_eq!(keyword("whil"), None);
        assert_eq!(keyword(""), None);
    }

    #[test]
    fn test_keyword_table_matches_lookup() {
        for (text, kind) in KEYWORDS {
            assert_eq!(keyword(text), Some(kind), "keyword {}", text);
            assert!(kind.is_keyword());
            assert_eq!(kind.as_str(), text.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_lookup_identifier() {
        assert_eq!(lookup_identifier("class"), TokenKind::Class);
        assert_eq!(lookup_identifier("foo"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("CLASS"), TokenKind::Identifier);
    }

    #[test]
    fn test_non_keywords() {
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
        assert!(!TokenKind::BangEqual.is_keyword());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenKind::GreaterEqual.to_string(), "GREATER_EQUAL");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let number = Token::new(
            TokenKind::Number,
            "1.5".to_string(),
            3,
            Some(Literal::Number("1.5".to_string())),
        );
        assert_eq!(number.to_string(), "NUMBER 1.5 1.5");

        let plus = Token::new(TokenKind::Plus, "+".to_string(), 1, None);
        assert_eq!(plus.to_string(), "PLUS +");

        let eof = Token::new(TokenKind::Eof, String::new(), 7, None);
        assert!(eof.is_eof());
        assert_eq!(eof.to_string(), "EOF ");
    }
}
