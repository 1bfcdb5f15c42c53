//! Token types for the SQL lexer.

use serde::Serialize;

use super::{LexError, Span};

/// SQLite keywords.
///
/// Keywords are matched case-insensitively against bare identifiers. Quoted
/// identifiers are never keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Keyword {
    Abort,
    Action,
    Add,
    After,
    All,
    Alter,
    Always,
    Analyze,
    And,
    As,
    Asc,
    Attach,
    Autoincrement,
    Before,
    Begin,
    Between,
    By,
    Cascade,
    Case,
    Cast,
    Check,
    Collate,
    Column,
    Commit,
    Conflict,
    Constraint,
    Create,
    Cross,
    Current,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Database,
    Default,
    Deferrable,
    Deferred,
    Delete,
    Desc,
    Detach,
    Distinct,
    Do,
    Drop,
    Each,
    Else,
    End,
    Escape,
    Except,
    Exclude,
    Exclusive,
    Exists,
    Explain,
    Fail,
    Filter,
    First,
    Following,
    For,
    Foreign,
    From,
    Full,
    Generated,
    Glob,
    Group,
    Groups,
    Having,
    If,
    Ignore,
    Immediate,
    In,
    Index,
    Indexed,
    Initially,
    Inner,
    Insert,
    Instead,
    Intersect,
    Into,
    Is,
    Isnull,
    Join,
    Key,
    Last,
    Left,
    Like,
    Limit,
    Match,
    Materialized,
    Natural,
    No,
    Not,
    Nothing,
    Notnull,
    Null,
    Nulls,
    Of,
    Offset,
    On,
    Or,
    Order,
    Others,
    Outer,
    Over,
    Partition,
    Plan,
    Pragma,
    Preceding,
    Primary,
    Query,
    Raise,
    Range,
    Recursive,
    References,
    Regexp,
    Reindex,
    Release,
    Rename,
    Replace,
    Restrict,
    Returning,
    Right,
    Rollback,
    Row,
    Rows,
    Savepoint,
    Select,
    Set,
    Table,
    Temp,
    Temporary,
    Then,
    Ties,
    To,
    Transaction,
    Trigger,
    Unbounded,
    Union,
    Unique,
    Update,
    Using,
    Vacuum,
    Values,
    View,
    Virtual,
    When,
    Where,
    Window,
    With,
    Without,
}

impl Keyword {
    /// Every keyword, in alphabetical order.
    pub const ALL: &'static [Self] = &[
        Self::Abort,
        Self::Action,
        Self::Add,
        Self::After,
        Self::All,
        Self::Alter,
        Self::Always,
        Self::Analyze,
        Self::And,
        Self::As,
        Self::Asc,
        Self::Attach,
        Self::Autoincrement,
        Self::Before,
        Self::Begin,
        Self::Between,
        Self::By,
        Self::Cascade,
        Self::Case,
        Self::Cast,
        Self::Check,
        Self::Collate,
        Self::Column,
        Self::Commit,
        Self::Conflict,
        Self::Constraint,
        Self::Create,
        Self::Cross,
        Self::Current,
        Self::CurrentDate,
        Self::CurrentTime,
        Self::CurrentTimestamp,
        Self::Database,
        Self::Default,
        Self::Deferrable,
        Self::Deferred,
        Self::Delete,
        Self::Desc,
        Self::Detach,
        Self::Distinct,
        Self::Do,
        Self::Drop,
        Self::Each,
        Self::Else,
        Self::End,
        Self::Escape,
        Self::Except,
        Self::Exclude,
        Self::Exclusive,
        Self::Exists,
        Self::Explain,
        Self::Fail,
        Self::Filter,
        Self::First,
        Self::Following,
        Self::For,
        Self::Foreign,
        Self::From,
        Self::Full,
        Self::Generated,
        Self::Glob,
        Self::Group,
        Self::Groups,
        Self::Having,
        Self::If,
        Self::Ignore,
        Self::Immediate,
        Self::In,
        Self::Index,
        Self::Indexed,
        Self::Initially,
        Self::Inner,
        Self::Insert,
        Self::Instead,
        Self::Intersect,
        Self::Into,
        Self::Is,
        Self::Isnull,
        Self::Join,
        Self::Key,
        Self::Last,
        Self::Left,
        Self::Like,
        Self::Limit,
        Self::Match,
        Self::Materialized,
        Self::Natural,
        Self::No,
        Self::Not,
        Self::Nothing,
        Self::Notnull,
        Self::Null,
        Self::Nulls,
        Self::Of,
        Self::Offset,
        Self::On,
        Self::Or,
        Self::Order,
        Self::Others,
        Self::Outer,
        Self::Over,
        Self::Partition,
        Self::Plan,
        Self::Pragma,
        Self::Preceding,
        Self::Primary,
        Self::Query,
        Self::Raise,
        Self::Range,
        Self::Recursive,
        Self::References,
        Self::Regexp,
        Self::Reindex,
        Self::Release,
        Self::Rename,
        Self::Replace,
        Self::Restrict,
        Self::Returning,
        Self::Right,
        Self::Rollback,
        Self::Row,
        Self::Rows,
        Self::Savepoint,
        Self::Select,
        Self::Set,
        Self::Table,
        Self::Temp,
        Self::Temporary,
        Self::Then,
        Self::Ties,
        Self::To,
        Self::Transaction,
        Self::Trigger,
        Self::Unbounded,
        Self::Union,
        Self::Unique,
        Self::Update,
        Self::Using,
        Self::Vacuum,
        Self::Values,
        Self::View,
        Self::Virtual,
        Self::When,
        Self::Where,
        Self::Window,
        Self::With,
        Self::Without,
    ];

    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait, clippy::too_many_lines)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ABORT" => Some(Self::Abort),
            "ACTION" => Some(Self::Action),
            "ADD" => Some(Self::Add),
            "AFTER" => Some(Self::After),
            "ALL" => Some(Self::All),
            "ALTER" => Some(Self::Alter),
            "ALWAYS" => Some(Self::Always),
            "ANALYZE" => Some(Self::Analyze),
            "AND" => Some(Self::And),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "ATTACH" => Some(Self::Attach),
            "AUTOINCREMENT" => Some(Self::Autoincrement),
            "BEFORE" => Some(Self::Before),
            "BEGIN" => Some(Self::Begin),
            "BETWEEN" => Some(Self::Between),
            "BY" => Some(Self::By),
            "CASCADE" => Some(Self::Cascade),
            "CASE" => Some(Self::Case),
            "CAST" => Some(Self::Cast),
            "CHECK" => Some(Self::Check),
            "COLLATE" => Some(Self::Collate),
            "COLUMN" => Some(Self::Column),
            "COMMIT" => Some(Self::Commit),
            "CONFLICT" => Some(Self::Conflict),
            "CONSTRAINT" => Some(Self::Constraint),
            "CREATE" => Some(Self::Create),
            "CROSS" => Some(Self::Cross),
            "CURRENT" => Some(Self::Current),
            "CURRENT_DATE" => Some(Self::CurrentDate),
            "CURRENT_TIME" => Some(Self::CurrentTime),
            "CURRENT_TIMESTAMP" => Some(Self::CurrentTimestamp),
            "DATABASE" => Some(Self::Database),
            "DEFAULT" => Some(Self::Default),
            "DEFERRABLE" => Some(Self::Deferrable),
            "DEFERRED" => Some(Self::Deferred),
            "DELETE" => Some(Self::Delete),
            "DESC" => Some(Self::Desc),
            "DETACH" => Some(Self::Detach),
            "DISTINCT" => Some(Self::Distinct),
            "DO" => Some(Self::Do),
            "DROP" => Some(Self::Drop),
            "EACH" => Some(Self::Each),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "ESCAPE" => Some(Self::Escape),
            "EXCEPT" => Some(Self::Except),
            "EXCLUDE" => Some(Self::Exclude),
            "EXCLUSIVE" => Some(Self::Exclusive),
            "EXISTS" => Some(Self::Exists),
            "EXPLAIN" => Some(Self::Explain),
            "FAIL" => Some(Self::Fail),
            "FILTER" => Some(Self::Filter),
            "FIRST" => Some(Self::First),
            "FOLLOWING" => Some(Self::Following),
            "FOR" => Some(Self::For),
            "FOREIGN" => Some(Self::Foreign),
            "FROM" => Some(Self::From),
            "FULL" => Some(Self::Full),
            "GENERATED" => Some(Self::Generated),
            "GLOB" => Some(Self::Glob),
            "GROUP" => Some(Self::Group),
            "GROUPS" => Some(Self::Groups),
            "HAVING" => Some(Self::Having),
            "IF" => Some(Self::If),
            "IGNORE" => Some(Self::Ignore),
            "IMMEDIATE" => Some(Self::Immediate),
            "IN" => Some(Self::In),
            "INDEX" => Some(Self::Index),
            "INDEXED" => Some(Self::Indexed),
            "INITIALLY" => Some(Self::Initially),
            "INNER" => Some(Self::Inner),
            "INSERT" => Some(Self::Insert),
            "INSTEAD" => Some(Self::Instead),
            "INTERSECT" => Some(Self::Intersect),
            "INTO" => Some(Self::Into),
            "IS" => Some(Self::Is),
            "ISNULL" => Some(Self::Isnull),
            "JOIN" => Some(Self::Join),
            "KEY" => Some(Self::Key),
            "LAST" => Some(Self::Last),
            "LEFT" => Some(Self::Left),
            "LIKE" => Some(Self::Like),
            "LIMIT" => Some(Self::Limit),
            "MATCH" => Some(Self::Match),
            "MATERIALIZED" => Some(Self::Materialized),
            "NATURAL" => Some(Self::Natural),
            "NO" => Some(Self::No),
            "NOT" => Some(Self::Not),
            "NOTHING" => Some(Self::Nothing),
            "NOTNULL" => Some(Self::Notnull),
            "NULL" => Some(Self::Null),
            "NULLS" => Some(Self::Nulls),
            "OF" => Some(Self::Of),
            "OFFSET" => Some(Self::Offset),
            "ON" => Some(Self::On),
            "OR" => Some(Self::Or),
            "ORDER" => Some(Self::Order),
            "OTHERS" => Some(Self::Others),
            "OUTER" => Some(Self::Outer),
            "OVER" => Some(Self::Over),
            "PARTITION" => Some(Self::Partition),
            "PLAN" => Some(Self::Plan),
            "PRAGMA" => Some(Self::Pragma),
            "PRECEDING" => Some(Self::Preceding),
            "PRIMARY" => Some(Self::Primary),
            "QUERY" => Some(Self::Query),
            "RAISE" => Some(Self::Raise),
            "RANGE" => Some(Self::Range),
            "RECURSIVE" => Some(Self::Recursive),
            "REFERENCES" => Some(Self::References),
            "REGEXP" => Some(Self::Regexp),
            "REINDEX" => Some(Self::Reindex),
            "RELEASE" => Some(Self::Release),
            "RENAME" => Some(Self::Rename),
            "REPLACE" => Some(Self::Replace),
            "RESTRICT" => Some(Self::Restrict),
            "RETURNING" => Some(Self::Returning),
            "RIGHT" => Some(Self::Right),
            "ROLLBACK" => Some(Self::Rollback),
            "ROW" => Some(Self::Row),
            "ROWS" => Some(Self::Rows),
            "SAVEPOINT" => Some(Self::Savepoint),
            "SELECT" => Some(Self::Select),
            "SET" => Some(Self::Set),
            "TABLE" => Some(Self::Table),
            "TEMP" => Some(Self::Temp),
            "TEMPORARY" => Some(Self::Temporary),
            "THEN" => Some(Self::Then),
            "TIES" => Some(Self::Ties),
            "TO" => Some(Self::To),
            "TRANSACTION" => Some(Self::Transaction),
            "TRIGGER" => Some(Self::Trigger),
            "UNBOUNDED" => Some(Self::Unbounded),
            "UNION" => Some(Self::Union),
            "UNIQUE" => Some(Self::Unique),
            "UPDATE" => Some(Self::Update),
            "USING" => Some(Self::Using),
            "VACUUM" => Some(Self::Vacuum),
            "VALUES" => Some(Self::Values),
            "VIEW" => Some(Self::View),
            "VIRTUAL" => Some(Self::Virtual),
            "WHEN" => Some(Self::When),
            "WHERE" => Some(Self::Where),
            "WINDOW" => Some(Self::Window),
            "WITH" => Some(Self::With),
            "WITHOUT" => Some(Self::Without),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "ABORT",
            Self::Action => "ACTION",
            Self::Add => "ADD",
            Self::After => "AFTER",
            Self::All => "ALL",
            Self::Alter => "ALTER",
            Self::Always => "ALWAYS",
            Self::Analyze => "ANALYZE",
            Self::And => "AND",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::Attach => "ATTACH",
            Self::Autoincrement => "AUTOINCREMENT",
            Self::Before => "BEFORE",
            Self::Begin => "BEGIN",
            Self::Between => "BETWEEN",
            Self::By => "BY",
            Self::Cascade => "CASCADE",
            Self::Case => "CASE",
            Self::Cast => "CAST",
            Self::Check => "CHECK",
            Self::Collate => "COLLATE",
            Self::Column => "COLUMN",
            Self::Commit => "COMMIT",
            Self::Conflict => "CONFLICT",
            Self::Constraint => "CONSTRAINT",
            Self::Create => "CREATE",
            Self::Cross => "CROSS",
            Self::Current => "CURRENT",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::Database => "DATABASE",
            Self::Default => "DEFAULT",
            Self::Deferrable => "DEFERRABLE",
            Self::Deferred => "DEFERRED",
            Self::Delete => "DELETE",
            Self::Desc => "DESC",
            Self::Detach => "DETACH",
            Self::Distinct => "DISTINCT",
            Self::Do => "DO",
            Self::Drop => "DROP",
            Self::Each => "EACH",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Escape => "ESCAPE",
            Self::Except => "EXCEPT",
            Self::Exclude => "EXCLUDE",
            Self::Exclusive => "EXCLUSIVE",
            Self::Exists => "EXISTS",
            Self::Explain => "EXPLAIN",
            Self::Fail => "FAIL",
            Self::Filter => "FILTER",
            Self::First => "FIRST",
            Self::Following => "FOLLOWING",
            Self::For => "FOR",
            Self::Foreign => "FOREIGN",
            Self::From => "FROM",
            Self::Full => "FULL",
            Self::Generated => "GENERATED",
            Self::Glob => "GLOB",
            Self::Group => "GROUP",
            Self::Groups => "GROUPS",
            Self::Having => "HAVING",
            Self::If => "IF",
            Self::Ignore => "IGNORE",
            Self::Immediate => "IMMEDIATE",
            Self::In => "IN",
            Self::Index => "INDEX",
            Self::Indexed => "INDEXED",
            Self::Initially => "INITIALLY",
            Self::Inner => "INNER",
            Self::Insert => "INSERT",
            Self::Instead => "INSTEAD",
            Self::Intersect => "INTERSECT",
            Self::Into => "INTO",
            Self::Is => "IS",
            Self::Isnull => "ISNULL",
            Self::Join => "JOIN",
            Self::Key => "KEY",
            Self::Last => "LAST",
            Self::Left => "LEFT",
            Self::Like => "LIKE",
            Self::Limit => "LIMIT",
            Self::Match => "MATCH",
            Self::Materialized => "MATERIALIZED",
            Self::Natural => "NATURAL",
            Self::No => "NO",
            Self::Not => "NOT",
            Self::Nothing => "NOTHING",
            Self::Notnull => "NOTNULL",
            Self::Null => "NULL",
            Self::Nulls => "NULLS",
            Self::Of => "OF",
            Self::Offset => "OFFSET",
            Self::On => "ON",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Others => "OTHERS",
            Self::Outer => "OUTER",
            Self::Over => "OVER",
            Self::Partition => "PARTITION",
            Self::Plan => "PLAN",
            Self::Pragma => "PRAGMA",
            Self::Preceding => "PRECEDING",
            Self::Primary => "PRIMARY",
            Self::Query => "QUERY",
            Self::Raise => "RAISE",
            Self::Range => "RANGE",
            Self::Recursive => "RECURSIVE",
            Self::References => "REFERENCES",
            Self::Regexp => "REGEXP",
            Self::Reindex => "REINDEX",
            Self::Release => "RELEASE",
            Self::Rename => "RENAME",
            Self::Replace => "REPLACE",
            Self::Restrict => "RESTRICT",
            Self::Returning => "RETURNING",
            Self::Right => "RIGHT",
            Self::Rollback => "ROLLBACK",
            Self::Row => "ROW",
            Self::Rows => "ROWS",
            Self::Savepoint => "SAVEPOINT",
            Self::Select => "SELECT",
            Self::Set => "SET",
            Self::Table => "TABLE",
            Self::Temp => "TEMP",
            Self::Temporary => "TEMPORARY",
            Self::Then => "THEN",
            Self::Ties => "TIES",
            Self::To => "TO",
            Self::Transaction => "TRANSACTION",
            Self::Trigger => "TRIGGER",
            Self::Unbounded => "UNBOUNDED",
            Self::Union => "UNION",
            Self::Unique => "UNIQUE",
            Self::Update => "UPDATE",
            Self::Using => "USING",
            Self::Vacuum => "VACUUM",
            Self::Values => "VALUES",
            Self::View => "VIEW",
            Self::Virtual => "VIRTUAL",
            Self::When => "WHEN",
            Self::Where => "WHERE",
            Self::Window => "WINDOW",
            Self::With => "WITH",
            Self::Without => "WITHOUT",
        }
    }
}

impl core::fmt::Display for Keyword {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token kind minted outside this crate.
///
/// Downstream crates (syntax highlighting, for instance) add their own token
/// kinds without touching [`TokenKind`]. Kinds from different namespaces never
/// compare equal, whatever their codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExtensionKind {
    /// Name of the module that owns this kind space.
    pub namespace: &'static str,
    /// Discriminant inside the namespace.
    pub code: u16,
}

impl ExtensionKind {
    /// Creates an extension kind.
    #[must_use]
    pub const fn new(namespace: &'static str, code: u16) -> Self {
        Self { namespace, code }
    }
}

impl core::fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.namespace, self.code)
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Words
    /// SQL keyword
    Keyword(Keyword),
    /// Bare or quoted identifier
    Identifier,

    // Literals
    /// String literal (e.g., 'hello')
    String,
    /// Blob literal (e.g., X'1234')
    Blob,
    /// Integer, real or hexadecimal literal
    Numeric,

    // Comments
    /// `-- ...` up to the end of the line
    SqlComment,
    /// `/* ... */`
    CComment,

    // Bind parameters
    /// `?` or `?NNN`
    QuestionVariable,
    /// `:name`
    ColonVariable,
    /// `@name`
    AtVariable,
    /// `$name`, `$a::b`, `$a(x)`
    DollarVariable,

    // Operators and punctuation
    /// -
    Minus,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ;
    Semicolon,
    /// +
    Plus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// ==
    EqEq,
    /// <=
    LtEq,
    /// <>
    LtGt,
    /// <<
    LeftShift,
    /// <
    Lt,
    /// >=
    GtEq,
    /// >>
    RightShift,
    /// >
    Gt,
    /// !=
    NotEq,
    /// ,
    Comma,
    /// &
    BitAnd,
    /// ~
    BitNot,
    /// |
    BitOr,
    /// ||
    Concat,
    /// .
    Dot,
    /// ->
    Arrow,
    /// ->>
    DoubleArrow,

    // Special
    /// Run of spaces, tabs, carriage returns, line feeds and form feeds
    Whitespace,
    /// Malformed input
    Error(LexError),
    /// End of input
    Eof,
    /// Kind minted by another crate
    Extension(ExtensionKind),
}

impl TokenKind {
    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Self::Keyword(_))
    }

    /// Returns true if this is a lexer error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns true for whitespace and comments, which the parser never sees.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Whitespace | Self::SqlComment | Self::CComment)
    }

    /// Returns true for comments.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::SqlComment | Self::CComment)
    }

    /// Returns true for the four bind parameter styles.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(
            self,
            Self::QuestionVariable | Self::ColonVariable | Self::AtVariable | Self::DollarVariable
        )
    }

    /// Returns true for kinds whose lexemes fuse with a neighbouring word when
    /// written without a separator.
    #[must_use]
    pub const fn is_word_like(&self) -> bool {
        matches!(
            self,
            Self::Keyword(_)
                | Self::Identifier
                | Self::String
                | Self::Blob
                | Self::Numeric
                | Self::QuestionVariable
                | Self::ColonVariable
                | Self::AtVariable
                | Self::DollarVariable
        )
    }

    /// Returns the fixed spelling of operator and punctuation kinds.
    #[must_use]
    pub const fn punctuation(&self) -> Option<&'static str> {
        let text = match self {
            Self::Minus => "-",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Semicolon => ";",
            Self::Plus => "+",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Eq => "=",
            Self::EqEq => "==",
            Self::LtEq => "<=",
            Self::LtGt => "<>",
            Self::LeftShift => "<<",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::RightShift => ">>",
            Self::Gt => ">",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::BitAnd => "&",
            Self::BitNot => "~",
            Self::BitOr => "|",
            Self::Concat => "||",
            Self::Dot => ".",
            Self::Arrow => "->",
            Self::DoubleArrow => "->>",
            _ => return None,
        };
        Some(text)
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(text) = self.punctuation() {
            return f.write_str(text);
        }
        match self {
            Self::Keyword(kw) => f.write_str(kw.as_str()),
            Self::Identifier => f.write_str("identifier"),
            Self::String => f.write_str("string"),
            Self::Blob => f.write_str("blob"),
            Self::Numeric => f.write_str("numeric"),
            Self::SqlComment => f.write_str("sql comment"),
            Self::CComment => f.write_str("c comment"),
            Self::QuestionVariable => f.write_str("?NNN variable"),
            Self::ColonVariable => f.write_str(":AAA variable"),
            Self::AtVariable => f.write_str("@AAA variable"),
            Self::DollarVariable => f.write_str("$AAA variable"),
            Self::Whitespace => f.write_str("whitespace"),
            Self::Error(err) => write!(f, "error: {err}"),
            Self::Eof => f.write_str("EOF"),
            Self::Extension(ext) => write!(f, "{ext}"),
            _ => Ok(()),
        }
    }
}

/// Returns true if two adjacent tokens of these kinds must be separated by
/// whitespace to be lexed back as the same two tokens.
#[must_use]
pub const fn needs_space(left: &TokenKind, right: &TokenKind) -> bool {
    if left.is_word_like() && right.is_word_like() {
        return true;
    }
    // "--" and "/*" open comments
    matches!(
        (left, right),
        (TokenKind::Minus, TokenKind::Minus) | (TokenKind::Slash, TokenKind::Star)
    )
}

/// A token with its text and its span in the source code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates an end-of-input token at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::empty(offset),
        }
    }

    /// The kind of token.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// The raw source text, or `None` for end of input.
    #[must_use]
    pub fn lexeme(&self) -> Option<&str> {
        if self.is_eof() {
            None
        } else {
            Some(&self.text)
        }
    }

    /// The raw source text; empty for end of input.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The location in the source code.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Returns true for identifiers whose text is `word`, ignoring ASCII case.
    ///
    /// Some grammar words (`STORED`, for instance) are not SQLite keywords.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self.kind, TokenKind::Identifier) && self.text.eq_ignore_ascii_case(word)
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.lexeme() {
            Some(text) => f.write_str(text),
            None => f.write_str("EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("SeLeCt"), Some(Keyword::Select));
        assert_eq!(
            Keyword::from_str("current_timestamp"),
            Some(Keyword::CurrentTimestamp)
        );
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
        assert_eq!(Keyword::from_str("TRUE"), None);
    }

    #[test]
    fn test_keyword_table_round_trips() {
        assert_eq!(Keyword::ALL.len(), 147);
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(*kw));
        }
        assert!(Keyword::ALL.windows(2).all(|w| w[0].as_str() < w[1].as_str()));
    }

    #[test]
    fn test_extension_kinds_are_disjoint() {
        let a = TokenKind::Extension(ExtensionKind::new("highlight", 0));
        let b = TokenKind::Extension(ExtensionKind::new("fuzz", 0));
        let c = TokenKind::Extension(ExtensionKind::new("highlight", 0));
        assert_ne!(a, b);
        assert_eq!(a, c);
        assert!(!a.is_keyword());
        assert_eq!(a.to_string(), "highlight#0");
    }

    #[test]
    fn test_token_lexeme() {
        let eof = Token::eof(4);
        let select = Token::new(TokenKind::Keyword(Keyword::Select), "select", Span::new(0, 6));
        assert!(eof.is_eof());
        assert_eq!(eof.lexeme(), None);
        assert_eq!(select.lexeme(), Some("select"));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(eof.to_string(), "EOF");
    }

    #[test]
    fn test_is_word() {
        let stored = Token::new(TokenKind::Identifier, "Stored", Span::new(0, 6));
        let quoted = Token::new(TokenKind::String, "'stored'", Span::new(0, 8));
        assert!(stored.is_word("STORED"));
        assert!(!quoted.is_word("STORED"));
    }

    #[test]
    fn test_needs_space() {
        let kw = TokenKind::Keyword(Keyword::Table);
        assert!(needs_space(&kw, &TokenKind::Identifier));
        assert!(needs_space(&TokenKind::Numeric, &TokenKind::Identifier));
        assert!(!needs_space(&TokenKind::Identifier, &TokenKind::Semicolon));
        assert!(!needs_space(&TokenKind::LeftParen, &TokenKind::Numeric));
        assert!(needs_space(&TokenKind::Minus, &TokenKind::Minus));
        assert!(needs_space(&TokenKind::Slash, &TokenKind::Star));
        assert!(!needs_space(&TokenKind::Minus, &TokenKind::Numeric));
    }

    #[test]
    fn test_trivia() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::CComment.is_trivia());
        assert!(!TokenKind::Whitespace.is_comment());
        assert!(!TokenKind::Eof.is_trivia());
        assert!(!TokenKind::Error(LexError::InvalidBlob).is_trivia());
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::DoubleArrow.to_string(), "->>");
        assert_eq!(TokenKind::Keyword(Keyword::Alter).to_string(), "ALTER");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    }
}
