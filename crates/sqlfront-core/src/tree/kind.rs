//! Syntactic categories of tree nodes.

use serde::Serialize;

/// The kind of a tree node.
///
/// Token categories live in [`TokenKind`](crate::lexer::TokenKind); this enum
/// names what a group of tokens means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    // Statements
    /// Root of every parse.
    SqlStatement,
    AlterTable,
    Select,
    Analyze,
    Attach,
    Begin,

    // Names
    TableName,
    SchemaName,
    ColumnName,
    ColumnAlias,

    // ALTER TABLE actions
    RenameTo,
    RenameColumn,
    AddColumn,
    DropColumn,

    // Column definitions
    ColumnDefinition,
    TypeName,
    SignedNumber,
    ColumnConstraint,
    ConflictClause,
    ForeignKeyClause,

    // SELECT
    ResultColumn,

    // Expression operator levels, lowest precedence first
    Or,
    And,
    Not,
    Equality,
    Comparison,
    Bitwise,
    Additive,
    Multiplicative,
    Concatenation,
    Collate,
    Unary,

    // Primary expressions
    ColumnReference,
    FunctionCall,
    FilterClause,
    OverClause,
    PartitionBy,
    OrderBy,
    OrderingTerm,
    FrameSpec,
    FrameBound,
    FrameExclude,
    Parenthesized,
    Subquery,
    Cast,
    Exists,
    Case,
    When,
    Else,
    Raise,

    /// A leaf wrapping one token.
    Terminal,

    // Diagnostics
    /// Exactly one expected thing is absent.
    ErrorMissing,
    /// None of several alternatives matched.
    ErrorExpecting,
    /// Recovery ran out of input.
    ErrorUnexpectedEof,
    /// Tokens discarded during error recovery.
    Skipped,
}

impl NodeKind {
    /// Returns the display name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SqlStatement => "SQLStatement",
            Self::AlterTable => "AlterTable",
            Self::Select => "Select",
            Self::Analyze => "Analyze",
            Self::Attach => "Attach",
            Self::Begin => "Begin",
            Self::TableName => "TableName",
            Self::SchemaName => "SchemaName",
            Self::ColumnName => "ColumnName",
            Self::ColumnAlias => "ColumnAlias",
            Self::RenameTo => "RenameTo",
            Self::RenameColumn => "RenameColumn",
            Self::AddColumn => "AddColumn",
            Self::DropColumn => "DropColumn",
            Self::ColumnDefinition => "ColumnDefinition",
            Self::TypeName => "TypeName",
            Self::SignedNumber => "SignedNumber",
            Self::ColumnConstraint => "ColumnConstraint",
            Self::ConflictClause => "ConflictClause",
            Self::ForeignKeyClause => "ForeignKeyClause",
            Self::ResultColumn => "ResultColumn",
            Self::Or => "Or",
            Self::And => "And",
            Self::Not => "Not",
            Self::Equality => "Equality",
            Self::Comparison => "Comparison",
            Self::Bitwise => "Bitwise",
            Self::Additive => "Additive",
            Self::Multiplicative => "Multiplicative",
            Self::Concatenation => "Concatenation",
            Self::Collate => "Collate",
            Self::Unary => "Unary",
            Self::ColumnReference => "ColumnReference",
            Self::FunctionCall => "FunctionCall",
            Self::FilterClause => "FilterClause",
            Self::OverClause => "OverClause",
            Self::PartitionBy => "PartitionBy",
            Self::OrderBy => "OrderBy",
            Self::OrderingTerm => "OrderingTerm",
            Self::FrameSpec => "FrameSpec",
            Self::FrameBound => "FrameBound",
            Self::FrameExclude => "FrameExclude",
            Self::Parenthesized => "Parenthesized",
            Self::Subquery => "Subquery",
            Self::Cast => "Cast",
            Self::Exists => "Exists",
            Self::Case => "Case",
            Self::When => "When",
            Self::Else => "Else",
            Self::Raise => "Raise",
            Self::Terminal => "Token",
            Self::ErrorMissing => "ErrorMissing",
            Self::ErrorExpecting => "ErrorExpecting",
            Self::ErrorUnexpectedEof => "ErrorUnexpectedEOF",
            Self::Skipped => "Skipped",
        }
    }

    /// Returns true for nodes that wrap a single name token.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(
            self,
            Self::TableName | Self::SchemaName | Self::ColumnName | Self::ColumnAlias
        )
    }

    /// Returns true for the three diagnostic kinds.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::ErrorMissing | Self::ErrorExpecting | Self::ErrorUnexpectedEof
        )
    }
}

impl core::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
