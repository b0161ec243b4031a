//! The diagnostic message catalog.
//!
//! Every diagnostic the compiler can emit is one of the [`Message`] kinds
//! below. Each kind carries a compile-time format string and a default
//! severity; callers never construct message text by hand. Format strings
//! use `{}` and `{:x}` placeholders, with `{{` and `}}` escaping literal
//! braces.

use std::fmt;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// A problem that fails the build.
    Error,
    /// A problem that does not fail the build unless warnings are upgraded.
    Warning,
    /// Supplementary information. Reserved; no catalog entry uses it yet.
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// The closed set of diagnostic kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    FileNotFound,
    CouldNotOpenFile,
    SourceInputTooLarge,
    UnexpectedCharacter,
    MissingClosingQuote,
    UnterminatedBlockComment,
    ExpectFuncStructEnum,
    ExpectParenAfterFuncName,
    ExpectType,
    ExpectParamName,
    ExpectParenAfterParams,
    ExpectParenAfterOutputs,
    ExpectBraceBeforeFuncBody,
    ExpectNameAfterLet,
    ExpectNameAfterDeclType,
    ExpectExpr,
    ExpectSemicolon,
    ExpectNameAfterDot,
    ExpectColonInIfExpr,
    ExpectColonOrBlock,
    UnnecessaryColonBeforeBlock,
    UnnecessarySemicolon,
    ExpectElse,
    ExpectClosingParen,
    ExpectBracketAfterIndex,
    ExpectBracketAfterArrayBound,
    ExpectBraceAfterPermission,
    ExpectArrowAfterFuncTypeParams,
    FuncTypeDefaultArgument,
    AmbiguousOperatorMixing,
    ExpectNameForStruct,
    ExpectNameForEnum,
}

impl Message {
    /// The format string for this message kind.
    pub fn format(self) -> &'static str {
        use Message::*;
        match self {
            FileNotFound => "file not found",
            CouldNotOpenFile => "could not open file (system error {})",
            SourceInputTooLarge => "source input is too large, limit is {} bytes",
            UnexpectedCharacter => "unexpected character `0x{:x}`",
            MissingClosingQuote => "missing closing quote",
            UnterminatedBlockComment => "block comment must be closed with `*/`",
            ExpectFuncStructEnum => "expected function, struct or enum, but found {}",
            ExpectParenAfterFuncName => "expected `(` after function name, but found {}",
            ExpectType => "expected a type, but found {}",
            ExpectParamName => "expected name for parameter, but found {}",
            ExpectParenAfterParams => "expected `)` after parameters, but found {}",
            ExpectParenAfterOutputs => "expected `)` after function outputs, but found {}",
            ExpectBraceBeforeFuncBody => "expected `{{` before function body, but found {}",
            ExpectNameAfterLet => "expected a name after `let` specifier, but found {}",
            ExpectNameAfterDeclType => "expected a name after type in declaration, but found {}",
            ExpectExpr => "expected expression, but found {}",
            ExpectSemicolon => "expected a `;`, but found {}",
            ExpectNameAfterDot => "expected a member name after `.`, but found {}",
            ExpectColonInIfExpr => "expected `:` after `if` condition, but found {}",
            ExpectColonOrBlock => "expected `:` or `{{` before control flow statement, but found {}",
            UnnecessaryColonBeforeBlock => "`:` is unnecessary before a block",
            UnnecessarySemicolon => "unnecessary semicolon",
            ExpectElse => "expected `else` after `if` expression, but found {}",
            ExpectClosingParen => "expected closing `)`, but found {}",
            ExpectBracketAfterIndex => "expected `]` after index expression, but found {}",
            ExpectBracketAfterArrayBound => "expected `]` after array bound, but found {}",
            ExpectBraceAfterPermission => "expected `}}` after permission arguments, but found {}",
            ExpectArrowAfterFuncTypeParams => {
                "expected `->` after parameters for function type, but found {}"
            }
            FuncTypeDefaultArgument => "parameter in function type cannot have default argument",
            AmbiguousOperatorMixing => "mixing operator `{}` with operator `{}` is ambiguous",
            ExpectNameForStruct => "expected name for struct, but found {}",
            ExpectNameForEnum => "expected name for enum, but found {}",
        }
    }

    /// The default severity for this message kind.
    pub fn severity(self) -> Severity {
        match self {
            Message::UnnecessaryColonBeforeBlock | Message::UnnecessarySemicolon => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}

/// One formatted argument for a diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageArg {
    Str(String),
    Unsigned(u64),
}

impl From<&str> for MessageArg {
    fn from(value: &str) -> Self {
        MessageArg::Str(value.to_owned())
    }
}

impl From<String> for MessageArg {
    fn from(value: String) -> Self {
        MessageArg::Str(value)
    }
}

impl From<u32> for MessageArg {
    fn from(value: u32) -> Self {
        MessageArg::Unsigned(value as u64)
    }
}

impl From<u64> for MessageArg {
    fn from(value: u64) -> Self {
        MessageArg::Unsigned(value)
    }
}

/// The argument list accompanying a report call. The number of arguments
/// must match the placeholder count of the message's format string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageArgs(pub Vec<MessageArg>);

impl MessageArgs {
    /// No arguments.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// A single argument.
    pub fn one(arg: impl Into<MessageArg>) -> Self {
        Self(vec![arg.into()])
    }

    /// Two arguments.
    pub fn two(first: impl Into<MessageArg>, second: impl Into<MessageArg>) -> Self {
        Self(vec![first.into(), second.into()])
    }

    /// Whether the argument count matches the format's placeholder count.
    pub fn matches_placeholders_of(&self, message: Message) -> bool {
        count_placeholders(message.format()) == self.0.len()
    }

    /// Renders the message format with these arguments substituted.
    pub fn format_message(&self, message: Message) -> String {
        let format = message.format();
        let mut out = String::with_capacity(format.len() + 16);
        let mut args = self.0.iter();
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut spec = String::new();
                    for s in chars.by_ref() {
                        if s == '}' {
                            break;
                        }
                        spec.push(s);
                    }
                    match args.next() {
                        Some(MessageArg::Str(s)) => out.push_str(s),
                        Some(MessageArg::Unsigned(n)) if spec == ":x" => {
                            out.push_str(&format!("{n:x}"));
                        }
                        Some(MessageArg::Unsigned(n)) => out.push_str(&n.to_string()),
                        None => out.push_str("{}"),
                    }
                }
                _ => out.push(c),
            }
        }
        out
    }
}

/// Counts substitution placeholders in a format string, ignoring `{{`/`}}`
/// escapes.
fn count_placeholders(format: &str) -> usize {
    let mut count = 0;
    let mut chars = format.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
            }
            '{' => {
                count += 1;
                for s in chars.by_ref() {
                    if s == '}' {
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    count
}
