//! Whole-lexer scenarios: literal shapes, comment nesting, recovery, and
//! the stream-level invariants.

use cero_util::{CollectingReporter, Message, Reporter, Severity, Source, MAX_SOURCE_LENGTH};

use crate::token::{Token, TokenKind};
use crate::{lex, TokenStream};
use TokenKind::*;

fn lex_source(text: &str) -> (Source, TokenStream, CollectingReporter) {
    let source = Source::new("test.ce", text);
    let mut reporter = CollectingReporter::new();
    let stream = lex(&source, &mut reporter);
    (source, stream, reporter)
}

fn lex_clean(text: &str) -> (Source, TokenStream) {
    let (source, stream, reporter) = lex_source(text);
    assert!(
        !reporter.has_errors(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics()
    );
    (source, stream)
}

fn kinds(stream: &TokenStream) -> Vec<TokenKind> {
    stream.tokens().iter().map(|t| t.kind).collect()
}

fn lexemes(source: &Source, stream: &TokenStream) -> Vec<String> {
    stream
        .tokens()
        .iter()
        .filter(|t| t.kind != EndOfFile)
        .map(|t| t.lexeme(source).to_owned())
        .collect()
}

#[test]
fn empty_source() {
    let (_, stream) = lex_clean("");
    let tokens = stream.tokens();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, EndOfFile);
    assert_eq!(tokens[0].offset, 0);
}

#[test]
fn eof_offset_is_source_length() {
    let (_, stream) = lex_clean("a + b");
    let tokens = stream.tokens();
    assert_eq!(tokens.last().unwrap().offset, 5);
}

#[test]
fn keywords_and_names() {
    let (source, stream) = lex_clean("struct while foo _bar x1 Let returned");
    assert_eq!(
        kinds(&stream),
        [Struct, While, Name, Name, Name, Name, Name, EndOfFile]
    );
    assert_eq!(
        lexemes(&source, &stream),
        ["struct", "while", "foo", "_bar", "x1", "Let", "returned"]
    );
}

#[test]
fn all_keywords() {
    let text = "break catch const continue do else enum for if in let \
                private public return static struct switch throw try var while";
    let (_, stream) = lex_clean(text);
    assert_eq!(
        kinds(&stream),
        [
            Break, Catch, Const, Continue, Do, Else, Enum, For, If, In, Let, Private, Public,
            Return, Static, Struct, Switch, Throw, Try, Var, While, EndOfFile
        ]
    );
}

#[test]
fn angle_operators_munch_longest() {
    let (_, stream) = lex_clean("<<= << <= <");
    assert_eq!(
        kinds(&stream),
        [
            LeftAngleAngleEquals,
            LeftAngleAngle,
            LeftAngleEquals,
            LeftAngle,
            EndOfFile
        ]
    );
}

#[test]
fn right_angles_do_not_pair() {
    // `>>=` is one token, but `>>` must stay two `>` tokens so nested
    // generic argument lists can be closed one angle at a time.
    let (_, stream) = lex_clean(">>= >> >= >");
    assert_eq!(
        kinds(&stream),
        [
            RightAngleAngleEquals,
            RightAngle,
            RightAngle,
            RightAngleEquals,
            RightAngle,
            EndOfFile
        ]
    );
}

#[test]
fn star_and_minus_operators() {
    let (_, stream) = lex_clean("**= ** *= * -> -- -= -");
    assert_eq!(
        kinds(&stream),
        [
            StarStarEquals, StarStar, StarEquals, Star, ThinArrow, MinusMinus, MinusEquals, Minus,
            EndOfFile
        ]
    );
}

#[test]
fn remaining_operators() {
    let (_, stream) = lex_clean("=> == = :: : && &= & || |= | ~= ~ ++ += + /= / %= % != !");
    assert_eq!(
        kinds(&stream),
        [
            ThickArrow,
            EqualsEquals,
            Equals,
            ColonColon,
            Colon,
            AmpersandAmpersand,
            AmpersandEquals,
            Ampersand,
            PipePipe,
            PipeEquals,
            Pipe,
            TildeEquals,
            Tilde,
            PlusPlus,
            PlusEquals,
            Plus,
            SlashEquals,
            Slash,
            PercentEquals,
            Percent,
            BangEquals,
            Bang,
            EndOfFile
        ]
    );
}

#[test]
fn dots_and_ellipsis() {
    let (_, stream) = lex_clean("... .. .");
    assert_eq!(kinds(&stream), [Ellipsis, Dot, Dot, Dot, EndOfFile]);
}

#[test]
fn single_character_punctuation() {
    let (_, stream) = lex_clean("{ } ( ) [ ] , ; ^ ? @ $ #");
    assert_eq!(
        kinds(&stream),
        [
            LeftBrace,
            RightBrace,
            LeftParen,
            RightParen,
            LeftBracket,
            RightBracket,
            Comma,
            Semicolon,
            Caret,
            QuestionMark,
            At,
            Dollar,
            Hash,
            EndOfFile
        ]
    );
}

#[test]
fn integer_literals() {
    let (source, stream) = lex_clean("0\n123\n123 456\n0x123 456 eaeAEB234 32 B\n0b 0110 11101 110\n0o1125417245");
    assert_eq!(
        kinds(&stream),
        [
            DecIntLiteral,
            DecIntLiteral,
            DecIntLiteral,
            HexIntLiteral,
            BinIntLiteral,
            OctIntLiteral,
            EndOfFile
        ]
    );
    assert_eq!(
        lexemes(&source, &stream),
        [
            "0",
            "123",
            "123 456",
            "0x123 456 eaeAEB234 32 B",
            "0b 0110 11101 110",
            "0o1125417245"
        ]
    );
}

#[test]
fn hex_literal_stops_at_non_digit() {
    let (source, stream) = lex_clean("0x AB3235i");
    assert_eq!(kinds(&stream), [HexIntLiteral, Name, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["0x AB3235", "i"]);
}

#[test]
fn trailing_number_whitespace_stays_out() {
    let (source, stream) = lex_clean("0x 29356237     kk");
    assert_eq!(kinds(&stream), [HexIntLiteral, Name, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["0x 29356237", "kk"]);
}

#[test]
fn newline_ends_a_literal() {
    let (source, stream) = lex_clean("123\n456");
    assert_eq!(kinds(&stream), [DecIntLiteral, DecIntLiteral, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["123", "456"]);
}

#[test]
fn float_literals() {
    let (source, stream) = lex_clean("1.0\n.4\n.045\n100 000.000 231\n123 .456 7\n234 5 . 23 948");
    assert_eq!(
        kinds(&stream),
        [
            FloatLiteral,
            FloatLiteral,
            FloatLiteral,
            FloatLiteral,
            FloatLiteral,
            FloatLiteral,
            EndOfFile
        ]
    );
    assert_eq!(
        lexemes(&source, &stream),
        [
            "1.0",
            ".4",
            ".045",
            "100 000.000 231",
            "123 .456 7",
            "234 5 . 23 948"
        ]
    );
}

#[test]
fn dot_without_fraction_is_not_a_float() {
    let (source, stream) = lex_clean("1.");
    assert_eq!(kinds(&stream), [DecIntLiteral, Dot, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["1", "."]);

    let (source, stream) = lex_clean("1..z");
    assert_eq!(kinds(&stream), [DecIntLiteral, Dot, Dot, Name, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["1", ".", ".", "z"]);

    let (source, stream) = lex_clean("1.0.a");
    assert_eq!(kinds(&stream), [FloatLiteral, Dot, Name, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["1.0", ".", "a"]);
}

#[test]
fn zero_prefix_without_base_is_decimal() {
    let (source, stream) = lex_clean("0 x");
    assert_eq!(kinds(&stream), [DecIntLiteral, Name, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["0", "x"]);
}

#[test]
fn string_literals_with_escapes() {
    let text = r#""123\"" "\"" "" "\\" "\a" "\np" "\"\\a\a""#;
    let (source, stream) = lex_clean(text);
    assert_eq!(
        kinds(&stream),
        [
            StringLiteral,
            StringLiteral,
            StringLiteral,
            StringLiteral,
            StringLiteral,
            StringLiteral,
            StringLiteral,
            EndOfFile
        ]
    );
    assert_eq!(
        lexemes(&source, &stream),
        [
            r#""123\"""#,
            r#""\"""#,
            r#""""#,
            r#""\\""#,
            r#""\a""#,
            r#""\np""#,
            r#""\"\\a\a""#
        ]
    );
}

#[test]
fn char_literals() {
    let (source, stream) = lex_clean(r"'x' '\'' '\\'");
    assert_eq!(
        kinds(&stream),
        [CharLiteral, CharLiteral, CharLiteral, EndOfFile]
    );
    assert_eq!(lexemes(&source, &stream), ["'x'", r"'\''", r"'\\'"]);
}

#[test]
fn missing_closing_quote() {
    let (source, stream, reporter) = lex_source("let s = \"oops\nnext");
    assert_eq!(
        kinds(&stream),
        [Let, Name, Equals, StringLiteral, Name, EndOfFile]
    );
    // the literal ends at the newline, which is not consumed
    let tokens = stream.tokens();
    assert_eq!(tokens[3].lexeme(&source), "\"oops");

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, Message::MissingClosingQuote);
    assert_eq!(diagnostics[0].location.line, 1);
    assert_eq!(diagnostics[0].location.column, 14);
}

#[test]
fn missing_closing_quote_in_char_literal() {
    let (_, stream, reporter) = lex_source("'x\ny");
    assert_eq!(kinds(&stream), [CharLiteral, Name, EndOfFile]);
    assert_eq!(
        reporter.diagnostics()[0].message,
        Message::MissingClosingQuote
    );
}

#[test]
fn line_comments() {
    let (source, stream) = lex_clean("//\n// abc\n// //\nx");
    assert_eq!(
        kinds(&stream),
        [LineComment, LineComment, LineComment, Name, EndOfFile]
    );
    assert_eq!(lexemes(&source, &stream), ["//", "// abc", "// //", "x"]);
}

#[test]
fn block_comments_nest() {
    let text = "/**/\n/* abc\n*/\n/*/**/*/\n/*a/*b*/c*/\n/*/*/**/*/*/\n/***/\n/* **** */\n/*/ */\n/*// */";
    let (source, stream) = lex_clean(text);
    assert_eq!(kinds(&stream).len(), 10); // nine comments + eof
    assert!(kinds(&stream)[..9].iter().all(|&k| k == BlockComment));
    assert_eq!(
        lexemes(&source, &stream),
        [
            "/**/",
            "/* abc\n*/",
            "/*/**/*/",
            "/*a/*b*/c*/",
            "/*/*/**/*/*/",
            "/***/",
            "/* **** */",
            "/*/ */",
            "/*// */"
        ]
    );
}

#[test]
fn unterminated_block_comment() {
    let (_, stream, reporter) = lex_source("/* abc");
    assert_eq!(kinds(&stream), [BlockComment, EndOfFile]);

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, Message::UnterminatedBlockComment);
    // reported just past the opening `/*`
    assert_eq!(
        (diagnostics[0].location.line, diagnostics[0].location.column),
        (1, 3)
    );
    assert_eq!(
        diagnostics[0].text,
        "block comment must be closed with `*/`"
    );
}

#[test]
fn unicode_names() {
    let (source, stream) = lex_clean("αβγ δ2 changé");
    assert_eq!(kinds(&stream), [Name, Name, Name, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["αβγ", "δ2", "changé"]);
}

#[test]
fn combining_mark_continues_a_name() {
    let (source, stream) = lex_clean("e\u{301}t");
    assert_eq!(kinds(&stream), [Name, EndOfFile]);
    assert_eq!(lexemes(&source, &stream), ["e\u{301}t"]);
}

#[test]
fn non_identifier_code_point_is_reported() {
    let (_, stream, reporter) = lex_source("x € y");
    assert_eq!(kinds(&stream), [Name, Name, Name, EndOfFile]);

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, Message::UnexpectedCharacter);
    assert_eq!(diagnostics[0].text, "unexpected character `0x20ac`");
    assert_eq!(
        (diagnostics[0].location.line, diagnostics[0].location.column),
        (1, 3)
    );
    // the offending bytes become a short name token and lexing continues
    let tokens = stream.tokens();
    assert_eq!(tokens[1].length, 3);
}

#[test]
fn ascii_control_character_is_reported() {
    let (_, stream, reporter) = lex_source("a \u{7} b");
    assert_eq!(kinds(&stream), [Name, Name, Name, EndOfFile]);
    assert_eq!(
        reporter.diagnostics()[0].text,
        "unexpected character `0x7`"
    );
}

#[test]
fn source_too_large() {
    let source = Source::new("big.ce", " ".repeat(MAX_SOURCE_LENGTH as usize + 1));
    let mut reporter = CollectingReporter::new();
    let stream = lex(&source, &mut reporter);

    // a lone end-of-file token at offset zero
    let tokens = stream.tokens();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0], Token { kind: EndOfFile, offset: 0, length: 0 });

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, Message::SourceInputTooLarge);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(
        (diagnostics[0].location.line, diagnostics[0].location.column),
        (0, 0)
    );
    assert_eq!(
        diagnostics[0].text,
        "source input is too large, limit is 16777215 bytes"
    );
}

#[test]
fn source_at_the_limit_is_lexed() {
    let source = Source::new("big.ce", " ".repeat(MAX_SOURCE_LENGTH as usize));
    let mut reporter = CollectingReporter::new();
    let stream = lex(&source, &mut reporter);
    assert!(!reporter.has_errors());
    assert_eq!(stream.tokens().last().unwrap().offset, MAX_SOURCE_LENGTH);
}

/// Reconstructs the source from token lexemes plus the skipped gaps, and
/// checks that every gap is pure whitespace.
fn assert_token_coverage(source: &Source, stream: &TokenStream) {
    let text = source.text();
    let mut rebuilt = String::new();
    let mut end = 0usize;

    for token in stream.tokens() {
        if token.kind == EndOfFile {
            break;
        }
        let start = token.offset as usize;
        assert!(start >= end, "tokens overlap at offset {start}");
        let gap = &text[end..start];
        assert!(
            gap.bytes().all(|b| b == b' ' || (b'\t'..=b'\r').contains(&b)),
            "gap {gap:?} is not whitespace"
        );
        rebuilt.push_str(gap);
        rebuilt.push_str(token.lexeme(source));
        end = start + token.length as usize;
    }
    rebuilt.push_str(&text[end..]);
    assert_eq!(rebuilt, text);
}

#[test]
fn token_coverage_over_a_program() {
    let text = "fibonacci(var uint32 n) -> uint32\n{\n\tvar uint32 result = 0;\n\
                // comment\n\twhile n-- != 0 { result += 1 000; }\n\treturn result;\n}\n";
    let (source, stream) = lex_clean(text);
    assert_token_coverage(&source, &stream);
}

#[test]
fn offsets_are_strictly_increasing() {
    let (_, stream) = lex_clean("a+b // c\n\"d\" 1.5 <<=");
    let tokens = stream.tokens();
    for pair in tokens.windows(2) {
        if pair[1].kind == EndOfFile {
            assert!(pair[0].offset < pair[1].offset || pair[0].offset == 0);
        } else {
            assert!(pair[0].offset < pair[1].offset);
        }
    }
}

#[test]
fn lexing_twice_is_bitwise_identical() {
    let text = "foo(int32 a) -> int32 { return a ** 2; } /* t */ 0x FF \"s\"";
    let source = Source::new("test.ce", text);

    let mut first_reporter = CollectingReporter::new();
    let first = lex(&source, &mut first_reporter);
    let mut second_reporter = CollectingReporter::new();
    let second = lex(&source, &mut second_reporter);

    assert!(first.raw() == second.raw());
    assert_eq!(first.num_tokens(), second.num_tokens());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    const POOL: &[(&str, TokenKind)] = &[
        ("foo", Name),
        ("bar_1", Name),
        ("while", While),
        ("123", DecIntLiteral),
        ("0x1F", HexIntLiteral),
        ("1.5", FloatLiteral),
        ("\"str\"", StringLiteral),
        ("'c'", CharLiteral),
        ("(", LeftParen),
        (")", RightParen),
        ("+", Plus),
        ("<<=", LeftAngleAngleEquals),
        ("...", Ellipsis),
        ("// note", LineComment),
        ("/* box */", BlockComment),
    ];

    proptest! {
        #[test]
        fn token_soup_round_trips(indices in proptest::collection::vec(0..POOL.len(), 0..40)) {
            // newline-joined so that adjacent numeric literals never merge
            let text = indices
                .iter()
                .map(|&i| POOL[i].0)
                .collect::<Vec<_>>()
                .join("\n");
            let (source, stream) = lex_clean(&text);

            let expected: Vec<TokenKind> =
                indices.iter().map(|&i| POOL[i].1).chain([EndOfFile]).collect();
            prop_assert_eq!(kinds(&stream), expected);

            let expected_lexemes: Vec<&str> = indices.iter().map(|&i| POOL[i].0).collect();
            prop_assert_eq!(lexemes(&source, &stream), expected_lexemes);

            assert_token_coverage(&source, &stream);
        }

        #[test]
        fn double_lex_is_deterministic(indices in proptest::collection::vec(0..POOL.len(), 0..20)) {
            let text = indices
                .iter()
                .map(|&i| POOL[i].0)
                .collect::<Vec<_>>()
                .join(" \n ");
            let source = Source::new("test.ce", text);

            let mut first_reporter = CollectingReporter::new();
            let mut second_reporter = CollectingReporter::new();
            let first = lex(&source, &mut first_reporter);
            let second = lex(&source, &mut second_reporter);
            prop_assert!(first.raw() == second.raw());
        }
    }
}
