use crate::options::ScannerOptions;
use crate::scanner_impl::{ScannerState, tokenize_bytes};
use crate::token::{COMMENT_SENTINEL, EOL_SENTINEL, Token, TokenKind};

const EOL: &str = EOL_SENTINEL;
const COMMENT: &str = COMMENT_SENTINEL;

fn scan(source: &str) -> Vec<Token> {
    tokenize_bytes(source.as_bytes(), &ScannerOptions::default()).expect("scan ok")
}

fn texts(source: &str) -> Vec<String> {
    scan(source)
        .iter()
        .map(|token| token.text().into_owned())
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_scan_empty() {
    assert!(scan("").is_empty());
}

#[test]
fn test_scan_blanks_only() {
    assert!(scan(" \t  \t").is_empty());
}

#[test]
fn test_scan_words_and_line_end() {
    assert_eq!(texts("a b\n"), vec!["a", "b", EOL]);
}

#[test]
fn test_scan_newline_per_line() {
    assert_eq!(texts("\n\n"), vec![EOL, EOL]);
    assert_eq!(
        kinds("a\n"),
        vec![TokenKind::Word, TokenKind::EndOfLine]
    );
}

#[test]
fn test_scan_word_alphabet() {
    assert_eq!(
        texts("allow user_t.exec-file 9lives\n"),
        vec!["allow", "user_t.exec-file", "9lives", EOL]
    );
}

#[test]
fn test_scan_word_absorbs_dollar() {
    assert_eq!(texts("prefix$1_t\n"), vec!["prefix$1_t", EOL]);
}

#[test]
fn test_scan_word_stops_at_other_bytes() {
    assert_eq!(
        texts("type(foo);"),
        vec!["type", "(", "foo", ")", ";"]
    );
}

#[test]
fn test_scan_word_cannot_start_with_underscore() {
    assert_eq!(texts("_a"), vec!["_", "a"]);
}

#[test]
fn test_scan_quoted_string() {
    assert_eq!(
        texts("\"hello world\"\n"),
        vec!["\"", "hello world", "\"", EOL]
    );
    assert_eq!(
        kinds("\"x\""),
        vec![TokenKind::Quote, TokenKind::QuotedText, TokenKind::Quote]
    );
}

#[test]
fn test_scan_quoted_string_empty() {
    assert_eq!(texts("\"\""), vec!["\"", "", "\""]);
}

#[test]
fn test_scan_quoted_string_keeps_backslashes_and_newlines() {
    assert_eq!(
        texts("\"a\\nb\nc\" d"),
        vec!["\"", "a\\nb\nc", "\"", "d"]
    );
}

#[test]
fn test_scan_quoted_string_unterminated() {
    assert_eq!(texts("\"open"), vec!["\"", "open", "\""]);
}

#[test]
fn test_scan_quoted_string_followed_directly_by_word() {
    assert_eq!(texts("\"a\"b"), vec!["\"", "a", "\"", "b"]);
}

#[test]
fn test_scan_comment() {
    assert_eq!(
        texts("# a comment\n"),
        vec![COMMENT, "# a comment", EOL]
    );
    assert_eq!(
        kinds("#x"),
        vec![TokenKind::CommentMarker, TokenKind::CommentText]
    );
}

#[test]
fn test_scan_comment_after_code() {
    assert_eq!(
        texts("allow x; # trailing \"quote\" && stuff\nnext\n"),
        vec![
            "allow",
            "x",
            ";",
            COMMENT,
            "# trailing \"quote\" && stuff",
            EOL,
            "next",
            EOL
        ]
    );
}

#[test]
fn test_scan_comment_at_end_of_input() {
    assert_eq!(texts("#"), vec![COMMENT, "#"]);
}

#[test]
fn test_scan_path() {
    assert_eq!(
        texts("/usr/bin/foo -- gen_context\n"),
        vec!["/usr/bin/foo", "-", "-", "gen_context", EOL]
    );
}

#[test]
fn test_scan_path_escaped_blank() {
    assert_eq!(
        texts("/opt/my\\ app\\\tdir next"),
        vec!["/opt/my\\ app\\\tdir", "next"]
    );
}

#[test]
fn test_scan_path_every_backslash_escapes_next_byte() {
    assert_eq!(texts("/a\\\\ b"), vec!["/a\\\\ b"]);
    assert_eq!(texts("/a\\\\\\ b c"), vec!["/a\\\\\\ b", "c"]);
}

#[test]
fn test_scan_path_ends_after_escaped_non_blank() {
    assert_eq!(texts("/a\\x b"), vec!["/a\\x", "b"]);
}

#[test]
fn test_scan_path_absorbs_line_feed() {
    // Only blanks end a path; line feeds are part of the run.
    assert_eq!(texts("/a\nb c"), vec!["/a\nb", "c"]);
}

#[test]
fn test_scan_path_trailing_backslash() {
    assert_eq!(texts("/a\\"), vec!["/a\\"]);
}

#[test]
fn test_scan_doubled_operators() {
    assert_eq!(texts("a&&b\n"), vec!["a", "&&", "b", EOL]);
    assert_eq!(
        texts("|| == << >>"),
        vec!["||", "==", "<<", ">>"]
    );
}

#[test]
fn test_scan_single_operator_keeps_lookahead() {
    assert_eq!(texts("a&b"), vec!["a", "&", "b"]);
    assert_eq!(texts("=\"x\""), vec!["=", "\"", "x", "\""]);
    assert_eq!(texts("<>"), vec!["<", ">"]);
    assert_eq!(texts("|\n"), vec!["|", EOL]);
}

#[test]
fn test_scan_tripled_operator() {
    assert_eq!(texts("&&&"), vec!["&&", "&"]);
}

#[test]
fn test_scan_operator_at_end_of_input() {
    assert_eq!(texts("x ="), vec!["x", "="]);
}

#[test]
fn test_scan_not_equals() {
    assert_eq!(texts("x!=y\n"), vec!["x", "!=", "y", EOL]);
}

#[test]
fn test_scan_exclamation_alone() {
    assert_eq!(texts("!x"), vec!["!", "x"]);
    assert_eq!(texts("!!"), vec!["!", "!"]);
    assert_eq!(texts("!"), vec!["!"]);
}

#[test]
fn test_scan_variable_references() {
    assert_eq!(
        texts("$1 $* $foo\n"),
        vec!["$1", "$*", "$foo", EOL]
    );
    assert_eq!(
        kinds("$1 $*"),
        vec![TokenKind::Variable, TokenKind::Variable]
    );
}

#[test]
fn test_scan_variable_reference_continues_with_word_alphabet() {
    assert_eq!(texts("$1_t.x-y$2"), vec!["$1_t.x-y$2"]);
    assert_eq!(texts("$*abc"), vec!["$*abc"]);
}

#[test]
fn test_scan_lone_dollar_keeps_lookahead() {
    assert_eq!(texts("$ x"), vec!["$", "x"]);
    assert_eq!(texts("$("), vec!["$", "("]);
    assert_eq!(texts("$\n"), vec!["$", EOL]);
    assert_eq!(texts("$"), vec!["$"]);
    assert_eq!(kinds("$"), vec![TokenKind::Symbol]);
}

#[test]
fn test_scan_named_variables_disabled() {
    let options = ScannerOptions::default().with_named_variables(false);
    let tokens = tokenize_bytes(b"$foo $2", &options).expect("scan ok");
    let texts: Vec<_> = tokens.iter().map(|t| t.text().into_owned()).collect();
    assert_eq!(texts, vec!["$", "foo", "$2"]);
}

#[test]
fn test_scan_other_bytes_are_single_tokens() {
    assert_eq!(
        texts("{ } ( ) ; , : ~ *"),
        vec!["{", "}", "(", ")", ";", ",", ":", "~", "*"]
    );
    assert_eq!(texts("a\r\n"), vec!["a", "\r", EOL]);
}

#[test]
fn test_scan_non_ascii_bytes_are_single_tokens() {
    let tokens = tokenize_bytes(&[b'a', 0xC3, 0xA9], &ScannerOptions::default())
        .expect("scan ok");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], "a");
    assert_eq!(tokens[1].as_bytes(), &[0xC3]);
    assert_eq!(tokens[2].as_bytes(), &[0xA9]);
    assert_eq!(tokens[1].kind, TokenKind::Symbol);
}

#[test]
fn test_scan_records_offsets() {
    let tokens = scan("ab  \"c\" #d\n");
    let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
    // ab, ", c, ", COMMENT, #d, EOL
    assert_eq!(offsets, vec![0, 4, 5, 6, 8, 8, 10]);
}

#[test]
fn test_sentinels_cannot_be_produced_from_source() {
    let tokens = scan("<<|EOL|>> <<|COMMENT|>>");
    assert!(tokens.iter().all(|t| !t.is_sentinel()));
    assert!(tokens.iter().all(|t| t != &EOL && t != &COMMENT));
}

#[test]
fn test_scan_policy_statement() {
    let source = "\
# Domain for the daemon
type mydaemon_t;
allow mydaemon_t self:process { fork signal };
ifdef(`distro_redhat',`
    files_read_etc_files($1)
')
/usr/sbin/mydaemon\t--\tgen_context(system_u:object_r:mydaemon_exec_t,s0)
";
    assert_eq!(
        texts(source),
        vec![
            COMMENT,
            "# Domain for the daemon",
            EOL,
            "type",
            "mydaemon_t",
            ";",
            EOL,
            "allow",
            "mydaemon_t",
            "self",
            ":",
            "process",
            "{",
            "fork",
            "signal",
            "}",
            ";",
            EOL,
            "ifdef",
            "(",
            "`",
            "distro_redhat",
            "'",
            ",",
            "`",
            EOL,
            "files_read_etc_files",
            "(",
            "$1",
            ")",
            EOL,
            "'",
            ")",
            EOL,
            "/usr/sbin/mydaemon",
            "-",
            "-",
            "gen_context",
            "(",
            "system_u",
            ":",
            "object_r",
            ":",
            "mydaemon_exec_t",
            ",",
            "s0",
            ")",
            EOL,
        ]
    );
}

#[test]
fn test_scan_step_by_step() {
    let mut scanner = ScannerState::new(b"  \"q\" x", ScannerOptions::default());
    assert_eq!(scanner.scan().expect("scan ok"), 3);
    assert_eq!(scanner.scan().expect("scan ok"), 1);
    assert!(scanner.is_at_end());
    assert_eq!(scanner.scan().expect("scan ok"), 0);
    assert_eq!(scanner.tokens().len(), 4);
}

#[test]
fn test_scan_trailing_blanks_emit_nothing() {
    let mut scanner = ScannerState::new(b"x  ", ScannerOptions::default());
    assert_eq!(scanner.scan().expect("scan ok"), 1);
    assert!(!scanner.is_at_end());
    assert_eq!(scanner.scan().expect("scan ok"), 0);
    assert!(scanner.is_at_end());
}

#[test]
fn test_token_serializes_as_text() {
    let tokens = scan("a\n");
    let json = serde_json::to_value(&tokens[1]).expect("serialize");
    assert_eq!(json["text"], EOL);
    assert_eq!(json["kind"], "EndOfLine");
}
