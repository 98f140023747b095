use std::io::Cursor;

use minic::{
    console::Console,
    interpreter::Interpreter,
    session::{FAREWELL, SessionConfig, run_script, run_session},
};
use pretty_assertions::assert_eq;

fn session(input: &str) -> String {
    session_with(input, &SessionConfig::default())
}

fn session_with(input: &str, config: &SessionConfig) -> String {
    let mut console = Console::new(Cursor::new(input.as_bytes()), Vec::new(), false);
    let mut interpreter = Interpreter::new();

    run_session(&mut console, &mut interpreter, config).unwrap();

    let (_, written) = console.into_inner();
    String::from_utf8(written).unwrap()
}

#[test]
fn variables_persist_until_exit() {
    let written = session("int x = 3;\nx = x * 2;\nprintf(\"x=\" + x);\nexit\nprintf(\"never\");\n");
    assert_eq!(written, format!("> > > x=6\n> {FAREWELL}\n"));
}

#[test]
fn end_of_input_ends_the_session() {
    assert_eq!(session("printf(\"a\");"), "> a\n> ");
    assert_eq!(session(""), "> ");
}

#[test]
fn exit_must_match_exactly() {
    let written = session("exit now\nexit\n");
    assert_eq!(written,
               format!("> Error on line 1: Expected '=', found now.\n> {FAREWELL}\n"));
}

#[test]
fn scan_prompts_read_from_the_same_input() {
    let written = session("scanf(\"%d\", n);\n5\nscanf(\"%s\", s);\nhi there\nprintf(s + \" \" + n);\n");
    assert_eq!(written, "> Enter an integer: > Enter a string: > hi there 5\n> ");
}

#[test]
fn invalid_integer_reply_is_reported() {
    let written = session("scanf(\"%d\", n);\nabc\nprintf(n);\n");
    assert_eq!(written,
               "> Enter an integer: Error on line 1: Invalid input for %d: \"abc\" is not a valid integer.\n> null\n> ");
}

#[test]
fn lexical_errors_do_not_end_the_session() {
    let written = session("printf(\"oops);\nprintf(\"fine\");\nexit\n");
    assert_eq!(written,
               format!("> Error on line 1: Unclosed string literal starting at position 7.\n> fine\n> {FAREWELL}\n"));
}

#[test]
fn line_endings_are_stripped() {
    assert_eq!(session("printf(\"x\");\r\nexit\r\n"), format!("> x\n> {FAREWELL}\n"));
}

#[test]
fn custom_prompt() {
    let config = SessionConfig { prompt: "minic$ ".to_string() };
    assert_eq!(session_with("exit\n", &config), format!("minic$ {FAREWELL}\n"));
}

#[test]
fn scripts_run_without_prompts() {
    let mut console = Console::new(Cursor::new("9\n".as_bytes()), Vec::new(), false);
    let mut interpreter = Interpreter::new();

    run_script(&mut console,
               &mut interpreter,
               "int a = 4;\nscanf(\"%d\", b);\nprintf(a + \",\" + b);\nexit\nprintf(\"no\");").unwrap();

    let (_, written) = console.into_inner();
    assert_eq!(String::from_utf8(written).unwrap(),
               format!("Enter an integer: 4,9\n{FAREWELL}\n"));
}
