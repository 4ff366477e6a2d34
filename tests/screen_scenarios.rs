//! End-to-end scenarios driving bytes through the full parser → screen
//! pipeline and checking the resulting JSON projection.

use ansi_screen::{InMemory, Interpreter};
use pretty_assertions::assert_eq;

fn lines_json(terminal: &Interpreter<InMemory>) -> String {
    serde_json::to_string(terminal.sink().lines().as_slice()).unwrap()
}

#[test]
fn plain_lines_roundtrip_to_json() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"hello\nworld");
    assert_eq!(lines_json(&terminal), r#"[[{"data":"hello","style":{}}],[{"data":"world","style":{}}]]"#);
}

#[test]
fn bold_and_colored_spans_project_correctly() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"hello \x1b[1mworld\x1b[m\n\x1b[31mthis is red\x1b[m\n");
    assert_eq!(
        lines_json(&terminal),
        r#"[[{"data":"hello ","style":{}},{"data":"world","style":{"bold":true}}],[{"data":"this is red","style":{"foreground":"red"}}],[]]"#
    );
}

#[test]
fn control_sequence_split_across_chunks_still_applies() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"\x1b[31mthis is red\x1b");
    terminal.parse(b"[0m but this is not");
    let lines = terminal.sink().lines();
    assert_eq!(lines.len(), 1);
    let spans = lines[0].spans();
    assert_eq!(spans[0].data(), "this is red");
    assert_eq!(spans[0].style().foreground.to_string(), "red");
    assert_eq!(spans[1].data(), " but this is not");
    assert!(spans[1].style().foreground.is_default());
}

#[test]
fn cursor_forward_then_column_zero_overwrites_in_place() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"hello\x1b[3Cworld");
    terminal.parse(b"\x1b[Ggoodbye");
    let lines = terminal.sink().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].spans()[0].data(), "goodbye world");
}

#[test]
fn save_and_restore_cursor_overwrites_in_place() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"\x1b[shello   world");
    terminal.parse(b"\x1b[ugoodbye");
    let lines = terminal.sink().lines();
    assert_eq!(lines[0].spans()[0].data(), "goodbye world");
}

#[test]
fn multi_byte_character_split_across_three_chunks() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"hello \xe3");
    assert_eq!(terminal.sink().lines().len(), 1);
    assert_eq!(terminal.sink().lines()[0].spans()[0].data(), "hello ");
    terminal.parse(b"\x81");
    assert_eq!(terminal.sink().lines()[0].spans()[0].data(), "hello ");
    terminal.parse(b"\x93");
    assert_eq!(terminal.sink().lines()[0].spans()[0].data(), "hello こ");
}

#[test]
fn all_invalid_sgr_parameters_emit_only_the_print() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"\x1b[68;69mhello");
    let lines = terminal.sink().lines();
    assert_eq!(lines[0].spans().len(), 1);
    assert_eq!(lines[0].spans()[0].data(), "hello");
    assert!(!lines[0].spans()[0].style().bold);
}

#[test]
fn trailing_empty_sgr_slot_does_not_imply_reset() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"\x1b[1;mhello");
    let lines = terminal.sink().lines();
    assert_eq!(lines[0].spans()[0].data(), "hello");
    assert!(lines[0].spans()[0].style().bold);
}

#[test]
fn bare_csi_m_is_reset() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"\x1b[1mbold\x1b[mnormal");
    let lines = terminal.sink().lines();
    assert_eq!(lines[0].spans().len(), 2);
    assert!(lines[0].spans()[0].style().bold);
    assert!(!lines[0].spans()[1].style().bold);
}

#[test]
fn empty_input_leaves_screen_empty() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"");
    assert!(terminal.sink().lines().is_empty());
}

#[test]
fn chunking_order_independence() {
    let whole: &[u8] = b"hello \x1b[1mworld\x1b[m\n\x1b[38;5;177mindexed\x1b[m";
    let mut whole_terminal = Interpreter::new(InMemory::new());
    whole_terminal.parse(whole);

    let mut chunked_terminal = Interpreter::new(InMemory::new());
    for byte in whole {
        chunked_terminal.parse(std::slice::from_ref(byte));
    }

    assert_eq!(lines_json(&whole_terminal), lines_json(&chunked_terminal));
}

#[test]
fn extended_256_color_indexes_into_rgb8_cube() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"\x1b[38;5;177mcolored");
    let lines = terminal.sink().lines();
    let style = lines[0].spans()[0].style();
    assert_eq!(style.foreground.to_string(), "#CC66FF");
}

#[test]
fn truecolor_background_round_trips_through_display() {
    let mut terminal = Interpreter::new(InMemory::new());
    terminal.parse(b"\x1b[48;2;128;0;0mbackground");
    let lines = terminal.sink().lines();
    let style = lines[0].spans()[0].style();
    assert_eq!(style.background.to_string(), "#800000");
}
