use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;

use bstr::ByteSlice;
use flowpager::input::{KeySource, ModeControl, TerminalMode};
use flowpager::{Application, FileSession, PagerConfig, PagerError, SessionEnd};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Mode backend that records transitions instead of touching a TTY.
#[derive(Debug, Clone, Default)]
struct RecordingModes {
    calls: Rc<RefCell<Vec<TerminalMode>>>,
    refuse_raw: bool,
}

impl RecordingModes {
    fn current(&self) -> TerminalMode {
        self.calls
            .borrow()
            .last()
            .copied()
            .unwrap_or(TerminalMode::Cooked)
    }

    fn transitions(&self) -> Vec<TerminalMode> {
        self.calls.borrow().clone()
    }
}

impl ModeControl for RecordingModes {
    fn enter_raw(&mut self) -> io::Result<()> {
        if self.refuse_raw {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "not a terminal"));
        }
        self.calls.borrow_mut().push(TerminalMode::Raw);
        Ok(())
    }

    fn leave_raw(&mut self) -> io::Result<()> {
        self.calls.borrow_mut().push(TerminalMode::Cooked);
        Ok(())
    }
}

/// What the scripted key source does on each call.
enum Step {
    Key(char),
    Fail,
    Panic,
}

struct ScriptedKeys {
    steps: VecDeque<Step>,
    modes: RecordingModes,
}

impl ScriptedKeys {
    fn new(keys: &str, modes: &RecordingModes) -> Self {
        Self::from_steps(keys.chars().map(Step::Key).collect(), modes)
    }

    fn from_steps(steps: Vec<Step>, modes: &RecordingModes) -> Self {
        Self {
            steps: steps.into(),
            modes: modes.clone(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> flowpager::Result<Option<KeyEvent>> {
        // keys are only ever read in raw mode
        assert_eq!(self.modes.current(), TerminalMode::Raw);

        match self.steps.pop_front() {
            Some(Step::Key(c)) => Ok(Some(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))),
            Some(Step::Fail) => Err(PagerError::terminal(
                "Failed to read key",
                io::Error::new(io::ErrorKind::Other, "tty vanished"),
            )),
            Some(Step::Panic) => panic!("key source exploded"),
            None => Ok(None),
        }
    }
}

/// Reader that serves its bytes and then fails instead of reporting EOF.
struct FailingReader(Cursor<Vec<u8>>);

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.0.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::Other, "bad sector")),
            n => Ok(n),
        }
    }
}

fn text_session(text: &str, config: &PagerConfig) -> FileSession<Cursor<Vec<u8>>> {
    FileSession::from_reader(Cursor::new(text.as_bytes().to_vec()), config.buffer_capacity())
}

fn numbered_lines(count: usize) -> String {
    (1..=count).map(|n| format!("line {n}\n")).collect()
}

#[test]
fn quitting_at_once_renders_one_page_and_restores() {
    let config = PagerConfig::default();
    let modes = RecordingModes::default();
    let keys = ScriptedKeys::new("q", &modes);
    let mut app =
        Application::new(text_session(&numbered_lines(50), &config), keys, Vec::new(), config)
            .unwrap();

    assert_eq!(app.run_in_raw_mode(modes.clone()).unwrap(), SessionEnd::Quit);
    assert_eq!(app.pages_rendered(), 1);
    assert_eq!(
        modes.transitions(),
        vec![TerminalMode::Raw, TerminalMode::Cooked]
    );

    let (_, _, out) = app.into_parts();
    assert_eq!(out.as_bstr(), numbered_lines(20).as_str());
}

#[test]
fn paging_through_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(numbered_lines(45).as_bytes()).unwrap();
    file.flush().unwrap();

    let config = PagerConfig::default();
    let modes = RecordingModes::default();
    let session = FileSession::open(file.path(), config.buffer_capacity()).unwrap();
    let keys = ScriptedKeys::new("f?fq", &modes);
    let mut app = Application::new(session, keys, Vec::new(), config).unwrap();

    assert_eq!(app.run_in_raw_mode(modes.clone()).unwrap(), SessionEnd::Quit);
    assert_eq!(app.pages_rendered(), 3);
    assert_eq!(modes.current(), TerminalMode::Cooked);

    let (_, _, out) = app.into_parts();
    let expected = format!("{}=== EOF ===\n", numbered_lines(45));
    assert_eq!(out.as_bstr(), expected.as_str());
}

#[test]
fn closed_input_ends_the_loop_and_restores() {
    let config = PagerConfig::default();
    let modes = RecordingModes::default();
    let keys = ScriptedKeys::new("ff", &modes);
    let mut app = Application::new(text_session("short\n", &config), keys, Vec::new(), config)
        .unwrap();

    assert_eq!(
        app.run_in_raw_mode(modes.clone()).unwrap(),
        SessionEnd::InputClosed
    );
    assert_eq!(app.pages_rendered(), 3);
    assert_eq!(modes.current(), TerminalMode::Cooked);
}

#[test]
fn read_failure_ends_the_loop_and_restores() {
    let config = PagerConfig::default().with_page_size(2);
    let modes = RecordingModes::default();
    let reader = FailingReader(Cursor::new(b"one\ntwo\nthree".to_vec()));
    let session = FileSession::from_reader(reader, config.buffer_capacity());
    let keys = ScriptedKeys::new("fffq", &modes);
    let mut app = Application::new(session, keys, Vec::new(), config).unwrap();

    assert_eq!(
        app.run_in_raw_mode(modes.clone()).unwrap(),
        SessionEnd::ReadFailed
    );
    assert_eq!(app.pages_rendered(), 2);
    assert_eq!(modes.current(), TerminalMode::Cooked);

    let (_, keys, out) = app.into_parts();
    assert_eq!(out.as_bstr(), "one\ntwo\n(error reading file)\n");
    // the loop stopped without reading the remaining keys
    assert_eq!(keys.steps.len(), 3);
}

#[test]
fn key_errors_propagate_after_restoring() {
    let config = PagerConfig::default();
    let modes = RecordingModes::default();
    let keys = ScriptedKeys::from_steps(vec![Step::Key('x'), Step::Fail], &modes);
    let mut app = Application::new(text_session("text", &config), keys, Vec::new(), config)
        .unwrap();

    let err = app.run_in_raw_mode(modes.clone()).unwrap_err();
    assert!(matches!(err, PagerError::Terminal { .. }));
    assert_eq!(
        modes.transitions(),
        vec![TerminalMode::Raw, TerminalMode::Cooked]
    );
}

#[test]
fn panics_unwind_through_the_guard() {
    let config = PagerConfig::default();
    let modes = RecordingModes::default();
    let keys = ScriptedKeys::from_steps(vec![Step::Panic], &modes);
    let mut app = Application::new(text_session("text", &config), keys, Vec::new(), config)
        .unwrap();

    let probe = modes.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _ = app.run_in_raw_mode(probe);
    }));

    assert!(result.is_err());
    assert_eq!(modes.current(), TerminalMode::Cooked);
}

#[test]
fn refused_raw_mode_renders_nothing() {
    let config = PagerConfig::default();
    let modes = RecordingModes {
        refuse_raw: true,
        ..Default::default()
    };
    let keys = ScriptedKeys::new("q", &modes);
    let mut app = Application::new(text_session("text", &config), keys, Vec::new(), config)
        .unwrap();

    let err = app.run_in_raw_mode(modes.clone()).unwrap_err();
    assert!(matches!(err, PagerError::Terminal { .. }));
    assert_eq!(app.pages_rendered(), 0);
    assert!(modes.transitions().is_empty());
}
