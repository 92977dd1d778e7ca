use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use console::Term;

/// Line-oriented console used by the interactive flow.
pub trait Prompt {
    fn say(&mut self, line: &str) -> io::Result<()>;
    /// One keypress, echoed.
    fn read_key(&mut self) -> io::Result<char>;
    fn read_line(&mut self) -> io::Result<String>;
    fn clear(&mut self) -> io::Result<()>;
    fn pause(&mut self, duration: Duration);
}

/// The process terminal. Falls back to line reads when stdin is piped.
pub struct Terminal {
    term: Term,
}

impl Terminal {
    pub fn stdout() -> Self {
        let term = Term::stdout();
        if term.is_term() {
            term.set_title("MiFirm");
        }
        Self { term }
    }

    fn read_piped_line() -> io::Result<String> {
        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompt for Terminal {
    fn say(&mut self, line: &str) -> io::Result<()> { self.term.write_line(line) }

    fn read_key(&mut self) -> io::Result<char> {
        if !self.term.is_term() {
            // Blank lines count as a key that never matches a menu entry.
            return Ok(Self::read_piped_line()?.chars().next().unwrap_or('\n'));
        }
        let key = self.term.read_char()?;
        self.term.write_line(&key.to_string())?;
        Ok(key)
    }

    fn read_line(&mut self) -> io::Result<String> {
        if self.term.is_term() {
            self.term.read_line()
        } else {
            Self::read_piped_line()
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        Ok(())
    }

    fn pause(&mut self, duration: Duration) { thread::sleep(duration) }
}
