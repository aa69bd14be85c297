//! Terminal output for a running countdown

use std::io::{self, Write};

use crate::state::Timer;

use super::format::{cancelled_line, completion_line, header_line, status_line};

/// Return to column zero and erase the current line
const REDRAW: &str = "\r\x1b[2K";
/// Move the cursor up one line
const LINE_UP: &str = "\x1b[1A";

pub const KEY_HINT: &str =
    "Type p + Enter to pause/resume, q + Enter to quit (input is typed on the status line)";

/// Writes countdown frames to any `Write` sink (stdout in the binary)
pub struct Display<W: Write> {
    out: W,
    width: usize,
    input_echo: bool,
}

impl<W: Write> Display<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            input_echo: false,
        }
    }

    /// Set when typed input is echoed by the terminal, so every Enter
    /// leaves the cursor one line below the status line
    pub fn with_input_echo(mut self, input_echo: bool) -> Self {
        self.input_echo = input_echo;
        self
    }

    /// Called after a line of input arrived; puts the cursor back on the status line
    pub fn input_received(&mut self) -> io::Result<()> {
        if self.input_echo {
            write!(self.out, "{}", LINE_UP)?;
        }
        Ok(())
    }

    /// Print the header and key hint once, before the first frame
    pub fn start(&mut self, timer: &Timer) -> io::Result<()> {
        writeln!(self.out, "{}", header_line(timer))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", KEY_HINT)?;
        self.out.flush()
    }

    /// Redraw the status line in place
    pub fn draw(&mut self, timer: &Timer) -> io::Result<()> {
        write!(self.out, "{}{}", REDRAW, status_line(timer, self.width))?;
        self.out.flush()
    }

    pub fn finish(&mut self, timer: &Timer) -> io::Result<()> {
        writeln!(self.out, "{}{}", REDRAW, completion_line(timer))?;
        self.out.flush()
    }

    pub fn cancel(&mut self, timer: &Timer) -> io::Result<()> {
        writeln!(self.out, "{}{}", REDRAW, cancelled_line(timer))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Mode;

    fn output(display: Display<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn start_prints_header_and_hint() {
        let timer = Timer::new(Mode::Work, 45 * 60, "45").unwrap();
        let mut display = Display::new(Vec::new(), 20);
        display.start(&timer).unwrap();

        assert_eq!(
            output(display),
            format!("🍅 Pomodoro Timer: 45.0 minutes\n\n{}\n", KEY_HINT)
        );
    }

    #[test]
    fn draw_redraws_in_place() {
        let timer = Timer::new(Mode::Rest, 60, "1m").unwrap();
        let mut display = Display::new(Vec::new(), 2);
        display.draw(&timer).unwrap();
        display.draw(&timer).unwrap();

        let frame = "\r\x1b[2K⏰ 01:00 ░░ 0.0%";
        assert_eq!(output(display), format!("{frame}{frame}"));
    }

    #[test]
    fn finish_ends_the_line() {
        let timer = Timer::new(Mode::Rest, 0, "0").unwrap();
        let mut display = Display::new(Vec::new(), 2);
        display.finish(&timer).unwrap();

        assert_eq!(output(display), "\r\x1b[2K🎉 Break completed!\n");
    }

    #[test]
    fn echoed_input_moves_back_to_the_status_line() {
        let timer = Timer::new(Mode::Work, 60, "1m").unwrap();
        let mut display = Display::new(Vec::new(), 2).with_input_echo(true);
        display.input_received().unwrap();
        display.draw(&timer).unwrap();

        assert_eq!(output(display), "\x1b[1A\r\x1b[2K⏰ 01:00 ░░ 0.0%");
    }

    #[test]
    fn piped_input_leaves_the_cursor_alone() {
        let mut display = Display::new(Vec::new(), 2);
        display.input_received().unwrap();

        assert_eq!(output(display), "");
    }
}
