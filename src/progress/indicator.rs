//! Waiting animation and the sinks that display it.

use std::io::{self, Write};

/// Animation frames, in display order.
pub const FRAMES: [&str; 3] = [".  ", ".. ", "..."];

/// Cycles through [`FRAMES`], wrapping after the last one.
#[derive(Debug, Clone, Default)]
pub struct LoadingFrames {
    index: usize,
}

impl LoadingFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current frame and advance.
    pub fn next_frame(&mut self) -> &'static str {
        let frame = FRAMES[self.index];
        self.index = (self.index + 1) % FRAMES.len();
        frame
    }
}

impl Iterator for LoadingFrames {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_frame())
    }
}

/// Receives animation frames while a fetch is pending.
pub trait ProgressReporter: Send {
    /// Show one frame.
    fn frame(&mut self, frame: &str);

    /// Called once when waiting ends, whatever the outcome.
    fn finish(&mut self) {}
}

/// Records frames in memory.
impl ProgressReporter for Vec<String> {
    fn frame(&mut self, frame: &str) {
        self.push(frame.to_string());
    }
}

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn frame(&mut self, _frame: &str) {}
}

/// Writes `\r<label><frame>` so each frame overwrites the previous one.
pub struct TerminalProgress<W: Write + Send> {
    out: W,
    label: String,
    drawn: bool,
}

impl TerminalProgress<io::Stdout> {
    /// Terminal progress on standard output.
    pub fn stdout(label: impl Into<String>) -> Self {
        Self::new(io::stdout(), label)
    }
}

impl<W: Write + Send> TerminalProgress<W> {
    pub fn new(out: W, label: impl Into<String>) -> Self {
        Self {
            out,
            label: label.into(),
            drawn: false,
        }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        write!(self.out, "\r{}{}", self.label, frame)?;
        self.out.flush()
    }
}

impl<W: Write + Send> ProgressReporter for TerminalProgress<W> {
    fn frame(&mut self, frame: &str) {
        // A broken terminal must not fail the fetch.
        if let Err(e) = self.write_frame(frame) {
            tracing::debug!(error = %e, "Failed to draw progress frame");
            return;
        }
        self.drawn = true;
    }

    fn finish(&mut self) {
        if !self.drawn {
            return;
        }
        if let Err(e) = writeln!(self.out).and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, "Failed to end progress line");
        }
        self.drawn = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_wrap_after_third() {
        let frames: Vec<&str> = LoadingFrames::new().take(7).collect();
        assert_eq!(frames, vec![".  ", ".. ", "...", ".  ", ".. ", "...", ".  "]);
    }

    #[test]
    fn test_terminal_overwrites_line() {
        let mut progress = TerminalProgress::new(Vec::new(), "waiting for response");
        progress.frame(".  ");
        progress.frame(".. ");
        progress.finish();

        let out = String::from_utf8(progress.into_inner()).unwrap();
        assert_eq!(out, "\rwaiting for response.  \rwaiting for response.. \n");
    }

    #[test]
    fn test_finish_without_frames_writes_nothing() {
        let mut progress = TerminalProgress::new(Vec::new(), "waiting");
        progress.finish();
        assert!(progress.into_inner().is_empty());
    }

    #[test]
    fn test_vec_records_frames() {
        let mut recorded: Vec<String> = Vec::new();
        recorded.frame("...");
        assert_eq!(recorded, vec!["...".to_string()]);
    }
}
