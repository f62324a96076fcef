//! Raw-mode terminal access: mode switching, geometry, and stdin bytes.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{MoveTo, Show},
    execute,
    terminal::{self, Clear, ClearType},
};

use crate::input::ByteSource;

/// How long an escape-sequence continuation byte may take to arrive.
pub const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Holds the terminal in raw mode until restored or dropped.
///
/// Restoring clears the screen, shows the cursor and leaves raw mode, and
/// runs at most once whether it happens explicitly, on error return, or
/// while unwinding.
pub struct RawMode {
    active: bool,
}

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        log::debug!("raw mode enabled");
        Ok(Self { active: true })
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        clear_screen()?;
        terminal::disable_raw_mode()?;
        log::debug!("raw mode restored");
        Ok(())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Returns the window size as `(rows, cols)`.
pub fn window_size() -> io::Result<(usize, usize)> {
    let (cols, rows) = terminal::size()?;
    if cols == 0 || rows == 0 {
        return Err(io::Error::other("terminal reported a zero-sized window"));
    }
    Ok((rows as usize, cols as usize))
}

pub fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0), Show)
}

/// Writes one assembled frame with a single write.
pub fn write_frame(frame: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(frame)?;
    stdout.flush()
}

/// Unbuffered stdin reader.
///
/// Reads go straight to the file descriptor so that `poll` sees every byte
/// that has not been consumed yet.
pub struct StdinSource {
    timeout: Duration,
}

impl StdinSource {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new(READ_TIMEOUT)
    }
}

#[cfg(unix)]
impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        use std::os::unix::io::AsRawFd;

        let fd = io::stdin().as_raw_fd();
        let timeout_ms = i32::try_from(self.timeout.as_millis()).unwrap_or(i32::MAX);

        let mut pollfd = libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        };

        // SAFETY: poll with a single fd is safe, we pass valid pointer and count
        let poll_result = unsafe { libc::poll(&mut pollfd, 1, timeout_ms) };
        if poll_result < 0 {
            return Err(io::Error::last_os_error());
        }
        if poll_result == 0 {
            return Ok(None);
        }

        let mut byte = 0u8;
        // SAFETY: reading at most one byte into a valid, owned one-byte buffer
        let nread = unsafe { libc::read(fd, (&mut byte as *mut u8).cast(), 1) };
        match nread {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => Err(io::Error::last_os_error()),
        }
    }
}

#[cfg(not(unix))]
impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        use std::io::Read;

        let mut byte = [0u8; 1];
        match io::stdin().read(&mut byte)? {
            1 => Ok(Some(byte[0])),
            _ => Ok(None),
        }
    }
}
