//! Read and write small kernel control files.
//!
//! Control files such as `/proc/sys/kernel/sysrq` hold a decimal integer as
//! plain text. Every operation opens the file, does exactly one read or write,
//! and closes it again; nothing is retried and no handle outlives the call.
//!
//! Failures are never swallowed. A close error is reported just like a read
//! or write error, because the value in question gates a security feature and
//! a write that may not have landed must not look like success.

use crate::error::{PhyslockError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::IntoRawFd;
use std::path::Path;

/// Upper bound on how much of a control file is ever looked at.
///
/// The kernel files this tool targets are a handful of bytes. Anything longer
/// is truncated rather than read without limit.
pub const BUFLEN: usize = 32;

/// Read at most `max_len - 1` bytes of `path` into `buf`.
///
/// `buf` is cleared first, so afterwards it holds exactly the bytes read and
/// nothing past them. Returns the number of bytes read.
pub fn read_bounded_file(path: &Path, buf: &mut Vec<u8>, max_len: usize) -> Result<usize> {
    let file = File::open(path).map_err(|source| PhyslockError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    buf.clear();
    let limit = max_len.saturating_sub(1) as u64;
    let read = (&file).take(limit).read_to_end(buf);

    // Close before looking at the read result so the descriptor never leaks.
    let closed = close(file);

    let nread = read.map_err(|source| PhyslockError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    closed.map_err(|source| PhyslockError::Close {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(nread)
}

/// Replace the contents of `path` with `data`.
///
/// The file is opened write-only with truncate-or-create semantics. Returns the
/// number of bytes written, which is always `data.len()` on success.
pub fn write_file(path: &Path, data: &[u8]) -> Result<usize> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| PhyslockError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let written = file.write_all(data);
    let closed = close(file);

    written.map_err(|source| PhyslockError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    closed.map_err(|source| PhyslockError::Close {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(data.len())
}

/// Read an integer from `path` and check the byte that follows it.
///
/// Leading whitespace and a sign are accepted, then as many digits as are
/// present. The next byte must be `delimiter` or the end of the content;
/// anything else makes the whole file invalid. A file with no digits at all
/// therefore only passes when it is empty or starts with `delimiter`, in which
/// case the value is 0.
pub fn read_int(path: &Path, delimiter: u8) -> Result<i32> {
    let mut buf = Vec::with_capacity(BUFLEN);
    read_bounded_file(path, &mut buf, BUFLEN)?;

    let (value, rest) = parse_int_prefix(&buf);
    let next = rest.first().copied();

    let invalid = || PhyslockError::InvalidContent {
        path: path.to_path_buf(),
        content: String::from_utf8_lossy(&buf).into_owned(),
    };

    match next {
        None => {}
        Some(b) if b == delimiter => {}
        Some(_) => return Err(invalid()),
    }

    i32::try_from(value).map_err(|_| invalid())
}

/// Write `value` to `path` as decimal text followed by a newline.
pub fn write_int(path: &Path, value: i32) -> Result<()> {
    let text = format!("{}\n", value);
    debug_assert!(text.len() <= BUFLEN);
    write_file(path, text.as_bytes())?;
    Ok(())
}

/// Parse the longest numeric prefix of `buf`.
///
/// Returns the value and the unparsed remainder. When no digits are found the
/// value is 0 and the remainder is all of `buf`, whitespace included. Values
/// too large for `i64` saturate.
fn parse_int_prefix(buf: &[u8]) -> (i64, &[u8]) {
    let mut pos = 0;
    while pos < buf.len() && buf[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let mut negative = false;
    if pos < buf.len() && (buf[pos] == b'+' || buf[pos] == b'-') {
        negative = buf[pos] == b'-';
        pos += 1;
    }

    let digits_start = pos;
    let mut value: i64 = 0;
    while pos < buf.len() && buf[pos].is_ascii_digit() {
        let digit = i64::from(buf[pos] - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
        pos += 1;
    }

    if pos == digits_start {
        return (0, buf);
    }

    let value = if negative { -value } else { value };
    (value, &buf[pos..])
}

/// Close a file and surface the OS error that `Drop` would discard.
fn close(file: File) -> io::Result<()> {
    let fd = file.into_raw_fd();
    // SAFETY: `fd` was just released from an owned `File`, so it is open and
    // nothing else will close it.
    if unsafe { libc::close(fd) } == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}
