use std::io::{Read, Seek, SeekFrom};

/// A location within the input stream.
///
/// The lexer updates a `Position` on every character it reads and rewinds it
/// symmetrically on every character it pushes back. Lines are counted from
/// zero internally; user-facing messages render them one-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Characters read from the stream so far.
    pub total_chars_read:     usize,
    /// Characters read on the current line.
    pub chars_on_current_line: usize,
    /// Complete lines read so far (zero-based).
    pub lines_read:           usize,
}

/// Byte-level adapter over a seekable input stream.
///
/// The adapter takes its stream by move and exposes exactly two operations:
/// reading the next byte and rewinding to the start. Once the stream is
/// exhausted, every further read keeps reporting end of input. Read failures
/// are treated as end of input as well; the adapter has no error channel of
/// its own.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use keel::interpreter::input::InputAdapter;
///
/// let mut adapter = InputAdapter::new(Cursor::new(b"ab".to_vec()));
/// assert_eq!(adapter.get_character(), Some(b'a'));
/// assert_eq!(adapter.get_character(), Some(b'b'));
/// assert_eq!(adapter.get_character(), None);
/// assert_eq!(adapter.get_character(), None);
///
/// adapter.rewind().unwrap();
/// assert_eq!(adapter.get_character(), Some(b'a'));
/// ```
#[derive(Debug)]
pub struct InputAdapter<R> {
    reader: R,
}

impl<R: Read + Seek> InputAdapter<R> {
    /// Creates an adapter owning the given stream.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the next byte of the stream, or `None` at end of input.
    pub fn get_character(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(1) => return Some(byte[0]),
                Ok(_) => return None,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {},
                Err(_) => return None,
            }
        }
    }

    /// Seeks the stream back to its beginning.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the stream refuses to seek.
    pub fn rewind(&mut self) -> std::io::Result<()> {
        self.reader.seek(SeekFrom::Start(0)).map(|_| ())
    }
}
