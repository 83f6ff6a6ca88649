//! Input sources for the `Input` instruction.

use std::collections::VecDeque;
use std::io::{self, BufRead, Read, Write};

/// Something the machine can pull one unit of input from.
///
/// `Ok(None)` means no input is available; the machine turns that into an
/// `InputExhausted` error. `Err` is a failing source and surfaces as `Io`.
pub trait InputSource {
    fn read_unit(&mut self) -> io::Result<Option<u8>>;
}

/// Line-oriented input: each read takes a whole line and keeps only its first
/// byte. An empty line counts as no input.
pub struct LineInput<R, W> {
    reader: R,
    prompt: Option<(W, String)>,
}

impl<R: BufRead> LineInput<R, std::io::Sink> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prompt: None,
        }
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Print `prompt` to `writer` before every line is read.
    pub fn with_prompt(reader: R, writer: W, prompt: impl Into<String>) -> Self {
        Self {
            reader,
            prompt: Some((writer, prompt.into())),
        }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_unit(&mut self) -> io::Result<Option<u8>> {
        if let Some((writer, prompt)) = self.prompt.as_mut() {
            writer.write_all(prompt.as_bytes())?;
            writer.flush()?;
        }

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        match line.first() {
            Some(b'\n') | Some(b'\r') | None => Ok(None),
            Some(&byte) => Ok(Some(byte)),
        }
    }
}

/// Stream input: every byte of the underlying reader is one unit.
pub struct ByteInput<R> {
    bytes: std::io::Bytes<R>,
}

impl<R: Read> ByteInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
        }
    }
}

impl<R: Read> InputSource for ByteInput<R> {
    fn read_unit(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}

impl InputSource for &[u8] {
    fn read_unit(&mut self) -> io::Result<Option<u8>> {
        let Some((&first, rest)) = self.split_first() else {
            return Ok(None);
        };
        *self = rest;
        Ok(Some(first))
    }
}

impl InputSource for VecDeque<u8> {
    fn read_unit(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_unit(&mut self) -> io::Result<Option<u8>> {
        (**self).read_unit()
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn read_unit(&mut self) -> io::Result<Option<u8>> {
        (**self).read_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A reader or writer whose every call fails.
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }
    }

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("terminal gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("terminal gone"))
        }
    }

    #[test]
    fn line_input_keeps_first_byte_only() {
        let mut input = LineInput::new(Cursor::new("abc\nxyz\n"));
        assert_eq!(input.read_unit().unwrap(), Some(b'a'));
        assert_eq!(input.read_unit().unwrap(), Some(b'x'));
        assert_eq!(input.read_unit().unwrap(), None);
    }

    #[test]
    fn line_input_last_line_without_newline() {
        let mut input = LineInput::new(Cursor::new("q"));
        assert_eq!(input.read_unit().unwrap(), Some(b'q'));
        assert_eq!(input.read_unit().unwrap(), None);
    }

    #[test]
    fn line_input_empty_line_is_exhausted() {
        let mut input = LineInput::new(Cursor::new("\nabc\n"));
        assert_eq!(input.read_unit().unwrap(), None);
    }

    #[test]
    fn line_input_writes_prompt() {
        let mut shown = Vec::new();
        {
            let mut input = LineInput::with_prompt(Cursor::new("z\n"), &mut shown, "> ");
            assert_eq!(input.read_unit().unwrap(), Some(b'z'));
        }
        assert_eq!(shown, b"> ");
    }

    #[test]
    fn byte_input_consumes_every_byte() {
        let mut input = ByteInput::new(Cursor::new("ab\n"));
        assert_eq!(input.read_unit().unwrap(), Some(b'a'));
        assert_eq!(input.read_unit().unwrap(), Some(b'b'));
        assert_eq!(input.read_unit().unwrap(), Some(b'\n'));
        assert_eq!(input.read_unit().unwrap(), None);
    }

    #[test]
    fn slice_input() {
        let mut input: &[u8] = b"hi";
        assert_eq!(input.read_unit().unwrap(), Some(b'h'));
        assert_eq!(input.read_unit().unwrap(), Some(b'i'));
        assert_eq!(input.read_unit().unwrap(), None);
    }

    #[test]
    fn deque_input() {
        let mut input: VecDeque<u8> = VecDeque::from(vec![1, 2]);
        assert_eq!(input.read_unit().unwrap(), Some(1));
        assert_eq!(input.read_unit().unwrap(), Some(2));
        assert_eq!(input.read_unit().unwrap(), None);
    }

    #[test]
    fn line_input_read_error_is_not_end_of_input() {
        let mut input = LineInput::new(io::BufReader::new(Broken));
        let err = input.read_unit().unwrap_err();
        assert_eq!(err.to_string(), "disk gone");
    }

    #[test]
    fn byte_input_read_error_is_not_end_of_input() {
        let mut input = ByteInput::new(Broken);
        let err = input.read_unit().unwrap_err();
        assert_eq!(err.to_string(), "disk gone");
    }

    #[test]
    fn line_input_prompt_error_is_reported() {
        let mut input = LineInput::with_prompt(Cursor::new("z\n"), Broken, "> ");
        let err = input.read_unit().unwrap_err();
        assert_eq!(err.to_string(), "terminal gone");
    }
}
