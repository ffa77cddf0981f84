use std::fmt::Write as _;
use std::io::{BufRead, Write};

use config::Config;
use fixed_radix::{decode, md5, Digest, Format};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Hash the input with MD5, then encode
    Hash,
    /// Input is already a hexidecimal digest
    Hex,
    /// Input is an encoded identifier, print its digest as hex
    Decode,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub mode: Mode,
    pub formats: Vec<Format>,
    pub trim: bool,
}

impl Job {
    pub fn new(config: &Config, decode: bool) -> Job {
        let mode = match (decode, config.input.hex) {
            (true, _) => Mode::Decode,
            (false, true) => Mode::Hex,
            (false, false) => Mode::Hash,
        };

        let formats = match config.encoding.all && mode != Mode::Decode {
            true => Format::ALL.to_vec(),
            false => vec![config.encoding.format],
        };

        Job {
            mode,
            formats,
            trim: config.input.trim,
        }
    }

    /// Appends the output lines for one input to `buf`
    ///
    /// Hashing works on the raw bytes, every other mode needs UTF-8.
    pub fn process(&self, input: &[u8], buf: &mut String) -> anyhow::Result<()> {
        let input = match self.trim {
            true => trim_ascii(input),
            false => input,
        };

        let digest = match self.mode {
            Mode::Hash => md5::md5(input),
            Mode::Hex => std::str::from_utf8(input)?.parse::<Digest>()?,
            Mode::Decode => {
                let digest = decode(std::str::from_utf8(input)?, self.formats[0])?;
                let _ = writeln!(buf, "{digest}");
                return Ok(());
            }
        };

        match self.formats[..] {
            [format] => {
                let _ = writeln!(buf, "{}", digest.encode(format));
            }
            ref formats => {
                for &format in formats {
                    let _ = writeln!(buf, "{format}\t{}", digest.encode(format));
                }
            }
        }

        Ok(())
    }

    /// Processes a single input and writes its output, returning `false` if it failed
    fn run_one(&self, idx: usize, input: &[u8], buf: &mut String, out: &mut impl Write) -> std::io::Result<bool> {
        buf.clear();

        match self.process(input, buf) {
            Ok(()) => out.write_all(buf.as_bytes()).map(|_| true),
            Err(e) => {
                log::error!("Input {idx} ({:?}): {e}", String::from_utf8_lossy(input));
                Ok(false)
            }
        }
    }

    /// Processes each input in order, returning the number that failed.
    ///
    /// Bad inputs are logged and skipped, only write errors abort.
    pub fn run<I, S>(&self, inputs: I, out: &mut impl Write) -> std::io::Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut buf = String::new();
        let mut failed = 0;

        for (idx, input) in inputs.into_iter().enumerate() {
            if !self.run_one(idx + 1, input.as_ref(), &mut buf, out)? {
                failed += 1;
            }
        }

        Ok(failed)
    }

    /// Processes one input per line as it is read. Blank lines are skipped when trimming.
    pub fn run_reader(&self, mut reader: impl BufRead, out: &mut impl Write) -> std::io::Result<usize> {
        let mut line = Vec::new();
        let mut buf = String::new();

        let mut count = 0;
        let mut failed = 0;

        loop {
            line.clear();

            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let input = strip_line_ending(&line);

            if self.trim && trim_ascii(input).is_empty() {
                continue;
            }

            count += 1;

            if !self.run_one(count, input, &mut buf, out)? {
                failed += 1;
            }
        }

        log::debug!("Read {count} lines from stdin");

        Ok(failed)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn trim_ascii(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        match first.is_ascii_whitespace() {
            true => bytes = rest,
            false => break,
        }
    }

    while let [rest @ .., last] = bytes {
        match last.is_ascii_whitespace() {
            true => bytes = rest,
            false => break,
        }
    }

    bytes
}
