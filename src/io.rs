//! Map codecs.
//!
//! Two independent on-disk encodings:
//! - Plain text: a `width height` header line, then `height` lines of
//!   `width` space-separated `0`/`1` tokens.
//! - Portable graymap (PGM): `P2` (ASCII samples) or `P5` (one byte per
//!   cell), header `magic width height maxSample`. Obstacles are written as
//!   sample 0, free cells as 255; on read, any sample below 128 classifies
//!   as obstacle.

use crate::grid::GridMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAX_SAMPLE: u32 = 255;

/// Samples below this classify as obstacle when reading PGM.
const OBSTACLE_THRESHOLD: i64 = 128;

/// Error type for map I/O.
#[derive(Debug, Clone)]
pub enum IoError {
    /// The file could not be opened, read, or written.
    Io(String),
    /// Malformed or unrecognized header or body on read.
    Format(String),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::Io(msg) => write!(f, "I/O error: {}", msg),
            IoError::Format(msg) => write!(f, "Invalid format: {}", msg),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io(e.to_string())
    }
}

/// Whitespace-delimited ASCII tokens over a byte buffer. PGM headers are
/// ASCII even in the binary variant, so both codecs tokenize this way.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Tokens { data, pos: 0 }
    }

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if start == self.pos {
            None
        } else {
            std::str::from_utf8(&self.data[start..self.pos]).ok()
        }
    }

    fn parse<T: std::str::FromStr>(&mut self, what: &str) -> Result<T, IoError> {
        self.next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| IoError::Format(format!("missing or invalid {}", what)))
    }
}

fn parse_dimensions(tokens: &mut Tokens<'_>) -> Result<(i32, i32), IoError> {
    let width: i32 = tokens.parse("width")?;
    let height: i32 = tokens.parse("height")?;
    if width < 0 || height < 0 {
        return Err(IoError::Format(format!(
            "negative dimensions {}x{}",
            width, height
        )));
    }
    Ok((width, height))
}

/// Write the plain-text encoding.
pub fn write_grid<W: Write>(map: &GridMap, writer: &mut W) -> Result<(), IoError> {
    writeln!(writer, "{} {}", map.width(), map.height())?;
    for y in 0..map.height() {
        for x in 0..map.width() {
            let sep = if x + 1 == map.width() { '\n' } else { ' ' };
            write!(writer, "{}{}", map.get(x, y), sep)?;
        }
    }
    Ok(())
}

/// Read the plain-text encoding. Truncated or non-numeric input is a
/// [`IoError::Format`] error, never a partially filled map.
pub fn read_grid<R: Read>(reader: &mut R) -> Result<GridMap, IoError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut tokens = Tokens::new(&data);
    let (width, height) = parse_dimensions(&mut tokens)?;

    let mut map = GridMap::new(width, height, 0);
    for y in 0..height {
        for x in 0..width {
            let value: i32 = tokens.parse("cell value")?;
            map.set(x, y, if value != 0 { 1 } else { 0 });
        }
    }
    Ok(map)
}

/// Save the plain-text encoding to `path`.
pub fn save_grid(map: &GridMap, path: &Path) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_grid(map, &mut writer)
}

/// Load the plain-text encoding from `path`.
pub fn load_grid(path: &Path) -> Result<GridMap, IoError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_grid(&mut reader)
}

/// Write the PGM encoding; `binary` selects `P5` over `P2`. Obstacles map
/// to the minimum sample, free cells to the maximum.
pub fn write_pgm<W: Write>(map: &GridMap, writer: &mut W, binary: bool) -> Result<(), IoError> {
    let magic = if binary { "P5" } else { "P2" };
    write!(
        writer,
        "{}\n{} {}\n{}\n",
        magic,
        map.width(),
        map.height(),
        MAX_SAMPLE
    )?;

    if binary {
        let mut samples = Vec::with_capacity((map.width() * map.height()).max(0) as usize);
        for y in 0..map.height() {
            for x in 0..map.width() {
                samples.push(if map.get(x, y) != 0 { 0 } else { MAX_SAMPLE as u8 });
            }
        }
        writer.write_all(&samples)?;
    } else {
        for y in 0..map.height() {
            for x in 0..map.width() {
                let sample = if map.get(x, y) != 0 { 0 } else { MAX_SAMPLE };
                let sep = if x + 1 == map.width() { '\n' } else { ' ' };
                write!(writer, "{}{}", sample, sep)?;
            }
        }
    }
    Ok(())
}

/// Read either PGM variant, classifying samples below the mid-range as
/// obstacle. An unrecognized magic number is a [`IoError::Format`] error.
pub fn read_pgm<R: Read>(reader: &mut R) -> Result<GridMap, IoError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut tokens = Tokens::new(&data);
    let magic = tokens
        .next()
        .ok_or_else(|| IoError::Format("empty input".to_string()))?;
    let binary = match magic {
        "P2" => false,
        "P5" => true,
        other => {
            return Err(IoError::Format(format!(
                "unrecognized magic number {:?}",
                other
            )))
        }
    };

    let (width, height) = parse_dimensions(&mut tokens)?;
    let _max_sample: u32 = tokens.parse("max sample")?;

    let mut map = GridMap::new(width, height, 0);
    if binary {
        // Exactly one whitespace byte separates the header from the pixels.
        let pixels = &data[(tokens.pos + 1).min(data.len())..];
        let expected = (width as usize) * (height as usize);
        if pixels.len() < expected {
            return Err(IoError::Format(format!(
                "truncated pixel data: {} of {} bytes",
                pixels.len(),
                expected
            )));
        }
        for (i, &sample) in pixels[..expected].iter().enumerate() {
            let x = (i % width.max(1) as usize) as i32;
            let y = (i / width.max(1) as usize) as i32;
            map.set(x, y, ((sample as i64) < OBSTACLE_THRESHOLD) as u8);
        }
    } else {
        for y in 0..height {
            for x in 0..width {
                let sample: i64 = tokens.parse("pixel sample")?;
                map.set(x, y, (sample < OBSTACLE_THRESHOLD) as u8);
            }
        }
    }
    Ok(map)
}

/// Save the PGM encoding to `path`; `binary` selects `P5` over `P2`.
pub fn save_pgm(map: &GridMap, path: &Path, binary: bool) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_pgm(map, &mut writer, binary)
}

/// Load either PGM variant from `path`.
pub fn load_pgm(path: &Path) -> Result<GridMap, IoError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_pgm(&mut reader)
}
