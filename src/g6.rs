//! The graph6 line format: codec, stream reader, stream writer.
//!
//! graph6 encodes a simple undirected graph as one printable ASCII line:
//! the order `n`, then the upper triangle of the adjacency matrix in
//! column-major order — bits x(0,1), x(0,2), x(1,2), x(0,3), ... — packed
//! six bits per byte, most significant bit first, each byte offset by 63 so
//! it lands in `'?'..='~'`. The order is one byte for `n <= 62`, `'~'` plus
//! three bytes for `n <= 258047`, and `"~~"` plus six bytes above that.

use crate::graph::Graph;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Offset added to every 6-bit group to make it printable.
const BIAS: u8 = 63;
/// Highest byte value the format permits (`'~'`).
const MAX_BYTE: u8 = 126;

/// Optional stream header some producers emit before the first graph.
pub const HEADER: &str = ">>graph6<<";

// ============================================================================
// Errors
// ============================================================================

/// Errors from decoding a single graph6 line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum G6Error {
    /// The line is empty.
    Empty,
    /// A byte outside `'?'..='~'`.
    InvalidByte {
        /// Byte offset within the line.
        pos: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The line ends inside the order prefix.
    Truncated,
    /// The edge-bit body has the wrong number of bytes for the order.
    BodyLength {
        /// Bytes required by the order.
        expected: u64,
        /// Bytes actually present.
        got: u64,
    },
    /// The order does not fit in this platform's `usize`.
    OrderTooLarge {
        /// The decoded order.
        order: u64,
    },
}

impl fmt::Display for G6Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            G6Error::Empty => write!(f, "empty graph6 line"),
            G6Error::InvalidByte { pos, byte } => {
                write!(f, "invalid graph6 byte 0x{byte:02x} at offset {pos}")
            }
            G6Error::Truncated => write!(f, "graph6 line ends inside the order prefix"),
            G6Error::BodyLength { expected, got } => {
                write!(f, "graph6 body has {got} bytes, expected {expected}")
            }
            G6Error::OrderTooLarge { order } => {
                write!(f, "graph order {order} is too large for this platform")
            }
        }
    }
}

impl std::error::Error for G6Error {}

/// Errors from a graph6 stream: transport failures or per-line decode
/// failures tagged with the 1-based input line number.
#[derive(Debug)]
pub enum StreamError {
    /// The underlying reader or writer failed.
    Io(io::Error),
    /// A line failed to decode.
    Decode {
        /// 1-based line number in the input stream.
        line: u64,
        /// The decode failure.
        source: G6Error,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "I/O error: {e}"),
            StreamError::Decode { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Decode { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Decodes one graph6 line (no trailing newline) into a [`Graph`].
///
/// # Errors
/// Returns a [`G6Error`] describing the first format violation found.
pub fn decode(line: &str) -> Result<Graph, G6Error> {
    let bytes = line.as_bytes();
    if bytes.is_empty() {
        return Err(G6Error::Empty);
    }
    for (pos, &byte) in bytes.iter().enumerate() {
        if !(BIAS..=MAX_BYTE).contains(&byte) {
            return Err(G6Error::InvalidByte { pos, byte });
        }
    }

    let (order, consumed) = decode_order(bytes)?;
    let n = usize::try_from(order).map_err(|_| G6Error::OrderTooLarge { order })?;

    let body = &bytes[consumed..];
    // u128: n(n-1)/2 overflows u64 near the 36-bit order ceiling.
    let pair_bits = u128::from(order) * u128::from(order.saturating_sub(1)) / 2;
    let expected = pair_bits.div_ceil(6);
    if body.len() as u128 != expected {
        return Err(G6Error::BodyLength {
            expected: u64::try_from(expected).unwrap_or(u64::MAX),
            got: body.len() as u64,
        });
    }

    let mut g = Graph::empty(n);
    let mut k = 0usize;
    for j in 1..n {
        for i in 0..j {
            let group = body[k / 6] - BIAS;
            if (group >> (5 - k % 6)) & 1 != 0 {
                g.add_edge(i, j);
            }
            k += 1;
        }
    }
    Ok(g)
}

/// Encodes a graph as one graph6 line (no trailing newline).
pub fn encode(g: &Graph) -> String {
    let n = g.order();
    let mut out = Vec::with_capacity(8 + (n * n.saturating_sub(1) / 2).div_ceil(6));
    encode_order(n as u64, &mut out);

    let mut acc = 0u8;
    let mut nbits = 0u8;
    for j in 1..n {
        for i in 0..j {
            acc <<= 1;
            if g.has_edge(i, j) {
                acc |= 1;
            }
            nbits += 1;
            if nbits == 6 {
                out.push(acc + BIAS);
                acc = 0;
                nbits = 0;
            }
        }
    }
    if nbits > 0 {
        out.push((acc << (6 - nbits)) + BIAS);
    }

    out.into_iter().map(char::from).collect()
}

/// Decodes the order prefix; returns the order and the bytes consumed.
/// Bytes are already validated to lie in `'?'..='~'`.
fn decode_order(bytes: &[u8]) -> Result<(u64, usize), G6Error> {
    if bytes[0] != MAX_BYTE {
        return Ok(((bytes[0] - BIAS) as u64, 1));
    }
    if bytes.len() >= 2 && bytes[1] == MAX_BYTE {
        // "~~" + six 6-bit groups: orders up to 2^36 - 1.
        if bytes.len() < 8 {
            return Err(G6Error::Truncated);
        }
        let order = pack_groups(&bytes[2..8]);
        Ok((order, 8))
    } else {
        // "~" + three 6-bit groups: orders 63..=258047.
        if bytes.len() < 4 {
            return Err(G6Error::Truncated);
        }
        let order = pack_groups(&bytes[1..4]);
        Ok((order, 4))
    }
}

/// Appends the order prefix for `n` in its shortest legal form.
fn encode_order(n: u64, out: &mut Vec<u8>) {
    debug_assert!(n < 1u64 << 36, "graph6 orders are limited to 36 bits");
    if n <= 62 {
        out.push(n as u8 + BIAS);
    } else if n <= 258_047 {
        out.push(MAX_BYTE);
        push_groups(n, 3, out);
    } else {
        out.push(MAX_BYTE);
        out.push(MAX_BYTE);
        push_groups(n, 6, out);
    }
}

#[inline]
fn pack_groups(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &b| (acc << 6) | (b - BIAS) as u64)
}

#[inline]
fn push_groups(value: u64, count: u32, out: &mut Vec<u8>) {
    for shift in (0..count).rev() {
        out.push(((value >> (6 * shift)) & 63) as u8 + BIAS);
    }
}

// ============================================================================
// Stream reader / writer
// ============================================================================

/// Sequential reader of graph6 lines from a buffered stream.
///
/// Skips blank lines and the optional [`HEADER`] at the start of the stream;
/// decode failures carry the offending 1-based line number.
pub struct Graph6Reader<R> {
    inner: R,
    buf: String,
    line: u64,
}

impl<R: BufRead> Graph6Reader<R> {
    /// Wraps a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Graph6Reader<R> {
    type Item = Result<Graph, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.inner.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(StreamError::Io(e))),
            }
            self.line += 1;

            let mut text = self.buf.trim();
            if self.line == 1 {
                if let Some(rest) = text.strip_prefix(HEADER) {
                    text = rest.trim();
                }
            }
            if text.is_empty() {
                continue;
            }

            return Some(decode(text).map_err(|source| StreamError::Decode {
                line: self.line,
                source,
            }));
        }
    }
}

/// Sequential writer emitting one graph6 line per graph.
pub struct Graph6Writer<W> {
    inner: W,
}

impl<W: Write> Graph6Writer<W> {
    /// Wraps a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes one graph as a graph6 line.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn write_graph(&mut self, g: &Graph) -> io::Result<()> {
        writeln!(self.inner, "{}", encode(g))
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================
