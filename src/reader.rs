//! Input sources and the chunk reader thread
//!
//! A reader thread pulls fixed-size chunks from a file or stdin and sends
//! them over a bounded channel. The channel closes when the input is
//! exhausted; a read error is sent as the last item.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, Receiver, Sender};

/// Bytes requested per read
pub const CHUNK_SIZE: usize = 4096;

/// Chunks buffered between the reader thread and the highlighter
pub const CHANNEL_CAPACITY: usize = 1000;

/// One read from the input
pub type Chunk = io::Result<Vec<u8>>;

/// Where input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::Stdin => None,
            Source::File(path) => Some(path),
        }
    }

    /// Open the source for reading
    pub fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin())),
            Source::File(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Start a thread reading `input` into a bounded channel
///
/// The thread stops at end of input, after sending a read error, or once
/// the receiver is dropped.
pub fn spawn_reader<R>(
    input: R,
    chunk_size: usize,
    capacity: usize,
) -> (Receiver<Chunk>, JoinHandle<()>)
where
    R: Read + Send + 'static,
{
    let (sender, receiver) = bounded(capacity);
    let handle = thread::spawn(move || read_chunks(input, chunk_size.max(1), &sender));
    (receiver, handle)
}

fn read_chunks<R: Read>(mut input: R, chunk_size: usize, sender: &Sender<Chunk>) {
    let mut buf = vec![0u8; chunk_size];
    let mut total = 0usize;

    loop {
        match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                total += n;
                if sender.send(Ok(buf[..n].to_vec())).is_err() {
                    log::debug!("reader stopped early, receiver gone");
                    return;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!("read failed after {} bytes: {}", total, e);
                let _ = sender.send(Err(e));
                return;
            }
        }
    }

    log::trace!("reader finished, {} bytes", total);
}
