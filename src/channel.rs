//! Byte hand-off between a transport callback and the decoder owner.
//!
//! A bounded queue built on `critical-section` and `heapless::Deque`. The
//! transport side pushes raw reads as chunks, the thread owning the
//! [`Session`](crate::Session) drains them. Safe across threads and interrupts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, Vec};

/// Maximum bytes carried by one chunk
pub const CHUNK_SIZE: usize = 32;

/// Slice of transport bytes
pub type Chunk = Vec<u8, CHUNK_SIZE>;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe channel.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this channel.
    ///
    /// Only one receiver should drain the queue, otherwise packet order
    /// across chunks is lost.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Returns `Err(TrySendError(value))` if the channel is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

impl<const SIZE: usize> Sender<'_, Chunk, SIZE> {
    /// Queue raw bytes, split into chunks.
    ///
    /// Stops at the first full slot and returns how many bytes were queued,
    /// so the caller can retry with the remainder.
    pub fn send_bytes(&self, bytes: &[u8]) -> usize {
        let mut queued = 0;
        for piece in bytes.chunks(CHUNK_SIZE) {
            let Ok(chunk) = Chunk::from_slice(piece) else {
                break;
            };
            if self.try_send(chunk).is_err() {
                break;
            }
            queued += piece.len();
        }
        queued
    }
}

#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Channel of raw transport bytes
pub type ChunkChannel<const SIZE: usize> = Channel<Chunk, SIZE>;

pub type ChunkSender<'a, const SIZE: usize> = Sender<'a, Chunk, SIZE>;

pub type ChunkReceiver<'a, const SIZE: usize> = Receiver<'a, Chunk, SIZE>;
