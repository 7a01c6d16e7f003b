//! Lazy splitting of sequences into fixed-size chunks.
//!
//! Every chunk holds exactly `size` elements except possibly the last, which
//! holds the remainder. Chunks are produced on demand, in source order, and
//! concatenating them gives back the original sequence.

use std::iter::{Fuse, FusedIterator};

use crate::error::{Error, Result};

/// Split a slice into chunks of `size` elements.
///
/// The returned iterator borrows the slice and never modifies it. A slice of
/// length `L` yields `ceil(L / size)` chunks; an empty slice yields none.
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] if `size` is zero.
///
/// # Examples
///
/// ```
/// # use fx_lib::chunks;
/// let parts: Vec<&[i32]> = chunks(&[1, 2, 3, 4, 5], 2)?.collect();
/// assert_eq!(parts, [&[1, 2][..], &[3, 4], &[5]]);
/// # Ok::<(), fx_lib::Error>(())
/// ```
pub fn chunks<T>(items: &[T], size: usize) -> Result<Chunks<'_, T>> {
    if size == 0 {
        return Err(Error::InvalidChunkSize);
    }

    Ok(Chunks {
        remaining: items,
        size,
    })
}

/// Split any iterable into owned chunks of `size` elements.
///
/// Use this when the input is not a slice, e.g. lines streamed from a reader.
/// Elements are pulled from the source only as chunks are requested.
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] if `size` is zero.
pub fn chunk_iter<I>(items: I, size: usize) -> Result<ChunkIter<I::IntoIter>>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(Error::InvalidChunkSize);
    }

    Ok(ChunkIter {
        inner: items.into_iter().fuse(),
        size,
    })
}

/// Iterator returned by [`chunks`].
#[derive(Debug)]
pub struct Chunks<'a, T> {
    remaining: &'a [T],
    size: usize,
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let at = self.size.min(self.remaining.len());
        let (head, tail) = self.remaining.split_at(at);
        self.remaining = tail;

        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.len().div_ceil(self.size);
        (count, Some(count))
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> FusedIterator for Chunks<'_, T> {}

/// Iterator returned by [`chunk_iter`].
#[derive(Debug)]
pub struct ChunkIter<I: Iterator> {
    inner: Fuse<I>,
    size: usize,
}

impl<I: Iterator> Iterator for ChunkIter<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<_> = self.inner.by_ref().take(self.size).collect();

        if chunk.is_empty() { None } else { Some(chunk) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I: Iterator> FusedIterator for ChunkIter<I> {}
