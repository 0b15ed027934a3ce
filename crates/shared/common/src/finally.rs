//! Drop guard that runs a closing step on every exit path.
//!
//! The guard owns whatever the closing step needs (usually the output writer
//! and the entity being reported on) and lends it to the guarded code through
//! `Deref`/`DerefMut`. The closing step runs exactly once, including during
//! unwinding.

use std::ops::{Deref, DerefMut};

/// Runs `finish(&mut value)` when dropped.
pub struct Finally<T, F>
where
    F: FnOnce(&mut T),
{
    value: T,
    finish: Option<F>,
}

impl<T, F> Finally<T, F>
where
    F: FnOnce(&mut T),
{
    pub fn new(value: T, finish: F) -> Self {
        Self {
            value,
            finish: Some(finish),
        }
    }
}

impl<T, F> Deref for Finally<T, F>
where
    F: FnOnce(&mut T),
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F> DerefMut for Finally<T, F>
where
    F: FnOnce(&mut T),
{
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, F> Drop for Finally<T, F>
where
    F: FnOnce(&mut T),
{
    fn drop(&mut self) {
        if let Some(finish) = self.finish.take() {
            finish(&mut self.value);
        }
    }
}
