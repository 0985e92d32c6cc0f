//! Shape delivery: where new shapes come from and the 3-slot preview queue.

use super::config::{NUM_SHAPES, QUEUE_LEN, SHAPES};
use super::shape::Shape;
use rand::Rng;

/// Supplier of fresh shapes for the preview queue.
pub trait ShapeSource {
    fn next_shape(&mut self) -> Shape;
}

/// Draws each shape independently and uniformly from [`SHAPES`], with
/// replacement.
pub struct RandomShapes<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomShapes<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ShapeSource for RandomShapes<R> {
    fn next_shape(&mut self) -> Shape {
        SHAPES[self.rng.random_range(0..NUM_SHAPES)]
    }
}

/// Deterministic source that repeats a fixed sequence forever.
#[derive(Debug, Clone)]
pub struct CyclingShapes<const K: usize> {
    shapes: [Shape; K],
    next: usize,
}

impl<const K: usize> CyclingShapes<K> {
    pub fn new(shapes: [Shape; K]) -> Self {
        Self { shapes, next: 0 }
    }
}

impl<const K: usize> ShapeSource for CyclingShapes<K> {
    fn next_shape(&mut self) -> Shape {
        let Some(shape) = self.shapes.get(self.next).copied() else {
            return SHAPES[0];
        };
        self.next = (self.next + 1) % K;
        shape
    }
}

/// Three preview shapes and a cursor counting how many were consumed this
/// round. The cursor never rests at 3: consuming the last slot deals a
/// fresh round and rewinds it to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeQueue {
    slots: [Shape; QUEUE_LEN],
    cursor: usize,
}

impl ShapeQueue {
    /// Deal a fresh round of three shapes.
    pub fn new<S: ShapeSource + ?Sized>(source: &mut S) -> Self {
        Self {
            slots: Self::deal(source),
            cursor: 0,
        }
    }

    fn deal<S: ShapeSource + ?Sized>(source: &mut S) -> [Shape; QUEUE_LEN] {
        core::array::from_fn(|_| source.next_shape())
    }

    /// Shape due to be placed next.
    pub fn current(&self) -> Shape {
        self.slots[self.cursor]
    }

    pub fn slots(&self) -> &[Shape; QUEUE_LEN] {
        &self.slots
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Mark the current shape consumed. Returns true if a new round was dealt.
    pub fn advance<S: ShapeSource + ?Sized>(&mut self, source: &mut S) -> bool {
        self.cursor += 1;
        if self.cursor >= QUEUE_LEN {
            self.slots = Self::deal(source);
            self.cursor = 0;
            return true;
        }
        false
    }
}
