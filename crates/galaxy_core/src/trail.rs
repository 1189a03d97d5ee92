use crate::types::Vec2;

/// Bounded history of a body's recent positions.
///
/// Fixed-capacity ring buffer: pushing into a full trail overwrites the
/// oldest point in the same step, there is no separate eviction. The logical
/// oldest→newest order is derived from the insert cursor and the current
/// length alone, never by scanning.
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<Vec2>,
    cursor: usize,
    len: usize,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` points.
    ///
    /// The backing storage is reserved up front and never resized. If the
    /// allocation cannot be satisfied the process aborts: the engine has no
    /// degraded mode without history storage.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "trail capacity must be non-zero");
        Self {
            points: Vec::with_capacity(capacity),
            cursor: 0,
            len: 0,
            capacity,
        }
    }

    /// Append a point, evicting the oldest when full.
    pub fn push(&mut self, point: Vec2) {
        if self.len < self.capacity {
            self.points.push(point);
            self.len += 1;
        } else {
            self.points[self.cursor] = point;
        }
        self.cursor = (self.cursor + 1) % self.capacity;
    }

    /// Most recently recorded point, if any.
    pub fn latest(&self) -> Option<Vec2> {
        if self.len == 0 {
            return None;
        }
        Some(self.points[(self.cursor + self.capacity - 1) % self.capacity])
    }

    /// Drop all history and start over from `point`.
    pub fn reset(&mut self, point: Vec2) {
        self.points.clear();
        self.cursor = 0;
        self.len = 0;
        self.push(point);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the valid points, oldest to newest. The iterator is lazy
    /// and restartable; it yields exactly `len()` points.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        let start = if self.len < self.capacity {
            0
        } else {
            self.cursor
        };
        (0..self.len).map(move |k| self.points[(start + k) % self.capacity])
    }
}
