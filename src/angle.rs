//! Pointer bearings and the continuity correction that keeps a glyph's
//! rotation from snapping across the -180/180 boundary.

const HALF_TURN: f64 = 180.0;
const FULL_TURN: f64 = 360.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bearing from `from` to `to` in degrees, within (-180, 180].
pub fn raw_angle(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Picks the angle equivalent to `raw` that lies within a half turn of
/// `previous`.
///
/// A difference of exactly +-180 is left alone, so the result then sits a
/// half turn away on the side the raw difference pointed to.
pub fn continue_angle(raw: f64, previous: f64) -> f64 {
    let mut diff = raw - previous;
    while diff > HALF_TURN {
        diff -= FULL_TURN;
    }
    while diff < -HALF_TURN {
        diff += FULL_TURN;
    }
    previous + diff
}

/// Last emitted angle per glyph, indexed by the glyph's flat grid position.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleMemory {
    angles: Vec<Option<f64>>,
}

impl AngleMemory {
    pub fn new(len: usize) -> Self {
        Self {
            angles: vec![None; len],
        }
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.angles.get(index).copied().flatten()
    }

    /// Turns a raw bearing into the angle to render and remembers it.
    ///
    /// The first sample for a glyph is emitted unchanged. Non-finite samples
    /// re-emit the stored angle without replacing it.
    pub fn emit(&mut self, index: usize, raw: f64) -> f64 {
        let Some(slot) = self.angles.get_mut(index) else {
            return if raw.is_finite() { raw } else { 0.0 };
        };

        if !raw.is_finite() {
            return slot.unwrap_or(0.0);
        }

        let next = match *slot {
            Some(previous) => continue_angle(raw, previous),
            None => raw,
        };
        *slot = Some(next);
        next
    }
}
