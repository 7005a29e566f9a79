//! Discretization scales
//!
//! A scale maps a bounded value range onto a fixed number of ordered bins.
//! Bins are half-open, contiguous and cover the range exactly; `index` is
//! monotonic non-decreasing and clamps out-of-range values to the first or
//! last bin. Variants are crossed over the value domain (real/integer) and
//! the bucket growth (linear/log2/log10).

use crate::error::LoggerError;

/// Capability set shared by every scale variant.
pub trait Scale {
    /// Value domain of the scale
    type Value: Copy + PartialOrd;

    /// Lower end of the covered range.
    fn min(&self) -> Self::Value;
    /// Upper end of the covered range.
    fn max(&self) -> Self::Value;
    /// Number of bins.
    fn size(&self) -> usize;
    /// Extent of the covered range.
    fn length(&self) -> Self::Value;
    /// Half-open sub-range `[lo, hi)` of bin `i`.
    fn bounds(&self, i: usize) -> (Self::Value, Self::Value);
    /// Bin index of `v`, clamped to `[0, size - 1]`.
    fn index(&self, v: Self::Value) -> usize;
}

/// Clamp a formula-derived bin index so it is exactly consistent with the
/// bucket boundaries. Floating point puts `index(bounds(i).0)` within one
/// bin of `i`; nudging against the actual boundaries restores equality.
fn align_to_bounds<S: Scale>(scale: &S, v: S::Value, raw: usize) -> usize {
    let size = scale.size();
    let mut i = raw.min(size - 1);
    while i > 0 && v < scale.bounds(i).0 {
        i -= 1;
    }
    while i + 1 < size && v >= scale.bounds(i + 1).0 {
        i += 1;
    }
    i
}

/// Evenly spaced real-valued bins.
#[derive(Debug, Clone)]
pub struct LinearScale {
    min: f64,
    max: f64,
    size: usize,
}

impl LinearScale {
    /// A linear scale over `[min, max]` with `size` bins.
    pub fn new(min: f64, max: f64, size: usize) -> Result<Self, LoggerError> {
        if size == 0 || !(max > min) {
            return Err(LoggerError::InvalidScale {
                reason: format!("need max > min and size > 0, got [{}, {}] / {}", min, max, size),
            });
        }
        Ok(Self { min, max, size })
    }

    fn width(&self) -> f64 {
        (self.max - self.min) / self.size as f64
    }
}

impl Scale for LinearScale {
    type Value = f64;

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn size(&self) -> usize {
        self.size
    }

    fn length(&self) -> f64 {
        self.max - self.min
    }

    fn bounds(&self, i: usize) -> (f64, f64) {
        let w = self.width();
        (self.min + i as f64 * w, self.min + (i + 1) as f64 * w)
    }

    fn index(&self, v: f64) -> usize {
        if v <= self.min {
            return 0;
        }
        let raw = ((v - self.min) / self.width()).floor() as usize;
        align_to_bounds(self, v, raw)
    }
}

/// Evenly strided integer bins.
///
/// The stride is `ceil((length + 1) / size)` rather than the ideal real-valued
/// stride; `bounds` and `index` share it, so the round-trip
/// `index(bounds(i).0) == i` holds for every bin. Configurations whose
/// rounded-up stride would overshoot the range before the last bin (leaving
/// empty bins past `max`) are rejected at construction, which keeps the bins
/// contiguous and exactly covering `[min, max]`.
#[derive(Debug, Clone)]
pub struct IntegerLinearScale {
    min: i64,
    max: i64,
    size: usize,
}

impl IntegerLinearScale {
    /// An integer linear scale over `[min, max]` with `size` bins.
    pub fn new(min: i64, max: i64, size: usize) -> Result<Self, LoggerError> {
        if size == 0 || max <= min {
            return Err(LoggerError::InvalidScale {
                reason: format!("need max > min and size > 0, got [{}, {}] / {}", min, max, size),
            });
        }
        let scale = Self { min, max, size };
        if min + (size as i64 - 1) * scale.step() > max {
            return Err(LoggerError::InvalidScale {
                reason: format!(
                    "stride {} leaves empty bins past {} for [{}, {}] / {}",
                    scale.step(),
                    max,
                    min,
                    max,
                    size
                ),
            });
        }
        Ok(scale)
    }

    /// The integer stride actually used between bin boundaries.
    pub fn step(&self) -> i64 {
        let span = self.max - self.min + 1;
        (span + self.size as i64 - 1) / self.size as i64
    }
}

impl Scale for IntegerLinearScale {
    type Value = i64;

    fn min(&self) -> i64 {
        self.min
    }

    fn max(&self) -> i64 {
        self.max
    }

    fn size(&self) -> usize {
        self.size
    }

    fn length(&self) -> i64 {
        self.max - self.min
    }

    fn bounds(&self, i: usize) -> (i64, i64) {
        let step = self.step();
        let lo = self.min + i as i64 * step;
        // only the last bin is shortened by the clamp
        let hi = (lo + step).min(self.max + 1);
        (lo, hi)
    }

    fn index(&self, v: i64) -> usize {
        if v <= self.min {
            return 0;
        }
        let raw = ((v - self.min) / self.step()) as usize;
        raw.min(self.size - 1)
    }
}

/// Which logarithm base a log scale grows with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBase {
    /// Base-2 growth
    Two,
    /// Base-10 growth
    Ten,
}

impl LogBase {
    fn log(self, v: f64) -> f64 {
        match self {
            LogBase::Two => v.log2(),
            LogBase::Ten => v.log10(),
        }
    }

    fn pow(self, v: f64) -> f64 {
        match self {
            LogBase::Two => v.exp2(),
            LogBase::Ten => 10f64.powf(v),
        }
    }
}

/// Geometrically growing real-valued bins.
///
/// Values are mapped through `log(v - min + 1)`, keeping the argument
/// strictly positive over the whole range.
#[derive(Debug, Clone)]
pub struct LogScale {
    min: f64,
    max: f64,
    size: usize,
    base: LogBase,
}

impl LogScale {
    /// A log scale over `[min, max]` with `size` bins.
    pub fn new(min: f64, max: f64, size: usize, base: LogBase) -> Result<Self, LoggerError> {
        if size == 0 || !(max > min) {
            return Err(LoggerError::InvalidScale {
                reason: format!("need max > min and size > 0, got [{}, {}] / {}", min, max, size),
            });
        }
        Ok(Self { min, max, size, base })
    }

    /// Base-2 convenience constructor.
    pub fn log2(min: f64, max: f64, size: usize) -> Result<Self, LoggerError> {
        Self::new(min, max, size, LogBase::Two)
    }

    /// Base-10 convenience constructor.
    pub fn log10(min: f64, max: f64, size: usize) -> Result<Self, LoggerError> {
        Self::new(min, max, size, LogBase::Ten)
    }

    fn denominator(&self) -> f64 {
        self.base.log(self.max - self.min + 1.0)
    }
}

impl Scale for LogScale {
    type Value = f64;

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn size(&self) -> usize {
        self.size
    }

    fn length(&self) -> f64 {
        self.max - self.min
    }

    fn bounds(&self, i: usize) -> (f64, f64) {
        let d = self.denominator();
        let lo = self.min + self.base.pow(d * i as f64 / self.size as f64) - 1.0;
        let hi = self.min + self.base.pow(d * (i + 1) as f64 / self.size as f64) - 1.0;
        (lo, hi)
    }

    fn index(&self, v: f64) -> usize {
        if v <= self.min {
            return 0;
        }
        let scaled =
            self.base.log(v - self.min + 1.0) / self.denominator() * self.size as f64;
        let raw = scaled.floor() as usize;
        align_to_bounds(self, v, raw)
    }
}

/// Geometrically growing integer bins.
///
/// The real log boundaries are floored to integers at construction and then
/// forced strictly increasing (a floored boundary colliding with its
/// predecessor moves up by one), so every bin is non-empty and the
/// round-trip `index(bounds(i).0) == i` survives the rounding.
#[derive(Debug, Clone)]
pub struct IntegerLogScale {
    min: i64,
    max: i64,
    /// `size + 1` strictly increasing boundaries; bin `i` is
    /// `[boundaries[i], boundaries[i + 1])`
    boundaries: Vec<i64>,
}

impl IntegerLogScale {
    /// An integer log scale over `[min, max]` with `size` bins.
    ///
    /// Requires `size` no larger than the range so `size` strictly
    /// increasing integer boundaries fit inside it.
    pub fn new(min: i64, max: i64, size: usize, base: LogBase) -> Result<Self, LoggerError> {
        if max <= min || size == 0 || (size as i64) > max - min {
            return Err(LoggerError::InvalidScale {
                reason: format!(
                    "need max > min and 0 < size <= length, got [{}, {}] / {}",
                    min, max, size
                ),
            });
        }

        let d = base.log((max - min + 1) as f64);
        let mut boundaries = Vec::with_capacity(size + 1);
        boundaries.push(min);
        for i in 1..size {
            let raw = (min as f64 + base.pow(d * i as f64 / size as f64) - 1.0).floor() as i64;
            let prev = *boundaries.last().expect("boundaries start non-empty");
            boundaries.push(raw.max(prev + 1));
        }
        boundaries.push(max + 1);

        Ok(Self { min, max, boundaries })
    }

    /// Base-2 convenience constructor.
    pub fn log2(min: i64, max: i64, size: usize) -> Result<Self, LoggerError> {
        Self::new(min, max, size, LogBase::Two)
    }

    /// Base-10 convenience constructor.
    pub fn log10(min: i64, max: i64, size: usize) -> Result<Self, LoggerError> {
        Self::new(min, max, size, LogBase::Ten)
    }
}

impl Scale for IntegerLogScale {
    type Value = i64;

    fn min(&self) -> i64 {
        self.min
    }

    fn max(&self) -> i64 {
        self.max
    }

    fn size(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn length(&self) -> i64 {
        self.max - self.min
    }

    fn bounds(&self, i: usize) -> (i64, i64) {
        (self.boundaries[i], self.boundaries[i + 1])
    }

    fn index(&self, v: i64) -> usize {
        if v <= self.min {
            return 0;
        }
        // first boundary above v, minus one, clamped into range
        let above = self.boundaries.partition_point(|&b| b <= v);
        (above - 1).min(self.size() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_real_reference_points() {
        let scale = LinearScale::new(0.0, 100.0, 10).unwrap();
        assert_eq!(scale.index(55.0), 5);
        let (lo, hi) = scale.bounds(5);
        assert_eq!((lo, hi), (50.0, 60.0));
        assert_eq!(scale.size(), 10);
        assert_eq!(scale.length(), 100.0);
    }

    #[test]
    fn test_linear_real_clamps_out_of_range() {
        let scale = LinearScale::new(0.0, 100.0, 10).unwrap();
        assert_eq!(scale.index(-5.0), 0);
        assert_eq!(scale.index(100.0), 9);
        assert_eq!(scale.index(1e9), 9);
    }

    #[test]
    fn test_integer_linear_step_rounding() {
        let scale = IntegerLinearScale::new(0, 9, 4).unwrap();
        // span 10 over 4 bins rounds the stride up to 3
        assert_eq!(scale.step(), 3);
        assert_eq!(scale.bounds(0), (0, 3));
        assert_eq!(scale.bounds(3), (9, 10));
        assert_eq!(scale.index(9), 3);
    }

    #[test]
    fn test_invalid_scales_rejected() {
        assert!(LinearScale::new(0.0, 0.0, 10).is_err());
        assert!(LinearScale::new(0.0, 10.0, 0).is_err());
        assert!(IntegerLinearScale::new(5, 5, 2).is_err());
        assert!(IntegerLogScale::log2(0, 4, 10).is_err());
        // stride 2 over [0, 9] would strand bins 5..8 past the range
        assert!(IntegerLinearScale::new(0, 9, 8).is_err());
    }

    #[test]
    fn test_integer_linear_bins_cover_the_range_exactly() {
        for (min, max, size) in [(0i64, 100, 10), (1, 7, 3), (0, 9, 4), (-10, 10, 7)] {
            let scale = IntegerLinearScale::new(min, max, size).unwrap();
            let mut expected_lo = min;
            for i in 0..scale.size() {
                let (lo, hi) = scale.bounds(i);
                assert_eq!(lo, expected_lo, "gap before bin {}", i);
                assert!(hi > lo, "empty bin {}", i);
                expected_lo = hi;
            }
            assert_eq!(expected_lo, max + 1, "bins must end at max + 1");
        }
    }

    #[test]
    fn test_monotonicity() {
        let scales: Vec<Box<dyn Scale<Value = f64>>> = vec![
            Box::new(LinearScale::new(0.0, 1000.0, 20).unwrap()),
            Box::new(LogScale::log2(0.0, 1000.0, 20).unwrap()),
            Box::new(LogScale::log10(0.0, 1000.0, 20).unwrap()),
        ];
        for scale in &scales {
            let mut last = 0;
            let mut v = -10.0;
            while v < 1100.0 {
                let i = scale.index(v);
                assert!(i >= last, "index must not decrease");
                assert!(i < scale.size());
                last = i;
                v += 0.37;
            }
        }
    }

    #[test]
    fn test_round_trip_property_real() {
        let scales: Vec<Box<dyn Scale<Value = f64>>> = vec![
            Box::new(LinearScale::new(0.0, 100.0, 10).unwrap()),
            Box::new(LinearScale::new(-50.0, 75.0, 13).unwrap()),
            Box::new(LogScale::log2(0.0, 1e6, 24).unwrap()),
            Box::new(LogScale::log10(0.0, 1e8, 17).unwrap()),
            Box::new(LogScale::log10(2.0, 1e4, 9).unwrap()),
        ];
        for scale in &scales {
            for i in 0..scale.size() {
                let (lo, _) = scale.bounds(i);
                assert_eq!(scale.index(lo), i, "round trip failed at bin {}", i);
            }
        }
    }

    #[test]
    fn test_round_trip_property_integer() {
        let scales: Vec<Box<dyn Scale<Value = i64>>> = vec![
            Box::new(IntegerLinearScale::new(0, 100, 10).unwrap()),
            Box::new(IntegerLinearScale::new(1, 7, 3).unwrap()),
            Box::new(IntegerLogScale::log2(0, 1_000_000, 20).unwrap()),
            Box::new(IntegerLogScale::log10(0, 100_000, 11).unwrap()),
        ];
        for scale in &scales {
            for i in 0..scale.size() {
                let (lo, _) = scale.bounds(i);
                assert_eq!(scale.index(lo), i, "round trip failed at bin {}", i);
            }
        }
    }

    #[test]
    fn test_log_bins_grow() {
        let scale = LogScale::log10(0.0, 1e6, 12).unwrap();
        let mut last_width = 0.0;
        for i in 0..scale.size() {
            let (lo, hi) = scale.bounds(i);
            let width = hi - lo;
            assert!(width > last_width, "log bin widths must grow");
            last_width = width;
        }
    }
}
