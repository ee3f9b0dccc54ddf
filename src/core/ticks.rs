//! Round-number step selection shared by `nice` and tick generation.

const SQRT_50: f64 = 7.071_067_811_865_476;
const SQRT_10: f64 = 3.162_277_660_168_379_5;
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Default number of intervals targeted when rounding a value domain.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Returns the signed tick increment for `[start, stop]` split into roughly
/// `count` intervals.
///
/// A positive result is the step itself. A negative result `-k` encodes a step
/// of `1 / k`, which keeps sub-unit steps exact (`0.1` is stored as `-10`).
pub(crate) fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };
    let increment = if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -10_f64.powf(-power) / factor
    };
    // Subnormal spans overflow the inverse step.
    if increment.is_finite() { increment } else { 0.0 }
}

/// Extends `[start, stop]` outward to round bounds.
///
/// Repeats until the step stabilizes, so the result is itself a fixed point.
pub(crate) fn nice_domain(mut start: f64, mut stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start >= stop {
        return (start, stop);
    }

    let mut previous = 0.0;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if step == previous || step == 0.0 {
            break;
        }
        let (next_start, next_stop) = if step > 0.0 {
            ((start / step).floor() * step, (stop / step).ceil() * step)
        } else {
            ((start * step).ceil() / step, (stop * step).floor() / step)
        };
        // Rounding next to `f64::MAX` can overflow; keep the last finite bounds.
        if !next_start.is_finite() || !next_stop.is_finite() {
            break;
        }
        start = next_start;
        stop = next_stop;
        previous = step;
    }
    (start, stop)
}

/// Round tick values covering `[start, stop]`, ascending.
pub(crate) fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (low, high) = if start < stop {
        (start, stop)
    } else {
        (stop, start)
    };
    let step = tick_increment(low, high, count);
    if step == 0.0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    if step > 0.0 {
        let first = (low / step).ceil() as i64;
        let last = (high / step).floor() as i64;
        for i in first..=last {
            out.push(i as f64 * step);
        }
    } else {
        let inverse = -step;
        let first = (low * inverse).ceil() as i64;
        let last = (high * inverse).floor() as i64;
        for i in first..=last {
            out.push(i as f64 / inverse);
        }
    }
    out
}
