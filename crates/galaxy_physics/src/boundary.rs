//! Boundary reflection: fold a coordinate back into a bounded range as if it
//! bounced between two parallel walls, instead of wrapping torus-style.

/// Fold `x` into `[x0, x1)` with a triangle wave of period `2 * (x1 - x0)`:
/// count how many widths the coordinate has traveled past `x0`, keep the
/// remainder, and reflect the remainder when the fold count is odd. The
/// result is continuous in `x`, so a body crossing a wall reappears moving
/// back from it, never teleported. Degenerate ranges collapse to `x0`.
pub fn fold(x: f64, x0: f64, x1: f64) -> f64 {
    let width = x1 - x0;
    if width <= 0.0 {
        return x0;
    }
    let fits = ((x - x0) / width).floor();
    let rem = x - x0 - fits * width;
    let folded = if fits.rem_euclid(2.0) == 0.0 {
        x0 + rem
    } else {
        x0 + width - rem
    };
    // Exact wall contact (and rounding at the fold seam) would land on x1;
    // keep the result inside the half-open interval.
    folded.clamp(x0, x1.next_down())
}

/// Sign to apply to a velocity component when the matching coordinate is
/// folded: `+1.0` after an even number of wall reflections, `-1.0` after an
/// odd number. Evaluate at the pre-fold coordinate.
pub fn fold_sign(x: f64, x0: f64, x1: f64) -> f64 {
    let width = x1 - x0;
    if width <= 0.0 {
        return 1.0;
    }
    let fits = ((x - x0) / width).floor();
    if fits.rem_euclid(2.0) == 0.0 { 1.0 } else { -1.0 }
}
