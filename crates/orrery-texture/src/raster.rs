//! Minimal shape rasterization onto a [`Pixmap`].
//!
//! Coverage is binary and sampled at pixel centers. Shapes that extend past
//! the canvas are clipped to it.

use crate::color::Paint;
use crate::pixmap::Pixmap;

/// A color stop at `offset` in `[0, 1]` along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub paint: Paint,
}

/// A circular gradient from `center` out to `radius`.
///
/// Beyond the radius the last stop's paint applies.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Create a gradient with no stops (paints nothing).
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            stops: Vec::new(),
        }
    }

    /// Add a stop. Stops are kept sorted by offset.
    pub fn with_stop(mut self, offset: f32, paint: Paint) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let at = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(at, ColorStop { offset, paint });
        self
    }

    /// Paint at normalized distance `t` from the center.
    pub fn paint_at(&self, t: f32) -> Paint {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Paint::TRANSPARENT;
        };
        if t <= first.offset {
            return first.paint;
        }
        if t >= last.offset {
            return last.paint;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.paint;
                }
                return a.paint.lerp(b.paint, (t - a.offset) / span);
            }
        }
        last.paint
    }
}

/// Inclusive-exclusive pixel range covering `[min, max]`, clipped to `[0, size)`.
fn clip_span(min: f64, max: f64, size: u32) -> std::ops::Range<u32> {
    let lo = min.floor().max(0.0);
    let hi = (max.ceil() + 1.0).min(f64::from(size));
    if hi <= lo {
        return 0..0;
    }
    lo as u32..hi as u32
}

/// Fill a rotated ellipse centered on `(cx, cy)` with semi-axes `rx`, `ry`.
///
/// `rotation` is in radians, clockwise in image space (y down).
pub fn fill_ellipse(
    pixmap: &mut Pixmap,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    rotation: f64,
    paint: Paint,
) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let (sin, cos) = rotation.sin_cos();
    let half_w = ((rx * cos).powi(2) + (ry * sin).powi(2)).sqrt();
    let half_h = ((rx * sin).powi(2) + (ry * cos).powi(2)).sqrt();
    let size = pixmap.size();

    for y in clip_span(cy - half_h, cy + half_h, size) {
        let dy = f64::from(y) + 0.5 - cy;
        for x in clip_span(cx - half_w, cx + half_w, size) {
            let dx = f64::from(x) + 0.5 - cx;
            // Rotate the sample into the ellipse's local frame.
            let u = dx * cos + dy * sin;
            let v = -dx * sin + dy * cos;
            if (u / rx).powi(2) + (v / ry).powi(2) <= 1.0 {
                pixmap.blend_pixel(x, y, paint);
            }
        }
    }
}

/// Composite a radial gradient over the pixels within its radius.
///
/// Pixels outside the radius would receive the last stop; callers use a
/// transparent last stop, so those pixels are skipped.
pub fn fill_radial(pixmap: &mut Pixmap, gradient: &RadialGradient) {
    if gradient.radius <= 0.0 {
        return;
    }
    let size = pixmap.size();
    let r = gradient.radius;
    for y in clip_span(gradient.cy - r, gradient.cy + r, size) {
        let dy = f64::from(y) + 0.5 - gradient.cy;
        for x in clip_span(gradient.cx - r, gradient.cx + r, size) {
            let dx = f64::from(x) + 0.5 - gradient.cx;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > r {
                continue;
            }
            let paint = gradient.paint_at((dist / r) as f32);
            pixmap.blend_pixel(x, y, paint);
        }
    }
}

/// Stroke a circle outline of the given line `width`.
pub fn stroke_circle(
    pixmap: &mut Pixmap,
    cx: f64,
    cy: f64,
    radius: f64,
    width: f64,
    paint: Paint,
) {
    let half = width / 2.0;
    let outer = radius + half;
    let size = pixmap.size();
    for y in clip_span(cy - outer, cy + outer, size) {
        let dy = f64::from(y) + 0.5 - cy;
        for x in clip_span(cx - outer, cx + outer, size) {
            let dx = f64::from(x) + 0.5 - cx;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - radius).abs() <= half {
                pixmap.blend_pixel(x, y, paint);
            }
        }
    }
}
