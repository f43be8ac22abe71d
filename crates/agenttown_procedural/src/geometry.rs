//! # Town Geometry
//!
//! The fixed terrain features every layout is carved around:
//!
//! - A sine-shaped river running west to east.
//! - Two straight north-south roads (the west and east strips).
//! - Two curved east-west roads, each a quadratic Bézier in `y` over a
//!   parameter derived from `x`.
//!
//! Everything here is a pure function of its arguments. Paddings are
//! supplied by the caller because each entity category keeps a different
//! distance from the same features.

/// Mean y of the river centerline.
pub const RIVER_BASE_Y: f64 = 1100.0;
/// Peak deviation of the river from its mean.
pub const RIVER_AMPLITUDE: f64 = 300.0;
/// Horizontal scale of the river's meander (radians per unit is 1 / this).
pub const RIVER_WAVELENGTH: f64 = 600.0;

/// x of the west road strip.
pub const WEST_ROAD_X: f64 = 600.0;
/// x of the east road strip.
pub const EAST_ROAD_X: f64 = 1800.0;

/// Shift applied to x before normalising it into a curve parameter.
pub const CURVE_T_OFFSET: f64 = 200.0;
/// Span of x mapped onto the curve parameter range [0, 1].
pub const CURVE_T_SPAN: f64 = 2800.0;

/// Control values (start, control, end) of the north road.
pub const NORTH_ROAD: [f64; 3] = [450.0, 750.0, 450.0];
/// Control values (start, control, end) of the south road.
pub const SOUTH_ROAD: [f64; 3] = [1900.0, 1600.0, 1900.0];

/// One of the four roads structures are placed along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoadFeature {
    /// Curved road through the northern part of town.
    NorthCurve,
    /// Curved road through the southern part of town.
    SouthCurve,
    /// Straight road at [`WEST_ROAD_X`].
    WestStrip,
    /// Straight road at [`EAST_ROAD_X`].
    EastStrip,
}

impl RoadFeature {
    /// All roads, in sampling order.
    pub const ALL: [Self; 4] = [
        Self::NorthCurve,
        Self::SouthCurve,
        Self::WestStrip,
        Self::EastStrip,
    ];

    /// Returns whether the road runs east-west (and is therefore curved).
    #[must_use]
    pub const fn is_curve(self) -> bool {
        matches!(self, Self::NorthCurve | Self::SouthCurve)
    }
}

/// y of the river centerline at `x`.
#[inline]
#[must_use]
pub fn river_centerline(x: f64) -> f64 {
    RIVER_BASE_Y + RIVER_AMPLITUDE * (x / RIVER_WAVELENGTH).sin()
}

/// Returns whether `(x, y)` is strictly closer than `padding` (vertically)
/// to the river centerline.
#[inline]
#[must_use]
pub fn is_near_river(x: f64, y: f64, padding: f64) -> bool {
    (y - river_centerline(x)).abs() < padding
}

/// Evaluates a one-dimensional quadratic Bézier with control values
/// `a`, `b`, `c` at parameter `t`.
#[inline]
#[must_use]
pub fn road_y(t: f64, a: f64, b: f64, c: f64) -> f64 {
    let u = 1.0 - t;
    u * u * a + 2.0 * u * t * b + t * t * c
}

/// Curve parameter for world x. Not clamped: x outside the map
/// extrapolates the curve.
#[inline]
#[must_use]
pub fn curve_param(x: f64) -> f64 {
    (x + CURVE_T_OFFSET) / CURVE_T_SPAN
}

/// y of the north road at `x`.
#[inline]
#[must_use]
pub fn north_road_y(x: f64) -> f64 {
    let [a, b, c] = NORTH_ROAD;
    road_y(curve_param(x), a, b, c)
}

/// y of the south road at `x`.
#[inline]
#[must_use]
pub fn south_road_y(x: f64) -> f64 {
    let [a, b, c] = SOUTH_ROAD;
    road_y(curve_param(x), a, b, c)
}

/// Returns whether `(x, y)` lies strictly inside any road corridor of
/// half-width `padding`.
#[must_use]
pub fn is_on_road(x: f64, y: f64, padding: f64) -> bool {
    (x - WEST_ROAD_X).abs() < padding
        || (x - EAST_ROAD_X).abs() < padding
        || (y - north_road_y(x)).abs() < padding
        || (y - south_road_y(x)).abs() < padding
}
