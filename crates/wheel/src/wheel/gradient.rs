use crate::color::{Hsv, Rgba};
use std::f32::consts::TAU;

/// The sweep gradient stops for one full revolution, in traversal order.
/// The first and last entries are the same red, so interpolation meets
/// itself seamlessly at the wrap boundary.
pub const SWEEP_STOPS: [Rgba; 7] = [
    Rgba::from_argb(0xFFFF_0000),
    Rgba::from_argb(0xFFFF_00FF),
    Rgba::from_argb(0xFF00_00FF),
    Rgba::from_argb(0xFF00_FFFF),
    Rgba::from_argb(0xFF00_FF00),
    Rgba::from_argb(0xFFFF_FF00),
    Rgba::from_argb(0xFFFF_0000),
];

/// Maps an angle in radians to the wheel color at that position.
///
/// The angle is normalized to a unit fraction in `[0,1)` along the stop
/// sequence. Out-of-range fractions clamp to the terminal stops rather than
/// wrapping; since both terminals are the same red this is invisible on the
/// wheel itself.
pub fn color_at_angle(angle: f32) -> Rgba {
    let mut unit = angle / TAU;
    if unit < 0.0 {
        unit += 1.0;
    }

    if unit <= 0.0 {
        return SWEEP_STOPS[0];
    }
    if unit >= 1.0 {
        return SWEEP_STOPS[SWEEP_STOPS.len() - 1];
    }

    let p = unit * (SWEEP_STOPS.len() - 1) as f32;
    let i = p as usize;
    let t = p - i as f32;
    let start = SWEEP_STOPS[i];
    let end = SWEEP_STOPS[i + 1];

    Rgba {
        r: mix_component(start.r, end.r, t),
        g: mix_component(start.g, end.g, t),
        b: mix_component(start.b, end.b, t),
        a: mix_component(start.a, end.a, t),
    }
}

/// Maps a color back to an angle through its HSV hue.
///
/// Not the exact inverse of [`color_at_angle`]: the forward direction
/// interpolates in raw RGB across stops that are not evenly hue-spaced, while
/// this direction reads hue directly. The two agree on the stops themselves
/// and stay close in between.
pub fn angle_for_color(color: Rgba) -> f32 {
    -Hsv::from_rgba(color).h.to_radians()
}

fn mix_component(start: u8, end: u8, t: f32) -> u8 {
    (start as i32 + (t * (end as i32 - start as i32) as f32).round() as i32) as u8
}
