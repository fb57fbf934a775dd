//! Core of a circular hue-selection control: a fixed sweep gradient the user
//! rotates a pointer around to pick a color.
//!
//! The crate covers the parts with real logic — the angle↔color mapping over
//! the stop table, the pointer-drag state machine with grab-offset
//! preservation, and change notification that fires once per distinct color
//! and keeps an optional companion channel bar in sync without feedback
//! loops. Drawing and input-event dispatch belong to a thin adapter layer on
//! top; the adapter feeds wheel-center-relative pointer events in and paints
//! from the [`WheelFrame`] snapshot each [`ColorWheel::redraw`] returns.

mod color;
pub mod wheel;

pub use color::{Hsv, Rgba};
pub use wheel::{
    angle_for_color, color_at_angle, pointer_position, sizing, ChannelBar, ColorWheel,
    NudgeDirection, NudgeModifiers, WheelFrame, WheelMetrics, WheelSize, SWEEP_STOPS,
};
