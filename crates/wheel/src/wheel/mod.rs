pub mod channel_bar;
pub mod geometry;
pub mod gradient;
pub mod state;

pub use channel_bar::ChannelBar;
pub use geometry::{pointer_position, sizing, WheelMetrics, WheelSize};
pub use gradient::{angle_for_color, color_at_angle, SWEEP_STOPS};
pub use state::{ColorWheel, NudgeDirection, NudgeModifiers, WheelFrame};
