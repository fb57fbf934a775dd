pub mod sizing {
    pub const WHEEL_SIDE_XSMALL: f32 = 140.0;
    pub const WHEEL_SIDE_SMALL: f32 = 180.0;
    pub const WHEEL_SIDE_MEDIUM: f32 = 220.0;
    pub const WHEEL_SIDE_LARGE: f32 = 280.0;

    pub const POINTER_RADIUS: f32 = 10.0;
    pub const POINTER_HALO_WIDTH: f32 = 2.0;
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum WheelSize {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    Side(f32),
}

impl WheelSize {
    pub fn side_px(self) -> f32 {
        match self {
            WheelSize::XSmall => sizing::WHEEL_SIDE_XSMALL,
            WheelSize::Small => sizing::WHEEL_SIDE_SMALL,
            WheelSize::Medium => sizing::WHEEL_SIDE_MEDIUM,
            WheelSize::Large => sizing::WHEEL_SIDE_LARGE,
            WheelSize::Side(px) => px,
        }
    }
}

impl From<f32> for WheelSize {
    fn from(side_px: f32) -> Self {
        WheelSize::Side(side_px)
    }
}

/// Pixel metrics of a wheel instance, derived from its side length.
///
/// The track radius leaves room for the pointer glyph and its halo to ride
/// the track without clipping the component bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelMetrics {
    pub side: f32,
    pub wheel_radius: f32,
    pub track_width: f32,
    pub pointer_radius: f32,
    pub halo_width: f32,
}

impl WheelMetrics {
    pub fn for_side(side: f32) -> Self {
        let pointer_radius = sizing::POINTER_RADIUS;
        let halo_width = sizing::POINTER_HALO_WIDTH;
        let track_width = pointer_radius / 2.0;
        let wheel_radius = (side / 2.0 - track_width - pointer_radius - halo_width).max(0.0);

        Self {
            side,
            wheel_radius,
            track_width,
            pointer_radius,
            halo_width,
        }
    }

    pub fn for_size(size: WheelSize) -> Self {
        Self::for_side(size.side_px())
    }

    /// Half-width of the square grab window centered on the pointer glyph.
    pub fn grab_half_extent(&self) -> f32 {
        self.pointer_radius + self.halo_width
    }
}

/// Position of the pointer glyph center for an angle, relative to the wheel
/// center.
pub fn pointer_position(angle: f32, radius: f32) -> (f32, f32) {
    (radius * angle.cos(), radius * angle.sin())
}

/// Axis-aligned square window test, edge-inclusive on all four sides.
/// Deliberately a box rather than a circular-distance test.
pub fn grab_box_contains(point: (f32, f32), center: (f32, f32), half_extent: f32) -> bool {
    point.0 >= center.0 - half_extent
        && point.0 <= center.0 + half_extent
        && point.1 >= center.1 - half_extent
        && point.1 <= center.1 + half_extent
}
