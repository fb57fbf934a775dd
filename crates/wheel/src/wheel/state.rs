use super::channel_bar::ChannelBar;
use super::geometry::{self, WheelMetrics, WheelSize};
use super::gradient;
use crate::color::Rgba;
use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::{Rc, Weak};

const HUE_STEP_DEGREES: f32 = 1.0;

type ColorChangeListener = dyn FnMut(Rgba);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Up,
    Right,
    Down,
}

impl NudgeDirection {
    fn angle_sign(self) -> f32 {
        match self {
            NudgeDirection::Left | NudgeDirection::Up => -1.0,
            NudgeDirection::Right | NudgeDirection::Down => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NudgeModifiers {
    pub shift: bool,
    pub alt: bool,
}

impl NudgeModifiers {
    fn multiplier(self) -> f32 {
        if self.shift {
            10.0
        } else if self.alt {
            0.1
        } else {
            1.0
        }
    }
}

/// Plain-data snapshot of one redraw cycle, consumed by the rendering
/// adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelFrame {
    pub color: Rgba,
    pub pointer_center: (f32, f32),
    pub dragging: bool,
}

struct WheelState {
    angle: f32,
    color: Rgba,
    last_notified: Rgba,
    dragging: bool,
    grab_offset: (f32, f32),
    metrics: WheelMetrics,
    listener: Option<Rc<RefCell<ColorChangeListener>>>,
    channel_bar: Option<Weak<dyn ChannelBar>>,
    needs_redraw: bool,
}

/// The hue-wheel control core: gradient mapping, pointer-drag state machine,
/// and change notification in one handle.
///
/// Cloning is cheap and clones share state; the handle is intentionally not
/// `Send`. Pointer coordinates are expected in wheel-center-relative space.
/// State borrows are never held across calls into the listener or the
/// channel bar, so both may re-enter any public operation.
#[derive(Clone)]
pub struct ColorWheel {
    state: Rc<RefCell<WheelState>>,
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self::new(WheelSize::default())
    }
}

impl ColorWheel {
    pub const SEED_COLOR: Rgba = Rgba::from_argb(0xFF39_C5BB);

    pub fn new(size: impl Into<WheelSize>) -> Self {
        let wheel = Self {
            state: Rc::new(RefCell::new(WheelState {
                angle: 0.0,
                color: Rgba::default(),
                last_notified: Rgba::default(),
                dragging: false,
                grab_offset: (0.0, 0.0),
                metrics: WheelMetrics::for_size(size.into()),
                listener: None,
                channel_bar: None,
                needs_redraw: false,
            })),
        };
        wheel.set_color(Self::SEED_COLOR);
        wheel
    }

    pub fn with_size(self, size: impl Into<WheelSize>) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.metrics = WheelMetrics::for_size(size.into());
            state.needs_redraw = true;
        }
        self
    }

    pub fn seed_color(self, color: Rgba) -> Self {
        self.set_color(color);
        self
    }

    pub fn color(&self) -> Rgba {
        self.state.borrow().color
    }

    pub fn angle(&self) -> f32 {
        self.state.borrow().angle
    }

    pub fn is_dragging(&self) -> bool {
        self.state.borrow().dragging
    }

    pub fn metrics(&self) -> WheelMetrics {
        self.state.borrow().metrics
    }

    pub fn needs_redraw(&self) -> bool {
        self.state.borrow().needs_redraw
    }

    /// Set the current color. Alpha is forced to fully opaque, the angle is
    /// recomputed through the hue inverse, and the companion bar is brought
    /// in sync.
    pub fn set_color(&self, color: Rgba) {
        {
            let mut state = self.state.borrow_mut();
            state.color = color.opaque();
            state.angle = gradient::angle_for_color(state.color);
            state.needs_redraw = true;
        }
        self.sync_channel_bar();
    }

    /// Replace the color-change listener. Single slot: any previous listener
    /// is dropped.
    pub fn set_color_change_listener(&self, listener: impl FnMut(Rgba) + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(RefCell::new(listener)));
    }

    pub fn clear_color_change_listener(&self) {
        self.state.borrow_mut().listener = None;
    }

    /// Bind a companion channel bar: the wheel keeps a non-owning link, hands
    /// the bar a back-reference handle, and pushes the current color.
    pub fn attach_channel_bar<B>(&self, bar: &Rc<B>)
    where
        B: ChannelBar + 'static,
    {
        let link: Rc<dyn ChannelBar> = bar.clone();
        self.state.borrow_mut().channel_bar = Some(Rc::downgrade(&link));
        tracing::debug!("channel bar attached");
        bar.bind_wheel(self.clone());
        bar.set_color(self.color());
    }

    /// Press at wheel-center-relative `(x, y)`. Returns whether the press
    /// landed on the pointer glyph and started a drag.
    pub fn pointer_pressed(&self, x: f32, y: f32) -> bool {
        let accepted = {
            let mut state = self.state.borrow_mut();
            let pointer = geometry::pointer_position(state.angle, state.metrics.wheel_radius);
            let hit = geometry::grab_box_contains(
                (x, y),
                pointer,
                state.metrics.grab_half_extent(),
            );
            if hit {
                state.grab_offset = (x - pointer.0, y - pointer.1);
                state.dragging = true;
                state.needs_redraw = true;
            }
            hit
        };
        tracing::trace!(accepted, "pointer press");
        self.sync_channel_bar();
        accepted
    }

    /// Move to wheel-center-relative `(x, y)`. Ignored outside a drag.
    pub fn pointer_moved(&self, x: f32, y: f32) {
        {
            let mut state = self.state.borrow_mut();
            if state.dragging {
                // The grab offset stays as captured at press time; it biases
                // the whole drag rather than tracking move-to-move deltas.
                state.angle = (y - state.grab_offset.1).atan2(x - state.grab_offset.0);
                state.color = gradient::color_at_angle(state.angle);
                state.needs_redraw = true;
            }
        }
        self.sync_channel_bar();
    }

    /// End the drag. Angle and color keep their last value.
    pub fn pointer_released(&self) {
        self.end_drag();
    }

    /// Identical to release for state purposes; nothing is rolled back.
    pub fn pointer_cancelled(&self) {
        self.end_drag();
    }

    /// Step the angle from the keyboard: one hue degree per press, ×10 with
    /// shift, ×0.1 with alt, wrapping modulo one revolution. Ignored during
    /// an active drag.
    pub fn nudge(&self, direction: NudgeDirection, modifiers: NudgeModifiers) {
        {
            let mut state = self.state.borrow_mut();
            if state.dragging {
                return;
            }
            let step = (HUE_STEP_DEGREES * modifiers.multiplier()).to_radians();
            state.angle = (state.angle + direction.angle_sign() * step).rem_euclid(TAU);
            state.color = gradient::color_at_angle(state.angle);
            state.needs_redraw = true;
        }
        self.sync_channel_bar();
    }

    /// Run one redraw cycle: dispatch the change notification if the color
    /// moved since the last cycle, clear the pending-redraw flag, and return
    /// the frame snapshot for the adapter.
    pub fn redraw(&self) -> WheelFrame {
        let (frame, listener) = {
            let mut state = self.state.borrow_mut();
            state.needs_redraw = false;
            let listener = if state.color != state.last_notified {
                // Update before invoking, so a re-entrant listener never sees
                // the stale last-notified value.
                state.last_notified = state.color;
                state.listener.clone()
            } else {
                None
            };
            let frame = WheelFrame {
                color: state.color,
                pointer_center: geometry::pointer_position(
                    state.angle,
                    state.metrics.wheel_radius,
                ),
                dragging: state.dragging,
            };
            (frame, listener)
        };
        if let Some(listener) = listener {
            tracing::trace!(color = %frame.color, "color change notified");
            (&mut *listener.borrow_mut())(frame.color);
        }
        frame
    }

    fn end_drag(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.dragging = false;
            state.needs_redraw = true;
        }
        self.sync_channel_bar();
    }

    fn sync_channel_bar(&self) {
        let (link, color) = {
            let state = self.state.borrow();
            (state.channel_bar.clone(), state.color)
        };
        let Some(bar) = link.and_then(|weak| weak.upgrade()) else {
            return;
        };
        if bar.color() != color {
            bar.set_color(color);
        }
    }
}
