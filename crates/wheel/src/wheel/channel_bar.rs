use super::state::ColorWheel;
use crate::color::Rgba;

/// Contract for the companion channel-adjustment bar.
///
/// The wheel holds the bar through a non-owning link and only ever calls it
/// from the UI thread, so methods take `&self`; implementations are expected
/// to use interior mutability (`Cell`/`RefCell`), which keeps re-entrant
/// wheel↔bar calls sound.
pub trait ChannelBar {
    /// Replace the bar's current color.
    fn set_color(&self, color: Rgba);

    /// The color the bar currently shows. The wheel compares against this
    /// before pushing an update, which is what breaks the wheel→bar→wheel
    /// feedback loop.
    fn color(&self) -> Rgba;

    /// Called once on attachment. The bar keeps the handle and routes user
    /// edits back through [`ColorWheel::set_color`].
    fn bind_wheel(&self, wheel: ColorWheel);
}
