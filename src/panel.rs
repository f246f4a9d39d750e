//! The panel lifecycle interface.
//!
//! The generic RGB panel implements it, and so does every vendor panel
//! wrapping one, so the application drives both the same way.

use crate::config::RgbPanelConfig;

/// Lifecycle operations, used as context when a wrapped panel fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    New,
    Init,
    Delete,
    Reset,
    Mirror,
    DispOnOff,
    DrawBitmap,
}

pub trait Panel {
    type Error;

    fn init(&mut self) -> Result<(), Self::Error>;

    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Mirror along the x and/or y axis
    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error>;

    fn disp_on_off(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Copy `data` into the frame buffer area `[x_start, x_end) x [y_start, y_end)`
    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
    ) -> Result<(), Self::Error>;

    /// Tear the panel down and give back everything it claimed.
    fn delete(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}

/// Constructs the generic RGB panel a vendor panel wraps.
///
/// Implemented for closures, so `|cfg| MyRgbPanel::new(cfg)` works.
pub trait RgbPanelBuilder<'a> {
    type Panel: Panel;

    fn build(
        self,
        config: RgbPanelConfig<'a>,
    ) -> Result<Self::Panel, <Self::Panel as Panel>::Error>;
}

impl<'a, F, P> RgbPanelBuilder<'a> for F
where
    F: FnOnce(RgbPanelConfig<'a>) -> Result<P, P::Error>,
    P: Panel,
{
    type Panel = P;

    fn build(self, config: RgbPanelConfig<'a>) -> Result<P, P::Error> {
        self(config)
    }
}
