//! Panel configuration.
//!
//! All of it is caller owned. The panel factory only borrows it while
//! constructing; a caller supplied init table is kept by reference for as
//! long as the panel lives.

use crate::command::InitCommand;

/// Video timing of an RGB panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbTiming {
    pub pclk_hz: u32,
    pub h_res: u16,
    pub v_res: u16,
    pub hsync_pulse_width: u16,
    pub hsync_back_porch: u16,
    pub hsync_front_porch: u16,
    pub vsync_pulse_width: u16,
    pub vsync_back_porch: u16,
    pub vsync_front_porch: u16,
}

impl RgbTiming {
    pub const fn new(h_res: u16, v_res: u16) -> Self {
        Self {
            pclk_hz: 0,
            h_res,
            v_res,
            hsync_pulse_width: 0,
            hsync_back_porch: 0,
            hsync_front_porch: 0,
            vsync_pulse_width: 0,
            vsync_back_porch: 0,
            vsync_front_porch: 0,
        }
    }

    #[must_use]
    pub const fn pclk_hz(mut self, pclk_hz: u32) -> Self {
        self.pclk_hz = pclk_hz;
        self
    }

    /// Pulse width, back porch and front porch of HSYNC, in pixel clocks
    #[must_use]
    pub const fn hsync(mut self, pulse_width: u16, back_porch: u16, front_porch: u16) -> Self {
        self.hsync_pulse_width = pulse_width;
        self.hsync_back_porch = back_porch;
        self.hsync_front_porch = front_porch;
        self
    }

    /// Pulse width, back porch and front porch of VSYNC, in lines
    #[must_use]
    pub const fn vsync(mut self, pulse_width: u16, back_porch: u16, front_porch: u16) -> Self {
        self.vsync_pulse_width = pulse_width;
        self.vsync_back_porch = back_porch;
        self.vsync_front_porch = front_porch;
        self
    }

    pub const fn h_total(&self) -> u32 {
        self.h_res as u32
            + self.hsync_pulse_width as u32
            + self.hsync_back_porch as u32
            + self.hsync_front_porch as u32
    }

    pub const fn v_total(&self) -> u32 {
        self.v_res as u32
            + self.vsync_pulse_width as u32
            + self.vsync_back_porch as u32
            + self.vsync_front_porch as u32
    }

    /// Frames per second at the configured pixel clock, rounded down
    pub const fn refresh_hz(&self) -> u32 {
        let frame = self.h_total() * self.v_total();
        if frame == 0 {
            0
        } else {
            self.pclk_hz / frame
        }
    }
}

/// Everything the generic RGB panel needs: timing, frame buffers and pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbPanelConfig<'a> {
    pub timing: RgbTiming,
    /// Number of data lines, 16 or 24 usually
    pub data_width: u8,
    pub num_fbs: u8,
    /// Zero disables bounce buffering
    pub bounce_buffer_size_px: usize,
    pub dma_burst_size: usize,
    /// Dedicated display enable line. Without it, display on/off is done by
    /// command.
    pub disp_gpio: Option<u8>,
    pub pclk_gpio: u8,
    pub vsync_gpio: u8,
    pub hsync_gpio: u8,
    pub de_gpio: Option<u8>,
    pub data_gpios: &'a [u8],
}

impl<'a> RgbPanelConfig<'a> {
    pub const fn new(timing: RgbTiming, data_gpios: &'a [u8]) -> Self {
        Self {
            timing,
            data_width: data_gpios.len() as u8,
            num_fbs: 1,
            bounce_buffer_size_px: 0,
            dma_burst_size: 64,
            disp_gpio: None,
            pclk_gpio: 0,
            vsync_gpio: 0,
            hsync_gpio: 0,
            de_gpio: None,
            data_gpios,
        }
    }

    #[must_use]
    pub const fn num_fbs(mut self, num_fbs: u8) -> Self {
        self.num_fbs = num_fbs;
        self
    }

    #[must_use]
    pub const fn bounce_buffer_size_px(mut self, size: usize) -> Self {
        self.bounce_buffer_size_px = size;
        self
    }

    #[must_use]
    pub const fn dma_burst_size(mut self, size: usize) -> Self {
        self.dma_burst_size = size;
        self
    }

    #[must_use]
    pub const fn disp_gpio(mut self, pin: Option<u8>) -> Self {
        self.disp_gpio = pin;
        self
    }

    /// PCLK, VSYNC, HSYNC and DE lines
    #[must_use]
    pub const fn sync_gpios(mut self, pclk: u8, vsync: u8, hsync: u8, de: Option<u8>) -> Self {
        self.pclk_gpio = pclk;
        self.vsync_gpio = vsync;
        self.hsync_gpio = hsync;
        self.de_gpio = de;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VendorFlags {
    /// Mirror through SDIR/MADCTL instead of the RGB panel
    pub mirror_by_cmd: bool,
    /// The command bus shares pins with the RGB bus. Init commands are then
    /// sent before the RGB panel is created.
    pub enable_io_multiplex: bool,
    /// Release the command channel right after the multiplexed bring-up
    pub auto_del_panel_io: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VendorConfig<'a> {
    /// Replaces the built-in init table of the vendor when set
    pub init_cmds: Option<&'a [InitCommand<'a>]>,
    pub rgb_config: Option<&'a RgbPanelConfig<'a>>,
    pub flags: VendorFlags,
}

impl<'a> VendorConfig<'a> {
    pub const fn new(rgb_config: &'a RgbPanelConfig<'a>) -> Self {
        Self {
            init_cmds: None,
            rgb_config: Some(rgb_config),
            flags: VendorFlags {
                mirror_by_cmd: false,
                enable_io_multiplex: false,
                auto_del_panel_io: false,
            },
        }
    }
}

/// General panel device configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelDevConfig<'a> {
    pub reset_gpio: Option<u8>,
    /// Raw colour element order, see [`ElementOrder`](crate::color::ElementOrder)
    pub rgb_ele_order: u8,
    pub bits_per_pixel: u8,
    pub reset_active_high: bool,
    pub vendor_config: Option<&'a VendorConfig<'a>>,
}

impl<'a> PanelDevConfig<'a> {
    pub const fn new(vendor_config: &'a VendorConfig<'a>) -> Self {
        Self {
            reset_gpio: None,
            rgb_ele_order: 0,
            bits_per_pixel: 16,
            reset_active_high: false,
            vendor_config: Some(vendor_config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_totals() {
        let t = RgbTiming::new(720, 720)
            .pclk_hz(15_000_000)
            .hsync(2, 44, 46)
            .vsync(5, 15, 16);
        assert_eq!(t.h_total(), 812);
        assert_eq!(t.v_total(), 756);
        assert_eq!(t.refresh_hz(), 15_000_000 / (812 * 756));
    }

    #[test]
    fn zero_timing_has_no_refresh() {
        assert_eq!(RgbTiming::new(0, 0).refresh_hz(), 0);
    }

    #[test]
    fn data_width_follows_pins() {
        let pins = [1, 2, 3, 4, 5, 6, 7, 8, 13, 14, 15, 16, 17, 18, 19, 20];
        let cfg = RgbPanelConfig::new(RgbTiming::new(640, 480), &pins);
        assert_eq!(cfg.data_width, 16);
        assert_eq!(cfg.disp_gpio, None);
    }
}
