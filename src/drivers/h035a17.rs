//! H035A17 module
//!
//! 3.5" 640 x 480 module on an NV3052 family controller. Only the init table
//! is vendor specific; mirroring and display on/off are not supported by
//! command and are accepted as no-ops.

use embedded_hal::delay::DelayNs;

use super::{ResetPulse, Vendor};
use crate::command::InitCommand;
use crate::config::{PanelDevConfig, RgbTiming};
use crate::error::PanelError;
use crate::gpio::Gpio;
use crate::interface::CommandChannel;
use crate::panel::{Panel, RgbPanelBuilder};
use crate::VendorPanel;

pub struct H035A17;

impl Vendor for H035A17 {
    const NAME: &'static str = "h035a17";

    const INIT_COMMANDS: &'static [InitCommand<'static>] = INIT_COMMANDS;

    const TIMING: RgbTiming = RgbTiming::new(640, 480)
        .pclk_hz(20_000_000)
        .hsync(23, 20, 20)
        .vsync(2, 6, 12);

    const MULTIPLEX_RESET: ResetPulse = ResetPulse {
        hold_ms: 1,
        release_ms: 10,
    };
}

pub type H035a17Panel<'a, CI, G, D, P> = VendorPanel<'a, H035A17, CI, G, D, P>;

/// Create a H035A17 panel, see [`VendorPanel::new`].
pub fn new_panel<'a, CI, G, D, B>(
    channel: CI,
    gpio: G,
    delay: D,
    config: &PanelDevConfig<'a>,
    builder: B,
) -> Result<H035a17Panel<'a, CI, G, D, B::Panel>, PanelError<<B::Panel as Panel>::Error>>
where
    CI: CommandChannel,
    G: Gpio,
    D: DelayNs,
    B: RgbPanelBuilder<'a>,
{
    VendorPanel::new(channel, gpio, delay, config, builder)
}

#[rustfmt::skip]
pub const INIT_COMMANDS: &[InitCommand<'static>] = &[
    // page 1
    InitCommand::new(0xff, &[0x30], 0),
    InitCommand::new(0xff, &[0x52], 0),
    InitCommand::new(0xff, &[0x01], 0),
    InitCommand::new(0xe3, &[0x00], 0),
    InitCommand::new(0x40, &[0x00], 0),
    InitCommand::new(0x03, &[0x40], 0),
    InitCommand::new(0x04, &[0x00], 0),
    InitCommand::new(0x05, &[0x03], 0),
    InitCommand::new(0x08, &[0x00], 0),
    InitCommand::new(0x09, &[0x07], 0),
    InitCommand::new(0x0a, &[0x01], 0),
    InitCommand::new(0x0b, &[0x32], 0),
    InitCommand::new(0x0c, &[0x32], 0),
    InitCommand::new(0x0d, &[0x0b], 0),
    InitCommand::new(0x0e, &[0x00], 0),
    InitCommand::new(0x23, &[0xa2], 0),
    InitCommand::new(0x24, &[0x0c], 0),
    InitCommand::new(0x25, &[0x06], 0),
    InitCommand::new(0x26, &[0x14], 0),
    InitCommand::new(0x27, &[0x14], 0),
    InitCommand::new(0x38, &[0x9c], 0),
    InitCommand::new(0x39, &[0xa7], 0),
    InitCommand::new(0x28, &[0x40], 0),
    InitCommand::new(0x29, &[0x01], 0),
    InitCommand::new(0x2a, &[0xdf], 0),
    InitCommand::new(0x49, &[0x3c], 0),
    InitCommand::new(0x91, &[0x57], 0),
    InitCommand::new(0x92, &[0x57], 0),
    InitCommand::new(0xa0, &[0x55], 0),
    InitCommand::new(0xa1, &[0x50], 0),
    InitCommand::new(0xa4, &[0x9c], 0),
    InitCommand::new(0xa7, &[0x02], 0),
    InitCommand::new(0xa8, &[0x01], 0),
    InitCommand::new(0xa9, &[0x01], 0),
    InitCommand::new(0xaa, &[0xfc], 0),
    InitCommand::new(0xab, &[0x28], 0),
    InitCommand::new(0xac, &[0x06], 0),
    InitCommand::new(0xad, &[0x06], 0),
    InitCommand::new(0xae, &[0x06], 0),
    InitCommand::new(0xaf, &[0x03], 0),
    InitCommand::new(0xb0, &[0x08], 0),
    InitCommand::new(0xb1, &[0x26], 0),
    InitCommand::new(0xb2, &[0x28], 0),
    InitCommand::new(0xb3, &[0x28], 0),
    InitCommand::new(0xb4, &[0x03], 0),
    InitCommand::new(0xb5, &[0x08], 0),
    InitCommand::new(0xb6, &[0x26], 0),
    InitCommand::new(0xb7, &[0x08], 0),
    InitCommand::new(0xb8, &[0x26], 0),
    InitCommand::new(0xf0, &[0x00], 0),
    InitCommand::new(0xf6, &[0xc0], 0),

    // page 2
    InitCommand::new(0xff, &[0x30], 0),
    InitCommand::new(0xff, &[0x52], 0),
    InitCommand::new(0xff, &[0x02], 0),
    InitCommand::new(0xb0, &[0x0b], 0),
    InitCommand::new(0xb1, &[0x16], 0),
    InitCommand::new(0xb2, &[0x17], 0),
    InitCommand::new(0xb3, &[0x2c], 0),
    InitCommand::new(0xb4, &[0x32], 0),
    InitCommand::new(0xb5, &[0x3b], 0),
    InitCommand::new(0xb6, &[0x29], 0),
    InitCommand::new(0xb7, &[0x40], 0),
    InitCommand::new(0xb8, &[0x0d], 0),
    InitCommand::new(0xb9, &[0x05], 0),
    InitCommand::new(0xba, &[0x12], 0),
    InitCommand::new(0xbb, &[0x10], 0),
    InitCommand::new(0xbc, &[0x12], 0),
    InitCommand::new(0xbd, &[0x15], 0),
    InitCommand::new(0xbe, &[0x19], 0),
    InitCommand::new(0xbf, &[0x0e], 0),
    InitCommand::new(0xc0, &[0x16], 0),
    InitCommand::new(0xc1, &[0x0a], 0),
    InitCommand::new(0xd0, &[0x0c], 0),
    InitCommand::new(0xd1, &[0x17], 0),
    InitCommand::new(0xd2, &[0x14], 0),
    InitCommand::new(0xd3, &[0x2e], 0),
    InitCommand::new(0xd4, &[0x32], 0),
    InitCommand::new(0xd5, &[0x3c], 0),
    InitCommand::new(0xd6, &[0x22], 0),
    InitCommand::new(0xd7, &[0x3d], 0),
    InitCommand::new(0xd8, &[0x0d], 0),
    InitCommand::new(0xd9, &[0x07], 0),
    InitCommand::new(0xda, &[0x13], 0),
    InitCommand::new(0xdb, &[0x13], 0),
    InitCommand::new(0xdc, &[0x11], 0),
    InitCommand::new(0xdd, &[0x15], 0),
    InitCommand::new(0xde, &[0x19], 0),
    InitCommand::new(0xdf, &[0x10], 0),
    InitCommand::new(0xe0, &[0x17], 0),
    InitCommand::new(0xe1, &[0x0a], 0),

    // page 3
    InitCommand::new(0xff, &[0x30], 0),
    InitCommand::new(0xff, &[0x52], 0),
    InitCommand::new(0xff, &[0x03], 0),
    InitCommand::new(0x00, &[0x2a], 0),
    InitCommand::new(0x01, &[0x2a], 0),
    InitCommand::new(0x02, &[0x2a], 0),
    InitCommand::new(0x03, &[0x2a], 0),
    InitCommand::new(0x04, &[0x61], 0),
    InitCommand::new(0x05, &[0x80], 0),
    InitCommand::new(0x06, &[0xc7], 0),
    InitCommand::new(0x07, &[0x01], 0),
    InitCommand::new(0x08, &[0x03], 0),
    InitCommand::new(0x09, &[0x04], 0),
    InitCommand::new(0x70, &[0x22], 0),
    InitCommand::new(0x71, &[0x80], 0),
    InitCommand::new(0x30, &[0x2a], 0),
    InitCommand::new(0x31, &[0x2a], 0),
    InitCommand::new(0x32, &[0x2a], 0),
    InitCommand::new(0x33, &[0x2a], 0),
    InitCommand::new(0x34, &[0x61], 0),
    InitCommand::new(0x35, &[0xc5], 0),
    InitCommand::new(0x36, &[0x80], 0),
    InitCommand::new(0x37, &[0x23], 0),
    InitCommand::new(0x40, &[0x03], 0),
    InitCommand::new(0x41, &[0x04], 0),
    InitCommand::new(0x42, &[0x05], 0),
    InitCommand::new(0x43, &[0x06], 0),
    InitCommand::new(0x44, &[0x11], 0),
    InitCommand::new(0x45, &[0xe8], 0),
    InitCommand::new(0x46, &[0xe9], 0),
    InitCommand::new(0x47, &[0x11], 0),
    InitCommand::new(0x48, &[0xea], 0),
    InitCommand::new(0x49, &[0xeb], 0),
    InitCommand::new(0x50, &[0x07], 0),
    InitCommand::new(0x51, &[0x08], 0),
    InitCommand::new(0x52, &[0x09], 0),
    InitCommand::new(0x53, &[0x0a], 0),
    InitCommand::new(0x54, &[0x11], 0),
    InitCommand::new(0x55, &[0xec], 0),
    InitCommand::new(0x56, &[0xed], 0),
    InitCommand::new(0x57, &[0x11], 0),
    InitCommand::new(0x58, &[0xef], 0),
    InitCommand::new(0x59, &[0xf0], 0),
    InitCommand::new(0xb1, &[0x01], 0),
    InitCommand::new(0xb4, &[0x15], 0),
    InitCommand::new(0xb5, &[0x16], 0),
    InitCommand::new(0xb6, &[0x09], 0),
    InitCommand::new(0xb7, &[0x0f], 0),
    InitCommand::new(0xb8, &[0x0d], 0),
    InitCommand::new(0xb9, &[0x0b], 0),
    InitCommand::new(0xba, &[0x00], 0),
    InitCommand::new(0xc7, &[0x02], 0),
    InitCommand::new(0xca, &[0x17], 0),
    InitCommand::new(0xcb, &[0x18], 0),
    InitCommand::new(0xcc, &[0x0a], 0),
    InitCommand::new(0xcd, &[0x10], 0),
    InitCommand::new(0xce, &[0x0e], 0),
    InitCommand::new(0xcf, &[0x0c], 0),
    InitCommand::new(0xd0, &[0x00], 0),
    InitCommand::new(0x81, &[0x00], 0),
    InitCommand::new(0x84, &[0x15], 0),
    InitCommand::new(0x85, &[0x16], 0),
    InitCommand::new(0x86, &[0x10], 0),
    InitCommand::new(0x87, &[0x0a], 0),
    InitCommand::new(0x88, &[0x0c], 0),
    InitCommand::new(0x89, &[0x0e], 0),
    InitCommand::new(0x8a, &[0x02], 0),
    InitCommand::new(0x97, &[0x00], 0),
    InitCommand::new(0x9a, &[0x17], 0),
    InitCommand::new(0x9b, &[0x18], 0),
    InitCommand::new(0x9c, &[0x0f], 0),
    InitCommand::new(0x9d, &[0x09], 0),
    InitCommand::new(0x9e, &[0x0b], 0),
    InitCommand::new(0x9f, &[0x0d], 0),
    InitCommand::new(0xa0, &[0x01], 0),

    // page 2
    InitCommand::new(0xff, &[0x30], 0),
    InitCommand::new(0xff, &[0x52], 0),
    InitCommand::new(0xff, &[0x02], 0),
    InitCommand::new(0x01, &[0x01], 0),
    InitCommand::new(0x02, &[0xda], 0),
    InitCommand::new(0x03, &[0xba], 0),
    InitCommand::new(0x04, &[0xa8], 0),
    InitCommand::new(0x05, &[0x9a], 0),
    InitCommand::new(0x06, &[0x70], 0),
    InitCommand::new(0x07, &[0xff], 0),
    InitCommand::new(0x08, &[0x91], 0),
    InitCommand::new(0x09, &[0x90], 0),
    InitCommand::new(0x0a, &[0xff], 0),
    InitCommand::new(0x0b, &[0x8f], 0),
    InitCommand::new(0x0c, &[0x60], 0),
    InitCommand::new(0x0d, &[0x58], 0),
    InitCommand::new(0x0e, &[0x48], 0),
    InitCommand::new(0x0f, &[0x38], 0),
    InitCommand::new(0x10, &[0x2b], 0),

    // user command set
    InitCommand::new(0xff, &[0x30], 0),
    InitCommand::new(0xff, &[0x52], 0),
    InitCommand::new(0xff, &[0x00], 0),
    InitCommand::new(0x3a, &[0x77], 0),
    InitCommand::new(0x36, &[0x0a], 0),
    InitCommand::new(0x11, &[], 200),
    InitCommand::new(0x29, &[], 20),
];
