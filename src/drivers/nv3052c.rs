//! NV3052C driver
//!
//! 720 source x 720 gate, 3-wire SPI for setup. The only controller here with
//! full command support: mirroring through SDIR/MADCTL and display on/off by
//! DCS command.
//!
//! The vendor registers live in command-2 pages, unlocked by writing the key
//! `0x30 0x52` and then the page number to `0xff`, one byte at a time. Page 0
//! is the standard user command set.

use embedded_hal::delay::DelayNs;

use super::{Support, Vendor};
use crate::command::{Command, InitCommand};
use crate::config::{PanelDevConfig, RgbTiming};
use crate::error::PanelError;
use crate::gpio::Gpio;
use crate::interface::CommandChannel;
use crate::panel::{Panel, RgbPanelBuilder};
use crate::VendorPanel;

/// 720 x 720, 16/18/24-bit RGB
pub struct NV3052C;

impl Vendor for NV3052C {
    const NAME: &'static str = "nv3052c";

    const INIT_COMMANDS: &'static [InitCommand<'static>] = INIT_COMMANDS;

    const TIMING: RgbTiming = RgbTiming::new(720, 720)
        .pclk_hz(15_000_000)
        .hsync(2, 44, 46)
        .vsync(5, 15, 16);

    const SEND_REGISTER_PREAMBLE: bool = true;
    const DETECT_OVERRIDES: bool = true;
    const MIRROR: Support = Support::Adapted;
    const DISPLAY_ON_OFF: Support = Support::Adapted;

    fn bank_select(command: u8, params: &[u8]) -> Option<bool> {
        if command != u8::from(Command::BankSelect) {
            return None;
        }
        // key bytes 0x30 0x52 count as a private page until the page byte follows
        match params {
            [page] => Some(*page == 0x00),
            _ => None,
        }
    }
}

pub type Nv3052cPanel<'a, CI, G, D, P> = VendorPanel<'a, NV3052C, CI, G, D, P>;

/// Create a NV3052C panel, see [`VendorPanel::new`].
pub fn new_panel<'a, CI, G, D, B>(
    channel: CI,
    gpio: G,
    delay: D,
    config: &PanelDevConfig<'a>,
    builder: B,
) -> Result<Nv3052cPanel<'a, CI, G, D, B::Panel>, PanelError<<B::Panel as Panel>::Error>>
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
    InitCommand::new(0x0a, &[0x01], 0),
    InitCommand::new(0x23, &[0xa2], 0),
    InitCommand::new(0x25, &[0x14], 0),
    InitCommand::new(0x29, &[0x02], 0),
    InitCommand::new(0x2a, &[0xcf], 0),
    InitCommand::new(0x38, &[0x9c], 0),
    InitCommand::new(0x39, &[0xa7], 0),
    InitCommand::new(0x3a, &[0x33], 0),
    InitCommand::new(0x91, &[0x77], 0),
    InitCommand::new(0x92, &[0x77], 0),
    InitCommand::new(0x99, &[0x52], 0),
    InitCommand::new(0x9b, &[0x5b], 0),
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

    // page 2
    InitCommand::new(0xff, &[0x30], 0),
    InitCommand::new(0xff, &[0x52], 0),
    InitCommand::new(0xff, &[0x02], 0),
    InitCommand::new(0xb0, &[0x02], 0),
    InitCommand::new(0xb1, &[0x31], 0),
    InitCommand::new(0xb2, &[0x24], 0),
    InitCommand::new(0xb3, &[0x30], 0),
    InitCommand::new(0xb4, &[0x38], 0),
    InitCommand::new(0xb5, &[0x3e], 0),
    InitCommand::new(0xb6, &[0x26], 0),
    InitCommand::new(0xb7, &[0x3e], 0),
    InitCommand::new(0xb8, &[0x0a], 0),
    InitCommand::new(0xb9, &[0x00], 0),
    InitCommand::new(0xba, &[0x11], 0),
    InitCommand::new(0xbb, &[0x11], 0),
    InitCommand::new(0xbc, &[0x13], 0),
    InitCommand::new(0xbd, &[0x14], 0),
    InitCommand::new(0xbe, &[0x18], 0),
    InitCommand::new(0xbf, &[0x11], 0),
    InitCommand::new(0xc0, &[0x16], 0),
    InitCommand::new(0xc1, &[0x00], 0),
    InitCommand::new(0xd0, &[0x05], 0),
    InitCommand::new(0xd1, &[0x30], 0),
    InitCommand::new(0xd2, &[0x25], 0),
    InitCommand::new(0xd3, &[0x35], 0),
    InitCommand::new(0xd4, &[0x34], 0),
    InitCommand::new(0xd5, &[0x3b], 0),
    InitCommand::new(0xd6, &[0x26], 0),
    InitCommand::new(0xd7, &[0x3d], 0),
    InitCommand::new(0xd8, &[0x0a], 0),
    InitCommand::new(0xd9, &[0x00], 0),
    InitCommand::new(0xda, &[0x12], 0),
    InitCommand::new(0xdb, &[0x10], 0),
    InitCommand::new(0xdc, &[0x12], 0),
    InitCommand::new(0xdd, &[0x14], 0),
    InitCommand::new(0xde, &[0x18], 0),
    InitCommand::new(0xdf, &[0x11], 0),
    InitCommand::new(0xe0, &[0x15], 0),
    InitCommand::new(0xe1, &[0x00], 0),

    // page 3
    InitCommand::new(0xff, &[0x30], 0),
    InitCommand::new(0xff, &[0x52], 0),
    InitCommand::new(0xff, &[0x03], 0),
    InitCommand::new(0x08, &[0x09], 0),
    InitCommand::new(0x09, &[0x0a], 0),
    InitCommand::new(0x0a, &[0x0b], 0),
    InitCommand::new(0x0b, &[0x0c], 0),
    InitCommand::new(0x28, &[0x22], 0),
    InitCommand::new(0x2a, &[0xec], 0),
    InitCommand::new(0x2b, &[0xec], 0),
    InitCommand::new(0x30, &[0x00], 0),
    InitCommand::new(0x31, &[0x00], 0),
    InitCommand::new(0x32, &[0x00], 0),
    InitCommand::new(0x33, &[0x00], 0),
    InitCommand::new(0x34, &[0x61], 0),
    InitCommand::new(0x35, &[0xd4], 0),
    InitCommand::new(0x36, &[0x24], 0),
    InitCommand::new(0x37, &[0x03], 0),
    InitCommand::new(0x40, &[0x0d], 0),
    InitCommand::new(0x41, &[0x0e], 0),
    InitCommand::new(0x42, &[0x0f], 0),
    InitCommand::new(0x43, &[0x10], 0),
    InitCommand::new(0x44, &[0x22], 0),
    InitCommand::new(0x45, &[0xe1], 0),
    InitCommand::new(0x46, &[0xe2], 0),
    InitCommand::new(0x47, &[0x22], 0),
    InitCommand::new(0x48, &[0xe3], 0),
    InitCommand::new(0x49, &[0xe4], 0),
    InitCommand::new(0x50, &[0x11], 0),
    InitCommand::new(0x51, &[0x12], 0),
    InitCommand::new(0x52, &[0x13], 0),
    InitCommand::new(0x53, &[0x14], 0),
    InitCommand::new(0x54, &[0x22], 0),
    InitCommand::new(0x55, &[0xe5], 0),
    InitCommand::new(0x56, &[0xe6], 0),
    InitCommand::new(0x57, &[0x22], 0),
    InitCommand::new(0x58, &[0xe7], 0),
    InitCommand::new(0x59, &[0xe8], 0),
    InitCommand::new(0x80, &[0x05], 0),
    InitCommand::new(0x81, &[0x1e], 0),
    InitCommand::new(0x82, &[0x02], 0),
    InitCommand::new(0x83, &[0x04], 0),
    InitCommand::new(0x84, &[0x1e], 0),
    InitCommand::new(0x85, &[0x1e], 0),
    InitCommand::new(0x86, &[0x1f], 0),
    InitCommand::new(0x87, &[0x1f], 0),
    InitCommand::new(0x88, &[0x0e], 0),
    InitCommand::new(0x89, &[0x10], 0),
    InitCommand::new(0x8a, &[0x0a], 0),
    InitCommand::new(0x8b, &[0x0c], 0),
    InitCommand::new(0x96, &[0x05], 0),
    InitCommand::new(0x97, &[0x1e], 0),
    InitCommand::new(0x98, &[0x01], 0),
    InitCommand::new(0x99, &[0x03], 0),
    InitCommand::new(0x9a, &[0x1e], 0),
    InitCommand::new(0x9b, &[0x1e], 0),
    InitCommand::new(0x9c, &[0x1f], 0),
    InitCommand::new(0x9d, &[0x1f], 0),
    InitCommand::new(0x9e, &[0x0d], 0),
    InitCommand::new(0x9f, &[0x0f], 0),
    InitCommand::new(0xa0, &[0x09], 0),
    InitCommand::new(0xa1, &[0x0b], 0),
    InitCommand::new(0xb0, &[0x05], 0),
    InitCommand::new(0xb1, &[0x1f], 0),
    InitCommand::new(0xb2, &[0x03], 0),
    InitCommand::new(0xb3, &[0x01], 0),
    InitCommand::new(0xb4, &[0x1e], 0),
    InitCommand::new(0xb5, &[0x1e], 0),
    InitCommand::new(0xb6, &[0x1f], 0),
    InitCommand::new(0xb7, &[0x1e], 0),
    InitCommand::new(0xb8, &[0x0b], 0),
    InitCommand::new(0xb9, &[0x09], 0),
    InitCommand::new(0xba, &[0x0f], 0),
    InitCommand::new(0xbb, &[0x0d], 0),
    InitCommand::new(0xc6, &[0x05], 0),
    InitCommand::new(0xc7, &[0x1f], 0),
    InitCommand::new(0xc8, &[0x04], 0),
    InitCommand::new(0xc9, &[0x02], 0),
    InitCommand::new(0xca, &[0x1e], 0),
    InitCommand::new(0xcb, &[0x1e], 0),
    InitCommand::new(0xcc, &[0x1f], 0),
    InitCommand::new(0xcd, &[0x1e], 0),
    InitCommand::new(0xce, &[0x0c], 0),
    InitCommand::new(0xcf, &[0x0a], 0),
    InitCommand::new(0xd0, &[0x10], 0),
    InitCommand::new(0xd1, &[0x0e], 0),

    // user command set
    InitCommand::new(0xff, &[0x30], 0),
    InitCommand::new(0xff, &[0x52], 0),
    InitCommand::new(0xff, &[0x00], 0),
    InitCommand::new(0x36, &[0x02], 0),
    InitCommand::new(0x3a, &[0x55], 0),
    InitCommand::new(0x11, &[0x00], 200),
    InitCommand::new(0x29, &[0x00], 100),
];
