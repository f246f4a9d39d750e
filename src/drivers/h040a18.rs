//! H040A18 module
//!
//! 4.0" 400 x 960 module on an ST7701 family controller. Same support level
//! as the H035A17: init table only.
//!
//! Command-2 banks are selected by `0xff 0x77 0x01 0x00 0x00 BK`, with bit 4
//! of `BK` enabling command-2.

use embedded_hal::delay::DelayNs;

use super::{ResetPulse, Vendor};
use crate::command::{Command, InitCommand};
use crate::config::{PanelDevConfig, RgbTiming};
use crate::error::PanelError;
use crate::gpio::Gpio;
use crate::interface::CommandChannel;
use crate::panel::{Panel, RgbPanelBuilder};
use crate::VendorPanel;

const CMD2_ENABLE: u8 = 1 << 4;

pub struct H040A18;

impl Vendor for H040A18 {
    const NAME: &'static str = "h040a18";

    const INIT_COMMANDS: &'static [InitCommand<'static>] = INIT_COMMANDS;

    const TIMING: RgbTiming = RgbTiming::new(400, 960)
        .pclk_hz(20_000_000)
        .hsync(8, 50, 50)
        .vsync(8, 20, 20);

    const MULTIPLEX_RESET: ResetPulse = ResetPulse {
        hold_ms: 1,
        release_ms: 10,
    };

    const DETECT_OVERRIDES: bool = true;

    fn bank_select(command: u8, params: &[u8]) -> Option<bool> {
        if command != u8::from(Command::BankSelect) {
            return None;
        }
        match params {
            [_, _, _, _, bk] => Some(bk & CMD2_ENABLE == 0),
            _ => None,
        }
    }
}

pub type H040a18Panel<'a, CI, G, D, P> = VendorPanel<'a, H040A18, CI, G, D, P>;

/// Create a H040A18 panel, see [`VendorPanel::new`].
pub fn new_panel<'a, CI, G, D, B>(
    channel: CI,
    gpio: G,
    delay: D,
    config: &PanelDevConfig<'a>,
    builder: B,
) -> Result<H040a18Panel<'a, CI, G, D, B::Panel>, PanelError<<B::Panel as Panel>::Error>>
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
    InitCommand::new(0x3a, &[0x77], 0),
    InitCommand::new(0x36, &[0x00], 0),
    InitCommand::new(0xff, &[0x77, 0x01, 0x00, 0x00, 0x13], 0),
    InitCommand::new(0xef, &[0x08], 0),
    InitCommand::new(0xff, &[0x77, 0x01, 0x00, 0x00, 0x10], 0),
    InitCommand::new(0xc0, &[0x77, 0x00], 0),
    InitCommand::new(0xc1, &[0x0e, 0x0c], 0),
    InitCommand::new(0xc2, &[0x07, 0x02], 0),
    InitCommand::new(0xcc, &[0x30], 0),
    InitCommand::new(0xb0, &[0x00, 0x13, 0x1e, 0x0d, 0x11, 0x06, 0x0f, 0x07, 0x0f, 0x2c, 0x05, 0x17, 0x1e, 0x2d, 0x34, 0x1d], 0),
    InitCommand::new(0xb1, &[0x00, 0x1a, 0x1f, 0x0f, 0x12, 0x08, 0x0b, 0x0a, 0x03, 0x22, 0x03, 0x0f, 0x09, 0x28, 0x33, 0x1f], 0),
    InitCommand::new(0xff, &[0x77, 0x01, 0x00, 0x00, 0x11], 0),
    InitCommand::new(0xb0, &[0x5c], 0),
    InitCommand::new(0xb1, &[0x69], 0),
    InitCommand::new(0xb2, &[0x87], 0),
    InitCommand::new(0xb3, &[0x80], 0),
    InitCommand::new(0xb5, &[0x4a], 0),
    InitCommand::new(0xb7, &[0x85], 0),
    InitCommand::new(0xb8, &[0x48], 0),
    InitCommand::new(0xb9, &[0x10, 0x1f], 0),
    InitCommand::new(0xbb, &[0x03], 0),
    InitCommand::new(0xc0, &[0x80], 0),
    InitCommand::new(0xc1, &[0x08], 0),
    InitCommand::new(0xc2, &[0x08], 0),
    InitCommand::new(0xd0, &[0x88], 0),
    InitCommand::new(0xe0, &[0x00, 0x00, 0x02, 0x00, 0x00, 0x0c], 0),
    InitCommand::new(0xe1, &[0x03, 0x96, 0x05, 0x96, 0x02, 0x96, 0x04, 0x96, 0x00, 0x44, 0x44], 0),
    InitCommand::new(0xe2, &[0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, 0x00], 0),
    InitCommand::new(0xe3, &[0x00, 0x00, 0x33, 0x33], 0),
    InitCommand::new(0xe4, &[0x44, 0x44], 0),
    InitCommand::new(0xe5, &[0x0b, 0xd4, 0x28, 0x8c, 0x0d, 0xd6, 0x28, 0x8c, 0x07, 0xd0, 0x28, 0x8c, 0x09, 0xd2, 0x28, 0x8c], 0),
    InitCommand::new(0xe6, &[0x00, 0x00, 0x33, 0x33], 0),
    InitCommand::new(0xe7, &[0x44, 0x44], 0),
    InitCommand::new(0xe8, &[0x0a, 0xd5, 0x28, 0x8c, 0x0c, 0xd7, 0x28, 0x8c, 0x06, 0xd1, 0x28, 0x8c, 0x08, 0xd3, 0x28, 0x8c], 0),
    InitCommand::new(0xeb, &[0x00, 0x01, 0xe4, 0xe4, 0x44, 0x00], 0),
    InitCommand::new(0xed, &[0xff, 0x45, 0x67, 0xfc, 0x01, 0x3f, 0xab, 0xff, 0xff, 0xba, 0xf3, 0x10, 0xcf, 0x76, 0x54, 0xff], 0),
    InitCommand::new(0xef, &[0x10, 0x0d, 0x04, 0x08, 0x3f, 0x1f], 0),
    InitCommand::new(0xff, &[0x77, 0x01, 0x00, 0x00, 0x13], 0),
    InitCommand::new(0xe8, &[0x00, 0x0e], 0),
    InitCommand::new(0x11, &[], 120),
    InitCommand::new(0xe8, &[0x00, 0x0c], 20),
    InitCommand::new(0xe8, &[0x40, 0x00], 0),
    InitCommand::new(0xff, &[0x77, 0x01, 0x00, 0x00, 0x00], 0),
    InitCommand::new(0x35, &[0x00], 0),
    InitCommand::new(0x29, &[], 20),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::Registers;

    #[test]
    fn cmd2_bit_selects_private_bank() {
        assert_eq!(H040A18::bank_select(0xff, &[0x77, 0x01, 0x00, 0x00, 0x13]), Some(false));
        assert_eq!(H040A18::bank_select(0xff, &[0x77, 0x01, 0x00, 0x00, 0x10]), Some(false));
        assert_eq!(H040A18::bank_select(0xff, &[0x77, 0x01, 0x00, 0x00, 0x00]), Some(true));
        assert_eq!(H040A18::bank_select(0xff, &[0x00]), None);
    }

    #[test]
    fn default_table_sets_rgb888() {
        let mut regs = Registers::new(0x00, 0x50).with_bank_rule(Some(H040A18::bank_select));
        for cmd in INIT_COMMANDS {
            regs.observe(cmd.command, cmd.params);
        }
        // 0xef, 0xe8 and friends in command-2 are not mistaken for anything
        assert_eq!(regs.colmod, 0x77);
        assert_eq!(regs.madctl, 0x00);
        assert!(regs.in_user_set());
    }
}
