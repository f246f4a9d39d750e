#![no_std]

//! Bring-up drivers for RGB interface LCD panels.
//!
//! An RGB panel streams pixels on a parallel bus, but the controller behind
//! it has to be configured first over a slow serial command channel. A
//! [`VendorPanel`] wraps the generic RGB panel driver of the platform and
//! adds the vendor part: reset, init table replay and, where the controller
//! supports it, mirroring and display on/off by command.
//!
//! When the command channel shares its pins with the RGB bus
//! ([`VendorFlags::enable_io_multiplex`]), the init table is sent before the
//! RGB panel is created. Otherwise it is sent by the first [`Panel::init`].

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod color;
pub mod command;
pub mod config;
pub mod drivers;
pub mod error;
pub mod gpio;
pub mod interface;
pub mod panel;
pub mod replay;

#[cfg(test)]
mod testing;

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;

pub use color::{ElementOrder, PixelFormat};
use command::{Command, InitCommand, SDIR_SS};
pub use config::{PanelDevConfig, RgbPanelConfig, RgbTiming, VendorConfig, VendorFlags};
use drivers::{ResetPulse, Support, Vendor, RESET_SETTLE_MS};
pub use error::PanelError;
use gpio::Gpio;
pub use interface::{CommandChannel, CommandLink, DisplayError};
pub use panel::{Operation, Panel, RgbPanelBuilder};
use replay::Registers;

/// Where a vendor panel is in its life.
///
/// `Constructed` and `EarlyCommandsSent` only exist while `new` runs, see
/// [`VendorPanel::early_commands_sent`] for what is left of them afterwards.
/// Deletion consumes the panel, so there is no state for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdapterState {
    Constructed,
    /// Init table sent over the multiplexed bus
    EarlyCommandsSent,
    /// RGB panel created and wrapped
    Delegated,
    Initialized,
    DisplayToggled,
    Mirrored,
}

/// The controller side of a vendor panel: command channel, reset line and
/// cached registers.
struct Controller<'a, V, CI, G, D> {
    link: CommandLink<CI>,
    gpio: G,
    delay: D,
    reset_gpio: Option<u8>,
    reset_level: bool,
    regs: Registers,
    init_cmds: &'a [InitCommand<'a>],
    flags: VendorFlags,
    display_on_off_use_cmd: bool,
    /// Init table still to be sent by the next `init`
    cmds_pending: bool,
    /// Init table went out over the multiplexed bus during `new`
    early_cmds_sent: bool,
    state: AdapterState,
    _vendor: PhantomData<V>,
}

impl<'a, V, CI, G, D> Controller<'a, V, CI, G, D>
where
    V: Vendor,
    CI: CommandChannel,
    G: Gpio,
    D: DelayNs,
{
    fn channel<E>(&mut self) -> Result<&mut CI, PanelError<E>> {
        self.link.get().ok_or_else(|| {
            error!("{}: panel IO is deleted, cannot send command", V::NAME);
            PanelError::ChannelReleased
        })
    }

    fn pulse(&mut self, pin: u8, pulse: ResetPulse) -> Result<(), gpio::GpioError> {
        self.gpio.set_level(pin, self.reset_level)?;
        self.delay.delay_ms(pulse.hold_ms);
        self.gpio.set_level(pin, !self.reset_level)?;
        if pulse.release_ms > 0 {
            self.delay.delay_ms(pulse.release_ms);
        }
        Ok(())
    }

    /// Hardware reset when there is a reset line, software reset when the
    /// command channel is still there. Returns false if neither was possible.
    fn reset<E>(&mut self, pulse: ResetPulse) -> Result<bool, PanelError<E>> {
        if let Some(pin) = self.reset_gpio {
            self.pulse(pin, pulse)?;
        } else if let Some(channel) = self.link.get() {
            channel.tx_command(Command::SwReset.into())?;
        } else {
            debug!("{}: no reset line and no panel IO, skip reset", V::NAME);
            return Ok(false);
        }
        self.delay.delay_ms(RESET_SETTLE_MS);
        Ok(true)
    }

    fn send_init_cmds<E>(&mut self) -> Result<(), PanelError<E>> {
        let Some(channel) = self.link.get() else {
            error!("{}: panel IO is deleted, cannot send init commands", V::NAME);
            return Err(PanelError::ChannelReleased);
        };

        if V::SEND_REGISTER_PREAMBLE {
            channel.tx_param(Command::Madctl.into(), &[self.regs.madctl])?;
            channel.tx_param(Command::Colmod.into(), &[self.regs.colmod])?;
        }

        let tracker = if V::DETECT_OVERRIDES {
            Some(&mut self.regs)
        } else {
            None
        };
        replay::replay(channel, &mut self.delay, self.init_cmds, tracker)?;
        info!("{}: send init commands success", V::NAME);
        Ok(())
    }

    fn release_reset_pin(&mut self) {
        if let Some(pin) = self.reset_gpio {
            self.gpio.reset_pin(pin);
        }
    }
}

/// A generic RGB panel wrapped with the bring-up of a vendor controller.
///
/// - `V`: the controller, see [`drivers`]
/// - `CI`: command channel to the controller
/// - `G`: GPIO control for the reset line
/// - `D`: delay provider
/// - `P`: the wrapped RGB panel
pub struct VendorPanel<'a, V, CI, G, D, P> {
    ctrl: Controller<'a, V, CI, G, D>,
    rgb: P,
}

impl<'a, V, CI, G, D, P> VendorPanel<'a, V, CI, G, D, P>
where
    V: Vendor,
    CI: CommandChannel,
    G: Gpio,
    D: DelayNs,
    P: Panel,
{
    /// Create the panel.
    ///
    /// Claims the reset line, and on a multiplexed bus resets the controller
    /// and sends the init table, before `builder` creates the RGB panel from
    /// the RGB config of `config`. On failure everything claimed so far is
    /// given back.
    pub fn new<B>(
        channel: CI,
        mut gpio: G,
        delay: D,
        config: &PanelDevConfig<'a>,
        builder: B,
    ) -> Result<Self, PanelError<P::Error>>
    where
        B: RgbPanelBuilder<'a, Panel = P>,
    {
        let Some(vendor_config) = config.vendor_config else {
            error!("{}: vendor config is necessary", V::NAME);
            return Err(PanelError::InvalidArgument);
        };
        let Some(rgb_config) = vendor_config.rgb_config else {
            error!("{}: rgb config is necessary", V::NAME);
            return Err(PanelError::InvalidArgument);
        };
        let flags = vendor_config.flags;
        if flags.enable_io_multiplex && flags.mirror_by_cmd {
            error!("{}: mirror_by_cmd and enable_io_multiplex cannot work together", V::NAME);
            return Err(PanelError::InvalidArgument);
        }

        if let Some(pin) = config.reset_gpio {
            gpio.configure_output(pin).map_err(|_| {
                error!("{}: configure GPIO {} for RST line failed", V::NAME, pin);
                PanelError::Gpio
            })?;
        }

        let mut ctrl = Controller {
            link: CommandLink::new(channel),
            gpio,
            delay,
            reset_gpio: config.reset_gpio,
            reset_level: config.reset_active_high,
            regs: Registers::new(0, 0),
            init_cmds: vendor_config.init_cmds.unwrap_or(V::INIT_COMMANDS),
            flags,
            display_on_off_use_cmd: rgb_config.disp_gpio.is_none(),
            cmds_pending: !flags.enable_io_multiplex,
            early_cmds_sent: false,
            state: AdapterState::Constructed,
            _vendor: PhantomData,
        };

        match Self::bring_up(&mut ctrl, config, *rgb_config, builder) {
            Ok(rgb) => {
                ctrl.state = AdapterState::Delegated;
                info!("{}: new panel", V::NAME);
                Ok(VendorPanel { ctrl, rgb })
            }
            Err(err) => {
                ctrl.release_reset_pin();
                Err(err)
            }
        }
    }

    fn bring_up<B>(
        ctrl: &mut Controller<'a, V, CI, G, D>,
        config: &PanelDevConfig<'a>,
        rgb_config: RgbPanelConfig<'a>,
        builder: B,
    ) -> Result<P, PanelError<P::Error>>
    where
        B: RgbPanelBuilder<'a, Panel = P>,
    {
        let order = ElementOrder::try_from(config.rgb_ele_order).map_err(|_| {
            error!("{}: unsupported color element order", V::NAME);
            PanelError::NotSupported
        })?;
        let format = PixelFormat::from_bits_per_pixel(config.bits_per_pixel).map_err(|_| {
            error!("{}: unsupported pixel width {}", V::NAME, config.bits_per_pixel);
            PanelError::NotSupported
        })?;
        let bank_rule: replay::BankRule = V::bank_select;
        ctrl.regs = Registers::new(order.madctl_bits(), format.colmod()).with_bank_rule(Some(bank_rule));

        if ctrl.flags.enable_io_multiplex {
            // The command bus shares pins with the RGB bus, so it has to be
            // done before the RGB panel claims them.
            ctrl.reset::<P::Error>(V::MULTIPLEX_RESET)?;
            ctrl.send_init_cmds::<P::Error>()?;
            ctrl.state = AdapterState::EarlyCommandsSent;
            ctrl.early_cmds_sent = true;

            if ctrl.flags.auto_del_panel_io {
                drop(ctrl.link.release());
                warn!("{}: delete panel IO", V::NAME);
            }
        }

        builder.build(rgb_config).map_err(|err| {
            error!("{}: create RGB panel failed", V::NAME);
            PanelError::Rgb(Operation::New, err)
        })
    }

    pub fn state(&self) -> AdapterState {
        self.ctrl.state
    }

    /// True when the init table was sent before the RGB panel was created,
    /// i.e. on a multiplexed bus. `init` won't send it again then.
    pub fn early_commands_sent(&self) -> bool {
        self.ctrl.early_cmds_sent
    }

    /// Cached MADCTL and COLMOD values
    pub fn registers(&self) -> &Registers {
        &self.ctrl.regs
    }

    pub fn is_channel_live(&self) -> bool {
        self.ctrl.link.is_live()
    }

    /// Take the command channel out, e.g. to give its pins to the RGB bus.
    ///
    /// Operations that need it fail with [`PanelError::ChannelReleased`]
    /// afterwards.
    pub fn take_channel(&mut self) -> Option<CI> {
        self.ctrl.link.release()
    }

    pub fn rgb(&self) -> &P {
        &self.rgb
    }

    pub fn rgb_mut(&mut self) -> &mut P {
        &mut self.rgb
    }
}

impl<'a, V, CI, G, D, P> Panel for VendorPanel<'a, V, CI, G, D, P>
where
    V: Vendor,
    CI: CommandChannel,
    G: Gpio,
    D: DelayNs,
    P: Panel,
{
    type Error = PanelError<P::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        if self.ctrl.cmds_pending {
            self.ctrl.send_init_cmds::<P::Error>()?;
            self.ctrl.cmds_pending = false;
        }
        self.rgb
            .init()
            .map_err(|err| PanelError::Rgb(Operation::Init, err))?;
        self.ctrl.state = AdapterState::Initialized;
        Ok(())
    }

    /// Reset the controller, then the RGB panel.
    ///
    /// A reset the controller actually saw (pulse or SWRESET) clears its
    /// registers, so without a multiplexed bus the next `init` sends the init
    /// table again. That makes the table go out once per reset and `init`
    /// pair, not once per panel. On a multiplexed bus it is never resent.
    fn reset(&mut self) -> Result<(), Self::Error> {
        if self.ctrl.reset::<P::Error>(V::RESET_PULSE)? && !self.ctrl.flags.enable_io_multiplex {
            // registers are back to power-on values
            self.ctrl.cmds_pending = true;
        }
        self.rgb
            .reset()
            .map_err(|err| PanelError::Rgb(Operation::Reset, err))?;
        self.ctrl.state = AdapterState::Delegated;
        Ok(())
    }

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error> {
        if V::MIRROR == Support::NoOp {
            return Ok(());
        }

        if self.ctrl.flags.mirror_by_cmd {
            self.ctrl.channel::<P::Error>()?;
            let sdir = if mirror_x { SDIR_SS } else { 0 };
            self.ctrl.regs.set_mirror_y(mirror_y);
            let madctl = self.ctrl.regs.madctl;

            let channel = self.ctrl.channel::<P::Error>()?;
            channel.tx_param(Command::Sdir.into(), &[sdir])?;
            channel.tx_param(Command::Madctl.into(), &[madctl])?;
        } else {
            self.rgb
                .mirror(mirror_x, mirror_y)
                .map_err(|err| PanelError::Rgb(Operation::Mirror, err))?;
        }
        self.ctrl.state = AdapterState::Mirrored;
        Ok(())
    }

    fn disp_on_off(&mut self, on: bool) -> Result<(), Self::Error> {
        if V::DISPLAY_ON_OFF == Support::NoOp {
            return Ok(());
        }

        if self.ctrl.display_on_off_use_cmd {
            let command = if on {
                Command::DisplayOn
            } else {
                Command::DisplayOff
            };
            self.ctrl.channel::<P::Error>()?.tx_command(command.into())?;
        } else {
            self.rgb
                .disp_on_off(on)
                .map_err(|err| PanelError::Rgb(Operation::DispOnOff, err))?;
        }
        self.ctrl.state = AdapterState::DisplayToggled;
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        self.rgb
            .draw_bitmap(x_start, y_start, x_end, y_end, data)
            .map_err(|err| PanelError::Rgb(Operation::DrawBitmap, err))
    }

    fn delete(mut self) -> Result<(), Self::Error> {
        self.ctrl.release_reset_pin();
        drop(self.ctrl.link.release());
        debug!("{}: del panel", V::NAME);
        self.rgb
            .delete()
            .map_err(|err| PanelError::Rgb(Operation::Delete, err))
    }
}
