//! Init table replay.

use embedded_hal::delay::DelayNs;

use crate::command::{Command, InitCommand, MADCTL_ML};
use crate::interface::{CommandChannel, DisplayError};

/// Vendor command bank switching, see [`Vendor::bank_select`](crate::drivers::Vendor::bank_select).
///
/// Given a bank select record, returns whether the standard user command set
/// is active afterwards.
pub type BankRule = fn(command: u8, params: &[u8]) -> Option<bool>;

/// Cached values of the registers the panel adapter owns.
#[derive(Clone, Copy, Debug)]
pub struct Registers {
    pub madctl: u8,
    pub colmod: u8,
    user_set: bool,
    bank_rule: Option<BankRule>,
}

impl Registers {
    pub fn new(madctl: u8, colmod: u8) -> Self {
        Registers {
            madctl,
            colmod,
            user_set: true,
            bank_rule: None,
        }
    }

    #[must_use]
    pub fn with_bank_rule(mut self, rule: Option<BankRule>) -> Self {
        self.bank_rule = rule;
        self
    }

    /// Start of a table: the controller is in its user command set again.
    pub fn begin_replay(&mut self) {
        self.user_set = true;
    }

    /// False while a vendor private command bank is selected
    pub fn in_user_set(&self) -> bool {
        self.user_set
    }

    pub fn set_mirror_y(&mut self, mirror_y: bool) {
        if mirror_y {
            self.madctl |= MADCTL_ML;
        } else {
            self.madctl &= !MADCTL_ML;
        }
    }

    /// Track a record about to be sent. Returns true when it redefined a
    /// cached register.
    pub fn observe(&mut self, command: u8, params: &[u8]) -> bool {
        if let Some(rule) = self.bank_rule {
            if let Some(user_set) = rule(command, params) {
                self.user_set = user_set;
                return false;
            }
        }
        if !self.user_set {
            return false;
        }
        let Some(&value) = params.first() else {
            return false;
        };

        if command == Command::Madctl as u8 {
            self.madctl = value;
            warn!("MADCTL overwritten by init table: {:#x}", value);
            true
        } else if command == Command::Colmod as u8 {
            self.colmod = value;
            warn!("COLMOD overwritten by init table: {:#x}", value);
            true
        } else {
            false
        }
    }
}

/// Send every record of `table` in order, waiting its delay after each.
///
/// The first failed transmission ends the replay; records sent before it stay
/// in effect on the controller.
pub fn replay<CI, D>(
    channel: &mut CI,
    delay: &mut D,
    table: &[InitCommand<'_>],
    mut tracker: Option<&mut Registers>,
) -> Result<(), DisplayError>
where
    CI: CommandChannel,
    D: DelayNs,
{
    if let Some(regs) = tracker.as_deref_mut() {
        regs.begin_replay();
    }

    for (i, cmd) in table.iter().enumerate() {
        if let Some(regs) = tracker.as_deref_mut() {
            regs.observe(cmd.command, cmd.params);
        }

        trace!("init cmd #{} {:#x}", i, cmd.command);
        channel.tx_param(cmd.command, cmd.params).map_err(|err| {
            error!("init cmd #{} {:#x} failed", i, cmd.command);
            err
        })?;

        if cmd.delay_ms > 0 {
            delay.delay_ms(cmd.delay_ms);
        }
    }
    debug!("sent {} init cmds", table.len());
    Ok(())
}
