use crate::command::InitCommand;
use crate::config::RgbTiming;

pub use self::h035a17::H035A17;
pub use self::h040a18::H040A18;
pub use self::nv3052c::NV3052C;

pub mod h035a17;
pub mod h040a18;
pub mod nv3052c;

/// Settle time after any reset, before the controller accepts commands
pub const RESET_SETTLE_MS: u32 = 120;

/// Reset line pulse: asserted for `hold_ms`, then released and left alone for
/// `release_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetPulse {
    pub hold_ms: u32,
    pub release_ms: u32,
}

/// How a vendor panel handles a lifecycle operation it could do by command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Support {
    /// By command when configured so, by the RGB panel otherwise
    Adapted,
    /// Accepted and ignored
    NoOp,
}

/// A panel controller, described by its init table and quirks.
pub trait Vendor {
    const NAME: &'static str;

    /// Default init table, used unless the vendor config brings its own
    const INIT_COMMANDS: &'static [InitCommand<'static>];

    /// Timing of the reference module
    const TIMING: RgbTiming;

    /// Reset pulse of the adapted `reset`
    const RESET_PULSE: ResetPulse = ResetPulse {
        hold_ms: 10,
        release_ms: 0,
    };

    /// Reset pulse before the init table is sent on a multiplexed bus
    const MULTIPLEX_RESET: ResetPulse = Self::RESET_PULSE;

    /// Send MADCTL and COLMOD from the cached values before the init table
    const SEND_REGISTER_PREAMBLE: bool = false;

    /// Track MADCTL and COLMOD writes in the init table
    const DETECT_OVERRIDES: bool = false;

    const MIRROR: Support = Support::NoOp;

    const DISPLAY_ON_OFF: Support = Support::NoOp;

    /// Recognize a command bank switch.
    ///
    /// Returns `Some(true)` when the record selects the standard user command
    /// set, `Some(false)` for a vendor private bank and `None` when it is not
    /// a bank switch at all.
    fn bank_select(_command: u8, _params: &[u8]) -> Option<bool> {
        None
    }
}
