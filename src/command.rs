//! Command Table

/// Standard commands the panel adapter issues on its own.
///
/// Everything else a controller needs travels through the vendor init table
/// as raw bytes.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Software reset, needs 120ms before the next command
    SwReset = 0x01,
    DisplayOff = 0x28,
    DisplayOn = 0x29,
    /// Memory data access control
    ///
    /// <<MY:b1, MX:b1, MV:b1, ML:b1, BGR:b1, MH:b1, 0:b2>>
    ///
    /// Only ML and BGR matter for RGB interface panels, the rest applies to
    /// the internal GRAM which is bypassed.
    Madctl = 0x36,
    /// Interface pixel format
    ///
    /// <<0:b1, DPI:b3, 0:b1, DBI:b3>>
    Colmod = 0x3a,
    /// Source direction control
    ///
    /// <<0:b5, SS:b1, 0:b2>>
    ///
    /// SS reverses the source output order, i.e. mirrors along the x axis.
    Sdir = 0xc7,
    /// Vendor command bank select.
    ///
    /// Layout differs per controller, see the `bank_select` of each driver.
    BankSelect = 0xff,
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}

/// MADCTL: BGR colour element order
pub const MADCTL_BGR: u8 = 1 << 3;
/// MADCTL: vertical refresh order, bottom to top
pub const MADCTL_ML: u8 = 1 << 4;
/// SDIR: source scan reversed
pub const SDIR_SS: u8 = 1 << 2;

/// One record of an initialization table.
///
/// The delay is always applied after the command has been sent, even when
/// there are no parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitCommand<'a> {
    pub command: u8,
    pub params: &'a [u8],
    pub delay_ms: u32,
}

impl<'a> InitCommand<'a> {
    pub const fn new(command: u8, params: &'a [u8], delay_ms: u32) -> Self {
        Self {
            command,
            params,
            delay_ms,
        }
    }
}
