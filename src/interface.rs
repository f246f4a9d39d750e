//! Command channels for talking to the panel controller.
//!
//! RGB panels stream pixels on the parallel bus, but register setup goes
//! through a slow serial link: usually 3-wire SPI with a D/C bit in front of
//! every byte, sometimes plain 4-wire SPI with a D/C pin.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    BusWriteError,
    DCError,
    CSError,
    /// SCL or SDA could not be driven
    PinError,
}

/// The "transmit command + parameters" primitive.
pub trait CommandChannel {
    /// Send one command byte followed by its parameter bytes.
    ///
    /// Blocks until the transfer is done.
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError>;

    fn tx_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.tx_param(command, &[])
    }
}

impl<T: CommandChannel + ?Sized> CommandChannel for &mut T {
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        (**self).tx_param(command, params)
    }
}

/// 4-wire SPI command channel, chip select handled by the `SpiDevice`.
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    pub fn new(spi: SPI, dc: DC) -> Self {
        SpiInterface { spi, dc }
    }

    /// Consume the display interface and return
    /// the underlying peripherial driver and GPIO pins used by it
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> CommandChannel for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        // 1 = data, 0 = command
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(&[command])
            .map_err(|_| DisplayError::BusWriteError)?;

        if params.is_empty() {
            return Ok(());
        }

        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(params)
            .map_err(|_| DisplayError::BusWriteError)
    }
}

/// Edge on which the panel samples SDA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SclEdge {
    /// SPI mode 0
    #[default]
    Rising,
    /// SPI mode 1
    Falling,
}

/// 3-wire SPI word layout.
///
/// Every byte goes out as a 9-bit word: the D/C bit, then 8 data bits MSB
/// first. CS is held low for the whole command including its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThreeWireConfig {
    pub scl_active_edge: SclEdge,
    /// D/C bit value for data words, commands get the inverse
    pub dc_data_level: bool,
    pub lsb_first: bool,
    pub cs_active_high: bool,
}

impl Default for ThreeWireConfig {
    fn default() -> Self {
        ThreeWireConfig {
            scl_active_edge: SclEdge::Rising,
            dc_data_level: true,
            lsb_first: false,
            cs_active_high: false,
        }
    }
}

/// Bit-banged 3-wire SPI.
///
/// The pins are usually shared with the RGB bus, so [`release`](Self::release)
/// hands them back once the controller has been configured.
pub struct ThreeWireInterface<CS, SCL, SDA> {
    cs: CS,
    scl: SCL,
    sda: SDA,
    config: ThreeWireConfig,
}

impl<CS, SCL, SDA> ThreeWireInterface<CS, SCL, SDA>
where
    CS: OutputPin,
    SCL: OutputPin,
    SDA: OutputPin,
{
    pub fn new(cs: CS, scl: SCL, sda: SDA, config: ThreeWireConfig) -> Self {
        let mut this = ThreeWireInterface { cs, scl, sda, config };
        // idle: deselected, clock low
        this.set_cs(false).ok();
        this.scl.set_low().ok();
        this
    }

    pub fn config(&self) -> &ThreeWireConfig {
        &self.config
    }

    /// Consume the interface and return the pins for reuse by the RGB bus
    pub fn release(self) -> (CS, SCL, SDA) {
        (self.cs, self.scl, self.sda)
    }

    fn set_cs(&mut self, active: bool) -> Result<(), DisplayError> {
        let level = active == self.config.cs_active_high;
        if level {
            self.cs.set_high().map_err(|_| DisplayError::CSError)
        } else {
            self.cs.set_low().map_err(|_| DisplayError::CSError)
        }
    }

    fn set_sda(&mut self, high: bool) -> Result<(), DisplayError> {
        if high {
            self.sda.set_high().map_err(|_| DisplayError::PinError)
        } else {
            self.sda.set_low().map_err(|_| DisplayError::PinError)
        }
    }

    fn clock_bit(&mut self, bit: bool) -> Result<(), DisplayError> {
        match self.config.scl_active_edge {
            SclEdge::Rising => {
                self.set_sda(bit)?;
                self.scl.set_high().map_err(|_| DisplayError::PinError)?;
                self.scl.set_low().map_err(|_| DisplayError::PinError)
            }
            SclEdge::Falling => {
                self.scl.set_high().map_err(|_| DisplayError::PinError)?;
                self.set_sda(bit)?;
                self.scl.set_low().map_err(|_| DisplayError::PinError)
            }
        }
    }

    fn write_word(&mut self, is_data: bool, byte: u8) -> Result<(), DisplayError> {
        let dc = if is_data {
            self.config.dc_data_level
        } else {
            !self.config.dc_data_level
        };
        self.clock_bit(dc)?;

        for i in 0..8 {
            let shift = if self.config.lsb_first { i } else { 7 - i };
            self.clock_bit(byte >> shift & 1 != 0)?;
        }
        Ok(())
    }

    fn write_all(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.write_word(false, command)?;
        for &b in params {
            self.write_word(true, b)?;
        }
        Ok(())
    }
}

impl<CS, SCL, SDA> CommandChannel for ThreeWireInterface<CS, SCL, SDA>
where
    CS: OutputPin,
    SCL: OutputPin,
    SDA: OutputPin,
{
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.set_cs(true)?;
        let ret = self.write_all(command, params);
        // Deassert chip select pin, also on failure
        self.set_cs(false).ok();
        ret
    }
}

/// Command channel that may have been given up.
///
/// After a multiplexed bring-up the pins can belong to the RGB bus; every
/// user has to check [`is_live`](Self::is_live) first.
pub struct CommandLink<CI> {
    channel: Option<CI>,
}

impl<CI: CommandChannel> CommandLink<CI> {
    pub fn new(channel: CI) -> Self {
        CommandLink {
            channel: Some(channel),
        }
    }

    pub fn is_live(&self) -> bool {
        self.channel.is_some()
    }

    pub fn get(&mut self) -> Option<&mut CI> {
        self.channel.as_mut()
    }

    /// Take the channel out, leaving the link dead
    pub fn release(&mut self) -> Option<CI> {
        self.channel.take()
    }
}
