//! Recording fakes for the collaborators of a vendor panel.
//!
//! Everything writes into one shared [`Log`], so tests can assert on the
//! relative order of GPIO, command, delay and RGB panel events.

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::spi::{ErrorType as SpiErrorType, Operation as SpiOperation, SpiDevice};

use crate::config::RgbPanelConfig;
use crate::gpio::{Gpio, GpioError};
use crate::interface::{CommandChannel, DisplayError};
use crate::panel::{Operation, Panel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// embedded-hal pin, by id
    Pin(u8, bool),
    Spi(Vec<u8>),
    /// Command channel transmission
    Tx(u8, Vec<u8>),
    DelayMs(u32),
    DelayNs(u32),
    Configure(u8),
    Level(u8, bool),
    ResetPin(u8),
    /// Call into the fake RGB panel
    Rgb(Operation),
}

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn push(&self, e: Event) {
        self.0.borrow_mut().push(e);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Transmissions only
    pub fn commands(&self) -> Vec<(u8, Vec<u8>)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Tx(cmd, params) => Some((*cmd, params.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn delays_ms(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn rgb_calls(&self) -> Vec<Operation> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Rgb(op) => Some(*op),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, e: &Event) -> usize {
        self.0.borrow().iter().filter(|x| *x == e).count()
    }
}

pub struct LogPin {
    id: u8,
    log: Log,
}

impl LogPin {
    pub fn new(id: u8, log: &Log) -> Self {
        LogPin {
            id,
            log: log.clone(),
        }
    }
}

impl PinErrorType for LogPin {
    type Error = Infallible;
}

impl OutputPin for LogPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.id, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.id, true));
        Ok(())
    }
}

pub struct LogSpi {
    log: Log,
}

impl LogSpi {
    pub fn new(log: &Log) -> Self {
        LogSpi { log: log.clone() }
    }
}

impl SpiErrorType for LogSpi {
    type Error = Infallible;
}

impl SpiDevice for LogSpi {
    fn transaction(&mut self, operations: &mut [SpiOperation<'_, u8>]) -> Result<(), Self::Error> {
        for op in operations {
            if let SpiOperation::Write(buf) = op {
                self.log.push(Event::Spi(buf.to_vec()));
            }
        }
        Ok(())
    }
}

/// Command channel failing from the `fail_at`-th transmission on, zero based.
pub struct FakeChannel {
    log: Log,
    sent: usize,
    pub fail_at: Option<usize>,
}

impl FakeChannel {
    pub fn new(log: &Log) -> Self {
        FakeChannel {
            log: log.clone(),
            sent: 0,
            fail_at: None,
        }
    }

    pub fn failing_at(log: &Log, n: usize) -> Self {
        FakeChannel {
            fail_at: Some(n),
            ..Self::new(log)
        }
    }
}

impl CommandChannel for FakeChannel {
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        if matches!(self.fail_at, Some(n) if self.sent >= n) {
            return Err(DisplayError::BusWriteError);
        }
        self.sent += 1;
        self.log.push(Event::Tx(command, params.to_vec()));
        Ok(())
    }
}

pub struct FakeGpio {
    log: Log,
    pub fail_configure: bool,
}

impl FakeGpio {
    pub fn new(log: &Log) -> Self {
        FakeGpio {
            log: log.clone(),
            fail_configure: false,
        }
    }
}

impl Gpio for FakeGpio {
    fn configure_output(&mut self, pin: u8) -> Result<(), GpioError> {
        if self.fail_configure {
            return Err(GpioError::InvalidPin);
        }
        self.log.push(Event::Configure(pin));
        Ok(())
    }

    fn set_level(&mut self, pin: u8, high: bool) -> Result<(), GpioError> {
        self.log.push(Event::Level(pin, high));
        Ok(())
    }

    fn reset_pin(&mut self, pin: u8) {
        self.log.push(Event::ResetPin(pin));
    }
}

pub struct FakeDelay {
    log: Log,
}

impl FakeDelay {
    pub fn new(log: &Log) -> Self {
        FakeDelay { log: log.clone() }
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RgbFault;

/// Generic RGB panel stand-in, failing on `fail_on`.
pub struct FakeRgb {
    log: Log,
    pub fail_on: Option<Operation>,
    pub config_data_width: u8,
}

impl FakeRgb {
    pub fn new(log: &Log, config: &RgbPanelConfig<'_>) -> Self {
        log.push(Event::Rgb(Operation::New));
        FakeRgb {
            log: log.clone(),
            fail_on: None,
            config_data_width: config.data_width,
        }
    }

    fn call(&self, op: Operation) -> Result<(), RgbFault> {
        self.log.push(Event::Rgb(op));
        if self.fail_on == Some(op) {
            Err(RgbFault)
        } else {
            Ok(())
        }
    }
}

impl Panel for FakeRgb {
    type Error = RgbFault;

    fn init(&mut self) -> Result<(), RgbFault> {
        self.call(Operation::Init)
    }

    fn reset(&mut self) -> Result<(), RgbFault> {
        self.call(Operation::Reset)
    }

    fn mirror(&mut self, _mirror_x: bool, _mirror_y: bool) -> Result<(), RgbFault> {
        self.call(Operation::Mirror)
    }

    fn disp_on_off(&mut self, _on: bool) -> Result<(), RgbFault> {
        self.call(Operation::DispOnOff)
    }

    fn draw_bitmap(
        &mut self,
        _x_start: u16,
        _y_start: u16,
        _x_end: u16,
        _y_end: u16,
        _data: &[u8],
    ) -> Result<(), RgbFault> {
        self.call(Operation::DrawBitmap)
    }

    fn delete(self) -> Result<(), RgbFault> {
        self.call(Operation::Delete)
    }
}
