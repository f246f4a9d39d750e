use crate::command::MADCTL_BGR;

/// Pixel format on the RGB data bus.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    Rgb565,
    Rgb666,
    Rgb888,
}

/// The colour format is not one the controller can be configured for.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedFormat;

impl PixelFormat {
    pub fn from_bits_per_pixel(bits: u8) -> Result<Self, UnsupportedFormat> {
        match bits {
            16 => Ok(PixelFormat::Rgb565),
            18 => Ok(PixelFormat::Rgb666),
            24 => Ok(PixelFormat::Rgb888),
            _ => Err(UnsupportedFormat),
        }
    }

    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Rgb565 => 16,
            PixelFormat::Rgb666 => 18,
            PixelFormat::Rgb888 => 24,
        }
    }

    /// COLMOD value, DPI field only
    pub const fn colmod(self) -> u8 {
        match self {
            PixelFormat::Rgb565 => 0x50,
            PixelFormat::Rgb666 => 0x60,
            PixelFormat::Rgb888 => 0x70,
        }
    }
}

/// Order of the colour elements on the data bus.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ElementOrder {
    Rgb = 0,
    Bgr = 1,
}

impl ElementOrder {
    /// MADCTL bits selecting this order
    pub const fn madctl_bits(self) -> u8 {
        match self {
            ElementOrder::Rgb => 0,
            ElementOrder::Bgr => MADCTL_BGR,
        }
    }
}

impl TryFrom<u8> for ElementOrder {
    type Error = UnsupportedFormat;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ElementOrder::Rgb),
            1 => Ok(ElementOrder::Bgr),
            _ => Err(UnsupportedFormat),
        }
    }
}

impl From<ElementOrder> for u8 {
    fn from(order: ElementOrder) -> u8 {
        order as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn colmod_codes_are_distinct() {
        let codes = [
            PixelFormat::Rgb565.colmod(),
            PixelFormat::Rgb666.colmod(),
            PixelFormat::Rgb888.colmod(),
        ];
        assert_eq!(codes, [0x50, 0x60, 0x70]);
    }

    #[test]
    fn element_order_bits() {
        assert_eq!(ElementOrder::Rgb.madctl_bits(), 0);
        assert_eq!(ElementOrder::Bgr.madctl_bits(), MADCTL_BGR);
        assert_ne!(MADCTL_BGR, 0);
    }

    proptest! {
        #[test]
        fn bits_per_pixel_mapping(bits in any::<u8>()) {
            match PixelFormat::from_bits_per_pixel(bits) {
                Ok(format) => {
                    prop_assert!(matches!(bits, 16 | 18 | 24));
                    prop_assert_eq!(format.bits_per_pixel(), bits);
                    prop_assert_eq!(
                        PixelFormat::from_bits_per_pixel(bits).map(PixelFormat::colmod),
                        Ok(format.colmod())
                    );
                }
                Err(UnsupportedFormat) => prop_assert!(!matches!(bits, 16 | 18 | 24)),
            }
        }

        #[test]
        fn element_order_from_raw(raw in any::<u8>()) {
            match ElementOrder::try_from(raw) {
                Ok(order) => prop_assert_eq!(u8::from(order), raw),
                Err(_) => prop_assert!(raw > 1),
            }
        }
    }
}
