#[cfg(not(feature = "defmt-03"))]
use bitflags::bitflags;
#[cfg(feature = "defmt-03")]
use defmt::bitflags;

pub use mint;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Values of the `OPR_MODE` register. See datasheet section 3.3.
    ///
    /// Only the non-fusion configuration and accelerometer modes are
    /// carried here; the device boots into `CONFIG_MODE`.
    #[cfg_attr(not(feature = "defmt-03"), derive(Debug, Clone, Copy, PartialEq, Eq))]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct BNO055OperationMode: u8 {
        const CONFIG_MODE = 0b0000;
        const ACC_ONLY = 0b1000;
    }
}

impl BNO055OperationMode {
    /// Checks if the accelerometer is sampling in this mode.
    pub fn is_accel_enabled(&self) -> bool {
        self.contains(Self::ACC_ONLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_mode_has_no_accelerometer() {
        assert!(!BNO055OperationMode::CONFIG_MODE.is_accel_enabled());
        assert!(BNO055OperationMode::ACC_ONLY.is_accel_enabled());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn operation_mode_is_serializable() {
        fn assert_impl<T: serde::Serialize + serde::de::DeserializeOwned>() {}

        assert_impl::<BNO055OperationMode>();
    }
}
