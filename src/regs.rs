//! BNO055 register map, page 0. See datasheet section 4.2.

/// Default 7-bit device address (COM3 pin high).
pub const BNO055_DEFAULT_ADDR: u8 = 0x29;

/// Alternate 7-bit device address (COM3 pin low).
pub const BNO055_ALTERNATE_ADDR: u8 = 0x28;

/// Factory-programmed chip ID value.
pub const BNO055_ID: u8 = 0xA0;

pub const BNO055_CHIP_ID: u8 = 0x00;
pub const BNO055_ACC_DATA_X_LSB: u8 = 0x08;
pub const BNO055_OPR_MODE: u8 = 0x3D;

/// Worst-case settling time after an operating mode change, in ms.
pub const BNO055_MODE_SWITCH_DELAY_MS: u32 = 20;
