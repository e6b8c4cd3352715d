//! Bosch Sensortec BNO055 accelerometer driver.
//! Datasheet: https://ae-bst.resource.bosch.com/media/_tech/media/datasheets/BST-BNO055-DS000.pdf
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use byteorder::{ByteOrder, LittleEndian};
pub use mint;

use crate::regs;
use crate::types::*;

/// All possible errors in this crate
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C bus error
    I2c(E),

    /// Invalid chip ID was read
    InvalidChipId(u8),

    /// Invalid (not applicable) device mode.
    InvalidMode,
}

#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Bno055<I> {
    i2c: I,
    pub mode: BNO055OperationMode,
    use_default_addr: bool,
}

impl<I, E> Bno055<I>
where
    I: I2c<Error = E>,
{
    /// Side-effect-free constructor.
    /// Nothing will be read or written before the first operation.
    pub fn new(i2c: I) -> Self {
        Bno055 {
            i2c,
            mode: BNO055OperationMode::CONFIG_MODE,
            use_default_addr: true,
        }
    }

    /// Destroy driver instance, return I2C bus instance.
    pub fn destroy(self) -> I {
        self.i2c
    }

    /// Enables use of alternative I2C address `regs::BNO055_ALTERNATE_ADDR`.
    pub fn with_alternative_address(mut self) -> Self {
        self.use_default_addr = false;

        self
    }

    /// Sets the operating mode, see [BNO055OperationMode](crate::types::BNO055OperationMode).
    /// See section 3.3.
    ///
    /// Writes the mode register and waits out the mode switch settling
    /// time. Skipped entirely when the cached mode already matches.
    pub async fn set_mode<D>(
        &mut self,
        mode: BNO055OperationMode,
        delay: &mut D,
    ) -> Result<(), Error<E>>
    where
        D: DelayNs,
    {
        if self.mode != mode {
            self.write_u8(regs::BNO055_OPR_MODE, mode.bits())
                .await
                .map_err(Error::I2c)?;

            // Cache only once the device has accepted the write, so a
            // failed switch does not open the accelerometer mode gate.
            self.mode = mode;

            delay.delay_ms(regs::BNO055_MODE_SWITCH_DELAY_MS).await;
        }

        Ok(())
    }

    /// Returns device's factory-programmed and constant chip ID.
    /// This ID is device model ID and not a BNO055's unique ID, which is stored in a different register.
    pub async fn id(&mut self) -> Result<u8, Error<E>> {
        self.read_u8(regs::BNO055_CHIP_ID).await.map_err(Error::I2c)
    }

    /// Reads the chip ID and checks it against the factory value.
    pub async fn verify_chip_id(&mut self) -> Result<(), Error<E>> {
        let id = self.id().await?;
        if id != regs::BNO055_ID {
            return Err(Error::InvalidChipId(id));
        }

        Ok(())
    }

    /// Returns current accelerometer data in cm/s^2 units.
    /// Available only in modes in which accelerometer is enabled.
    ///
    /// The register select and the 6-byte burst are two separate bus
    /// transactions; the device auto-increments the register pointer
    /// during the read.
    pub async fn accel_data_fixed(&mut self) -> Result<mint::Vector3<i16>, Error<E>> {
        if !self.mode.is_accel_enabled() {
            return Err(Error::InvalidMode);
        }

        let mut buf: [u8; 6] = [0; 6];

        self.i2c
            .write(self.i2c_addr(), &[regs::BNO055_ACC_DATA_X_LSB])
            .await
            .map_err(Error::I2c)?;

        self.i2c
            .read(self.i2c_addr(), &mut buf)
            .await
            .map_err(Error::I2c)?;

        Ok(decode_accel(&buf))
    }

    /// Returns current accelerometer data in m/s^2 units.
    /// Available only in modes in which accelerometer is enabled.
    pub async fn accel_data(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        let a = self.accel_data_fixed().await?;
        let scaling = 1f32 / 100f32; // 1 m/s^2 = 100 lsb
        Ok(mint::Vector3::from([
            a.x as f32 * scaling,
            a.y as f32 * scaling,
            a.z as f32 * scaling,
        ]))
    }

    #[inline(always)]
    fn i2c_addr(&self) -> u8 {
        if !self.use_default_addr {
            regs::BNO055_ALTERNATE_ADDR
        } else {
            regs::BNO055_DEFAULT_ADDR
        }
    }

    async fn read_u8(&mut self, reg: u8) -> Result<u8, E> {
        let mut byte: [u8; 1] = [0; 1];
        self.i2c.write_read(self.i2c_addr(), &[reg], &mut byte).await?;
        Ok(byte[0])
    }

    async fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), E> {
        self.i2c.write(self.i2c_addr(), &[reg, value]).await?;
        Ok(())
    }
}

/// Decodes a raw accelerometer burst into signed axis words, low byte first.
fn decode_accel(buf: &[u8; 6]) -> mint::Vector3<i16> {
    let x = LittleEndian::read_i16(&buf[0..2]);
    let y = LittleEndian::read_i16(&buf[2..4]);
    let z = LittleEndian::read_i16(&buf[4..6]);

    mint::Vector3::from([x, y, z])
}
