//! UC8151 e-paper driver (Badger 2040 / Pimoroni 2.9" 128x296 panel)
//!
//! Keeps a full 1-bpp framebuffer and pushes it to the controller on
//! `present`. Drawing goes through `embedded-graphics` in logical
//! (rotated) coordinates; writes outside the canvas are dropped.
//!
//! BUSY is active-low. `wait_busy` polls with no timeout: a present
//! always runs to completion.

use badge_core::traits::{Canvas, DisplayConfig, DisplayError, RefreshSpeed, Rotation};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

/// Panel width in pixels (source lines)
pub const WIDTH: u16 = 128;
/// Panel height in pixels (gate lines)
pub const HEIGHT: u16 = 296;
/// Framebuffer size in bytes
pub const BUFFER_LEN: usize = WIDTH as usize * HEIGHT as usize / 8;

const BUSY_POLL_MS: u32 = 10;
const RESET_PULSE_MS: u32 = 10;

/// UC8151 command set
pub mod cmd {
    /// Panel setting
    pub const PSR: u8 = 0x00;
    /// Power setting
    pub const PWR: u8 = 0x01;
    /// Power off
    pub const POF: u8 = 0x02;
    /// Power off sequence
    pub const PFS: u8 = 0x03;
    /// Power on
    pub const PON: u8 = 0x04;
    /// Booster soft start
    pub const BTST: u8 = 0x06;
    /// Deep sleep
    pub const DSLP: u8 = 0x07;
    /// Data stop
    pub const DSP: u8 = 0x11;
    /// Display refresh
    pub const DRF: u8 = 0x12;
    /// Start transmission, new data
    pub const DTM2: u8 = 0x13;
    pub const LUT_VCOM: u8 = 0x20;
    pub const LUT_WW: u8 = 0x21;
    pub const LUT_BW: u8 = 0x22;
    pub const LUT_WB: u8 = 0x23;
    pub const LUT_BB: u8 = 0x24;
    /// Oscillator control
    pub const PLL: u8 = 0x30;
    /// Temperature sensor selection
    pub const TSE: u8 = 0x41;
    /// VCOM and data interval
    pub const CDI: u8 = 0x50;
    /// Gate/source non-overlap period
    pub const TCON: u8 = 0x60;
    /// Partial mode out
    pub const PTOU: u8 = 0x92;
}

/// Register values used by the init sequence
mod val {
    /// 128x296, register LUT, B/W, scan up, shift right, booster on, no reset
    pub const PSR_LUT_REG: u8 = 0xBF;
    /// As above with the controller's OTP waveform
    pub const PSR_LUT_OTP: u8 = 0x9F;
    /// Internal VDS/VDG, VCOM from VD, 16 V gate, +11 V source
    pub const PWR: [u8; 5] = [0x03, 0x00, 0x2B, 0x2B, 0x2B];
    /// 10 ms start, strength 3, 6.58 us off time, all three phases
    pub const BTST: [u8; 3] = [0x17, 0x17, 0x17];
    pub const PFS_1_FRAME: u8 = 0x00;
    pub const TSE_INTERNAL: u8 = 0x00;
    pub const TCON: u8 = 0x22;
    /// White border, normal polarity
    pub const CDI: u8 = 0x5C;
    pub const PLL_100HZ: u8 = 0x3A;
    /// Deep sleep check code
    pub const DSLP_CHECK: u8 = 0xA5;
}

/// LUT row count (VCOM has two extra trailing bytes)
const LUT_ROWS: usize = 7;
const LUT_LEN: usize = LUT_ROWS * 6;
const LUT_VCOM_LEN: usize = LUT_LEN + 2;

/// Waveform timing for a register LUT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Waveform {
    /// Frames per flash phase
    flash: u8,
    /// Frames of the settle phase
    settle: u8,
    /// Repeat count of the middle (inversion) row
    repeat: u8,
}

impl Waveform {
    /// Timing for a speed, `None` for the OTP waveform
    fn for_speed(speed: RefreshSpeed) -> Option<Self> {
        match speed {
            RefreshSpeed::Default => None,
            RefreshSpeed::Medium => Some(Self {
                flash: 8,
                settle: 14,
                repeat: 2,
            }),
            RefreshSpeed::Fast => Some(Self {
                flash: 4,
                settle: 7,
                repeat: 2,
            }),
            RefreshSpeed::Turbo => Some(Self {
                flash: 2,
                settle: 3,
                repeat: 1,
            }),
        }
    }

    /// Build one LUT from per-row voltage selections
    ///
    /// Each row is `[levels, frames A, B, C, D, repeat]`; unused rows stay
    /// zero.
    fn table<const N: usize>(&self, levels: [u8; 3]) -> [u8; N] {
        let mut lut = [0u8; N];
        let rows = [
            [levels[0], self.flash, self.flash, self.settle, 0, 1],
            [levels[1], self.flash * 3, self.flash * 3, 0, 0, self.repeat],
            [levels[2], self.flash, self.flash, self.settle, 0, self.repeat],
        ];
        for (i, row) in rows.iter().enumerate() {
            lut[i * 6..i * 6 + 6].copy_from_slice(row);
        }
        lut
    }
}

/// Level selections: 01 = VDH, 10 = VDL, 00 = VCOM
const TO_WHITE: [u8; 3] = [0x54, 0x60, 0xA8];
const TO_BLACK: [u8; 3] = [0xA8, 0x60, 0x54];
const VCOM: [u8; 3] = [0x00, 0x00, 0x00];

/// UC8151 panel with its framebuffer
///
/// Takes an `SpiDevice` (chip select handled by the bus device), DC and
/// RST outputs, the BUSY input and a delay provider.
pub struct Uc8151<SPI, DC, RST, BUSY, DELAY> {
    spi: SPI,
    dc: DC,
    rst: RST,
    busy: BUSY,
    delay: DELAY,
    buffer: [u8; BUFFER_LEN],
    rotation: Rotation,
    speed: RefreshSpeed,
    blocking: bool,
    /// A refresh was started without waiting for it
    refreshing: bool,
}

impl<SPI, DC, RST, BUSY, DELAY> Uc8151<SPI, DC, RST, BUSY, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
    DELAY: DelayNs,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY, delay: DELAY) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            delay,
            buffer: [0; BUFFER_LEN],
            rotation: Rotation::Deg0,
            speed: RefreshSpeed::Default,
            blocking: true,
            refreshing: false,
        }
    }

    /// Hardware reset pulse
    pub fn reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_low().map_err(|_| DisplayError::Pin)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.wait_busy()
    }

    /// Panel is running a refresh or power sequence
    pub fn is_busy(&mut self) -> Result<bool, DisplayError> {
        self.busy.is_low().map_err(|_| DisplayError::Pin)
    }

    /// Poll BUSY until the controller is idle
    pub fn wait_busy(&mut self) -> Result<(), DisplayError> {
        while self.is_busy()? {
            self.delay.delay_ms(BUSY_POLL_MS);
        }
        self.refreshing = false;
        Ok(())
    }

    /// Power the panel down and enter deep sleep
    ///
    /// Only a hardware reset (`configure`) wakes it again.
    pub fn sleep(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::POF, &[])?;
        self.wait_busy()?;
        self.command(cmd::DSLP, &[val::DSLP_CHECK])
    }

    /// Raw framebuffer, physical orientation, 1 = black
    #[cfg(test)]
    fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Set one pixel in physical coordinates
    fn set_physical(&mut self, x: u16, y: u16, color: BinaryColor) {
        let index = (y as usize * WIDTH as usize + x as usize) / 8;
        let mask = 0x80 >> (x % 8);
        match color {
            BinaryColor::On => self.buffer[index] |= mask,
            BinaryColor::Off => self.buffer[index] &= !mask,
        }
    }

    /// Map logical to physical coordinates, `None` when off-panel
    fn to_physical(&self, point: Point) -> Option<(u16, u16)> {
        let logical = self.size();
        if point.x < 0
            || point.y < 0
            || point.x >= logical.width as i32
            || point.y >= logical.height as i32
        {
            return None;
        }

        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        let (x, y) = match self.rotation {
            Rotation::Deg0 => (point.x, point.y),
            Rotation::Deg90 => (w - 1 - point.y, point.x),
            Rotation::Deg180 => (w - 1 - point.x, h - 1 - point.y),
            Rotation::Deg270 => (point.y, h - 1 - point.x),
        };
        Some((x as u16, y as u16))
    }

    fn init_sequence(&mut self) -> Result<(), DisplayError> {
        let waveform = Waveform::for_speed(self.speed);
        let psr = if waveform.is_some() {
            val::PSR_LUT_REG
        } else {
            val::PSR_LUT_OTP
        };
        self.command(cmd::PSR, &[psr])?;

        if let Some(waveform) = waveform {
            self.upload_luts(&waveform)?;
        }

        self.command(cmd::PWR, &val::PWR)?;
        self.command(cmd::PON, &[])?;
        self.wait_busy()?;

        self.command(cmd::BTST, &val::BTST)?;
        self.command(cmd::PFS, &[val::PFS_1_FRAME])?;
        self.command(cmd::TSE, &[val::TSE_INTERNAL])?;
        self.command(cmd::TCON, &[val::TCON])?;
        self.command(cmd::CDI, &[val::CDI])?;
        self.command(cmd::PLL, &[val::PLL_100HZ])?;

        self.command(cmd::POF, &[])?;
        self.wait_busy()
    }

    fn upload_luts(&mut self, waveform: &Waveform) -> Result<(), DisplayError> {
        let vcom: [u8; LUT_VCOM_LEN] = waveform.table(VCOM);
        let white: [u8; LUT_LEN] = waveform.table(TO_WHITE);
        let black: [u8; LUT_LEN] = waveform.table(TO_BLACK);

        self.command(cmd::LUT_VCOM, &vcom)?;
        self.command(cmd::LUT_WW, &white)?;
        self.command(cmd::LUT_BW, &white)?;
        self.command(cmd::LUT_WB, &black)?;
        self.command(cmd::LUT_BB, &black)
    }

    /// Push the framebuffer and trigger a full refresh
    fn refresh(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::PON, &[])?;
        self.command(cmd::PTOU, &[])?;
        self.send_command(cmd::DTM2)?;
        self.dc.set_high().map_err(|_| DisplayError::Pin)?;
        self.spi
            .write(&self.buffer)
            .map_err(|_| DisplayError::Communication)?;
        self.command(cmd::DSP, &[])?;
        self.command(cmd::DRF, &[])?;

        if self.blocking {
            self.wait_busy()?;
            self.command(cmd::POF, &[])?;
        } else {
            self.refreshing = true;
        }
        Ok(())
    }

    /// Send a command with optional data
    ///
    /// Waits out a pending non-blocking refresh first.
    fn command(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.send_command(command)?;
        if !data.is_empty() {
            self.dc.set_high().map_err(|_| DisplayError::Pin)?;
            self.spi.write(data).map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        if self.refreshing {
            self.wait_busy()?;
        }
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.spi
            .write(&[command])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<SPI, DC, RST, BUSY, DELAY> OriginDimensions for Uc8151<SPI, DC, RST, BUSY, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
    DELAY: DelayNs,
{
    fn size(&self) -> Size {
        match self.rotation {
            Rotation::Deg0 | Rotation::Deg180 => Size::new(WIDTH as u32, HEIGHT as u32),
            Rotation::Deg90 | Rotation::Deg270 => Size::new(HEIGHT as u32, WIDTH as u32),
        }
    }
}

impl<SPI, DC, RST, BUSY, DELAY> DrawTarget for Uc8151<SPI, DC, RST, BUSY, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
    DELAY: DelayNs,
{
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some((x, y)) = self.to_physical(point) {
                self.set_physical(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        self.buffer.fill(fill);
        Ok(())
    }
}

impl<SPI, DC, RST, BUSY, DELAY> Canvas for Uc8151<SPI, DC, RST, BUSY, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
    DELAY: DelayNs,
{
    fn configure(&mut self, config: &DisplayConfig) -> Result<(), DisplayError> {
        self.rotation = config.rotation;
        self.speed = config.speed;
        self.blocking = config.blocking;
        self.refreshing = false;

        self.reset()?;
        self.init_sequence()
    }

    fn clear_buffer(&mut self) {
        self.buffer.fill(0x00);
    }

    fn clear_display(&mut self) -> Result<(), DisplayError> {
        self.clear_buffer();
        self.refresh()
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.refresh()
    }
}
