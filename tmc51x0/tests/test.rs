use std::{
    num::NonZeroU8,
    sync::{Arc, Mutex},
};

use tmc51x0::{
    converter::DIVISOR_DEFAULT,
    link::{Link, LinkError, Nop, SpiParameters},
    prelude::*,
    MHz,
};

const XACTUAL: u8 = 0x21;
const VMAX: u8 = 0x27;
const TSTEP: u8 = 0x12;

#[test]
fn documented_defaults() {
    let converter = Converter::new();

    assert_eq!(16 * MHz, converter.clock_frequency());
    assert_eq!(62, converter.clock_duration_ns());
    assert_eq!(
        converter.tstep_to_velocity_hz(DIVISOR_DEFAULT),
        converter.tstep_to_velocity_hz(0)
    );
    assert_eq!(
        converter.percent_to_current_setting(100),
        converter.percent_to_current_setting(150)
    );
    assert_eq!(0, converter.percent_to_global_current_scaler(100));
    assert_eq!(1, converter.velocity_real_to_hz(1));
    assert_eq!(0, converter.velocity_real_to_chip(1));
    assert_eq!(3, converter.milliseconds_to_tzerowait(100));
}

#[test]
fn motion_registers_round_trip() -> anyhow::Result<()> {
    let settings = ConverterSettings::new()
        .with_clock_frequency_mhz(NonZeroU8::new(12).unwrap())
        .with_microsteps_per_real_position_unit(51200)
        .with_seconds_per_real_velocity_unit(1);
    let mut tmc = Tmc51x0::setup(Nop::new(), settings)?;
    let converter = tmc.converter().snapshot();

    tmc.registers_mut()
        .write(XACTUAL, converter.position_real_to_chip(-3) as u32)?;
    tmc.registers_mut()
        .write(VMAX, converter.velocity_real_to_chip(2) as u32)?;

    let position = tmc.registers_mut().read(XACTUAL)? as i32;
    assert_eq!(-153_600, position);
    assert_eq!(-3, converter.position_chip_to_real(position));

    let velocity = tmc.registers().stored(VMAX)? as i32;
    assert_eq!(71_582, velocity);
    assert_eq!(1, converter.velocity_chip_to_real(velocity));
    Ok(())
}

#[test]
fn tstep_reading() -> anyhow::Result<()> {
    let mut tmc = Tmc51x0::setup(
        Nop::new(),
        ConverterSettings::new().with_microsteps_per_real_position_unit(256),
    )?;
    let converter = tmc.converter().snapshot();

    tmc.registers_mut().write(TSTEP, 0)?;
    let tstep = tmc.registers_mut().read(TSTEP)? as i32;
    assert_eq!(62_500, converter.tstep_to_velocity_real(tstep));

    tmc.registers_mut().write(TSTEP, 625)?;
    let tstep = tmc.registers_mut().read(TSTEP)? as i32;
    assert_eq!(100, converter.tstep_to_velocity_real(tstep));
    assert_eq!(625, converter.velocity_real_to_tstep(100));
    Ok(())
}

#[test]
fn reconfigure_requires_reconversion() -> anyhow::Result<()> {
    let tmc = Tmc51x0::setup(Nop::new(), ConverterSettings::new())?;
    let handle = tmc.converter();

    let chip = handle.snapshot().velocity_real_to_chip(1_000_000);
    tmc.reconfigure(ConverterSettings::new().with_clock_frequency_mhz(NonZeroU8::new(8).unwrap()));
    let rechip = handle.snapshot().velocity_real_to_chip(1_000_000);

    assert_eq!(524_288, chip);
    assert_eq!(1_048_576, rechip);
    Ok(())
}

#[derive(Default, Clone)]
struct Recorder {
    is_open: bool,
    log: Arc<Mutex<Vec<(u8, u32)>>>,
}

impl Link for Recorder {
    fn open(&mut self, params: &SpiParameters) -> Result<(), LinkError> {
        if params.clock > 4 * MHz {
            return Err(LinkError::new(format!("SCK too fast: {:?}", params.clock)));
        }
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn read(&mut self, _address: u8) -> Result<u32, LinkError> {
        Ok(0)
    }

    fn write(&mut self, address: u8, value: u32) -> Result<(), LinkError> {
        self.log
            .lock()
            .map_err(|e| LinkError::new(e.to_string()))?
            .push((address, value));
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}

#[test]
fn custom_link() -> anyhow::Result<()> {
    let recorder = Recorder::default();
    let log = recorder.log.clone();

    let mut tmc = Tmc51x0::setup(recorder, ConverterSettings::new())?;
    let converter = tmc.converter().snapshot();
    tmc.registers_mut()
        .write(0x10, u32::from(converter.percent_to_current_setting(50)))?;
    tmc.registers_mut()
        .write(0x0B, u32::from(converter.percent_to_global_current_scaler(10)))?;

    assert_eq!(vec![(0x10u8, 15u32), (0x0B, 32)], *log.lock().unwrap());
    Ok(())
}

#[test]
fn link_open_error() {
    let params = SpiParameters::new().with_clock(8 * MHz);
    let result = Tmc51x0::setup_with(Recorder::default(), &params, ConverterSettings::new());
    assert_eq!(
        Some(Tmc51x0Error::Link(LinkError::new(
            "SCK too fast: 8000000 Hz".to_owned()
        ))),
        result.err()
    );
}

#[test]
fn boxed_link() -> anyhow::Result<()> {
    let link: Box<dyn Link> = Box::new(Nop::new());
    let mut tmc = Tmc51x0::setup(link, ConverterSettings::new())?;
    tmc.registers_mut().write(0x00, 1)?;
    assert_eq!(1, tmc.registers_mut().read(0x00)?);
    Ok(())
}
