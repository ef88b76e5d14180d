extern crate rsmovint;

use rsmovint::{
    cfg::{IntegratorCfg, Storage},
    integrator::MovingIntegrator,
    model::moving_mean,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // two fractional output bits on top of the 8 bit mean
    let cfg = IntegratorCfg {
        in_width: 8,
        out_width: 10,
        samples: 4,
        signed: false,
        round_even: false,
        protection_bits: 0,
        storage: Storage::ShiftRegister,
    };
    let signal: Vec<i64> = (1..=8).collect();

    let mut mi = MovingIntegrator::<i64>::new(&cfg)?;
    mi.hold_reset();
    let latency = mi.latency();
    let mut input = signal.clone();
    input.extend(std::iter::repeat(0).take(latency));
    let out = mi.process(&input);

    let scale = (1 << (mi.widths().output - cfg.in_width)) as f64;
    let fixed: Vec<f64> = out[latency..].iter().map(|&y| y as f64 / scale).collect();
    let float: Vec<f64> = signal.iter().map(|&x| x as f64).collect();
    println!("{:?}", moving_mean(&float, cfg.samples, true));
    println!("{:?}", fixed);
    Ok(())
}
