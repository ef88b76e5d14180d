extern crate rsmovint;

use std::fs::File;

use anyhow::Result;

use clap::{
    App,
    Arg
};

use ndarray::Array1;

use ndarray_npy::NpzWriter;

use serde_yaml::from_reader;

use rsmovint::{
    cfg::VectorCfg,
    integrator::MovingIntegrator,
    model::moving_mean
};

/// feed `signal` after a full reset and return the outputs aligned with it
fn respond(mi: &mut MovingIntegrator<i64>, signal: &[i64]) -> Vec<i64> {
    mi.hold_reset();
    let latency=mi.latency();
    let mut input=signal.to_vec();
    input.extend(std::iter::repeat(0).take(latency));
    mi.process(&input)[latency..].to_vec()
}

pub fn main() -> Result<()> {
    env_logger::init();
    let matches=App::new("impulse_resp")
    .arg(Arg::new("cfg")
        .short('c')
        .long("cfg")
        .takes_value(true)
        .value_name("config file")
        .required(true)
    )
    .arg(
        Arg::new("outfile")
        .short('o')
        .long("out")
        .takes_value(true)
        .value_name("output name")
        .required(true)
    ).get_matches();

    let cfg: VectorCfg=from_reader(File::open(matches.value_of("cfg").unwrap())?)?;
    let cfg=cfg.integrator;
    let mut mi=MovingIntegrator::<i64>::new(&cfg)?;
    let (_, full_scale)=mi.widths().sample_bounds::<i64>();

    let len=4*cfg.samples+8;
    let mut impulse=vec![0i64; len];
    impulse[0]=full_scale;
    let step=vec![full_scale; len];

    let impulse_out=respond(&mut mi, &impulse);
    let step_out=respond(&mut mi, &step);
    let to_f64=|x: &[i64]| x.iter().map(|&y| y as f64).collect::<Vec<_>>();
    let mean=moving_mean(&to_f64(&step), cfg.samples, true);

    let mut npz=NpzWriter::new(File::create(matches.value_of("outfile").unwrap())?);
    npz.add_array("impulse", &Array1::from(impulse))?;
    npz.add_array("impulse_out", &Array1::from(impulse_out))?;
    npz.add_array("step", &Array1::from(step))?;
    npz.add_array("step_out", &Array1::from(step_out))?;
    npz.add_array("mean", &Array1::from(mean))?;
    Ok(())
}
