extern crate rsmovint;

use std::{
    fs::File,
    io::BufWriter,
};

use anyhow::Result;

use clap::{
    App,
    Arg
};

use log::info;

use rand::{
    rngs::StdRng,
    SeedableRng
};

use serde_yaml::from_reader;

use rsmovint::{
    cfg::VectorCfg,
    vectors::{
        generate,
        write_vectors
    }
};

pub fn main() -> Result<()> {
    env_logger::init();
    let matches=App::new("gen_vectors")
    .arg(Arg::new("cfg")
        .short('c')
        .long("cfg")
        .takes_value(true)
        .value_name("config file")
        .required(true)
    )
    .arg(
        Arg::new("outprefix")
        .short('o')
        .long("out")
        .takes_value(true)
        .value_name("output prefix")
        .required(true)
    ).get_matches();

    let cfg_file=File::open(matches.value_of("cfg").unwrap())?;
    let VectorCfg{
        integrator,
        vector_len,
        nvectors,
        seed
    }=from_reader(cfg_file)?;

    let mut rng=match seed{
        Some(s)=>StdRng::seed_from_u64(s),
        None=>StdRng::from_entropy(),
    };

    let prefix=matches.value_of("outprefix").unwrap();
    for i in 0..nvectors{
        let vectors=generate(&integrator, vector_len, &mut rng)?;
        let filename=format!("{}_{}.txt", prefix, i);
        write_vectors(BufWriter::new(File::create(&filename)?), &vectors)?;
        info!("wrote {} vectors to {}", vectors.len(), filename);
    }
    Ok(())
}
