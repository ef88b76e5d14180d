extern crate rsmovint;

use std::{
    fs::File,
    io::BufReader,
};

use anyhow::{
    bail,
    Result
};

use clap::{
    App,
    Arg
};

use log::{
    info,
    warn
};

use rayon::prelude::*;

use serde_yaml::from_reader;

use rsmovint::{
    cfg::VectorCfg,
    vectors::{
        check,
        read_vectors,
        CheckReport
    }
};

fn check_file(cfg: &VectorCfg, filename: &str) -> Result<CheckReport> {
    let vectors=read_vectors(BufReader::new(File::open(filename)?))?;
    let report=check(&cfg.integrator, &vectors)?;
    if report.passed(){
        info!("{}: {} outputs match", filename, report.checked);
    }else{
        for m in report.mismatches.iter().take(10){
            warn!("{}: tick {} expected {} got {}", filename, m.index, m.expected, m.actual);
        }
    }
    Ok(report)
}

pub fn main() -> Result<()> {
    env_logger::init();
    let matches=App::new("check_vectors")
    .arg(Arg::new("cfg")
        .short('c')
        .long("cfg")
        .takes_value(true)
        .value_name("config file")
        .required(true)
    )
    .arg(
        Arg::new("vectors")
        .takes_value(true)
        .multiple_values(true)
        .value_name("vector files")
        .required(true)
    ).get_matches();

    let cfg: VectorCfg=from_reader(File::open(matches.value_of("cfg").unwrap())?)?;
    let files: Vec<_>=matches.values_of("vectors").unwrap().collect();

    let reports=files
        .par_iter()
        .map(|f| check_file(&cfg, f))
        .collect::<Result<Vec<_>>>()?;

    let failed=reports.iter().filter(|r| !r.passed()).count();
    println!("{} files checked, {} failed", reports.len(), failed);
    if failed>0{
        bail!("{} of {} vector files mismatch", failed, reports.len());
    }
    Ok(())
}
