extern crate clap;

use std::env;

use anyhow::{Context as _, Result};
use camino::{Utf8Path, Utf8PathBuf};

use hf2gp::{ConvertError, ConverterBuilder, ErrorKind};

mod cli;

fn default_outdir(input: &Utf8Path) -> Utf8PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_owned(),
        _ => Utf8PathBuf::from("."),
    }
}

fn main() {
    let result = try_main();
    match result {
        Err(e) => {
            let label = match e.downcast_ref::<ConvertError>().map(ConvertError::kind) {
                Some(ErrorKind::Parse) => "parse error",
                Some(ErrorKind::Resource) => "resource error",
                None => "error",
            };
            eprintln!("hf2gp: {label}: {e:#}");
            std::process::exit(1);
        }
        Ok(code) => std::process::exit(code),
    };
}

fn try_main() -> Result<i32> {
    let matches = cli::clap().get_matches();

    match matches.subcommand() {
        Some(("completion", matches)) => {
            fn print_completions<G: clap_complete::Generator>(gen: G, cmd: &mut clap::Command) {
                clap_complete::generate(
                    gen,
                    cmd,
                    cmd.get_name().to_string(),
                    &mut std::io::stdout(),
                );
            }
            if let Some(generator) = matches
                .get_one::<clap_complete::Shell>("generator")
                .copied()
            {
                let mut cmd = cli::clap();
                eprintln!("Generating completion file for {}...", generator);
                print_completions(generator, &mut cmd);
            }
            return Ok(0);
        }
        Some(("manpages", matches)) => {
            let mut outpath: Utf8PathBuf =
                matches.get_one::<Utf8PathBuf>("outdir").unwrap().clone();
            outpath.push("hf2gp.1");

            let man = clap_mangen::Man::new(cli::clap());
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            std::fs::write(&outpath, buffer).with_context(|| format!("creating {outpath}"))?;

            return Ok(0);
        }
        _ => (),
    }

    if let Some(dir) = matches.get_one::<Utf8PathBuf>("chdir") {
        env::set_current_dir(dir).context(format!("cannot change to directory \"{dir}\""))?;
    }

    let verbose = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");

    let input = matches.get_one::<Utf8PathBuf>("input").unwrap();
    let outdir = match matches.get_one::<Utf8PathBuf>("outdir") {
        Some(outdir) => outdir.clone(),
        None => default_outdir(input),
    };
    let parameter = matches.get_one::<String>("parameter").unwrap();

    let converter = ConverterBuilder::default()
        .input(input.clone())
        .outdir(outdir.clone())
        .parameter(parameter.clone())
        .build()?;

    let written = converter.convert()?;

    if !quiet {
        if verbose > 0 {
            for dat in &written {
                println!("hf2gp: wrote {} ({} rows)", dat.path, dat.rows);
            }
        }
        let rows: usize = written.iter().map(|dat| dat.rows).sum();
        println!(
            "hf2gp: converted {rows} results from {input} into {} data files in {outdir}",
            written.len()
        );
    }

    Ok(0)
}
