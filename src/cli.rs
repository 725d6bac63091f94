use camino::Utf8PathBuf;

use clap::{crate_version, value_parser, Arg, ArgAction, Command, ValueHint};

pub fn clap() -> clap::Command {
    Command::new("hf2gp")
        .version(crate_version!())
        .about("Convert hyperfine JSON results into gnuplot data files")
        .arg(
            Arg::new("chdir")
                .short('C')
                .long("chdir")
                .help("change working directory before doing anything else")
                .required(false)
                .value_parser(clap::value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::DirPath)
                .num_args(1),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("hyperfine JSON export (--export-json) to read")
                .env("HF2GP_INPUT")
                .num_args(1)
                .value_name("FILE")
                .default_value("results/out.json")
                .value_parser(clap::value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("outdir")
                .short('o')
                .long("outdir")
                .help("directory for the .dat files [default: directory of the input file]")
                .env("HF2GP_OUTDIR")
                .num_args(1)
                .value_name("DIR")
                .value_parser(clap::value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("parameter")
                .short('p')
                .long("parameter")
                .help("hyperfine parameter to use as first column")
                .env("HF2GP_PARAMETER")
                .num_args(1)
                .value_name("NAME")
                .default_value(hf2gp::DEFAULT_PARAMETER),
        )
        .arg(
            Arg::new("verbose")
                .help("list every written file")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .help("don't print anything on success")
                .short('q')
                .long("quiet")
                .conflicts_with("verbose")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("completion")
                .about("Generate hf2gp shell completions.")
                .arg(
                    Arg::new("generator")
                        .help("shell to generate completions for")
                        .long("generate")
                        .value_parser(value_parser!(clap_complete::Shell)),
                )
                .hide(true),
        )
        .subcommand(
            Command::new("manpages")
                .about("Generate hf2gp manpages.")
                .arg(
                    Arg::new("outdir")
                        .help("directory in which to create manpage files")
                        .value_parser(value_parser!(Utf8PathBuf))
                        .value_hint(ValueHint::DirPath)
                        .required(true),
                )
                .hide(true),
        )
}
