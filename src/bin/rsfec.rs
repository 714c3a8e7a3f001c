//! Command-line driver for the Reed-Solomon codec
//!
//! Encodes and decodes single blocks given as hex strings, standing in for
//! any application that frames its data into fixed-size blocks.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use rsfec::RsCodec;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let length_arg = Arg::new("length")
        .short('n')
        .long("length")
        .help("Total codeword length in bytes (max 255)")
        .value_name("BYTES")
        .default_value("255");
    let parity_arg = Arg::new("parity")
        .short('p')
        .long("parity")
        .help("Number of parity bytes (even; corrects parity/2 errors)")
        .value_name("BYTES")
        .default_value("32");

    let matches = Command::new("rsfec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon GF(2^8) block encoder/decoder")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Encode a data block, appending parity bytes")
                .arg(length_arg.clone())
                .arg(parity_arg.clone())
                .arg(
                    Arg::new("data")
                        .help("Data block as a hex string (length - parity bytes)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Decode a codeword, correcting up to parity/2 errors")
                .arg(length_arg)
                .arg(parity_arg)
                .arg(
                    Arg::new("codeword")
                        .help("Received codeword as a hex string (length bytes)")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("encode", sub)) => {
            let codec = codec_from_args(sub)?;
            let data = hex_arg(sub, "data")?;
            let codeword = codec.encode(&data)?;
            println!("{}", hex::encode(codeword));
        }
        Some(("decode", sub)) => {
            let codec = codec_from_args(sub)?;
            let codeword = hex_arg(sub, "codeword")?;
            let data = codec.decode(&codeword)?;
            println!("{}", hex::encode(data));
        }
        _ => unreachable!("subcommand required"),
    }

    Ok(())
}

fn codec_from_args(matches: &clap::ArgMatches) -> Result<RsCodec> {
    let length: usize = matches
        .get_one::<String>("length")
        .expect("has default")
        .parse()
        .context("codeword length must be an integer")?;
    let parity: usize = matches
        .get_one::<String>("parity")
        .expect("has default")
        .parse()
        .context("parity length must be an integer")?;

    Ok(RsCodec::new(length, parity)?)
}

fn hex_arg(matches: &clap::ArgMatches, name: &str) -> Result<Vec<u8>> {
    let value = matches.get_one::<String>(name).expect("required arg");
    hex::decode(value).with_context(|| format!("{name} must be a hex string"))
}
