use std::path::PathBuf;
use std::process;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use env_logger;
use log::error;
use serde_json;

use h3_artifact::{ArtifactDriver, ArtifactLocation, Config, Error, H3Driver};

const LOAD_COMMAND: &str = "load";
const SAVE_COMMAND: &str = "save";
const STORAGE_ARG: &str = "storage";
const BUCKET_ARG: &str = "bucket";
const KEY_ARG: &str = "key";
const ARTIFACT_ARG: &str = "artifact";
const PATH_ARG: &str = "path";
const VERBOSE: &str = "verbose";
const STORAGE_URI_ENV: &str = "H3_STORAGE_URI";

fn new_config(args: &ArgMatches<'_>) -> Result<Config, Error> {
    let mut cfg = match args.value_of(STORAGE_ARG) {
        Some(uri) => Config::new(uri),
        None => Config::from_env()?,
    };

    if args.is_present(VERBOSE) {
        cfg.verbose(true);
    }

    Ok(cfg)
}

fn new_location(args: &ArgMatches<'_>) -> Result<ArtifactLocation, Error> {
    if let Some(json) = args.value_of(ARTIFACT_ARG) {
        return serde_json::from_str(json).map_err(Error::config);
    }

    match (args.value_of(BUCKET_ARG), args.value_of(KEY_ARG)) {
        (Some(bucket), Some(key)) => Ok(ArtifactLocation::new(bucket, key)),
        _ => {
            let err = "Either --artifact or both --bucket and --key are required".to_string();
            Err(Error::config(err))
        }
    }
}

fn finish(cfg: &Config, result: Result<(), Error>) -> Result<(), Error> {
    if let Err(err) = result {
        if cfg.verbose {
            error!("{:?}", err);
        }
        return Err(err);
    }

    Ok(())
}

fn run(args: &ArgMatches<'_>) -> Result<(), Error> {
    env_logger::init();

    let cfg = new_config(&args)?;
    let driver = H3Driver::new(cfg.storage_uri.as_str());

    if let Some(load) = args.subcommand_matches(LOAD_COMMAND) {
        let artifact = new_location(load)?;
        let path = PathBuf::from(load.value_of(PATH_ARG).unwrap());

        return finish(&cfg, driver.load(&artifact, &path));
    }

    if let Some(save) = args.subcommand_matches(SAVE_COMMAND) {
        let artifact = new_location(save)?;
        let path = PathBuf::from(save.value_of(PATH_ARG).unwrap());

        return finish(&cfg, driver.save(&path, &artifact));
    }

    Ok(())
}

fn artifact_args<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name(BUCKET_ARG)
            .long("bucket")
            .short("b")
            .value_name("name")
            .requires(KEY_ARG)
            .help("Bucket holding the object"),
    )
    .arg(
        Arg::with_name(KEY_ARG)
            .long("key")
            .short("k")
            .value_name("key")
            .requires(BUCKET_ARG)
            .help("Object key within the bucket"),
    )
    .arg(
        Arg::with_name(ARTIFACT_ARG)
            .long("artifact")
            .value_name("json")
            .conflicts_with_all(&[BUCKET_ARG, KEY_ARG])
            .help("Artifact descriptor as JSON ('{\"bucket\": \"b\", \"key\": \"k\"}')"),
    )
    .arg(
        Arg::with_name(PATH_ARG)
            .required(true)
            .value_name("path")
            .help("Local file path"),
    )
}

fn main() {
    let load = artifact_args(
        SubCommand::with_name(LOAD_COMMAND).about("Download an artifact from H3 storage"),
    );

    let save = artifact_args(
        SubCommand::with_name(SAVE_COMMAND).about("Upload an artifact into H3 storage"),
    );

    let app = App::new("H3 artifact transfer CLI")
        .bin_name("h3-artifact")
        .version("0.1")
        .setting(AppSettings::ColorAuto)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::StrictUtf8)
        .arg(
            Arg::with_name(STORAGE_ARG)
                .long("storage")
                .short("s")
                .value_name("uri")
                .env(STORAGE_URI_ENV)
                .help("H3 storage endpoint passed to every h3cli invocation")
                .global(true),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long("verbose")
                .short("v")
                .help("Enable debug output")
                .global(true),
        )
        .subcommand(load)
        .subcommand(save)
        .get_matches();

    if let Err(err) = run(&app) {
        error!("{}", err);
        process::exit(1);
    }
}
