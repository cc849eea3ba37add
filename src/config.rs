use std::env;

use crate::Error;

const STORAGE_URI_ENV: &str = "H3_STORAGE_URI";

#[derive(Debug)]
pub struct Config {
    pub storage_uri: String,
    pub verbose: bool,
}

impl Config {
    pub fn new<S>(storage_uri: S) -> Self
    where
        S: Into<String>,
    {
        Config {
            storage_uri: storage_uri.into(),
            verbose: false,
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        match env::var(STORAGE_URI_ENV) {
            Ok(uri) => Ok(Config::new(uri)),
            Err(_) => {
                let err = format!("Environment variable '{}' wasn't found", STORAGE_URI_ENV);
                Err(Error::config(err))
            }
        }
    }

    pub fn verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
}
