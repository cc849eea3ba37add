use std::fmt::Debug;
use std::path::Path;

use crate::location::ArtifactLocation;
use crate::logger::{Log, StdLog};
use crate::process::{Invocation, Runner, SystemRunner};
use crate::Error;

const H3_CLI_PROGRAM: &str = "h3cli";
const STORAGE_OPT: &str = "--storage";
const COPY_COMMAND: &str = "cp";

pub trait ArtifactDriver: Debug {
    fn load(&self, artifact: &ArtifactLocation, path: &Path) -> Result<(), Error>;
    fn save(&self, path: &Path, artifact: &ArtifactLocation) -> Result<(), Error>;
}

#[derive(Debug)]
pub struct H3Driver {
    storage_uri: String,
    runner: Box<dyn Runner>,
    log: Box<dyn Log>,
}

impl H3Driver {
    pub fn new<S>(storage_uri: S) -> Self
    where
        S: Into<String>,
    {
        H3Driver::with(
            storage_uri,
            Box::new(SystemRunner::default()),
            Box::new(StdLog::default()),
        )
    }

    pub fn with<S>(storage_uri: S, runner: Box<dyn Runner>, log: Box<dyn Log>) -> Self
    where
        S: Into<String>,
    {
        H3Driver {
            storage_uri: storage_uri.into(),
            runner,
            log,
        }
    }

    fn copy(&self, source: String, destination: String) -> Invocation {
        let args = vec![
            STORAGE_OPT.to_string(),
            self.storage_uri.clone(),
            COPY_COMMAND.to_string(),
            source,
            destination,
        ];

        Invocation::new(H3_CLI_PROGRAM, args)
    }

    fn execute(&self, invocation: Invocation) -> Result<(), Error> {
        self.log.info(&format!("H3 running: {}", invocation));

        let capture = match self.runner.run(&invocation) {
            Ok(capture) => capture,
            Err(err) => {
                self.log.error(&err.to_string());
                self.log.info("H3 output: ");
                return Err(err);
            }
        };

        if capture.success() {
            self.log.info(&format!("H3 output: {}", capture.output));
            return Ok(());
        }

        let err = Error::execution(capture.status);
        self.log.error(&err.to_string());
        self.log.info(&format!("H3 output: {}", capture.output));

        Err(err)
    }
}

impl ArtifactDriver for H3Driver {
    fn load(&self, artifact: &ArtifactLocation, path: &Path) -> Result<(), Error> {
        self.log.info(&format!(
            "H3 load path: {}, bucket: {}, key: {}",
            path.display(),
            artifact.bucket,
            artifact.key
        ));

        let invocation = self.copy(artifact.locator(), path.display().to_string());
        self.execute(invocation)
    }

    fn save(&self, path: &Path, artifact: &ArtifactLocation) -> Result<(), Error> {
        self.log.info(&format!(
            "H3 save path: {}, bucket: {}, key: {}",
            path.display(),
            artifact.bucket,
            artifact.key
        ));

        let invocation = self.copy(path.display().to_string(), artifact.locator());
        self.execute(invocation)
    }
}
