use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::{self, TempDir};

use crate::errors::ResultExt;
use crate::logger::Log;
use crate::process::{Capture, Invocation, Runner};
use crate::Error;

#[derive(Debug)]
pub struct DirGuard(Option<TempDir>);

impl AsRef<Path> for DirGuard {
    fn as_ref(&self) -> &Path {
        match self.0 {
            Some(ref temp) => temp.path(),
            None => panic!("using after close"),
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        if let Some(dir) = self.0.take() {
            dir.close().expect("cannot close temporary dir")
        }
    }
}

pub fn temp_dir() -> DirGuard {
    let b = tempfile::Builder::new();
    let dir = b.tempdir().unwrap();
    DirGuard(Some(dir))
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Exit(i32, &'static str),
    NoLaunch,
}

#[derive(Debug, Clone)]
pub struct ScriptedRunner {
    outcome: Outcome,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl ScriptedRunner {
    pub fn exits(status: i32, output: &'static str) -> Self {
        ScriptedRunner {
            outcome: Outcome::Exit(status, output),
            invocations: Arc::default(),
        }
    }

    pub fn never_launches() -> Self {
        ScriptedRunner {
            outcome: Outcome::NoLaunch,
            invocations: Arc::default(),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<Capture, Error> {
        self.invocations.lock().unwrap().push(invocation.clone());

        match self.outcome {
            Outcome::Exit(status, output) => Ok(Capture {
                status: Some(status),
                output: output.to_string(),
            }),
            Outcome::NoLaunch => {
                let io = IoError::new(IoErrorKind::NotFound, "no such file or directory");
                let failed: Result<Capture, IoError> = Err(io);
                failed.launch_err(invocation.program())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    entries: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        MemoryLog::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.with_severity(Severity::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.with_severity(Severity::Error)
    }

    fn with_severity(&self, severity: Severity) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(it, _)| *it == severity)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Log for MemoryLog {
    fn info(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((Severity::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((Severity::Error, message.to_string()));
    }
}
