use std::fmt::{self, Debug, Display};
use std::process::Command;

use crate::errors::ResultExt;
use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new<S>(program: S, args: Vec<String>) -> Self
    where
        S: Into<String>,
    {
        Invocation {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Capture {
    pub status: Option<i32>,
    pub output: String,
}

impl Capture {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

// Err means the process never started; a started-but-failed tool is an
// Ok(Capture) with a non-zero status.
pub trait Runner: Debug {
    fn run(&self, invocation: &Invocation) -> Result<Capture, Error>;
}

#[derive(Debug, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<Capture, Error> {
        let out = Command::new(invocation.program())
            .args(invocation.args())
            .output()
            .launch_err(invocation.program())?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        if !out.stderr.is_empty() {
            output.push_str(String::from_utf8_lossy(&out.stderr).as_ref());
        }

        Ok(Capture {
            status: out.status.code(),
            output,
        })
    }
}
