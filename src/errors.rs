use std::error::Error as StdError;
use std::fmt::{self, Display};

type Cause = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug)]
pub enum ErrorKind {
    Launch(String),
    Execution(Option<i32>),
    Config,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    cause: Option<Cause>,
}

impl Error {
    pub fn launch<S, E>(program: S) -> impl FnOnce(E) -> Error
    where
        S: Into<String>,
        E: Into<Cause>,
    {
        let program = program.into();
        |err: E| Error {
            kind: ErrorKind::Launch(program),
            cause: Some(err.into()),
        }
    }

    pub fn execution(status: Option<i32>) -> Error {
        Error {
            kind: ErrorKind::Execution(status),
            cause: None,
        }
    }

    pub fn config<E>(err: E) -> Error
    where
        E: Into<Cause>,
    {
        Error {
            kind: ErrorKind::Config,
            cause: Some(err.into()),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match &self.kind {
            ErrorKind::Launch(program) => write!(f, "Cannot run '{}'", program)?,
            ErrorKind::Execution(Some(code)) => write!(f, "Process exited with status {}", code)?,
            ErrorKind::Execution(None) => write!(f, "Process terminated by signal")?,
            ErrorKind::Config => write!(f, "Configuration error")?,
        };

        let mut cause = self.source();
        while let Some(err) = cause {
            write!(f, "; {}", err)?;
            cause = err.source()
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(ref err) = self.cause {
            return Some(err.as_ref());
        }
        None
    }
}

pub trait ResultExt<T, E> {
    fn launch_err<S>(self, program: S) -> Result<T, Error>
    where
        S: Into<String>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<Cause>,
{
    fn launch_err<S>(self, program: S) -> Result<T, Error>
    where
        S: Into<String>,
    {
        self.map_err(Error::launch(program))
    }
}
