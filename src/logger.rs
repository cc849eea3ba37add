use std::fmt::Debug;

use log::{error, info};

pub trait Log: Debug {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Default)]
pub struct StdLog;

impl Log for StdLog {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}
