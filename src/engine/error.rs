use crate::dataset::DatasetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("Worker {0} panicked during scan")]
    WorkerPanicked(usize),
    #[error("Worker {0} closed its channel before sending a table")]
    ChannelClosed(usize),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
