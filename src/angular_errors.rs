use thiserror::Error;

use crate::catalog::catalog_reader::ParseRecordError;

#[derive(Error, Debug)]
pub enum AngularError {
    #[error("Unable to open catalog file {path}: {source}")]
    CatalogOpen {
        path: String,
        source: std::io::Error,
    },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV reader error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed record at line {line}: {error}")]
    MalformedRecord { line: u64, error: ParseRecordError },

    #[error("Catalog exceeds the configured maximum of {max} records")]
    CatalogTooLarge { max: usize },

    #[error("Unable to allocate {what}: {reason}")]
    AllocationFailed { what: &'static str, reason: String },

    #[error("Invalid worker count: {0} (at least one worker is required)")]
    InvalidWorkerCount(i64),

    #[error("Invalid run parameter: {0}")]
    InvalidRunParameter(String),

    #[error("Unable to spawn worker {worker_id}: {source}")]
    WorkerSpawn {
        worker_id: usize,
        source: std::io::Error,
    },

    #[error("Worker {worker_id} panicked: {message}")]
    WorkerPanicked { worker_id: usize, message: String },

    #[error("Non-finite angular distance between rows {row} and {column}")]
    NonFiniteDistance { row: usize, column: usize },
}

impl PartialEq for AngularError {
    fn eq(&self, other: &Self) -> bool {
        use AngularError::*;
        match (self, other) {
            (CatalogOpen { path: a, .. }, CatalogOpen { path: b, .. }) => a == b,

            // Not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            (
                MalformedRecord { line: la, error: ea },
                MalformedRecord { line: lb, error: eb },
            ) => la == lb && ea == eb,
            (CatalogTooLarge { max: a }, CatalogTooLarge { max: b }) => a == b,
            (AllocationFailed { what: a, .. }, AllocationFailed { what: b, .. }) => a == b,
            (InvalidWorkerCount(a), InvalidWorkerCount(b)) => a == b,
            (InvalidRunParameter(a), InvalidRunParameter(b)) => a == b,
            (WorkerSpawn { worker_id: a, .. }, WorkerSpawn { worker_id: b, .. }) => a == b,
            (
                WorkerPanicked {
                    worker_id: ia,
                    message: ma,
                },
                WorkerPanicked {
                    worker_id: ib,
                    message: mb,
                },
            ) => ia == ib && ma == mb,
            (
                NonFiniteDistance { row: ra, column: ca },
                NonFiniteDistance { row: rb, column: cb },
            ) => ra == rb && ca == cb,

            _ => false,
        }
    }
}
