use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no endpoints found in the given config sources")]
    NoEndpoints,

    #[error("endpoint #{0} finished without a result")]
    MissingResult(usize),
}
