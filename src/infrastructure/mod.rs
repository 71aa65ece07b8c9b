pub mod identity;
pub mod observability;
pub mod persistence;
pub mod relay;
pub mod staging;
pub mod storage;
pub mod transcription;
