mod local_upload_spool;

pub use local_upload_spool::LocalUploadSpool;
