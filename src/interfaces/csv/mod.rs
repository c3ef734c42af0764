pub mod record_writer;
pub mod records;
pub mod request_reader;
