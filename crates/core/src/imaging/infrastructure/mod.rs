pub mod http_image_reader;
pub mod image_file_reader;
pub mod image_file_writer;
pub mod reader_factory;
