pub mod file_creation_error;
pub mod file_creator;
pub mod json_format;
