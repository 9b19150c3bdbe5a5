pub mod scanner;
pub mod upload;
pub mod workspace;
