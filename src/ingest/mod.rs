pub mod decode;
pub mod parser;
pub mod age;
pub mod loader;
pub mod discovery;
