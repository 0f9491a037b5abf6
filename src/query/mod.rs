pub mod ast;
pub mod matcher;
pub mod executor;
pub mod filter;
