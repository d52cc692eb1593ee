pub mod errors;
pub mod income_statement;
pub mod logging;
