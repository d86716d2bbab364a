pub mod errors;
pub mod db;
pub mod account;
pub mod station;

#[cfg(test)]
mod tests;
