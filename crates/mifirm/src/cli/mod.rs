pub mod app;
pub mod extract;
pub mod interactive;
pub mod latest;
pub mod links;
pub mod ls;

#[cfg(test)]
pub mod fixture;
