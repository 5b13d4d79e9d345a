pub mod alvya;
pub mod alvyad;
pub mod completion;
