pub mod envelope;
pub mod settings;
