pub mod models;

pub use models::{create_model, DummyModel, GeminiModel};

pub mod prelude {
    pub use crate::models::create_model;
    pub use ns_core::{Error, Result, TextGenerator};
}
