pub mod config;
pub mod models;
pub mod repo;
pub mod seed;

mod memory;
pub use memory::MemoryStore;

pub use config::FormsConfig;
pub use models::{
    Disorder, Gender, ParseOptionError, Patient, RecordId, Stored, Student, Workspace,
    WorkspaceTemplate,
};
pub use repo::RecordStore;
pub use seed::{SeedData, SeedError};
