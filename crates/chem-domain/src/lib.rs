// chem-domain library entry point
pub mod bag;
pub mod error;
pub mod molecule;
pub use bag::Bag;
pub use error::DomainError;
pub use molecule::Molecule;
