pub mod sequential;

pub use sequential::Sequential;
