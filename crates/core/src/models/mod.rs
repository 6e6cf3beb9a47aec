pub mod genre;
pub mod movie;
pub mod object_id;

pub use genre::*;
pub use movie::*;
pub use object_id::*;
