pub mod genres;
pub mod movies;

pub use genres::GenreService;
pub use movies::MovieService;
