//! Assembled pages. The homepage is the only page this crate renders; the
//! documentation pages it links to live on the external docs router.

mod home;

pub use home::HomePage;
