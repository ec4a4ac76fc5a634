pub mod check;
pub mod detail;
pub mod gallery;
pub mod init;

pub use check::CheckView;
pub use detail::{DetailView, SectionBodyView};
pub use gallery::{CardView, GalleryView};
pub use init::InitView;
