pub mod check;
pub mod common;
pub mod detail;
pub mod gallery;
pub mod init;
pub mod result;

pub use check::{CategoryCountViewModel, CheckViewModel, FallbackViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use detail::{DetailViewModel, LinkViewModel, SectionBodyViewModel, SectionTabViewModel};
pub use gallery::{FilterTabViewModel, GalleryViewModel, ProjectCardViewModel};
pub use init::{ConfigStatus, InitResultViewModel};
pub use result::CommandResultViewModel;
