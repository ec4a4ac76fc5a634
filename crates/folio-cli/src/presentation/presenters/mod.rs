mod check;
mod detail;
mod gallery;
mod init;

pub use check::present_check;
pub use detail::{present_detail, present_show};
pub use gallery::{present_card, present_gallery, present_list, MAX_TOOL_BADGES};
pub use init::present_init_result;
