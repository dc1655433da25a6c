pub mod logo;
pub mod selectable_list;
pub mod util;
