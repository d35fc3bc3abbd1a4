pub mod block_cards;
pub mod placeholder;
pub mod exam_pass;
pub mod pager;
pub mod seat_map;
pub mod server_status;
pub mod sidebar;
pub mod tabs;
