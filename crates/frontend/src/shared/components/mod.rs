pub mod degraded_banner;
pub mod modal_frame;
pub mod pagination_controls;
pub mod search_box;
