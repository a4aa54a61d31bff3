pub mod deal_card;
pub mod deal_list;
pub mod header;
pub mod nav_menu;
pub mod page_section;
pub mod sidebar;
