pub mod detail_view;
pub mod help_overlay;
pub mod nav_bar;
pub mod resource_list;
