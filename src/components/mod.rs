pub mod host_view;
pub mod overlay_bar;
