pub(super) mod api;
pub(super) mod pages;
