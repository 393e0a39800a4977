pub mod canvas;
pub(crate) mod composite;
pub mod corner;
pub mod deck;
pub mod execute;
pub mod rounded_rect;
