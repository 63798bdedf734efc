//! Use-Cases: die Effekte, die Karte und Registry mit dem State abgleichen.

pub mod camera_follow;
pub mod direction_overlay;
pub mod layer_sync;
