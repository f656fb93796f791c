pub mod broadcast_listener;
