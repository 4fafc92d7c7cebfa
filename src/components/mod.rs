pub mod traversal_player;
