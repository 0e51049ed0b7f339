pub mod player_server;
