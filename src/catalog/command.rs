pub mod browse_genre_cmd;
