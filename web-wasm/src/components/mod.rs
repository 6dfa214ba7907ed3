pub mod header;
pub mod movie_detail;
pub mod movies_row;
pub mod search_movies;
