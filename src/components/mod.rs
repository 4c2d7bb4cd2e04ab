pub mod api_key_form;
pub mod movie_details;
pub mod movie_list;
pub mod nav_bar;
pub mod star_rating;
pub mod status;
pub mod toggle_box;
pub mod watched_list;
pub mod watched_summary;
