/// Title shown whenever no movie is open.
pub const APP_TITLE: &str = "usePopcorn";

pub fn movie_title(title: &str) -> String {
    format!("Movie | {}", title)
}

/// Document title while `movie` is open, or the app title once it is closed.
pub fn title_for(movie: Option<&str>) -> String {
    match movie {
        Some(title) => movie_title(title),
        None => APP_TITLE.to_string(),
    }
}

pub fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_title() {
        assert_eq!(movie_title("Interstellar"), "Movie | Interstellar");
    }

    #[test]
    fn test_title_reverts_when_closed() {
        assert_eq!(title_for(Some("Interstellar")), "Movie | Interstellar");
        assert_eq!(title_for(None), "usePopcorn");
    }
}
