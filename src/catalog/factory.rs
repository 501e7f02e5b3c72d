use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::model::Catalog;
use crate::core::domain::Configuration;

// title, author, genre
const STARTER_BOOKS: [(&str, &str, &str); 5] = [
    ("How to code", "Kai Johnson", "Fiction"),
    ("Rats Rats Rats", "Ezry Roukema", "Fantasy"),
    ("Musicals", "Alex Hamilton", "Non-Fiction"),
    ("Video Game", "Dylan Noriega", "Sci-Fi"),
    ("How to be a surfer", "Justin Ferrari", "Non-Fiction"),
];

pub fn create_catalog(config: &Configuration) -> Catalog {
    let mut catalog = Catalog::new();
    for (title, author, genre) in STARTER_BOOKS {
        catalog.add_book(BookEntity::new(title, author, genre));
    }
    info!(branch = %config.branch_id, books = catalog.len(), "catalog seeded");
    catalog
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::catalog::factory::create_catalog;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_seed_starter_books() {
        let catalog = create_catalog(&Configuration::new("test"));
        assert_eq!(5, catalog.len());
        assert!(catalog.all_books().all(|b| b.is_available()));
        assert_eq!(4, catalog.genres().count());
    }

    #[test]
    fn test_should_track_non_fiction_checkouts() {
        let mut catalog = create_catalog(&Configuration::new("test"));
        let titles: Vec<_> = catalog.genre_view("Non-Fiction").map(|b| b.title().to_string()).collect();
        assert_eq!(vec!["Musicals", "How to be a surfer"], titles);

        catalog.find_by_title_mut("Musicals").expect("find").checkout().expect("checkout");
        let titles: Vec<_> = catalog.genre_view("Non-Fiction").map(|b| b.title().to_string()).collect();
        assert_eq!(vec!["How to be a surfer"], titles);
    }
}
